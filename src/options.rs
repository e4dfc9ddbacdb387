//! caller facing configuration for a single conversion

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The axis a 1D cross section is taken along.
///
/// `X` walks the `x` axis at a fixed row (`section`) of the grid, `Y` walks the
/// `y` axis at a fixed column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    X,
    Y,
}

impl FromStr for Direction {
    type Err = Error;

    /// parse a direction from its single letter name, `"x"` or `"y"`
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "x" => Ok(Direction::X),
            "y" => Ok(Direction::Y),
            other => Err(Error::InvalidDirection {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::X => write!(f, "x"),
            Direction::Y => write!(f, "y"),
        }
    }
}

/// Parameters shared by every `convert_*` entry point.
///
/// The 2D conversions only read `stride`, `strict_shape` and `verify_order`.
/// Missing fields fall back to their defaults when deserialized, so a config
/// file only needs to name the values it changes:
///
/// ```
/// let options: gridsection::ConvertOptions = Default::default();
/// assert_eq!(options.stride, 1);
/// assert_eq!(options.section, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// sampling interval along every strided axis, at least 1
    pub stride: usize,
    /// axis the 1D cross section is taken along
    pub direction: Direction,
    /// 1-based index of the row or column on the axis that is not extracted
    pub section: usize,
    /// fail instead of truncating when a square source is not a perfect square
    pub strict_shape: bool,
    /// check that `x` varies fastest before trusting the reshape
    pub verify_order: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            stride: 1,
            direction: Direction::X,
            section: 1,
            strict_shape: false,
            verify_order: false,
        }
    }
}

impl ConvertOptions {
    pub fn with_stride(mut self, stride: usize) -> Self {
        self.stride = stride;
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_section(mut self, section: usize) -> Self {
        self.section = section;
        self
    }

    pub fn with_strict_shape(mut self, strict_shape: bool) -> Self {
        self.strict_shape = strict_shape;
        self
    }

    pub fn with_verify_order(mut self, verify_order: bool) -> Self {
        self.verify_order = verify_order;
        self
    }
}
