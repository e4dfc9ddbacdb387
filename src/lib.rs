#![doc = include_str!("../README.md")]

mod convert;
mod extract;
mod grid;
mod options;
pub mod parse;
pub mod prelude;
mod shape;
mod traits;
mod utils;
mod write_section;

pub use convert::{convert_rect_1d, convert_rect_2d, convert_square_1d, convert_square_2d};

pub use extract::{extract_1d, extract_2d};
pub use extract::{Extraction, Section1D, Section2D};
pub use grid::Grid;
pub use options::{ConvertOptions, Direction};
pub use shape::{GridShape, SquareInference, LEGACY_SECTION_BOUND};

pub use traits::{Series, WriteSection};
pub use write_section::{write_section, write_section_file};

pub use parse::{parse_records, read_point_cloud};
pub use parse::read_section;
pub use parse::{PointCloud, RawRecord};

pub use ndarray;

use std::path::PathBuf;

/// general purpose error enumeration for possible causes of failure.
///
/// Everything except `MalformedRecord` and the io variants is detected before
/// the source is read.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid direction `{value}`, expected `x` or `y`")]
    InvalidDirection { value: String },
    #[error("section {section} along {direction} is out of range, expected 1..={bound}")]
    SectionOutOfRange {
        section: usize,
        bound: usize,
        direction: Direction,
    },
    #[error("stride must be at least 1")]
    InvalidStride,
    #[error("grid dimensions must be positive, got nx = {nx}, ny = {ny}")]
    InvalidDimensions { nx: usize, ny: usize },
    #[error("grid of {nx} x {ny} points does not match the {records} records in the source")]
    DimensionMismatch {
        nx: usize,
        ny: usize,
        records: usize,
    },
    #[error("source contains no records")]
    EmptySource,
    #[error("{records} records do not form a square grid (largest side is {side})")]
    NotSquare { records: usize, side: usize },
    #[error("record {record} breaks the x-fastest ordering: expected {axis} = {expected}, found {found}")]
    OrderViolation {
        record: usize,
        axis: Direction,
        expected: f64,
        found: f64,
    },
    #[error("{0}")]
    MalformedRecord(#[from] parse::MalformedRecord),
    #[error("{0}")]
    MalformedSection(#[from] parse::MalformedSection),
    #[error("could not access `{}`: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("An io error occured: `{0}`")]
    Io(#[from] std::io::Error),
}
