//! Common traits and types that are useful for working with `gridsection`
#![allow(unused_imports)]

pub use crate::extract::{Extraction, Section1D, Section2D};
pub use crate::grid::Grid;
pub use crate::options::{ConvertOptions, Direction};
pub use crate::parse::{PointCloud, RawRecord};
pub use crate::shape::GridShape;
pub use crate::traits::{Series, WriteSection};

pub(crate) use crate::extract::{extract_1d, extract_2d};
pub(crate) use crate::write_section::write_section_file;
pub(crate) use crate::Error;

pub(crate) use derive_more::{Constructor, Deref, From, Into};
pub(crate) use ndarray::{s, Array2};
pub(crate) use tracing::{debug, info, warn};
