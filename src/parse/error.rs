use derive_more::{Constructor, Display};

/// A line of a point cloud that could not be decoded into an `(x, y, z)` triple.
#[derive(Display, Debug, Clone, PartialEq, Constructor)]
#[display(fmt = "malformed record on line {line}: {fault}")]
pub struct MalformedRecord {
    /// 1-based physical line number in the source file
    pub line: usize,
    pub fault: RecordFault,
}

impl std::error::Error for MalformedRecord {}

#[derive(Display, Debug, Clone, PartialEq)]
pub enum RecordFault {
    #[display(fmt = "expected 3 whitespace separated fields, found {found}")]
    MissingFields { found: usize },
    #[display(fmt = "field {field} (`{token}`) is not a floating point number")]
    InvalidFloat { field: usize, token: String },
    #[display(fmt = "line is not valid UTF-8")]
    InvalidUtf8,
}

/// A section file that does not follow the layout written by
/// [`write_section`](`crate::write_section()`).
#[derive(Display, Debug, Clone, PartialEq, Constructor)]
#[display(fmt = "malformed section file on line {line}: {fault}")]
pub struct MalformedSection {
    pub line: usize,
    pub fault: SectionFault,
}

impl std::error::Error for MalformedSection {}

#[derive(Display, Debug, Clone, PartialEq)]
pub enum SectionFault {
    #[display(fmt = "unexpected marker. Expected `{expected}`, got `{found}`")]
    UnexpectedMarker { expected: String, found: String },
    #[display(fmt = "value `{token}` appears before any `#` marker")]
    ValueOutsideBlock { token: String },
    #[display(fmt = "file ended before the `{expected}` marker")]
    MissingMarker { expected: String },
    #[display(fmt = "`{token}` is not a valid number")]
    InvalidNumber { token: String },
    #[display(fmt = "count block `{marker}` must hold exactly one value, found {found}")]
    CountBlock { marker: String, found: usize },
    #[display(fmt = "expected {expected} z values for the x/y blocks, found {found}")]
    ShapeMismatch { expected: usize, found: usize },
    #[display(fmt = "line is not valid UTF-8")]
    InvalidUtf8,
}
