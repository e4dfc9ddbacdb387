use crate::prelude::*;
use crate::traits::{Series, WriteSection};

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub(crate) const COUNT_X_MARKER: &str = "# Number of x values";
pub(crate) const COUNT_Y_MARKER: &str = "# Number of y values";
pub(crate) const X_MARKER: &str = "# x values";
pub(crate) const Y_MARKER: &str = "# y values";
pub(crate) const Z_MARKER: &str = "# z values";

/// Write an extraction result to a `Writer`.
///
/// A cross section ([`Section1D`]) is laid out as
///
/// ```text
/// # Number of x values
/// <count>
/// # x values
/// <independent series, one value per line>
/// # y values
/// <dependent series, one value per line>
/// ```
///
/// The `x`/`y` names are fixed by the format: `x values` is always the
/// independent series and `y values` the elevations, whichever direction the
/// section was taken along.
///
/// A sub-grid ([`Section2D`]) is laid out as
///
/// ```text
/// # Number of x values
/// <count_x>
/// # Number of y values
/// <count_y>
/// # x values
/// ...
/// # y values
/// ...
/// # z values
/// <z, row major with x as the outer index>
/// ```
///
/// Counts are written as they are stored in the section, the value blocks
/// always hold the complete series.
pub fn write_section<W, S>(writer: W, section: &S) -> Result<(), Error>
where
    W: Write,
    S: WriteSection + ?Sized,
{
    let mut writer = BufWriter::new(writer);
    section.write_section(&mut writer)?;
    writer.flush()?;

    Ok(())
}

/// Create (or truncate) the file at `path` and write `section` into it.
pub fn write_section_file<S>(path: &Path, section: &S) -> Result<(), Error>
where
    S: WriteSection + ?Sized,
{
    let file_access = |source| Error::FileAccess {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(file_access)?;
    let mut writer = BufWriter::new(file);

    section.write_section(&mut writer).map_err(file_access)?;
    writer.flush().map_err(file_access)?;

    Ok(())
}

fn write_marker<W: Write>(writer: &mut W, marker: &str) -> Result<(), std::io::Error> {
    writer.write_all(marker.as_bytes())?;
    writer.write_all(b"\n")
}

fn write_count<W: Write>(writer: &mut W, marker: &str, count: usize) -> Result<(), std::io::Error> {
    write_marker(writer, marker)?;
    writeln!(writer, "{}", count)
}

impl WriteSection for Section1D {
    fn write_section<W: Write>(&self, writer: &mut W) -> Result<(), std::io::Error> {
        write_count(writer, COUNT_X_MARKER, self.count)?;

        write_marker(writer, X_MARKER)?;
        self.independent.write_lines(writer)?;

        write_marker(writer, Y_MARKER)?;
        self.dependent.write_lines(writer)?;

        Ok(())
    }
}

impl WriteSection for Section2D {
    fn write_section<W: Write>(&self, writer: &mut W) -> Result<(), std::io::Error> {
        write_count(writer, COUNT_X_MARKER, self.count_x)?;
        write_count(writer, COUNT_Y_MARKER, self.count_y)?;

        write_marker(writer, X_MARKER)?;
        self.xs.write_lines(writer)?;

        write_marker(writer, Y_MARKER)?;
        self.ys.write_lines(writer)?;

        write_marker(writer, Z_MARKER)?;
        self.z.write_lines(writer)?;

        Ok(())
    }
}

impl WriteSection for Extraction {
    fn write_section<W: Write>(&self, writer: &mut W) -> Result<(), std::io::Error> {
        match self {
            Extraction::OneD(section) => section.write_section(writer),
            Extraction::TwoD(section) => section.write_section(writer),
        }
    }
}
