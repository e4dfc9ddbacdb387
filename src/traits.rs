//! # Traits
//!
//! General purpose traits used to lay extraction results out in a section file.
//! [`Series`] writes a block of values one per line and [`WriteSection`] writes
//! a complete file, markers and headers included.

use ndarray::Array2;
use std::io::Write;

/// A sequence of floats written one value per line.
///
/// Values are formatted with `ryu`, the shortest representation that reads
/// back to the same `f64`.
pub trait Series {
    /// write every value of the series, each followed by a newline
    fn write_lines<W: Write>(&self, writer: &mut W) -> Result<(), std::io::Error>;
}

impl Series for [f64] {
    fn write_lines<W: Write>(&self, writer: &mut W) -> Result<(), std::io::Error> {
        let mut buffer = ryu::Buffer::new();

        for value in self {
            writer.write_all(buffer.format(*value).as_bytes())?;
            writer.write_all(b"\n")?;
        }

        Ok(())
    }
}

impl Series for Vec<f64> {
    fn write_lines<W: Write>(&self, writer: &mut W) -> Result<(), std::io::Error> {
        self.as_slice().write_lines(writer)
    }
}

// row major over the logical indices, whatever the memory layout
impl Series for Array2<f64> {
    fn write_lines<W: Write>(&self, writer: &mut W) -> Result<(), std::io::Error> {
        let mut buffer = ryu::Buffer::new();

        for value in self.iter() {
            writer.write_all(buffer.format(*value).as_bytes())?;
            writer.write_all(b"\n")?;
        }

        Ok(())
    }
}

/// Describes how an extraction result is laid out in a section file.
///
/// Implemented for [`Section1D`](`crate::Section1D`),
/// [`Section2D`](`crate::Section2D`) and [`Extraction`](`crate::Extraction`);
/// see [`write_section`](`crate::write_section()`) for the layouts.
pub trait WriteSection {
    fn write_section<W: Write>(&self, writer: &mut W) -> Result<(), std::io::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortest_round_trip_formatting() {
        let mut out = Vec::new();
        vec![0., 1.5, -2., 0.1, 1e21].write_lines(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "0.0\n1.5\n-2.0\n0.1\n1e21\n");

        let parsed: Vec<f64> = text.lines().map(|line| line.parse().unwrap()).collect();
        assert_eq!(parsed, vec![0., 1.5, -2., 0.1, 1e21]);
    }

    #[test]
    fn matrix_is_written_row_major() {
        // column major storage must not change the written order
        let matrix = Array2::from_shape_vec((2, 3), vec![0., 1., 2., 3., 4., 5.])
            .unwrap()
            .reversed_axes();

        let mut out = Vec::new();
        matrix.write_lines(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "0.0\n3.0\n1.0\n4.0\n2.0\n5.0\n");
    }
}
