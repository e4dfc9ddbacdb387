use super::error::{MalformedSection, SectionFault};
use crate::prelude::*;
use crate::write_section::{COUNT_X_MARKER, COUNT_Y_MARKER, X_MARKER, Y_MARKER, Z_MARKER};

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

const LAYOUT_1D: [&str; 3] = [COUNT_X_MARKER, X_MARKER, Y_MARKER];
const LAYOUT_2D: [&str; 5] = [COUNT_X_MARKER, COUNT_Y_MARKER, X_MARKER, Y_MARKER, Z_MARKER];

/// Read in and parse an entire section file for a given path.
///
/// The declared counts are kept apart from the value blocks since they are
/// `floor(dimension / stride)` and may be one short of the series lengths.
pub fn read_section(path: &Path) -> Result<Extraction, Error> {
    let file_access = |source| Error::FileAccess {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(file_access)?;

    parse_section(BufReader::new(file)).map_err(|err| match err {
        Error::Io(source) => file_access(source),
        err => err,
    })
}

/// a `# ...` marker line and the value lines that follow it
struct Block {
    marker: String,
    line: usize,
    values: Vec<(usize, String)>,
}

/// Parse a section file. Blocks are located by their `#` markers, never by the
/// declared counts.
pub fn parse_section<R: BufRead>(reader: R) -> Result<Extraction, Error> {
    let mut blocks: Vec<Block> = Vec::new();
    let mut last_line = 0;

    for (idx, line) in reader.lines().enumerate() {
        let line_number = idx + 1;
        let line = match line {
            Ok(line) => line,
            Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                return Err(MalformedSection::new(line_number, SectionFault::InvalidUtf8).into());
            }
            Err(err) => return Err(err.into()),
        };
        last_line = line_number;
        let trimmed = line.trim();

        if trimmed.is_empty() {
            continue;
        }

        if trimmed.starts_with('#') {
            blocks.push(Block {
                marker: trimmed.to_string(),
                line: line_number,
                values: Vec::new(),
            });
            continue;
        }

        match blocks.last_mut() {
            Some(block) => block.values.push((line_number, trimmed.to_string())),
            None => {
                let fault = SectionFault::ValueOutsideBlock {
                    token: trimmed.to_string(),
                };
                return Err(MalformedSection::new(line_number, fault).into());
            }
        }
    }

    // the second marker tells the two layouts apart
    let is_2d = blocks
        .get(1)
        .map_or(false, |block| block.marker == COUNT_Y_MARKER);

    if is_2d {
        check_layout(&blocks, &LAYOUT_2D, last_line)?;

        let count_x = count_value(&blocks[0])?;
        let count_y = count_value(&blocks[1])?;
        let xs = float_values(&blocks[2])?;
        let ys = float_values(&blocks[3])?;
        let z_values = float_values(&blocks[4])?;

        let expected = xs.len() * ys.len();
        let found = z_values.len();
        let z = Array2::from_shape_vec((xs.len(), ys.len()), z_values).map_err(|_| {
            let fault = SectionFault::ShapeMismatch { expected, found };
            MalformedSection::new(blocks[4].line, fault)
        })?;

        Ok(Extraction::TwoD(Section2D::new(count_x, count_y, xs, ys, z)))
    } else {
        check_layout(&blocks, &LAYOUT_1D, last_line)?;

        let count = count_value(&blocks[0])?;
        let independent = float_values(&blocks[1])?;
        let dependent = float_values(&blocks[2])?;

        Ok(Extraction::OneD(Section1D::new(count, independent, dependent)))
    }
}

fn check_layout(blocks: &[Block], layout: &[&str], last_line: usize) -> Result<(), MalformedSection> {
    for (idx, expected) in layout.iter().enumerate() {
        match blocks.get(idx) {
            Some(block) if block.marker == *expected => continue,
            Some(block) => {
                let fault = SectionFault::UnexpectedMarker {
                    expected: expected.to_string(),
                    found: block.marker.clone(),
                };
                return Err(MalformedSection::new(block.line, fault));
            }
            None => {
                let fault = SectionFault::MissingMarker {
                    expected: expected.to_string(),
                };
                return Err(MalformedSection::new(last_line, fault));
            }
        }
    }

    if let Some(extra) = blocks.get(layout.len()) {
        let fault = SectionFault::UnexpectedMarker {
            expected: "end of file".to_string(),
            found: extra.marker.clone(),
        };
        return Err(MalformedSection::new(extra.line, fault));
    }

    Ok(())
}

fn count_value(block: &Block) -> Result<usize, MalformedSection> {
    match block.values.as_slice() {
        [(line, token)] => token.parse().map_err(|_| {
            let fault = SectionFault::InvalidNumber {
                token: token.clone(),
            };
            MalformedSection::new(*line, fault)
        }),
        values => {
            let fault = SectionFault::CountBlock {
                marker: block.marker.clone(),
                found: values.len(),
            };
            Err(MalformedSection::new(block.line, fault))
        }
    }
}

fn float_values(block: &Block) -> Result<Vec<f64>, MalformedSection> {
    block
        .values
        .iter()
        .map(|(line, token)| {
            token.parse().map_err(|_| {
                let fault = SectionFault::InvalidNumber {
                    token: token.clone(),
                };
                MalformedSection::new(*line, fault)
            })
        })
        .collect()
}
