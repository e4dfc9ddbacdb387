//! reading line oriented `x y z` point clouds and the section files written
//! by this crate
//!
//! A point cloud holds one record per line, each line carrying at least three
//! whitespace separated floating point fields. Only the first three fields are
//! read; anything after them is ignored. Lines holding nothing but whitespace
//! carry no record and are skipped, while line numbers reported in errors
//! always count every physical line of the file.
//!
//! The records are expected to be sorted with `x` varying fastest, then `y`.
//! Nothing here checks that ordering, see
//! [`Grid::verify_order`](`crate::Grid::verify_order`) for an opt-in check.

mod error;
mod section;

pub use error::{MalformedRecord, MalformedSection, RecordFault, SectionFault};
pub use section::{parse_section, read_section};

use crate::prelude::*;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// One decoded line of the source file
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RawRecord {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Every record of a source file, in file order.
#[derive(Debug, Clone, Default, PartialEq, Constructor, Deref, Into)]
pub struct PointCloud(Vec<RawRecord>);

impl FromIterator<RawRecord> for PointCloud {
    fn from_iter<I: IntoIterator<Item = RawRecord>>(iter: I) -> Self {
        PointCloud(iter.into_iter().collect())
    }
}

/// open the file at `path` and parse every record in it
pub fn read_point_cloud(path: &Path) -> Result<PointCloud, Error> {
    let file = File::open(path).map_err(|source| Error::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    let cloud = parse_records(BufReader::new(file)).map_err(|err| match err {
        Error::Io(source) => Error::FileAccess {
            path: path.to_path_buf(),
            source,
        },
        err => err,
    })?;
    debug!(path = %path.display(), records = cloud.len(), "read point cloud");

    Ok(cloud)
}

/// Parse every line of `reader` into a [`PointCloud`].
///
/// The first line that fails to decode aborts the whole parse. A line that is
/// not valid UTF-8 is reported as a [`MalformedRecord`] like any other.
pub fn parse_records<R: BufRead>(reader: R) -> Result<PointCloud, Error> {
    let mut records = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                return Err(MalformedRecord::new(idx + 1, RecordFault::InvalidUtf8).into());
            }
            Err(err) => return Err(err.into()),
        };

        if line.trim().is_empty() {
            continue;
        }

        records.push(parse_record(&line, idx + 1)?);
    }

    Ok(PointCloud(records))
}

fn parse_record(line: &str, line_number: usize) -> Result<RawRecord, MalformedRecord> {
    let mut fields = line.split_whitespace();
    let mut values = [0.0f64; 3];

    for (idx, value) in values.iter_mut().enumerate() {
        let token = fields.next().ok_or_else(|| {
            MalformedRecord::new(line_number, RecordFault::MissingFields { found: idx })
        })?;

        *value = token.parse().map_err(|_| {
            let fault = RecordFault::InvalidFloat {
                field: idx + 1,
                token: token.to_string(),
            };
            MalformedRecord::new(line_number, fault)
        })?;
    }

    let [x, y, z] = values;
    Ok(RawRecord { x, y, z })
}
