use crate::parse::PointCloud;
use crate::prelude::*;

/// A point cloud reshaped onto its regular grid.
///
/// `x_axis` holds the `nx` coordinates along `x`, `y_axis` the `ny` coordinates
/// along `y`, and `z` is an `nx x ny` matrix addressed `z[[x_index, y_index]]`.
///
/// ## Record ordering
///
/// The reshape trusts the source to be sorted with `x` varying fastest, then
/// `y`: record `i` is the point at `x_axis[i % nx]`, `y_axis[i / nx]`. A file
/// sorted any other way produces a wrong grid without an error, unless
/// [`Grid::verify_order`] is run against it.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    shape: GridShape,
    x_axis: Vec<f64>,
    y_axis: Vec<f64>,
    z: Array2<f64>,
}

impl Grid {
    /// Reshape the first `shape.len()` records of `cloud` into a grid.
    ///
    /// Records past `shape.len()` are ignored; the square convention relies on
    /// this to drop the remainder of a count that is not a perfect square.
    pub fn assemble(cloud: &PointCloud, shape: GridShape) -> Result<Self, Error> {
        let GridShape { nx, ny } = shape;

        if shape.is_empty() || cloud.len() < shape.len() {
            return Err(Error::DimensionMismatch {
                nx,
                ny,
                records: cloud.len(),
            });
        }

        let records = &cloud[..shape.len()];

        let x_axis: Vec<f64> = records[..nx].iter().map(|record| record.x).collect();
        let y_axis: Vec<f64> = records.iter().step_by(nx).map(|record| record.y).collect();
        let z_stream: Vec<f64> = records.iter().map(|record| record.z).collect();

        // one row of `nx` values per `y` coordinate, then index by `x` first
        let z = Array2::from_shape_vec((ny, nx), z_stream)
            .map_err(|_| Error::DimensionMismatch {
                nx,
                ny,
                records: cloud.len(),
            })?
            .reversed_axes();

        debug!(nx, ny, "assembled grid");

        Ok(Self {
            shape,
            x_axis,
            y_axis,
            z,
        })
    }

    /// Check that `cloud` is sorted the way [`Grid::assemble`] assumed: every
    /// record `i` must sit at `x_axis[i % nx]` and `y_axis[i / nx]`.
    ///
    /// Coordinates are compared exactly, since they are read from the same text.
    pub fn verify_order(&self, cloud: &PointCloud) -> Result<(), Error> {
        let nx = self.shape.nx;

        for (idx, record) in cloud.iter().take(self.shape.len()).enumerate() {
            let expected_x = self.x_axis[idx % nx];
            let expected_y = self.y_axis[idx / nx];

            if record.x != expected_x {
                return Err(Error::OrderViolation {
                    record: idx + 1,
                    axis: Direction::X,
                    expected: expected_x,
                    found: record.x,
                });
            }

            if record.y != expected_y {
                return Err(Error::OrderViolation {
                    record: idx + 1,
                    axis: Direction::Y,
                    expected: expected_y,
                    found: record.y,
                });
            }
        }

        Ok(())
    }

    pub fn shape(&self) -> GridShape {
        self.shape
    }

    pub fn x_axis(&self) -> &[f64] {
        &self.x_axis
    }

    pub fn y_axis(&self) -> &[f64] {
        &self.y_axis
    }

    /// coordinates along `direction`
    pub fn axis(&self, direction: Direction) -> &[f64] {
        match direction {
            Direction::X => &self.x_axis,
            Direction::Y => &self.y_axis,
        }
    }

    /// elevation matrix addressed `[x_index, y_index]`
    pub fn z(&self) -> &Array2<f64> {
        &self.z
    }
}
