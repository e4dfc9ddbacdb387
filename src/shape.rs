//! # Grid shapes
//!
//! A [`GridShape`] is the `(nx, ny)` pair a flat record stream is reshaped into.
//! It is either inferred from the record count of a square source or supplied
//! by the caller for a rectangular one.
//!
//! The section bound also depends on the convention. Rectangular sources are
//! checked against the real grid (`ny` for [`Direction::X`], `nx` for
//! [`Direction::Y`]). Square 1D conversions are first checked against the fixed
//! [`LEGACY_SECTION_BOUND`] before the source is read, and again against the
//! inferred grid once the shape is known.

use crate::prelude::*;

/// Upper section bound applied to square 1D conversions before the source is read.
pub const LEGACY_SECTION_BOUND: usize = 1000;

/// Logical dimensions of a grid: `nx` values along `x`, `ny` along `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Constructor)]
pub struct GridShape {
    pub nx: usize,
    pub ny: usize,
}

/// The result of inferring a square shape from a record count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareInference {
    pub shape: GridShape,
    /// trailing records that do not fit in the `side * side` grid
    pub discarded: usize,
}

impl SquareInference {
    /// `true` when the record count was a perfect square
    pub fn is_exact(&self) -> bool {
        self.discarded == 0
    }
}

impl GridShape {
    /// Infer `nx = ny = floor(sqrt(records))`.
    ///
    /// Records past `nx * ny` are reported in [`SquareInference::discarded`]
    /// and are left out of the grid.
    pub fn infer_square(records: usize) -> Result<SquareInference, Error> {
        if records == 0 {
            return Err(Error::EmptySource);
        }

        let side = integer_sqrt(records);
        let shape = GridShape::new(side, side);

        Ok(SquareInference {
            shape,
            discarded: records - shape.len(),
        })
    }

    /// caller supplied dimensions, both must be positive and `nx * ny` must
    /// fit in a `usize`
    pub fn explicit(nx: usize, ny: usize) -> Result<Self, Error> {
        if nx == 0 || ny == 0 || nx.checked_mul(ny).is_none() {
            return Err(Error::InvalidDimensions { nx, ny });
        }

        Ok(GridShape::new(nx, ny))
    }

    /// total number of grid points, saturating at `usize::MAX`
    pub fn len(&self) -> usize {
        self.nx.saturating_mul(self.ny)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fails with `DimensionMismatch` unless `records == nx * ny`
    pub fn check_records(&self, records: usize) -> Result<(), Error> {
        if self.nx.checked_mul(self.ny) != Some(records) {
            return Err(Error::DimensionMismatch {
                nx: self.nx,
                ny: self.ny,
                records,
            });
        }

        Ok(())
    }

    /// number of cross sections available along `direction`
    pub fn section_bound(&self, direction: Direction) -> usize {
        match direction {
            Direction::X => self.ny,
            Direction::Y => self.nx,
        }
    }

    /// length of the series walked when extracting along `direction`
    pub fn axis_len(&self, direction: Direction) -> usize {
        match direction {
            Direction::X => self.nx,
            Direction::Y => self.ny,
        }
    }

    pub fn check_section(&self, direction: Direction, section: usize) -> Result<(), Error> {
        check_section_bound(section, self.section_bound(direction), direction)
    }
}

pub(crate) fn check_stride(stride: usize) -> Result<(), Error> {
    if stride == 0 {
        return Err(Error::InvalidStride);
    }

    Ok(())
}

/// `section` must lie in `1..=bound`
pub(crate) fn check_section_bound(
    section: usize,
    bound: usize,
    direction: Direction,
) -> Result<(), Error> {
    if section == 0 || section > bound {
        return Err(Error::SectionOutOfRange {
            section,
            bound,
            direction,
        });
    }

    Ok(())
}

fn integer_sqrt(n: usize) -> usize {
    let mut root = (n as f64).sqrt() as usize;

    // the float estimate can be off by one for large counts
    while root * root > n {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= n {
        root += 1;
    }

    root
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_square() {
        let inference = GridShape::infer_square(9).unwrap();

        assert!(inference.is_exact());
        assert_eq!(inference.shape, GridShape::new(3, 3));
    }

    #[test]
    fn truncation_is_reported() {
        let inference = GridShape::infer_square(11).unwrap();

        assert!(!inference.is_exact());
        assert_eq!(inference.shape, GridShape::new(3, 3));
        assert_eq!(inference.discarded, 2);
    }

    #[test]
    fn single_record_is_square() {
        let inference = GridShape::infer_square(1).unwrap();
        assert_eq!(inference.shape, GridShape::new(1, 1));
    }

    #[test]
    fn empty_source_has_no_shape() {
        assert!(matches!(GridShape::infer_square(0), Err(Error::EmptySource)));
    }

    #[test]
    fn integer_sqrt_near_squares() {
        for side in [1usize, 2, 10, 999, 4096, 94_906_265] {
            assert_eq!(integer_sqrt(side * side), side);
            assert_eq!(integer_sqrt(side * side - 1), side - 1);
            assert_eq!(integer_sqrt(side * side + 1), side);
        }
    }

    #[test]
    fn explicit_dimensions_must_be_positive() {
        assert!(matches!(
            GridShape::explicit(0, 4),
            Err(Error::InvalidDimensions { nx: 0, ny: 4 })
        ));
        assert!(matches!(
            GridShape::explicit(4, 0),
            Err(Error::InvalidDimensions { nx: 4, ny: 0 })
        ));
        assert_eq!(GridShape::explicit(4, 2).unwrap(), GridShape::new(4, 2));
    }

    #[test]
    fn oversized_dimensions_are_rejected() {
        let nx = usize::MAX / 2 + 1;

        assert!(matches!(
            GridShape::explicit(nx, 2),
            Err(Error::InvalidDimensions { ny: 2, .. })
        ));
        GridShape::explicit(usize::MAX, 1).unwrap();

        let shape = GridShape::new(nx, 2);
        assert_eq!(shape.len(), usize::MAX);
        assert!(matches!(
            shape.check_records(4),
            Err(Error::DimensionMismatch { records: 4, .. })
        ));
        assert!(shape.check_records(usize::MAX).is_err());
    }

    #[test]
    fn record_count_must_match() {
        let shape = GridShape::new(4, 2);

        shape.check_records(8).unwrap();
        assert!(matches!(
            shape.check_records(9),
            Err(Error::DimensionMismatch {
                nx: 4,
                ny: 2,
                records: 9
            })
        ));
    }

    #[test]
    fn section_bounds_follow_direction() {
        let shape = GridShape::new(4, 2);

        // along x there is one cross section per row of y
        shape.check_section(Direction::X, 1).unwrap();
        shape.check_section(Direction::X, 2).unwrap();
        assert!(matches!(
            shape.check_section(Direction::X, 3),
            Err(Error::SectionOutOfRange {
                section: 3,
                bound: 2,
                direction: Direction::X
            })
        ));

        shape.check_section(Direction::Y, 4).unwrap();
        assert!(shape.check_section(Direction::Y, 5).is_err());
        assert!(shape.check_section(Direction::Y, 0).is_err());
    }

    #[test]
    fn zero_stride_rejected() {
        assert!(matches!(check_stride(0), Err(Error::InvalidStride)));
        check_stride(1).unwrap();
    }
}
