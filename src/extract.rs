//! # Extraction
//!
//! Pulls either a 1D cross section or a strided 2D sub-grid out of a [`Grid`].
//!
//! Every strided walk keeps the values at indices `0, stride, 2 * stride, ...`,
//! so `stride = 1` reproduces an axis unchanged. The results also carry the
//! count written to the section file headers, `floor(dimension / stride)`.
//! That count is one short of the series length whenever `stride` does not
//! divide the dimension; the series itself is never cut to match it.

use crate::prelude::*;
use crate::shape::check_stride;
use crate::utils;

/// A cross section: an independent coordinate series and the elevations
/// along it.
#[derive(Debug, Clone, PartialEq, Constructor)]
pub struct Section1D {
    /// count written to the `# Number of x values` header
    pub count: usize,
    pub independent: Vec<f64>,
    pub dependent: Vec<f64>,
}

/// A strided sub-grid. `z` is addressed `[x_index, y_index]`.
#[derive(Debug, Clone, PartialEq, Constructor)]
pub struct Section2D {
    pub count_x: usize,
    pub count_y: usize,
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    pub z: Array2<f64>,
}

/// Either kind of extraction result. This is also what
/// [`read_section`](`crate::read_section`) reads back out of a section file.
#[derive(Debug, Clone, PartialEq, From)]
pub enum Extraction {
    OneD(Section1D),
    TwoD(Section2D),
}

impl Extraction {
    pub fn into_1d(self) -> Option<Section1D> {
        match self {
            Extraction::OneD(section) => Some(section),
            Extraction::TwoD(_) => None,
        }
    }

    pub fn into_2d(self) -> Option<Section2D> {
        match self {
            Extraction::TwoD(section) => Some(section),
            Extraction::OneD(_) => None,
        }
    }
}

/// Extract the cross section `section` (1-based) along `direction`.
///
/// For [`Direction::X`] the independent series is the strided `x` axis and
/// the dependent series is column `section - 1` of `z`, strided along its
/// rows. For [`Direction::Y`] it is the strided `y` axis against row
/// `section - 1`, strided along its columns.
pub fn extract_1d(
    grid: &Grid,
    direction: Direction,
    stride: usize,
    section: usize,
) -> Result<Section1D, Error> {
    check_stride(stride)?;
    let shape = grid.shape();
    shape.check_section(direction, section)?;

    let step = utils::slice_step(shape.axis_len(direction), stride);
    let fixed = section - 1;

    let independent = utils::stride_values(grid.axis(direction), stride);
    let dependent = match direction {
        Direction::X => grid.z().slice(s![..;step, fixed]).to_vec(),
        Direction::Y => grid.z().slice(s![fixed, ..;step]).to_vec(),
    };
    let count = utils::header_count(shape.axis_len(direction), stride);

    debug!(
        %direction,
        section,
        stride,
        count,
        values = independent.len(),
        "extracted cross section"
    );

    Ok(Section1D::new(count, independent, dependent))
}

/// Stride both axes and the `z` matrix of `grid` by `stride`.
pub fn extract_2d(grid: &Grid, stride: usize) -> Result<Section2D, Error> {
    check_stride(stride)?;
    let GridShape { nx, ny } = grid.shape();
    let (step_x, step_y) = (utils::slice_step(nx, stride), utils::slice_step(ny, stride));

    let xs = utils::stride_values(grid.x_axis(), stride);
    let ys = utils::stride_values(grid.y_axis(), stride);
    let z = grid.z().slice(s![..;step_x, ..;step_y]).to_owned();

    let count_x = utils::header_count(nx, stride);
    let count_y = utils::header_count(ny, stride);

    debug!(stride, count_x, count_y, dim = ?z.dim(), "extracted sub-grid");

    Ok(Section2D::new(count_x, count_y, xs, ys, z))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::tests::cloud;
    use crate::utils::strided_len;

    fn grid(nx: usize, ny: usize, f: impl Fn(f64, f64) -> f64) -> Grid {
        Grid::assemble(&cloud(nx, ny, f), GridShape::new(nx, ny)).unwrap()
    }

    #[test]
    fn x_direction_walks_x_at_fixed_y() {
        let grid = grid(3, 3, |x, y| x + y);
        let section = extract_1d(&grid, Direction::X, 1, 2).unwrap();

        assert_eq!(section.count, 3);
        assert_eq!(section.independent, vec![0., 1., 2.]);
        assert_eq!(section.dependent, vec![1., 2., 3.]);
    }

    #[test]
    fn y_direction_walks_y_at_fixed_x() {
        let grid = grid(4, 3, |x, y| 10. * x + y);
        let section = extract_1d(&grid, Direction::Y, 1, 2).unwrap();

        assert_eq!(section.count, 3);
        assert_eq!(section.independent, vec![0., 1., 2.]);
        assert_eq!(section.dependent, vec![10., 11., 12.]);
    }

    #[test]
    fn rectangular_x_section() {
        let grid = grid(4, 3, |x, y| 10. * x + y);
        let section = extract_1d(&grid, Direction::X, 1, 3).unwrap();

        assert_eq!(section.independent, vec![0., 1., 2., 3.]);
        assert_eq!(section.dependent, vec![2., 12., 22., 32.]);
    }

    #[test]
    fn unit_stride_keeps_every_value() {
        let grid = grid(5, 4, |x, y| x * 7. - y);

        for (direction, section) in [(Direction::X, 4), (Direction::Y, 5)] {
            let extracted = extract_1d(&grid, direction, 1, section).unwrap();
            assert_eq!(extracted.independent, grid.axis(direction).to_vec());
            assert_eq!(extracted.dependent.len(), grid.axis(direction).len());
        }

        let full = extract_2d(&grid, 1).unwrap();
        assert_eq!(&full.z, grid.z());
        assert_eq!(full.xs, grid.x_axis().to_vec());
        assert_eq!(full.ys, grid.y_axis().to_vec());
    }

    #[test]
    fn uneven_stride_keeps_full_series() {
        let grid = grid(7, 7, |x, y| x * y);
        let section = extract_1d(&grid, Direction::X, 3, 7).unwrap();

        // floor(7 / 3) in the header, indices 0, 3, 6 in the series
        assert_eq!(section.count, 2);
        assert_eq!(section.independent, vec![0., 3., 6.]);
        assert_eq!(section.dependent, vec![0., 18., 36.]);
        assert_eq!(section.independent.len(), strided_len(7, 3));
    }

    #[test]
    fn symmetric_grid_sections_match() {
        let grid = grid(6, 6, |x, y| x * x + y * y + x * y);

        for section in 1..=6 {
            let along_x = extract_1d(&grid, Direction::X, 2, section).unwrap();
            let along_y = extract_1d(&grid, Direction::Y, 2, section).unwrap();

            assert_eq!(along_x.independent, along_y.independent);
            assert_eq!(along_x.dependent, along_y.dependent);
        }
    }

    #[test]
    fn sub_grid_strides_both_axes() {
        let grid = grid(5, 3, |x, y| 10. * x + y);
        let section = extract_2d(&grid, 2).unwrap();

        assert_eq!(section.count_x, 2);
        assert_eq!(section.count_y, 1);
        assert_eq!(section.xs, vec![0., 2., 4.]);
        assert_eq!(section.ys, vec![0., 2.]);
        assert_eq!(section.z.dim(), (3, 2));
        assert_eq!(section.z[[2, 1]], 42.);
    }

    #[test]
    fn stride_past_axis_keeps_first_point() {
        let grid = grid(3, 3, |x, y| 10. * x + y);

        for stride in [usize::MAX, usize::MAX / 2 + 2, 3] {
            let along_x = extract_1d(&grid, Direction::X, stride, 1).unwrap();
            assert_eq!(along_x.count, 0);
            assert_eq!(along_x.independent, vec![0.]);
            assert_eq!(along_x.dependent, vec![0.]);

            let along_y = extract_1d(&grid, Direction::Y, stride, 3).unwrap();
            assert_eq!(along_y.independent, vec![0.]);
            assert_eq!(along_y.dependent, vec![20.]);

            let sub_grid = extract_2d(&grid, stride).unwrap();
            assert_eq!((sub_grid.count_x, sub_grid.count_y), (0, 0));
            assert_eq!(sub_grid.xs, vec![0.]);
            assert_eq!(sub_grid.ys, vec![0.]);
            assert_eq!(sub_grid.z, Array2::from_elem((1, 1), 0.));
        }
    }

    #[test]
    fn invalid_requests_are_rejected() {
        let grid = grid(3, 2, |_, _| 0.);

        assert!(matches!(
            extract_1d(&grid, Direction::X, 0, 1),
            Err(Error::InvalidStride)
        ));
        assert!(matches!(
            extract_1d(&grid, Direction::X, 1, 3),
            Err(Error::SectionOutOfRange { bound: 2, .. })
        ));
        assert!(matches!(extract_2d(&grid, 0), Err(Error::InvalidStride)));
    }

    #[test]
    fn extraction_unwraps_to_its_kind() {
        let grid = grid(2, 2, |x, y| x + y);

        let one_d = Extraction::from(extract_1d(&grid, Direction::X, 1, 1).unwrap());
        assert!(one_d.clone().into_2d().is_none());
        assert_eq!(one_d.into_1d().map(|section| section.count), Some(2));

        let two_d = Extraction::from(extract_2d(&grid, 1).unwrap());
        assert!(two_d.clone().into_1d().is_none());
        assert_eq!(two_d.into_2d().map(|section| section.z.len()), Some(4));
    }
}
