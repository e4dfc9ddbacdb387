//! The four conversion entry points.
//!
//! Each one validates its request, reads and parses the whole source, builds the
//! grid, extracts from it and only then creates the destination. Any failure
//! before the write leaves the destination untouched.

use crate::parse::{self, PointCloud};
use crate::prelude::*;
use crate::shape::{check_section_bound, check_stride, LEGACY_SECTION_BOUND};

use std::path::Path;

/// Convert a square source into a cross section file.
///
/// The grid side is inferred from the record count, see
/// [`GridShape::infer_square`]. `options.section` is checked against
/// [`LEGACY_SECTION_BOUND`] before the source is read and against the inferred
/// grid once it is known.
///
/// ```no_run
/// use gridsection::{ConvertOptions, Direction};
///
/// let options = ConvertOptions::default()
///     .with_direction(Direction::Y)
///     .with_section(12)
///     .with_stride(2);
///
/// gridsection::convert_square_1d("terrain.xyz", "terrain_y12.dat", &options).unwrap();
/// ```
pub fn convert_square_1d<P, Q>(source: P, dest: Q, options: &ConvertOptions) -> Result<(), Error>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let (source, dest) = (source.as_ref(), dest.as_ref());

    check_stride(options.stride)?;
    check_section_bound(options.section, LEGACY_SECTION_BOUND, options.direction)?;

    let cloud = parse::read_point_cloud(source)?;
    let shape = resolve_square(&cloud, options)?;
    shape.check_section(options.direction, options.section)?;

    let grid = build_grid(&cloud, shape, options)?;
    let section = extract_1d(&grid, options.direction, options.stride, options.section)?;
    write_section_file(dest, &section)?;

    info!(
        source = %source.display(),
        dest = %dest.display(),
        direction = %options.direction,
        section = options.section,
        "wrote square cross section"
    );

    Ok(())
}

/// Convert a square source into a strided 2D section file.
pub fn convert_square_2d<P, Q>(source: P, dest: Q, options: &ConvertOptions) -> Result<(), Error>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let (source, dest) = (source.as_ref(), dest.as_ref());

    check_stride(options.stride)?;

    let cloud = parse::read_point_cloud(source)?;
    let shape = resolve_square(&cloud, options)?;

    let grid = build_grid(&cloud, shape, options)?;
    let section = extract_2d(&grid, options.stride)?;
    write_section_file(dest, &section)?;

    info!(
        source = %source.display(),
        dest = %dest.display(),
        stride = options.stride,
        "wrote square sub-grid"
    );

    Ok(())
}

/// Convert an `nx x ny` source into a cross section file.
///
/// Stride, dimensions and section are all validated before the source is
/// opened; the record count is checked against `nx * ny` once it is parsed.
pub fn convert_rect_1d<P, Q>(
    source: P,
    dest: Q,
    nx: usize,
    ny: usize,
    options: &ConvertOptions,
) -> Result<(), Error>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let (source, dest) = (source.as_ref(), dest.as_ref());

    check_stride(options.stride)?;
    let shape = GridShape::explicit(nx, ny)?;
    shape.check_section(options.direction, options.section)?;

    let cloud = parse::read_point_cloud(source)?;
    shape.check_records(cloud.len())?;

    let grid = build_grid(&cloud, shape, options)?;
    let section = extract_1d(&grid, options.direction, options.stride, options.section)?;
    write_section_file(dest, &section)?;

    info!(
        source = %source.display(),
        dest = %dest.display(),
        nx,
        ny,
        direction = %options.direction,
        section = options.section,
        "wrote rectangular cross section"
    );

    Ok(())
}

/// Convert an `nx x ny` source into a strided 2D section file.
pub fn convert_rect_2d<P, Q>(
    source: P,
    dest: Q,
    nx: usize,
    ny: usize,
    options: &ConvertOptions,
) -> Result<(), Error>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let (source, dest) = (source.as_ref(), dest.as_ref());

    check_stride(options.stride)?;
    let shape = GridShape::explicit(nx, ny)?;

    let cloud = parse::read_point_cloud(source)?;
    shape.check_records(cloud.len())?;

    let grid = build_grid(&cloud, shape, options)?;
    let section = extract_2d(&grid, options.stride)?;
    write_section_file(dest, &section)?;

    info!(
        source = %source.display(),
        dest = %dest.display(),
        nx,
        ny,
        stride = options.stride,
        "wrote rectangular sub-grid"
    );

    Ok(())
}

fn resolve_square(cloud: &PointCloud, options: &ConvertOptions) -> Result<GridShape, Error> {
    let inference = GridShape::infer_square(cloud.len())?;

    if !inference.is_exact() {
        if options.strict_shape {
            return Err(Error::NotSquare {
                records: cloud.len(),
                side: inference.shape.nx,
            });
        }

        warn!(
            records = cloud.len(),
            side = inference.shape.nx,
            discarded = inference.discarded,
            "record count is not a perfect square, trailing records are dropped"
        );
    }

    Ok(inference.shape)
}

fn build_grid(cloud: &PointCloud, shape: GridShape, options: &ConvertOptions) -> Result<Grid, Error> {
    let grid = Grid::assemble(cloud, shape)?;

    if options.verify_order {
        grid.verify_order(cloud)?;
    }

    Ok(grid)
}
