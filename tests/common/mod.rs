#![allow(dead_code)]

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// write `nx * ny` records sorted x fastest on integer coordinates with
/// `z = f(x, y)`, returning the path of the new file
pub fn write_grid(dir: &Path, name: &str, nx: usize, ny: usize, f: impl Fn(f64, f64) -> f64) -> PathBuf {
    let mut text = String::new();

    for j in 0..ny {
        for i in 0..nx {
            let (x, y) = (i as f64, j as f64);
            writeln!(text, "{} {} {}", x, y, f(x, y)).unwrap();
        }
    }

    write_text(dir, name, &text)
}

pub fn write_text(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, text).unwrap();
    path
}

pub fn read_1d(path: &Path) -> gridsection::Section1D {
    gridsection::read_section(path).unwrap().into_1d().unwrap()
}

pub fn read_2d(path: &Path) -> gridsection::Section2D {
    gridsection::read_section(path).unwrap().into_2d().unwrap()
}
