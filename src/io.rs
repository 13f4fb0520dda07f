//! Reading and writing XYZ point files.
//!
//! The format is a header line followed by one point per line, three
//! tab-separated coordinates `x y z`. The reader accepts any whitespace as a
//! separator and skips blank lines; the writer always emits the header
//! `x\ty\tz` and tab-separated coordinates.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::{Point, PointCloud};

/// Header written at the top of every XYZ file.
pub const XYZ_HEADER: &str = "x\ty\tz";

/// Read a point cloud from an XYZ file.
pub fn read_xyz(path: impl AsRef<Path>) -> Result<PointCloud> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let cloud = parse_xyz(BufReader::new(file))?;
    log::debug!("read {} points from {}", cloud.len(), path.display());
    Ok(cloud)
}

/// Parse XYZ text from any buffered reader. The first line is the header.
pub fn parse_xyz<R: BufRead>(reader: R) -> Result<PointCloud> {
    let mut cloud = PointCloud::new();
    for (index, line) in reader.lines().enumerate().skip(1) {
        let line = line?;
        let line_number = index + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        cloud.push(parse_point(trimmed, line_number)?);
    }
    Ok(cloud)
}

fn parse_point(line: &str, line_number: usize) -> Result<Point> {
    let mut coords = [0.0f64; 3];
    let mut fields = line.split_whitespace();
    for (axis, coord) in coords.iter_mut().enumerate() {
        let field = fields.next().ok_or_else(|| Error::Parse {
            line: line_number,
            message: format!("expected 3 coordinates, found {}", axis),
        })?;
        *coord = field.parse().map_err(|e| Error::Parse {
            line: line_number,
            message: format!("invalid coordinate {:?}: {}", field, e),
        })?;
    }
    Ok(Point::new(coords[0], coords[1], coords[2]))
}

/// Write `points` to an XYZ file, replacing any existing file.
pub fn write_xyz(path: impl AsRef<Path>, points: &[Point]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    format_xyz(&mut writer, points)?;
    writer.flush()?;
    log::debug!("wrote {} points to {}", points.len(), path.display());
    Ok(())
}

/// Write XYZ text, header included, to any writer.
pub fn format_xyz<W: Write>(writer: &mut W, points: &[Point]) -> Result<()> {
    writeln!(writer, "{}", XYZ_HEADER)?;
    for p in points {
        writeln!(writer, "{}\t{}\t{}", p.x, p.y, p.z)?;
    }
    Ok(())
}
