//! Point-cloud text format
//!
//! The format read by the MST clustering kernel:
//!
//! ```text
//! <npoints>
//! <x_0> <y_0>
//! ...
//! <x_{n-1}> <y_{n-1}>
//! ```
//!
//! Coordinates are fixed-point with exactly [`DECIMALS`] fractional digits,
//! separated by a single space. Nothing else is written. Y is truncated to
//! the printed grid instead of rounded, so a Y below 1.0 never reads as 1.0.

use crate::error::GenError;
use crate::generator::{Point, PointCloud};
use crate::Result;
use std::io::{BufRead, BufWriter, Write};

/// Fractional digits per coordinate
pub const DECIMALS: usize = 10;

/// `10^DECIMALS`
const GRID: f64 = 1e10;

/// Write `cloud` in the kernel's text format
///
/// Output is buffered and flushed once at the end.
pub fn write_point_cloud<W: Write>(out: W, cloud: &PointCloud) -> Result<()> {
    let mut out = BufWriter::new(out);

    writeln!(out, "{}", cloud.len())?;
    for point in cloud {
        let y = truncate_to_grid(point.y);
        writeln!(out, "{:.prec$} {:.prec$}", point.x, y, prec = DECIMALS)?;
    }

    out.flush()?;
    Ok(())
}

#[inline]
fn truncate_to_grid(value: f64) -> f64 {
    (value * GRID).floor() / GRID
}

/// Read a point cloud written by [`write_point_cloud`]
///
/// Accepts exactly what the kernel accepts: a count header followed by that
/// many lines of two finite numbers. Trailing blank lines are ignored.
pub fn read_point_cloud<R: BufRead>(input: R) -> Result<PointCloud> {
    let mut lines = input.lines();

    let header = lines
        .next()
        .ok_or_else(|| GenError::invalid("empty point cloud input"))??;
    let count: usize = header
        .trim()
        .parse()
        .map_err(|_| GenError::invalid(format!("invalid point count header '{}'", header)))?;

    let mut points = Vec::new();
    points
        .try_reserve_exact(count)
        .map_err(|_| GenError::ResourceExhaustion { points: count })?;

    for index in 0..count {
        let line = lines.next().ok_or_else(|| {
            GenError::invalid(format!("expected {} points, found {}", count, index))
        })??;
        points.push(parse_point(&line, index)?);
    }

    for line in lines {
        if !line?.trim().is_empty() {
            return Err(GenError::invalid(format!(
                "unexpected data after {} points",
                count
            )));
        }
    }

    Ok(PointCloud::new(points))
}

fn parse_point(line: &str, index: usize) -> Result<Point> {
    let mut fields = line.split_whitespace();

    let mut coordinate = |name: &str| -> Result<f64> {
        let field = fields
            .next()
            .ok_or_else(|| GenError::invalid(format!("point {}: missing {}", index, name)))?;
        match field.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(GenError::invalid(format!(
                "point {}: invalid {} '{}'",
                index, name, field
            ))),
        }
    };

    let x = coordinate("x")?;
    let y = coordinate("y")?;

    if fields.next().is_some() {
        return Err(GenError::invalid(format!("point {}: too many fields", index)));
    }

    Ok(Point { x, y })
}
