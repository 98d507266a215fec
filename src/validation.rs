//! Argument validation shared by every index implementation.
//!
//! All checks run before any state is touched, so a rejected call never
//! leaves an index partially modified.

use crate::error::{KdTreeError, Result};
use crate::region::Region;
use geo::Point;

/// Validates that a point can be used as a key or query.
///
/// A coordinate that is NaN or infinite stands for an absent key.
///
/// # Examples
///
/// ```
/// use spatio_kdtree::validation::validate_point;
/// use spatio_kdtree::Point;
///
/// assert!(validate_point(&Point::new(0.5, 0.25)).is_ok());
/// assert!(validate_point(&Point::new(f64::NAN, 0.25)).is_err());
/// assert!(validate_point(&Point::new(0.5, f64::INFINITY)).is_err());
/// ```
pub fn validate_point(point: &Point<f64>) -> Result<()> {
    let (x, y) = (point.x(), point.y());

    if !x.is_finite() {
        return Err(KdTreeError::InvalidArgument(format!(
            "x coordinate must be finite, got: {}",
            x
        )));
    }

    if !y.is_finite() {
        return Err(KdTreeError::InvalidArgument(format!(
            "y coordinate must be finite, got: {}",
            y
        )));
    }

    Ok(())
}

/// Validates a query region.
///
/// Infinite bounds are allowed so half-planes and the whole plane can be
/// queried; NaN bounds are not.
///
/// # Examples
///
/// ```
/// use spatio_kdtree::validation::validate_region;
/// use spatio_kdtree::Region;
///
/// assert!(validate_region(&Region::new(0.0, 0.0, 1.0, 1.0)).is_ok());
/// assert!(validate_region(&Region::unbounded()).is_ok());
/// assert!(validate_region(&Region::new(0.0, f64::NAN, 1.0, 1.0)).is_err());
/// ```
pub fn validate_region(region: &Region) -> Result<()> {
    let bounds = [
        ("min_x", region.min_x()),
        ("min_y", region.min_y()),
        ("max_x", region.max_x()),
        ("max_y", region.max_y()),
    ];

    for (name, value) in bounds {
        if value.is_nan() {
            return Err(KdTreeError::InvalidArgument(format!(
                "Region bound {} must not be NaN",
                name
            )));
        }
    }

    Ok(())
}

/// Validates a batch of points, reporting the index of the first bad one.
pub fn validate_points(points: &[Point<f64>]) -> Result<()> {
    for (idx, point) in points.iter().enumerate() {
        validate_point(point).map_err(|e| {
            KdTreeError::InvalidArgument(format!("Point at index {}: {}", idx, e))
        })?;
    }
    Ok(())
}
