//! Axis-aligned rectangular regions of the plane.

use geo::{Point, Rect, coord};

/// An axis-aligned rectangle with inclusive boundaries.
///
/// Used both as a range query and as the bounding region a tree node is
/// responsible for. This is a thin wrapper around `geo::Rect` so the corner
/// order is normalized on construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    /// The underlying geometric rectangle
    pub rect: Rect<f64>,
}

impl Region {
    /// Create a region from minimum and maximum coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// use spatio_kdtree::Region;
    ///
    /// let region = Region::new(0.0, 0.0, 0.6, 0.6);
    /// assert_eq!(region.max_x(), 0.6);
    /// ```
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            rect: Rect::new(coord! { x: min_x, y: min_y }, coord! { x: max_x, y: max_y }),
        }
    }

    /// The whole plane: every bound is infinite.
    pub fn unbounded() -> Self {
        Self::new(
            f64::NEG_INFINITY,
            f64::NEG_INFINITY,
            f64::INFINITY,
            f64::INFINITY,
        )
    }

    /// Create a region from a `geo::Rect`.
    pub fn from_rect(rect: Rect<f64>) -> Self {
        Self { rect }
    }

    pub fn min_x(&self) -> f64 {
        self.rect.min().x
    }

    pub fn min_y(&self) -> f64 {
        self.rect.min().y
    }

    pub fn max_x(&self) -> f64 {
        self.rect.max().x
    }

    pub fn max_y(&self) -> f64 {
        self.rect.max().y
    }

    /// True if the point lies inside or on the boundary.
    pub fn contains_point(&self, point: &Point<f64>) -> bool {
        point.x() >= self.min_x()
            && point.x() <= self.max_x()
            && point.y() >= self.min_y()
            && point.y() <= self.max_y()
    }

    /// True if the two regions share at least one point (touching counts).
    pub fn intersects(&self, other: &Region) -> bool {
        !(self.max_x() < other.min_x()
            || self.min_x() > other.max_x()
            || self.max_y() < other.min_y()
            || self.min_y() > other.max_y())
    }

    /// True if `other` lies entirely within this region.
    pub fn contains_region(&self, other: &Region) -> bool {
        other.min_x() >= self.min_x()
            && other.max_x() <= self.max_x()
            && other.min_y() >= self.min_y()
            && other.max_y() <= self.max_y()
    }

    /// Squared Euclidean distance from `point` to the closest point of the region.
    ///
    /// Zero when the point is inside. Infinite bounds are handled naturally since
    /// the point can never lie beyond them.
    pub fn distance_squared_to(&self, point: &Point<f64>) -> f64 {
        let dx = if point.x() < self.min_x() {
            point.x() - self.min_x()
        } else if point.x() > self.max_x() {
            point.x() - self.max_x()
        } else {
            0.0
        };
        let dy = if point.y() < self.min_y() {
            point.y() - self.min_y()
        } else if point.y() > self.max_y() {
            point.y() - self.max_y()
        } else {
            0.0
        };
        dx * dx + dy * dy
    }

    /// Lower half of this region when split at `value` along `axis`.
    pub(crate) fn lower_half(&self, axis: Axis, value: f64) -> Self {
        match axis {
            Axis::X => Self::new(
                self.min_x(),
                self.min_y(),
                self.max_x().min(value),
                self.max_y(),
            ),
            Axis::Y => Self::new(
                self.min_x(),
                self.min_y(),
                self.max_x(),
                self.max_y().min(value),
            ),
        }
    }

    /// Upper half of this region when split at `value` along `axis`.
    pub(crate) fn upper_half(&self, axis: Axis, value: f64) -> Self {
        match axis {
            Axis::X => Self::new(
                self.min_x().max(value),
                self.min_y(),
                self.max_x(),
                self.max_y(),
            ),
            Axis::Y => Self::new(
                self.min_x(),
                self.min_y().max(value),
                self.max_x(),
                self.max_y(),
            ),
        }
    }
}

impl From<Rect<f64>> for Region {
    fn from(rect: Rect<f64>) -> Self {
        Self::from_rect(rect)
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}, {}] x [{}, {}]",
            self.min_x(),
            self.max_x(),
            self.min_y(),
            self.max_y()
        )
    }
}

/// Split axis of a tree level. Even depths split on x, odd depths on y.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Vertical split line, compares x coordinates.
    X,
    /// Horizontal split line, compares y coordinates.
    Y,
}

impl Axis {
    /// The axis used at the next depth.
    #[inline]
    pub fn next(self) -> Self {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }

    /// Coordinate of `point` along this axis.
    #[inline]
    pub fn coord(self, point: &Point<f64>) -> f64 {
        match self {
            Axis::X => point.x(),
            Axis::Y => point.y(),
        }
    }
}
