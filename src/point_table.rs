//! Brute-force point symbol table.
//!
//! Stores points in a `BTreeMap` ordered by `(x, y)` and answers every query
//! with a linear scan. It has no geometric metadata and no pruning, which
//! makes it the reference the k-d tree is checked and benchmarked against.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use geo::Point;

use crate::error::Result;
use crate::index::PointIndex;
use crate::region::Region;
use crate::validation::{validate_point, validate_region};

/// Map key giving points a total lexicographic order.
///
/// Only finite points are ever stored, so `total_cmp` agrees with `==` except
/// for `-0.0` vs `0.0`, which are normalized on construction.
#[derive(Debug, Clone, Copy)]
struct OrderedPoint(Point<f64>);

impl OrderedPoint {
    fn new(point: Point<f64>) -> Self {
        // Adding 0.0 turns -0.0 into 0.0 and leaves everything else alone.
        Self(Point::new(point.x() + 0.0, point.y() + 0.0))
    }
}

impl PartialEq for OrderedPoint {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OrderedPoint {}

impl PartialOrd for OrderedPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrderedPoint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .x()
            .total_cmp(&other.0.x())
            .then_with(|| self.0.y().total_cmp(&other.0.y()))
    }
}

/// Point symbol table answering queries by linear scan.
#[derive(Debug, Clone)]
pub struct PointTable<V> {
    data: BTreeMap<OrderedPoint, V>,
}

impl<V> PointTable<V> {
    pub fn new() -> Self {
        Self {
            data: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, key: Point<f64>, value: V) -> Result<()> {
        validate_point(&key)?;
        self.data.insert(OrderedPoint::new(key), value);
        Ok(())
    }

    pub fn get(&self, key: &Point<f64>) -> Result<Option<&V>> {
        validate_point(key)?;
        Ok(self.data.get(&OrderedPoint::new(*key)))
    }

    pub fn contains(&self, key: &Point<f64>) -> Result<bool> {
        validate_point(key)?;
        Ok(self.data.contains_key(&OrderedPoint::new(*key)))
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// All points in ascending `(x, y)` order.
    pub fn points(&self) -> Vec<Point<f64>> {
        self.data.keys().map(|k| k.0).collect()
    }

    /// Points inside `region`, in ascending `(x, y)` order.
    pub fn range(&self, region: &Region) -> Result<Vec<Point<f64>>> {
        validate_region(region)?;
        Ok(self
            .data
            .keys()
            .map(|k| k.0)
            .filter(|p| region.contains_point(p))
            .collect())
    }

    /// Closest point to `query`; the first minimizer in key order wins ties.
    pub fn nearest(&self, query: &Point<f64>) -> Result<Option<Point<f64>>> {
        validate_point(query)?;

        let mut best: Option<(Point<f64>, f64)> = None;
        for key in self.data.keys() {
            let dx = key.0.x() - query.x();
            let dy = key.0.y() - query.y();
            let dist_sq = dx * dx + dy * dy;
            if best.is_none_or(|(_, d)| dist_sq < d) {
                best = Some((key.0, dist_sq));
            }
        }
        Ok(best.map(|(point, _)| point))
    }
}

impl<V> Default for PointTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> PointIndex<V> for PointTable<V> {
    fn insert(&mut self, key: Point<f64>, value: V) -> Result<()> {
        PointTable::insert(self, key, value)
    }

    fn get(&self, key: &Point<f64>) -> Result<Option<&V>> {
        PointTable::get(self, key)
    }

    fn contains(&self, key: &Point<f64>) -> Result<bool> {
        PointTable::contains(self, key)
    }

    fn len(&self) -> usize {
        PointTable::len(self)
    }

    fn points(&self) -> Vec<Point<f64>> {
        PointTable::points(self)
    }

    fn range(&self, region: &Region) -> Result<Vec<Point<f64>>> {
        PointTable::range(self, region)
    }

    fn nearest(&self, query: &Point<f64>) -> Result<Option<Point<f64>>> {
        PointTable::nearest(self, query)
    }
}
