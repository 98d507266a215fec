//! The point symbol table contract shared by every implementation.
//!
//! [`KdTree`](crate::KdTree) is the pruned implementation and
//! [`PointTable`](crate::PointTable) the brute-force baseline. Code written
//! against this trait can swap one for the other, which is how the tests and
//! benchmarks compare them.

use crate::error::Result;
use crate::kdtree::KdTree;
use crate::region::Region;
use geo::Point;

/// Trait for 2D point symbol tables.
pub trait PointIndex<V> {
    /// Insert or replace the value for `key`.
    fn insert(&mut self, key: Point<f64>, value: V) -> Result<()>;

    /// Get the value for `key`.
    fn get(&self, key: &Point<f64>) -> Result<Option<&V>>;

    /// Check if `key` is stored.
    fn contains(&self, key: &Point<f64>) -> Result<bool> {
        Ok(self.get(key)?.is_some())
    }

    /// Number of stored points.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All stored points, each exactly once, in an implementation-defined order.
    fn points(&self) -> Vec<Point<f64>>;

    /// Stored points inside `region`, boundary included.
    fn range(&self, region: &Region) -> Result<Vec<Point<f64>>>;

    /// A stored point closest to `query`, or `None` when empty.
    fn nearest(&self, query: &Point<f64>) -> Result<Option<Point<f64>>>;
}

impl<V> PointIndex<V> for KdTree<V> {
    fn insert(&mut self, key: Point<f64>, value: V) -> Result<()> {
        KdTree::insert(self, key, value)
    }

    fn get(&self, key: &Point<f64>) -> Result<Option<&V>> {
        KdTree::get(self, key)
    }

    fn contains(&self, key: &Point<f64>) -> Result<bool> {
        KdTree::contains(self, key)
    }

    fn len(&self) -> usize {
        KdTree::len(self)
    }

    fn points(&self) -> Vec<Point<f64>> {
        KdTree::points(self)
    }

    fn range(&self, region: &Region) -> Result<Vec<Point<f64>>> {
        Ok(KdTree::range(self, region)?.collect())
    }

    fn nearest(&self, query: &Point<f64>) -> Result<Option<Point<f64>>> {
        KdTree::nearest(self, query)
    }
}
