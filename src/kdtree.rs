//! 2-d tree symbol table keyed by points in the plane.
//!
//! Each level of the tree splits the plane along one axis, alternating x and y
//! with depth. Every node also caches the region of the plane its subtree is
//! responsible for. That region is computed once when the node is created and
//! is what lets range and nearest-neighbor queries skip whole subtrees.
//!
//! ```rust
//! use spatio_kdtree::{KdTree, Point, Region};
//!
//! let mut tree = KdTree::new();
//! tree.insert(Point::new(0.7, 0.2), "a")?;
//! tree.insert(Point::new(0.5, 0.4), "b")?;
//! tree.insert(Point::new(0.2, 0.3), "c")?;
//!
//! assert_eq!(tree.get(&Point::new(0.5, 0.4))?, Some(&"b"));
//! assert_eq!(tree.range(&Region::new(0.0, 0.0, 0.6, 0.6))?.count(), 2);
//! assert_eq!(tree.nearest(&Point::new(0.25, 0.25))?, Some(Point::new(0.2, 0.3)));
//! # Ok::<(), spatio_kdtree::KdTreeError>(())
//! ```

use std::collections::VecDeque;

use geo::{Distance, Euclidean, Point};
use smallvec::SmallVec;

use crate::config::{Config, SearchOrder};
use crate::error::Result;
use crate::region::{Axis, Region};
use crate::validation::{validate_point, validate_region};

#[derive(Debug, Clone)]
struct Node<V> {
    key: Point<f64>,
    value: V,
    region: Region,
    size: usize,
    lower: Option<Box<Node<V>>>,
    upper: Option<Box<Node<V>>>,
}

#[inline]
fn size<V>(node: &Option<Box<Node<V>>>) -> usize {
    node.as_ref().map_or(0, |n| n.size)
}

#[inline]
fn distance_squared(a: &Point<f64>, b: &Point<f64>) -> f64 {
    let dx = a.x() - b.x();
    let dy = a.y() - b.y();
    dx * dx + dy * dy
}

impl<V> Node<V> {
    fn leaf(key: Point<f64>, value: V, region: Region) -> Self {
        Self {
            key,
            value,
            region,
            size: 1,
            lower: None,
            upper: None,
        }
    }

    /// Inserts below this node. Returns the depth of the new node, or `None`
    /// if an existing key was overwritten.
    fn insert(&mut self, key: Point<f64>, value: V, axis: Axis, depth: usize) -> Option<usize> {
        if self.key == key {
            self.value = value;
            return None;
        }

        let split = axis.coord(&self.key);
        let goes_lower = axis.coord(&key) < split;
        let slot = if goes_lower {
            &mut self.lower
        } else {
            &mut self.upper
        };

        let created = match slot {
            Some(child) => child.insert(key, value, axis.next(), depth + 1),
            None => {
                let region = if goes_lower {
                    self.region.lower_half(axis, split)
                } else {
                    self.region.upper_half(axis, split)
                };
                *slot = Some(Box::new(Node::leaf(key, value, region)));
                Some(depth + 1)
            }
        };

        self.size = 1 + size(&self.lower) + size(&self.upper);
        created
    }

    /// Picks the child to descend into when looking for `key`.
    #[inline]
    fn child_towards(&self, key: &Point<f64>, axis: Axis) -> Option<&Node<V>> {
        if axis.coord(key) < axis.coord(&self.key) {
            self.lower.as_deref()
        } else {
            self.upper.as_deref()
        }
    }

    fn collect_regions(&self, out: &mut Vec<(Point<f64>, Region)>) {
        if let Some(lower) = &self.lower {
            lower.collect_regions(out);
        }
        out.push((self.key, self.region));
        if let Some(upper) = &self.upper {
            upper.collect_regions(out);
        }
    }
}

/// Closest node found so far during a nearest-neighbor search.
struct Champion<'a, V> {
    node: &'a Node<V>,
    dist_sq: f64,
}

#[derive(Default)]
struct SearchStats {
    visited: usize,
    pruned: usize,
}

fn nearest_in<'a, V>(
    node: &'a Node<V>,
    query: &Point<f64>,
    axis: Axis,
    order: SearchOrder,
    best: &mut Option<Champion<'a, V>>,
    stats: &mut SearchStats,
) {
    // Nothing in this region can beat the champion. Squared distances may
    // overflow to infinity, so the first node always becomes champion.
    if let Some(champion) = best.as_ref()
        && node.region.distance_squared_to(query) >= champion.dist_sq
    {
        stats.pruned += 1;
        return;
    }
    stats.visited += 1;

    let dist_sq = distance_squared(&node.key, query);
    if best.as_ref().is_none_or(|c| dist_sq < c.dist_sq) {
        *best = Some(Champion { node, dist_sq });
    }

    let query_is_lower = axis.coord(query) < axis.coord(&node.key);
    let (first, second) = match order {
        SearchOrder::QuerySideFirst if !query_is_lower => (&node.upper, &node.lower),
        _ => (&node.lower, &node.upper),
    };

    for child in [first, second].into_iter().flatten() {
        nearest_in(child, query, axis.next(), order, best, stats);
    }
}

/// A symbol table of 2D points backed by an unbalanced 2-d tree.
///
/// Keys are a set: inserting a point that is already present replaces its
/// value. There is no deletion and no rebalancing, so the shape of the tree
/// depends entirely on insertion order.
#[derive(Debug, Clone)]
pub struct KdTree<V> {
    root: Option<Box<Node<V>>>,
    config: Config,
    height: usize,
    depth_warned: bool,
}

impl<V> KdTree<V> {
    /// Create an empty tree with the default configuration.
    pub fn new() -> Self {
        Self::from_checked_config(Config::default())
    }

    /// Create an empty tree with a custom configuration.
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self::from_checked_config(config.checked()?))
    }

    fn from_checked_config(config: Config) -> Self {
        Self {
            root: None,
            config,
            height: 0,
            depth_warned: false,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Number of stored points.
    pub fn len(&self) -> usize {
        size(&self.root)
    }

    /// Alias of [`KdTree::len`].
    pub fn size(&self) -> usize {
        self.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of levels in the tree; 0 when empty.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Associate `value` with `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `key` has a non-finite coordinate. The
    /// tree is not modified in that case.
    pub fn insert(&mut self, key: Point<f64>, value: V) -> Result<()> {
        validate_point(&key)?;

        let created = match self.root.as_mut() {
            Some(root) => root.insert(key, value, Axis::X, 0),
            None => {
                self.root = Some(Box::new(Node::leaf(key, value, Region::unbounded())));
                Some(0)
            }
        };

        match created {
            Some(depth) => {
                log::trace!("Inserted ({}, {}) at depth {}", key.x(), key.y(), depth);
                self.record_depth(depth);
            }
            None => log::trace!("Replaced value at ({}, {})", key.x(), key.y()),
        }

        Ok(())
    }

    /// Like [`KdTree::insert`], but a missing value is ignored.
    ///
    /// The key is still validated so an invalid key is reported even when
    /// there is nothing to store.
    pub fn insert_opt(&mut self, key: Point<f64>, value: Option<V>) -> Result<()> {
        validate_point(&key)?;
        match value {
            Some(value) => self.insert(key, value),
            None => Ok(()),
        }
    }

    fn record_depth(&mut self, depth: usize) {
        self.height = self.height.max(depth + 1);

        if let Some(limit) = self.config.depth_warning
            && self.height > limit
            && !self.depth_warned
        {
            self.depth_warned = true;
            log::warn!(
                "Tree height {} exceeds {} with {} points; insertion order is likely sorted or clustered",
                self.height,
                limit,
                self.len()
            );
        }
    }

    fn find(&self, key: &Point<f64>) -> Option<&Node<V>> {
        let mut axis = Axis::X;
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            if node.key == *key {
                return Some(node);
            }
            cursor = node.child_towards(key, axis);
            axis = axis.next();
        }
        None
    }

    /// Value associated with `key`, if any.
    pub fn get(&self, key: &Point<f64>) -> Result<Option<&V>> {
        validate_point(key)?;
        Ok(self.find(key).map(|node| &node.value))
    }

    /// Mutable access to the value associated with `key`.
    pub fn get_mut(&mut self, key: &Point<f64>) -> Result<Option<&mut V>> {
        validate_point(key)?;

        let mut axis = Axis::X;
        let mut cursor = self.root.as_deref_mut();
        while let Some(node) = cursor {
            if node.key == *key {
                return Ok(Some(&mut node.value));
            }
            cursor = if axis.coord(key) < axis.coord(&node.key) {
                node.lower.as_deref_mut()
            } else {
                node.upper.as_deref_mut()
            };
            axis = axis.next();
        }
        Ok(None)
    }

    pub fn contains(&self, key: &Point<f64>) -> Result<bool> {
        validate_point(key)?;
        Ok(self.find(key).is_some())
    }

    /// All stored points in level order.
    ///
    /// Every point appears exactly once; the order is otherwise unspecified.
    pub fn points(&self) -> Vec<Point<f64>> {
        self.iter().map(|(point, _)| point).collect()
    }

    /// Level-order iterator over `(point, value)` pairs.
    pub fn iter(&self) -> Iter<'_, V> {
        let mut queue = VecDeque::with_capacity(self.len().min(1024));
        queue.extend(self.root.as_deref());
        Iter {
            queue,
            remaining: self.len(),
        }
    }

    /// Lazily yields every stored point inside `region` (boundary included).
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if any bound of `region` is NaN.
    pub fn range(&self, region: &Region) -> Result<Range<'_, V>> {
        if let Err(e) = validate_region(region) {
            log::warn!("Rejecting range query: {}", e);
            return Err(e);
        }

        let mut stack = SmallVec::new();
        stack.extend(self.root.as_deref());
        Ok(Range {
            query: *region,
            stack,
            visited: 0,
        })
    }

    /// Closest stored point to `query`, or `None` if the tree is empty.
    ///
    /// Ties are broken in favor of whichever minimizer is found first.
    pub fn nearest(&self, query: &Point<f64>) -> Result<Option<Point<f64>>> {
        Ok(self.nearest_entry(query)?.map(|(point, _)| point))
    }

    /// Closest stored point to `query` together with its value.
    pub fn nearest_entry(&self, query: &Point<f64>) -> Result<Option<(Point<f64>, &V)>> {
        if let Err(e) = validate_point(query) {
            log::warn!("Rejecting nearest query: {}", e);
            return Err(e);
        }

        let Some(root) = self.root.as_deref() else {
            return Ok(None);
        };

        let mut best = None;
        let mut stats = SearchStats::default();
        nearest_in(
            root,
            query,
            Axis::X,
            self.config.nearest_order,
            &mut best,
            &mut stats,
        );

        log::debug!(
            "Nearest search for ({}, {}) visited {} of {} nodes, pruned {} subtrees",
            query.x(),
            query.y(),
            stats.visited,
            self.len(),
            stats.pruned
        );

        Ok(best.map(|champion| (champion.node.key, &champion.node.value)))
    }

    /// Euclidean distance from `query` to its nearest stored point.
    pub fn nearest_distance(&self, query: &Point<f64>) -> Result<Option<f64>> {
        Ok(self
            .nearest(query)?
            .map(|point| Euclidean.distance(point, *query)))
    }

    /// Every stored point with the region its subtree covers, in order
    /// (lower subtree, node, upper subtree).
    pub fn regions(&self) -> Vec<(Point<f64>, Region)> {
        let mut out = Vec::with_capacity(self.len());
        if let Some(root) = &self.root {
            root.collect_regions(&mut out);
        }
        out
    }
}

impl<V> Default for KdTree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Extend<(Point<f64>, V)> for KdTree<V> {
    /// Inserts every pair; pairs with an invalid key are skipped and logged.
    fn extend<I: IntoIterator<Item = (Point<f64>, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            if let Err(e) = self.insert(key, value) {
                log::warn!("Skipping point during bulk insert: {}", e);
            }
        }
    }
}

impl<V> FromIterator<(Point<f64>, V)> for KdTree<V> {
    fn from_iter<I: IntoIterator<Item = (Point<f64>, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, V> IntoIterator for &'a KdTree<V> {
    type Item = (Point<f64>, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Breadth-first iterator returned by [`KdTree::iter`].
pub struct Iter<'a, V> {
    queue: VecDeque<&'a Node<V>>,
    remaining: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (Point<f64>, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.lower.as_deref());
        self.queue.extend(node.upper.as_deref());
        self.remaining -= 1;
        Some((node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

/// Lazy range query returned by [`KdTree::range`].
///
/// Pending subtrees are kept on an explicit stack, so deep trees do not grow
/// the call stack.
pub struct Range<'a, V> {
    query: Region,
    stack: SmallVec<[&'a Node<V>; 32]>,
    visited: usize,
}

impl<V> Range<'_, V> {
    /// Number of nodes examined so far.
    pub fn visited(&self) -> usize {
        self.visited
    }
}

impl<V> Iterator for Range<'_, V> {
    type Item = Point<f64>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            self.visited += 1;

            if node.region.intersects(&self.query) {
                // Push upper first so the lower side is reported first.
                self.stack.extend(node.upper.as_deref());
                self.stack.extend(node.lower.as_deref());
            } else if self.query.max_x() < node.region.min_x()
                || self.query.max_y() < node.region.min_y()
            {
                self.stack.extend(node.lower.as_deref());
            } else {
                self.stack.extend(node.upper.as_deref());
            }

            if self.query.contains_point(&node.key) {
                return Some(node.key);
            }
        }
        None
    }
}
