//! Builder for configuring a k-d tree before it is created.

use crate::config::{Config, SearchOrder};
use crate::error::Result;
use crate::kdtree::KdTree;
use crate::validation::validate_points;
use geo::Point;

/// Builder for [`KdTree`] with custom search settings and initial contents.
#[derive(Debug)]
pub struct KdTreeBuilder<V> {
    config: Config,
    entries: Vec<(Point<f64>, V)>,
}

impl<V> KdTreeBuilder<V> {
    /// Create a new builder with the default configuration.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            entries: Vec::new(),
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Set the child visiting order for nearest-neighbor search.
    pub fn nearest_order(mut self, order: SearchOrder) -> Self {
        self.config = self.config.with_nearest_order(order);
        self
    }

    /// Warn once the tree grows taller than `height` levels.
    ///
    /// A zero threshold is reported by [`KdTreeBuilder::build`].
    pub fn depth_warning(mut self, height: usize) -> Self {
        self.config.depth_warning = Some(height);
        self
    }

    /// Queue a point to be inserted when the tree is built.
    pub fn point(mut self, key: Point<f64>, value: V) -> Self {
        self.entries.push((key, value));
        self
    }

    /// Queue several points, inserted in iteration order.
    pub fn points<I: IntoIterator<Item = (Point<f64>, V)>>(mut self, entries: I) -> Self {
        self.entries.extend(entries);
        self
    }

    /// Build the tree.
    ///
    /// Fails on an invalid configuration or the first queued point with an
    /// invalid key.
    pub fn build(self) -> Result<KdTree<V>> {
        let mut tree = KdTree::with_config(self.config)?;
        let keys: Vec<_> = self.entries.iter().map(|(key, _)| *key).collect();
        validate_points(&keys)?;

        for (key, value) in self.entries {
            tree.insert(key, value)?;
        }
        Ok(tree)
    }
}

impl<V> Default for KdTreeBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KdTreeError;

    #[test]
    fn test_builder_default() {
        let tree: KdTree<()> = KdTreeBuilder::new().build().unwrap();
        assert!(tree.is_empty());
        assert_eq!(tree.config(), &Config::default());
    }

    #[test]
    fn test_builder_settings() {
        let tree = KdTreeBuilder::new()
            .nearest_order(SearchOrder::LowerFirst)
            .depth_warning(4)
            .point(Point::new(0.3, 0.3), "a")
            .points([(Point::new(0.6, 0.1), "b"), (Point::new(0.1, 0.6), "c")])
            .build()
            .unwrap();

        assert_eq!(tree.len(), 3);
        assert_eq!(tree.config().nearest_order, SearchOrder::LowerFirst);
        assert_eq!(tree.config().depth_warning, Some(4));
        assert_eq!(tree.get(&Point::new(0.1, 0.6)).unwrap(), Some(&"c"));
    }

    #[test]
    fn test_builder_rejects_bad_point() {
        let result = KdTreeBuilder::new()
            .point(Point::new(0.0, f64::NAN), 1)
            .build();
        assert!(matches!(result, Err(KdTreeError::InvalidArgument(_))));
    }

    #[test]
    fn test_builder_rejects_bad_config() {
        let config = Config {
            depth_warning: Some(0),
            ..Config::default()
        };
        let result: Result<KdTree<()>> = KdTreeBuilder::new().config(config).build();
        assert!(matches!(result, Err(KdTreeError::InvalidConfig(_))));
    }

    #[test]
    fn test_builder_zero_depth_warning_is_error() {
        let result: Result<KdTree<()>> = KdTreeBuilder::new().depth_warning(0).build();
        assert!(matches!(result, Err(KdTreeError::InvalidConfig(_))));
    }

    #[test]
    fn test_builder_reports_bad_point_index() {
        let err = KdTreeBuilder::new()
            .point(Point::new(0.1, 0.1), 1)
            .point(Point::new(0.2, 0.2), 2)
            .point(Point::new(f64::NAN, 0.3), 3)
            .build()
            .unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("index 2"), "{}", err);
    }
}
