//! In-memory 2-d tree symbol table with range and nearest-neighbor search.
//!
//! Points are stored in an unbalanced 2-d tree whose nodes each cache the
//! region of the plane they are responsible for. Range and nearest queries
//! use those regions to skip subtrees that cannot hold a result.
//!
//! ```rust
//! use spatio_kdtree::{KdTree, Point, Region};
//!
//! let mut tree = KdTree::new();
//! tree.insert(Point::new(0.7, 0.2), 14)?;
//! tree.insert(Point::new(0.5, 0.4), 22)?;
//! tree.insert(Point::new(0.9, 0.6), 18)?;
//! tree.insert(Point::new(0.2, 0.3), 33)?;
//! tree.insert(Point::new(0.4, 0.7), 29)?;
//!
//! assert_eq!(tree.nearest(&Point::new(0.4, 0.8))?, Some(Point::new(0.4, 0.7)));
//!
//! let inside: Vec<_> = tree.range(&Region::new(0.0, 0.0, 0.6, 0.6))?.collect();
//! assert_eq!(inside.len(), 2);
//! # Ok::<(), spatio_kdtree::KdTreeError>(())
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod index;
pub mod kdtree;
pub mod point_table;
pub mod region;
pub mod validation;

pub use builder::KdTreeBuilder;
pub use config::{Config, SearchOrder};
pub use error::{KdTreeError, Result};
pub use index::PointIndex;
pub use kdtree::{Iter, KdTree, Range};
pub use point_table::PointTable;
pub use region::{Axis, Region};

pub use geo::{Point, Rect};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{KdTree, KdTreeBuilder, KdTreeError, PointIndex, PointTable, Result};

    pub use crate::{Point, Region};

    pub use crate::{Config, SearchOrder};
}
