//! # normgraft-spatial
//!
//! Static nearest-neighbor index over a fixed 3D point set.
//!
//! The transfer engine builds one [`CentroidIndex`] per call over the
//! source triangle centroids and queries it once per target loop.

pub mod kdtree;

pub use kdtree::CentroidIndex;
