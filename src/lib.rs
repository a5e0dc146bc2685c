//! Friends-of-friends clustering for three-dimensional point sets in a
//! periodic box.
//!
//! Two points are friends when they sit within one linking length of each
//! other; groups are the connected components of the friendship graph.
//! The crate assembles an O(N) expected-time pipeline from three pieces:
//! a binned spatial grid ([`grid`], five interchangeable implementations
//! of one contract), a pair finder with an optional sort-accelerated slab
//! walk ([`pairs`]), and a union-find that merges friends into groups
//! ([`UnionFind`]).
//!
//! The top-level entry point is [`link`], which also classifies a
//! secondary set of probe points by the group of the nearest-enough
//! primary.
//!
//! # Example
//!
//! ```
//! use fof3::{link, LinkParams};
//! use glam::Vec3;
//!
//! let x = vec![
//!     Vec3::new(10.0, 10.0, 10.0),
//!     Vec3::new(10.5, 10.0, 10.0),
//!     Vec3::new(11.0, 10.0, 10.0),
//!     Vec3::new(40.0, 40.0, 40.0),
//! ];
//! let out = link(
//!     &x,
//!     &[],
//!     &LinkParams {
//!         box_size: 100.0,
//!         linking_length: 1.0,
//!         grid_res: 10,
//!         min_group_size: 3,
//!     },
//! )
//! .unwrap();
//!
//! assert_eq!(out.n_groups, 1);
//! assert_eq!(out.groups[0], out.groups[1]);
//! assert_eq!(out.groups[3], -1); // too small a group
//! ```

mod error;
mod finder;
mod fof;
mod particle;
mod union_find;
mod util;

pub mod grid;
pub mod pairs;

pub use error::FofError;
pub use finder::Finder;
pub use fof::{link, LinkOutput, LinkParams};
pub use particle::Particle;
pub use union_find::UnionFind;
