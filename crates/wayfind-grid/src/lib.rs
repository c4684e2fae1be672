//! 2D grid maps for the `wayfind` search core.
//!
//! The core searches implicit graphs; this crate supplies one: a
//! [`Terrain`] of walls and weighted floor cells, and a [`GridRequest`]
//! that exposes it to [`wayfind`] as a [`wayfind::Request`].
//!
//! ```
//! use wayfind::{Strategy, find_path, path_cost};
//! use wayfind_grid::{GridRequest, Point, Terrain};
//!
//! let terrain = Terrain::from_ascii(
//!     "
//!     ..#..
//!     ..#..
//!     .....
//!     ",
//! )
//! .unwrap();
//! let goal = Point::new(4, 0);
//! let request = GridRequest::new(&terrain, goal);
//!
//! let path = find_path(Point::new(0, 0), goal, Strategy::AStar, &request)
//!     .into_path()
//!     .unwrap();
//! assert_eq!(path_cost(&request, &path), 8);
//! ```

mod distance;
mod error;
mod point;
mod request;
mod terrain;

pub use distance::{chebyshev, manhattan};
pub use error::GridError;
pub use point::Point;
pub use request::{GridRequest, IMPASSABLE, Movement};
pub use terrain::Terrain;
