//! A library for planning map tile mosaics
//!
//! ## Planning output images
//!
//! ```rust
//! use mosaic_grid::{GeoBounds, Resolution, TileGridPlanner};
//!
//! let planner = TileGridPlanner::new(
//!     GeoBounds::new(80.0, 170.0, -80.0, -170.0),
//!     Resolution::new(256, 300),
//!     Some(1),
//! )
//! .unwrap();
//! assert_eq!(planner.multipliers(), (2, 1));
//! for plan in &planner {
//!     println!(
//!         "Image {}/{}: tiles {:?}, crop {:?}",
//!         plan.column, plan.row, plan.tiles, plan.crop
//!     );
//! }
//! ```
//!
//! ## Automatic zoom level
//!
//! ```rust
//! use mosaic_grid::{GeoBounds, Resolution, TileGridPlanner};
//!
//! let planner = TileGridPlanner::new(
//!     GeoBounds::new(80.0, 170.0, -80.0, -170.0),
//!     Resolution::new(60, 40),
//!     None,
//! )
//! .unwrap();
//! assert_eq!(planner.zoom(), 1);
//! assert_eq!(planner.len(), 96);
//! ```
//!
//! ## Tile coordinates
//!
//! ```rust
//! use mosaic_grid::{project, TileCoord};
//!
//! assert_eq!(project(47.3769, 8.5417, 10), TileCoord { x: 536, y: 358 });
//! ```

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

mod error;
mod grid;
mod grid_iterator;
mod planner;

pub use error::GridError;
pub use grid::{
    check_in_range, check_zoom, project, tiles_per_axis, CropRect, GeoBounds, Resolution,
    TileCoord, TilePlan, TileRange, MAX_ZOOM, TILE_SIZE,
};
pub use grid_iterator::{TileIterator, WindowIterator};
pub use planner::{
    multipliers, plan_grid, plan_window, select_zoom, tile_block, tile_pixel_span, validate,
    GridPlan, TileGridPlanner, ValidatedInput,
};
