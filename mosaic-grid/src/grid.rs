//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Slippy map tile grid

use crate::error::GridError;
use crate::grid_iterator::TileIterator;
use std::f64::consts;
use std::fmt;
use std::str::FromStr;

/// Width and height of a tile, in pixels
pub const TILE_SIZE: u32 = 256;

/// Deepest supported pyramid level
pub const MAX_ZOOM: u8 = 19;

/// Geographic bounding box given by two opposite lat/lng corners.
///
/// The corners may be given in any order, the planner normalizes them.
#[derive(PartialEq, Clone, Copy, Debug, Serialize, Deserialize)]
pub struct GeoBounds {
    pub lat1: f64,
    pub lng1: f64,
    pub lat2: f64,
    pub lng2: f64,
}

impl GeoBounds {
    pub fn new(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> GeoBounds {
        GeoBounds {
            lat1,
            lng1,
            lat2,
            lng2,
        }
    }
    /// Corners as `(lat, lng)` pairs
    pub fn corners(&self) -> [(f64, f64); 2] {
        [(self.lat1, self.lng1), (self.lat2, self.lng2)]
    }
}

impl FromStr for GeoBounds {
    type Err = String;

    /// Parse `lat1,lng1,lat2,lng2`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let arr = s
            .split(',')
            .map(|v| v.trim().parse::<f64>())
            .collect::<Result<Vec<f64>, _>>()
            .map_err(|e| format!("Error parsing bounds '{}': {}", s, e))?;
        match arr.as_slice() {
            [lat1, lng1, lat2, lng2] => Ok(GeoBounds::new(*lat1, *lng1, *lat2, *lng2)),
            _ => Err(format!(
                "Bounds '{}' must have four values lat1,lng1,lat2,lng2",
                s
            )),
        }
    }
}

/// Pixel size of every output image
#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Resolution {
        Resolution { width, height }
    }
    /// Checked construction from signed values (command line, config files)
    pub fn checked(width: i64, height: i64) -> Result<Resolution, GridError> {
        if width <= 0 || height <= 0 || width > u32::MAX as i64 || height > u32::MAX as i64 {
            return Err(GridError::InvalidResolution { width, height });
        }
        Ok(Resolution::new(width as u32, height as u32))
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Resolution {
    type Err = String;

    /// Parse `WIDTHxHEIGHT`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .split_once(|c: char| c == 'x' || c == 'X' || c == ',')
            .ok_or_else(|| format!("Resolution '{}' must be given as WIDTHxHEIGHT", s))?;
        let width = w
            .trim()
            .parse::<i64>()
            .map_err(|e| format!("Error parsing resolution width '{}': {}", w, e))?;
        let height = h
            .trim()
            .parse::<i64>()
            .map_err(|e| format!("Error parsing resolution height '{}': {}", h, e))?;
        Resolution::checked(width, height).map_err(|e| e.to_string())
    }
}

/// Check an explicitly requested zoom level
pub fn check_zoom(zoom: i64) -> Result<u8, GridError> {
    if zoom < 0 || zoom > MAX_ZOOM as i64 {
        return Err(GridError::InvalidZoom(zoom));
    }
    Ok(zoom as u8)
}

/// Tile index pair at a given zoom level.
///
/// Signed, since projecting extreme latitudes can leave the pyramid.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash, Serialize, Deserialize)]
pub struct TileCoord {
    pub x: i64,
    pub y: i64,
}

impl TileCoord {
    pub fn new(x: i64, y: i64) -> TileCoord {
        TileCoord { x, y }
    }
}

/// Number of tiles along one axis of the pyramid
pub fn tiles_per_axis(zoom: u8) -> i64 {
    1i64 << zoom
}

/// Tile containing a lat/lng position (Web Mercator, XYZ addressing, y growing southward)
pub fn project(lat: f64, lng: f64, zoom: u8) -> TileCoord {
    // Formula: https://wiki.openstreetmap.org/wiki/Slippy_map_tilenames
    let n = (zoom as f64).exp2();
    let lat_rad = lat.to_radians();
    let x = ((lng + 180.0) / 360.0 * n).floor();
    let y = ((1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / consts::PI) / 2.0 * n).floor();
    TileCoord::new(x as i64, y as i64)
}

/// Fail if the tile is outside of `[0, 2^zoom - 1]` in either axis
pub fn check_in_range(tile: &TileCoord, zoom: u8) -> Result<(), GridError> {
    let max = tiles_per_axis(zoom) - 1;
    if tile.x < 0 || tile.x > max || tile.y < 0 || tile.y > max {
        return Err(GridError::TileOutOfRange {
            x: tile.x,
            y: tile.y,
            zoom,
        });
    }
    Ok(())
}

/// Inclusive rectangle of tile indices
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash, Serialize, Deserialize)]
pub struct TileRange {
    pub minx: u32,
    pub miny: u32,
    pub maxx: u32,
    pub maxy: u32,
}

impl TileRange {
    /// Number of tile columns
    pub fn width(&self) -> u32 {
        self.maxx - self.minx + 1
    }
    /// Number of tile rows
    pub fn height(&self) -> u32 {
        self.maxy - self.miny + 1
    }
    /// Number of tiles in the range
    pub fn tile_count(&self) -> usize {
        self.width() as usize * self.height() as usize
    }
    /// Size of the composited block in pixels
    pub fn pixel_size(&self) -> (u32, u32) {
        (self.width() * TILE_SIZE, self.height() * TILE_SIZE)
    }
    /// Tiles in column-major order
    pub fn tiles(&self) -> TileIterator {
        TileIterator::new(*self)
    }
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.minx && x <= self.maxx && y >= self.miny && y <= self.maxy
    }
}

/// Pixel rectangle relative to the top left corner of a composited tile range
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash, Serialize, Deserialize)]
pub struct CropRect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CropRect {
    pub fn width(&self) -> u32 {
        self.right - self.left
    }
    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
    /// True if the rectangle fits into a raster of the given size
    pub fn fits(&self, width: u32, height: u32) -> bool {
        self.left <= self.right && self.top <= self.bottom && self.right <= width && self.bottom <= height
    }
}

/// Tiles and crop rectangle for one output image
#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
pub struct TilePlan {
    /// Grid column of the output image (west to east)
    pub column: u32,
    /// Grid row of the output image (north to south)
    pub row: u32,
    pub tiles: TileRange,
    pub crop: CropRect,
}
