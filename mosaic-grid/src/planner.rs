//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Mosaic planning

use crate::error::GridError;
use crate::grid::{
    check_in_range, check_zoom, project, CropRect, GeoBounds, Resolution, TileCoord, TilePlan,
    TileRange, MAX_ZOOM, TILE_SIZE,
};
use crate::grid_iterator::WindowIterator;

/// Input which passed validation
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct ValidatedInput {
    pub bounds: GeoBounds,
    pub resolution: Resolution,
    pub zoom: Option<u8>,
}

/// Check bounds, resolution and an explicitly requested zoom level
pub fn validate(
    bounds: &GeoBounds,
    resolution: &Resolution,
    zoom: Option<u8>,
) -> Result<ValidatedInput, GridError> {
    // Negated comparisons reject NaN as well
    for (lat, _) in bounds.corners().iter() {
        if !(lat.abs() < 90.0) {
            return Err(GridError::InvalidLatitude(*lat));
        }
    }
    for (_, lng) in bounds.corners().iter() {
        if !(lng.abs() < 180.0) {
            return Err(GridError::InvalidLongitude(*lng));
        }
    }
    if resolution.width == 0 || resolution.height == 0 {
        return Err(GridError::InvalidResolution {
            width: resolution.width as i64,
            height: resolution.height as i64,
        });
    }
    let zoom = match zoom {
        Some(z) => Some(check_zoom(z as i64)?),
        None => None,
    };
    Ok(ValidatedInput {
        bounds: *bounds,
        resolution: *resolution,
        zoom,
    })
}

/// Pixel span `(|dx| * 256, |dy| * 256)` between the corner tiles of `bounds`
pub fn tile_pixel_span(bounds: &GeoBounds, zoom: u8) -> (i64, i64) {
    let c1 = project(bounds.lat1, bounds.lng1, zoom);
    let c2 = project(bounds.lat2, bounds.lng2, zoom);
    (
        (c1.x - c2.x).abs() * TILE_SIZE as i64,
        (c1.y - c2.y).abs() * TILE_SIZE as i64,
    )
}

/// Lowest zoom level at which `bounds` spans more tile pixels than `resolution` in both axes
pub fn select_zoom(bounds: &GeoBounds, resolution: &Resolution) -> Result<u8, GridError> {
    for zoom in 0..=MAX_ZOOM {
        let (span_x, span_y) = tile_pixel_span(bounds, zoom);
        if span_x > resolution.width as i64 && span_y > resolution.height as i64 {
            debug!(
                "zoom level {} spans {}x{} pixels for resolution {}",
                zoom, span_x, span_y, resolution
            );
            return Ok(zoom);
        }
    }
    Err(GridError::NoFeasibleZoom {
        width: resolution.width,
        height: resolution.height,
    })
}

/// Number of whole output images `(columns, rows)` fitting into the tile block spanned by two corners
pub fn multipliers(
    corner1: &TileCoord,
    corner2: &TileCoord,
    zoom: u8,
    resolution: &Resolution,
) -> Result<(u32, u32), GridError> {
    let len_x = ((corner1.x - corner2.x).abs() + 1) * TILE_SIZE as i64;
    let len_y = ((corner1.y - corner2.y).abs() + 1) * TILE_SIZE as i64;
    if len_x == 0 || len_y == 0 {
        return Err(GridError::ZeroSpan { zoom });
    }
    let (width, height) = (resolution.width as i64, resolution.height as i64);
    if len_x < width || len_y < height {
        let ratio = f64::min(len_x as f64 / width as f64, len_y as f64 / height as f64);
        let deficit = (1.0 / ratio).log2().ceil() as u32;
        return Err(GridError::ResolutionUnattainable {
            zoom,
            recommended_zoom: zoom as u32 + deficit + 1,
        });
    }
    Ok(((len_x / width) as u32, (len_y / height) as u32))
}

/// Tile block with normalized upper left and bottom right corner
pub fn tile_block(corner1: &TileCoord, corner2: &TileCoord) -> TileRange {
    TileRange {
        minx: corner1.x.min(corner2.x) as u32,
        miny: corner1.y.min(corner2.y) as u32,
        maxx: corner1.x.max(corner2.x) as u32,
        maxy: corner1.y.max(corner2.y) as u32,
    }
}

fn div_ceil(value: u32, divisor: u32) -> u32 {
    (value + divisor - 1) / divisor
}

/// Tiles and crop rectangle of the output image at `(column, row)` within `block`.
///
/// The window must fit into the block, i.e. `(column + 1) * width <= block width in pixels`.
pub fn plan_window(block: &TileRange, resolution: &Resolution, column: u32, row: u32) -> TilePlan {
    // Window in pixels relative to the block origin
    let left = column * resolution.width;
    let top = row * resolution.height;
    let right = left + resolution.width;
    let bottom = top + resolution.height;

    // Whole tiles between block origin and window
    let from_top_x = left / TILE_SIZE;
    let from_top_y = top / TILE_SIZE;

    // Whole tiles between window and the last tile of the block
    let last_x = block.maxx - block.minx;
    let last_y = block.maxy - block.miny;
    let from_bottom_x = last_x + 1 - div_ceil(right, TILE_SIZE);
    let from_bottom_y = last_y + 1 - div_ceil(bottom, TILE_SIZE);

    let tiles = TileRange {
        minx: block.minx + from_top_x,
        miny: block.miny + from_top_y,
        maxx: block.maxx - from_bottom_x,
        maxy: block.maxy - from_bottom_y,
    };
    let crop_left = left - from_top_x * TILE_SIZE;
    let crop_top = top - from_top_y * TILE_SIZE;
    let crop = CropRect {
        left: crop_left,
        top: crop_top,
        right: crop_left + resolution.width,
        bottom: crop_top + resolution.height,
    };
    TilePlan {
        column,
        row,
        tiles,
        crop,
    }
}

/// Ordered output image plans for a tile block
#[derive(PartialEq, Clone, Debug, Serialize)]
pub struct GridPlan {
    pub zoom: u8,
    /// Tiles covering the requested bounds
    pub block: TileRange,
    /// Number of output images from west to east
    pub columns: u32,
    /// Number of output images from north to south
    pub rows: u32,
    /// Plans in column-major order
    pub plans: Vec<TilePlan>,
}

/// Plan all output images for the tile block spanned by two (range checked) corner tiles
pub fn plan_grid(
    corner1: &TileCoord,
    corner2: &TileCoord,
    zoom: u8,
    resolution: &Resolution,
) -> Result<GridPlan, GridError> {
    let (columns, rows) = multipliers(corner1, corner2, zoom, resolution)?;
    let block = tile_block(corner1, corner2);
    let plans = WindowIterator::new(columns, rows)
        .map(|(column, row)| plan_window(&block, resolution, column, row))
        .collect();
    Ok(GridPlan {
        zoom,
        block,
        columns,
        rows,
        plans,
    })
}

/// Tile mosaic planner for a bounding box and output resolution.
///
/// All plans are computed on construction. Iterating is restartable and
/// always yields the plans column by column, each column from north to south.
#[derive(PartialEq, Clone, Debug, Serialize)]
pub struct TileGridPlanner {
    bounds: GeoBounds,
    resolution: Resolution,
    grid: GridPlan,
}

impl TileGridPlanner {
    /// Validate input, select a zoom level if none is given and plan all output images
    pub fn new(
        bounds: GeoBounds,
        resolution: Resolution,
        zoom: Option<u8>,
    ) -> Result<TileGridPlanner, GridError> {
        let input = validate(&bounds, &resolution, zoom)?;
        let zoom = match input.zoom {
            Some(zoom) => zoom,
            None => {
                let zoom = select_zoom(&input.bounds, &input.resolution)?;
                info!("Using zoom level {}", zoom);
                zoom
            }
        };
        let corner1 = project(bounds.lat1, bounds.lng1, zoom);
        let corner2 = project(bounds.lat2, bounds.lng2, zoom);
        check_in_range(&corner1, zoom)?;
        check_in_range(&corner2, zoom)?;
        let grid = plan_grid(&corner1, &corner2, zoom, &resolution)?;
        debug!(
            "tile block {:?} at zoom level {}: {}x{} images",
            grid.block, zoom, grid.columns, grid.rows
        );
        Ok(TileGridPlanner {
            bounds,
            resolution,
            grid,
        })
    }
    pub fn bounds(&self) -> &GeoBounds {
        &self.bounds
    }
    pub fn resolution(&self) -> &Resolution {
        &self.resolution
    }
    pub fn zoom(&self) -> u8 {
        self.grid.zoom
    }
    /// Tiles covering the whole bounding box
    pub fn block(&self) -> &TileRange {
        &self.grid.block
    }
    /// Number of output images `(columns, rows)`
    pub fn multipliers(&self) -> (u32, u32) {
        (self.grid.columns, self.grid.rows)
    }
    pub fn grid(&self) -> &GridPlan {
        &self.grid
    }
    pub fn plans(&self) -> &[TilePlan] {
        &self.grid.plans
    }
    pub fn len(&self) -> usize {
        self.grid.plans.len()
    }
    pub fn is_empty(&self) -> bool {
        self.grid.plans.is_empty()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, TilePlan> {
        self.grid.plans.iter()
    }
}

impl<'a> IntoIterator for &'a TileGridPlanner {
    type Item = &'a TilePlan;
    type IntoIter = std::slice::Iter<'a, TilePlan>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
