//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use thiserror::Error;

/// Validation and planning errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("Latitude {0} out of range, must be bigger than -90 and smaller than 90")]
    InvalidLatitude(f64),

    #[error("Longitude {0} out of range, must be bigger than -180 and smaller than 180")]
    InvalidLongitude(f64),

    #[error("Invalid resolution {width}x{height}, width and height must be positive")]
    InvalidResolution { width: i64, height: i64 },

    #[error("Zoom level {0} out of range, must be between 0 and 19")]
    InvalidZoom(i64),

    #[error("Tile {x}/{y} outside of the tile pyramid at zoom level {zoom}. Please refer to https://wiki.openstreetmap.org/wiki/Slippy_map_tilenames#Zoom_levels for the lat/lng range of a zoom level")]
    TileOutOfRange { x: i64, y: i64, zoom: u8 },

    #[error("Impossible to return an image with resolution {width}x{height} within the given bounds at zoom levels 0 to 19")]
    NoFeasibleZoom { width: u32, height: u32 },

    #[error("Bounds collapse to an empty tile block at zoom level {zoom}")]
    ZeroSpan { zoom: u8 },

    #[error("Unable to meet the resolution requirement at zoom level {zoom}. Recommended minimum zoom level: {recommended_zoom}")]
    ResolutionUnattainable { zoom: u8, recommended_zoom: u32 },
}
