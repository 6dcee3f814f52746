//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use mosaic_grid::{CropRect, GridError};
use thiserror::Error;

pub type MosaicResult<T> = Result<T, MosaicError>;

/// Errors while assembling output images
#[derive(Debug, Error)]
pub enum MosaicError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("Error fetching tile {zoom}/{x}/{y}: {message}")]
    TileFetch {
        zoom: u8,
        x: u32,
        y: u32,
        message: String,
    },

    #[error("Crop rectangle {rect:?} exceeds raster of {width}x{height} pixels")]
    CropOutOfBounds {
        rect: CropRect,
        width: u32,
        height: u32,
    },

    #[error("Expected {expected} tiles for compositing, got {actual}")]
    TileCount { expected: usize, actual: usize },

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MosaicError {
    pub fn tile_fetch<E: ToString>(zoom: u8, x: u32, y: u32, err: E) -> MosaicError {
        MosaicError::TileFetch {
            zoom,
            x,
            y,
            message: err.to_string(),
        }
    }
}
