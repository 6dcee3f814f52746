//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Tile compositing and cropping

use crate::error::{MosaicError, MosaicResult};
use image::{imageops, RgbaImage};
use mosaic_grid::{CropRect, TileRange, TILE_SIZE};

/// Decoded 256x256 map tile
pub type RasterTile = RgbaImage;

/// Decode an encoded tile image and check its size
pub fn decode_tile(data: &[u8], zoom: u8, x: u32, y: u32) -> MosaicResult<RasterTile> {
    let tile = image::load_from_memory(data)
        .map_err(|e| MosaicError::tile_fetch(zoom, x, y, e))?
        .to_rgba8();
    if tile.dimensions() != (TILE_SIZE, TILE_SIZE) {
        return Err(MosaicError::tile_fetch(
            zoom,
            x,
            y,
            format!(
                "unexpected tile size {}x{}",
                tile.width(),
                tile.height()
            ),
        ));
    }
    Ok(tile)
}

/// Place `tiles` (in column-major order of `range`) side by side
pub fn composite(tiles: &[RasterTile], range: &TileRange) -> MosaicResult<RgbaImage> {
    if tiles.len() != range.tile_count() {
        return Err(MosaicError::TileCount {
            expected: range.tile_count(),
            actual: tiles.len(),
        });
    }
    let (width, height) = range.pixel_size();
    let mut mosaic = RgbaImage::new(width, height);
    for ((x, y), tile) in range.tiles().zip(tiles) {
        let offset_x = (x - range.minx) * TILE_SIZE;
        let offset_y = (y - range.miny) * TILE_SIZE;
        imageops::replace(&mut mosaic, tile, offset_x as i64, offset_y as i64);
    }
    Ok(mosaic)
}

/// Cut `rect` out of `raster`
pub fn crop(raster: &RgbaImage, rect: &CropRect) -> MosaicResult<RgbaImage> {
    let (width, height) = raster.dimensions();
    if !rect.fits(width, height) {
        return Err(MosaicError::CropOutOfBounds {
            rect: *rect,
            width,
            height,
        });
    }
    Ok(imageops::crop_imm(raster, rect.left, rect.top, rect.width(), rect.height()).to_image())
}
