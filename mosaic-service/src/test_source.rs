//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use async_trait::async_trait;
use image::{Rgba, RgbaImage};
use mosaic_core::error::{MosaicError, MosaicResult};
use mosaic_core::raster::RasterTile;
use mosaic_core::source::TileSource;
use mosaic_grid::TILE_SIZE;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::time;

/// Tiles filled with `[x, y, zoom, 255]`, optionally failing for one tile
#[derive(Default)]
pub struct ColorSource {
    pub fail_on: Option<(u32, u32)>,
    /// Vary response times per tile
    pub jitter: bool,
    in_flight: AtomicUsize,
    pub max_in_flight: AtomicUsize,
    pub requests: AtomicUsize,
}

impl ColorSource {
    pub fn failing(x: u32, y: u32) -> ColorSource {
        ColorSource {
            fail_on: Some((x, y)),
            ..Default::default()
        }
    }
    pub fn jittering() -> ColorSource {
        ColorSource {
            jitter: true,
            ..Default::default()
        }
    }
}

pub fn tile_color(zoom: u8, x: u32, y: u32) -> Rgba<u8> {
    Rgba([(x % 256) as u8, (y % 256) as u8, zoom, 255])
}

#[async_trait]
impl TileSource for ColorSource {
    fn info(&self) -> String {
        "Color tiles".to_string()
    }
    async fn fetch_tile(&self, zoom: u8, x: u32, y: u32) -> MosaicResult<RasterTile> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);
        let delay = if self.jitter { (x * 7 + y * 3) % 5 } else { 1 };
        time::sleep(Duration::from_millis(delay as u64)).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        if self.fail_on == Some((x, y)) {
            return Err(MosaicError::tile_fetch(zoom, x, y, "tile server error"));
        }
        Ok(RgbaImage::from_pixel(
            TILE_SIZE,
            TILE_SIZE,
            tile_color(zoom, x, y),
        ))
    }
}
