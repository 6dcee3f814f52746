//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::error::MosaicResult;
use crate::raster::RasterTile;
use async_trait::async_trait;

/// Provider of 256x256 map tiles in XYZ addressing scheme
#[async_trait]
pub trait TileSource: Send + Sync {
    fn info(&self) -> String;
    /// Fetch and decode a single tile. Retrying is up to the implementation.
    async fn fetch_tile(&self, zoom: u8, x: u32, y: u32) -> MosaicResult<RasterTile>;
}
