//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::error::{MosaicError, MosaicResult};
use crate::raster::{decode_tile, RasterTile};
use crate::source::source::TileSource;
use async_trait::async_trait;
use tokio::fs;

/// Tiles from a local `{z}/{x}/{y}.{extension}` directory tree
#[derive(Clone)]
pub struct FileSource {
    pub basepath: String,
    pub extension: String,
}

impl FileSource {
    pub fn tile_path(&self, zoom: u8, x: u32, y: u32) -> String {
        format!("{}/{}/{}/{}.{}", self.basepath, zoom, x, y, self.extension)
    }
}

#[async_trait]
impl TileSource for FileSource {
    fn info(&self) -> String {
        format!("Tile directory: {}", self.basepath)
    }
    async fn fetch_tile(&self, zoom: u8, x: u32, y: u32) -> MosaicResult<RasterTile> {
        let fullpath = self.tile_path(zoom, x, y);
        debug!("FileSource.read {}", fullpath);
        let data = fs::read(&fullpath)
            .await
            .map_err(|e| MosaicError::tile_fetch(zoom, x, y, format!("{}: {}", fullpath, e)))?;
        decode_tile(&data, zoom, x, y)
    }
}
