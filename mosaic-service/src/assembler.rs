//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use futures_util::stream::{self, Stream, StreamExt, TryStreamExt};
use image::RgbaImage;
use mosaic_core::error::{MosaicError, MosaicResult};
use mosaic_core::raster::{composite, crop, RasterTile};
use mosaic_core::source::TileSource;
use mosaic_grid::{TileGridPlanner, TilePlan};
use std::cmp;
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Number of output images assembled ahead by default
pub const DEFAULT_PIPELINE: usize = 2;

/// Default limit of tile requests in flight
pub fn default_concurrency() -> usize {
    cmp::min(num_cpus::get() * 2, 64)
}

/// Turns tile plans into output images.
///
/// All plans share one semaphore, so the number of concurrent tile
/// requests never exceeds `concurrency`, however many images are
/// assembled ahead.
#[derive(Clone)]
pub struct ImageAssembler {
    source: Arc<dyn TileSource>,
    permits: Arc<Semaphore>,
    concurrency: usize,
    pipeline: usize,
}

impl ImageAssembler {
    pub fn new(source: Arc<dyn TileSource>, concurrency: usize, pipeline: usize) -> ImageAssembler {
        let concurrency = cmp::max(concurrency, 1);
        ImageAssembler {
            source,
            permits: Arc::new(Semaphore::new(concurrency)),
            concurrency,
            pipeline: cmp::max(pipeline, 1),
        }
    }
    pub fn concurrency(&self) -> usize {
        self.concurrency
    }
    pub fn pipeline(&self) -> usize {
        self.pipeline
    }
    async fn fetch(&self, zoom: u8, x: u32, y: u32) -> MosaicResult<RasterTile> {
        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|e| MosaicError::tile_fetch(zoom, x, y, e))?;
        self.source.fetch_tile(zoom, x, y).await
    }
    /// Fetch all tiles of `plan`, composite and crop them.
    ///
    /// The first failing tile aborts the plan.
    pub async fn assemble(&self, zoom: u8, plan: &TilePlan) -> MosaicResult<RgbaImage> {
        debug!(
            "assembling image {}/{} from tiles {:?}",
            plan.column, plan.row, plan.tiles
        );
        let tiles: Vec<RasterTile> = stream::iter(plan.tiles.tiles())
            .map(|(x, y)| self.fetch(zoom, x, y))
            .buffered(plan.tiles.tile_count())
            .try_collect()
            .await?;
        let raster = composite(&tiles, &plan.tiles)?;
        crop(&raster, &plan.crop)
    }
    /// Lazy stream of assembled images in plan order.
    ///
    /// Up to `pipeline` images are in progress at the same time. Every call
    /// starts a new pass over the plans.
    pub fn images<'a>(
        &'a self,
        planner: &'a TileGridPlanner,
    ) -> impl Stream<Item = MosaicResult<(TilePlan, RgbaImage)>> + 'a {
        let zoom = planner.zoom();
        stream::iter(planner.iter())
            .map(move |plan| async move {
                self.assemble(zoom, plan).await.map(|image| (*plan, image))
            })
            .buffered(self.pipeline)
    }
}
