//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::assembler::{default_concurrency, ImageAssembler, DEFAULT_PIPELINE};
use futures_util::stream::StreamExt;
use mosaic_core::core::{ApplicationCfg, Config};
use mosaic_core::error::MosaicResult;
use mosaic_core::output::ImageWriter;
use mosaic_core::source::{TileSource, Tilesource};
use mosaic_grid::TileGridPlanner;
use pbr::ProgressBar;
use std::io::{stderr, Stderr};
use std::sync::Arc;
use std::time::Instant;

/// Generates output images for a tile grid plan
#[derive(Clone)]
pub struct MosaicService {
    pub source: Arc<dyn TileSource>,
    pub writer: ImageWriter,
    pub concurrency: usize,
    pub pipeline: usize,
}

impl MosaicService {
    fn progress_bar(&self, images: usize) -> ProgressBar<Stderr> {
        let mut pb = ProgressBar::on(stderr(), images as u64);
        pb.message("Image ");
        pb.show_speed = false;
        pb.show_percent = false;
        pb.show_time_left = false;
        pb
    }
    /// Fetch, assemble and write all planned images.
    ///
    /// Returns the paths of the written files in plan order.
    pub fn generate(&self, planner: &TileGridPlanner, progress: bool) -> MosaicResult<Vec<String>> {
        let rt = tokio::runtime::Runtime::new()?;
        info!("{}", self.source.info());
        info!("{}", self.writer.info());
        let (columns, rows) = planner.multipliers();
        info!(
            "Generating {} images ({}x{}) at zoom level {}",
            planner.len(),
            columns,
            rows,
            planner.zoom()
        );
        let start = Instant::now();
        let paths = rt.block_on(self.generate_images(planner, progress))?;
        info!(
            "{} images written in {:.1}s",
            paths.len(),
            start.elapsed().as_secs_f64()
        );
        Ok(paths)
    }
    async fn generate_images(
        &self,
        planner: &TileGridPlanner,
        progress: bool,
    ) -> MosaicResult<Vec<String>> {
        let assembler = ImageAssembler::new(self.source.clone(), self.concurrency, self.pipeline);
        let mut pb = if progress {
            let mut pb = self.progress_bar(planner.len());
            pb.tick();
            Some(pb)
        } else {
            None
        };
        let mut paths = Vec::with_capacity(planner.len());
        let mut images = Box::pin(assembler.images(planner));
        while let Some(result) = images.next().await {
            let (plan, image) = result.map_err(|e| {
                error!("{}", e);
                e
            })?;
            paths.push(self.writer.write(&plan, &image)?);
            if let Some(ref mut pb) = pb {
                pb.inc();
            }
        }
        if let Some(ref mut pb) = pb {
            pb.finish_println("");
        }
        Ok(paths)
    }
}

impl<'a> Config<'a, ApplicationCfg> for MosaicService {
    fn from_config(config: &ApplicationCfg) -> Result<Self, String> {
        let source = Tilesource::from_config(config)?;
        let writer = ImageWriter::from_config(config)?;
        Ok(MosaicService {
            source: Arc::new(source),
            writer,
            concurrency: config
                .fetch
                .concurrency
                .unwrap_or_else(default_concurrency),
            pipeline: config.fetch.pipeline.unwrap_or(DEFAULT_PIPELINE),
        })
    }
    fn gen_config() -> String {
        let mut config = String::new();
        config.push_str(&Tilesource::gen_config());
        config.push_str(
            r#"
[fetch]
# Maximum number of concurrent tile requests (default: 2 x CPU cores, at most 64)
#concurrency = 16
# Number of images assembled ahead
#pipeline = 2
"#,
        );
        config.push_str(&ImageWriter::gen_config());
        config.push_str(
            r#"
#[region]
# lat1, lng1, lat2, lng2
#bounds = [31.2304, 121.4737, 35.6762, 139.6503]
# Pixel size of each output image
#resolution = [1280, 720]
# Automatic zoom level selection when omitted
#zoom = 8
"#,
        );
        config
    }
}
