//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

pub mod filesource;
pub mod httpsource;
pub mod source;

#[cfg(test)]
mod filesource_test;

pub use self::filesource::FileSource;
pub use self::httpsource::HttpSource;
pub use self::source::TileSource;
use crate::core::ApplicationCfg;
use crate::core::Config;
use crate::error::MosaicResult;
use crate::raster::RasterTile;
use async_trait::async_trait;
use std::time::Duration;

#[derive(Clone)]
pub enum Tilesource {
    Http(HttpSource),
    File(FileSource),
}

#[async_trait]
impl TileSource for Tilesource {
    fn info(&self) -> String {
        match self {
            &Tilesource::Http(ref source) => source.info(),
            &Tilesource::File(ref source) => source.info(),
        }
    }
    async fn fetch_tile(&self, zoom: u8, x: u32, y: u32) -> MosaicResult<RasterTile> {
        match self {
            &Tilesource::Http(ref source) => source.fetch_tile(zoom, x, y).await,
            &Tilesource::File(ref source) => source.fetch_tile(zoom, x, y).await,
        }
    }
}

impl<'a> Config<'a, ApplicationCfg> for Tilesource {
    fn from_config(config: &ApplicationCfg) -> Result<Self, String> {
        let cfg = &config.source;
        if let Some(ref url) = cfg.url {
            if cfg.path.is_some() {
                warn!("Ignoring source path, tiles are fetched from '{}'", url);
            }
            let source = HttpSource::new(
                url,
                cfg.user_agent.as_deref(),
                cfg.timeout.map(Duration::from_secs),
                cfg.retries,
            )?;
            Ok(Tilesource::Http(source))
        } else if let Some(ref path) = cfg.path {
            Ok(Tilesource::File(FileSource {
                basepath: path.clone(),
                extension: cfg.extension.clone(),
            }))
        } else {
            Err("Either 'url' or 'path' is required in [source]".to_string())
        }
    }
    fn gen_config() -> String {
        let toml = r#"
[source]
# URL template of the tile server
url = "https://tile.openstreetmap.org/{z}/{x}/{y}.png"
#user_agent = "geomosaic"
# Request timeout in seconds
#timeout = 30
#retries = 2
# Read tiles from a {z}/{x}/{y}.png directory instead
#path = "/data/tiles"
#extension = "png"
"#;
        toml.to_string()
    }
}
