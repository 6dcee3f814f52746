//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::error::{MosaicError, MosaicResult};
use crate::raster::{decode_tile, RasterTile};
use crate::source::source::TileSource;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tokio::time;

const DEFAULT_USER_AGENT: &str = concat!("geomosaic/", env!("CARGO_PKG_VERSION"));
const RETRY_DELAY: Duration = Duration::from_millis(500);

/// Tiles from a tile server URL template like `https://tile.example.com/{z}/{x}/{y}.png`
#[derive(Clone)]
pub struct HttpSource {
    pub url: String,
    retries: u8,
    client: Client,
}

impl HttpSource {
    pub fn new(
        url: &str,
        user_agent: Option<&str>,
        timeout: Option<Duration>,
        retries: u8,
    ) -> Result<HttpSource, String> {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(format!("Tile URL '{}' must start with http:// or https://", url));
        }
        for placeholder in &["{z}", "{x}", "{y}"] {
            if !url.contains(placeholder) {
                return Err(format!(
                    "Tile URL '{}' is missing the placeholder {}",
                    url, placeholder
                ));
            }
        }
        let mut builder = Client::builder().user_agent(user_agent.unwrap_or(DEFAULT_USER_AGENT));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| format!("Error creating HTTP client: {}", e))?;
        Ok(HttpSource {
            url: url.to_string(),
            retries,
            client,
        })
    }
    pub fn tile_url(&self, zoom: u8, x: u32, y: u32) -> String {
        self.url
            .replace("{z}", &zoom.to_string())
            .replace("{x}", &x.to_string())
            .replace("{y}", &y.to_string())
    }
    async fn request(&self, url: &str) -> Result<Vec<u8>, reqwest::Error> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait]
impl TileSource for HttpSource {
    fn info(&self) -> String {
        format!("Tile server: {}", self.url)
    }
    async fn fetch_tile(&self, zoom: u8, x: u32, y: u32) -> MosaicResult<RasterTile> {
        let url = self.tile_url(zoom, x, y);
        let mut attempt = 0;
        loop {
            debug!("HttpSource.fetch {}", url);
            match self.request(&url).await {
                Ok(data) => return decode_tile(&data, zoom, x, y),
                Err(e) if attempt < self.retries => {
                    attempt += 1;
                    warn!(
                        "Error fetching {} (retry {}/{}): {}",
                        url, attempt, self.retries, e
                    );
                    time::sleep(RETRY_DELAY * attempt as u32).await;
                }
                Err(e) => return Err(MosaicError::tile_fetch(zoom, x, y, e)),
            }
        }
    }
}
