//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use mosaic_grid::{check_zoom, GeoBounds, Resolution};
use serde::Deserialize;
use std;
use std::collections::HashMap;
use std::env;
use std::error::Error;
use std::fs::File;
use std::io::prelude::*;
use tera::{Context, Tera};
use toml::Value;

pub trait Config<'a, C: Deserialize<'a>>
where
    Self: std::marker::Sized,
{
    /// Read configuration
    fn from_config(config: &C) -> Result<Self, String>;
    /// Generate configuration template
    fn gen_config() -> String;
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationCfg {
    pub source: SourceCfg,
    #[serde(default)]
    pub fetch: FetchCfg,
    pub output: OutputCfg,
    pub region: Option<RegionCfg>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct SourceCfg {
    /// URL template with `{z}`, `{x}` and `{y}` placeholders
    pub url: Option<String>,
    /// Tile directory with `{z}/{x}/{y}.{extension}` layout
    pub path: Option<String>,
    #[serde(default = "default_extension")]
    pub extension: String,
    pub user_agent: Option<String>,
    /// Request timeout in seconds
    pub timeout: Option<u64>,
    /// Number of retries after a failed request
    #[serde(default)]
    pub retries: u8,
}

pub fn default_extension() -> String {
    "png".to_string()
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct FetchCfg {
    /// Maximum number of tile requests in flight
    pub concurrency: Option<usize>,
    /// Number of output images assembled ahead
    pub pipeline: Option<usize>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct OutputCfg {
    pub dir: String,
    #[serde(default = "default_prefix")]
    pub prefix: String,
    /// png or jpeg
    #[serde(default = "default_extension")]
    pub format: String,
}

pub fn default_prefix() -> String {
    "mosaic".to_string()
}

#[derive(Deserialize, Clone, Debug)]
pub struct RegionCfg {
    /// lat1, lng1, lat2, lng2
    pub bounds: (f64, f64, f64, f64),
    /// width, height
    pub resolution: (i64, i64),
    pub zoom: Option<i64>,
}

impl RegionCfg {
    pub fn bounds(&self) -> GeoBounds {
        let (lat1, lng1, lat2, lng2) = self.bounds;
        GeoBounds::new(lat1, lng1, lat2, lng2)
    }
    pub fn resolution(&self) -> Result<Resolution, String> {
        let (width, height) = self.resolution;
        Resolution::checked(width, height).map_err(|e| e.to_string())
    }
    pub fn zoom(&self) -> Result<Option<u8>, String> {
        match self.zoom {
            Some(zoom) => check_zoom(zoom).map(Some).map_err(|e| e.to_string()),
            None => Ok(None),
        }
    }
}

pub const DEFAULT_CONFIG: &'static str = r#"
[source]
url = "https://tile.openstreetmap.org/{z}/{x}/{y}.png"

[output]
dir = "."
"#;

/// Load and parse the config file into an config struct.
pub fn read_config<'a, T: Deserialize<'a>>(path: &str) -> Result<T, String> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(_) => {
            return Err("Could not find config file!".to_string());
        }
    };
    let mut config_toml = String::new();
    if let Err(err) = file.read_to_string(&mut config_toml) {
        return Err(format!("Error while reading config: [{}]", err));
    };

    parse_config(config_toml, path)
}

/// Parse the configuration into an config struct.
pub fn parse_config<'a, T: Deserialize<'a>>(config_toml: String, path: &str) -> Result<T, String> {
    // Parse template
    let mut tera = Tera::default();
    tera.add_raw_template(path, &config_toml)
        .map_err(|e| format!("Template error: {}", e))?;
    let mut context = Context::new();
    let mut env = HashMap::new();
    for (key, value) in env::vars() {
        env.insert(key, value);
    }
    context.insert("env", &env);
    let toml = tera.render(path, &context).map_err(|e| match e.source() {
        Some(source) => format!("Template error: {}", source),
        None => format!("Template error: {}", e),
    })?;

    toml.parse::<Value>()
        .and_then(|cfg| cfg.try_into::<T>())
        .map_err(|err| format!("{} - {}", path, err))
}
