//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::{ApplicationCfg, Config};
use crate::error::MosaicResult;
use image::{DynamicImage, ImageFormat, RgbaImage};
use mosaic_grid::TilePlan;
use std::fs;
use std::path::Path;
use std::str::FromStr;

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum OutputFormat {
    Png,
    Jpeg,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg => "jpg",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "png" => Ok(OutputFormat::Png),
            "jpg" | "jpeg" => Ok(OutputFormat::Jpeg),
            _ => Err(format!("Unsupported output format '{}', use png or jpeg", s)),
        }
    }
}

/// Writes assembled images as `{dir}/{prefix}_{column}_{row}.{ext}`
#[derive(Clone, Debug)]
pub struct ImageWriter {
    pub dir: String,
    pub prefix: String,
    pub format: OutputFormat,
}

impl ImageWriter {
    pub fn info(&self) -> String {
        format!("Output directory: {}", self.dir)
    }
    pub fn image_path(&self, plan: &TilePlan) -> String {
        format!(
            "{}/{}_{}_{}.{}",
            self.dir,
            self.prefix,
            plan.column,
            plan.row,
            self.format.extension()
        )
    }
    /// Write image and return its path
    pub fn write(&self, plan: &TilePlan, image: &RgbaImage) -> MosaicResult<String> {
        let fullpath = self.image_path(plan);
        debug!("ImageWriter.write {}", fullpath);
        if let Some(parent) = Path::new(&fullpath).parent() {
            fs::create_dir_all(parent)?;
        }
        match self.format {
            OutputFormat::Png => image.save_with_format(&fullpath, ImageFormat::Png)?,
            // JPEG has no alpha channel
            OutputFormat::Jpeg => DynamicImage::ImageRgba8(image.clone())
                .to_rgb8()
                .save_with_format(&fullpath, ImageFormat::Jpeg)?,
        }
        Ok(fullpath)
    }
}

impl<'a> Config<'a, ApplicationCfg> for ImageWriter {
    fn from_config(config: &ApplicationCfg) -> Result<Self, String> {
        let cfg = &config.output;
        Ok(ImageWriter {
            dir: cfg.dir.clone(),
            prefix: cfg.prefix.clone(),
            format: cfg.format.parse()?,
        })
    }
    fn gen_config() -> String {
        let toml = r#"
[output]
dir = "/tmp/mosaic"
# Files are named {prefix}_{column}_{row}.png
prefix = "mosaic"
# png or jpeg
format = "png"
"#;
        toml.to_string()
    }
}
