//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::{parse_config, ApplicationCfg, Config};
use crate::output::{ImageWriter, OutputFormat};
use image::{Rgba, RgbaImage};
use mosaic_grid::{CropRect, TilePlan, TileRange};
use std::env;
use std::fs;
use std::path::Path;

fn plan(column: u32, row: u32) -> TilePlan {
    TilePlan {
        column,
        row,
        tiles: TileRange {
            minx: 0,
            miny: 0,
            maxx: 0,
            maxy: 0,
        },
        crop: CropRect {
            left: 0,
            top: 0,
            right: 64,
            bottom: 32,
        },
    }
}

fn out_dir(name: &str) -> String {
    let mut dir = env::temp_dir();
    dir.push(name);
    let basepath = format!("{}", &dir.display());
    let _ = fs::remove_dir_all(&basepath);
    basepath
}

#[test]
fn test_output_format() {
    assert_eq!("png".parse::<OutputFormat>(), Ok(OutputFormat::Png));
    assert_eq!("JPEG".parse::<OutputFormat>(), Ok(OutputFormat::Jpeg));
    assert_eq!("jpg".parse::<OutputFormat>(), Ok(OutputFormat::Jpeg));
    assert_eq!(
        "tiff".parse::<OutputFormat>(),
        Err("Unsupported output format 'tiff', use png or jpeg".to_string())
    );
}

#[test]
fn test_write_png() {
    let dir = out_dir("geomosaic_writer_png");
    let writer = ImageWriter {
        dir: format!("{}/nested", dir),
        prefix: "zurich".to_string(),
        format: OutputFormat::Png,
    };
    let image = RgbaImage::from_pixel(64, 32, Rgba([200, 100, 50, 255]));
    let path = writer.write(&plan(2, 3), &image).unwrap();
    assert_eq!(path, format!("{}/nested/zurich_2_3.png", dir));
    assert!(Path::new(&path).exists());

    let written = image::open(&path).unwrap().to_rgba8();
    assert_eq!(written.dimensions(), (64, 32));
    assert_eq!(*written.get_pixel(5, 5), Rgba([200, 100, 50, 255]));
}

#[test]
fn test_write_jpeg() {
    let dir = out_dir("geomosaic_writer_jpeg");
    let writer = ImageWriter {
        dir: dir.clone(),
        prefix: "mosaic".to_string(),
        format: OutputFormat::Jpeg,
    };
    let image = RgbaImage::from_pixel(64, 32, Rgba([0, 0, 0, 255]));
    let path = writer.write(&plan(0, 1), &image).unwrap();
    assert_eq!(path, format!("{}/mosaic_0_1.jpg", dir));
    assert_eq!(image::open(&path).unwrap().to_rgb8().dimensions(), (64, 32));
}

#[test]
fn test_writer_from_config() {
    let toml = r#"
        [source]
        url = "https://tile.openstreetmap.org/{z}/{x}/{y}.png"

        [output]
        dir = "/tmp/out"
        format = "jpeg"
        "#;
    let config: ApplicationCfg = parse_config(toml.to_string(), "").unwrap();
    let writer = ImageWriter::from_config(&config).unwrap();
    assert_eq!(writer.dir, "/tmp/out");
    assert_eq!(writer.prefix, "mosaic");
    assert_eq!(writer.format, OutputFormat::Jpeg);
    assert_eq!(writer.info(), "Output directory: /tmp/out");

    let toml = format!(
        "[source]\npath = \"/tiles\"\n{}",
        ImageWriter::gen_config()
    );
    let config: ApplicationCfg = parse_config(toml, "").unwrap();
    assert_eq!(
        ImageWriter::from_config(&config).unwrap().format,
        OutputFormat::Png
    );
}
