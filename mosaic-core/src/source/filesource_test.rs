//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::{parse_config, ApplicationCfg, Config};
use crate::error::MosaicError;
use crate::source::{FileSource, TileSource, Tilesource};
use image::{Rgba, RgbaImage};
use std::env;
use std::fs;

fn tile_dir(name: &str) -> String {
    let mut dir = env::temp_dir();
    dir.push(name);
    let basepath = format!("{}", &dir.display());
    let _ = fs::remove_dir_all(&basepath);
    basepath
}

#[tokio::test]
async fn test_filesource() {
    let basepath = tile_dir("geomosaic_filesource_test");
    fs::create_dir_all(format!("{}/3/4", basepath)).unwrap();
    RgbaImage::from_pixel(256, 256, Rgba([1, 2, 3, 255]))
        .save(format!("{}/3/4/5.png", basepath))
        .unwrap();
    RgbaImage::from_pixel(100, 100, Rgba([1, 2, 3, 255]))
        .save(format!("{}/3/4/6.png", basepath))
        .unwrap();

    let source = FileSource {
        basepath: basepath.clone(),
        extension: "png".to_string(),
    };
    assert_eq!(source.tile_path(3, 4, 5), format!("{}/3/4/5.png", basepath));

    // Hit
    let tile = source.fetch_tile(3, 4, 5).await.unwrap();
    assert_eq!(tile.dimensions(), (256, 256));
    assert_eq!(*tile.get_pixel(10, 10), Rgba([1, 2, 3, 255]));

    // Wrong size
    assert!(matches!(
        source.fetch_tile(3, 4, 6).await,
        Err(MosaicError::TileFetch { .. })
    ));

    // Miss
    match source.fetch_tile(3, 4, 7).await {
        Err(MosaicError::TileFetch { zoom, x, y, message }) => {
            assert_eq!((zoom, x, y), (3, 4, 7));
            assert!(message.contains("3/4/7.png"));
        }
        other => panic!("unexpected result {:?}", other.map(|t| t.dimensions())),
    }
}

#[test]
fn test_source_from_config() {
    let toml = r#"
        [source]
        path = "/data/tiles"
        extension = "jpg"

        [output]
        dir = "/tmp"
        "#;
    let config: ApplicationCfg = parse_config(toml.to_string(), "").unwrap();
    match Tilesource::from_config(&config).unwrap() {
        Tilesource::File(source) => {
            assert_eq!(source.basepath, "/data/tiles");
            assert_eq!(source.extension, "jpg");
        }
        _ => panic!("file source expected"),
    }

    let toml = r#"
        [source]
        url = "https://tile.openstreetmap.org/{z}/{x}/{y}.png"
        retries = 3

        [output]
        dir = "/tmp"
        "#;
    let config: ApplicationCfg = parse_config(toml.to_string(), "").unwrap();
    let source = Tilesource::from_config(&config).unwrap();
    assert_eq!(
        source.info(),
        "Tile server: https://tile.openstreetmap.org/{z}/{x}/{y}.png"
    );

    let toml = r#"
        [source]

        [output]
        dir = "/tmp"
        "#;
    let config: ApplicationCfg = parse_config(toml.to_string(), "").unwrap();
    assert_eq!(
        Tilesource::from_config(&config).err(),
        Some("Either 'url' or 'path' is required in [source]".to_string())
    );
}

#[test]
fn test_gen_config() {
    let toml = format!("{}\n[output]\ndir = \"/tmp\"\n", Tilesource::gen_config());
    let config: ApplicationCfg = parse_config(toml, "").unwrap();
    assert!(Tilesource::from_config(&config).is_ok());
}
