//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::{read_config, ApplicationCfg, DEFAULT_CONFIG};
use crate::core::parse_config;
use mosaic_grid::{GeoBounds, Resolution};
use std::env;

#[test]
fn test_load_config() {
    let config = read_config("src/test/example.toml");
    println!("{:#?}", config);
    let config: ApplicationCfg = config.expect("load_config returned Err");
    assert_eq!(
        config.source.url,
        Some("https://tile.openstreetmap.org/{z}/{x}/{y}.png".to_string())
    );
    assert_eq!(config.source.path, None);
    assert_eq!(config.source.extension, "png");
    assert_eq!(config.source.retries, 2);
    assert_eq!(config.source.timeout, Some(30));
    assert_eq!(config.fetch.concurrency, Some(8));
    assert_eq!(config.fetch.pipeline, Some(2));
    assert_eq!(config.output.dir, "/tmp/geomosaic");
    assert_eq!(config.output.prefix, "shanghai_tokyo");
    assert_eq!(config.output.format, "jpeg");

    let region = config.region.expect("region missing");
    assert_eq!(
        region.bounds(),
        GeoBounds::new(31.2304, 121.4737, 35.6762, 139.6503)
    );
    assert_eq!(region.resolution(), Ok(Resolution::new(640, 480)));
    assert_eq!(region.zoom(), Ok(Some(8)));
}

#[test]
fn test_default_config() {
    let config: ApplicationCfg = parse_config(DEFAULT_CONFIG.to_string(), "").unwrap();
    assert!(config.source.url.is_some());
    assert_eq!(config.source.retries, 0);
    assert!(config.fetch.concurrency.is_none());
    assert_eq!(config.output.prefix, "mosaic");
    assert_eq!(config.output.format, "png");
    assert!(config.region.is_none());
}

#[test]
fn test_parse_error() {
    let config: Result<ApplicationCfg, _> = read_config("src/core/mod.rs");
    assert!(config.err().unwrap().starts_with("src/core/mod.rs - "));

    let config: Result<ApplicationCfg, _> = read_config("wrongfile");
    assert_eq!("Could not find config file!", config.err().unwrap());

    let toml = r#"
        [source]
        url = "http://localhost/{z}/{x}/{y}.png"
        "#;
    let config: Result<ApplicationCfg, _> = parse_config(toml.to_string(), "");
    assert!(config.err().unwrap().contains("missing field `output`"));
}

#[test]
fn test_invalid_region() {
    let toml = r#"
        [source]
        path = "/data/tiles"

        [output]
        dir = "/tmp"

        [region]
        bounds = [80.0, 170.0, -80.0, -170.0]
        resolution = [0, 480]
        zoom = 20
        "#;
    let config: ApplicationCfg = parse_config(toml.to_string(), "").unwrap();
    let region = config.region.unwrap();
    assert!(region.resolution().is_err());
    assert_eq!(
        region.zoom(),
        Err("Zoom level 20 out of range, must be between 0 and 19".to_string())
    );
}

#[test]
fn test_env_template() {
    env::set_var("GEOMOSAIC_TEST_TOKEN", "secret");
    let toml = r#"
        [source]
        url = "https://tiles.example.com/{z}/{x}/{y}.png?token={{env.GEOMOSAIC_TEST_TOKEN}}"

        [output]
        dir = "/tmp"
        "#;
    let config: ApplicationCfg = parse_config(toml.to_string(), "").unwrap();
    assert_eq!(
        config.source.url,
        Some("https://tiles.example.com/{z}/{x}/{y}.png?token=secret".to_string())
    );
}
