//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use clap::{App, AppSettings, ArgMatches, SubCommand};
use mosaic_core::core::config::DEFAULT_CONFIG;
use mosaic_core::core::{parse_config, read_config, ApplicationCfg};
use mosaic_grid::{check_zoom, GeoBounds, Resolution, TileGridPlanner};
use std::str::FromStr;

pub fn app<'a, 'b>() -> App<'a, 'b> {
    // http://kbknapp.github.io/clap-rs/clap/
    App::new("geomosaic")
        .version(crate_version!())
        .about("Assemble slippy map tiles into output images of a fixed resolution")
        .subcommand(SubCommand::with_name("plan")
                        .setting(AppSettings::AllowLeadingHyphen)
                        .args_from_usage("--bounds=<lat1,lng1,lat2,lng2> 'Bounding box corners'
                                              --resolution=<WIDTHxHEIGHT> 'Pixel size of each output image'
                                              --zoom=[LEVEL] 'Zoom level (Default: lowest zoom level covering the resolution)'
                                              --format=[csv|json] 'Output format (Default: csv)'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'")
                        .about("Print tiles and crop rectangles of all output images"))
        .subcommand(SubCommand::with_name("generate")
                        .setting(AppSettings::AllowLeadingHyphen)
                        .args_from_usage("-c, --config=[FILE] 'Load from custom config file'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'
                                              --bounds=[lat1,lng1,lat2,lng2] 'Bounding box corners'
                                              --resolution=[WIDTHxHEIGHT] 'Pixel size of each output image'
                                              --zoom=[LEVEL] 'Zoom level'
                                              --url=[TEMPLATE] 'Tile server URL with {z}, {x} and {y} placeholders'
                                              --tiledir=[DIR] 'Read tiles from {z}/{x}/{y} directory'
                                              --output=[DIR] 'Output directory'
                                              --concurrency=[NUM] 'Maximum number of concurrent tile requests'
                                              --progress=[true|false] 'Show progress bar'")
                        .about("Fetch tiles and write output images"))
        .subcommand(SubCommand::with_name("genconfig")
                        .args_from_usage("--loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'")
                        .about("Generate configuration template"))
}

/// Configuration file or defaults, overridden by command line arguments
pub fn config_from_args(args: &ArgMatches<'_>) -> Result<ApplicationCfg, String> {
    let mut config: ApplicationCfg = if let Some(cfgpath) = args.value_of("config") {
        info!("Reading configuration from '{}'", cfgpath);
        read_config(cfgpath)?
    } else {
        parse_config(DEFAULT_CONFIG.to_string(), "")?
    };
    if let Some(url) = args.value_of("url") {
        config.source.url = Some(url.to_string());
        config.source.path = None;
    } else if let Some(dir) = args.value_of("tiledir") {
        config.source.url = None;
        config.source.path = Some(dir.to_string());
    }
    if let Some(dir) = args.value_of("output") {
        config.output.dir = dir.to_string();
    }
    if let Some(concurrency) = args.value_of("concurrency") {
        let concurrency = concurrency
            .parse::<usize>()
            .map_err(|_| format!("Error parsing 'concurrency' value '{}'", concurrency))?;
        config.fetch.concurrency = Some(concurrency);
    }
    Ok(config)
}

/// Plan from `--bounds`, `--resolution` and `--zoom`, falling back to the `[region]` config
pub fn planner_from_args(
    args: &ArgMatches<'_>,
    config: Option<&ApplicationCfg>,
) -> Result<TileGridPlanner, String> {
    let region = config.and_then(|cfg| cfg.region.as_ref());
    let bounds = match (args.value_of("bounds"), region) {
        (Some(bounds), _) => GeoBounds::from_str(bounds)?,
        (None, Some(region)) => region.bounds(),
        (None, None) => return Err("Missing bounds".to_string()),
    };
    let resolution = match (args.value_of("resolution"), region) {
        (Some(resolution), _) => Resolution::from_str(resolution)?,
        (None, Some(region)) => region.resolution()?,
        (None, None) => return Err("Missing resolution".to_string()),
    };
    let zoom = match (args.value_of("zoom"), region) {
        (Some(zoom), _) => {
            let zoom = zoom
                .parse::<i64>()
                .map_err(|_| format!("Error parsing 'zoom' value '{}'", zoom))?;
            Some(check_zoom(zoom).map_err(|e| e.to_string())?)
        }
        (None, Some(region)) => region.zoom()?,
        (None, None) => None,
    };
    TileGridPlanner::new(bounds, resolution, zoom).map_err(|e| e.to_string())
}

/// One line per output image
pub fn plan_as_csv(planner: &TileGridPlanner) -> String {
    let (columns, rows) = planner.multipliers();
    let mut csv = format!(
        "# zoom: {}, images: {}x{}\ncolumn,row,minx,miny,maxx,maxy,left,top,right,bottom\n",
        planner.zoom(),
        columns,
        rows
    );
    for plan in planner {
        csv.push_str(&format!(
            "{},{},{},{},{},{},{},{},{},{}\n",
            plan.column,
            plan.row,
            plan.tiles.minx,
            plan.tiles.miny,
            plan.tiles.maxx,
            plan.tiles.maxy,
            plan.crop.left,
            plan.crop.top,
            plan.crop.right,
            plan.crop.bottom
        ));
    }
    csv
}
