//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;

mod cli;

use clap::ArgMatches;
use dotenv::dotenv;
use env_logger::Builder;
use log::Record;
use mosaic_core::core::Config;
use mosaic_service::MosaicService;
use std::env;
use std::io::Write;
use std::process;
use time;

fn init_logger(args: &ArgMatches<'_>) {
    let mut builder = Builder::new();
    builder.format(|buf, record: &Record<'_>| {
        let t = time::now();
        writeln!(
            buf,
            "{}.{:03} {} {}",
            time::strftime("%Y-%m-%d %H:%M:%S", &t).unwrap_or_default(),
            t.tm_nsec / 1000_000,
            record.level(),
            record.args()
        )
    });

    let rust_log_env = env::var("RUST_LOG");
    let rust_log = match (args.value_of("loglevel"), rust_log_env.as_ref()) {
        (None, Ok(rust_log)) => rust_log.as_str(),
        (loglevel, _) => match loglevel.unwrap_or("info") {
            "debug" => "debug,tokio=info,reqwest=info,hyper=info",
            loglevel => loglevel,
        },
    };
    builder.parse_filters(rust_log);

    builder.init();
}

fn exit_with_error(msg: &str, err: &dyn std::fmt::Display) -> ! {
    println!("{} - {}", msg, err);
    process::exit(1)
}

fn plan(args: &ArgMatches<'_>) {
    let planner = cli::planner_from_args(args, None)
        .unwrap_or_else(|err| exit_with_error("Error planning images", &err));
    match args.value_of("format").unwrap_or("csv") {
        "json" => match serde_json::to_string_pretty(planner.grid()) {
            Ok(json) => println!("{}", json),
            Err(err) => exit_with_error("Error writing JSON", &err),
        },
        "csv" => print!("{}", cli::plan_as_csv(&planner)),
        format => exit_with_error("Unsupported plan format", &format),
    }
}

fn generate(args: &ArgMatches<'_>) {
    let config = cli::config_from_args(args)
        .unwrap_or_else(|err| exit_with_error("Error reading configuration", &err));
    let planner = cli::planner_from_args(args, Some(&config))
        .unwrap_or_else(|err| exit_with_error("Error planning images", &err));
    let service = MosaicService::from_config(&config)
        .unwrap_or_else(|err| exit_with_error("Error reading configuration", &err));
    let progress = args.value_of("progress").map_or(true, |s| {
        s.parse::<bool>()
            .unwrap_or_else(|err| exit_with_error("Error parsing 'progress' as boolean value", &err))
    });
    if let Err(err) = service.generate(&planner, progress) {
        exit_with_error("Error generating images", &err);
    }
}

fn main() {
    dotenv().ok();
    let mut app = cli::app();

    match app.get_matches_from_safe_borrow(env::args()) {
        //app.get_matches() prohibits later call of app.print_help()
        Result::Err(e) => {
            println!("{}", e);
        }
        Result::Ok(matches) => match matches.subcommand() {
            ("plan", Some(sub_m)) => {
                init_logger(sub_m);
                plan(sub_m);
            }
            ("generate", Some(sub_m)) => {
                init_logger(sub_m);
                generate(sub_m);
            }
            ("genconfig", Some(sub_m)) => {
                init_logger(sub_m);
                println!("{}", MosaicService::gen_config());
            }
            _ => {
                let _ = app.print_help();
                println!("");
            }
        },
    }
}
