// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod board;
mod cli;
mod config;
mod duration;
mod locale;
mod report;
mod store;
mod types;
mod ui;

use cli::ReportCommand;
use log::debug;
use report::{RenderContext, ReportService};
use store::{InventoryStore, StockStore};

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        ui::print_error(&e);
        std::process::exit(1);
    }

    // Resolve locale, strings and reference time
    let config = match config::build_report_config(&args) {
        Ok(c) => c,
        Err(e) => {
            ui::print_error(&format!("Configuration error: {}", e));
            std::process::exit(1);
        }
    };

    let store = match InventoryStore::load(&config.data) {
        Ok(s) => s,
        Err(e) => {
            ui::print_error(&e);
            std::process::exit(1);
        }
    };

    let ctx = RenderContext::new(&config.resources, &config.locale, config.now);
    let service = ReportService::new(&store, ctx).with_max_len(config.max_len);

    let output = match &config.command {
        ReportCommand::ByType { names } => {
            let types = service.select_types(names);
            debug!("Rendering {} stock types", types.len());
            service.render_by_type(&types)
        }
        ReportCommand::Types => service.render_type_index(&store.stock_types()),
        ReportCommand::ByOwner { names } => {
            let mates = service.select_mates(names);
            debug!("Rendering {} mates", mates.len());
            service.render_by_owner(&mates)
        }
    };

    print!("{}", output);
    if !output.is_empty() && !output.ends_with('\n') {
        println!();
    }
}
