mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod output;
mod source;
mod utils;

use clap::Parser;

use app::RunContext;
use cli::Cli;
use config::Config;
use utils::{Timezone, set_debug};

fn main() {
    let home = dirs::home_dir();
    let config = Config::load(home.as_deref());
    let cli = Cli::parse().with_config(&config);
    set_debug(cli.debug);

    let timezone = match cli.timezone.as_deref().map(Timezone::parse).transpose() {
        Ok(tz) => tz,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let ctx = RunContext {
        cli: &cli,
        home: home.as_deref(),
        timezone,
    };
    if let Err(e) = app::run(&ctx) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
