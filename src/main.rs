use clap::Parser;
use ipv4_subnet_calc::cli::{run, Cli};
use ipv4_subnet_calc::config::{init_logging, Config};
use ipv4_subnet_calc::output::banner;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let config = Config::from_env()?;
    init_logging(&config.log_config)?;
    if !config.color {
        colored::control::set_override(false);
    }
    log::info!("#Start main()");

    let cli = Cli::parse();
    if let Err(e) = run(&cli, &config) {
        log::error!("{e}");
        eprintln!("{}", banner(&e.to_string(), false));
        std::process::exit(1);
    }
    Ok(())
}
