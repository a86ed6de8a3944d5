#[macro_use]
extern crate lazy_static;

use std::error::Error;
use std::io;

use log::info;

mod config;
mod repl;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let config = config::Config::from_env()?;
    info!("Starting calculator with {:?}", config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    repl::Repl::new(&config).run(stdin.lock(), stdout.lock())
}
