#[macro_use]
extern crate anyhow;
#[macro_use]
extern crate log;

use anyhow::{Context, Error};
use structopt::StructOpt;

mod config;
use crate::config::{config_file, merge_args, read_args, Config};

fn run() -> Result<(), Error> {
    let args = merge_args(read_args(&config_file()), std::env::args_os());
    let config: Config = Config::from_iter(args);

    if config.config_file {
        println!("{}", config_file().to_string_lossy());
        return Ok(());
    }

    let value = config
        .value
        .as_ref()
        .ok_or_else(|| format_err!("Missing argument: N"))?;
    let n = value.as_integer()?;

    if config.big {
        let result = factorials::big::factorial_parallel(n, config.workers)?;
        println!("{}! = {}", n, result);
        return Ok(());
    }

    let calculator = config.get_calculator();
    info!("using the {} strategy", calculator.strategy());

    if config.prefixes {
        let prefixes = calculator
            .prefixes(n)
            .with_context(|| format!("Cannot list the factorials up to {}!", n))?;
        for (i, f) in prefixes.iter().enumerate() {
            println!("{}! = {}", i, f);
        }
    } else {
        let result = calculator.compute(n).with_context(|| {
            format!(
                "Cannot compute {}! with the {} strategy",
                n,
                calculator.strategy()
            )
        })?;
        println!("{}! = {}", n, result);
    }

    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("[error] {:#}", e);
        std::process::exit(1);
    }
}
