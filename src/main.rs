#![doc = include_str!("../README.md")]

mod cli;
mod core;
mod prelude;
mod quantity;
mod run;

use std::io::{stderr, stdin, stdout};

use clap::{Parser, crate_version};

use crate::{cli::Args, prelude::*, run::run};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(stderr).init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();
    run(stdin().lock(), stdout().lock(), args.full_power)?;

    info!("done!");
    Ok(())
}
