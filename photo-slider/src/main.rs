#[macro_use]
mod logger;

mod error;
mod generate;


use crate::error::SliderError;
use crate::logger::{LogLevel, Logger};

use clap::{Arg, ArgMatches, Command};

fn main() {
    let matches = app().get_matches();

    let level = if matches.is_present("quiet") {
        LogLevel::Quiet
    } else if matches.is_present("verbose") {
        LogLevel::Verbose
    } else {
        LogLevel::Normal
    };

    Logger::new(level).register();

    if let Err(e) = run(&matches) {
        e.print();
        std::process::exit(1);
    }
}

/// Builds the command-line interface.
pub fn app() -> Command<'static> {
    Command::new("photo-slider")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generates a scrolling photo gallery page from a folder of images")
        .arg(
            Arg::new("dir")
                .long("dir")
                .short('d')
                .takes_value(true)
                .help("Project directory containing the images folder")
                .default_value("."),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .takes_value(true)
                .help("Seed for a reproducible image order"),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Only print errors and instructions"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .conflicts_with("quiet")
                .help("Print every image found"),
        )
}

/// Runs the program with the parsed arguments.
pub fn run(args: &ArgMatches) -> Result<(), Box<dyn SliderError>> {
    generate::generate(args).map(|_| ())
}
