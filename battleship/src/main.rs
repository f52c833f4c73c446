use std::{io, path::PathBuf};

use clap::{value_t, App, Arg, ArgMatches};
use log::info;
use navalbattle::{
    fleet::{random_fleet, FleetCatalog, CLASSIC_SHIPS},
    Dimensions,
};

use crate::{errors::AppError, input::InputReader, session::Session, setup::read_match};

mod command;
mod errors;
mod input;
mod session;
mod setup;

fn main() {
    env_logger::init();

    let matches = App::new("Battleship")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Multiplayer command line battleship.")
        .arg(
            Arg::with_name("fleets")
                .short("f")
                .long("fleets")
                .value_name("FILE")
                .help("fleet catalog players pick their fleets from")
                .takes_value(true)
                .default_value("fleets.txt"),
        )
        .arg(
            Arg::with_name("random_fleets")
                .short("r")
                .long("random-fleets")
                .value_name("COUNT")
                .help("generate COUNT random 10x10 fleets instead of reading a catalog")
                .takes_value(true),
        )
        .get_matches();

    if let Err(err) = run(&matches) {
        eprintln!("battleship: {}", err);
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<(), AppError> {
    let catalog = load_catalog(matches)?;

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());
    let game = read_match(&mut input, &catalog)?;

    let stdout = io::stdout();
    let mut session = Session::new(game, stdout.lock());
    session.run(&mut input)?;
    if let Some(winner) = session.game().winner_name() {
        info!("session ended, {} won", winner);
    }
    Ok(())
}

/// Either read the catalog named on the command line or generate one.
fn load_catalog(matches: &ArgMatches) -> Result<FleetCatalog, AppError> {
    if matches.is_present("random_fleets") {
        let count = value_t!(matches, "random_fleets", usize).unwrap_or_else(|e| e.exit());
        let mut rng = rand::thread_rng();
        let catalog = (0..count)
            .map(|_| random_fleet(&mut rng, Dimensions::default(), &CLASSIC_SHIPS))
            .collect::<Result<FleetCatalog, _>>()?;
        info!("generated {} random fleets", catalog.len());
        Ok(catalog)
    } else {
        let path = value_t!(matches, "fleets", PathBuf).unwrap_or_else(|e| e.exit());
        Ok(FleetCatalog::load(path)?)
    }
}
