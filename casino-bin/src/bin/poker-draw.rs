use std::io::stdout;
use std::process::ExitCode;

use casino_bin::{finish, logging, CliError};
use casino_core::deck::{Deck, DeckSeed};
use casino_core::json::write_json;
use casino_core::PokerDraw;
use structopt::StructOpt;
use tracing::debug;

/// Draw two cards from a fresh 52-card deck and print the hand and the number of cards left.
#[derive(StructOpt)]
struct Opt {}

fn run() -> Result<(), CliError> {
    let mut d = Deck::new(&DeckSeed::from_clock());
    let draw = PokerDraw::deal(&mut d)?;
    debug!("drew {}{}", draw.hand[0], draw.hand[1]);
    write_json(stdout().lock(), &draw)?;
    Ok(())
}

fn main() -> ExitCode {
    let _ = Opt::from_args();
    logging::init();
    finish(run())
}
