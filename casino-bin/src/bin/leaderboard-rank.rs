use std::io::{stdin, stdout};
use std::process::ExitCode;

use casino_bin::{finish, logging, CliError};
use casino_core::json::{read_json, write_json};
use casino_core::{rank_entries, LeaderboardEntry};
use structopt::StructOpt;

/// Read a JSON array of leaderboard entries on stdin and write it back highest balance first,
/// with a 1-based `rank` on every entry.
#[derive(StructOpt)]
struct Opt {}

fn run() -> Result<(), CliError> {
    let entries: Vec<LeaderboardEntry> = read_json(stdin().lock())?;
    let ranked = rank_entries(entries);
    write_json(stdout().lock(), &ranked)?;
    Ok(())
}

fn main() -> ExitCode {
    let _ = Opt::from_args();
    logging::init();
    finish(run())
}
