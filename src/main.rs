use std::path::PathBuf;

use anyhow::{anyhow, Result};
use getopts::Options;
use p192_analyzer::challenge::run_challenges;
use p192_analyzer::settings::Settings;
use serde_json::Value;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let mut opts = Options::new();
    opts.optflag("h", "help", "print this help menu");
    opts.optflag("v", "verbose", "print more information to stderr");
    opts.optopt("t", "threads", "how many threads to solve testcases with", "N");
    let matches = opts
        .parse(&args[1..])
        .inspect_err(|e| eprintln!("! could not parse the given options: {e}"))?;
    if matches.opt_present("h") {
        print!(
            "{}",
            opts.usage(&format!("Usage: {} [options] CHALLENGE_FILE", args[0]))
        );
        return Ok(());
    }
    let settings = Settings {
        verbose: matches.opt_present("v"),
        threads: matches.opt_get("t")?,
    };

    let path: PathBuf = match matches.free.first() {
        Some(raw) => raw.into(),
        None => {
            eprintln!("! No JSON file was provided for the challenge definition");
            return Err(anyhow!("no JSON file provided"));
        }
    };
    eprintln!("* Path of the challenge definition: {path:?}");
    eprintln!("* Reading the challenge definition into memory");

    let raw_text = std::fs::read_to_string(&path)
        .inspect_err(|e| eprintln!("! Could not read the challenge definition file: {e}"))?;
    let json_value: Value = serde_json::from_str(&raw_text).inspect_err(|e| {
        eprintln!("! Could not parse the text of the challenge definition file as JSON: {e}")
    })?;
    if settings.verbose {
        eprintln!("? challenge definition: {json_value:#}");
    }

    // print our response to stdout
    println!("{}", run_challenges(&json_value, settings)?);

    Ok(())
}
