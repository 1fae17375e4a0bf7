#![forbid(unsafe_code)]

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use dur::SignedDuration;
use tracing::debug;

mod logging;

/// Parse a loose human duration string
#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "Parse a human duration string",
    long_about = "Parses loose duration strings like \"2y 3mon 5d\" or \"1h -30m +5s\" \
                  and prints the canonical rendering."
)]
struct Args {
    /// Duration string, e.g. "1h 30m"
    duration: String,
    /// Print the raw nanosecond count instead of the canonical rendering
    #[clap(short, long, default_value = "false")]
    nanos: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    logging::init()?;

    let args = Args::parse();
    debug!(input = args.duration.as_str(), "parsing argument");

    let duration: SignedDuration = args
        .duration
        .parse()
        .wrap_err_with(|| format!("failed to parse duration {:?}", args.duration))?;

    if args.nanos {
        println!("{}", duration.as_nanos());
    } else {
        println!("{duration}");
    }
    Ok(())
}
