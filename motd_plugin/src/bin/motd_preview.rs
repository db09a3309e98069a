//! Render the MOTD a player would see, from a config file on disk.
//!
//! Doubles as a configuration validity check: exits nonzero if the file
//! fails to load.

use std::path::PathBuf;
use std::str::FromStr;

use chrono::Local;
use itertools::Itertools;
use structopt::StructOpt;

use motd_plugin::{compose_motd, MotdConfig};
use motd_text::Line;

#[derive(Debug, Clone, Copy)]
enum Format {
    Legacy,
    Json,
    Plain,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "legacy" => Ok(Self::Legacy),
            "json" => Ok(Self::Json),
            "plain" => Ok(Self::Plain),
            _ => Err(format!("unknown format {:?}", s)),
        }
    }
}

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab")]
struct Opts {
    /// Config file location
    #[structopt(short, long, default_value = "config/joinMOTD.json")]
    config: PathBuf,

    /// Output format: legacy, json or plain
    #[structopt(short, long, default_value = "legacy")]
    format: Format,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let opts = Opts::from_args();

    tracing_subscriber::fmt::init();

    let config = MotdConfig::load_file(&opts.config)?;
    let lines = compose_motd(&config, Local::now().naive_local());

    let rendered = match opts.format {
        Format::Legacy => lines.iter().map(Line::to_legacy).join("\n"),
        Format::Plain => lines.iter().map(Line::to_plain).join("\n"),
        Format::Json => lines
            .iter()
            .map(serde_json::to_string)
            .collect::<Result<Vec<_>, _>>()?
            .join("\n"),
    };
    println!("{}", rendered);

    Ok(())
}
