use std::path::PathBuf;

use clap::{Parser, Subcommand};

use bazi_base::{Gender, HeavenStem, SixtyCycle};
use bazi_time::CivilTime;

/// Four Pillars charts and luck calendars.
#[derive(Parser)]
#[command(name = "bazi", version, about = "Four Pillars chart and luck calendar")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (default: ./bazi.toml if present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Four Pillars chart of a birth
    Chart(BirthArgs),
    /// Decade / year / month luck calendar of a birth
    Fortune(FortuneArgs),
    /// Annotate a single pillar against a day master
    Pillar {
        /// Pillar name, Hanzi ("乙丑") or pinyin ("YiChou")
        pillar: SixtyCycle,
        /// Day master stem, Hanzi or pinyin
        #[arg(long)]
        day_master: HeavenStem,
    },
    /// Five Tigers flow months of a year stem
    Months {
        /// Year stem, Hanzi or pinyin
        year_stem: HeavenStem,
        /// Day master stem, Hanzi or pinyin
        #[arg(long)]
        day_master: HeavenStem,
    },
    /// Shift China Standard Time to true solar time
    SolarTime {
        /// Civil time, "YYYY-MM-DD HH:MM[:SS]"
        date: CivilTime,
        /// East-positive longitude in degrees
        #[arg(long, allow_negative_numbers = true, conflicts_with = "place")]
        longitude: Option<f64>,
        /// Place name or "lat,lon"
        #[arg(long)]
        place: Option<String>,
    },
    /// The 24 solar terms of a Gregorian year (China Standard Time)
    Terms {
        year: i32,
    },
}

/// Birth moment, gender and place.
#[derive(clap::Args)]
pub struct BirthArgs {
    /// Birth time in China Standard Time, "YYYY-MM-DD HH:MM"
    pub date: CivilTime,

    /// male or female (default from config, else male)
    #[arg(short, long)]
    pub gender: Option<Gender>,

    /// Birth place name or "lat,lon"
    #[arg(short, long)]
    pub place: Option<String>,
}

#[derive(clap::Args)]
pub struct FortuneArgs {
    #[command(flatten)]
    pub birth: BirthArgs,

    /// Show the years of one decade (0-based)
    #[arg(long)]
    pub decade: Option<usize>,

    /// With --decade, show the months of one year (0-based)
    #[arg(long, requires = "decade")]
    pub year: Option<usize>,

    /// Show the decade and year active in this Gregorian year
    #[arg(long, conflicts_with = "decade")]
    pub at: Option<i32>,
}
