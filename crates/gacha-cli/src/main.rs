//! CLI front-end for the pity-gacha outcome engine.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "gacha",
    about = "Cereal-bowl gacha — roll for rewards, pity guaranteed after six misses",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll the gacha one or more times
    Roll {
        /// Charge level of the triggering gesture (clamped to 0-1)
        #[arg(short, long, default_value = "0.5")]
        charge: f64,

        /// Number of rolls
        #[arg(short = 'n', long, default_value = "1")]
        count: u32,

        /// RNG seed for reproducible rolls
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },

    /// Roll interactively, entering a charge per line
    Play {
        /// RNG seed for reproducible rolls
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },

    /// Roll many times and print outcome statistics
    Simulate {
        /// Number of rolls
        #[arg(short = 'n', long, default_value = "10000")]
        rolls: u64,

        /// Charge used for every roll (clamped to 0-1)
        #[arg(short, long, default_value = "0.5")]
        charge: f64,

        /// RNG seed for reproducible rolls
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Override the base win rate (clamped to 0-1)
        #[arg(long)]
        win_rate: Option<f64>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Roll {
            charge,
            count,
            seed,
        } => commands::roll::run(charge, count, seed),
        Commands::Play { seed } => commands::play::run(seed),
        Commands::Simulate {
            rolls,
            charge,
            seed,
            win_rate,
        } => commands::simulate::run(rolls, charge, seed, win_rate),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
