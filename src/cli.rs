use clap::{ArgAction, Parser, Subcommand};

use crate::config::{Command, Config};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(
        name = "verbose",
        long = "verbose",
        short = 'v',
        action = ArgAction::Count,
        global = true
    )]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Cmd>,
}

#[derive(Debug, Subcommand)]
pub enum Cmd {
    /// Check whether N is an Armstrong number
    Armstrong {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
    /// List the positive divisors of N
    Divisors {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
    /// Count the positive divisors of N
    CountDivisors {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
    /// Check whether N is prime
    Prime {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
    /// Reverse the digits of a 32-bit integer (0 on overflow)
    Reverse {
        #[arg(allow_negative_numbers = true)]
        x: i32,
    },
    /// List every number in START..=END matching a predicate (armstrong, prime)
    Scan {
        predicate: String,
        #[arg(allow_negative_numbers = true)]
        start: i64,
        #[arg(allow_negative_numbers = true)]
        end: i64,
        #[arg(name = "progress", long = "progress", short = 'p')]
        progress: bool,
    },
    /// Print a handful of example invocations
    Demo,
}

impl TryInto<Config> for Args {
    type Error = anyhow::Error;

    fn try_into(self) -> Result<Config, Self::Error> {
        let log_level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        let command = match self.command.unwrap_or(Cmd::Demo) {
            Cmd::Armstrong { n } => Command::Armstrong(n),
            Cmd::Divisors { n } => Command::Divisors(n),
            Cmd::CountDivisors { n } => Command::CountDivisors(n),
            Cmd::Prime { n } => Command::Prime(n),
            Cmd::Reverse { x } => Command::Reverse(x),
            Cmd::Scan {
                predicate,
                start,
                end,
                progress,
            } => Command::Scan {
                predicate: predicate.parse()?,
                start,
                end,
                progress,
            },
            Cmd::Demo => Command::Demo,
        };

        Ok(Config { command, log_level })
    }
}
