use std::{ffi::OsString, fmt};

use clap::Parser;

use crate::{cli::Args, scan::Predicate};

#[derive(Debug)]
pub struct Config {
    pub command: Command,
    pub log_level: log::LevelFilter,
}

impl Config {
    pub fn parse<I, T>(itr: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Args::try_parse_from(itr) {
            Ok(args) => Ok(args.try_into()?),
            Err(err) => {
                Err(anyhow::Error::new(err).context("error parsing arguments into Config"))
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command {
    Armstrong(i64),
    Divisors(i64),
    CountDivisors(i64),
    Prime(i64),
    Reverse(i32),
    Scan {
        predicate: Predicate,
        start: i64,
        end: i64,
        progress: bool,
    },
    Demo,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Armstrong(n) => write!(f, "armstrong {n}"),
            Self::Divisors(n) => write!(f, "divisors {n}"),
            Self::CountDivisors(n) => write!(f, "count-divisors {n}"),
            Self::Prime(n) => write!(f, "prime {n}"),
            Self::Reverse(x) => write!(f, "reverse {x}"),
            Self::Scan {
                predicate,
                start,
                end,
                ..
            } => write!(f, "scan {predicate} {start}..={end}"),
            Self::Demo => write!(f, "demo"),
        }
    }
}
