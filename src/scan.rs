use std::{fmt, str::FromStr};

use anyhow::anyhow;
use indicatif::{ProgressBar, ProgressStyle};

use crate::maths::{armstrong::is_armstrong, divisors::is_prime};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Predicate {
    Armstrong,
    Prime,
}

impl Predicate {
    pub fn test(&self, n: i64) -> bool {
        match self {
            Self::Armstrong => is_armstrong(n),
            Self::Prime => is_prime(n),
        }
    }
}

impl FromStr for Predicate {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("armstrong") {
            Ok(Self::Armstrong)
        } else if s.eq_ignore_ascii_case("prime") {
            Ok(Self::Prime)
        } else {
            Err(anyhow!("Invalid value for Predicate: {}", s))
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Armstrong => write!(f, "armstrong"),
            Self::Prime => write!(f, "prime"),
        }
    }
}

pub fn scan_range(predicate: Predicate, start: i64, end: i64, progress: bool) -> Vec<i64> {
    if start > end {
        log::debug!("empty scan range {start}..={end}");
        return Vec::new();
    }

    let pb = if progress {
        let len = end.abs_diff(start).saturating_add(1);
        let pb = ProgressBar::new(len);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner} Scanning... [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len}")
        {
            pb.set_style(style.progress_chars("█░ "));
        }
        Some(pb)
    } else {
        None
    };

    let mut matches = Vec::new();
    for n in start..=end {
        if predicate.test(n) {
            matches.push(n);
        }
        if let Some(pb) = &pb {
            pb.inc(1);
        }
    }

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    log::info!(
        "scan {predicate} {start}..={end}: {} match(es)",
        matches.len()
    );
    matches
}
