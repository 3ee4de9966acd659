//! Introductory number routines: Armstrong numbers, divisors and primality,
//! and overflow-safe reversal of 32-bit integers.

pub mod cli;
pub mod commands;
pub mod config;
pub mod maths;
pub mod output;
pub mod scan;

pub use maths::{
    armstrong::is_armstrong,
    divisors::{count_divisors, is_prime, list_divisors},
    reverse::reverse,
};
