//! Coin Collector — a single-screen arcade game.
//!
//! The simulation core lives in [`compute`] as pure functions over the
//! data types in [`entities`]; the binary adds a crossterm front end.

pub mod compute;
pub mod config;
pub mod entities;
