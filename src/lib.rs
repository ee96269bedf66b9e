//! Core library for the arbitrage-simulator project.
//!
//! The bot binary polls two exchanges for a fixed symbol set, records
//! simulated arbitrage trades and a running profit total in an append-only
//! trade log; the `analyze` binary later rebuilds the cumulative-profit
//! series from that log and renders the artifacts.

pub mod analysis;
pub mod arbitrage;
pub mod config;
pub mod errors;
pub mod exchange;
pub mod ledger;
pub mod models;
pub mod poller;
pub mod tradelog;
pub mod utils;
