//! Regional urban expansion and population density figures.
//!
//! Reads a per-location census table, collapses repeated studies of the
//! same agglomeration, bootstraps regional means and writes box-and-jitter
//! figures, a text summary and a workbook of the raw draws.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod figure;
pub mod pipeline;
pub mod report;

pub use error::{Error, Result};
