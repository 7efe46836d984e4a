//! Wayfarer Core Library
//!
//! Core graph engine for the Wayfarer network analysis CLI.

pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod network;
