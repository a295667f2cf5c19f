//! Castellan engine library.
//!
//! Exposes the world model, evaluation, strategy, and protocol modules for
//! use by integration tests and the binary entry point.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod protocol;
pub mod strategy;
