//! Securand Core — shared abstractions for bounded secure random generation.
//!
//! This crate defines the entropy-source trait that every generator draws
//! from, its production implementation, and the error type shared by all
//! fallible operations. It contains no generation logic.

pub mod entropy;
pub mod error;
