//! Shared test mocks and utilities for the securand workspace.

mod entropy;

pub use entropy::{MinimumEntropy, RecordingEntropy, SequenceEntropy};
