//! # Neuroepoch
//! Numeric helpers for EEG/MEG epoch processing.
//!
//! The crate provides a small set of routines used by neuroimaging
//! signal-processing pipelines: a vectorized convolution over the last axis of
//! an N-dimensional array, a moving-average smoother for windowed epoch data,
//! and a couple of combinatorial helpers for cross-validated decoding
//! (pair counting and label intersection). Every routine is pure and stateless
//! between calls; smoothing returns a new [`epochs::Epochs`] container and
//! never mutates its input.

pub use crate::utils::error::{Error, Result};

pub mod analysis;
pub mod epochs;
pub mod signal;
pub mod utils;
