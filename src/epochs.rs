//! Epoch container for segmented multichannel time-series data.

use ndarray::{Array1, Array3};
use serde::{Deserialize, Serialize};

use crate::utils::error::{Error, Result};

/// Recording metadata attached to an [`Epochs`] container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpochsInfo {
    /// Sampling frequency in Hz
    pub sfreq: f64,
    /// Channel names, one per data channel; may be empty when unknown
    pub ch_names: Vec<String>,
}

impl EpochsInfo {
    /// Create metadata for an unnamed montage
    pub fn new(sfreq: f64) -> Self {
        Self {
            sfreq,
            ch_names: Vec::new(),
        }
    }
}

/// Fixed-duration, time-aligned segments of multichannel time-series data.
///
/// The data buffer is laid out `(epoch, channel, time)`. The time axis always
/// has the same length as the `times` coordinate vector.
#[derive(Debug, Clone)]
pub struct Epochs {
    data: Array3<f64>,
    info: EpochsInfo,
    times: Array1<f64>,
}

impl Epochs {
    /// Create a container, validating shape and metadata consistency.
    pub fn new(data: Array3<f64>, info: EpochsInfo, times: Array1<f64>) -> Result<Self> {
        if !(info.sfreq > 0.0) {
            return Err(Error::InvalidArgument(format!(
                "sampling frequency must be positive, got {}",
                info.sfreq
            )));
        }
        let (_, n_channels, n_times) = data.dim();
        if n_times != times.len() {
            return Err(Error::ShapeError(format!(
                "data has {} time samples but the time vector has {} entries",
                n_times,
                times.len()
            )));
        }
        if !info.ch_names.is_empty() && info.ch_names.len() != n_channels {
            return Err(Error::ShapeError(format!(
                "data has {} channels but {} channel names were given",
                n_channels,
                info.ch_names.len()
            )));
        }
        Ok(Self { data, info, times })
    }

    /// Create a container from a data buffer alone, synthesizing the time axis
    /// from the start time `tmin` and the sampling frequency.
    pub fn from_parts(data: Array3<f64>, sfreq: f64, tmin: f64) -> Result<Self> {
        let n_times = data.dim().2;
        let times = Array1::from_iter((0..n_times).map(|i| tmin + i as f64 / sfreq));
        Self::new(data, EpochsInfo::new(sfreq), times)
    }

    pub fn data(&self) -> &Array3<f64> {
        &self.data
    }

    pub fn info(&self) -> &EpochsInfo {
        &self.info
    }

    pub fn times(&self) -> &Array1<f64> {
        &self.times
    }

    pub fn n_epochs(&self) -> usize {
        self.data.dim().0
    }

    pub fn n_channels(&self) -> usize {
        self.data.dim().1
    }

    pub fn n_times(&self) -> usize {
        self.data.dim().2
    }

    /// Time spanned by the epoch in seconds (last time point minus first)
    pub fn duration(&self) -> f64 {
        if self.times.is_empty() {
            0.0
        } else {
            self.times[self.times.len() - 1] - self.times[0]
        }
    }

    /// Duplicate the container with a replacement data buffer, keeping
    /// metadata and the time vector. The buffer must keep the original shape.
    pub(crate) fn with_data(&self, data: Array3<f64>) -> Self {
        debug_assert_eq!(data.dim(), self.data.dim());
        Self {
            data,
            info: self.info.clone(),
            times: self.times.clone(),
        }
    }
}
