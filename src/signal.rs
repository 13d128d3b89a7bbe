//! Signal-processing helpers: vectorized convolution and epoch smoothing.

use log::debug;
use ndarray::{Array, Array1, ArrayView1, Axis, Dimension, Zip};

use crate::epochs::Epochs;
use crate::utils::error::{Error, Result};

/// Full discrete convolution of `lane` with `filt`, length `n + m - 1`.
fn convolve_full(lane: ArrayView1<'_, f64>, filt: &Array1<f64>) -> Vec<f64> {
    let n = lane.len();
    let m = filt.len();
    let mut full = vec![0.0; n + m - 1];
    for (i, &x) in lane.iter().enumerate() {
        for (j, &w) in filt.iter().enumerate() {
            full[i + j] += x * w;
        }
    }
    full
}

/// Convolve every 1-D lane of `array` along its last axis with `filt`.
///
/// Each lane is convolved in full and truncated to its original length, so
/// the output keeps the shape of `array` and every lane starts at the same
/// sample as the input. The truncation keeps the *first* samples of the full
/// convolution; event onsets are preserved, unlike centered "same" modes.
///
/// Works for any dimensionality >= 1; a 1-D array is treated as a single
/// lane. Leading axes are mapped over independently.
pub fn convolve_vectorized<D>(array: &Array<f64, D>, filt: &Array1<f64>) -> Result<Array<f64, D>>
where
    D: Dimension,
{
    let ndim = array.ndim();
    if ndim == 0 {
        return Err(Error::ShapeError(
            "convolution needs at least one dimension".to_string(),
        ));
    }
    if filt.is_empty() {
        return Err(Error::ShapeError("convolution filter is empty".to_string()));
    }
    let axis = Axis(ndim - 1);
    let n = array.len_of(axis);
    if n == 0 {
        return Err(Error::ShapeError(
            "convolution input has no samples along its last axis".to_string(),
        ));
    }

    let mut out = array.clone();
    Zip::from(out.lanes_mut(axis))
        .and(array.lanes(axis))
        .for_each(|mut dst, src| {
            let full = convolve_full(src, filt);
            for (o, &v) in dst.iter_mut().zip(&full[..n]) {
                *o = v;
            }
        });
    Ok(out)
}

/// Smooth an [`Epochs`] container with a boxcar moving average of `twindow`
/// seconds, returning a new container and leaving the input untouched.
///
/// The window is converted to `ceil(twindow * sfreq)` samples and must fit
/// within the epoch time span.
pub fn moving_average(epochs: &Epochs, twindow: f64) -> Result<Epochs> {
    let sfreq = epochs.info().sfreq;
    let nsamples = (twindow * sfreq).ceil() as usize;
    if nsamples == 0 || nsamples > epochs.n_times() {
        return Err(Error::InvalidWindow {
            twindow,
            duration: epochs.duration(),
        });
    }
    debug!(
        "smoothing {} epochs x {} channels with a {}-sample boxcar",
        epochs.n_epochs(),
        epochs.n_channels(),
        nsamples
    );

    let filt = Array1::from_elem(nsamples, 1.0 / nsamples as f64);

    // The data is (epoch, channel, time); bring channel and epoch to the
    // front so the convolved time axis is last, then restore the order.
    let data = epochs.data().clone().permuted_axes([1, 0, 2]);
    let data = convolve_vectorized(&data, &filt)?;
    let data = data.permuted_axes([1, 0, 2]);

    Ok(epochs.with_data(data))
}
