//! Histogram bin construction.
//!
//! Builds monotonically increasing bin-edge vectors, either equal-width or
//! geometrically growing, and derives per-bin abscissas from them.  The
//! rightmost edge is always included, so `n` bins produce `n + 1` edges.

use thiserror::Error;

/// Invalid binning parameters.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum HistogramError {
    #[error("x_max ({x_max}) must be larger than x_min ({x_min})")]
    InvertedRange { x_min: f64, x_max: f64 },

    #[error("bin_width ({bin_width}) must be positive")]
    NonPositiveWidth { bin_width: f64 },

    #[error("x_min ({x_min}) must be positive for logarithmic binning")]
    NonPositiveMin { x_min: f64 },

    #[error("bin_factor ({bin_factor}) must be larger than 1")]
    FactorNotAboveOne { bin_factor: f64 },
}

/// Whether bin widths grow linearly or geometrically.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Scale {
    Linear,
    Logarithmic,
}

/// Where inside each bin its abscissa sits.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Align {
    Left,
    Center,
    Right,
}

impl Scale {
    /// Conventional alignment: bin centers for linear binning, left edges
    /// for logarithmic.
    pub fn default_align(self) -> Align {
        match self {
            Scale::Linear => Align::Center,
            Scale::Logarithmic => Align::Left,
        }
    }
}

/// Equal-width bin edges covering `[x_min, x_max]`.
///
/// All bins except possibly the last have width `bin_width`.  When the range
/// is not an exact multiple of the width, the remainder forms a short tail
/// bin; with `fuse_last_bin` it is merged into its neighbor instead.
///
/// # Examples
///
/// ```
/// use mathstuff::histogram::linear_edges;
///
/// let edges = linear_edges(0.0, 1.0, 0.25, true).unwrap();
/// assert_eq!(edges, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn linear_edges(
    x_min: f64,
    x_max: f64,
    bin_width: f64,
    fuse_last_bin: bool,
) -> Result<Vec<f64>, HistogramError> {
    if x_max < x_min {
        return Err(HistogramError::InvertedRange { x_min, x_max });
    }
    if bin_width <= 0.0 {
        return Err(HistogramError::NonPositiveWidth { bin_width });
    }

    let num_bins = ((x_max - x_min) / bin_width) as usize;
    let mut edges: Vec<f64> = (0..=num_bins)
        .map(|k| x_min + k as f64 * bin_width)
        .collect();

    // short tail bin, kept or fused
    if edges[edges.len() - 1] < x_max {
        edges.push(x_max);
        if fuse_last_bin && edges.len() > 2 {
            edges.remove(edges.len() - 2);
        }
    }
    Ok(edges)
}

/// Geometrically growing bin edges covering `[x_min, x_max]`.
///
/// The k-th bin has width `bin_width * bin_factor^k`.  The final bin is cut
/// at `x_max`; with `fuse_last_bin` a partial final bin is merged into its
/// neighbor.
pub fn log_edges(
    x_min: f64,
    x_max: f64,
    bin_width: f64,
    bin_factor: f64,
    fuse_last_bin: bool,
) -> Result<Vec<f64>, HistogramError> {
    if x_min <= 0.0 {
        return Err(HistogramError::NonPositiveMin { x_min });
    }
    if x_max < x_min {
        return Err(HistogramError::InvertedRange { x_min, x_max });
    }
    if bin_width <= 0.0 {
        return Err(HistogramError::NonPositiveWidth { bin_width });
    }
    if bin_factor <= 1.0 {
        return Err(HistogramError::FactorNotAboveOne { bin_factor });
    }

    // upper bound for the number of geometric bins fitting in the range
    let span = x_max - x_min;
    let max_bound = (1.0 + (span / bin_width).ln() / bin_factor.ln())
        .trunc()
        .max(0.0) as usize;

    // cumulative widths bin_width * bin_factor^k
    let mut cumulative = Vec::with_capacity(max_bound + 1);
    let mut acc = 0.0;
    let mut width = bin_width;
    for _ in 0..=max_bound {
        acc += width;
        cumulative.push(acc);
        width *= bin_factor;
    }

    let mut edges = vec![x_min];
    edges.extend(
        cumulative
            .iter()
            .filter(|&&c| c < span)
            .map(|&c| x_min + c),
    );
    edges.push(x_max);

    // drop the last interior edge when the final bin is a partial one
    let on_grid = cumulative.iter().any(|&c| x_min + c == x_max);
    if fuse_last_bin && edges.len() > 2 && !on_grid {
        edges.remove(edges.len() - 2);
    }
    Ok(edges)
}

/// Bin abscissas for a vector of edges, one per bin.
///
/// `align` of `None` picks the scale's conventional alignment.  Centered
/// logarithmic abscissas are the geometric mean of the bin edges.
pub fn abscissas(bin_edges: &[f64], scale: Scale, align: Option<Align>) -> Vec<f64> {
    let align = align.unwrap_or(scale.default_align());
    match align {
        Align::Left => bin_edges[..bin_edges.len().saturating_sub(1)].to_vec(),
        Align::Right => bin_edges.get(1..).unwrap_or(&[]).to_vec(),
        Align::Center => bin_edges
            .windows(2)
            .map(|w| match scale {
                Scale::Linear => 0.5 * (w[0] + w[1]),
                Scale::Logarithmic => w[0] * (w[1] / w[0]).sqrt(),
            })
            .collect(),
    }
}
