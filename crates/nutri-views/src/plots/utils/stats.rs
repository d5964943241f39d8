//! Statistical utilities for plots

use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use statrs::statistics::Statistics;

/// Calculate quartiles using linear interpolation
pub fn calculate_quartiles(values: &[f64]) -> Option<(f64, f64, f64)> {
    let sorted = sorted_copy(values);
    Some((
        percentile(&sorted, 0.25)?,
        percentile(&sorted, 0.5)?,
        percentile(&sorted, 0.75)?,
    ))
}

/// Percentile of already sorted values, `q` in [0, 1], with linear interpolation
pub fn percentile(sorted: &[f64], q: f64) -> Option<f64> {
    let last = sorted.len().checked_sub(1)?;
    let idx = last as f64 * q.clamp(0.0, 1.0);
    let lower = idx.floor() as usize;
    let upper = idx.ceil() as usize;

    if lower == upper || upper > last {
        Some(sorted[lower])
    } else {
        let fraction = idx - lower as f64;
        Some(sorted[lower] * (1.0 - fraction) + sorted[upper] * fraction)
    }
}

pub fn median(values: &[f64]) -> Option<f64> {
    percentile(&sorted_copy(values), 0.5)
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().mean())
}

/// Sample standard deviation (n - 1 denominator)
pub fn std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    Some(values.iter().std_dev())
}

fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted
}

/// Summary drawn as one box
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    /// Lower whisker end
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    /// Upper whisker end
    pub max: f64,
    pub outliers: Vec<f64>,
}

impl BoxStats {
    /// Quartiles, 1.5 IQR whiskers and outliers. `None` for no values.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let (q1, median, q3) = calculate_quartiles(values)?;

        let iqr = q3 - q1;
        let lower_fence = q1 - 1.5 * iqr;
        let upper_fence = q3 + 1.5 * iqr;

        let outliers: Vec<f64> = values.iter()
            .filter(|&&v| v < lower_fence || v > upper_fence)
            .copied()
            .collect();

        // Whiskers end at the most extreme values inside the fences
        let whisker_min = values.iter()
            .copied()
            .filter(|&v| v >= lower_fence)
            .fold(f64::INFINITY, f64::min);
        let whisker_max = values.iter()
            .copied()
            .filter(|&v| v <= upper_fence)
            .fold(f64::NEG_INFINITY, f64::max);

        Some(Self {
            min: whisker_min,
            q1,
            median,
            q3,
            max: whisker_max,
            outliers,
        })
    }
}

/// Gaussian kernel density estimate using Scott's rule for the bandwidth.
///
/// Evaluated at `num_points` evenly spaced positions over [lo, hi]. Returns
/// `None` when the bandwidth is undefined (fewer than two values or zero variance).
pub fn gaussian_kde(values: &[f64], lo: f64, hi: f64, num_points: usize) -> Option<Vec<(f64, f64)>> {
    let sd = std_dev(values)?;
    if sd.is_nan() || sd <= 0.0 || num_points < 2 {
        return None;
    }

    let n = values.len() as f64;
    let bandwidth = sd * n.powf(-0.2);
    let norm = 1.0 / (n * bandwidth * (2.0 * std::f64::consts::PI).sqrt());

    let curve = (0..num_points)
        .map(|i| {
            let x = lo + (hi - lo) * i as f64 / (num_points - 1) as f64;
            let density = values.iter()
                .map(|&v| {
                    let u = (x - v) / bandwidth;
                    (-0.5 * u * u).exp()
                })
                .sum::<f64>() * norm;
            (x, density)
        })
        .collect();

    Some(curve)
}

/// Percentile bootstrap confidence interval of the mean
pub fn bootstrap_mean_ci(values: &[f64], resamples: usize, level: f64, seed: u64) -> Option<(f64, f64)> {
    if values.is_empty() {
        return None;
    }
    if values.len() == 1 || resamples == 0 {
        let m = mean(values)?;
        return Some((m, m));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let n = values.len();
    let mut means: Vec<f64> = (0..resamples)
        .map(|_| (0..n).map(|_| values[rng.gen_range(0..n)]).sum::<f64>() / n as f64)
        .collect();
    means.sort_by(|a, b| a.total_cmp(b));

    let tail = (1.0 - level) / 2.0;
    Some((percentile(&means, tail)?, percentile(&means, 1.0 - tail)?))
}
