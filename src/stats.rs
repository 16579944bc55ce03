use crate::types::{METRIC_COUNT, Sample};

/// Mean and population standard deviation for one metric.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Summary {
    pub mean: f64,
    pub stdev: f64,
}

/// Aggregate statistics over one run, one [`Summary`] per metric, indexed
/// consistently with [`crate::types::METRIC_NAMES`].
///
/// Derived data: recomputed from scratch by [`aggregate`] each run.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub metrics: [Summary; METRIC_COUNT],
}

/// Compute per-metric means and standard deviations over the full sample
/// set, in two batch passes: totals first, then squared deviations from
/// the mean.
///
/// The standard deviation divides by N, not N-1 — the population form.
/// Changing it to the sample form would alter every emitted number, so it
/// stays. Integer-valued metrics are aggregated as `f64` like the rest.
///
/// # Panics
///
/// Panics if `samples` is empty; the run loop never hands over fewer than
/// one sample.
pub fn aggregate(samples: &[Sample]) -> Statistics {
    assert!(!samples.is_empty(), "aggregate requires at least one sample");
    let n = samples.len() as f64;

    let mut totals = [0.0f64; METRIC_COUNT];
    for sample in samples {
        for (total, value) in totals.iter_mut().zip(sample.metric_values()) {
            *total += value as f64;
        }
    }
    let means = totals.map(|total| total / n);

    let mut nvars = [0.0f64; METRIC_COUNT];
    for sample in samples {
        for ((nvar, value), mean) in nvars.iter_mut().zip(sample.metric_values()).zip(means) {
            *nvar += (value as f64 - mean).powi(2);
        }
    }

    let mut metrics = [Summary::default(); METRIC_COUNT];
    for (summary, (mean, nvar)) in metrics.iter_mut().zip(means.into_iter().zip(nvars)) {
        *summary = Summary {
            mean,
            stdev: (nvar / n).sqrt(),
        };
    }
    Statistics { metrics }
}
