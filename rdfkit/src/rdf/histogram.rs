use ndarray::Array1;

use crate::Error;

/// Largest number of bins in a histogram
pub(crate) const MAX_BINS: usize = 1 << 24;

/// Histogram of distances with `bins` equal-width bins covering the half-open
/// range `[r_min, r_max)`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Histogram {
    r_min: f64,
    r_max: f64,
    /// number of bins per unit of distance
    scale: f64,
    counts: Array1<u64>,
}

impl Histogram {
    pub fn new(r_min: f64, r_max: f64, bins: usize) -> Result<Histogram, Error> {
        if bins == 0 {
            return Err(Error::InvalidArgument("the number of bins must be positive".into()));
        }

        if bins > MAX_BINS {
            return Err(Error::InvalidArgument(format!(
                "the number of bins must be at most {}, got {}", MAX_BINS, bins
            )));
        }

        if !(r_min.is_finite() && r_max.is_finite() && r_min >= 0.0 && r_max > r_min) {
            return Err(Error::InvalidArgument(format!(
                "invalid histogram range [{}, {})", r_min, r_max
            )));
        }

        return Ok(Histogram {
            r_min: r_min,
            r_max: r_max,
            scale: bins as f64 / (r_max - r_min),
            counts: Array1::zeros(bins),
        });
    }

    /// Get a histogram with the same bins as this one and all counts set to 0
    pub fn empty_like(&self) -> Histogram {
        Histogram {
            r_min: self.r_min,
            r_max: self.r_max,
            scale: self.scale,
            counts: Array1::zeros(self.counts.len()),
        }
    }

    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    /// Find the bin containing `distance`, or `None` if the distance is
    /// outside of `[r_min, r_max)`. NaN distances are outside of every bin.
    #[inline]
    pub fn bin(&self, distance: f64) -> Option<usize> {
        if !(distance >= self.r_min && distance < self.r_max) {
            return None;
        }

        let bins = self.bins();
        // rounding can push distances right below r_max into `bins`
        let bin = usize::min(f64::floor((distance - self.r_min) * self.scale) as usize, bins - 1);

        // the estimate above can be off by one next to an edge, the edges
        // themselves are the reference
        if bin > 0 && distance < self.edge(bin) {
            return Some(bin - 1);
        } else if bin + 1 < bins && distance >= self.edge(bin + 1) {
            return Some(bin + 1);
        }

        return Some(bin);
    }

    /// Get the lower edge of bin `k`, or `r_max` for `k == bins`
    #[inline]
    fn edge(&self, k: usize) -> f64 {
        let bins = self.bins();
        if k >= bins {
            return self.r_max;
        }
        return self.r_min + (self.r_max - self.r_min) * k as f64 / bins as f64;
    }

    /// Add a single distance to this histogram, returning `true` if it was
    /// inside the range of the histogram.
    #[inline]
    pub fn add(&mut self, distance: f64) -> bool {
        if let Some(bin) = self.bin(distance) {
            self.counts[bin] += 1;
            true
        } else {
            false
        }
    }

    /// Add all the counts from `other` to this histogram. Both histograms
    /// must have the same bins.
    pub fn merge(&mut self, other: &Histogram) {
        debug_assert_eq!(self.r_min, other.r_min);
        debug_assert_eq!(self.r_max, other.r_max);
        self.counts += &other.counts;
    }

    pub fn counts(&self) -> &Array1<u64> {
        &self.counts
    }

    pub fn total(&self) -> u64 {
        self.counts.sum()
    }

    /// Get the `bins + 1` edges of the bins. The first edge is exactly `r_min`
    /// and the last one exactly `r_max`.
    pub fn edges(&self) -> Array1<f64> {
        return Array1::from_shape_fn(self.bins() + 1, |k| self.edge(k));
    }

    /// Get the middle of each bin
    pub fn centers(&self) -> Array1<f64> {
        let edges = self.edges();
        return Array1::from_shape_fn(self.bins(), |k| 0.5 * (edges[k] + edges[k + 1]));
    }

    /// Get the volume of the spherical shell corresponding to each bin
    pub fn shell_volumes(&self) -> Array1<f64> {
        let edges = self.edges();
        return Array1::from_shape_fn(self.bins(), |k| {
            let (lo, hi) = (edges[k], edges[k + 1]);
            4.0 / 3.0 * std::f64::consts::PI * (hi * hi * hi - lo * lo * lo)
        });
    }
}
