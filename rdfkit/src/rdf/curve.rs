use ndarray::Array1;

/// Result of a radial distribution function calculation.
///
/// The curve contains one entry per histogram bin, in increasing distance
/// order. Each entry is located at the middle of its bin, and stores both the
/// normalized value and the raw number of distances that fell into the bin.
#[derive(Debug, Clone, PartialEq)]
pub struct RdfCurve {
    pub(crate) edges: Array1<f64>,
    pub(crate) distances: Array1<f64>,
    pub(crate) values: Array1<f64>,
    pub(crate) counts: Array1<u64>,
    pub(crate) density: f64,
}

impl RdfCurve {
    /// Get the number of entries in this curve
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if this curve is empty. This is never the case for curves
    /// produced by `RadialDistribution::compute`.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the `len() + 1` edges of the histogram bins
    pub fn edges(&self) -> &Array1<f64> {
        &self.edges
    }

    /// Get the distance associated with each entry, i.e. the middle of the
    /// corresponding bin
    pub fn distances(&self) -> &Array1<f64> {
        &self.distances
    }

    /// Get the normalized value for each entry. With the default
    /// normalization, these values are NaN if the average density of the
    /// trajectory is zero.
    pub fn values(&self) -> &Array1<f64> {
        &self.values
    }

    /// Get the raw number of distances in each bin, before normalization
    pub fn counts(&self) -> &Array1<u64> {
        &self.counts
    }

    /// Get the total number of distances that fell inside the histogram range
    pub fn total_count(&self) -> u64 {
        self.counts.sum()
    }

    /// Get the average partner density used for the ideal gas normalization,
    /// i.e. the average over frames of the inverse cell volume. Frames without
    /// periodic cell contribute a density of zero.
    pub fn density(&self) -> f64 {
        self.density
    }

    /// Iterate over `(distance, value)` pairs in this curve
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (f64, f64)> + '_ {
        self.distances.iter().copied().zip(self.values.iter().copied())
    }
}
