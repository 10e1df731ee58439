use crate::Error;

use super::histogram::{Histogram, MAX_BINS};

/// How the raw histogram counts are converted to the values of the curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[derive(serde::Deserialize, serde::Serialize, schemars::JsonSchema)]
pub enum Normalization {
    /// Divide the counts by the number of pairs expected in each spherical
    /// shell for an ideal gas with the average density of the trajectory. This
    /// gives the usual g(r), going to 1 at large distances in homogeneous
    /// systems.
    #[default]
    Rdf,
    /// Divide the counts by the volume of each spherical shell, the number of
    /// pairs and the number of frames. This gives the average number density
    /// of partner atoms around each pair's first atom, and does not depend on
    /// the cell volume.
    Density,
    /// Keep the raw counts
    None,
}

fn default_periodic() -> bool {
    true
}

/// Parameters of a radial distribution function calculation.
///
/// Exactly one of `bins` and `bin_width` must be given. When using
/// `bin_width`, the number of bins is `ceil((r_max - r_min) / bin_width)` and
/// `r_max` is kept as given. In both cases all bins share the same width,
/// `(r_max - r_min) / bins`.
///
/// ```
/// # use rdfkit::RdfParameters;
/// let parameters: RdfParameters = serde_json::from_str(r#"{
///     "r_max": 1.0,
///     "bin_width": 0.01,
///     "periodic": true
/// }"#).unwrap();
/// assert_eq!(parameters.n_bins().unwrap(), 100);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Deserialize, serde::Serialize, schemars::JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct RdfParameters {
    /// Lower bound of the distance range, included in the first bin
    #[serde(default)]
    pub r_min: f64,
    /// Upper bound of the distance range, excluded from the last bin
    pub r_max: f64,
    /// Number of bins in the histogram
    #[serde(default)]
    pub bins: Option<usize>,
    /// Approximate width of the bins, used to compute the number of bins
    #[serde(default)]
    pub bin_width: Option<f64>,
    /// Should distances use the minimum image convention of each frame's
    /// orthorhombic cell?
    #[serde(default = "default_periodic")]
    pub periodic: bool,
    /// Normalization of the histogram
    #[serde(default)]
    pub normalization: Normalization,
}

impl RdfParameters {
    /// Create parameters for `bins` bins between `r_min` and `r_max`, using
    /// periodic boundary conditions and the ideal gas normalization.
    pub fn new(r_min: f64, r_max: f64, bins: usize) -> RdfParameters {
        RdfParameters {
            r_min: r_min,
            r_max: r_max,
            bins: Some(bins),
            bin_width: None,
            periodic: true,
            normalization: Normalization::Rdf,
        }
    }

    /// Get the number of bins corresponding to these parameters
    pub fn n_bins(&self) -> Result<usize, Error> {
        self.check_range()?;

        match (self.bins, self.bin_width) {
            (Some(_), Some(_)) => Err(Error::InvalidArgument(
                "only one of 'bins' and 'bin_width' can be given".into()
            )),
            (None, None) => Err(Error::InvalidArgument(
                "one of 'bins' or 'bin_width' must be given".into()
            )),
            (Some(bins), None) => {
                if bins == 0 {
                    return Err(Error::InvalidArgument(
                        "the number of bins must be positive".into()
                    ));
                }

                if bins > MAX_BINS {
                    return Err(Error::InvalidArgument(format!(
                        "the number of bins must be at most {}, got {}", MAX_BINS, bins
                    )));
                }
                Ok(bins)
            }
            (None, Some(width)) => {
                if !(width.is_finite() && width > 0.0) {
                    return Err(Error::InvalidArgument(format!(
                        "bin_width must be positive and finite, got {}", width
                    )));
                }

                let bins = f64::ceil((self.r_max - self.r_min) / width);
                if bins > MAX_BINS as f64 {
                    return Err(Error::InvalidArgument(format!(
                        "bin_width {} is too small for the range [{}, {})", width, self.r_min, self.r_max
                    )));
                }
                Ok(usize::max(bins as usize, 1))
            }
        }
    }

    /// Create an empty histogram matching these parameters
    pub(crate) fn histogram(&self) -> Result<Histogram, Error> {
        let bins = self.n_bins()?;
        return Histogram::new(self.r_min, self.r_max, bins);
    }

    fn check_range(&self) -> Result<(), Error> {
        if !(self.r_min.is_finite() && self.r_max.is_finite()) {
            return Err(Error::InvalidArgument(format!(
                "the distance range must be finite, got [{}, {})", self.r_min, self.r_max
            )));
        }

        if self.r_min < 0.0 {
            return Err(Error::InvalidArgument(format!(
                "r_min must be positive or zero, got {}", self.r_min
            )));
        }

        if self.r_max <= self.r_min {
            return Err(Error::InvalidArgument(format!(
                "r_max must be larger than r_min, got r_min={} and r_max={}", self.r_min, self.r_max
            )));
        }

        Ok(())
    }
}
