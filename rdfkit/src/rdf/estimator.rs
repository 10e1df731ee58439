use std::cell::RefCell;

use log::{debug, warn};
use ndarray::Array1;
use rayon::prelude::*;
use thread_local::ThreadLocal;

use crate::{Error, PairList, TrajectorySource};

use super::{Normalization, RdfCurve, RdfParameters};
use super::histogram::Histogram;

/// Radial distribution function estimator.
///
/// For every frame of a trajectory and every pair in a [`PairList`], the
/// distance between the two atoms is computed (using the minimum image
/// convention if requested) and accumulated in a histogram. The histogram is
/// then normalized according to [`RdfParameters::normalization`].
///
/// ```
/// # use rdfkit::{RadialDistribution, Trajectory, Frame, UnitCell, PairList, Vector3D};
/// let cell = UnitCell::cubic(3.0).unwrap();
/// let frame = Frame::with_positions(cell, vec![
///     Vector3D::new(0.0, 0.0, 0.0),
///     Vector3D::new(0.35, 0.0, 0.0),
/// ]);
/// let trajectory = Trajectory::from_frames(vec![frame]).unwrap();
/// let pairs = PairList::from_pairs([(0, 1)]).unwrap();
///
/// let rdf = RadialDistribution::from_json(r#"{"r_max": 1.0, "bins": 10}"#).unwrap();
/// let curve = rdf.compute(&trajectory, &pairs).unwrap();
/// assert_eq!(curve.counts()[3], 1);
/// assert_eq!(curve.total_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct RadialDistribution {
    parameters: RdfParameters,
    /// empty histogram with the bins defined by the parameters
    histogram: Histogram,
}

impl RadialDistribution {
    /// Create a new `RadialDistribution` with the given parameters
    pub fn new(parameters: RdfParameters) -> Result<RadialDistribution, Error> {
        // validate parameters once in the constructor
        let histogram = parameters.histogram()?;
        return Ok(RadialDistribution {
            parameters: parameters,
            histogram: histogram,
        });
    }

    /// Create a new `RadialDistribution` from parameters given as JSON
    pub fn from_json(parameters: &str) -> Result<RadialDistribution, Error> {
        let parameters = serde_json::from_str::<RdfParameters>(parameters)?;
        return RadialDistribution::new(parameters);
    }

    /// Get the parameters used to create this estimator
    pub fn parameters(&self) -> &RdfParameters {
        &self.parameters
    }

    /// Get the parameters used to create this estimator as a JSON string
    pub fn parameters_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(&self.parameters)?)
    }

    /// Get the number of bins in the curves produced by this estimator
    pub fn bins(&self) -> usize {
        self.histogram.bins()
    }

    /// Compute the radial distribution function for all `pairs` over all the
    /// frames in `trajectory`.
    ///
    /// This fails if the trajectory or the pair list are empty, or if any pair
    /// refers to an atom not present in the trajectory. All inputs are checked
    /// before starting the calculation.
    #[time_graph::instrument(name = "RadialDistribution::compute")]
    pub fn compute(&self, trajectory: &dyn TrajectorySource, pairs: &PairList) -> Result<RdfCurve, Error> {
        if pairs.is_empty() {
            return Err(Error::InvalidArgument("the list of pairs is empty".into()));
        }

        let n_frames = trajectory.frames()?;
        if n_frames == 0 {
            return Err(Error::InvalidArgument("the trajectory does not contain any frame".into()));
        }

        let n_atoms = trajectory.size()?;
        pairs.check_indexes(n_atoms)?;

        let mut inverse_volumes = 0.0;
        let mut min_length = f64::INFINITY;
        for frame in 0..n_frames {
            let size = trajectory.positions(frame)?.len();
            if size != n_atoms {
                return Err(Error::InvalidArgument(format!(
                    "frame {} contains {} atoms, but the trajectory should have {} atoms",
                    frame, size, n_atoms
                )));
            }

            let cell = trajectory.cell(frame)?;
            if !cell.is_infinite() {
                inverse_volumes += 1.0 / cell.volume();
                min_length = f64::min(min_length, cell.min_length());
            }
        }
        let density = inverse_volumes / n_frames as f64;

        if self.parameters.periodic && 2.0 * self.parameters.r_max > min_length {
            warn!(
                "r_max ({}) is larger than half of the smallest cell length ({}), \
                distances above half the cell are not sampled uniformly with the \
                minimum image convention",
                self.parameters.r_max, min_length
            );
        }

        let histogram = self.accumulate(trajectory, pairs, n_frames)?;
        debug!(
            "{} out of {} distances are inside [{}, {}), using {} frames and {} pairs",
            histogram.total(), n_frames * pairs.len(),
            self.parameters.r_min, self.parameters.r_max,
            n_frames, pairs.len(),
        );

        let values = self.normalize(&histogram, density, n_frames, pairs.len());

        return Ok(RdfCurve {
            edges: histogram.edges(),
            distances: histogram.centers(),
            values: values,
            counts: histogram.counts().clone(),
            density: density,
        });
    }

    /// Accumulate the distances for all pairs in all frames. Frames are
    /// distributed over the rayon thread pool, each thread filling its own
    /// histogram; the per-thread histograms are summed at the end.
    #[time_graph::instrument(name = "RadialDistribution::accumulate")]
    fn accumulate(&self, trajectory: &dyn TrajectorySource, pairs: &PairList, n_frames: usize) -> Result<Histogram, Error> {
        let periodic = self.parameters.periodic;
        let partials = ThreadLocal::new();

        (0..n_frames).into_par_iter().try_for_each(|frame| {
            let positions = trajectory.positions(frame)?;
            let cell = trajectory.cell(frame)?;

            let mut histogram = partials.get_or(|| {
                RefCell::new(self.histogram.empty_like())
            }).borrow_mut();

            for (first, second) in pairs.iter() {
                let mut vector = positions[second] - positions[first];
                if periodic {
                    cell.vector_image(&mut vector);
                }
                histogram.add(vector.norm());
            }

            Ok::<(), Error>(())
        })?;

        let mut histogram = self.histogram.empty_like();
        for partial in partials {
            histogram.merge(&partial.into_inner());
        }

        return Ok(histogram);
    }

    fn normalize(&self, histogram: &Histogram, density: f64, n_frames: usize, n_pairs: usize) -> Array1<f64> {
        let counts = histogram.counts().mapv(|count| count as f64);
        let n_samples = (n_frames * n_pairs) as f64;

        match self.parameters.normalization {
            Normalization::None => counts,
            Normalization::Density => counts / (histogram.shell_volumes() * n_samples),
            Normalization::Rdf => {
                if density <= 0.0 {
                    warn!(
                        "the average density is zero (no frame has a periodic cell), \
                        the radial distribution function is undefined"
                    );
                    return Array1::from_elem(histogram.bins(), f64::NAN);
                }

                let expected = histogram.shell_volumes() * (density * n_samples);
                counts / expected
            }
        }
    }
}

/// Compute the radial distribution function between the given `pairs` of
/// atoms over the whole `trajectory`, with `bins` bins in `[r_min, r_max)`.
///
/// If `periodic` is `true`, distances are computed with the minimum image
/// convention in the orthorhombic cell of each frame. The result is
/// normalized against an ideal gas with the average density of the
/// trajectory.
pub fn compute_rdf(
    trajectory: &dyn TrajectorySource,
    pairs: &PairList,
    r_min: f64,
    r_max: f64,
    bins: usize,
    periodic: bool,
) -> Result<RdfCurve, Error> {
    let mut parameters = RdfParameters::new(r_min, r_max, bins);
    parameters.periodic = periodic;

    let rdf = RadialDistribution::new(parameters)?;
    return rdf.compute(trajectory, pairs);
}
