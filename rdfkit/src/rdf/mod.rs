//! Radial distribution function estimation: parameters, histogram
//! accumulation and normalization.

mod parameters;
pub use self::parameters::{RdfParameters, Normalization};

mod histogram;

mod curve;
pub use self::curve::RdfCurve;

mod estimator;
pub use self::estimator::{RadialDistribution, compute_rdf};
