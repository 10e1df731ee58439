//! Radial distribution functions for molecular dynamics trajectories.
//!
//! The main entry point is [`RadialDistribution`], configured with
//! [`RdfParameters`] and run over any [`TrajectorySource`] with a
//! [`PairList`] of atoms. Pair lists are usually created from a [`Topology`]
//! using [`Topology::select_pairs`].

#![warn(clippy::all, clippy::pedantic)]

// disable some style lints
#![allow(clippy::needless_return, clippy::must_use_candidate, clippy::comparison_chain)]
#![allow(clippy::redundant_field_names, clippy::redundant_closure_for_method_calls)]
#![allow(clippy::unreadable_literal, clippy::option_if_let_else, clippy::range_plus_one)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc, clippy::module_name_repetitions)]

#![allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap, clippy::cast_lossless, clippy::cast_sign_loss)]

// Tests lints
#![cfg_attr(test, allow(clippy::float_cmp))]

pub mod types;
pub use types::*;

mod errors;
pub use self::errors::Error;

pub mod trajectory;
pub use trajectory::{TrajectorySource, Trajectory, Frame, UnitCell};

pub mod selection;
pub use selection::{Atom, Topology, PairList, PairExclusion, AtomSelection};

pub mod rdf;
pub use rdf::{RadialDistribution, RdfParameters, Normalization, RdfCurve, compute_rdf};
