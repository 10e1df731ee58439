use approx::assert_relative_eq;

use rdfkit::{compute_rdf, Error, Normalization, RadialDistribution, RdfParameters};
use rdfkit::{Frame, PairExclusion, PairList, Topology, Trajectory, UnitCell, Vector3D};

/// Two independent pairs of atoms, (0, 1) and (2, 3), over two frames.
///
/// The distances are 0.3 and 0.55 in the first frame, and 0.32 and 0.53 in
/// the second one.
fn two_pairs() -> Trajectory {
    let cell = UnitCell::cubic(3.0).unwrap();
    let first = Frame::with_positions(cell, vec![
        Vector3D::new(0.0, 0.0, 0.0),
        Vector3D::new(0.3, 0.0, 0.0),
        Vector3D::new(0.0, 1.0, 0.0),
        Vector3D::new(0.55, 1.0, 0.0),
    ]);
    let second = Frame::with_positions(cell, vec![
        Vector3D::new(0.0, 0.0, 0.0),
        Vector3D::new(0.32, 0.0, 0.0),
        Vector3D::new(0.0, 1.0, 0.0),
        Vector3D::new(0.53, 1.0, 0.0),
    ]);

    return Trajectory::from_frames(vec![first, second]).unwrap();
}

fn shell_volume(r_min: f64, r_max: f64) -> f64 {
    4.0 / 3.0 * std::f64::consts::PI * (r_max.powi(3) - r_min.powi(3))
}

#[test]
fn two_pairs_two_frames() {
    let trajectory = two_pairs();
    let pairs = PairList::from_pairs([(0, 1), (2, 3)]).unwrap();

    let curve = compute_rdf(&trajectory, &pairs, 0.0, 1.0, 10, true).unwrap();
    assert_eq!(curve.len(), 10);
    assert_eq!(curve.counts().to_vec(), [0, 0, 0, 2, 0, 2, 0, 0, 0, 0]);
    assert_eq!(curve.total_count(), 4);
    assert_relative_eq!(curve.density(), 1.0 / 27.0, max_relative = 1e-15);

    for (k, &value) in curve.values().iter().enumerate() {
        if k == 3 || k == 5 {
            let edges = curve.edges();
            let expected = 2.0 / (shell_volume(edges[k], edges[k + 1]) / 27.0 * 2.0 * 2.0);
            assert_relative_eq!(value, expected, max_relative = 1e-12);
        } else {
            assert_eq!(value, 0.0);
        }
    }

    let distances = curve.distances();
    for k in 0..curve.len() {
        assert_relative_eq!(distances[k], 0.05 + 0.1 * k as f64, max_relative = 1e-12);
    }
}

#[test]
fn reported_edges_match_binning() {
    // one atom on each edge of a 7 bins histogram, all paired with atom 0
    let edges = compute_rdf(&two_pairs(), &PairList::from_pairs([(0, 1)]).unwrap(), 0.0, 1.0, 7, false)
        .unwrap()
        .edges()
        .clone();

    let mut positions = vec![Vector3D::zero()];
    for k in 0..7 {
        positions.push(Vector3D::new(edges[k], 0.0, 0.0));
    }
    let frame = Frame::with_positions(UnitCell::infinite(), positions);
    let trajectory = Trajectory::from_frames(vec![frame]).unwrap();
    let pairs = PairList::from_pairs((1..8).map(|i| (0, i))).unwrap();

    let mut parameters = RdfParameters::new(0.0, 1.0, 7);
    parameters.normalization = Normalization::None;
    let curve = RadialDistribution::new(parameters).unwrap().compute(&trajectory, &pairs).unwrap();
    assert_eq!(curve.counts().to_vec(), [1, 1, 1, 1, 1, 1, 1]);
}

#[test]
fn frame_and_pair_order() {
    let trajectory = two_pairs();
    let pairs = PairList::from_pairs([(0, 1), (2, 3)]).unwrap();
    let reference = compute_rdf(&trajectory, &pairs, 0.0, 1.0, 10, true).unwrap();

    let reversed_frames = Trajectory::from_frames(trajectory.iter().rev().cloned()).unwrap();
    let curve = compute_rdf(&reversed_frames, &pairs, 0.0, 1.0, 10, true).unwrap();
    assert_eq!(curve, reference);

    let reversed_pairs = PairList::from_pairs([(3, 2), (1, 0)]).unwrap();
    let curve = compute_rdf(&trajectory, &reversed_pairs, 0.0, 1.0, 10, true).unwrap();
    assert_eq!(curve, reference);
}

#[test]
fn deterministic() {
    let trajectory = two_pairs();
    let pairs = PairList::from_pairs([(0, 1), (2, 3), (0, 3), (1, 2)]).unwrap();

    let reference = compute_rdf(&trajectory, &pairs, 0.0, 1.5, 30, true).unwrap();

    let pool = rayon::ThreadPoolBuilder::new().num_threads(1).build().unwrap();
    let sequential = pool.install(|| compute_rdf(&trajectory, &pairs, 0.0, 1.5, 30, true).unwrap());
    assert_eq!(sequential, reference);

    for _ in 0..5 {
        let curve = compute_rdf(&trajectory, &pairs, 0.0, 1.5, 30, true).unwrap();
        assert_eq!(curve, reference);
    }
}

#[test]
fn counts_conservation() {
    let trajectory = two_pairs();
    let pairs = PairList::from_pairs([(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]).unwrap();
    let n_distances = (trajectory.len() * pairs.len()) as u64;

    // every distance in this trajectory is below 1.5
    let curve = compute_rdf(&trajectory, &pairs, 0.0, 1.5, 15, true).unwrap();
    assert_eq!(curve.total_count(), n_distances);

    let curve = compute_rdf(&trajectory, &pairs, 0.2, 0.6, 8, true).unwrap();
    assert_eq!(curve.total_count(), 4);
    assert!(curve.total_count() <= n_distances);

    assert!(curve.values().iter().all(|&value| value >= 0.0));
}

#[test]
fn periodic_and_non_periodic_agree_for_short_distances() {
    let trajectory = two_pairs();
    let pairs = PairList::from_pairs([(0, 1), (2, 3)]).unwrap();

    let periodic = compute_rdf(&trajectory, &pairs, 0.0, 1.0, 10, true).unwrap();
    let free = compute_rdf(&trajectory, &pairs, 0.0, 1.0, 10, false).unwrap();
    assert_eq!(periodic.counts(), free.counts());
    assert_eq!(periodic.values(), free.values());
}

#[test]
fn minimum_image_across_boundary() {
    let cell = UnitCell::orthorhombic(2.0, 4.0, 4.0).unwrap();
    let frame = Frame::with_positions(cell, vec![
        Vector3D::new(0.1, 1.0, 1.0),
        Vector3D::new(1.7, 1.0, 1.0),
    ]);
    let trajectory = Trajectory::from_frames(vec![frame]).unwrap();
    let pairs = PairList::from_pairs([(0, 1)]).unwrap();

    // the periodic distance is 0.4
    let curve = compute_rdf(&trajectory, &pairs, 0.0, 1.0, 4, true).unwrap();
    assert_eq!(curve.counts().to_vec(), [0, 1, 0, 0]);

    // the direct distance is 1.6, outside of the range
    let curve = compute_rdf(&trajectory, &pairs, 0.0, 1.0, 4, false).unwrap();
    assert_eq!(curve.total_count(), 0);
}

#[test]
fn bin_width_parameters() {
    let trajectory = two_pairs();
    let pairs = PairList::from_pairs([(0, 1), (2, 3)]).unwrap();

    let rdf = RadialDistribution::from_json(r#"{"r_max": 1.0, "bin_width": 0.1}"#).unwrap();
    assert_eq!(rdf.bins(), 10);

    let curve = rdf.compute(&trajectory, &pairs).unwrap();
    let reference = compute_rdf(&trajectory, &pairs, 0.0, 1.0, 10, true).unwrap();
    assert_eq!(curve.counts(), reference.counts());
}

#[test]
fn raw_counts() {
    let trajectory = two_pairs();
    let pairs = PairList::from_pairs([(0, 1), (2, 3)]).unwrap();

    let mut parameters = RdfParameters::new(0.0, 1.0, 10);
    parameters.normalization = Normalization::None;
    let curve = RadialDistribution::new(parameters).unwrap().compute(&trajectory, &pairs).unwrap();

    let counts = curve.counts().mapv(|count| count as f64);
    assert_eq!(curve.values(), &counts);
}

#[test]
fn pairs_from_topology() {
    let trajectory = two_pairs();
    let mut topology = Topology::new();
    topology.add_atom("Na", 0);
    topology.add_atom("Cl", 0);
    topology.add_atom("Na", 1);
    topology.add_atom("Cl", 1);

    let pairs = topology.select_pairs_by_name("name Na", "name Cl", PairExclusion::SameMolecule).unwrap();
    assert_eq!(pairs.iter().collect::<Vec<_>>(), [(0, 3), (1, 2)]);

    let pairs = topology.select_pairs_by_name("name Na", "name Cl", PairExclusion::SelfPairs).unwrap();
    assert_eq!(pairs.len(), 4);

    let curve = compute_rdf(&trajectory, &pairs, 0.0, 1.0, 10, true).unwrap();
    assert_eq!(curve.counts()[3], 2);
    assert_eq!(curve.counts()[5], 2);
}

#[test]
fn errors() {
    let trajectory = two_pairs();
    let pairs = PairList::from_pairs([(0, 1)]).unwrap();

    // parameters are checked before the other arguments
    let error = compute_rdf(&Trajectory::new(), &PairList::new(), 0.0, 1.0, 0, true).unwrap_err();
    assert_eq!(error.to_string(), "invalid argument: the number of bins must be positive");

    let error = compute_rdf(&trajectory, &pairs, 0.5, 0.5, 10, true).unwrap_err();
    assert_eq!(
        error.to_string(),
        "invalid argument: r_max must be larger than r_min, got r_min=0.5 and r_max=0.5"
    );

    let error = compute_rdf(&trajectory, &pairs, 0.0, 1.0, usize::MAX, true).unwrap_err();
    assert!(matches!(error, Error::InvalidArgument(_)));

    let error = compute_rdf(&Trajectory::new(), &pairs, 0.0, 1.0, 10, true).unwrap_err();
    assert_eq!(error.to_string(), "invalid argument: the trajectory does not contain any frame");

    let pairs = PairList::from_pairs([(0, 4)]).unwrap();
    let error = compute_rdf(&trajectory, &pairs, 0.0, 1.0, 10, true).unwrap_err();
    assert!(matches!(error, Error::IndexOutOfRange { index: 4, size: 4 }));
    assert_eq!(
        error.to_string(),
        "atom index out of range: got 4 but the trajectory contains 4 atoms"
    );
}
