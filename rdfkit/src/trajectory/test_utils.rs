use crate::{Vector3D, Topology};
use super::{UnitCell, Frame, Trajectory};

pub fn test_trajectory(name: &str) -> Trajectory {
    match name {
        "water" => get_water(),
        "dimer" => get_dimer(),
        _ => panic!("unknown test trajectory {}", name)
    }
}

pub fn test_topology(name: &str) -> Topology {
    match name {
        "water" => {
            let mut topology = Topology::new();
            for molecule in 0..2 {
                topology.add_atom("O", molecule);
                topology.add_atom("H1", molecule);
                topology.add_atom("H2", molecule);
            }
            topology
        }
        "dimer" => {
            let mut topology = Topology::new();
            topology.add_atom("Ar", 0);
            topology.add_atom("Ar", 1);
            topology
        }
        _ => panic!("unknown test topology {}", name)
    }
}

/// Two water molecules in a 2 nm box, with the second molecule moving along x
/// and crossing the periodic boundary in the last frame
fn get_water() -> Trajectory {
    let cell = UnitCell::cubic(2.0).expect("valid cell");
    let molecule = [
        Vector3D::new(0.0, 0.0, 0.0),
        Vector3D::new(0.0, 0.075545, -0.058895),
        Vector3D::new(0.0, -0.075545, -0.058895),
    ];

    let mut trajectory = Trajectory::new();
    for &shift in &[0.3, 0.6, 1.9] {
        let mut frame = Frame::new(cell);
        let origin = Vector3D::new(0.5, 0.5, 0.5);
        for &atom in &molecule {
            frame.add_atom(origin + atom);
        }

        let origin = Vector3D::new(0.5 + shift, 0.5, 0.5);
        for &atom in &molecule {
            frame.add_atom(origin + atom);
        }
        trajectory.add_frame(frame).expect("valid frame");
    }

    return trajectory;
}

fn get_dimer() -> Trajectory {
    let cell = UnitCell::cubic(3.0).expect("valid cell");
    let mut frame = Frame::new(cell);
    frame.add_atom(Vector3D::new(1.0, 1.0, 1.0));
    frame.add_atom(Vector3D::new(1.35, 1.0, 1.0));

    let mut trajectory = Trajectory::new();
    trajectory.add_frame(frame).expect("valid frame");
    return trajectory;
}

/// Uniformly distributed, uncorrelated atoms in a cubic box. This uses a
/// simple linear congruential generator to stay deterministic.
pub fn ideal_gas(n_atoms: usize, n_frames: usize, length: f64, seed: u64) -> Trajectory {
    let mut state = seed;
    let mut uniform = move || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (state >> 11) as f64 / (1u64 << 53) as f64
    };

    let cell = UnitCell::cubic(length).expect("valid cell");
    let mut trajectory = Trajectory::new();
    for _ in 0..n_frames {
        let mut frame = Frame::new(cell);
        for _ in 0..n_atoms {
            frame.add_atom(Vector3D::new(
                length * uniform(),
                length * uniform(),
                length * uniform(),
            ));
        }
        trajectory.add_frame(frame).expect("valid frame");
    }

    return trajectory;
}
