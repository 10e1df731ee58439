use std::path::Path;

use super::Trajectory;
use crate::{Error, Topology};

#[cfg(feature = "chemfiles")]
impl From<chemfiles::Error> for Error {
    fn from(error: chemfiles::Error) -> Error {
        Error::Chemfiles(error.message)
    }
}

/// Read all frames in the file at the given `path` using
/// [chemfiles](https://chemfiles.org/), and convert them to a `Trajectory`.
/// The `Topology` (atom names and molecules) is taken from the first frame;
/// residues are used as molecules, and atoms outside of any residue are each
/// placed in their own molecule.
///
/// Positions and cell lengths are kept in the unit used by chemfiles
/// (Ångströms). Triclinic cells are not supported.
///
/// This function can read all [formats supported by
/// chemfiles](https://chemfiles.org/chemfiles/latest/formats.html).
#[cfg(feature = "chemfiles")]
pub fn read_from_file(path: impl AsRef<Path>) -> Result<(Trajectory, Topology), Error> {
    use std::collections::HashMap;
    use crate::trajectory::{Frame, UnitCell};

    let path = path.as_ref();
    let mut trajectory = Trajectory::new();
    let mut topology = None;

    let mut file = chemfiles::Trajectory::open(path, 'r')?;
    let mut chfl_frame = chemfiles::Frame::new();

    for step in 0..file.nsteps() {
        file.read(&mut chfl_frame)?;

        let cell = match chfl_frame.cell().shape() {
            chemfiles::CellShape::Infinite => UnitCell::infinite(),
            chemfiles::CellShape::Orthorhombic => {
                let [a, b, c] = chfl_frame.cell().lengths();
                UnitCell::orthorhombic(a, b, c)?
            }
            chemfiles::CellShape::Triclinic => {
                return Err(Error::InvalidArgument(format!(
                    "frame {} uses a triclinic cell, only orthorhombic cells are supported", step
                )));
            }
        };

        let positions = chfl_frame.positions().iter()
            .map(|&position| position.into())
            .collect();
        trajectory.add_frame(Frame::with_positions(cell, positions))?;

        if topology.is_none() {
            let chfl_topology = chfl_frame.topology();
            let mut molecules = HashMap::new();
            let mut next_molecule = 0;

            let mut first_topology = Topology::new();
            for i in 0..chfl_frame.size() {
                let residue_id = chfl_topology.residue_for_atom(i).and_then(|residue| residue.id());
                let molecule = match residue_id {
                    Some(id) => *molecules.entry(id).or_insert_with(|| {
                        next_molecule += 1;
                        next_molecule - 1
                    }),
                    None => {
                        next_molecule += 1;
                        next_molecule - 1
                    }
                };
                first_topology.add_atom(chfl_frame.atom(i).name(), molecule);
            }
            topology = Some(first_topology);
        }
    }

    let topology = topology.ok_or_else(|| Error::Chemfiles(
        "the trajectory file does not contain any frame".into()
    ))?;

    log::info!(
        "read {} frames with {} atoms from '{}'",
        trajectory.len(), topology.size(), path.display()
    );

    return Ok((trajectory, topology));
}

/// Read all frames in the file at the given `path` using
/// [chemfiles](https://chemfiles.org/), and convert them to a `Trajectory`.
///
/// This function is only available with the chemfiles feature enabled.
#[cfg(not(feature = "chemfiles"))]
pub fn read_from_file(_: impl AsRef<Path>) -> Result<(Trajectory, Topology), Error> {
    Err(Error::Chemfiles(
        "read_from_file is only available with the chemfiles feature enabled".into()
    ))
}
