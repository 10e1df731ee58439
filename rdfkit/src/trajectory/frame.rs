use crate::{Error, Vector3D};

use super::UnitCell;

/// A single snapshot of a simulation: the positions of all atoms and the unit
/// cell at one point in simulated time.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    cell: UnitCell,
    positions: Vec<Vector3D>,
}

impl Frame {
    /// Create a new empty frame with the given unit cell
    pub fn new(cell: UnitCell) -> Frame {
        Frame {
            cell: cell,
            positions: Vec::new(),
        }
    }

    /// Create a frame with the given unit cell and atomic `positions`
    pub fn with_positions(cell: UnitCell, positions: Vec<Vector3D>) -> Frame {
        Frame {
            cell: cell,
            positions: positions,
        }
    }

    /// Add an atom at the given position to this frame. The new atom gets the
    /// next free index.
    pub fn add_atom(&mut self, position: Vector3D) {
        self.positions.push(position);
    }

    /// Get the number of atoms in this frame
    pub fn size(&self) -> usize {
        self.positions.len()
    }

    /// Get the unit cell of this frame
    pub fn cell(&self) -> UnitCell {
        self.cell
    }

    /// Get the positions of all atoms in this frame
    pub fn positions(&self) -> &[Vector3D] {
        &self.positions
    }

    /// Check that all positions in this frame are finite numbers
    pub(crate) fn check_positions(&self) -> Result<(), Error> {
        if let Some(index) = self.positions.iter().position(|p| !p.is_finite()) {
            return Err(Error::InvalidArgument(format!(
                "the position of atom {} is not finite: {:?}", index, self.positions[index]
            )));
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn positions_mut(&mut self) -> &mut [Vector3D] {
        &mut self.positions
    }
}
