use crate::{Error, Vector3D};

mod cell;
pub use self::cell::{UnitCell, CellShape};

mod frame;
pub use self::frame::Frame;

mod chemfiles;
pub use self::chemfiles::read_from_file;

#[cfg(test)]
pub(crate) mod test_utils;

/// A `TrajectorySource` gives read-only access to the frames of a simulation
/// trajectory, as produced by an external simulation engine.
///
/// All frames must contain the same number of atoms, and the same atom index
/// must refer to the same atom in every frame.
pub trait TrajectorySource: Send + Sync {
    /// Get the number of atoms in every frame of this trajectory
    fn size(&self) -> Result<usize, Error>;

    /// Get the number of frames in this trajectory
    fn frames(&self) -> Result<usize, Error>;

    /// Get the positions of all atoms in the given `frame`. The returned value
    /// must be a slice of length `self.size()` containing the Cartesian
    /// coordinates of all atoms, in the same length unit as the cell.
    fn positions(&self, frame: usize) -> Result<&[Vector3D], Error>;

    /// Get the unit cell of the given `frame`
    fn cell(&self, frame: usize) -> Result<UnitCell, Error>;
}

/// A simple in-memory implementation of `TrajectorySource`, storing a list of
/// [`Frame`] with the same number of atoms.
#[derive(Clone, Debug, Default)]
pub struct Trajectory {
    frames: Vec<Frame>,
}

impl Trajectory {
    /// Create a new empty trajectory
    pub fn new() -> Trajectory {
        Trajectory {
            frames: Vec::new(),
        }
    }

    /// Create a trajectory containing all the given `frames`
    pub fn from_frames(frames: impl IntoIterator<Item = Frame>) -> Result<Trajectory, Error> {
        let mut trajectory = Trajectory::new();
        for frame in frames {
            trajectory.add_frame(frame)?;
        }
        return Ok(trajectory);
    }

    /// Add a new frame at the end of this trajectory.
    ///
    /// The frame must have the same number of atoms as the frames already in
    /// the trajectory, and only finite positions.
    pub fn add_frame(&mut self, frame: Frame) -> Result<(), Error> {
        if let Some(first) = self.frames.first() {
            if first.size() != frame.size() {
                return Err(Error::InvalidArgument(format!(
                    "all frames must contain the same number of atoms, \
                    this trajectory has {} atoms but the new frame has {}",
                    first.size(), frame.size()
                )));
            }
        }

        frame.check_positions()?;
        self.frames.push(frame);
        Ok(())
    }

    /// Get the number of frames in this trajectory
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Check if this trajectory contains no frames
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Get the frame at the given index, if any
    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    /// Iterate over the frames in this trajectory
    pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
        self.frames.iter()
    }

    fn get(&self, frame: usize) -> Result<&Frame, Error> {
        self.frames.get(frame).ok_or_else(|| Error::InvalidArgument(format!(
            "frame index {} is out of range for a trajectory with {} frames",
            frame, self.frames.len()
        )))
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Frame;
    type IntoIter = std::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

impl TrajectorySource for Trajectory {
    fn size(&self) -> Result<usize, Error> {
        Ok(self.frames.first().map_or(0, Frame::size))
    }

    fn frames(&self) -> Result<usize, Error> {
        Ok(self.frames.len())
    }

    fn positions(&self, frame: usize) -> Result<&[Vector3D], Error> {
        Ok(self.get(frame)?.positions())
    }

    fn cell(&self, frame: usize) -> Result<UnitCell, Error> {
        Ok(self.get(frame)?.cell())
    }
}

impl std::convert::TryFrom<&dyn TrajectorySource> for Trajectory {
    type Error = Error;

    fn try_from(source: &dyn TrajectorySource) -> Result<Trajectory, Error> {
        let mut trajectory = Trajectory::new();
        for frame in 0..source.frames()? {
            trajectory.add_frame(Frame::with_positions(
                source.cell(frame)?,
                source.positions(frame)?.to_vec(),
            ))?;
        }
        return Ok(trajectory);
    }
}
