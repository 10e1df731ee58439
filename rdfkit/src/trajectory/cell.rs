//! The `UnitCell` type represents the enclosing box of a simulated system, with
//! some type of periodic condition.
use crate::{Error, Vector3D};

/// The shape of a cell determine how we will be able to compute the periodic
/// boundaries condition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellShape {
    /// Infinite unit cell, with no boundaries
    Infinite,
    /// Orthorhombic unit cell, with cuboid shape
    Orthorhombic,
}

/// An `UnitCell` defines the system physical boundaries.
///
/// Only infinite and orthorhombic cells are supported: each axis of an
/// orthorhombic cell is independently periodic, which is what the
/// minimum-image convention in [`UnitCell::vector_image`] relies on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitCell {
    /// Side lengths of the cell, all zero for infinite cells
    lengths: Vector3D,
    /// Unit cell shape
    shape: CellShape,
}

impl Default for UnitCell {
    fn default() -> UnitCell {
        UnitCell::infinite()
    }
}

impl UnitCell {
    /// Create an infinite unit cell
    pub fn infinite() -> UnitCell {
        UnitCell {
            lengths: Vector3D::zero(),
            shape: CellShape::Infinite,
        }
    }

    /// Create an orthorhombic unit cell, with side lengths `a, b, c`.
    ///
    /// All lengths must be positive and finite.
    pub fn orthorhombic(a: f64, b: f64, c: f64) -> Result<UnitCell, Error> {
        let valid = |length: f64| length.is_finite() && length > 0.0;
        if !(valid(a) && valid(b) && valid(c)) {
            return Err(Error::InvalidArgument(format!(
                "cell lengths must be positive and finite, got [{}, {}, {}]", a, b, c
            )));
        }

        return Ok(UnitCell {
            lengths: Vector3D::new(a, b, c),
            shape: CellShape::Orthorhombic,
        });
    }

    /// Create a cubic unit cell, with side lengths `length, length, length`.
    pub fn cubic(length: f64) -> Result<UnitCell, Error> {
        UnitCell::orthorhombic(length, length, length)
    }

    /// Get the cell shape
    pub fn shape(&self) -> CellShape {
        self.shape
    }

    /// Check if this unit cell is infinite, *i.e.* if it does not have
    /// periodic boundary conditions.
    pub fn is_infinite(&self) -> bool {
        self.shape() == CellShape::Infinite
    }

    /// Get the three side lengths of the cell
    pub fn lengths(&self) -> Vector3D {
        self.lengths
    }

    /// Get the smallest side length of the cell, or infinity for infinite
    /// cells
    pub fn min_length(&self) -> f64 {
        match self.shape {
            CellShape::Infinite => f64::INFINITY,
            CellShape::Orthorhombic => {
                f64::min(self.lengths[0], f64::min(self.lengths[1], self.lengths[2]))
            }
        }
    }

    /// Get the volume of the cell. Infinite cells have a volume of 0.
    pub fn volume(&self) -> f64 {
        match self.shape {
            CellShape::Infinite => 0.0,
            CellShape::Orthorhombic => self.lengths[0] * self.lengths[1] * self.lengths[2],
        }
    }
}

/// Geometric operations using periodic boundary conditions
impl UnitCell {
    /// Find the image of a vector in the unit cell, obeying the periodic
    /// boundary conditions. For a cubic cell of side length `L`, this produce a
    /// vector with all components in `(-L/2, L/2]`.
    pub fn vector_image(&self, vector: &mut Vector3D) {
        match self.shape {
            CellShape::Infinite => (),
            CellShape::Orthorhombic => {
                for axis in 0..3 {
                    let length = self.lengths[axis];
                    // ceil(x - 1/2) maps the upper half-box boundary to +L/2
                    vector[axis] -= f64::ceil(vector[axis] / length - 0.5) * length;
                }
            }
        }
    }

    /// Periodic boundary conditions squared distance between the point `u` and
    /// the point `v`
    pub fn distance2(&self, u: Vector3D, v: Vector3D) -> f64 {
        let mut d = v - u;
        self.vector_image(&mut d);
        return d.norm2();
    }

    /// Periodic boundary conditions distance between the point `u` and
    /// the point `v`
    pub fn distance(&self, u: Vector3D, v: Vector3D) -> f64 {
        return f64::sqrt(self.distance2(u, v));
    }
}
