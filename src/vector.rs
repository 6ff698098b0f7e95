use nalgebra::{Point3, Vector3};

use crate::error::{Error, Result};

/// A point in space.
pub type Position = Point3<f32>;

/// A free vector: a displacement or a look direction.
pub type Direction = Vector3<f32>;

/// Normalizes `d`, failing when its length is exactly zero.
pub fn unit(d: &Direction) -> Result<Direction> {
    let length = d.norm();
    if length == 0. {
        Err(Error::DegenerateVector)
    } else {
        Ok(d / length)
    }
}

/// Mirrors `l` about the normal `n`.
pub fn reflect(l: &Direction, n: &Direction) -> Direction {
    n * (2. * n.dot(l)) - l
}
