use crate::vector::{Direction, Position};

/// r(t) = origin + t * direction. The direction is not normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Position,
    pub direction: Direction,
}

impl Ray {
    pub fn new(origin: Position, direction: Direction) -> Self {
        Self { origin, direction }
    }

    pub fn reach(&self, t: f32) -> Position {
        self.origin + self.direction * t
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_reach() {
        let ray = Ray::new(Position::new(1., 0., 0.), Direction::new(0., 2., 0.));
        assert_eq!(ray.reach(0.), ray.origin);
        assert_eq!(ray.reach(1.5), Position::new(1., 3., 0.));
        assert_eq!(ray.reach(-1.), Position::new(1., -2., 0.));
    }
}
