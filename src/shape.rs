use crate::material::Material;
use crate::ray::Ray;
use crate::vector::{Direction, Position};

/// Closed set of renderable primitives.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    pub center: Position,
    pub radius: f32,
    pub material: Material,
}

impl Sphere {
    pub fn new(center: Position, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    /// Parametric distance to the sphere along `ray`.
    ///
    /// Only the smaller root is considered. When it is not positive there is
    /// no hit, even if the larger root is, so a ray starting inside the
    /// sphere sees nothing.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let co = ray.origin - self.center;

        let a = ray.direction.dot(&ray.direction);
        let b = 2. * co.dot(&ray.direction);
        let c = co.dot(&co) - self.radius * self.radius;

        let t = match solve_quadratic(a, b, c) {
            Roots::None => return None,
            Roots::One(t) => t,
            Roots::Two(t1, t2) => t1.min(t2),
        };
        if t > 0. {
            Some(t)
        } else {
            None
        }
    }
}

impl Shape {
    pub fn sphere(center: Position, radius: f32, material: Material) -> Self {
        Self::Sphere(Sphere::new(center, radius, material))
    }

    pub fn position(&self) -> Position {
        match self {
            Self::Sphere(sphere) => sphere.center,
        }
    }

    pub fn material(&self) -> &Material {
        match self {
            Self::Sphere(sphere) => &sphere.material,
        }
    }

    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        match self {
            Self::Sphere(sphere) => sphere.intersect(ray),
        }
    }

    pub fn intersect_position(&self, ray: &Ray) -> Option<Position> {
        self.intersect(ray).map(|t| ray.reach(t))
    }

    /// Whether the infinite line through `ray` stays clear of the shape's
    /// bounding radius.
    pub fn clears_line(&self, ray: &Ray) -> bool {
        match self {
            Self::Sphere(sphere) => {
                let to_center: Direction = sphere.center - ray.origin;
                to_center.norm() * sine(&ray.direction, &to_center) > sphere.radius
            }
        }
    }
}

/// Sine of the angle between two directions.
pub(crate) fn sine(a: &Direction, b: &Direction) -> f32 {
    a.cross(b).norm() / (a.norm() * b.norm())
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Roots {
    None,
    One(f32),
    Two(f32, f32),
}

/// Real roots of a·t² + b·t + c = 0.
///
/// `a == 0 && b == 0` reports no roots, including the `c == 0` case where
/// every t would satisfy the equation.
fn solve_quadratic(a: f32, b: f32, c: f32) -> Roots {
    if a == 0. {
        if b == 0. {
            Roots::None
        } else {
            Roots::One(-c / b)
        }
    } else {
        let discriminant = b * b - 4. * a * c;
        if discriminant == 0. {
            Roots::One(-b / 2. / a)
        } else if discriminant > 0. {
            let disc_sqrt = discriminant.sqrt();
            Roots::Two((-b + disc_sqrt) / 2. / a, (-b - disc_sqrt) / 2. / a)
        } else {
            Roots::None
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::color::Color;

    fn unit_sphere(center: Position) -> Shape {
        let grey = Color::from_hex(0x808080);
        Shape::sphere(center, 1., Material::new(grey, grey, grey, 2., grey))
    }

    #[test]
    fn test_solve_quadratic() {
        assert_eq!(solve_quadratic(0., 0., 0.), Roots::None);
        assert_eq!(solve_quadratic(0., 0., 3.), Roots::None);
        assert_eq!(solve_quadratic(0., 2., -4.), Roots::One(2.));
        assert_eq!(solve_quadratic(1., -2., 1.), Roots::One(1.));
        assert_eq!(solve_quadratic(1., 0., -4.), Roots::Two(2., -2.));
        assert_eq!(solve_quadratic(1., 0., 4.), Roots::None);
    }

    #[test]
    fn test_ray_at_center_hits_near_side() {
        let sphere = unit_sphere(Position::new(0., 0., 5.));
        let ray = Ray::new(Position::origin(), Direction::new(0., 0., 1.));
        let t = sphere.intersect(&ray).unwrap();
        assert!((t - 4.).abs() < 1e-5);
        assert_eq!(sphere.intersect_position(&ray), Some(Position::new(0., 0., 4.)));
    }

    #[test]
    fn test_unnormalized_direction_scales_t() {
        let sphere = unit_sphere(Position::new(0., 0., 5.));
        let ray = Ray::new(Position::origin(), Direction::new(0., 0., 2.));
        let t = sphere.intersect(&ray).unwrap();
        assert!((t - 2.).abs() < 1e-5);
    }

    #[test]
    fn test_miss() {
        let sphere = unit_sphere(Position::new(0., 1.5, 5.));
        let ray = Ray::new(Position::origin(), Direction::new(0., 0., 1.));
        assert_eq!(sphere.intersect(&ray), None);
        assert_eq!(sphere.intersect_position(&ray), None);
    }

    #[test]
    fn test_tangent_has_single_root() {
        let sphere = unit_sphere(Position::new(0., 1., 5.));
        let ray = Ray::new(Position::origin(), Direction::new(0., 0., 1.));
        let co = ray.origin - sphere.position();
        let roots = solve_quadratic(1., 2. * co.dot(&ray.direction), co.dot(&co) - 1.);
        assert_eq!(roots, Roots::One(5.));
        assert_eq!(sphere.intersect(&ray), Some(5.));
    }

    #[test]
    fn test_behind_ray_is_missed() {
        let sphere = unit_sphere(Position::new(0., 0., -5.));
        let ray = Ray::new(Position::origin(), Direction::new(0., 0., 1.));
        assert_eq!(sphere.intersect(&ray), None);
    }

    #[test]
    fn test_origin_inside_sphere_is_missed() {
        let sphere = unit_sphere(Position::origin());
        let ray = Ray::new(Position::origin(), Direction::new(1., 0., 0.));
        assert_eq!(sphere.intersect(&ray), None);
    }

    #[test]
    fn test_zero_direction_is_missed() {
        let sphere = unit_sphere(Position::new(0., 0., 5.));
        let ray = Ray::new(Position::origin(), Direction::zeros());
        assert_eq!(sphere.intersect(&ray), None);
    }

    #[test]
    fn test_clears_line() {
        let sphere = unit_sphere(Position::new(0., 0., 5.));
        let through = Ray::new(Position::origin(), Direction::new(0., 0.1, 1.));
        let beside = Ray::new(Position::origin(), Direction::new(0., 1., 1.));
        assert!(!sphere.clears_line(&through));
        assert!(sphere.clears_line(&beside));
    }
}
