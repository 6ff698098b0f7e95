//! Pinhole camera that turns pixel coordinates into primary rays.

use std::f32::consts::PI;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::ray::Ray;
use crate::vector::{unit, Direction, Position};

/// The virtual image plane in front of the camera.
///
/// `width` and `height` are the lengths of the half-extent basis vectors of
/// the plane, `depth` is its distance from the camera. None of them are pixel
/// counts.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, depth: f32) -> Self {
        Self { width, height, depth }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Position,
    /// Look direction. Must not be zero when rays are generated.
    pub direction: Direction,
    pub viewport: Viewport,
}

/// Collects the camera pose; exactly one of direction or target is needed.
#[derive(Debug, Clone)]
pub struct CameraBuilder {
    position: Position,
    viewport: Option<Viewport>,
    direction: Option<Direction>,
    target: Option<Position>,
}

impl CameraBuilder {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            viewport: None,
            direction: None,
            target: None,
        }
    }

    pub fn viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = Some(viewport);
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn target(mut self, target: Position) -> Self {
        self.target = Some(target);
        self
    }

    /// A direction takes precedence over a target when both were given.
    pub fn build(self) -> Result<Camera> {
        let direction = match (self.direction, self.target) {
            (Some(direction), _) => direction,
            (None, Some(target)) => target - self.position,
            (None, None) => return Err(Error::MissingDirection),
        };
        Ok(Camera {
            position: self.position,
            direction,
            viewport: self.viewport.unwrap_or_else(|| Viewport::new(1., 1., 1.)),
        })
    }
}

impl Camera {
    pub fn builder(position: Position) -> CameraBuilder {
        CameraBuilder::new(position)
    }

    /// Distance from the coordinate origin.
    pub fn distance(&self) -> f32 {
        self.position.coords.norm()
    }

    pub fn look_to(&mut self, direction: Direction) -> Direction {
        self.direction = direction;
        self.direction
    }

    pub fn target_at(&mut self, target: Position) -> Direction {
        self.look_to(target - self.position)
    }

    /// Moves the camera along the line through the origin.
    pub fn zoom(&mut self, delta: f32) {
        self.position = Position::from(self.position.coords * (1. + delta));
    }

    /// Orbits the camera around the origin by `h` horizontal and `v`
    /// vertical radians, then looks back at the origin.
    ///
    /// Only meaningful when the scene is centred on the origin.
    pub fn rotate(&mut self, h: f32, v: f32) {
        let distance = self.distance();
        let p = self.position;
        let angle_v = (p.z / distance).asin();
        let angle_h = (p.y / p.x).atan() + PI * if p.x >= 0. { 2. } else { 1. };

        self.position = Position::new(
            (angle_h + h).cos() * (angle_v + v).cos() * distance,
            (angle_h + h).sin() * (angle_v + v).cos() * distance,
            (angle_v + v).sin() * distance,
        );
        self.target_at(Position::origin());
    }

    /// The four corner directions of the view frustum, in the order
    /// top-left, top-right, bottom-left, bottom-right.
    pub fn corners(&self) -> Result<[Direction; 4]> {
        let Viewport { width, height, depth } = self.viewport;
        let (xd, yd, zd) = (self.direction.x, self.direction.y, self.direction.z);
        let tilted = yd != 0. || xd != 0.;

        let horizontal = if tilted {
            Direction::new(-yd, xd, 0.)
        } else {
            Direction::new(zd, 0., 0.)
        };
        let horizontal = unit(&horizontal)? * width;

        let vertical = if tilted {
            Direction::new(xd * zd, yd * zd, -(xd * xd + yd * yd))
        } else {
            Direction::new(0., -zd, 0.)
        };
        let vertical = unit(&vertical)? * height;

        let base = unit(&self.direction)? * depth;
        let corner = |dv: f32, dh: f32| base + horizontal * dh + vertical * dv;
        Ok([
            corner(-1., -1.),
            corner(-1., 1.),
            corner(1., -1.),
            corner(1., 1.),
        ])
    }

    pub fn frustum(&self, width: u32, height: u32) -> Result<Frustum> {
        let [top_left, top_right, bottom_left, bottom_right] = self.corners()?;
        Ok(Frustum {
            position: self.position,
            top_left,
            top_right,
            bottom_left,
            bottom_right,
            width: width as f32,
            height: height as f32,
        })
    }

    /// Calls `processor` with the primary ray of every pixel, column by column.
    pub fn rasterize<F>(&self, width: u32, height: u32, mut processor: F) -> Result<()>
    where
        F: FnMut(u32, u32, Ray) -> Result<()>,
    {
        let frustum = self.frustum(width, height)?;
        for x in 0..width {
            for y in 0..height {
                processor(x, y, frustum.ray(x, y))?;
            }
        }
        Ok(())
    }
}

/// Corner rays of one frame, sized for a pixel grid.
///
/// Pixels are independent, so a frustum can be shared across threads.
#[derive(Debug, Clone, Copy)]
pub struct Frustum {
    position: Position,
    top_left: Direction,
    top_right: Direction,
    bottom_left: Direction,
    bottom_right: Direction,
    width: f32,
    height: f32,
}

impl Frustum {
    /// Bilinear blend of the corners with unnormalized weights `x` and
    /// `width - x`, then `y` and `height - y`. The ray direction is not unit.
    pub fn ray(&self, x: u32, y: u32) -> Ray {
        let (x, y) = (x as f32, y as f32);
        let l = self.top_left * x + self.top_right * (self.width - x);
        let r = self.bottom_left * x + self.bottom_right * (self.width - x);
        Ray::new(self.position, r * y + l * (self.height - y))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn close(a: &Direction, b: &Direction) -> bool {
        (a - b).norm() < 1e-5
    }

    fn looking_down_z() -> Camera {
        Camera::builder(Position::new(0., 0., 5.))
            .viewport(Viewport::new(1., 1., 1.))
            .target(Position::origin())
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder() {
        let camera = looking_down_z();
        assert_eq!(camera.direction, Direction::new(0., 0., -5.));

        let camera = Camera::builder(Position::origin())
            .direction(Direction::new(1., 0., 0.))
            .target(Position::new(0., 5., 0.))
            .build()
            .unwrap();
        assert_eq!(camera.direction, Direction::new(1., 0., 0.));
    }

    #[test]
    fn test_builder_without_direction_fails() {
        let result = Camera::builder(Position::origin()).viewport(Viewport::new(1., 1., 1.)).build();
        assert!(matches!(result, Err(Error::MissingDirection)));
    }

    #[test]
    fn test_corners_vertical_look() {
        let [tl, tr, bl, br] = looking_down_z().corners().unwrap();
        assert!(close(&tl, &Direction::new(1., -1., -1.)));
        assert!(close(&tr, &Direction::new(-1., -1., -1.)));
        assert!(close(&bl, &Direction::new(1., 1., -1.)));
        assert!(close(&br, &Direction::new(-1., 1., -1.)));
    }

    #[test]
    fn test_corners_span_orthogonal_plane() {
        let camera = Camera::builder(Position::new(3., -1., 2.))
            .viewport(Viewport::new(2., 0.5, 3.))
            .direction(Direction::new(1., 2., 3.))
            .build()
            .unwrap();
        let [tl, tr, bl, br] = camera.corners().unwrap();
        let horizontal = (tr - tl) / 2.;
        let vertical = (bl - tl) / 2.;
        let base = (tl + tr + bl + br) / 4.;
        let d = camera.direction;

        assert!(horizontal.dot(&d).abs() < 1e-4);
        assert!(vertical.dot(&d).abs() < 1e-4);
        assert!(horizontal.dot(&vertical).abs() < 1e-4);
        assert!((horizontal.norm() - 2.).abs() < 1e-5);
        assert!((vertical.norm() - 0.5).abs() < 1e-5);
        assert!((base.norm() - 3.).abs() < 1e-5);
        assert!(close(&base.normalize(), &d.normalize()));
    }

    #[test]
    fn test_corners_zero_direction_fails() {
        let mut camera = looking_down_z();
        camera.look_to(Direction::zeros());
        assert!(matches!(camera.corners(), Err(Error::DegenerateVector)));
        assert!(camera.rasterize(2, 2, |_, _, _| Ok(())).is_err());
    }

    #[test]
    fn test_rasterize_visits_every_pixel() {
        let camera = looking_down_z();
        let mut visited = vec![];
        camera
            .rasterize(3, 2, |x, y, ray| {
                assert_eq!(ray.origin, camera.position);
                visited.push((x, y));
                Ok(())
            })
            .unwrap();
        assert_eq!(visited, vec![(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)]);
    }

    #[test]
    fn test_rasterize_weights() {
        let camera = looking_down_z();
        let frustum = camera.frustum(4, 4).unwrap();
        let [tl, tr, bl, br] = camera.corners().unwrap();

        // the grid centre looks straight ahead
        let center = frustum.ray(2, 2).direction;
        assert!(close(&center.normalize(), &Direction::new(0., 0., -1.)));

        // column 0 carries the whole top-right / bottom-right weight
        assert!(close(&frustum.ray(0, 0).direction, &(tr * 16.)));
        let first = frustum.ray(0, 1).direction;
        assert!(close(&first, &(br * 4. + tr * 12.)));
        let inner = frustum.ray(1, 3).direction;
        assert!(close(&inner, &((bl + br * 3.) * 3. + (tl + tr * 3.))));
    }

    #[test]
    fn test_zoom() {
        let mut camera = looking_down_z();
        camera.zoom(0.5);
        assert_eq!(camera.position, Position::new(0., 0., 7.5));
        camera.zoom(-0.2);
        assert!((camera.distance() - 6.).abs() < 1e-5);
    }

    #[test]
    fn test_rotate_orbits_origin() {
        let mut camera = Camera::builder(Position::new(1., 0., 0.))
            .target(Position::origin())
            .build()
            .unwrap();
        camera.rotate(PI / 2., 0.);
        assert!((camera.position - Position::new(0., 1., 0.)).norm() < 1e-5);
        assert!(close(&camera.direction, &Direction::new(0., -1., 0.)));

        let mut camera = Camera::builder(Position::new(-2., 1., 0.5))
            .target(Position::origin())
            .build()
            .unwrap();
        let distance = camera.distance();
        camera.rotate(0.3, -0.2);
        assert!((camera.distance() - distance).abs() < 1e-4);
        assert!(close(&camera.direction, &(Position::origin() - camera.position)));
    }

    #[test]
    fn test_rotate_vertical() {
        let mut camera = Camera::builder(Position::new(2., 0., 0.))
            .target(Position::origin())
            .build()
            .unwrap();
        camera.rotate(0., PI / 2.);
        assert!((camera.position - Position::new(0., 0., 2.)).norm() < 1e-5);
    }
}
