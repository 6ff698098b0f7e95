use std::time::{Duration, Instant};

use image::RgbImage;
use log::{debug, info, warn};
use rayon::prelude::*;

use crate::camera::{Camera, Viewport};
use crate::color::Color;
use crate::config::RenderConfig;
use crate::error::Result;
use crate::light::{Light, LightTrack};
use crate::material::Material;
use crate::ray::Ray;
use crate::shape::{sine, Shape};
use crate::vector::{reflect, unit, Position};

/// Everything a frame is rendered from.
///
/// Rendering borrows the scene immutably, so the camera, lights and config
/// can only change between frames.
#[derive(Debug, Clone)]
pub struct Scene {
    pub camera: Camera,
    pub shapes: Vec<Shape>,
    pub lights: Vec<Light>,
    pub tracks: Vec<LightTrack>,
    pub ambient: Color,
    pub background: Color,
    pub config: RenderConfig,
}

impl Scene {
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            shapes: Vec::new(),
            lights: Vec::new(),
            tracks: Vec::new(),
            ambient: Color::BLACK,
            background: Color::BLACK,
            config: RenderConfig::default(),
        }
    }

    /// Three grey mirror balls lit by a red, a cyan and an amber light.
    pub fn sample() -> Result<Self> {
        let camera = Camera::builder(Position::new(-1., -1., 0.))
            .target(Position::origin())
            .viewport(Viewport::new(1., 1., 1.))
            .build()?;
        let mut scene = Scene::new(camera);

        let mirror = Material::new(
            Color::from_hex(0x444444),
            Color::from_hex(0x000000),
            Color::from_hex(0xcccccc),
            2.,
            Color::from_hex(0xdddddd),
        );
        scene.shapes.push(Shape::sphere(Position::new(4., 4., 0.), 2., mirror));
        scene.shapes.push(Shape::sphere(Position::new(0., 3., 3.), 1., mirror));
        scene.shapes.push(Shape::sphere(Position::new(2., 0., 2.), 1., mirror));

        let grey = Color::from_hex(0xaaaaaa);
        scene.lights.push(Light::new(Position::new(0., 0., 0.), grey, Color::from_hex(0xcc0000)));
        scene.lights.push(Light::new(Position::new(-4., 0., -2.), grey, Color::from_hex(0x00f0f0)));
        scene.lights.push(Light::new(Position::new(-1.5, 0., 0.), grey, Color::from_hex(0xffcc00)));

        scene.tracks.push(LightTrack::new(0, Position::origin(), 1.));
        scene.tracks.push(LightTrack::new(1, Position::origin(), 2.));
        scene.tracks.push(LightTrack::new(2, Position::origin(), 1.5));

        scene.ambient = Color::from_hex(0x444444);
        scene.background = Color::from_hex(0x111111);
        Ok(scene)
    }

    /// Moves every tracked light to where it sits at `playtime`.
    pub fn animate(&mut self, playtime: Duration) {
        for track in &self.tracks {
            match self.lights.get_mut(track.light) {
                Some(light) => light.position = track.position_at(playtime),
                None => warn!("track refers to missing light {}", track.light),
            }
        }
    }

    /// Colour seen along a primary ray.
    pub fn shade(&self, ray: &Ray) -> Result<Color> {
        self.trace(ray, 0)
    }

    /// Feeds the colour of every pixel to `stroke_pixel`, column by column.
    pub fn render<F>(&self, width: u32, height: u32, mut stroke_pixel: F) -> Result<()>
    where
        F: FnMut(u32, u32, Color),
    {
        debug!(
            "rendering {}x{} with {} shapes and {} lights",
            width,
            height,
            self.shapes.len(),
            self.lights.len()
        );
        self.camera.rasterize(width, height, |x, y, ray| {
            stroke_pixel(x, y, self.shade(&ray)?);
            Ok(())
        })
    }

    /// Renders the frame on the rayon pool.
    pub fn render_image(&self, width: u32, height: u32) -> Result<RgbImage> {
        let start = Instant::now();
        let frustum = self.camera.frustum(width, height)?;

        let mut pixels = Vec::with_capacity((width * height) as usize);
        for x in 0..width {
            for y in 0..height {
                pixels.push((x, y));
            }
        }

        let pixels: Vec<_> = pixels
            .into_par_iter()
            .map(|(x, y)| self.shade(&frustum.ray(x, y)).map(|color| (x, y, color)))
            .collect::<Result<_>>()?;

        let mut image = RgbImage::new(width, height);
        for (x, y, color) in pixels {
            image.put_pixel(x, y, color.to_rgb());
        }
        info!(
            "rendered {}x{} ({} shapes, {} lights) in {:?}",
            width,
            height,
            self.shapes.len(),
            self.lights.len(),
            start.elapsed()
        );
        Ok(image)
    }

    fn trace(&self, ray: &Ray, depth: u32) -> Result<Color> {
        if depth >= self.config.max_reflect_times {
            return Ok(Color::BLACK);
        }

        let closest = self.closest_intersection(ray);
        let glow = if self.config.enable_direct_light {
            self.direct_light(ray, closest.map(|(_, shape, _)| shape))
        } else {
            Color::BLACK
        };

        // secondary rays that escape add nothing, only primary rays see the background
        let (index, shape, t) = match closest {
            Some(hit) => hit,
            None if depth == 0 => return Ok(self.background + glow),
            None => return Ok(glow),
        };

        let p = ray.reach(t);
        let n = unit(&(p - shape.position()))?;
        let material = shape.material();

        let mut color = material.ambient.mix(self.ambient) + glow;

        for light in &self.lights {
            // lit only when the shadow ray's first hit is this same shape
            match self.closest_intersection(&Ray::new(light.position, p - light.position)) {
                Some((i, _, _)) if i == index => {}
                _ => continue,
            }

            let l = unit(&(light.position - p))?;
            let nl = n.dot(&l);
            if nl <= 0. {
                continue;
            }

            if self.config.enable_diffuse {
                color += material.diffuse.mix(light.specular).tune(nl);
            }

            if self.config.enable_specular {
                let r = reflect(&l, &n);
                let v = unit(&(self.camera.position - p))?;
                let vr = v.dot(&r);
                if vr > 0. {
                    color += light
                        .specular
                        .mix(material.specular)
                        .tune(vr.powf(material.shininess));
                }
            }
        }

        let incoming = unit(&-ray.direction)?;
        let r = reflect(&incoming, &n);
        color += self.trace(&Ray::new(p, r), depth + 1)?;

        Ok(color)
    }

    /// Nearest shape hit by `ray`. Equal distances keep the earlier shape.
    fn closest_intersection(&self, ray: &Ray) -> Option<(usize, &Shape, f32)> {
        self.shapes
            .iter()
            .enumerate()
            .filter_map(|(i, shape)| shape.intersect(ray).map(|t| (i, shape, t)))
            .fold(None, |acc, (i, shape, t)| match acc {
                Some((_, _, min_t)) if t >= min_t => acc,
                _ => Some((i, shape, t)),
            })
    }

    /// Glow from lights lying close to the ray's line.
    fn direct_light(&self, ray: &Ray, hit: Option<&Shape>) -> Color {
        let unobstructed = hit.map_or(true, |shape| shape.clears_line(ray));
        if !unobstructed {
            return Color::BLACK;
        }

        self.lights
            .iter()
            .filter_map(|light| {
                let to_light = light.position - ray.origin;
                let sin = sine(&ray.direction, &to_light);
                let reach = to_light.norm() * sin;
                if reach < self.config.cast_range && ray.direction.dot(&to_light) > 0. {
                    Some(light.specular.tune((1. - sin).powi(128)))
                } else {
                    None
                }
            })
            .fold(Color::BLACK, Color::overlay)
    }
}
