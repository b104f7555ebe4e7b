//! Per-pixel drivers over a [`Scene`]. Every pixel traces its own ray, in parallel.

use std::time::Instant;

use image::{GrayImage, Pixel, Rgb, RgbImage};
use log::info;
use rayon::prelude::*;

use crate::ray::Ray;
use crate::scene::Scene;

const AMBIENT: f64 = 0.1;

/// Darkest grey used for a hit, so that the farthest surface still stands out from a miss.
const DEPTH_FLOOR: f64 = 32.0;

fn pixel_ray<'a>(scene: &Scene, n: usize, width: u32, height: u32) -> Ray<'a> {
    let x = (n % width as usize) as f64;
    let y = (n / width as usize) as f64;

    let aspect = height as f64 / width as f64;
    let sx = (x + 0.5) / width as f64 * 2.0 - 1.0;
    let sy = (1.0 - (y + 0.5) / height as f64 * 2.0) * aspect;

    scene.camera.cast_ray(sx, sy)
}

/// Distance image: nearer surfaces are brighter, misses are black.
pub fn render_depth(scene: &Scene, width: u32, height: u32) -> GrayImage {
    info!("Start drawing depth {}x{} ...", width, height);
    let now = Instant::now();

    let depths: Vec<f64> = (0..(width as usize * height as usize))
        .into_par_iter()
        .map(|n| {
            let mut ray = pixel_ray(scene, n, width, height);
            scene.trace(&mut ray);
            ray.length()
        })
        .collect();

    let (near, far) = depths
        .iter()
        .filter(|depth| depth.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(near, far), &depth| {
            (near.min(depth), far.max(depth))
        });
    let range = far - near;

    let mut image = GrayImage::new(width, height);
    let buf: &mut [u8] = &mut image;
    buf.par_iter_mut().zip(depths.par_iter()).for_each(|(c, &depth)| {
        *c = if !depth.is_finite() {
            0
        } else if range <= 0.0 {
            255
        } else {
            let closeness = 1.0 - (depth - near) / range;
            (DEPTH_FLOOR + (255.0 - DEPTH_FLOOR) * closeness).round() as u8
        };
    });

    info!("Finished, elapsed: {:.3} ms", now.elapsed().as_millis() as f64);
    image
}

/// Material colour lit by a light at the eye.
pub fn render_shaded(scene: &Scene, width: u32, height: u32) -> RgbImage {
    info!("Start drawing shaded {}x{} ...", width, height);
    let now = Instant::now();

    let mut image = RgbImage::new(width, height);
    let buf: &mut [u8] = &mut image;
    buf.par_chunks_mut(3).enumerate().for_each(|(n, c)| {
        let mut ray = pixel_ray(scene, n, width, height);
        scene.trace(&mut ray);

        let color = match ray.hit() {
            Some(hit) => {
                let normal = hit.primitive.normal_at(&ray);
                let lambert = normal.dot(&ray.direction().inverse()).abs();
                let intensity = AMBIENT + (1.0 - AMBIENT) * lambert;

                let base = scene
                    .material(hit.primitive.shader())
                    .map_or(Rgb([255, 255, 255]), |material| material.color);
                base.map(|channel| (channel as f64 * intensity).min(255.0) as u8)
            }
            None => scene.background,
        };

        c.copy_from_slice(&color.0);
    });

    info!("Finished, elapsed: {:.3} ms", now.elapsed().as_millis() as f64);
    image
}
