use std::path::PathBuf;

use rayon::prelude::*;

use photon::render::{render_depth, render_shaded};
use photon::{Primitive, Ray, Scene, SceneError, ShaderId, Vec3};

fn data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("data").join(name)
}

#[test]
fn load_scene_with_mesh() {
    let scene = Scene::load(data("scene.json")).unwrap();

    assert_eq!(2, scene.primitives().len());
    match &scene.primitives()[1] {
        Primitive::Mesh(mesh) => {
            assert_eq!(6, mesh.len());
            assert_eq!(ShaderId(1), mesh.shader());
            assert!(mesh.primitives().iter().all(|primitive| primitive.shader() == ShaderId(1)));
        }
        other => panic!("unexpected primitive {:?}", other),
    }
}

#[test]
fn mesh_occludes_floor() {
    let scene = Scene::load(data("scene.json")).unwrap();

    let mut ray = Ray::new(Vec3::new(0.1, 5.0, 0.05), Vec3::new(0.0, -1.0, 0.0));
    assert!(scene.trace(&mut ray));
    assert!(matches!(ray.hit().unwrap().primitive, Primitive::SmoothTriangle(..)));

    let mut ray = Ray::new(Vec3::new(3.0, 5.0, 3.0), Vec3::new(0.0, -1.0, 0.0));
    assert!(scene.trace(&mut ray));
    assert!(matches!(ray.hit().unwrap().primitive, Primitive::Plane(..)));
    assert!((ray.length() - 5.01).abs() < 1e-9);
}

/// Rays are independent: tracing them in parallel against one scene matches a serial pass.
#[test]
fn parallel_queries_match_serial() {
    let scene = Scene::load(data("scene.json")).unwrap();

    let rays: Vec<(Vec3<f64>, Vec3<f64>)> = (0..400)
        .map(|n| {
            let x = (n % 20) as f64 / 10.0 - 1.0;
            let z = (n / 20) as f64 / 10.0 - 1.0;
            (Vec3::new(x * 3.0, 4.0, z * 3.0), Vec3::new(-x, -2.0, -z))
        })
        .collect();

    let trace = |&(origin, direction): &(Vec3<f64>, Vec3<f64>)| {
        let mut ray = Ray::new(origin, direction);
        scene.trace(&mut ray);
        (ray.length(), ray.hit().map(|hit| hit.primitive as *const Primitive as usize))
    };

    let serial: Vec<_> = rays.iter().map(trace).collect();
    let parallel: Vec<_> = rays.par_iter().map(trace).collect();

    assert_eq!(serial, parallel);
}

#[test]
fn renders_have_requested_size() {
    let scene = Scene::load(data("scene.json")).unwrap();

    let depth = render_depth(&scene, 32, 24);
    assert_eq!((32, 24), depth.dimensions());
    assert!(depth.pixels().any(|pixel| pixel[0] > 0));

    let shaded = render_shaded(&scene, 32, 24);
    assert_eq!((32, 24), shaded.dimensions());
}

#[test]
fn missing_scene_file() {
    assert!(matches!(Scene::load(data("missing.json")), Err(SceneError::Io { .. })));
}
