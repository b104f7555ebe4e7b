use std::path::PathBuf;

use photon::{
    load_mesh, Axis, FaceStyle, FormatError, LoadError, Mesh, MeshOptions, Primitive, Ray, TriangleStyle, Vec3,
};

fn data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("data").join(name)
}

fn smooth_normals() -> MeshOptions {
    MeshOptions {
        face_style: FaceStyle::PositionsNormals,
        triangle_style: TriangleStyle::Smooth,
        ..MeshOptions::default()
    }
}

#[test]
fn single_triangle_round_trip() {
    let options = MeshOptions {
        scale: Vec3::new(2.0, 2.0, 2.0),
        translation: Vec3::new(0.0, 0.0, -3.0),
        ..MeshOptions::default()
    };
    let mesh = load_mesh(data("triangle.obj"), &options).unwrap();

    assert_eq!(1, mesh.len());
    match &mesh.primitives()[0] {
        Primitive::Triangle(triangle) => assert_eq!(
            &[
                Vec3::new(0.0, 0.0, -3.0),
                Vec3::new(2.0, 0.0, -3.0),
                Vec3::new(0.0, 2.0, -3.0),
            ],
            triangle.vertices()
        ),
        other => panic!("unexpected primitive {:?}", other),
    }

    assert_eq!(Vec3::new(0.0, 0.0, -3.0), mesh.bounds().min);
    assert_eq!(Vec3::new(2.0, 2.0, -3.0), mesh.bounds().max);
}

#[test]
fn forward_references_resolve() {
    let mesh = load_mesh(data("forward.obj"), &MeshOptions::default()).unwrap();

    assert_eq!(2, mesh.len());
    assert_eq!(Vec3::new(-1.0, -1.0, 0.0), mesh.bounds().min);
    assert_eq!(Vec3::new(1.0, 1.0, 0.0), mesh.bounds().max);
}

#[test]
fn smooth_pyramid() {
    let mesh = load_mesh(data("pyramid.obj"), &smooth_normals()).unwrap();

    assert_eq!(6, mesh.len());
    assert!(mesh
        .primitives()
        .iter()
        .all(|primitive| matches!(primitive, Primitive::SmoothTriangle(..))));
    assert_eq!(1.5, mesh.bounds().max[Axis::Y]);

    let mesh: Primitive = mesh.into();
    let mut ray = Ray::new(Vec3::new(0.1, 5.0, 0.05), Vec3::new(0.0, -1.0, 0.0));
    assert!(mesh.intersect(&mut ray));
    assert!((ray.length() - 3.65).abs() < 1e-9);

    let hit = ray.hit().unwrap();
    let normal = hit.primitive.normal_at(&ray);
    assert!((normal.len() - 1.0).abs() < 1e-9);
    assert!(normal.y > 0.99);
}

#[test]
fn textured_triangle_uv() {
    let options = MeshOptions {
        face_style: FaceStyle::PositionsNormalsUv,
        triangle_style: TriangleStyle::Smooth,
        ..MeshOptions::default()
    };
    let mesh: Primitive = load_mesh(data("textured.obj"), &options).unwrap().into();

    let mut ray = Ray::new(Vec3::new(0.5, 1.0, 1.0), Vec3::new(0.0, 0.0, -1.0));
    assert!(mesh.intersect(&mut ray));

    let hit = ray.hit().unwrap();
    assert!(matches!(hit.primitive, Primitive::TexturedTriangle(..)));
    let uv = hit.primitive.uv_at(&ray);
    assert!((uv.u - 0.25).abs() < 1e-12);
    assert!((uv.v - 0.5).abs() < 1e-12);
}

#[test]
fn short_vertex_line_fails() {
    match load_mesh(data("bad_vertex.obj"), &MeshOptions::default()) {
        Err(LoadError::Format(FormatError::MissingValues { line, directive, .. })) => {
            assert_eq!(2, line);
            assert_eq!("v", directive);
        }
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn out_of_range_index_fails() {
    match load_mesh(data("bad_index.obj"), &MeshOptions::default()) {
        Err(LoadError::Format(FormatError::IndexOutOfRange { line, index, len, .. })) => {
            assert_eq!(5, line);
            assert_eq!(7, index);
            assert_eq!(3, len);
        }
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn wrong_face_style_fails() {
    let err = load_mesh(data("pyramid.obj"), &MeshOptions::default()).unwrap_err();
    assert!(matches!(err, LoadError::Format(FormatError::FaceGroup { line: 15, .. })));
}

#[test]
fn unreadable_path_fails() {
    let err = load_mesh(data("missing.obj"), &MeshOptions::default()).unwrap_err();
    assert!(matches!(err, LoadError::File { .. }));
    assert!(err.to_string().contains("missing.obj"));
}

/// Any ray a contained triangle accepts must also get through the mesh's box.
#[test]
fn box_test_has_no_false_negatives() {
    let mesh = load_mesh(data("pyramid.obj"), &smooth_normals()).unwrap();
    let origins = [
        Vec3::new(0.0, 5.0, 0.0),
        Vec3::new(4.0, 0.75, 3.0),
        Vec3::new(-3.0, 0.0, -3.0),
        Vec3::new(0.0, 0.5, 0.0),
        Vec3::new(1.0, 0.0, 1.0),
    ];

    for origin in &origins {
        for i in 0..12 {
            for j in 0..12 {
                let target = Vec3::new(-1.2 + 0.2 * i as f64, 0.125 * j as f64, -1.2 + 0.2 * ((i + j) % 12) as f64);
                let direction = target - *origin;

                for primitive in mesh.primitives() {
                    let mut ray = Ray::new(*origin, direction);
                    if primitive.intersect(&mut ray) {
                        let fresh = Ray::new(*origin, direction);
                        assert!(mesh.bounds().intersects(&fresh), "origin {:?} target {:?}", origin, target);
                    }
                }
            }
        }
    }
}

/// Rounding in the triangle test grows with the coordinates; the box must keep up with it.
#[test]
fn box_test_holds_far_from_origin() {
    let scale = 1e8;
    let options = MeshOptions {
        scale: Vec3::new(scale, scale, scale),
        translation: Vec3::new(scale, scale, scale),
        ..MeshOptions::default()
    };
    let mesh = Mesh::from_reader("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n".as_bytes(), &options).unwrap();
    let origin = Vec3::new(0.5 * scale, 1.5 * scale, 3.0 * scale);

    let mut accepted = 0;
    for i in -50..50 {
        for j in 1..20 {
            // Targets straddle the x = min edge of the triangle.
            let target = Vec3::new(scale + scale * 1e-12 * i as f64, scale * (1.0 + 0.04 * j as f64), scale);
            let direction = target - origin;

            for primitive in mesh.primitives() {
                let mut ray = Ray::new(origin, direction);
                if primitive.intersect(&mut ray) {
                    accepted += 1;
                    let fresh = Ray::new(origin, direction);
                    assert!(mesh.bounds().intersects(&fresh), "target {:?}", target);
                }
            }
        }
    }

    assert!(accepted > 0);
}

#[test]
fn reader_and_file_agree() {
    let source = std::fs::read_to_string(data("pyramid.obj")).unwrap();
    let from_reader = Mesh::from_reader(source.as_bytes(), &smooth_normals()).unwrap();
    let from_file = load_mesh(data("pyramid.obj"), &smooth_normals()).unwrap();

    assert_eq!(from_file.len(), from_reader.len());
    assert_eq!(from_file.bounds(), from_reader.bounds());
}
