//! Loader for the triangle subset of the Wavefront OBJ format.
//!
//! Only `v`, `vn`, `vt` and `f` lines are recognized, every other line is skipped. Faces may
//! reference vertices declared further down the file, so raw index tuples are buffered and only
//! resolved once all tables are known.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info};

use crate::error::{FormatError, LoadError};
use crate::geometry::{Mesh, Primitive, ShaderId, SmoothTriangle, TexturedTriangle, Triangle};
use crate::vec2::Vec2;
use crate::vec3::Vec3;

/// Which per-corner attributes a face line carries.
#[derive(Copy, Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FaceStyle {
    /// `f 1 2 3`
    PositionsOnly,
    /// `f 1//1 2//2 3//3`
    PositionsNormals,
    /// `f 1/1/1 2/2/2 3/3/3`, position/uv/normal.
    PositionsNormalsUv,
}

/// Whether vertex normals are used for shading.
#[derive(Copy, Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TriangleStyle {
    /// Flat triangles, any normals in the file are only validated.
    Standard,
    /// Interpolated normals (and UVs) whenever the face style provides them.
    Smooth,
}

#[derive(Copy, Clone, Debug)]
pub struct MeshOptions {
    /// Applied to every position before `translation`.
    pub scale: Vec3<f64>,
    pub translation: Vec3<f64>,
    pub face_style: FaceStyle,
    pub triangle_style: TriangleStyle,
    pub shader: ShaderId,
}

impl Default for MeshOptions {
    fn default() -> Self {
        Self {
            scale: Vec3::splat(1.0),
            translation: Vec3::default(),
            face_style: FaceStyle::PositionsOnly,
            triangle_style: TriangleStyle::Standard,
            shader: ShaderId::default(),
        }
    }
}

/// Face as written in the file: three 1-based index tuples, not yet checked.
#[derive(Copy, Clone, Debug, PartialEq)]
struct UnresolvedFace {
    line: usize,
    positions: [i64; 3],
    normals: Option<[i64; 3]>,
    uvs: Option<[i64; 3]>,
}

#[derive(Debug, Default)]
struct Tables {
    positions: Vec<Vec3<f64>>,
    normals: Vec<Vec3<f64>>,
    uvs: Vec<Vec2<f64>>,
    faces: Vec<UnresolvedFace>,
}

/// Loads a mesh from an OBJ file.
///
/// The file is closed before this returns, whatever the outcome.
pub fn load_mesh<P: AsRef<Path>>(path: P, options: &MeshOptions) -> Result<Mesh, LoadError> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|source| LoadError::File {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("loading mesh from {}", path.display());
    Mesh::from_reader(BufReader::new(file), options).map_err(|err| match err {
        LoadError::Io(source) => LoadError::File {
            path: path.to_path_buf(),
            source,
        },
        err => err,
    })
}

impl Mesh {
    /// Parses OBJ content from any buffered source.
    pub fn from_reader<R: BufRead>(reader: R, options: &MeshOptions) -> Result<Self, LoadError> {
        let tables = parse(reader, options.face_style)?;
        debug!("{} faces parsed", tables.faces.len());

        let mesh = resolve(&tables, options)?;
        info!("{} primitives added", mesh.len());

        Ok(mesh)
    }
}

fn parse<R: BufRead>(reader: R, style: FaceStyle) -> Result<Tables, LoadError> {
    let mut tables = Tables::default();

    // Lines are split as raw bytes: only geometry lines have to be valid UTF-8, comments and
    // ignored directives may carry any encoding.
    for (n, line) in reader.split(b'\n').enumerate() {
        let line = line?;
        let number = n + 1;

        let directive = line.split(u8::is_ascii_whitespace).find(|token| !token.is_empty());
        match directive {
            Some(b"v") | Some(b"vn") | Some(b"vt") | Some(b"f") => {}
            _ => continue,
        }
        let line = std::str::from_utf8(&line).map_err(|_| FormatError::Encoding { line: number })?;

        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("v") => {
                let [x, y, z]: [f64; 3] = parse_floats(tokens, "v", number)?;
                tables.positions.push(Vec3::new(x, y, z));
            }
            Some("vn") => {
                let [x, y, z]: [f64; 3] = parse_floats(tokens, "vn", number)?;
                tables.normals.push(Vec3::new(x, y, z));
            }
            Some("vt") => {
                let [u, v]: [f64; 2] = parse_floats(tokens, "vt", number)?;
                tables.uvs.push(Vec2::new(u, v));
            }
            Some("f") => {
                tables.faces.push(parse_face(tokens, style, number)?);
            }
            _ => {}
        }
    }

    Ok(tables)
}

/// Reads the first `N` values; trailing values (such as an OBJ `w`) are ignored.
fn parse_floats<'a, const N: usize>(
    mut tokens: impl Iterator<Item = &'a str>,
    directive: &'static str,
    line: usize,
) -> Result<[f64; N], FormatError> {
    let mut values = [0.0; N];

    for (found, value) in values.iter_mut().enumerate() {
        let token = tokens.next().ok_or(FormatError::MissingValues {
            line,
            directive,
            expected: N,
            found,
        })?;

        *value = token.parse().map_err(|_| FormatError::InvalidNumber {
            line,
            token: token.to_owned(),
        })?;
    }

    Ok(values)
}

fn parse_face<'a>(
    tokens: impl Iterator<Item = &'a str>,
    style: FaceStyle,
    line: usize,
) -> Result<UnresolvedFace, FormatError> {
    let groups: Vec<&str> = tokens.collect();
    if groups.len() != 3 {
        return Err(FormatError::FaceArity {
            line,
            found: groups.len(),
        });
    }

    let mut face = UnresolvedFace {
        line,
        positions: [0; 3],
        normals: None,
        uvs: None,
    };
    let mut normals = [0; 3];
    let mut uvs = [0; 3];

    // Every corner keeps its own indices.
    for (corner, group) in groups.iter().enumerate() {
        let invalid = || FormatError::FaceGroup {
            line,
            group: (*group).to_owned(),
            style,
        };

        let parts: Vec<&str> = match style {
            FaceStyle::PositionsOnly => vec![*group],
            FaceStyle::PositionsNormals => group.split("//").collect(),
            FaceStyle::PositionsNormalsUv => group.split('/').collect(),
        };

        let indices = parts
            .iter()
            .map(|part| part.parse::<i64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| invalid())?;

        match (style, indices.as_slice()) {
            (FaceStyle::PositionsOnly, &[v]) => {
                face.positions[corner] = v;
            }
            (FaceStyle::PositionsNormals, &[v, vn]) => {
                face.positions[corner] = v;
                normals[corner] = vn;
            }
            (FaceStyle::PositionsNormalsUv, &[v, vt, vn]) => {
                face.positions[corner] = v;
                uvs[corner] = vt;
                normals[corner] = vn;
            }
            _ => return Err(invalid()),
        }
    }

    match style {
        FaceStyle::PositionsOnly => {}
        FaceStyle::PositionsNormals => face.normals = Some(normals),
        FaceStyle::PositionsNormalsUv => {
            face.normals = Some(normals);
            face.uvs = Some(uvs);
        }
    }

    Ok(face)
}

fn lookup<T: Copy>(table: &[T], index: i64, name: &'static str, line: usize) -> Result<T, FormatError> {
    usize::try_from(index)
        .ok()
        .and_then(|index| index.checked_sub(1))
        .and_then(|index| table.get(index))
        .copied()
        .ok_or(FormatError::IndexOutOfRange {
            line,
            table: name,
            index,
            len: table.len(),
        })
}

fn lookup3<T: Copy>(
    table: &[T],
    indices: &[i64; 3],
    name: &'static str,
    line: usize,
) -> Result<[T; 3], FormatError> {
    Ok([
        lookup(table, indices[0], name, line)?,
        lookup(table, indices[1], name, line)?,
        lookup(table, indices[2], name, line)?,
    ])
}

fn resolve(tables: &Tables, options: &MeshOptions) -> Result<Mesh, FormatError> {
    let mut mesh = Mesh::new(options.shader);

    for face in &tables.faces {
        let mut vertices = lookup3(&tables.positions, &face.positions, "vertex", face.line)?;
        for vertex in vertices.iter_mut() {
            *vertex = vertex.mul_elementwise(&options.scale) + options.translation;
        }

        let normals = match face.normals {
            Some(indices) => {
                let normals = lookup3(&tables.normals, &indices, "normal", face.line)?;
                Some([normals[0].unit(), normals[1].unit(), normals[2].unit()])
            }
            None => None,
        };

        let uvs = match face.uvs {
            Some(indices) => Some(lookup3(&tables.uvs, &indices, "texture coordinate", face.line)?),
            None => None,
        };

        for vertex in &vertices {
            mesh.grow(vertex);
        }

        let primitive: Primitive = match (options.triangle_style, normals, uvs) {
            (TriangleStyle::Smooth, Some(normals), Some(uvs)) => {
                TexturedTriangle::new(vertices, normals, uvs, options.shader).into()
            }
            (TriangleStyle::Smooth, Some(normals), None) => {
                SmoothTriangle::new(vertices, normals, options.shader).into()
            }
            _ => Triangle::new(vertices, options.shader).into(),
        };

        mesh.push(primitive);
    }

    Ok(mesh)
}
