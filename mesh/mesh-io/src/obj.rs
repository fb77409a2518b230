//! Wavefront OBJ support.
//!
//! Only geometry is handled: vertex positions (`v`) and faces (`f`).
//! Texture coordinates, normals, groups and materials are skipped on read
//! and never written.
//!
//! Written coordinates use Rust's shortest round-trip formatting, so a
//! file read back with [`load_obj`] reproduces the mesh exactly.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use mesh_types::{IndexedMesh, Vertex};
use tracing::debug;

use crate::error::{IoError, IoResult};

/// Write a mesh as OBJ text.
///
/// Every face index is checked against the vertex count before anything
/// is written.
///
/// # Errors
///
/// Returns [`IoError::IndexOutOfRange`] if a face references a missing
/// vertex, or [`IoError::Io`] if the writer fails.
///
/// # Example
///
/// ```
/// use mesh_io::write_obj;
/// use mesh_types::{IndexedMesh, Vertex};
///
/// let mesh = IndexedMesh::from_parts(
///     vec![
///         Vertex::from_coords(0.0, 0.0, 0.0),
///         Vertex::from_coords(1.0, 0.0, 0.0),
///         Vertex::from_coords(0.0, 1.0, 0.0),
///     ],
///     vec![[0, 1, 2]],
/// );
///
/// let mut buf = Vec::new();
/// write_obj(&mesh, &mut buf).unwrap();
/// let text = String::from_utf8(buf).unwrap();
/// assert!(text.contains("v 1 0 0\n"));
/// assert!(text.contains("f 1 2 3\n"));
/// ```
pub fn write_obj<W: Write>(mesh: &IndexedMesh, mut writer: W) -> IoResult<()> {
    check_indices(mesh)?;

    writeln!(writer, "# vertices: {}", mesh.vertices.len())?;
    writeln!(writer, "# faces: {}", mesh.faces.len())?;

    for v in &mesh.vertices {
        let p = &v.position;
        writeln!(writer, "v {} {} {}", p.x, p.y, p.z)?;
    }

    for &[i0, i1, i2] in &mesh.faces {
        // OBJ indices are 1-based
        let (a, b, c) = (u64::from(i0) + 1, u64::from(i1) + 1, u64::from(i2) + 1);
        writeln!(writer, "f {a} {b} {c}")?;
    }

    Ok(())
}

/// Save a mesh to an OBJ file, replacing any existing file.
///
/// Face indices are checked before the file is opened, so a rejected mesh
/// leaves an existing file untouched.
///
/// # Errors
///
/// Returns an error if a face index is out of range or the file cannot be
/// created or written.
pub fn save_obj<P: AsRef<Path>>(mesh: &IndexedMesh, path: P) -> IoResult<()> {
    let path = path.as_ref();
    check_indices(mesh)?;
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    write_obj(mesh, &mut writer)?;
    writer.flush()?;

    debug!(
        path = %path.display(),
        vertices = mesh.vertices.len(),
        faces = mesh.faces.len(),
        "Wrote OBJ file"
    );
    Ok(())
}

/// Load a mesh from an OBJ file.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if the file does not exist, or any
/// error from [`read_obj`].
pub fn load_obj<P: AsRef<Path>>(path: P) -> IoResult<IndexedMesh> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::Io(e)
        }
    })?;

    let mesh = read_obj(BufReader::new(file))?;
    debug!(
        path = %path.display(),
        vertices = mesh.vertices.len(),
        faces = mesh.faces.len(),
        "Loaded OBJ file"
    );
    Ok(mesh)
}

/// Parse OBJ text.
///
/// Face tokens may be `v`, `v/vt`, `v//vn` or `v/vt/vn`; only the position
/// index is used. Negative indices count back from the last vertex read.
/// Faces with more than three corners are fan-triangulated.
///
/// # Errors
///
/// Returns [`IoError::InvalidContent`] for malformed records (with the
/// line number), [`IoError::IndexOutOfRange`] for faces referencing
/// missing vertices, or [`IoError::Io`] if reading fails.
pub fn read_obj<R: BufRead>(reader: R) -> IoResult<IndexedMesh> {
    let mut mesh = IndexedMesh::new();

    for (line_idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = line_idx + 1;
        let mut tokens = line.split_whitespace();

        match tokens.next() {
            Some("v") => {
                let mut coords = [0.0; 3];
                for c in &mut coords {
                    let token = tokens.next().ok_or_else(|| {
                        IoError::invalid_content(format!(
                            "line {line_no}: vertex needs 3 coordinates"
                        ))
                    })?;
                    *c = token.parse().map_err(|e| {
                        IoError::invalid_content(format!(
                            "line {line_no}: bad coordinate {token:?}: {e}"
                        ))
                    })?;
                }
                mesh.vertices.push(Vertex::from_array(coords));
            }
            Some("f") => {
                let corners = tokens
                    .map(|token| resolve_index(token, mesh.vertices.len(), line_no))
                    .collect::<IoResult<Vec<u32>>>()?;
                if corners.len() < 3 {
                    return Err(IoError::invalid_content(format!(
                        "line {line_no}: face needs at least 3 vertices, got {}",
                        corners.len()
                    )));
                }
                for i in 1..corners.len() - 1 {
                    mesh.faces.push([corners[0], corners[i], corners[i + 1]]);
                }
            }
            _ => {}
        }
    }

    check_indices(&mesh)?;
    Ok(mesh)
}

fn check_indices(mesh: &IndexedMesh) -> IoResult<()> {
    match mesh.first_invalid_index() {
        Some((face, index)) => Err(IoError::IndexOutOfRange {
            face,
            index,
            vertex_count: mesh.vertices.len(),
        }),
        None => Ok(()),
    }
}

/// Turn one face token into a 0-based vertex index.
fn resolve_index(token: &str, vertex_count: usize, line_no: usize) -> IoResult<u32> {
    let position = token.split('/').next().unwrap_or_default();
    let raw: i64 = position.parse().map_err(|e| {
        IoError::invalid_content(format!("line {line_no}: bad face index {token:?}: {e}"))
    })?;

    let count = i64::try_from(vertex_count)
        .map_err(|_| IoError::invalid_content("too many vertices"))?;
    let zero_based = match raw {
        0 => {
            return Err(IoError::invalid_content(format!(
                "line {line_no}: face index 0 is not valid in OBJ"
            )));
        }
        r if r > 0 => r - 1,
        r => count + r,
    };

    u32::try_from(zero_based).map_err(|_| {
        IoError::invalid_content(format!(
            "line {line_no}: face index {raw} does not resolve to a vertex"
        ))
    })
}
