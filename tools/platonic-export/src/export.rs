//! Writing catalog solids to disk.

use std::fs;
use std::path::PathBuf;

use mesh_io::{IoResult, save_obj};
use mesh_types::MeshTopology;
use tracing::{debug, info};

use crate::params::ExportParams;

/// Write every selected solid to `<out_dir>/<name>.obj`.
///
/// The output directory is created if it does not exist. Files are written
/// in catalog order and existing files are replaced.
///
/// Returns the paths written.
///
/// # Errors
///
/// Returns the first I/O error from creating the directory or writing a
/// file. Files written before the failure are left in place.
pub fn export_solids(params: &ExportParams) -> IoResult<Vec<PathBuf>> {
    fs::create_dir_all(&params.out_dir)?;
    debug!(dir = %params.out_dir.display(), "Output directory ready");

    let mut written = Vec::with_capacity(params.solids.len());
    for &solid in &params.solids {
        let mesh = solid.mesh();
        let path = params.path_for(solid);

        save_obj(&mesh, &path)?;
        info!(
            solid = solid.name(),
            vertices = mesh.vertex_count(),
            faces = mesh.face_count(),
            path = %path.display(),
            "Exported solid"
        );
        written.push(path);
    }

    Ok(written)
}
