//! Parameters for exporting the catalog.

use std::path::PathBuf;

use mesh_solids::Solid;

/// What to export and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportParams {
    /// Directory the OBJ files are written to. Default: the current
    /// working directory.
    pub out_dir: PathBuf,

    /// Solids to write, in catalog order without repeats. Default: all five.
    pub solids: Vec<Solid>,
}

impl Default for ExportParams {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            solids: Solid::ALL.to_vec(),
        }
    }
}

impl ExportParams {
    /// Set the output directory.
    #[must_use]
    pub fn with_out_dir(mut self, out_dir: impl Into<PathBuf>) -> Self {
        self.out_dir = out_dir.into();
        self
    }

    /// Restrict the export to `solids`.
    ///
    /// The selection is put in catalog order and deduplicated. An empty
    /// selection keeps every solid.
    #[must_use]
    pub fn with_solids(mut self, solids: impl IntoIterator<Item = Solid>) -> Self {
        let mut solids: Vec<Solid> = solids.into_iter().collect();
        if solids.is_empty() {
            solids = Solid::ALL.to_vec();
        }
        solids.sort_unstable();
        solids.dedup();
        self.solids = solids;
        self
    }

    /// Path the given solid is written to.
    #[must_use]
    pub fn path_for(&self, solid: Solid) -> PathBuf {
        self.out_dir.join(solid.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params() {
        let params = ExportParams::default();
        assert_eq!(params.out_dir, PathBuf::from("."));
        assert_eq!(params.solids, Solid::ALL);
    }

    #[test]
    fn selection_is_ordered_and_unique() {
        let params = ExportParams::default().with_solids([
            Solid::Dodecahedron,
            Solid::Cube,
            Solid::Dodecahedron,
        ]);
        assert_eq!(params.solids, [Solid::Cube, Solid::Dodecahedron]);
    }

    #[test]
    fn empty_selection_keeps_all() {
        let params = ExportParams::default().with_solids(Vec::new());
        assert_eq!(params.solids.len(), 5);
    }

    #[test]
    fn paths_use_file_names() {
        let params = ExportParams::default().with_out_dir("out");
        assert_eq!(
            params.path_for(Solid::Icosahedron),
            PathBuf::from("out").join("icosahedron.obj")
        );
    }
}
