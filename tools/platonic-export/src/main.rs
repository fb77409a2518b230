//! Write the five Platonic solids as OBJ files.
//!
//! ```text
//! platonic-export                     # all five into the current directory
//! platonic-export --out-dir meshes    # all five into ./meshes
//! platonic-export cube dodecahedron   # just those two
//! ```
//!
//! Log output goes to stderr and honours `RUST_LOG`.

use anyhow::{Context, Result};
use clap::Parser;
use mesh_solids::Solid;
use platonic_export::{ExportParams, export_solids};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Export the Platonic solid catalog as Wavefront OBJ files
#[derive(Parser, Debug)]
#[command(name = "platonic-export")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Solids to export (default: all five)
    #[arg(value_name = "SOLID")]
    solids: Vec<Solid>,

    /// Directory to write the OBJ files into
    #[arg(long, short, default_value = ".")]
    out_dir: PathBuf,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(long, short)]
    verbose: bool,
}

impl Cli {
    fn params(&self) -> ExportParams {
        ExportParams::default()
            .with_out_dir(&self.out_dir)
            .with_solids(self.solids.iter().copied())
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let params = cli.params();
    let written = export_solids(&params)
        .with_context(|| format!("failed to export solids to {}", params.out_dir.display()))?;

    info!(files = written.len(), "Export complete");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_means_everything_here() {
        let cli = Cli::try_parse_from(["platonic-export"]).unwrap();
        assert!(!cli.verbose);
        assert_eq!(cli.params(), ExportParams::default());
    }

    #[test]
    fn parses_solids_and_out_dir() {
        let cli =
            Cli::try_parse_from(["platonic-export", "-o", "meshes", "Dodecahedron", "tetrahedron"])
                .unwrap();
        let params = cli.params();
        assert_eq!(params.out_dir, PathBuf::from("meshes"));
        assert_eq!(params.solids, [Solid::Tetrahedron, Solid::Dodecahedron]);
    }

    #[test]
    fn rejects_unknown_solid() {
        let err = Cli::try_parse_from(["platonic-export", "sphere"]).unwrap_err();
        assert!(err.to_string().contains("sphere"));
    }

    #[test]
    fn command_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
