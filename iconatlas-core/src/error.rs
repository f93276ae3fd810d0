use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::manifest::ManifestError;
use crate::naming::NamingError;
use crate::packer::PackerError;

/// Fatal pipeline failure. Every variant names the stage that failed.
#[derive(Debug, Error)]
pub enum AtlasError {
    #[error("config: {0}")]
    Config(String),
    #[error("failed to read manifest {}: {source}", path.display())]
    ReadManifest { path: PathBuf, source: io::Error },
    #[error("malformed manifest {}: {source}", path.display())]
    Manifest {
        path: PathBuf,
        source: ManifestError,
    },
    #[error("naming: icon #{index} `{raw}`: {source}")]
    Naming {
        index: usize,
        raw: String,
        source: NamingError,
    },
    #[error("invalid naming rule: {0}")]
    Rule(String),
    #[error("atlas dimension must be positive and finite, got {0}")]
    AtlasDimension(f32),
    #[error(
        "duplicate icon `{name}`: icon #{dropped} `{dropped_raw}` is shadowed by icon #{kept} `{kept_raw}`"
    )]
    Collision {
        name: String,
        kept: usize,
        kept_raw: String,
        dropped: usize,
        dropped_raw: String,
    },
    #[error("emit: {0}")]
    EmitOption(String),
    #[error("emit: generated source does not parse: {0}")]
    Render(String),
    #[error("failed to write artifact {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Packer(#[from] PackerError),
}
