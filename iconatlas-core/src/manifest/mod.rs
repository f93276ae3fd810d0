//! Decoding of the sprite packer's XML manifest.

pub mod schema;

use std::path::Path;

use log::debug;
use thiserror::Error;

use crate::error::AtlasError;
pub use schema::{IconRecord, Manifest, SetRecord};

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("{0}")]
    Decode(String),
    #[error("icon #{index} has an empty name")]
    EmptyName { index: usize },
    #[error("icon #{index} `{name}` has invalid position ({x}, {y})")]
    BadPosition {
        index: usize,
        name: String,
        x: f32,
        y: f32,
    },
}

pub fn parse_str(s: &str) -> Result<Manifest, ManifestError> {
    let mut manifest: Manifest =
        quick_xml::de::from_str(s).map_err(|e| ManifestError::Decode(e.to_string()))?;
    for (index, icon) in manifest.icons.iter_mut().enumerate() {
        icon.name = icon.name.trim().to_string();
        if icon.name.is_empty() {
            return Err(ManifestError::EmptyName { index });
        }
        let valid = |v: f32| v.is_finite() && v >= 0.0;
        if !valid(icon.x) || !valid(icon.y) {
            return Err(ManifestError::BadPosition {
                index,
                name: icon.name.clone(),
                x: icon.x,
                y: icon.y,
            });
        }
    }
    Ok(manifest)
}

pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Manifest, AtlasError> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path).map_err(|source| AtlasError::ReadManifest {
        path: path.to_path_buf(),
        source,
    })?;
    let manifest = parse_str(&data).map_err(|source| AtlasError::Manifest {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("{}: {} icons, {} sets", path.display(), manifest.icons.len(), manifest.sets.len());
    Ok(manifest)
}
