//! End-to-end run: manifest in, generated source out.

use std::path::PathBuf;

use log::{debug, info, warn};

use crate::config::Config;
use crate::coords::{self, AtlasDimension};
use crate::emit;
use crate::error::AtlasError;
use crate::manifest::{self, Manifest};
use crate::naming::NamingRule;
use crate::order::{self, Collision, CollisionPolicy, IconEntry, IconTable};
use crate::packer::Packer;

#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub icons: usize,
    pub records: usize,
    pub collisions: Vec<Collision>,
    pub output: PathBuf,
    pub manifest_removed: bool,
}

/// Normalize and order every icon in `manifest`. Pure: touches no files.
pub fn build_table(
    manifest: &Manifest,
    rule: &NamingRule,
    dim: AtlasDimension,
    policy: CollisionPolicy,
) -> Result<IconTable, AtlasError> {
    rule.validate()?;
    let mut entries = Vec::with_capacity(manifest.icons.len());
    for (index, rec) in manifest.icons.iter().enumerate() {
        let name = rule
            .canonical_name(&rec.name)
            .map_err(|source| AtlasError::Naming {
                index,
                raw: rec.name.clone(),
                source,
            })?;
        let coord = coords::normalize(rec.position(), dim);
        if !coord.in_unit_square() {
            warn!(
                "icon #{} `{}` at ({}, {}) lies outside a {}px atlas",
                index, rec.name, rec.x, rec.y, dim.get()
            );
        }
        debug!("#{} {} -> {} ({:?}, {:?})", index, rec.name, name, coord.x, coord.y);
        entries.push(IconEntry {
            name,
            raw_name: rec.name.clone(),
            source: index,
            coord,
            index: 0,
        });
    }
    order::order(entries, policy)
}

/// Load the configured manifest and build its table without writing anything.
pub fn inspect(config: &Config) -> Result<(Manifest, IconTable), AtlasError> {
    config.validate()?;
    let manifest = manifest::load_from_path(&config.manifest)?;
    let table = build_table(
        &manifest,
        &config.naming,
        config.atlas_dimension()?,
        config.collisions,
    )?;
    Ok((manifest, table))
}

/// Full run. The manifest is removed only after the artifact is in place.
pub fn generate(config: &Config) -> Result<RunSummary, AtlasError> {
    let (manifest, table) = inspect(config)?;
    info!(
        "{}: {} records in {} sets",
        config.manifest.display(),
        manifest.icons.len(),
        manifest.sets.len()
    );
    for set in &manifest.sets {
        info!("set `{}` {}", set.name, set.url);
    }

    let manifest_name = config
        .manifest
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| config.manifest.display().to_string());
    let source = emit::render(&table, &manifest_name, config.atlas_dimension()?, &config.emit)?;
    emit::write_artifact(&config.output, &source)?;
    info!("wrote {} icons to {}", table.len(), config.output.display());

    let manifest_removed = if config.keep_manifest {
        false
    } else {
        match std::fs::remove_file(&config.manifest) {
            Ok(()) => true,
            Err(e) => {
                warn!("could not remove manifest {}: {}", config.manifest.display(), e);
                false
            }
        }
    };

    Ok(RunSummary {
        icons: table.len(),
        records: manifest.icons.len(),
        collisions: table.collisions,
        output: config.output.clone(),
        manifest_removed,
    })
}

/// Run `packer`, then generate from the manifest it produced.
pub fn run_with_packer<P: Packer + ?Sized>(
    packer: &P,
    config: &Config,
) -> Result<RunSummary, AtlasError> {
    config.validate()?;
    let manifest = packer.pack()?;
    let config = Config { manifest, ..config.clone() };
    generate(&config)
}
