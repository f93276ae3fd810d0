//! Deterministic ordering and collision resolution.
//!
//! Entries are stable-sorted by canonical name (byte order), so records that
//! share a name stay in processing order and the latest one ends up last in
//! its run. Resolution keeps that last entry and reports the rest.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::coords::UnitCoord;
use crate::error::AtlasError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IconEntry {
    pub name: String,
    pub raw_name: String,
    /// Position of the originating record in the manifest.
    pub source: usize,
    pub coord: UnitCoord,
    /// Rank in the final table; only meaningful after [`order`].
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Collision {
    pub name: String,
    pub kept: usize,
    pub kept_raw: String,
    pub dropped: usize,
    pub dropped_raw: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Later record wins; every collision is logged and reported.
    #[default]
    Warn,
    /// First collision aborts the run.
    Deny,
}

/// Ordered, collision-free icons plus what was dropped to get there.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IconTable {
    pub entries: Vec<IconEntry>,
    pub collisions: Vec<Collision>,
}

impl IconTable {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IconEntry> {
        self.entries.iter()
    }

    pub fn get(&self, name: &str) -> Option<&IconEntry> {
        self.entries
            .binary_search_by(|e| e.name.as_str().cmp(name))
            .ok()
            .map(|i| &self.entries[i])
    }
}

pub fn sort_entries(mut entries: Vec<IconEntry>) -> Vec<IconEntry> {
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    entries
}

/// Collapse runs of equal names in `sorted` and assign final indices.
pub fn resolve_collisions(
    sorted: Vec<IconEntry>,
    policy: CollisionPolicy,
) -> Result<IconTable, AtlasError> {
    let mut table = IconTable {
        entries: Vec::with_capacity(sorted.len()),
        collisions: Vec::new(),
    };
    for entry in sorted {
        if let Some(prev) = table.entries.last() {
            debug_assert!(prev.name <= entry.name, "resolve_collisions needs sorted input");
            if prev.name == entry.name {
                let collision = Collision {
                    name: entry.name.clone(),
                    kept: entry.source,
                    kept_raw: entry.raw_name.clone(),
                    dropped: prev.source,
                    dropped_raw: prev.raw_name.clone(),
                };
                if policy == CollisionPolicy::Deny {
                    return Err(AtlasError::Collision {
                        name: collision.name,
                        kept: collision.kept,
                        kept_raw: collision.kept_raw,
                        dropped: collision.dropped,
                        dropped_raw: collision.dropped_raw,
                    });
                }
                warn!(
                    "icon `{}`: #{} `{}` replaces #{} `{}`",
                    collision.name,
                    collision.kept,
                    collision.kept_raw,
                    collision.dropped,
                    collision.dropped_raw
                );
                table.collisions.push(collision);
                table.entries.pop();
            }
        }
        table.entries.push(entry);
    }
    for (index, entry) in table.entries.iter_mut().enumerate() {
        entry.index = index;
    }
    Ok(table)
}

pub fn order(entries: Vec<IconEntry>, policy: CollisionPolicy) -> Result<IconTable, AtlasError> {
    resolve_collisions(sort_entries(entries), policy)
}
