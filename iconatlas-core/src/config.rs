//! Run configuration, loaded from YAML. Every field has a default, so an
//! empty document is a valid config for the material-icons layout.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::coords::AtlasDimension;
use crate::emit::EmitOptions;
use crate::error::AtlasError;
use crate::naming::NamingRule;
use crate::order::CollisionPolicy;
use crate::packer::PackerConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub manifest: PathBuf,
    pub output: PathBuf,
    /// Side length of the square atlas in pixels.
    pub atlas_size: f32,
    pub keep_manifest: bool,
    pub collisions: CollisionPolicy,
    pub naming: NamingRule,
    pub emit: EmitOptions,
    pub packer: Option<PackerConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            manifest: PathBuf::from("makeicons.xml"),
            output: PathBuf::from("icon_mdpi.rs"),
            atlas_size: 2048.0,
            keep_manifest: false,
            collisions: CollisionPolicy::Warn,
            naming: NamingRule::default(),
            emit: EmitOptions::default(),
            packer: None,
        }
    }
}

impl Config {
    pub fn from_yaml_str(s: &str) -> Result<Self, AtlasError> {
        serde_yaml::from_str(s).map_err(|e| AtlasError::Config(e.to_string()))
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, AtlasError> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)
            .map_err(|e| AtlasError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_yaml_str(&data).map_err(|e| match e {
            AtlasError::Config(msg) => AtlasError::Config(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }

    pub fn atlas_dimension(&self) -> Result<AtlasDimension, AtlasError> {
        AtlasDimension::new(self.atlas_size)
    }

    /// Catch configuration errors before any file is touched.
    pub fn validate(&self) -> Result<(), AtlasError> {
        self.atlas_dimension()?;
        self.naming.validate()?;
        self.emit.validate()?;
        if self.manifest == self.output || resolved(&self.manifest) == resolved(&self.output) {
            return Err(AtlasError::Config(format!(
                "manifest and output are the same file: {}",
                self.output.display()
            )));
        }
        Ok(())
    }
}

/// `path` with symlinks and `..` resolved. The file itself need not exist
/// yet, only its directory.
fn resolved(path: &Path) -> PathBuf {
    if let Ok(p) = path.canonicalize() {
        return p;
    }
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    match (parent.canonicalize(), path.file_name()) {
        (Ok(dir), Some(name)) => dir.join(name),
        _ => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let cfg = Config::from_yaml_str("{}").unwrap();
        assert_eq!(cfg, Config::default());
        cfg.validate().unwrap();
    }

    #[test]
    fn partial_overrides() {
        let yaml = r#"
manifest: build/sprites.xml
output: src/icons.rs
atlas_size: 1024
collisions: deny
naming:
  strip_token: "_white_24dp"
emit:
  enum_name: MaterialIcon
packer:
  program: sprity
  args: [create, ".", "--margin=0"]
"#;
        let cfg = Config::from_yaml_str(yaml).unwrap();
        assert_eq!(cfg.manifest, PathBuf::from("build/sprites.xml"));
        assert_eq!(cfg.atlas_size, 1024.0);
        assert_eq!(cfg.collisions, CollisionPolicy::Deny);
        assert_eq!(cfg.naming.strip_token, "_white_24dp");
        assert_eq!(cfg.naming.delimiter, "-");
        assert_eq!(cfg.emit.enum_name, "MaterialIcon");
        assert_eq!(cfg.emit.accessor, "lookup");
        let packer = cfg.packer.as_ref().unwrap();
        assert_eq!(packer.program, "sprity");
        assert_eq!(packer.args.len(), 3);
        assert!(packer.working_dir.is_none());
        cfg.validate().unwrap();
    }

    #[test]
    fn rejects_bad_values() {
        let cfg = Config {
            atlas_size: 0.0,
            ..Config::default()
        };
        assert!(matches!(cfg.validate(), Err(AtlasError::AtlasDimension(_))));

        let cfg = Config {
            output: PathBuf::from("makeicons.xml"),
            ..Config::default()
        };
        assert!(matches!(cfg.validate(), Err(AtlasError::Config(_))));

        let res = Config::from_yaml_str("collisions: maybe");
        assert!(matches!(res, Err(AtlasError::Config(_))));
    }

    #[test]
    fn output_resolving_to_the_manifest_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        let manifest = dir.path().join("m.xml");
        let aliased = dir.path().join("sub").join("..").join("m.xml");

        // Neither file exists yet: only the directories are resolved.
        let cfg = Config {
            manifest: manifest.clone(),
            output: aliased.clone(),
            ..Config::default()
        };
        assert!(matches!(cfg.validate(), Err(AtlasError::Config(_))));

        std::fs::write(&manifest, "<Sprite/>").unwrap();
        assert!(matches!(cfg.validate(), Err(AtlasError::Config(_))));

        let cfg = Config {
            output: dir.path().join("sub").join("m.xml"),
            ..cfg
        };
        cfg.validate().unwrap();
    }

    #[test]
    fn bundled_example_matches_defaults() {
        let cfg = Config::from_yaml_str(include_str!("../../iconatlas.yaml")).unwrap();
        assert_eq!(cfg.naming, NamingRule::default());
        assert_eq!(cfg.emit, EmitOptions::default());
        assert_eq!(cfg.manifest, Config::default().manifest);
        assert_eq!(cfg.packer.as_ref().map(|p| p.program.as_str()), Some("sprity"));
        cfg.validate().unwrap();
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = Config::load_from_path("/no/such/iconatlas.yaml").unwrap_err();
        assert!(err.to_string().contains("/no/such/iconatlas.yaml"));
    }
}
