//! Seam to the external sprite packer.
//!
//! The packer lays images out and writes the manifest; the pipeline only
//! needs the manifest path back. [`CommandPacker`] shells out to a
//! configured program, anything else can implement [`Packer`] directly.

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PackerError {
    #[error("failed to launch packer `{program}`: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },
    #[error("packer `{program}` exited with {status}")]
    Status { program: String, status: ExitStatus },
    #[error("packer `{program}` produced no manifest at {}", path.display())]
    MissingManifest {
        program: String,
        path: PathBuf,
    },
}

pub trait Packer {
    /// Run the packer and return the path of the manifest it wrote.
    fn pack(&self) -> Result<PathBuf, PackerError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackerConfig {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default)]
    pub working_dir: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct CommandPacker {
    program: String,
    args: Vec<String>,
    working_dir: Option<PathBuf>,
    manifest: PathBuf,
}

impl CommandPacker {
    pub fn new(program: impl Into<String>, manifest: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            working_dir: None,
            manifest: manifest.into(),
        }
    }

    pub fn from_config(cfg: &PackerConfig, manifest: &Path) -> Self {
        Self {
            program: cfg.program.clone(),
            args: cfg.args.clone(),
            working_dir: cfg.working_dir.clone(),
            manifest: manifest.to_path_buf(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }
}

impl Packer for CommandPacker {
    fn pack(&self) -> Result<PathBuf, PackerError> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }
        info!("running packer: {} {}", self.program, self.args.join(" "));
        let status = cmd.status().map_err(|source| PackerError::Spawn {
            program: self.program.clone(),
            source,
        })?;
        if !status.success() {
            return Err(PackerError::Status {
                program: self.program.clone(),
                status,
            });
        }
        if !self.manifest.is_file() {
            return Err(PackerError::MissingManifest {
                program: self.program.clone(),
                path: self.manifest.clone(),
            });
        }
        Ok(self.manifest.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_failure() {
        let p = CommandPacker::new("iconatlas-no-such-packer", "m.xml");
        assert!(matches!(p.pack(), Err(PackerError::Spawn { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit() {
        let p = CommandPacker::new("sh", "m.xml").arg("-c").arg("exit 3");
        assert!(matches!(p.pack(), Err(PackerError::Status { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn success_requires_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = dir.path().join("sprites.xml");

        let p = CommandPacker::new("sh", &manifest).arg("-c").arg("true");
        assert!(matches!(p.pack(), Err(PackerError::MissingManifest { .. })));

        let p = CommandPacker::new("sh", &manifest)
            .arg("-c")
            .arg("echo '<Sprite/>' > sprites.xml")
            .working_dir(dir.path());
        assert_eq!(p.pack().unwrap(), manifest);
    }
}
