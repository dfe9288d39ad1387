//! Artifact entity - a file written into the network directory
//!
//! Artifacts are recorded after they are written so reports can show what a
//! pipeline run produced.

use serde::Serialize;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

/// The kinds of files the compiler writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    /// Input for `cryptogen`
    CryptoConfig,
    /// Input for `configtxgen`
    ConfigTx,
    /// Executable script invoking `configtxgen`
    ProvisioningScript,
    /// Default settings file written by `init`
    Settings,
}

impl ArtifactKind {
    /// File name of the artifact inside its directory
    pub fn file_name(&self) -> &'static str {
        match self {
            ArtifactKind::CryptoConfig => "crypto-config.yaml",
            ArtifactKind::ConfigTx => "configtx.yaml",
            ArtifactKind::ProvisioningScript => "generateConfigTx.sh",
            ArtifactKind::Settings => "fabgen.yaml",
        }
    }

    /// Path of the artifact inside `dir`
    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(self.file_name())
    }
}

/// A written artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    kind: ArtifactKind,
    path: PathBuf,
    hash: String,
}

impl Artifact {
    /// Record an artifact from its written content
    pub fn new(kind: ArtifactKind, path: impl Into<PathBuf>, content: &[u8]) -> Self {
        Self {
            kind,
            path: path.into(),
            hash: content_hash(content),
        }
    }

    /// Record an artifact by reading it back from disk
    pub fn from_disk(kind: ArtifactKind, path: impl Into<PathBuf>) -> std::io::Result<Self> {
        let path = path.into();
        let content = std::fs::read(&path)?;
        Ok(Self::new(kind, path, &content))
    }

    pub fn kind(&self) -> ArtifactKind {
        self.kind
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `sha256:<hex>` of the written content
    pub fn hash(&self) -> &str {
        &self.hash
    }
}

fn content_hash(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("sha256:{:x}", hasher.finalize())
}
