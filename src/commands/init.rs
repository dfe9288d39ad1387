//! Init command - write a default fabgen.yaml

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use fabgen::domain::entities::ArtifactKind;
use fabgen::infrastructure::templates::{settings_renderer, SettingsTemplateModel};

/// Outcome of `fabgen init`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitOutcome {
    pub path: PathBuf,
    pub written: bool,
}

/// Write `<dir>/fabgen.yaml`; an existing file is left alone unless `force`.
pub fn init_settings(dir: &Path, project_path: Option<&Path>, force: bool) -> Result<InitOutcome> {
    let path = ArtifactKind::Settings.path_in(dir);
    if path.exists() && !force {
        info!(path = %path.display(), "settings already present, skipping");
        return Ok(InitOutcome {
            path,
            written: false,
        });
    }

    fs::create_dir_all(dir).with_context(|| format!("cannot create {}", dir.display()))?;
    let project_path = match project_path {
        Some(p) => p.to_path_buf(),
        None => fs::canonicalize(dir)
            .with_context(|| format!("cannot resolve {}", dir.display()))?,
    };

    let model = SettingsTemplateModel::new(&project_path);
    settings_renderer()?.render(&path, &model)?;
    info!(path = %path.display(), project = %project_path.display(), "settings written");

    Ok(InitOutcome {
        path,
        written: true,
    })
}

pub fn cmd_init(dir: &Path, project_path: Option<&Path>, force: bool, json: bool) -> Result<()> {
    let outcome = init_settings(dir, project_path, force)?;

    if json {
        let out = serde_json::json!({
            "success": true,
            "command": "init",
            "settings": outcome.path.display().to_string(),
            "written": outcome.written,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else if outcome.written {
        println!("[OK] Wrote {}", outcome.path.display());
    } else {
        println!(
            "[ ] {} already exists. Use --force to overwrite.",
            outcome.path.display()
        );
    }
    Ok(())
}
