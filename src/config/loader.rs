//! Settings loading and discovery

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::domain::entities::ArtifactKind;
use crate::error::{FabgenError, FabgenResult};

use super::types::Settings;

/// Non-fatal settings warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load settings and collect non-fatal warnings (e.g. unknown keys).
///
/// Relative `project_path` and `network_path` values are resolved against
/// the directory holding the settings file.
pub fn load_with_warnings(path: &Path) -> FabgenResult<(Settings, Vec<SettingsWarning>)> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(FabgenError::SettingsNotFound {
                path: path.to_path_buf(),
            })
        }
        Err(e) => return Err(e.into()),
    };

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = serde_yaml_ng::Deserializer::from_str(&content);

    let mut settings: Settings = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| FabgenError::InvalidSettings {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if settings.project_path.as_os_str().is_empty() {
        return Err(FabgenError::InvalidSettings {
            file: path.to_path_buf(),
            message: "project_path is empty".to_string(),
        });
    }

    let base = path.parent().unwrap_or_else(|| Path::new("."));
    settings.project_path = resolve_relative(base, &settings.project_path);
    settings.network_path = settings
        .network_path
        .map(|network_path| resolve_relative(base, &network_path));

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            SettingsWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((settings, warnings))
}

fn resolve_relative(base: &Path, path: &Path) -> PathBuf {
    if path.is_relative() {
        base.join(path)
    } else {
        path.to_path_buf()
    }
}

/// Locate the settings file: an explicit path wins, otherwise walk up from
/// `start` looking for `fabgen.yaml`.
pub fn find_settings(explicit: Option<&Path>, start: &Path) -> FabgenResult<PathBuf> {
    if let Some(path) = explicit {
        return if path.is_file() {
            Ok(path.to_path_buf())
        } else {
            Err(FabgenError::SettingsNotFound {
                path: path.to_path_buf(),
            })
        };
    }

    let file_name = ArtifactKind::Settings.file_name();
    start
        .ancestors()
        .map(|dir| dir.join(file_name))
        .find(|candidate| candidate.is_file())
        .ok_or_else(|| FabgenError::SettingsNotFound {
            path: start.join(file_name),
        })
}

/// Apply environment variable overrides (FABGEN_* prefix)
pub fn with_env_overrides(settings: Settings) -> Settings {
    apply_overrides(settings, |name| std::env::var(name).ok())
}

pub(crate) fn apply_overrides<F>(mut settings: Settings, lookup: F) -> Settings
where
    F: Fn(&str) -> Option<String>,
{
    // FABGEN_NETWORK_PATH
    if let Some(path) = lookup("FABGEN_NETWORK_PATH").filter(|v| !v.is_empty()) {
        settings.network_path = Some(PathBuf::from(path));
    }

    // FABGEN_TOOLS_IMAGE
    if let Some(image) = lookup("FABGEN_TOOLS_IMAGE").filter(|v| !v.is_empty()) {
        settings.images.tools = image;
    }

    // FABGEN_ENGINE
    if let Some(engine) = lookup("FABGEN_ENGINE") {
        match engine.parse() {
            Ok(engine) => settings.execution.engine = engine,
            Err(message) => warn!(value = engine.as_str(), %message, "ignoring FABGEN_ENGINE"),
        }
    }

    settings
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.trim_start().starts_with(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "project_path",
        "network_path",
        "images",
        "tools",
        "execution",
        "engine",
        "docker_binary",
        "network",
        "domain",
        "orderer",
        "organizations",
        "consortiums",
        "channels",
        "name",
        "id",
        "hostname",
        "port",
        "orderer_type",
        "batch_timeout",
        "batch_size",
        "max_message_count",
        "absolute_max_bytes",
        "preferred_max_bytes",
        "kafka_brokers",
        "anchor",
        "anchor_port",
        "peers",
        "users",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_bytes.len()]
}
