use crate::models::bug::Bug;
use crate::models::team::{default_roster, initials, TeamMember};
use crate::registry::{demo_bugs, BugRegistry};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV_VAR: &str = "BUGBOARD_CONFIG";
const DEFAULT_CONFIG_FILE: &str = "bugboard.json";

/// Roster and starting bugs for a session. Read once at startup and never
/// written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoardConfig {
    pub team_members: Vec<TeamMember>,
    pub seed_bugs: Vec<Bug>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            team_members: default_roster(),
            seed_bugs: demo_bugs(),
        }
    }
}

impl BoardConfig {
    pub fn into_registry(self) -> BugRegistry {
        BugRegistry::with_seed(self.team_members, self.seed_bugs)
    }
}

pub fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

pub fn load_config(path: &Path) -> BoardConfig {
    if !path.exists() {
        debug!("No board config at {}, using defaults", path.display());
        return BoardConfig::default();
    }

    let parsed = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))
        .and_then(|raw| {
            serde_json::from_str::<BoardConfig>(&raw)
                .map_err(|e| format!("Failed to parse {}: {e}", path.display()))
        });

    match parsed {
        Ok(config) => sanitize_config(config),
        Err(message) => {
            warn!("{message}; using default board config");
            BoardConfig::default()
        }
    }
}

fn sanitize_config(mut config: BoardConfig) -> BoardConfig {
    let mut seen = HashSet::new();
    config.team_members.retain(|member| {
        if member.id.trim().is_empty() {
            warn!("Dropping team member without id: {}", member.name);
            return false;
        }
        if !seen.insert(member.id.clone()) {
            warn!("Dropping duplicate team member {}", member.id);
            return false;
        }
        true
    });

    for member in &mut config.team_members {
        if member.avatar.trim().is_empty() {
            member.avatar = initials(&member.name);
        }
    }

    config.seed_bugs.retain(|bug| {
        if bug.title.trim().is_empty() || bug.assignee.trim().is_empty() {
            warn!("Dropping seed bug {} without title or assignee", bug.id);
            return false;
        }
        true
    });

    config
}
