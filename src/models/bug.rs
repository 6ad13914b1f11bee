use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BugStatus {
    Open,
    InProgress,
    Done,
}

impl BugStatus {
    /// Board order, left to right.
    pub const ALL: [BugStatus; 3] = [BugStatus::Open, BugStatus::InProgress, BugStatus::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            BugStatus::Open => "open",
            BugStatus::InProgress => "in-progress",
            BugStatus::Done => "done",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BugStatus::Open => "Open",
            BugStatus::InProgress => "In Progress",
            BugStatus::Done => "Done",
        }
    }
}

impl fmt::Display for BugStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BugStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(BugStatus::Open),
            "in-progress" => Ok(BugStatus::InProgress),
            "done" => Ok(BugStatus::Done),
            other => Err(format!("Unknown status: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bug {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: BugStatus,
    pub assignee: String, // TeamMember id, not checked against the roster
    pub created_at: DateTime<Utc>,
}

/// Creation input. `status` is accepted for wire compatibility and ignored:
/// every new bug starts out open.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBug {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: Option<BugStatus>,
    pub assignee: String,
}

/// Controlled form state for reporting a bug.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BugDraft {
    pub title: String,
    pub description: String,
    pub assignee: String,
}

impl BugDraft {
    pub fn can_submit(&self) -> bool {
        !self.title.trim().is_empty() && !self.assignee.trim().is_empty()
    }

    pub fn submit(&mut self) -> Option<NewBug> {
        if !self.can_submit() {
            return None;
        }

        let new_bug = NewBug {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            status: Some(BugStatus::Open),
            assignee: self.assignee.trim().to_string(),
        };
        self.clear();
        Some(new_bug)
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
        self.assignee.clear();
    }
}
