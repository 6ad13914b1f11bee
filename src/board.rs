use crate::models::bug::{Bug, BugStatus};
use crate::models::groups::StatusGroups;
use crate::models::team::TeamMember;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const UNASSIGNED_NAME: &str = "Unassigned";
const UNASSIGNED_AVATAR: &str = "?";
const MILLIS_PER_DAY: f64 = 86_400_000.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssigneeView {
    pub id: Option<String>,
    pub name: String,
    pub avatar: String,
}

impl AssigneeView {
    pub fn is_unassigned(&self) -> bool {
        self.id.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BugCardView {
    pub bug: Bug,
    pub assignee: AssigneeView,
    pub created_label: String,
    pub has_details: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardColumn<T> {
    pub status: BugStatus,
    pub title: String,
    pub count: usize,
    pub empty_message: String,
    pub bugs: Vec<T>,
}

/// One column per status, in board order.
pub fn columns(groups: &StatusGroups) -> Vec<BoardColumn<Bug>> {
    BugStatus::ALL
        .iter()
        .map(|&status| column(status, groups.get(status).to_vec()))
        .collect()
}

pub fn card_columns(
    groups: &StatusGroups,
    roster: &[TeamMember],
    now: DateTime<Utc>,
) -> Vec<BoardColumn<BugCardView>> {
    columns(groups)
        .into_iter()
        .map(|column| column.map(|bug| card(&bug, roster, now)))
        .collect()
}

impl<T> BoardColumn<T> {
    pub fn map<U, F>(self, f: F) -> BoardColumn<U>
    where
        F: FnMut(T) -> U,
    {
        BoardColumn {
            status: self.status,
            title: self.title,
            count: self.count,
            empty_message: self.empty_message,
            bugs: self.bugs.into_iter().map(f).collect(),
        }
    }
}

fn column<T>(status: BugStatus, bugs: Vec<T>) -> BoardColumn<T> {
    let title = status.label().to_string();
    BoardColumn {
        status,
        count: bugs.len(),
        empty_message: format!("No bugs in {}", title.to_lowercase()),
        title,
        bugs,
    }
}

pub fn resolve_assignee(roster: &[TeamMember], assignee: &str) -> AssigneeView {
    match roster.iter().find(|member| member.id == assignee) {
        Some(member) => AssigneeView {
            id: Some(member.id.clone()),
            name: member.name.clone(),
            avatar: member.avatar.clone(),
        },
        None => AssigneeView {
            id: None,
            name: UNASSIGNED_NAME.to_string(),
            avatar: UNASSIGNED_AVATAR.to_string(),
        },
    }
}

pub fn card(bug: &Bug, roster: &[TeamMember], now: DateTime<Utc>) -> BugCardView {
    BugCardView {
        bug: bug.clone(),
        assignee: resolve_assignee(roster, &bug.assignee),
        created_label: relative_day(bug.created_at, now),
        has_details: !bug.description.is_empty(),
    }
}

/// Whole-day distance from `now`, rounded toward the future.
pub fn relative_day(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff_ms = (created_at - now).num_milliseconds() as f64;
    let days = (diff_ms / MILLIS_PER_DAY).ceil() as i64;

    match days {
        0 => "today".to_string(),
        -1 => "yesterday".to_string(),
        1 => "tomorrow".to_string(),
        d if d < 0 => format!("{} days ago", -d),
        d => format!("in {d} days"),
    }
}
