use crate::models::bug::{Bug, BugStatus};
use serde::{Deserialize, Serialize};

/// Bugs partitioned by status, each group in source collection order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusGroups {
    pub open: Vec<Bug>,
    pub in_progress: Vec<Bug>,
    pub done: Vec<Bug>,
}

impl StatusGroups {
    pub fn partition<'a, I>(bugs: I) -> Self
    where
        I: IntoIterator<Item = &'a Bug>,
    {
        let mut groups = StatusGroups::default();
        for bug in bugs {
            groups.group_mut(bug.status).push(bug.clone());
        }
        groups
    }

    pub fn get(&self, status: BugStatus) -> &[Bug] {
        match status {
            BugStatus::Open => &self.open,
            BugStatus::InProgress => &self.in_progress,
            BugStatus::Done => &self.done,
        }
    }

    fn group_mut(&mut self, status: BugStatus) -> &mut Vec<Bug> {
        match status {
            BugStatus::Open => &mut self.open,
            BugStatus::InProgress => &mut self.in_progress,
            BugStatus::Done => &mut self.done,
        }
    }

    pub fn counts(&self) -> [(BugStatus, usize); 3] {
        BugStatus::ALL.map(|status| (status, self.get(status).len()))
    }

    pub fn len(&self) -> usize {
        self.open.len() + self.in_progress.len() + self.done.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
