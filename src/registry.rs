//! The authoritative in-memory collection of bugs and the fixed team roster.
//!
//! New bugs are prepended, so `bugs()` is most-recent-first. Nothing is ever
//! removed. Status and assignee can change; `id` and `created_at` cannot
//! through the field-scoped setters.

use crate::error::{RegistryError, Result};
use crate::models::bug::{Bug, BugStatus, NewBug};
use crate::models::groups::StatusGroups;
use crate::models::team::{default_roster, TeamMember};
use chrono::{TimeZone, Utc};
use log::{debug, info, warn};
use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct BugRegistry {
    bugs: Vec<Bug>,
    roster: Vec<TeamMember>,
}

impl BugRegistry {
    pub fn new(roster: Vec<TeamMember>) -> Self {
        Self {
            bugs: Vec::new(),
            roster,
        }
    }

    /// Seed bugs keep their given order; a repeated id keeps the first one.
    pub fn with_seed(roster: Vec<TeamMember>, seed: Vec<Bug>) -> Self {
        let mut seen = HashSet::new();
        let mut bugs = Vec::with_capacity(seed.len());

        for bug in seed {
            if seen.insert(bug.id.clone()) {
                bugs.push(bug);
            } else {
                warn!("Dropping seed bug with duplicate id {}", bug.id);
            }
        }

        Self { bugs, roster }
    }

    pub fn demo() -> Self {
        Self::with_seed(default_roster(), demo_bugs())
    }

    pub fn create(&mut self, input: NewBug) -> Result<Bug> {
        let title = input.title.trim();
        if title.is_empty() {
            return Err(RegistryError::InvalidInput("title is required".to_string()));
        }

        let assignee = input.assignee.trim();
        if assignee.is_empty() {
            return Err(RegistryError::InvalidInput("assignee is required".to_string()));
        }

        if input.status.is_some_and(|status| status != BugStatus::Open) {
            debug!("Ignoring caller status {:?} on create", input.status);
        }

        let bug = Bug {
            id: self.fresh_id(),
            title: title.to_string(),
            description: input.description.trim().to_string(),
            status: BugStatus::Open,
            assignee: assignee.to_string(),
            created_at: Utc::now(),
        };

        info!("Created bug {} assigned to {}", bug.id, bug.assignee);
        self.bugs.insert(0, bug.clone());
        Ok(bug)
    }

    /// Whole-record replace. Returns `false` when no stored bug has `bug.id`.
    pub fn update(&mut self, bug: Bug) -> bool {
        match self.bugs.iter_mut().find(|stored| stored.id == bug.id) {
            Some(stored) => {
                info!("Updated bug {} (status {}, assignee {})", bug.id, bug.status, bug.assignee);
                *stored = bug;
                true
            }
            None => {
                debug!("Ignoring update for unknown bug {}", bug.id);
                false
            }
        }
    }

    pub fn set_status(&mut self, id: &str, status: BugStatus) -> Result<Bug> {
        let stored = self.find_mut(id)?;
        stored.status = status;
        info!("Moved bug {id} to {status}");
        Ok(stored.clone())
    }

    pub fn set_assignee(&mut self, id: &str, assignee: &str) -> Result<Bug> {
        let assignee = assignee.trim();
        if assignee.is_empty() {
            return Err(RegistryError::InvalidInput("assignee is required".to_string()));
        }

        if self.member(assignee).is_none() {
            debug!("Assignee {assignee} is not on the roster");
        }

        let stored = self.find_mut(id)?;
        stored.assignee = assignee.to_string();
        info!("Reassigned bug {id} to {assignee}");
        Ok(stored.clone())
    }

    pub fn group_by_status(&self) -> StatusGroups {
        StatusGroups::partition(&self.bugs)
    }

    pub fn get(&self, id: &str) -> Option<&Bug> {
        self.bugs.iter().find(|bug| bug.id == id)
    }

    pub fn bugs(&self) -> &[Bug] {
        &self.bugs
    }

    pub fn roster(&self) -> &[TeamMember] {
        &self.roster
    }

    pub fn member(&self, id: &str) -> Option<&TeamMember> {
        self.roster.iter().find(|member| member.id == id)
    }

    pub fn len(&self) -> usize {
        self.bugs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bugs.is_empty()
    }

    fn find_mut(&mut self, id: &str) -> Result<&mut Bug> {
        self.bugs
            .iter_mut()
            .find(|bug| bug.id == id)
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = uuid::Uuid::new_v4().to_string();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}

pub fn demo_bugs() -> Vec<Bug> {
    let at = |y, m, d, h, min| {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0)
            .single()
            .unwrap_or_else(Utc::now)
    };

    vec![
        Bug {
            id: "1".to_string(),
            title: "Submit button not responding on mobile".to_string(),
            description: "The submit button on the contact form is not clickable on iOS Safari. Users report tapping multiple times with no response.".to_string(),
            status: BugStatus::Open,
            assignee: "sarah-chen".to_string(),
            created_at: at(2024, 6, 15, 10, 30),
        },
        Bug {
            id: "2".to_string(),
            title: "User dashboard loading slowly".to_string(),
            description: "Dashboard takes 5+ seconds to load user data. Network tab shows API response is delayed.".to_string(),
            status: BugStatus::InProgress,
            assignee: "mike-torres".to_string(),
            created_at: at(2024, 6, 14, 15, 20),
        },
        Bug {
            id: "3".to_string(),
            title: "Email notifications not sending".to_string(),
            description: "Users not receiving password reset emails. SMTP logs show connection timeouts.".to_string(),
            status: BugStatus::Done,
            assignee: "alex-kim".to_string(),
            created_at: at(2024, 6, 13, 9, 15),
        },
    ]
}
