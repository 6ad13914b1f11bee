use crate::board::{self, BoardColumn, BugCardView};
use crate::error::RegistryError;
use crate::models::bug::{Bug, BugDraft, BugStatus, NewBug};
use crate::models::groups::StatusGroups;
use crate::models::team::TeamMember;
use crate::registry::BugRegistry;
use std::sync::{Arc, Mutex, MutexGuard};

pub type SharedRegistry = Arc<Mutex<BugRegistry>>;

fn lock(registry: &SharedRegistry) -> Result<MutexGuard<'_, BugRegistry>, String> {
    registry.lock().map_err(|_| RegistryError::Lock.to_string())
}

pub fn create_bug_internal(registry: &SharedRegistry, input: NewBug) -> Result<Bug, String> {
    let mut guard = lock(registry)?;
    guard.create(input).map_err(|e| e.to_string())
}

/// Applies the form's submit gating before creating, so an incomplete draft
/// never reaches the registry.
pub fn submit_draft_internal(registry: &SharedRegistry, mut draft: BugDraft) -> Result<Bug, String> {
    let input = draft
        .submit()
        .ok_or_else(|| "Draft is incomplete: title and assignee are required".to_string())?;
    create_bug_internal(registry, input)
}

pub fn update_bug_internal(registry: &SharedRegistry, bug: Bug) -> Result<serde_json::Value, String> {
    let mut guard = lock(registry)?;
    let id = bug.id.clone();
    let status = if guard.update(bug) { "updated" } else { "unchanged" };
    Ok(serde_json::json!({"status": status, "id": id}))
}

pub fn set_bug_status_internal(registry: &SharedRegistry, id: &str, status: &str) -> Result<Bug, String> {
    let status: BugStatus = status.parse()?;
    let mut guard = lock(registry)?;
    guard.set_status(id, status).map_err(|e| e.to_string())
}

pub fn set_bug_assignee_internal(registry: &SharedRegistry, id: &str, assignee: &str) -> Result<Bug, String> {
    let mut guard = lock(registry)?;
    guard.set_assignee(id, assignee).map_err(|e| e.to_string())
}

pub fn list_bugs_internal(registry: &SharedRegistry) -> Result<Vec<Bug>, String> {
    let guard = lock(registry)?;
    Ok(guard.bugs().to_vec())
}

pub fn group_bugs_internal(registry: &SharedRegistry) -> Result<StatusGroups, String> {
    let guard = lock(registry)?;
    Ok(guard.group_by_status())
}

pub fn get_board_internal(registry: &SharedRegistry) -> Result<Vec<BoardColumn<BugCardView>>, String> {
    let guard = lock(registry)?;
    let groups = guard.group_by_status();
    for (status, count) in groups.counts() {
        log::debug!("Board column {status}: {count} bugs");
    }
    Ok(board::card_columns(&groups, guard.roster(), chrono::Utc::now()))
}

pub fn list_team_members_internal(registry: &SharedRegistry) -> Result<Vec<TeamMember>, String> {
    let guard = lock(registry)?;
    Ok(guard.roster().to_vec())
}

#[cfg(feature = "desktop")]
pub mod desktop {
    use super::*;

    #[tauri::command]
    pub async fn create_bug(
        input: NewBug,
        registry: tauri::State<'_, SharedRegistry>,
    ) -> Result<Bug, String> {
        create_bug_internal(registry.inner(), input)
    }

    #[tauri::command]
    pub async fn submit_draft(
        draft: BugDraft,
        registry: tauri::State<'_, SharedRegistry>,
    ) -> Result<Bug, String> {
        submit_draft_internal(registry.inner(), draft)
    }

    #[tauri::command]
    pub async fn update_bug(
        bug: Bug,
        registry: tauri::State<'_, SharedRegistry>,
    ) -> Result<serde_json::Value, String> {
        update_bug_internal(registry.inner(), bug)
    }

    #[tauri::command]
    pub async fn set_bug_status(
        id: String,
        status: String,
        registry: tauri::State<'_, SharedRegistry>,
    ) -> Result<Bug, String> {
        set_bug_status_internal(registry.inner(), &id, &status)
    }

    #[tauri::command]
    pub async fn set_bug_assignee(
        id: String,
        assignee: String,
        registry: tauri::State<'_, SharedRegistry>,
    ) -> Result<Bug, String> {
        set_bug_assignee_internal(registry.inner(), &id, &assignee)
    }

    #[tauri::command]
    pub async fn list_bugs(registry: tauri::State<'_, SharedRegistry>) -> Result<Vec<Bug>, String> {
        list_bugs_internal(registry.inner())
    }

    #[tauri::command]
    pub async fn group_bugs(
        registry: tauri::State<'_, SharedRegistry>,
    ) -> Result<StatusGroups, String> {
        group_bugs_internal(registry.inner())
    }

    #[tauri::command]
    pub async fn get_board(
        registry: tauri::State<'_, SharedRegistry>,
    ) -> Result<Vec<BoardColumn<BugCardView>>, String> {
        get_board_internal(registry.inner())
    }

    #[tauri::command]
    pub async fn list_team_members(
        registry: tauri::State<'_, SharedRegistry>,
    ) -> Result<Vec<TeamMember>, String> {
        list_team_members_internal(registry.inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poisoned_lock_surfaces_as_command_error() {
        let registry: SharedRegistry = Arc::new(Mutex::new(BugRegistry::demo()));
        let poisoner = Arc::clone(&registry);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.lock().expect("first lock");
            panic!("poison the registry");
        })
        .join();

        assert_eq!(list_bugs_internal(&registry), Err("Registry lock error".to_string()));
    }

    #[test]
    fn unknown_status_string_is_rejected_before_locking() {
        let registry: SharedRegistry = Arc::new(Mutex::new(BugRegistry::demo()));
        let result = set_bug_status_internal(&registry, "1", "blocked");
        assert_eq!(result, Err("Unknown status: blocked".to_string()));
    }
}
