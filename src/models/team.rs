use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub avatar: String, // short initials, e.g. "SC"
}

impl TeamMember {
    pub fn new(id: &str, name: &str, avatar: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            avatar: avatar.to_string(),
        }
    }
}

/// First letter of up to two words, uppercased.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

pub fn default_roster() -> Vec<TeamMember> {
    vec![
        TeamMember::new("sarah-chen", "Sarah Chen", "SC"),
        TeamMember::new("mike-torres", "Mike Torres", "MT"),
        TeamMember::new("alex-kim", "Alex Kim", "AK"),
        TeamMember::new("jessica-lopez", "Jessica Lopez", "JL"),
        TeamMember::new("david-park", "David Park", "DP"),
    ]
}
