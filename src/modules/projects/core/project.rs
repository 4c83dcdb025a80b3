use serde::{Deserialize, Serialize};

pub const DEFAULT_PROJECT_COLOR: &str = "#6366f1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub color: String,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Insert payload for the `projects` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProject {
    pub name: String,
    pub color: String,
    pub owner: Option<String>,
}

impl NewProject {
    pub fn new(name: impl Into<String>, color: Option<String>, owner: Option<String>) -> Self {
        Self {
            name: name.into(),
            color: color.unwrap_or_else(|| DEFAULT_PROJECT_COLOR.to_string()),
            owner,
        }
    }
}
