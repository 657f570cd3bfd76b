use serde::Deserialize;

/// Workspace record as returned by `GET /workspaces`.
#[derive(Debug, Deserialize, Clone)]
pub struct Workspace {
    pub gid: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub resource_type: Option<String>,
}

impl Workspace {
    /// Display name with a fallback for payloads missing the field.
    pub fn display_name(&self) -> String {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or("Unknown Workspace")
            .to_string()
    }
}
