use serde::Deserialize;

/// Project record as returned by `GET /projects`, restricted to the
/// `opt_fields` the client requests.
#[derive(Debug, Deserialize, Clone)]
pub struct Project {
    pub gid: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub current_status: Option<ProjectStatus>,
}

/// Latest status update attached to a project. The `color` field carries
/// Asana's traffic-light value (`green`/`yellow`/`red`/`blue`).
#[derive(Debug, Deserialize, Clone)]
pub struct ProjectStatus {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

impl Project {
    /// Display name with a fallback for payloads missing the field.
    pub fn display_name(&self) -> String {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or("Unnamed Project")
            .to_string()
    }

    /// Color of the latest status update, when the project has one.
    pub fn status_color(&self) -> Option<&str> {
        self.current_status
            .as_ref()
            .and_then(|status| status.color.as_deref())
    }
}
