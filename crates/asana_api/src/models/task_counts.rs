use serde::Deserialize;

/// Task totals for a project from `GET /projects/{gid}/task_counts`.
///
/// Both fields are opt-in on the wire, so absent values decode as zero
/// rather than failing the whole refresh.
#[derive(Debug, Deserialize, Clone, Copy, Default)]
pub struct TaskCounts {
    #[serde(default)]
    pub num_tasks: u64,
    #[serde(default)]
    pub num_completed_tasks: u64,
}
