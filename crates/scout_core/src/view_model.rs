use crate::{ResultRecord, SessionStatus};

/// Read-only presentation snapshot of the session projection.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionViewModel {
    pub status: SessionStatus,
    pub job_id: Option<String>,
    /// Pages visited so far; independent of the result count.
    pub pages_visited: u64,
    /// Most-recent-first, at most [`crate::ACTIVITY_WINDOW_CAP`] entries.
    pub recent_pages: Vec<String>,
    /// Most-recent-first, unbounded.
    pub results: Vec<ResultRecord>,
    pub dirty: bool,
}
