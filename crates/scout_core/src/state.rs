use std::collections::VecDeque;
use std::fmt;

use crate::view_model::SessionViewModel;

/// Maximum number of entries kept in the recent-activity window.
pub const ACTIVITY_WINDOW_CAP: usize = 3;

/// Inclusive crawl depth bounds accepted from callers.
pub const DEPTH_MIN: u8 = 1;
/// Inclusive upper bound on crawl depth.
pub const DEPTH_MAX: u8 = 5;
/// Depth used when the caller does not specify one.
pub const DEPTH_DEFAULT: u8 = 2;

/// Caller-supplied parameters for one crawl session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlRequest {
    /// URL the remote crawler starts from.
    pub target: String,
    /// Non-empty, caller-deduplicated keyword set (order preserved).
    pub keywords: Vec<String>,
    /// BFS traversal depth bound, in `[DEPTH_MIN, DEPTH_MAX]`.
    pub depth: u8,
}

impl CrawlRequest {
    pub fn new(target: impl Into<String>, keywords: Vec<String>, depth: u8) -> Self {
        Self {
            target: target.into(),
            keywords,
            depth,
        }
    }

    /// Rejects requests that must never reach the job-creation backend.
    ///
    /// An out-of-range depth is a hard caller error, not a value to clamp:
    /// silently correcting it would change the traversal cost behind the
    /// caller's back.
    pub fn validate(&self) -> Result<(), InvalidRequest> {
        if self.target.trim().is_empty() {
            return Err(InvalidRequest::EmptyTarget);
        }
        if self.keywords.iter().all(|k| k.trim().is_empty()) {
            return Err(InvalidRequest::EmptyKeywords);
        }
        if !(DEPTH_MIN..=DEPTH_MAX).contains(&self.depth) {
            return Err(InvalidRequest::DepthOutOfRange(self.depth));
        }
        Ok(())
    }
}

/// Why a [`CrawlRequest`] was rejected before any request was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidRequest {
    EmptyTarget,
    EmptyKeywords,
    DepthOutOfRange(u8),
}

impl fmt::Display for InvalidRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidRequest::EmptyTarget => write!(f, "target url is empty"),
            InvalidRequest::EmptyKeywords => write!(f, "keyword set is empty"),
            InvalidRequest::DepthOutOfRange(depth) => {
                write!(f, "depth {depth} outside [{DEPTH_MIN}, {DEPTH_MAX}]")
            }
        }
    }
}

/// Lifecycle status of the one live session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStatus {
    /// No session running; also the state after an explicit stop.
    #[default]
    Idle,
    /// Job-creation request submitted, stream not yet live.
    Connecting,
    /// Stream transport confirmed open; events are being applied.
    Scanning,
    /// Stream closed by the remote side while scanning.
    Complete,
    /// Job creation or the transport failed; terminal.
    Error,
}

impl SessionStatus {
    /// True while inbound stream traffic may still be applied.
    pub fn accepts_events(self) -> bool {
        matches!(self, SessionStatus::Connecting | SessionStatus::Scanning)
    }
}

/// One page the backend judged relevant.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRecord {
    pub url: String,
    pub title: String,
    pub snippet: String,
    /// Keyword subset found on the page, in backend order.
    pub matched_keywords: Vec<String>,
    /// Non-negative relevance score.
    pub score: f64,
    /// Opaque production time, as sent by the backend.
    pub timestamp: String,
}

/// The session projection: everything presentation collaborators may read.
///
/// Mutated only from [`crate::update`]; there is no transition logic here.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    status: SessionStatus,
    generation: u64,
    job_id: Option<String>,
    pages_visited: u64,
    activity: VecDeque<String>,
    results: Vec<ResultRecord>,
    dirty: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Counter identifying the current session, advanced on every start.
    ///
    /// Job-creation responses echo it back so a response belonging to a
    /// superseded session can be recognized and discarded.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn job_id(&self) -> Option<&str> {
        self.job_id.as_deref()
    }

    pub fn pages_visited(&self) -> u64 {
        self.pages_visited
    }

    /// Read-only snapshot for presentation collaborators.
    pub fn view(&self) -> SessionViewModel {
        SessionViewModel {
            status: self.status,
            job_id: self.job_id.clone(),
            pages_visited: self.pages_visited,
            recent_pages: self.activity.iter().cloned().collect(),
            results: self.results.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns and clears the dirty flag; used to coalesce rendering.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_status(&mut self, status: SessionStatus) {
        self.status = status;
        self.dirty = true;
    }

    pub(crate) fn set_job_id(&mut self, job_id: String) {
        self.job_id = Some(job_id);
        self.dirty = true;
    }

    /// Discards all prior session data and advances the generation;
    /// every start begins from zero.
    pub(crate) fn reset_for_start(&mut self) {
        self.generation += 1;
        self.job_id = None;
        self.pages_visited = 0;
        self.activity.clear();
        self.results.clear();
        self.dirty = true;
    }

    pub(crate) fn record_progress(&mut self, url: String) {
        self.pages_visited += 1;
        self.activity.push_front(url);
        self.activity.truncate(ACTIVITY_WINDOW_CAP);
        self.dirty = true;
    }

    pub(crate) fn record_result(&mut self, record: ResultRecord) {
        // Most-recent-first; duplicates are kept as-is.
        self.results.insert(0, record);
        self.dirty = true;
    }
}
