use scout_core::{SessionStatus, SessionViewModel};

/// Incremental console renderer for the session view model.
///
/// Results are stored most-recent-first in the projection, so the newly
/// arrived ones are the leading entries since the last render.
pub struct Renderer {
    last_status: SessionStatus,
    last_pages: u64,
    printed_results: usize,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            last_status: SessionStatus::Idle,
            last_pages: 0,
            printed_results: 0,
        }
    }

    pub fn render(&mut self, view: &SessionViewModel) {
        if view.status != self.last_status {
            println!("status: {}", status_label(view.status));
            self.last_status = view.status;
        }

        if view.pages_visited != self.last_pages {
            let current = view.recent_pages.first().map(String::as_str).unwrap_or("");
            println!("visited {:>4}  {}", view.pages_visited, current);
            self.last_pages = view.pages_visited;
        }

        let new_count = view.results.len().saturating_sub(self.printed_results);
        for record in view.results[..new_count].iter().rev() {
            println!(
                "hit  score={:>7.1}  {}  [{}]  {}",
                record.score,
                record.url,
                record.matched_keywords.join(", "),
                record.title
            );
        }
        self.printed_results = view.results.len();
    }

    pub fn summary(&self, view: &SessionViewModel) {
        println!();
        println!(
            "{} — {} pages visited, {} relevant",
            status_label(view.status),
            view.pages_visited,
            view.results.len()
        );
        for record in &view.results {
            println!("  {:>7.1}  {}  {}", record.score, record.url, record.title);
        }
    }
}

fn status_label(status: SessionStatus) -> &'static str {
    match status {
        SessionStatus::Idle => "idle",
        SessionStatus::Connecting => "connecting",
        SessionStatus::Scanning => "scanning",
        SessionStatus::Complete => "complete",
        SessionStatus::Error => "error",
    }
}
