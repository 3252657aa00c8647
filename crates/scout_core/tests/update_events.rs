use std::sync::Once;

use scout_core::{
    update, CrawlRequest, Msg, ResultRecord, SessionState, SessionStatus, StreamEvent,
    ACTIVITY_WINDOW_CAP,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(scout_logging::initialize_for_tests);
}

fn record(url: &str) -> ResultRecord {
    ResultRecord {
        url: url.to_string(),
        title: format!("title for {url}"),
        snippet: "snippet".to_string(),
        matched_keywords: vec!["aid".to_string()],
        score: 1.0,
        timestamp: "t".to_string(),
    }
}

fn scanning_state() -> SessionState {
    let request = CrawlRequest::new("https://example.edu", vec!["aid".to_string()], 2);
    let (state, _) = update(SessionState::new(), Msg::StartSubmitted { request });
    let generation = state.generation();
    let (state, _) = update(
        state,
        Msg::JobCreated {
            generation,
            job_id: "job-1".to_string(),
        },
    );
    let (state, _) = update(state, Msg::StreamOpened);
    state
}

fn progress(state: SessionState, url: &str) -> SessionState {
    let (state, _) = update(
        state,
        Msg::StreamEvent(StreamEvent::Progress {
            url: url.to_string(),
        }),
    );
    state
}

fn result(state: SessionState, url: &str) -> SessionState {
    let (state, _) = update(state, Msg::StreamEvent(StreamEvent::Result(record(url))));
    state
}

#[test]
fn counters_are_independent_across_interleavings() {
    init_logging();
    // Three progress events and two results, arbitrarily interleaved.
    let state = scanning_state();
    let state = progress(state, "https://a");
    let state = result(state, "https://r1");
    let state = progress(state, "https://b");
    let state = progress(state, "https://c");
    let state = result(state, "https://r2");

    let view = state.view();
    assert_eq!(view.pages_visited, 3);
    assert_eq!(view.results.len(), 2);
}

#[test]
fn results_accumulate_most_recent_first_without_dedup() {
    init_logging();
    let state = scanning_state();
    let state = result(state, "https://same");
    let state = result(state, "https://other");
    let state = result(state, "https://same");

    let urls: Vec<_> = state.view().results.iter().map(|r| r.url.clone()).collect();
    assert_eq!(urls, vec!["https://same", "https://other", "https://same"]);
}

#[test]
fn activity_window_keeps_three_most_recent() {
    init_logging();
    let state = scanning_state();
    let state = progress(state, "a");
    let state = progress(state, "b");
    let state = progress(state, "c");
    let state = progress(state, "d");

    let view = state.view();
    assert_eq!(view.recent_pages, vec!["d", "c", "b"]);
    assert!(view.recent_pages.len() <= ACTIVITY_WINDOW_CAP);
    // The counter keeps the full total; only the window is bounded.
    assert_eq!(view.pages_visited, 4);
}

#[test]
fn events_after_stop_are_discarded() {
    init_logging();
    let state = scanning_state();
    let state = progress(state, "a");
    let (state, _) = update(state, Msg::StopClicked);

    // The transport may flush queued events after the close; they must
    // not be applied.
    let state = progress(state, "late");
    let state = result(state, "https://late");

    let view = state.view();
    assert_eq!(view.status, SessionStatus::Idle);
    assert_eq!(view.pages_visited, 1);
    assert!(view.results.is_empty());
}

#[test]
fn events_after_terminal_status_are_discarded() {
    init_logging();
    let state = scanning_state();
    let (state, _) = update(
        state,
        Msg::StreamFailed {
            reason: "gone".to_string(),
        },
    );
    let state = progress(state, "late");

    assert_eq!(state.status(), SessionStatus::Error);
    assert_eq!(state.pages_visited(), 0);
}

#[test]
fn invalid_requests_issue_no_effects() {
    init_logging();
    let empty_target = CrawlRequest::new("", vec!["aid".to_string()], 2);
    let (state, effects) = update(
        SessionState::new(),
        Msg::StartSubmitted {
            request: empty_target,
        },
    );
    assert_eq!(state.status(), SessionStatus::Idle);
    assert!(effects.is_empty());

    let empty_keywords = CrawlRequest::new("https://example.edu", Vec::new(), 2);
    let (state, effects) = update(
        SessionState::new(),
        Msg::StartSubmitted {
            request: empty_keywords,
        },
    );
    assert_eq!(state.status(), SessionStatus::Idle);
    assert!(effects.is_empty());

    let depth_out_of_range = CrawlRequest::new("https://example.edu", vec!["aid".to_string()], 6);
    let (state, effects) = update(
        SessionState::new(),
        Msg::StartSubmitted {
            request: depth_out_of_range,
        },
    );
    assert_eq!(state.status(), SessionStatus::Idle);
    assert!(effects.is_empty());
}

#[test]
fn events_while_connecting_are_applied() {
    init_logging();
    // An event racing ahead of the open confirmation still belongs to the
    // live session and is applied.
    let request = CrawlRequest::new("https://example.edu", vec!["aid".to_string()], 2);
    let (state, _) = update(SessionState::new(), Msg::StartSubmitted { request });
    let state = progress(state, "early");

    assert_eq!(state.status(), SessionStatus::Connecting);
    assert_eq!(state.pages_visited(), 1);
}
