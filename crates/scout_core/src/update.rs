use crate::{Effect, Msg, SessionState, SessionStatus, StreamEvent};

/// Pure update function: applies a message to state and returns any effects.
///
/// All lifecycle transitions live here so there is exactly one authoritative
/// state machine; the client layer only executes the returned effects.
/// Stale messages (anything arriving after a stop or a terminal status) are
/// discarded by checking the live status at application time.
pub fn update(mut state: SessionState, msg: Msg) -> (SessionState, Vec<Effect>) {
    let effects = match msg {
        Msg::StartSubmitted { request } => {
            if request.validate().is_err() {
                // Invalid requests never reach the backend.
                return (state, Vec::new());
            }

            let mut effects = Vec::with_capacity(2);
            if state.status().accepts_events() {
                // A prior session may still hold a transport; sever it
                // before any state from the new session becomes visible.
                effects.push(Effect::CloseStream);
            }
            state.reset_for_start();
            state.set_status(SessionStatus::Connecting);
            effects.push(Effect::CreateJob {
                generation: state.generation(),
                request,
            });
            effects
        }
        Msg::StopClicked => {
            let mut effects = Vec::new();
            if state.status().accepts_events() {
                effects.push(Effect::CloseStream);
            }
            // Client-local reset; the remote job is not asked to stop.
            state.set_status(SessionStatus::Idle);
            effects
        }
        Msg::JobCreated { generation, job_id } => {
            // The generation check catches a restart: a second start also
            // sits in Connecting, and the first session's late response
            // must not open a stream for the wrong job.
            if state.status() == SessionStatus::Connecting && generation == state.generation() {
                state.set_job_id(job_id.clone());
                vec![Effect::OpenStream { job_id }]
            } else {
                // Stopped or restarted while the request was in flight;
                // the stream for the superseded job is never opened.
                Vec::new()
            }
        }
        Msg::JobCreationFailed {
            generation,
            reason: _,
        } => {
            if state.status() == SessionStatus::Connecting && generation == state.generation() {
                state.set_status(SessionStatus::Error);
            }
            Vec::new()
        }
        Msg::StreamOpened => {
            if state.status() == SessionStatus::Connecting {
                state.set_status(SessionStatus::Scanning);
            }
            Vec::new()
        }
        Msg::StreamEvent(event) => {
            if state.status().accepts_events() {
                apply_stream_event(&mut state, event);
            }
            Vec::new()
        }
        Msg::StreamClosed => {
            // Only a close that interrupts an active scan means completion.
            // After a stop the status is already Idle and must stay Idle.
            if state.status() == SessionStatus::Scanning {
                state.set_status(SessionStatus::Complete);
            }
            Vec::new()
        }
        Msg::StreamFailed { reason: _ } => {
            if state.status().accepts_events() {
                // Terminal; accumulated results and counters stay intact.
                state.set_status(SessionStatus::Error);
            }
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn apply_stream_event(state: &mut SessionState, event: StreamEvent) {
    match event {
        StreamEvent::Progress { url } => state.record_progress(url),
        StreamEvent::Result(record) => state.record_result(record),
    }
}
