use scout_client::{ClientEvent, ClientHandle};
use scout_core::{Effect, Msg};
use scout_logging::{scout_info, scout_warn};

/// Executes core effects against the protocol client and turns client
/// events back into core messages.
pub struct EffectRunner {
    handle: ClientHandle,
}

impl EffectRunner {
    pub fn new(handle: ClientHandle) -> Self {
        Self { handle }
    }

    pub fn run_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::CreateJob {
                    generation,
                    request,
                } => {
                    scout_info!(
                        "CreateJob generation={} target={} keywords={} depth={}",
                        generation,
                        request.target,
                        request.keywords.len(),
                        request.depth
                    );
                    self.handle.create_job(generation, request);
                }
                Effect::OpenStream { job_id } => {
                    scout_info!("OpenStream job_id={}", job_id);
                    self.handle.open_stream(job_id);
                }
                Effect::CloseStream => {
                    self.handle.close_stream();
                }
            }
        }
    }

    pub fn try_recv_msg(&self) -> Option<Msg> {
        self.handle.try_recv().map(map_event)
    }
}

fn map_event(event: ClientEvent) -> Msg {
    match event {
        ClientEvent::JobCreated { generation, job_id } => Msg::JobCreated { generation, job_id },
        ClientEvent::JobCreationFailed { generation, error } => {
            scout_warn!("Job creation failed: {}", error);
            Msg::JobCreationFailed {
                generation,
                reason: error.to_string(),
            }
        }
        ClientEvent::StreamOpened => Msg::StreamOpened,
        ClientEvent::Event(event) => Msg::StreamEvent(event),
        ClientEvent::StreamClosed => Msg::StreamClosed,
        ClientEvent::StreamFailed { reason } => {
            scout_warn!("Stream failed: {}", reason);
            Msg::StreamFailed { reason }
        }
    }
}
