use std::sync::mpsc;
use std::sync::Arc;
use std::thread;

use scout_core::{CrawlRequest, StreamEvent};
use tokio_util::sync::CancellationToken;

use crate::job::{JobError, JobStarter, ReqwestJobStarter};
use crate::settings::ClientSettings;
use crate::stream::run_stream;

enum ClientCommand {
    CreateJob { generation: u64, request: CrawlRequest },
    OpenStream { job_id: String },
    CloseStream,
}

/// Outcome of protocol IO, polled by the presentation loop and fed back
/// into the core as messages.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    /// Echoes the caller-supplied generation so stale responses from a
    /// superseded session can be recognized.
    JobCreated { generation: u64, job_id: String },
    JobCreationFailed { generation: u64, error: JobError },
    StreamOpened,
    Event(StreamEvent),
    StreamClosed,
    StreamFailed { reason: String },
}

/// Handle to the protocol IO thread.
///
/// Commands are executed on a dedicated tokio runtime; outcomes are polled
/// with [`ClientHandle::try_recv`] so all event application stays on the
/// caller's single update loop. The command loop owns the token of the one
/// live stream: opening a new stream cancels the previous one first, so no
/// two transports are ever open concurrently.
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
    event_rx: mpsc::Receiver<ClientEvent>,
}

impl ClientHandle {
    pub fn new(settings: ClientSettings) -> Self {
        let starter = Arc::new(ReqwestJobStarter::new(settings.clone()));
        Self::with_starter(settings, starter)
    }

    /// Injection point for tests and alternative backends.
    pub fn with_starter(settings: ClientSettings, starter: Arc<dyn JobStarter>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel::<ClientCommand>();
        let (event_tx, event_rx) = mpsc::channel::<ClientEvent>();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            let mut active_stream: Option<CancellationToken> = None;

            while let Ok(command) = cmd_rx.recv() {
                match command {
                    ClientCommand::CreateJob {
                        generation,
                        request,
                    } => {
                        let starter = Arc::clone(&starter);
                        let event_tx = event_tx.clone();
                        runtime.spawn(async move {
                            let event = match starter.create_job(&request).await {
                                Ok(job_id) => ClientEvent::JobCreated { generation, job_id },
                                Err(error) => {
                                    ClientEvent::JobCreationFailed { generation, error }
                                }
                            };
                            let _ = event_tx.send(event);
                        });
                    }
                    ClientCommand::OpenStream { job_id } => {
                        if let Some(token) = active_stream.take() {
                            token.cancel();
                        }
                        match settings.stream_url(&job_id) {
                            Ok(ws_url) => {
                                let token = CancellationToken::new();
                                active_stream = Some(token.clone());
                                runtime.spawn(run_stream(ws_url, event_tx.clone(), token));
                            }
                            Err(err) => {
                                let _ = event_tx.send(ClientEvent::StreamFailed {
                                    reason: err.to_string(),
                                });
                            }
                        }
                    }
                    ClientCommand::CloseStream => {
                        if let Some(token) = active_stream.take() {
                            token.cancel();
                        }
                    }
                }
            }

            // Handle dropped: sever any live stream before the runtime goes.
            if let Some(token) = active_stream.take() {
                token.cancel();
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn create_job(&self, generation: u64, request: CrawlRequest) {
        let _ = self.cmd_tx.send(ClientCommand::CreateJob {
            generation,
            request,
        });
    }

    pub fn open_stream(&self, job_id: impl Into<String>) {
        let _ = self.cmd_tx.send(ClientCommand::OpenStream {
            job_id: job_id.into(),
        });
    }

    pub fn close_stream(&self) {
        let _ = self.cmd_tx.send(ClientCommand::CloseStream);
    }

    pub fn try_recv(&self) -> Option<ClientEvent> {
        self.event_rx.try_recv().ok()
    }
}
