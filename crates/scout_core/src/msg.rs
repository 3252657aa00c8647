use crate::{CrawlRequest, ResultRecord};

/// One classified message from the per-job event stream.
#[derive(Debug, Clone, PartialEq)]
pub enum StreamEvent {
    /// The crawler just visited a page; no relevance judgment.
    Progress { url: String },
    /// The crawler judged a page relevant.
    Result(ResultRecord),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User submitted a new crawl request.
    StartSubmitted { request: CrawlRequest },
    /// User clicked Stop: sever the transport, return to idle.
    StopClicked,
    /// Job-creation call succeeded with the backend-assigned identifier.
    /// Carries the generation from the originating [`crate::Effect::CreateJob`].
    JobCreated { generation: u64, job_id: String },
    /// Job-creation call was rejected or unreachable.
    JobCreationFailed { generation: u64, reason: String },
    /// Stream transport confirmed open.
    StreamOpened,
    /// One inbound stream event, already classified by the client layer.
    StreamEvent(StreamEvent),
    /// Stream transport closed by the remote side.
    StreamClosed,
    /// Stream transport reported a failure.
    StreamFailed { reason: String },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
