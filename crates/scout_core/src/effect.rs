use crate::CrawlRequest;

/// IO requested by [`crate::update`]; executed by the protocol client.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Issue the job-creation request. The generation is echoed back in
    /// the response message so a superseded response can be recognized.
    CreateJob {
        generation: u64,
        request: CrawlRequest,
    },
    /// Attach the event stream scoped to an accepted job.
    OpenStream { job_id: String },
    /// Sever the active stream transport, if any. Idempotent.
    CloseStream,
}
