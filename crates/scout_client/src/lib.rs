//! Scout client: job creation and event-stream transport for one crawl session.
mod client;
mod events;
mod job;
mod settings;
mod stream;

pub use client::{ClientEvent, ClientHandle};
pub use events::{classify_event, EventError};
pub use job::{JobError, JobFailureKind, JobStarter, ReqwestJobStarter};
pub use settings::{ClientSettings, SettingsError};
