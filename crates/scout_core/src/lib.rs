//! Scout core: pure session state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::{Msg, StreamEvent};
pub use state::{
    CrawlRequest, InvalidRequest, ResultRecord, SessionState, SessionStatus, ACTIVITY_WINDOW_CAP,
    DEPTH_DEFAULT, DEPTH_MAX, DEPTH_MIN,
};
pub use update::update;
pub use view_model::SessionViewModel;
