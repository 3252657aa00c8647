use scout_core::{ResultRecord, StreamEvent};
use serde::Deserialize;
use serde_json::Value;

/// Why an inbound stream message was dropped.
///
/// All of these are non-fatal protocol violations: the message is discarded
/// and the session continues.
#[derive(Debug, thiserror::Error)]
pub enum EventError {
    #[error("payload is not valid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("payload is not a json object")]
    NotAnObject,
    #[error("unrecognized event tag {0:?}")]
    UnknownTag(String),
    #[error("progress event is missing a string url")]
    MissingUrl,
    #[error("result event is malformed: {0}")]
    BadResult(serde_json::Error),
    #[error("result score {0} is negative")]
    NegativeScore(f64),
}

/// Serde mirror of [`ResultRecord`]; the core stays serialization-free.
#[derive(Debug, Deserialize)]
struct ResultBody {
    url: String,
    title: String,
    snippet: String,
    matched_keywords: Vec<String>,
    score: f64,
    timestamp: String,
}

/// Classifies one inbound stream message.
///
/// The match on the `type` tag is closed: `"progress"` and `"result"` are
/// the only recognized tags and anything else is a malformed event. Result
/// rows arrive untagged from the backend, so an absent tag parses as a
/// result.
pub fn classify_event(text: &str) -> Result<StreamEvent, EventError> {
    let value: Value = serde_json::from_str(text)?;
    if !value.is_object() {
        return Err(EventError::NotAnObject);
    }

    match value.get("type") {
        Some(Value::String(tag)) if tag == "progress" => {
            let url = value
                .get("url")
                .and_then(Value::as_str)
                .ok_or(EventError::MissingUrl)?;
            Ok(StreamEvent::Progress {
                url: url.to_string(),
            })
        }
        Some(Value::String(tag)) if tag == "result" => parse_result(value),
        None => parse_result(value),
        Some(other) => Err(EventError::UnknownTag(other.to_string())),
    }
}

fn parse_result(value: Value) -> Result<StreamEvent, EventError> {
    let body: ResultBody = serde_json::from_value(value).map_err(EventError::BadResult)?;
    if !(body.score >= 0.0) {
        // Also catches NaN.
        return Err(EventError::NegativeScore(body.score));
    }
    Ok(StreamEvent::Result(ResultRecord {
        url: body.url,
        title: body.title,
        snippet: body.snippet,
        matched_keywords: body.matched_keywords,
        score: body.score,
        timestamp: body.timestamp,
    }))
}
