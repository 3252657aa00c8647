use std::sync::mpsc;

use futures_util::StreamExt;
use scout_logging::scout_warn;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::client::ClientEvent;
use crate::events::classify_event;

/// Reads one per-job event stream until it ends or is cancelled.
///
/// `StreamOpened` is emitted only once the handshake succeeds, so the state
/// machine's `connecting` faithfully covers the window where the job is
/// accepted but the stream is not yet live. A cancelled stream emits
/// nothing: the close was client-initiated and the session already left.
pub(crate) async fn run_stream(
    ws_url: Url,
    events: mpsc::Sender<ClientEvent>,
    cancel: CancellationToken,
) {
    let mut socket = tokio::select! {
        _ = cancel.cancelled() => return,
        connected = connect_async(ws_url.as_str()) => match connected {
            Ok((socket, _response)) => socket,
            Err(err) => {
                let _ = events.send(ClientEvent::StreamFailed {
                    reason: err.to_string(),
                });
                return;
            }
        },
    };
    let _ = events.send(ClientEvent::StreamOpened);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                // Best-effort close frame; the remote job is not waited on.
                let _ = socket.close(None).await;
                return;
            }
            frame = socket.next() => match frame {
                Some(Ok(Message::Text(text))) => match classify_event(&text) {
                    Ok(event) => {
                        let _ = events.send(ClientEvent::Event(event));
                    }
                    Err(err) => {
                        scout_warn!("dropping malformed stream event: {err}");
                    }
                },
                Some(Ok(Message::Close(_))) | None => {
                    let _ = events.send(ClientEvent::StreamClosed);
                    return;
                }
                // Ping/pong/binary frames carry no session data.
                Some(Ok(_)) => {}
                Some(Err(err)) => {
                    let _ = events.send(ClientEvent::StreamFailed {
                        reason: err.to_string(),
                    });
                    return;
                }
            }
        }
    }
}
