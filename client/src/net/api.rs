//! REST helpers for talking to the relay.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): a stub, since sends only happen in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure folds into `ChatReply::Failed` after a console log, so the
//! widget never sees an error and never stays stuck awaiting.

#![allow(clippy::unused_async)]

use super::types::ChatReply;
use crate::state::chat::OutboundMessage;

/// Relay one chat turn through `POST /api/chat`.
pub async fn send_chat(message: OutboundMessage) -> ChatReply {
    #[cfg(feature = "hydrate")]
    {
        use super::types::ChatRequest;

        let body = ChatRequest { session_id: message.session_id, message: message.text };
        let request = match gloo_net::http::Request::post("/api/chat").json(&body) {
            Ok(request) => request,
            Err(e) => {
                log::error!("chat request build failed: {e}");
                return ChatReply::Failed;
            }
        };
        let resp = match request.send().await {
            Ok(resp) => resp,
            Err(e) => {
                log::error!("chat request failed: {e}");
                return ChatReply::Failed;
            }
        };
        if !resp.ok() {
            log::error!("chat relay returned status {}", resp.status());
            return ChatReply::Failed;
        }
        resp.json::<ChatReply>().await.unwrap_or_else(|e| {
            log::error!("chat reply parse failed: {e}");
            ChatReply::Failed
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        ChatReply::Failed
    }
}
