//! Suggestion backend: mood and itinerary prompts.

use std::sync::Arc;

use skycast_suggest::SuggestionClient;
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;

use crate::request::RequestId;

#[derive(Debug)]
pub enum SuggestionServiceMessage {
    /// Provider text or a placeholder; suggestions never fail.
    SuggestionDone { request_id: RequestId, text: String },
}

pub fn request_suggestion<M>(
    tx: &UnboundedSender<M>,
    runtime: &Handle,
    client: Arc<SuggestionClient>,
    request_id: RequestId,
    prompt: String,
) where
    M: From<SuggestionServiceMessage> + Send + 'static,
{
    let tx = tx.clone();
    runtime.spawn(async move {
        let text = client.suggest(&prompt).await;
        let _ = tx.send(M::from(SuggestionServiceMessage::SuggestionDone {
            request_id,
            text,
        }));
    });
}
