#[cfg(test)]
#[path = "replies_test.rs"]
mod tests;

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::domain::models::Author;
use crate::domain::models::Event;
use crate::domain::models::OverlapPolicy;
use crate::domain::models::ReplyPolicyBox;
use crate::domain::models::ReplyPrompt;
use crate::domain::models::ReplyResponse;

/// Handle to a reply that has been requested but hasn't landed yet.
pub struct PendingReply {
    pub request_id: u64,
    handle: JoinHandle<()>,
}

impl PendingReply {
    pub fn cancel(&self) {
        self.handle.abort();
    }
}

/// Runs the reply policy off the UI loop and reports back through `Event`s.
/// Each request is a task that can be cancelled, either explicitly or by a
/// newer request when the overlap policy is `supersede`.
pub struct ReplyScheduler {
    policy: Arc<ReplyPolicyBox>,
    overlap: OverlapPolicy,
    pending: Vec<PendingReply>,
    tx: mpsc::UnboundedSender<Event>,
}

impl ReplyScheduler {
    pub fn new(
        policy: ReplyPolicyBox,
        overlap: OverlapPolicy,
        tx: mpsc::UnboundedSender<Event>,
    ) -> ReplyScheduler {
        return ReplyScheduler {
            policy: Arc::new(policy),
            overlap,
            pending: vec![],
            tx,
        };
    }

    pub fn schedule(&mut self, prompt: ReplyPrompt) {
        if self.overlap == OverlapPolicy::Supersede {
            self.cancel_all();
        }

        let request_id = prompt.request_id;
        let policy = self.policy.clone();
        let tx = self.tx.clone();

        let handle = tokio::spawn(async move {
            let event = match policy.get_reply(&prompt).await {
                Ok(text) => Event::ReplyReady(ReplyResponse {
                    request_id,
                    author: Author::Assistant,
                    text,
                }),
                Err(err) => {
                    tracing::error!(request_id, error = ?err, "reply policy failed");
                    Event::ReplyFailed(request_id, err.to_string())
                }
            };

            if tx.send(event).is_err() {
                tracing::warn!(request_id, "UI closed before reply landed");
            }
        });

        tracing::debug!(
            request_id,
            policy = self.policy.name().to_string(),
            overlap = self.overlap.to_string(),
            "reply scheduled"
        );
        self.pending.push(PendingReply { request_id, handle });
    }

    /// Marks a request as finished. Returns false when the request was
    /// cancelled or superseded, meaning its reply must be dropped.
    pub fn complete(&mut self, request_id: u64) -> bool {
        let position = self
            .pending
            .iter()
            .position(|pending| return pending.request_id == request_id);

        if let Some(idx) = position {
            self.pending.remove(idx);
            return true;
        }

        return false;
    }

    pub fn cancel_all(&mut self) {
        for pending in self.pending.drain(..) {
            tracing::debug!(request_id = pending.request_id, "reply cancelled");
            pending.cancel();
        }
    }

    pub fn is_composing(&self) -> bool {
        return !self.pending.is_empty();
    }

    #[cfg(test)]
    pub fn pending_ids(&self) -> Vec<u64> {
        return self
            .pending
            .iter()
            .map(|pending| return pending.request_id)
            .collect();
    }
}

impl Drop for ReplyScheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
