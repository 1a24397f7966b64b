//! Scripted generation client for tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::GenerationClient;

/// A [`GenerationClient`] that replays canned responses in order.
///
/// Once the script is exhausted, every further call returns an error-shaped
/// string, matching the weak contract of the real client.
pub struct ScriptedClient {
    responses: Mutex<VecDeque<String>>,
}

impl ScriptedClient {
    /// Create a client that returns `responses` in order.
    pub fn new(responses: Vec<String>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
        }
    }

    /// Convenience constructor for a single canned response.
    pub fn single(response: impl Into<String>) -> Self {
        Self::new(vec![response.into()])
    }
}

#[async_trait]
impl GenerationClient for ScriptedClient {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn generate(&self, _prompt: &str) -> String {
        let mut responses = self.responses.lock().unwrap_or_else(|e| e.into_inner());
        responses
            .pop_front()
            .unwrap_or_else(|| "scripted client exhausted its responses".to_string())
    }
}
