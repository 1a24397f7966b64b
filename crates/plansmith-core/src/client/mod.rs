//! The `GenerationClient` trait -- the boundary to the text-generation
//! service.
//!
//! The trait is object-safe so callers can hold a `Box<dyn GenerationClient>`
//! and tests can substitute a scripted implementation.

pub mod mock;
pub mod openai;

use async_trait::async_trait;

pub use mock::ScriptedClient;
pub use openai::{ClientConfig, OpenAiClient};

/// Adapter interface for the external text-generation service.
///
/// # The weak contract
///
/// `generate` returns a plain `String` even on transport failure: the
/// error's display text is returned *as if it were generated content*. This
/// mirrors the service boundary as deployed -- callers must treat every
/// result, however plausible, as untrusted until it survives strict decoding
/// by [`crate::plan::parse_plan_response`].
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Human-readable name for this client (e.g. "openai"), for logs.
    fn name(&self) -> &str;

    /// Send a prompt and return the raw response text.
    ///
    /// On transport failure the error description is the return value; see
    /// the trait-level contract note.
    async fn generate(&self, prompt: &str) -> String;
}

// Compile-time assertion: GenerationClient must be object-safe.
const _: () = {
    fn _assert_object_safe(_: &dyn GenerationClient) {}
};

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn trait_is_usable_as_a_boxed_object() {
        let client: Box<dyn GenerationClient> =
            Box::new(ScriptedClient::new(vec!["canned".to_string()]));
        assert_eq!(client.name(), "scripted");
        assert_eq!(client.generate("anything").await, "canned");
    }
}
