//! Shared OpenAI client
//!
//! Single client handed to the verdict pipeline, which builds a structured
//! extractor per request on top of it.

use rig::providers::openai;

/// Shared OpenAI client wrapper
#[derive(Clone)]
pub struct LlmClient {
    client: openai::Client,
}

impl LlmClient {
    /// Create a client with the provided API key
    pub fn new(api_key: &str) -> Result<Self, String> {
        let client = openai::Client::new(api_key);

        Ok(Self { client })
    }

    /// Reference to the underlying client, for building verdict extractors
    pub fn openai_client(&self) -> &openai::Client {
        &self.client
    }
}
