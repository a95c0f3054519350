//! Scripted completion backend for tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::CompletionBackend;
use super::error::ProviderError;

#[derive(Debug, Clone)]
enum MockFailure {
    MissingKey,
    Api(String),
}

/// In-memory [`CompletionBackend`] that replays scripted replies (or a
/// scripted failure) and records every prompt it was handed.
#[derive(Debug)]
pub struct MockBackend {
    replies: Mutex<VecDeque<String>>,
    failure: Option<MockFailure>,
    prompts: Mutex<Vec<String>>,
}

impl MockBackend {
    /// Replies with `text` on every call.
    pub fn replying(text: impl Into<String>) -> Self {
        Self::with_replies(vec![text.into()])
    }

    /// Replies with each entry in turn; the final entry repeats once the
    /// script is exhausted.
    pub fn with_replies(replies: Vec<String>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            failure: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Fails every call with [`ProviderError::MissingApiKey`].
    pub fn missing_key() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            failure: Some(MockFailure::MissingKey),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Fails every call with [`ProviderError::Api`] carrying `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            failure: Some(MockFailure::Api(message.into())),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts seen so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().expect("prompts lock").clone()
    }
}

#[async_trait]
impl CompletionBackend for MockBackend {
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        self.prompts
            .lock()
            .expect("prompts lock")
            .push(prompt.to_string());

        if let Some(failure) = &self.failure {
            return Err(match failure {
                MockFailure::MissingKey => ProviderError::MissingApiKey,
                MockFailure::Api(message) => ProviderError::Api {
                    message: message.clone(),
                },
            });
        }

        let mut replies = self.replies.lock().expect("replies lock");
        match replies.len() {
            0 => Err(ProviderError::EmptyResponse),
            1 => Ok(replies.front().cloned().unwrap_or_default()),
            _ => Ok(replies.pop_front().unwrap_or_default()),
        }
    }
}
