use std::sync::{Arc, Mutex};

use crate::errors::ProviderError;
use crate::providers::base::{GenerateContentConfig, Provider};
use crate::providers::types::message::Turn;
use crate::providers::types::response::GenerateContentResponse;

/// A mock provider that returns pre-configured replies for testing
pub struct MockProvider {
    responses: Arc<Mutex<Vec<Turn>>>,
    requests: Arc<Mutex<Vec<Vec<Turn>>>>,
}

impl MockProvider {
    /// Create a new mock provider with a sequence of replies
    pub fn new(responses: Vec<Turn>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Handle onto the histories the provider was sent, in call order
    pub fn requests(&self) -> Arc<Mutex<Vec<Vec<Turn>>>> {
        Arc::clone(&self.requests)
    }
}

impl Provider for MockProvider {
    fn generate_content(
        &self,
        _model: &str,
        contents: &[Turn],
        _config: &GenerateContentConfig,
    ) -> Result<GenerateContentResponse, ProviderError> {
        self.requests.lock().unwrap().push(contents.to_vec());

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            // Return an empty reply if no more pre-configured replies
            Ok(GenerateContentResponse::from_turn(Turn::model("")))
        } else {
            Ok(GenerateContentResponse::from_turn(responses.remove(0)))
        }
    }
}
