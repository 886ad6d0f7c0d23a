use std::time::Duration;

use crate::application::ports::{GenerationConfig, LlmClient, LlmClientError};

const MOCK_ANALYSIS: &str = "1. Clarity and Effectiveness: Your request was clear and stated the dates up front.

2. Tone and Professionalism: Polite and friendly, appropriate for the front desk.

3. Areas for Improvement: Confirm the price and ask about cancellation terms.

4. Example: \"Could you also tell me the nightly rate and whether breakfast is included?\"";

/// Offline stand-in used in scaffold mode.
pub struct MockLlmClient {
    delay: Duration,
}

impl MockLlmClient {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn generate(
        &self,
        _prompt: &str,
        _config: &GenerationConfig,
    ) -> Result<String, LlmClientError> {
        tokio::time::sleep(self.delay).await;
        Ok(MOCK_ANALYSIS.to_string())
    }
}
