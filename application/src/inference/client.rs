//! Inference client with bounded retries and exponential backoff

use super::error::InferenceError;
use crate::ports::inference_transport::{InferenceRequest, InferenceTransport, TransportError};
use crate::ports::response_repair::{NoRepair, ResponseRepair};
use jobshift_domain::{InferenceParams, RetryPolicy};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// Why a single attempt failed
enum AttemptFailure {
    Transport(TransportError),
    Shape(String),
}

impl AttemptFailure {
    fn into_error(self, attempts: u32) -> InferenceError {
        match self {
            AttemptFailure::Transport(source) => InferenceError::Transient { attempts, source },
            AttemptFailure::Shape(detail) => InferenceError::ResponseShape { attempts, detail },
        }
    }
}

impl std::fmt::Display for AttemptFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttemptFailure::Transport(e) => write!(f, "{}", e),
            AttemptFailure::Shape(detail) => write!(f, "{}", detail),
        }
    }
}

/// Client for one text-generation backend
///
/// Every failure kind (connection, service error, malformed body) is
/// retried under the same [`RetryPolicy`]. Missing configuration is
/// reported before the first call and never retried. The client keeps no
/// state between invocations.
pub struct InferenceClient {
    transport: Arc<dyn InferenceTransport>,
    params: InferenceParams,
    retry: RetryPolicy,
    repair: Arc<dyn ResponseRepair>,
}

impl InferenceClient {
    pub fn new(transport: Arc<dyn InferenceTransport>, params: InferenceParams) -> Self {
        Self {
            transport,
            params,
            retry: RetryPolicy::default(),
            repair: Arc::new(NoRepair),
        }
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Select the repair strategy for malformed bodies
    pub fn with_repair(mut self, repair: Arc<dyn ResponseRepair>) -> Self {
        self.repair = repair;
        self
    }

    pub fn params(&self) -> &InferenceParams {
        &self.params
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    /// Send `prompt` and return the generated text.
    ///
    /// Makes at most `retry.attempts()` transport calls, sleeping
    /// `retry.delay_for(i)` after each failed attempt that is not the last.
    pub async fn invoke(&self, prompt: &str) -> Result<String, InferenceError> {
        self.transport
            .ensure_configured()
            .map_err(InferenceError::Configuration)?;

        if prompt.trim().is_empty() {
            return Err(InferenceError::InvalidRequest(
                "prompt is empty".to_string(),
            ));
        }

        let request = InferenceRequest::new(&self.params, prompt);
        let attempts = self.retry.attempts();
        let mut attempt = 0;

        loop {
            match self.attempt(&request).await {
                Ok(text) => {
                    debug!(
                        transport = self.transport.name(),
                        model = %self.params.model_id,
                        attempt = attempt + 1,
                        chars = text.len(),
                        "Inference call succeeded"
                    );
                    return Ok(text);
                }
                Err(failure) => {
                    // No sleep after the last attempt
                    if !self.retry.has_next(attempt) {
                        warn!(
                            transport = self.transport.name(),
                            attempts,
                            "Inference failed, retry budget exhausted: {}",
                            failure
                        );
                        return Err(failure.into_error(attempts));
                    }

                    let delay = self.retry.delay_for(attempt);
                    warn!(
                        transport = self.transport.name(),
                        attempt = attempt + 1,
                        max_attempts = attempts,
                        delay_ms = delay.as_millis() as u64,
                        "Inference attempt failed, retrying: {}",
                        failure
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }

    async fn attempt(&self, request: &InferenceRequest) -> Result<String, AttemptFailure> {
        let body = self
            .transport
            .send(request)
            .await
            .map_err(AttemptFailure::Transport)?;
        self.decode(&body).map_err(AttemptFailure::Shape)
    }

    /// Locate the generated text, falling back to the repair strategy
    fn decode(&self, body: &str) -> Result<String, String> {
        let format = self.transport.response_format();

        let first_error = match serde_json::from_str::<Value>(body) {
            Ok(envelope) => match format.extract_text(&envelope) {
                Some(text) => return Ok(text),
                None => format!(
                    "field '{}' missing from response",
                    format.text_pointer()
                ),
            },
            Err(e) => format!("unparsable response body: {}", e),
        };

        debug!("Response decode failed ({}), attempting repair", first_error);

        self.repair
            .repair(body)
            .and_then(|value| format.extract_text(&value))
            .ok_or(first_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use jobshift_domain::ResponseFormat;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::time::Instant;

    // ==================== Test Mocks ====================

    struct ScriptedTransport {
        replies: Mutex<VecDeque<Result<String, TransportError>>>,
        calls: AtomicUsize,
        configured: bool,
    }

    impl ScriptedTransport {
        fn new(replies: Vec<Result<String, TransportError>>) -> Self {
            Self {
                replies: Mutex::new(VecDeque::from(replies)),
                calls: AtomicUsize::new(0),
                configured: true,
            }
        }

        fn unconfigured() -> Self {
            Self {
                configured: false,
                ..Self::new(vec![])
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl InferenceTransport for ScriptedTransport {
        fn name(&self) -> &str {
            "scripted"
        }

        fn response_format(&self) -> ResponseFormat {
            ResponseFormat::OllamaGenerate
        }

        fn ensure_configured(&self) -> Result<(), String> {
            if self.configured {
                Ok(())
            } else {
                Err("credentials not found".to_string())
            }
        }

        async fn send(&self, _request: &InferenceRequest) -> Result<String, TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(TransportError::Connection("script exhausted".into())))
        }
    }

    struct StripFences;

    impl ResponseRepair for StripFences {
        fn repair(&self, raw: &str) -> Option<Value> {
            let inner = raw
                .trim()
                .trim_start_matches("```json")
                .trim_end_matches("```");
            serde_json::from_str(inner.trim()).ok()
        }
    }

    fn ok(text: &str) -> Result<String, TransportError> {
        Ok(serde_json::json!({ "response": text }).to_string())
    }

    fn refused() -> Result<String, TransportError> {
        Err(TransportError::Connection("connection refused".into()))
    }

    fn client(transport: &Arc<ScriptedTransport>) -> InferenceClient {
        InferenceClient::new(transport.clone(), InferenceParams::new("llama3"))
    }

    // ==================== Tests ====================

    #[tokio::test(start_paused = true)]
    async fn test_first_attempt_success() {
        let transport = Arc::new(ScriptedTransport::new(vec![ok("hello")]));
        let text = client(&transport).invoke("say hello").await.unwrap();
        assert_eq!(text, "hello");
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_transient_failures_then_success() {
        for k in 0..3usize {
            let mut replies: Vec<_> = (0..k).map(|_| refused()).collect();
            replies.push(ok("recovered"));
            let transport = Arc::new(ScriptedTransport::new(replies));

            let text = client(&transport).invoke("prompt").await.unwrap();

            assert_eq!(text, "recovered");
            assert_eq!(transport.calls(), k + 1);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_backoff_delays_between_attempts() {
        let transport = Arc::new(ScriptedTransport::new(vec![
            refused(),
            Err(TransportError::service(Some(500), "boom")),
            ok("done"),
        ]));
        let start = Instant::now();

        client(&transport).invoke("prompt").await.unwrap();

        // 1s after the first failure, 2s after the second
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_secs(3), "{elapsed:?}");
        assert!(elapsed < Duration::from_secs(4), "{elapsed:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn test_exhaustion_reports_last_transport_error() {
        let transport = Arc::new(ScriptedTransport::new(vec![
            refused(),
            refused(),
            Err(TransportError::service(Some(503), "unavailable")),
            ok("never reached"),
        ]));

        let err = client(&transport).invoke("prompt").await.unwrap_err();

        assert_eq!(transport.calls(), 3);
        assert_eq!(
            err,
            InferenceError::Transient {
                attempts: 3,
                source: TransportError::service(Some(503), "unavailable"),
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_exhaustion_caps_delay_and_skips_final_sleep() {
        let transport = Arc::new(ScriptedTransport::new(vec![]));
        let client = client(&transport).with_retry_policy(
            RetryPolicy::new(4).with_max_delay(Some(Duration::from_secs(2))),
        );
        let start = Instant::now();

        let err = client.invoke("prompt").await.unwrap_err();

        // 1s + 2s + 2s (capped), nothing after the fourth failure
        let elapsed = start.elapsed();
        assert_eq!(transport.calls(), 4);
        assert!(matches!(err, InferenceError::Transient { attempts: 4, .. }));
        assert!(elapsed >= Duration::from_secs(5), "{elapsed:?}");
        assert!(elapsed < Duration::from_secs(6), "{elapsed:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_attempt_budget() {
        let transport = Arc::new(ScriptedTransport::new(vec![]));
        let client = client(&transport).with_retry_policy(
            RetryPolicy::new(5).with_backoff_base(Duration::from_millis(10)),
        );

        let err = client.invoke("prompt").await.unwrap_err();

        assert_eq!(transport.calls(), 5);
        assert!(matches!(err, InferenceError::Transient { attempts: 5, .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_attempts_still_calls_once() {
        let transport = Arc::new(ScriptedTransport::new(vec![refused()]));
        let client = client(&transport).with_retry_policy(RetryPolicy::new(0));

        let err = client.invoke("prompt").await.unwrap_err();

        assert_eq!(transport.calls(), 1);
        assert!(matches!(err, InferenceError::Transient { attempts: 1, .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_missing_configuration_fails_fast() {
        let transport = Arc::new(ScriptedTransport::unconfigured());

        let err = client(&transport).invoke("prompt").await.unwrap_err();

        assert_eq!(transport.calls(), 0);
        assert_eq!(
            err,
            InferenceError::Configuration("credentials not found".to_string())
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_prompt_rejected() {
        let transport = Arc::new(ScriptedTransport::new(vec![ok("x")]));
        let err = client(&transport).invoke("   ").await.unwrap_err();
        assert!(matches!(err, InferenceError::InvalidRequest(_)));
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_malformed_body_recovered_by_repair() {
        let transport = Arc::new(ScriptedTransport::new(vec![Ok(
            "```json\n{\"response\": \"fenced\"}\n```".to_string(),
        )]));
        let client = client(&transport).with_repair(Arc::new(StripFences));

        let text = client.invoke("prompt").await.unwrap();

        assert_eq!(text, "fenced");
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_malformed_body_without_repair_is_retried() {
        let transport = Arc::new(ScriptedTransport::new(vec![
            Ok("{\"response\": \"trunc".to_string()),
            ok("second try"),
        ]));

        let text = client(&transport).invoke("prompt").await.unwrap();

        assert_eq!(text, "second try");
        assert_eq!(transport.calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_missing_field_exhausts_as_shape_error() {
        let body = || Ok("{\"done\": true}".to_string());
        let transport = Arc::new(ScriptedTransport::new(vec![body(), body(), body()]));

        let err = client(&transport).invoke("prompt").await.unwrap_err();

        assert_eq!(transport.calls(), 3);
        match err {
            InferenceError::ResponseShape { attempts, detail } => {
                assert_eq!(attempts, 3);
                assert!(detail.contains("/response"), "{detail}");
            }
            other => panic!("Expected ResponseShape, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_text_is_success() {
        let transport = Arc::new(ScriptedTransport::new(vec![ok("")]));
        let text = client(&transport).invoke("prompt").await.unwrap();
        assert_eq!(text, "");
        assert_eq!(transport.calls(), 1);
    }
}
