//! Deadline wrapper for any reasoner.

use async_trait::async_trait;
use parliament_application::{Reasoner, ReasonerError, ReasonerRequest};
use std::time::Duration;

/// Bounds every call of the inner reasoner; an elapsed deadline becomes
/// [`ReasonerError::Timeout`]. No retry.
pub struct TimeoutReasoner<R> {
    inner: R,
    timeout: Duration,
}

impl<R: Reasoner> TimeoutReasoner<R> {
    pub fn new(inner: R, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    pub fn with_timeout_seconds(inner: R, seconds: u64) -> Self {
        Self::new(inner, Duration::from_secs(seconds))
    }
}

#[async_trait]
impl<R: Reasoner> Reasoner for TimeoutReasoner<R> {
    async fn ask(&self, request: &ReasonerRequest) -> Result<String, ReasonerError> {
        tokio::time::timeout(self.timeout, self.inner.ask(request))
            .await
            .map_err(|_| ReasonerError::Timeout)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SlowReasoner(Duration);

    #[async_trait]
    impl Reasoner for SlowReasoner {
        async fn ask(&self, _request: &ReasonerRequest) -> Result<String, ReasonerError> {
            tokio::time::sleep(self.0).await;
            Ok("VOTE: approve".to_string())
        }
    }

    fn request() -> ReasonerRequest {
        ReasonerRequest::new("s", "{}", "p")
    }

    #[tokio::test]
    async fn test_elapsed_deadline_is_timeout() {
        let reasoner = TimeoutReasoner::new(
            SlowReasoner(Duration::from_millis(500)),
            Duration::from_millis(20),
        );
        assert_eq!(reasoner.ask(&request()).await, Err(ReasonerError::Timeout));
    }

    #[tokio::test]
    async fn test_fast_reply_passes_through() {
        let reasoner = TimeoutReasoner::with_timeout_seconds(SlowReasoner(Duration::ZERO), 5);
        assert_eq!(reasoner.ask(&request()).await.unwrap(), "VOTE: approve");
    }
}
