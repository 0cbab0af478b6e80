// Concurrent batch dispatch for rate-limit probing
//
// A fixed-size batch of identical requests is fired at once and all
// outcomes are awaited jointly before anything is asserted. Completion
// order is irrelevant; each response is judged on its own.

use futures_util::future::join_all;
use std::future::Future;

use crate::core::VerifyError;

use super::response::ApiResponse;

/// Joint result of one concurrent batch
#[derive(Debug)]
pub struct BatchOutcome {
    /// Status codes of the responses that arrived
    pub statuses: Vec<u16>,
    /// Transport-level failures (no response at all)
    pub failures: Vec<VerifyError>,
}

impl BatchOutcome {
    /// True when every request produced a response whose status is in the
    /// accepted set, with no transport failures.
    pub fn all_within(&self, accepted: &[u16]) -> bool {
        self.failures.is_empty() && self.statuses.iter().all(|s| accepted.contains(s))
    }

    pub fn count_of(&self, status: u16) -> usize {
        self.statuses.iter().filter(|&&s| s == status).count()
    }

    pub fn any_server_error(&self) -> bool {
        self.statuses.iter().any(|&s| s >= 500)
    }

    pub fn len(&self) -> usize {
        self.statuses.len() + self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Fire `n` identical requests concurrently and await all outcomes jointly.
///
/// The factory builds one request future per slot; futures run on the
/// current task, interleaved at await points.
pub async fn fire_batch<F, Fut>(n: usize, factory: F) -> BatchOutcome
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<ApiResponse, VerifyError>>,
{
    let calls: Vec<_> = (0..n).map(|_| factory()).collect();
    let results = join_all(calls).await;

    let mut statuses = Vec::with_capacity(n);
    let mut failures = Vec::new();
    for result in results {
        match result {
            Ok(response) => statuses.push(response.status),
            Err(err) => failures.push(err),
        }
    }

    BatchOutcome { statuses, failures }
}
