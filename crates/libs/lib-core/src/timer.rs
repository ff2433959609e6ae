//! Timer seam and provider-call timeouts.

use std::future::Future;

use async_trait::async_trait;
use futures::future::{select, Either};
use futures::pin_mut;

use crate::error::{ConnectError, Result};

/// Suspends the current flow without blocking the event loop.
#[async_trait(?Send)]
pub trait Timer {
    async fn sleep(&self, ms: u32);
}

/// Race `fut` against `timer` when a limit is configured.
pub async fn with_timeout<T, F>(timer: &dyn Timer, limit_ms: Option<u32>, fut: F) -> Result<T>
where
    F: Future<Output = T>,
{
    let Some(limit_ms) = limit_ms else {
        return Ok(fut.await);
    };

    let sleep = timer.sleep(limit_ms);
    pin_mut!(fut);
    match select(fut, sleep).await {
        Either::Left((value, _)) => Ok(value),
        Either::Right(((), _)) => Err(ConnectError::ProviderTimeout(limit_ms)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TokioTimer;

    #[async_trait(?Send)]
    impl Timer for TokioTimer {
        async fn sleep(&self, ms: u32) {
            tokio::time::sleep(std::time::Duration::from_millis(ms as u64)).await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_without_limit_waits() {
        let value = with_timeout(&TokioTimer, None, async {
            tokio::time::sleep(std::time::Duration::from_secs(60)).await;
            7
        })
        .await;
        assert_eq!(value, Ok(7));
    }

    #[tokio::test(start_paused = true)]
    async fn test_limit_expires() {
        let value = with_timeout(&TokioTimer, Some(100), futures::future::pending::<u8>()).await;
        assert_eq!(value, Err(ConnectError::ProviderTimeout(100)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fast_call_wins() {
        let value = with_timeout(&TokioTimer, Some(100), async { "ok" }).await;
        assert_eq!(value, Ok("ok"));
    }
}
