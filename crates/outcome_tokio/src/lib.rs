//! Turns tokio tasks into [`Outcome`]s.
//!
//! A task that panics resolves to `Error(fault)` holding the original panic
//! payload. A task that was aborted resolves to `Error(fault)` holding
//! [`Cancelled`].

use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use futures::future::FusedFuture;
use outcome::{Fault, Outcome};
use tokio::task::{JoinError, JoinHandle};

pub use outcome;

/// The fault payload of a task that was aborted before it could finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

/// A task whose completion is reported as an [`Outcome`].
///
/// Cancelling the task stays with whoever owns it: abort the `JoinHandle`
/// before handing it to [`from_join_handle`]. Once resolved, polling again
/// stays pending.
#[must_use = "futures do nothing unless you `.await` or poll them"]
#[derive(Debug)]
pub struct Joined<V> {
    handle: JoinHandle<V>,
    done: bool,
}

impl<V> Joined<V> {
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl<V> Future for Joined<V> {
    type Output = Outcome<V, Fault>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        if self.done {
            return Poll::Pending;
        }

        let res = match Pin::new(&mut self.handle).poll(cx) {
            Poll::Pending => return Poll::Pending,
            Poll::Ready(res) => res,
        };

        self.done = true;
        Poll::Ready(res.map_err(into_fault).into())
    }
}

impl<V> FusedFuture for Joined<V> {
    fn is_terminated(&self) -> bool {
        self.done
    }
}

fn into_fault(error: JoinError) -> Fault {
    if error.is_panic() {
        let fault = Fault::from_payload(error.into_panic());
        log::debug!("joined task panicked: {fault}");
        return fault;
    }

    log::warn!("joined task did not complete: {error}");
    Fault::new(Cancelled)
}

/// Reports the completion of an already spawned task.
pub fn from_join_handle<V>(handle: JoinHandle<V>) -> Joined<V> {
    Joined {
        handle,
        done: false,
    }
}

/// Spawns `future` on the current runtime.
///
/// # Panics
///
/// Panics when called outside of a tokio runtime, like [`tokio::spawn`].
pub fn spawn<F>(future: F) -> Joined<F::Output>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    from_join_handle(tokio::spawn(future))
}

/// Runs `f` on the blocking pool of the current runtime.
///
/// # Panics
///
/// Panics when called outside of a tokio runtime, like
/// [`tokio::task::spawn_blocking`].
pub fn spawn_blocking<F, V>(f: F) -> Joined<V>
where
    F: FnOnce() -> V + Send + 'static,
    V: Send + 'static,
{
    from_join_handle(tokio::task::spawn_blocking(f))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use futures::FutureExt as _;
    use outcome::{assert_error, assert_ok};

    use super::*;

    #[derive(Debug, PartialEq)]
    struct Rejected {
        reason: &'static str,
    }

    #[tokio::test]
    async fn spawned_task_completes() {
        assert_ok!(spawn(async { 1 + 1 }).await, 2);
    }

    #[tokio::test]
    async fn spawned_task_panics() {
        let fault = assert_error!(spawn(async {
            std::panic::panic_any(Rejected { reason: "bad input" })
        })
        .await);

        assert_eq!(
            fault.downcast::<Rejected>().ok(),
            Some(Rejected { reason: "bad input" })
        );
    }

    #[tokio::test]
    async fn blocking_task() {
        assert_ok!(spawn_blocking(|| "computed").await, "computed");

        let fault = assert_error!(spawn_blocking(|| -> u8 { panic!("overflow") }).await);
        assert_eq!(fault.message(), Some("overflow"));
    }

    #[tokio::test]
    async fn aborted_task() {
        let handle = tokio::spawn(async {
            tokio::time::sleep(Duration::from_secs(60)).await;
        });
        handle.abort();

        let fault = assert_error!(from_join_handle(handle).await);
        assert!(fault.is::<Cancelled>());
        assert_eq!(fault.downcast::<Cancelled>().ok(), Some(Cancelled));
    }

    #[tokio::test]
    async fn resolved_task_stays_pending() {
        let mut joined = spawn(async { 1 });
        assert!(!joined.is_terminated());

        assert_ok!((&mut joined).await, 1);
        assert!(joined.is_terminated());

        let again = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            (&mut joined).now_or_never().is_none()
        }));
        assert!(matches!(again, Ok(true)));
    }

    #[tokio::test]
    async fn existing_handle() -> anyhow::Result<()> {
        let (tx, rx) = tokio::sync::oneshot::channel();
        let handle = tokio::spawn(async move { rx.await.map(|n: u32| n * 10) });

        tx.send(4).map_err(|_| anyhow::anyhow!("receiver dropped"))?;

        let received = assert_ok!(from_join_handle(handle).await)?;
        assert_eq!(received, 40);
        Ok(())
    }

    #[tokio::test]
    async fn combinators_after_join() {
        let label = spawn(async { 404_u16 })
            .await
            .map(|code| code / 100)
            .flat_map(|class| match class {
                4 => Outcome::Error(Fault::new("client error")),
                _ => Outcome::Ok(class),
            })
            .match_with(|class| format!("ok {class}xx"), |fault| fault.to_string());

        assert_eq!(label, "client error");
    }
}
