use std::{
    any::Any,
    future::Future,
    panic::{catch_unwind, AssertUnwindSafe},
    pin::Pin,
    task::{Context, Poll},
};

use futures::future::FusedFuture;

use crate::{Fault, Outcome};

/// Future returned by [`Outcome::from_future`].
#[pin_project::pin_project]
#[must_use = "futures do nothing unless you `.await` or poll them"]
#[derive(Debug)]
pub struct FromFuture<F> {
    #[pin]
    inner: F,
    done: bool,
}

/// Future returned by [`Outcome::from_try_future`].
#[pin_project::pin_project]
#[must_use = "futures do nothing unless you `.await` or poll them"]
#[derive(Debug)]
pub struct FromTryFuture<F> {
    #[pin]
    inner: F,
    done: bool,
}

impl<V> Outcome<V, Fault> {
    /// Adapts a future so that it resolves to `Ok(value)`, or to
    /// `Error(fault)` if polling it panics.
    ///
    /// The adapter polls `future` in place and resolves in the same poll the
    /// source completes in. Dropping the adapter drops the source. After it
    /// has resolved once it stays pending forever (see [`FusedFuture`]).
    pub fn from_future<F>(future: F) -> FromFuture<F>
    where
        F: Future<Output = V>,
    {
        FromFuture {
            inner: future,
            done: false,
        }
    }

    /// Like [`Outcome::from_future`] for futures that complete with a
    /// `Result`. The `Err` value becomes the fault payload unchanged, so it
    /// can be recovered with [`Fault::downcast`].
    pub fn from_try_future<F, X>(future: F) -> FromTryFuture<F>
    where
        F: Future<Output = Result<V, X>>,
        X: Any + Send + 'static,
    {
        FromTryFuture {
            inner: future,
            done: false,
        }
    }
}

fn poll_captured<F>(inner: Pin<&mut F>, cx: &mut Context<'_>) -> Poll<Result<F::Output, Fault>>
where
    F: Future,
{
    match catch_unwind(AssertUnwindSafe(|| inner.poll(cx))) {
        Ok(Poll::Pending) => Poll::Pending,
        Ok(Poll::Ready(value)) => Poll::Ready(Ok(value)),
        Err(payload) => {
            let fault = Fault::from_payload(payload);
            log::debug!("captured fault while polling: {fault}");
            Poll::Ready(Err(fault))
        }
    }
}

impl<F> Future for FromFuture<F>
where
    F: Future,
{
    type Output = Outcome<F::Output, Fault>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        if *this.done {
            return Poll::Pending;
        }

        let output = match poll_captured(this.inner, cx) {
            Poll::Pending => return Poll::Pending,
            Poll::Ready(output) => output,
        };

        *this.done = true;
        Poll::Ready(output.into())
    }
}

impl<F> FusedFuture for FromFuture<F>
where
    F: Future,
{
    fn is_terminated(&self) -> bool {
        self.done
    }
}

impl<F, V, X> Future for FromTryFuture<F>
where
    F: Future<Output = Result<V, X>>,
    X: Any + Send + 'static,
{
    type Output = Outcome<V, Fault>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        if *this.done {
            return Poll::Pending;
        }

        let output = match poll_captured(this.inner, cx) {
            Poll::Pending => return Poll::Pending,
            Poll::Ready(output) => output,
        };

        *this.done = true;
        Poll::Ready(match output {
            Ok(Ok(value)) => Outcome::Ok(value),
            Ok(Err(error)) => {
                let fault = Fault::new(error);
                log::debug!("future completed with an error: {fault}");
                Outcome::Error(fault)
            }
            Err(fault) => Outcome::Error(fault),
        })
    }
}

impl<F, V, X> FusedFuture for FromTryFuture<F>
where
    F: Future<Output = Result<V, X>>,
    X: Any + Send + 'static,
{
    fn is_terminated(&self) -> bool {
        self.done
    }
}
