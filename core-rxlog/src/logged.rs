//! The instrumented stream adapter.

use std::fmt;
use std::future::Future;
use std::marker::PhantomData;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;

use crate::flavor::{Classify, FlavorKind};
use crate::selector::TapPlan;
use crate::tap::TapChain;

/// A stream or future of flavor `K` with lifecycle taps attached.
///
/// Every output of the upstream is handed to the consumer unchanged and in
/// the same poll it was produced. The first poll counts as the
/// subscription; dropping the adapter after that and before a terminal
/// output counts as a dispose.
///
/// `Logged` implements [`Future`] when wrapping a [`Single`](crate::Single),
/// [`Maybe`](crate::Maybe) or [`Completable`](crate::Completable) future,
/// and [`Stream`] when wrapping an [`Observable`](crate::Observable) stream.
#[must_use = "streams and futures do nothing unless polled"]
pub struct Logged<S, K> {
    // Declared first so a dispose is logged before the upstream is torn down.
    taps: TapChain,
    inner: Pin<Box<S>>,
    _flavor: PhantomData<fn() -> K>,
}

impl<S, K> Logged<S, K> {
    pub(crate) fn new(upstream: S, taps: TapChain) -> Self {
        Self {
            taps,
            inner: Box::pin(upstream),
            _flavor: PhantomData,
        }
    }

    pub fn tag(&self) -> &str {
        self.taps.tag()
    }

    pub fn flavor(&self) -> FlavorKind {
        self.taps.flavor()
    }

    /// Taps attached to this stream.
    pub fn plan(&self) -> TapPlan {
        self.taps.plan()
    }
}

impl<F, K> Future for Logged<F, K>
where
    F: Future,
    K: Classify<F::Output>,
{
    type Output = F::Output;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = &mut *self;
        this.taps.on_poll();

        match this.inner.as_mut().poll(cx) {
            Poll::Ready(output) => {
                this.taps.on_signal(K::classify(&output));
                Poll::Ready(output)
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

impl<S, K> Stream for Logged<S, K>
where
    S: Stream,
    K: Classify<Option<S::Item>>,
{
    type Item = S::Item;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = &mut *self;
        this.taps.on_poll();

        match this.inner.as_mut().poll_next(cx) {
            Poll::Ready(item) => {
                this.taps.on_signal(K::classify(&item));
                Poll::Ready(item)
            }
            Poll::Pending => Poll::Pending,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        Stream::size_hint(&self.inner)
    }
}

impl<S, K> fmt::Debug for Logged<S, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logged")
            .field("taps", &self.taps)
            .finish_non_exhaustive()
    }
}
