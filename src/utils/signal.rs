use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

#[cfg(not(unix))]
use futures::future::BoxFuture;
#[cfg(unix)]
use tokio::signal::unix::{Signal, SignalKind};

/// Resolves once the process receives SIGINT, SIGTERM or SIGQUIT (ctrl-c elsewhere).
pub struct SignalHandler {
    #[cfg(unix)]
    signals: smallvec::SmallVec<[(SignalKind, Signal); 3]>,
    #[cfg(not(unix))]
    signal: BoxFuture<'static, std::io::Result<()>>,
}

impl SignalHandler {
    #[cfg(unix)]
    pub fn new() -> Self {
        use tokio::signal::unix;

        trace!("registering signal listeners");

        let signals = [
            SignalKind::interrupt(),
            SignalKind::terminate(),
            SignalKind::quit(),
        ]
        .into_iter()
        .filter_map(|kind| match unix::signal(kind) {
            Ok(signal) => Some((kind, signal)),
            Err(error) => {
                error!("failed to listen for signal {kind:?}: {error}");
                None
            }
        })
        .collect();

        Self { signals }
    }

    #[cfg(not(unix))]
    pub fn new() -> Self {
        trace!("registering ctrl-c listener");

        Self {
            signal: Box::pin(tokio::signal::ctrl_c()),
        }
    }
}

impl Default for SignalHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Future for SignalHandler {
    type Output = ();

    #[cfg(unix)]
    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        for (kind, signal) in &mut self.signals {
            if signal.poll_recv(cx).is_ready() {
                info!("received {kind:?}, shutting down");
                return Poll::Ready(());
            }
        }

        Poll::Pending
    }

    #[cfg(not(unix))]
    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        if self.signal.as_mut().poll(cx).is_ready() {
            info!("received ctrl-c, shutting down");
            return Poll::Ready(());
        }

        Poll::Pending
    }
}
