//! Opacity fades driven by CSS transitions.
//!
//! A fade sets up the transition synchronously, flips the opacity on the next
//! animation frame so the starting state has been rendered, and cleans up once
//! the duration has elapsed. Each fade returns a [`Completion`] that resolves
//! at that point.
//!
//! Overlapping fades on one element are not coordinated: whichever write to
//! the inline style lands last wins.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::channel::oneshot;
use futures::{ready, FutureExt};

use crate::platform::Platform;
use crate::target::{resolve, Target};

/// Default fade duration in milliseconds.
pub const DEFAULT_FADE_MS: u32 = 300;

/// Default `display` value restored by [`fade_in`].
pub const DEFAULT_FADE_DISPLAY: &str = "block";

/// Resolves with `()` once a fade has finished.
///
/// A fade whose target did not resolve returns an already-completed signal.
/// If the host drops the scheduled callback the signal resolves as well; it
/// never reports a failure.
#[derive(Debug)]
pub struct Completion {
    receiver: Option<oneshot::Receiver<()>>,
}

impl Completion {
    /// A signal that is already complete.
    pub fn ready() -> Self {
        Self { receiver: None }
    }

    fn channel() -> (oneshot::Sender<()>, Self) {
        let (sender, receiver) = oneshot::channel();
        (
            sender,
            Self {
                receiver: Some(receiver),
            },
        )
    }

    /// Whether the fade has finished, without waiting.
    pub fn is_complete(&mut self) -> bool {
        match self.receiver.as_mut() {
            None => true,
            Some(receiver) => !matches!(receiver.try_recv(), Ok(None)),
        }
    }
}

impl Future for Completion {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        let Some(receiver) = self.receiver.as_mut() else {
            return Poll::Ready(());
        };
        // Cancelled means the callback was dropped; that still counts as done.
        let _ = ready!(receiver.poll_unpin(cx));
        self.receiver = None;
        Poll::Ready(())
    }
}

fn transition(ms: u32) -> String {
    format!("opacity {}ms", ms)
}

/// Fades the target in over [`DEFAULT_FADE_MS`] with `display: block`.
pub fn fade_in<'a, P: Platform>(platform: &P, target: impl Into<Target<'a, P>>) -> Completion {
    fade_in_with(platform, target, DEFAULT_FADE_MS, DEFAULT_FADE_DISPLAY)
}

/// Fades the target in over `ms` milliseconds, showing it with the given
/// `display` value.
///
/// # Example
///
/// ```rust
/// use futures::FutureExt;
/// use outstanding_dom::{fade_in_with, MemoryDom};
///
/// let dom = MemoryDom::new();
/// let toast = dom.create("div#toast").unwrap();
/// let done = fade_in_with(&dom, "#toast", 150, "flex");
///
/// dom.advance(150);
/// assert!(done.now_or_never().is_some());
/// assert_eq!(dom.style(toast, "opacity").as_deref(), Some("1"));
/// assert_eq!(dom.style(toast, "display").as_deref(), Some("flex"));
/// ```
pub fn fade_in_with<'a, P: Platform>(
    platform: &P,
    target: impl Into<Target<'a, P>>,
    ms: u32,
    display_value: &str,
) -> Completion {
    let Some(element) = resolve(platform, target.into()) else {
        return Completion::ready();
    };

    platform.set_style_property(&element, "opacity", "0");
    platform.set_style_property(&element, "display", display_value);
    platform.set_style_property(&element, "transition", &transition(ms));

    let (done, completion) = Completion::channel();
    let frame_platform = platform.clone();
    platform.request_animation_frame(Box::new(move || {
        frame_platform.set_style_property(&element, "opacity", "1");
        let timer_platform = frame_platform.clone();
        let scheduled = frame_platform.set_timeout(
            Box::new(move || {
                timer_platform.set_style_property(&element, "transition", "");
                let _ = done.send(());
            }),
            ms,
        );
        if scheduled.is_none() {
            tracing::debug!("fade-in timer not scheduled");
        }
    }));
    tracing::debug!(ms, display = display_value, "fade-in started");
    completion
}

/// Fades the target out over [`DEFAULT_FADE_MS`].
pub fn fade_out<'a, P: Platform>(platform: &P, target: impl Into<Target<'a, P>>) -> Completion {
    fade_out_with(platform, target, DEFAULT_FADE_MS)
}

/// Fades the target out over `ms` milliseconds, then sets `display: none`.
pub fn fade_out_with<'a, P: Platform>(
    platform: &P,
    target: impl Into<Target<'a, P>>,
    ms: u32,
) -> Completion {
    let Some(element) = resolve(platform, target.into()) else {
        return Completion::ready();
    };

    platform.set_style_property(&element, "transition", &transition(ms));

    let (done, completion) = Completion::channel();
    let frame_platform = platform.clone();
    platform.request_animation_frame(Box::new(move || {
        frame_platform.set_style_property(&element, "opacity", "0");
        let timer_platform = frame_platform.clone();
        let scheduled = frame_platform.set_timeout(
            Box::new(move || {
                timer_platform.set_style_property(&element, "transition", "");
                timer_platform.set_style_property(&element, "display", "none");
                let _ = done.send(());
            }),
            ms,
        );
        if scheduled.is_none() {
            tracing::debug!("fade-out timer not scheduled");
        }
    }));
    tracing::debug!(ms, "fade-out started");
    completion
}
