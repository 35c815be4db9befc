//! Reveals a message's text as a time-paced sequence of growing prefixes.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use futures::Stream;
use tokio::time::Sleep;

use crate::observability;

/// Inter-step delay matching the terminal's typewriter pacing.
pub const DEFAULT_REVEAL_INTERVAL: Duration = Duration::from_millis(15);

/// A stream of growing character prefixes of one message's text.
///
/// The first item is the empty prefix, yielded immediately; each subsequent
/// item reveals exactly one additional character after the configured
/// interval, ending at the full text. A stream is scoped to the text it was
/// created for: revealing a different message means constructing a new
/// stream, which always starts from empty rather than diffing against the
/// prior text. Dropping the stream mid-reveal releases the pacing timer.
///
/// When the stream is fully drained the oneshot receiver returned by
/// [`new`](RevealStream::new) fires, so callers can sequence work after the
/// reveal completes.
pub struct RevealStream {
    text: String,
    total_chars: usize,
    revealed: usize,
    started: bool,
    interval: Duration,
    delay: Option<Pin<Box<Sleep>>>,
    done_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl RevealStream {
    /// Create a reveal stream for the given text.
    ///
    /// Returns the stream and a receiver that fires once the full text has
    /// been yielded and the stream is exhausted.
    pub fn new(
        text: impl Into<String>,
        interval: Duration,
    ) -> (Self, tokio::sync::oneshot::Receiver<()>) {
        let text = text.into();
        let total_chars = text.chars().count();
        let (tx, rx) = tokio::sync::oneshot::channel();
        observability::REVEAL_STREAMS.click();
        let this = Self {
            text,
            total_chars,
            revealed: 0,
            started: false,
            interval,
            delay: None,
            done_tx: Some(tx),
        };
        (this, rx)
    }

    /// Create a reveal stream with the default typewriter pacing.
    pub fn with_default_interval(
        text: impl Into<String>,
    ) -> (Self, tokio::sync::oneshot::Receiver<()>) {
        Self::new(text, DEFAULT_REVEAL_INTERVAL)
    }

    /// The full text this stream reveals.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The prefix holding the first `chars` characters, never splitting a
    /// character.
    fn prefix(&self, chars: usize) -> String {
        self.text.chars().take(chars).collect()
    }
}

impl Stream for RevealStream {
    type Item = String;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        // First item: the empty prefix, no delay.
        if !self.started {
            self.started = true;
            if self.total_chars > 0 {
                let interval = self.interval;
                self.delay = Some(Box::pin(tokio::time::sleep(interval)));
            }
            return Poll::Ready(Some(String::new()));
        }

        if self.revealed >= self.total_chars {
            if let Some(tx) = self.done_tx.take() {
                let _ = tx.send(());
            }
            return Poll::Ready(None);
        }

        let Some(delay) = self.delay.as_mut() else {
            return Poll::Ready(None);
        };
        match delay.as_mut().poll(cx) {
            Poll::Ready(()) => {
                self.revealed += 1;
                observability::REVEAL_CHARS.click();
                let prefix = self.prefix(self.revealed);
                if self.revealed < self.total_chars {
                    let interval = self.interval;
                    self.delay = Some(Box::pin(tokio::time::sleep(interval)));
                } else {
                    self.delay = None;
                }
                Poll::Ready(Some(prefix))
            }
            Poll::Pending => Poll::Pending,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.started {
            self.total_chars - self.revealed
        } else {
            self.total_chars - self.revealed + 1
        };
        (remaining, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    #[tokio::test(start_paused = true)]
    async fn reveals_growing_prefixes_in_order() {
        let (stream, done) = RevealStream::new("OK", Duration::from_millis(15));
        let prefixes: Vec<String> = stream.collect().await;
        assert_eq!(prefixes, vec!["".to_string(), "O".to_string(), "OK".to_string()]);
        done.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn empty_text_yields_single_empty_prefix() {
        let (stream, done) = RevealStream::new("", Duration::from_millis(15));
        let prefixes: Vec<String> = stream.collect().await;
        assert_eq!(prefixes, vec!["".to_string()]);
        done.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn a_new_stream_restarts_from_empty() {
        let (first, _done) = RevealStream::new("alpha", Duration::from_millis(15));
        let _ = first.collect::<Vec<_>>().await;

        let (mut second, _done) = RevealStream::new("beta", Duration::from_millis(15));
        assert_eq!(second.next().await, Some("".to_string()));
        assert_eq!(second.next().await, Some("b".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn multibyte_characters_are_never_split() {
        let (stream, _done) = RevealStream::new("héllo", Duration::from_millis(1));
        let prefixes: Vec<String> = stream.collect().await;
        assert_eq!(prefixes[2], "hé");
        assert_eq!(prefixes.last().unwrap(), "héllo");
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_mid_reveal_releases_the_timer() {
        let (mut stream, done) = RevealStream::new("long message", Duration::from_millis(15));
        assert_eq!(stream.next().await, Some("".to_string()));
        assert_eq!(stream.next().await, Some("l".to_string()));
        drop(stream);
        // The completion channel never fires for an abandoned reveal.
        assert!(done.await.is_err());
    }
}
