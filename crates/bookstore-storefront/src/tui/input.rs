/*
[INPUT]:  Terminal input source (crossterm poll/read)
[OUTPUT]: UiEvent stream fed by a blocking poller task
[POS]:    TUI input pump
[UPDATE]: When changing how terminal input is read or how the poller stops
*/

use std::io;
use std::time::Duration;

use crossterm::event::Event as CrosstermEvent;
use tokio::sync::mpsc;
use tokio_util::sync::{CancellationToken, DropGuard};
use tracing::{debug, error};

const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(200);

pub(super) enum UiEvent {
    Input(CrosstermEvent),
}

/// Owns the blocking input task; dropping it stops the task.
///
/// The task also stops on the first read error and when the receiver is
/// gone, so the event channel closes instead of spinning.
pub(super) struct InputPoller {
    _shutdown: DropGuard,
}

impl InputPoller {
    pub(super) fn spawn<P>(mut poll: P) -> (Self, mpsc::UnboundedReceiver<UiEvent>)
    where
        P: FnMut(Duration) -> io::Result<Option<CrosstermEvent>> + Send + 'static,
    {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let shutdown = CancellationToken::new();
        let stop = shutdown.clone();

        tokio::task::spawn_blocking(move || {
            while !stop.is_cancelled() {
                match poll(INPUT_POLL_INTERVAL) {
                    Ok(Some(event)) => {
                        if event_tx.send(UiEvent::Input(event)).is_err() {
                            break;
                        }
                    }
                    Ok(None) => {}
                    Err(err) => {
                        error!(error = %err, "terminal input failed; input poller stopped");
                        break;
                    }
                }
            }
            debug!("input poller exited");
        });

        let poller = Self {
            _shutdown: shutdown.drop_guard(),
        };
        (poller, event_rx)
    }
}

/// Wait up to `timeout` for one crossterm event.
pub(super) fn poll_terminal(timeout: Duration) -> io::Result<Option<CrosstermEvent>> {
    if crossterm::event::poll(timeout)? {
        crossterm::event::read().map(Some)
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn idle(timeout: Duration) -> io::Result<Option<CrosstermEvent>> {
        std::thread::sleep(timeout.min(Duration::from_millis(10)));
        Ok(None)
    }

    async fn fail_after_spawning_poller() -> anyhow::Result<()> {
        let (_input, _events) = InputPoller::spawn(idle);
        tokio::task::yield_now().await;
        Err(anyhow::anyhow!("draw failed"))
    }

    #[test]
    fn early_error_return_does_not_block_runtime_shutdown() {
        let (done_tx, done_rx) = std::sync::mpsc::channel();
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().unwrap();
            let result = runtime.block_on(fail_after_spawning_poller());
            drop(runtime);
            let _ = done_tx.send(result.is_err());
        });

        assert_eq!(done_rx.recv_timeout(Duration::from_secs(5)), Ok(true));
    }

    #[tokio::test]
    async fn read_error_stops_poller_and_closes_channel() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let (_input, mut events) = InputPoller::spawn(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            Err(io::Error::other("tty gone"))
        });

        let next = tokio::time::timeout(Duration::from_secs(2), events.recv())
            .await
            .expect("channel closed");
        assert!(next.is_none());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn events_are_forwarded_until_dropped() {
        let mut pending = vec![CrosstermEvent::FocusLost, CrosstermEvent::FocusGained];
        let (input, mut events) = InputPoller::spawn(move |timeout| match pending.pop() {
            Some(event) => Ok(Some(event)),
            None => idle(timeout),
        });

        let first = events.recv().await.expect("first event");
        assert!(matches!(first, UiEvent::Input(CrosstermEvent::FocusGained)));
        let second = events.recv().await.expect("second event");
        assert!(matches!(second, UiEvent::Input(CrosstermEvent::FocusLost)));

        drop(input);
        let closed = tokio::time::timeout(Duration::from_secs(2), events.recv())
            .await
            .expect("poller stopped");
        assert!(closed.is_none());
    }
}
