/*
[INPUT]:  Basket snapshots after every change, PriceCalculator backend
[OUTPUT]: Sequenced price outcomes delivered over an mpsc channel
[POS]:    Sync layer - keeps the displayed total in step with the basket
[UPDATE]: When changing request sequencing, cancellation, or the empty-basket shortcut
*/

use std::sync::Arc;

use bookstore_adapter::{BookId, BookstoreError, PriceCalculator, PriceQuote};
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Sequence number of a scheduled recomputation, strictly increasing.
pub type RequestSeq = u64;

/// Result of one price request, tagged with the sequence it was issued under.
#[derive(Debug)]
pub struct PriceOutcome {
    pub seq: RequestSeq,
    pub result: Result<PriceQuote, BookstoreError>,
}

/// What [`PriceSynchronizer::schedule`] did for a basket snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncAction {
    /// Basket was empty: total is zero and no request was sent.
    Zeroed { seq: RequestSeq },
    /// A request is in flight; its outcome arrives on the outcome channel.
    Requested { seq: RequestSeq },
}

/// Issues price requests and decides which answers are still relevant.
///
/// Each call to [`schedule`](Self::schedule) supersedes everything issued
/// before it: the previous request is cancelled, and an outcome is accepted
/// only when its sequence matches the latest one.
///
/// Requests run on the runtime passed to [`new`](Self::new), so scheduling
/// works from any thread, inside that runtime or not.
pub struct PriceSynchronizer {
    calculator: Arc<dyn PriceCalculator>,
    runtime: Handle,
    outcome_tx: mpsc::UnboundedSender<PriceOutcome>,
    latest_seq: RequestSeq,
    in_flight: Option<CancellationToken>,
}

impl PriceSynchronizer {
    pub fn new(
        calculator: Arc<dyn PriceCalculator>,
        runtime: Handle,
    ) -> (Self, mpsc::UnboundedReceiver<PriceOutcome>) {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        let synchronizer = Self {
            calculator,
            runtime,
            outcome_tx,
            latest_seq: 0,
            in_flight: None,
        };
        (synchronizer, outcome_rx)
    }

    /// Schedule a recomputation for the given basket contents.
    pub fn schedule(&mut self, basket: &[BookId]) -> SyncAction {
        self.latest_seq += 1;
        let seq = self.latest_seq;
        self.cancel_in_flight();

        if basket.is_empty() {
            debug!(seq, "basket empty; total reset without pricing request");
            return SyncAction::Zeroed { seq };
        }

        let token = CancellationToken::new();
        self.in_flight = Some(token.clone());

        let calculator = Arc::clone(&self.calculator);
        let outcome_tx = self.outcome_tx.clone();
        let basket = basket.to_vec();
        debug!(seq, items = basket.len(), "pricing request issued");

        self.runtime.spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    debug!(seq, "pricing request superseded");
                }
                result = calculator.calculate(&basket) => {
                    let _ = outcome_tx.send(PriceOutcome { seq, result });
                }
            }
        });

        SyncAction::Requested { seq }
    }

    /// Accept or discard an outcome.
    ///
    /// Returns `true` only for the latest sequence; the in-flight slot is
    /// released at that point.
    pub fn accept(&mut self, outcome: &PriceOutcome) -> bool {
        if outcome.seq != self.latest_seq {
            debug!(
                seq = outcome.seq,
                latest = self.latest_seq,
                "discarding stale pricing outcome"
            );
            return false;
        }
        if self.in_flight.take().is_none() {
            warn!(seq = outcome.seq, "pricing outcome without a pending request");
            return false;
        }
        true
    }

    pub fn latest_seq(&self) -> RequestSeq {
        self.latest_seq
    }

    pub fn has_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    fn cancel_in_flight(&mut self) {
        if let Some(token) = self.in_flight.take() {
            token.cancel();
        }
    }
}

impl Drop for PriceSynchronizer {
    fn drop(&mut self) {
        self.cancel_in_flight();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bookstore_adapter::Result;
    use rust_decimal::Decimal;
    use std::sync::Mutex as StdMutex;
    use std::time::Duration;

    /// Prices each book at 10 and records every basket it was asked about.
    #[derive(Default)]
    struct RecordingCalculator {
        seen: StdMutex<Vec<Vec<BookId>>>,
    }

    #[async_trait]
    impl PriceCalculator for RecordingCalculator {
        async fn calculate(&self, basket: &[BookId]) -> Result<PriceQuote> {
            self.seen.lock().unwrap().push(basket.to_vec());
            Ok(PriceQuote {
                total_price: Decimal::from(10 * basket.len() as u64),
                currency: "EUR".to_string(),
            })
        }
    }

    /// Never answers; used to observe cancellation.
    struct HangingCalculator;

    #[async_trait]
    impl PriceCalculator for HangingCalculator {
        async fn calculate(&self, _basket: &[BookId]) -> Result<PriceQuote> {
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn empty_basket_short_circuits() {
        let calculator = Arc::new(RecordingCalculator::default());
        let (mut sync, mut rx) =
            PriceSynchronizer::new(calculator.clone(), Handle::current());

        assert_eq!(sync.schedule(&[]), SyncAction::Zeroed { seq: 1 });
        assert!(!sync.has_in_flight());

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(rx.try_recv().is_err());
        assert!(calculator.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn requested_outcome_carries_sequence() {
        let calculator = Arc::new(RecordingCalculator::default());
        let (mut sync, mut rx) =
            PriceSynchronizer::new(calculator.clone(), Handle::current());

        assert_eq!(sync.schedule(&[1, 1, 2]), SyncAction::Requested { seq: 1 });
        let outcome = rx.recv().await.expect("outcome");

        assert_eq!(outcome.seq, 1);
        assert_eq!(
            outcome.result.as_ref().unwrap().total_price,
            Decimal::from(30)
        );
        assert!(sync.accept(&outcome));
        assert!(!sync.has_in_flight());
        assert_eq!(calculator.seen.lock().unwrap().as_slice(), &[vec![1, 1, 2]]);
    }

    #[tokio::test]
    async fn stale_sequence_is_rejected() {
        let calculator = Arc::new(RecordingCalculator::default());
        let (mut sync, _rx) = PriceSynchronizer::new(calculator, Handle::current());

        sync.schedule(&[1]);
        sync.schedule(&[1, 2]);
        assert_eq!(sync.latest_seq(), 2);

        let stale = PriceOutcome {
            seq: 1,
            result: Ok(PriceQuote {
                total_price: Decimal::from(10),
                currency: "EUR".to_string(),
            }),
        };
        assert!(!sync.accept(&stale));
        assert!(sync.has_in_flight());
    }

    #[tokio::test]
    async fn outcome_after_empty_basket_is_rejected() {
        let calculator = Arc::new(RecordingCalculator::default());
        let (mut sync, _rx) = PriceSynchronizer::new(calculator, Handle::current());

        sync.schedule(&[4]);
        sync.schedule(&[]);

        let late = PriceOutcome {
            seq: 1,
            result: Ok(PriceQuote {
                total_price: Decimal::from(10),
                currency: "EUR".to_string(),
            }),
        };
        assert!(!sync.accept(&late));
    }

    #[tokio::test]
    async fn new_schedule_cancels_previous_request() {
        let (mut sync, mut rx) =
            PriceSynchronizer::new(Arc::new(HangingCalculator), Handle::current());

        sync.schedule(&[1]);
        let first = sync.in_flight.clone().expect("first token");
        sync.schedule(&[1, 2]);

        assert!(first.is_cancelled());
        assert!(sync.has_in_flight());
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn schedules_from_outside_the_runtime() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let calculator = Arc::new(RecordingCalculator::default());
        let (mut sync, mut rx) =
            PriceSynchronizer::new(calculator.clone(), runtime.handle().clone());

        assert_eq!(sync.schedule(&[2, 5]), SyncAction::Requested { seq: 1 });
        let outcome = runtime.block_on(rx.recv()).expect("outcome");

        assert!(sync.accept(&outcome));
        assert_eq!(calculator.seen.lock().unwrap().as_slice(), &[vec![2, 5]]);
    }
}
