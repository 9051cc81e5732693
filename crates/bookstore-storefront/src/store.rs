/*
[INPUT]:  User basket actions, loaded catalog, sequenced price outcomes
[OUTPUT]: Owned storefront state (catalog, basket, displayed total, loading flag)
[POS]:    State layer - single funnel for every storefront mutation
[UPDATE]: When adding storefront actions or changing how price outcomes are applied
*/

use std::sync::Arc;

use bookstore_adapter::{BookId, PriceCalculator};
use rust_decimal::Decimal;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::basket::{Basket, BasketChange};
use crate::catalog::Catalog;
use crate::pricing::{PriceOutcome, PriceSynchronizer, SyncAction};

/// The total currently shown to the user.
///
/// `currency` is whatever the pricing service last reported; it stays `None`
/// until a first quote has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayedTotal {
    pub amount: Decimal,
    pub currency: Option<String>,
}

impl Default for DisplayedTotal {
    fn default() -> Self {
        Self {
            amount: Decimal::ZERO,
            currency: None,
        }
    }
}

/// Everything the storefront renders.
///
/// Mutations happen on one logical thread (the UI loop). Basket changes
/// schedule a price recomputation; its answer comes back through the
/// receiver returned by [`StoreState::new`] and must be handed to
/// [`StoreState::apply_price_outcome`]. Price requests are spawned on the
/// runtime handle given to [`StoreState::new`]; mutations themselves do not
/// need to run inside that runtime.
pub struct StoreState {
    catalog: Catalog,
    basket: Basket,
    total: DisplayedTotal,
    loading: bool,
    pricing: PriceSynchronizer,
}

impl StoreState {
    pub fn new(
        calculator: Arc<dyn PriceCalculator>,
        runtime: Handle,
    ) -> (Self, mpsc::UnboundedReceiver<PriceOutcome>) {
        let (pricing, outcome_rx) = PriceSynchronizer::new(calculator, runtime);
        let state = Self {
            catalog: Catalog::empty(),
            basket: Basket::new(),
            total: DisplayedTotal::default(),
            loading: false,
            pricing,
        };
        (state, outcome_rx)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
    }

    pub fn basket(&self) -> &Basket {
        &self.basket
    }

    pub fn total(&self) -> &DisplayedTotal {
        &self.total
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn count_of(&self, id: BookId) -> usize {
        self.basket.count_of(id)
    }

    /// Add one copy of a book. Ids are not checked against the catalog.
    pub fn add(&mut self, id: BookId) -> BasketChange {
        if !self.catalog.is_empty() && !self.catalog.contains(id) {
            warn!(book_id = id, "adding book that is not in the catalog");
        }
        let change = self.basket.add(id);
        self.basket_changed(change);
        change
    }

    /// Remove one copy of a book; absent ids change nothing and trigger no pricing.
    pub fn remove_one(&mut self, id: BookId) -> Option<BasketChange> {
        let change = self.basket.remove_one(id)?;
        self.basket_changed(change);
        Some(change)
    }

    pub fn clear(&mut self) -> BasketChange {
        let change = self.basket.clear();
        self.basket_changed(change);
        change
    }

    /// Apply a price outcome if it answers the latest basket.
    ///
    /// Returns `true` when the outcome was current. A current failure clears
    /// the loading flag and leaves the previous total on screen.
    pub fn apply_price_outcome(&mut self, outcome: PriceOutcome) -> bool {
        if !self.pricing.accept(&outcome) {
            return false;
        }
        self.loading = false;

        match outcome.result {
            Ok(quote) => {
                info!(
                    seq = outcome.seq,
                    total = %quote.total_price,
                    currency = %quote.currency,
                    "basket priced"
                );
                self.total = DisplayedTotal {
                    amount: quote.total_price,
                    currency: Some(quote.currency),
                };
            }
            Err(err) => {
                warn!(
                    seq = outcome.seq,
                    error = %err,
                    transport = err.is_transport(),
                    malformed = err.is_malformed_response(),
                    "pricing failed; keeping previous total"
                );
            }
        }
        true
    }

    fn basket_changed(&mut self, change: BasketChange) {
        match self.pricing.schedule(self.basket.ids()) {
            SyncAction::Zeroed { .. } => {
                self.total.amount = Decimal::ZERO;
                self.loading = false;
            }
            SyncAction::Requested { seq } => {
                tracing::debug!(seq, ?change, "basket changed; repricing");
                self.loading = true;
            }
        }
    }
}
