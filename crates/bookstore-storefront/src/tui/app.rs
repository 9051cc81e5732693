/*
[INPUT]:  StoreState, log buffer, catalog arrival, user selections
[OUTPUT]: AppState helpers for TUI rendering and basket actions
[POS]:    TUI app state and selection management
[UPDATE]: When adding tabs, actions, or selection behavior
*/

use bookstore_adapter::Book;
use ratatui::widgets::TableState;

use bookstore_storefront::{Catalog, StoreState};

use crate::tui::LogBufferHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Tab {
    Store,
    Logs,
}

pub(super) struct AppState {
    pub(super) store: StoreState,
    pub(super) log_buffer: LogBufferHandle,
    pub(super) table_state: TableState,
    pub(super) current_tab: Tab,
    pub(super) status_message: String,
    pub(super) currency_symbol: String,
    pub(super) catalog_loaded: bool,
}

impl AppState {
    pub(super) fn new(store: StoreState, log_buffer: LogBufferHandle, currency_symbol: String) -> Self {
        Self {
            store,
            log_buffer,
            table_state: TableState::default(),
            current_tab: Tab::Store,
            status_message: "Loading catalog...".to_string(),
            currency_symbol,
            catalog_loaded: false,
        }
    }

    pub(super) fn set_catalog(&mut self, catalog: Catalog) {
        self.status_message = if catalog.is_empty() {
            "No books available".to_string()
        } else {
            format!("{} books loaded", catalog.len())
        };
        self.table_state
            .select(if catalog.is_empty() { None } else { Some(0) });
        self.store.set_catalog(catalog);
        self.catalog_loaded = true;
    }

    pub(super) fn selected_book(&self) -> Option<&Book> {
        let idx = self.table_state.selected()?;
        self.store.catalog().books().get(idx)
    }

    pub(super) fn move_selection(&mut self, delta: isize) {
        let len = self.store.catalog().len();
        if len == 0 {
            self.table_state.select(None);
            return;
        }
        let current = self.table_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, (len - 1) as isize) as usize;
        self.table_state.select(Some(next));
    }

    pub(super) fn add_selected(&mut self) {
        let Some((id, title)) = self.selected_book().map(|b| (b.id, b.title.clone())) else {
            self.status_message = "no book selected".to_string();
            return;
        };
        self.store.add(id);
        self.status_message = format!("added {title}");
    }

    pub(super) fn remove_selected(&mut self) {
        let Some((id, title)) = self.selected_book().map(|b| (b.id, b.title.clone())) else {
            self.status_message = "no book selected".to_string();
            return;
        };
        self.status_message = match self.store.remove_one(id) {
            Some(_) => format!("removed {title}"),
            None => format!("{title} is not in the basket"),
        };
    }

    pub(super) fn clear_basket(&mut self) {
        if self.store.basket().is_empty() {
            self.status_message = "basket is already empty".to_string();
            return;
        }
        self.store.clear();
        self.status_message = "basket cleared".to_string();
    }

    pub(super) fn next_tab(&mut self) {
        self.current_tab = match self.current_tab {
            Tab::Store => Tab::Logs,
            Tab::Logs => Tab::Store,
        };
    }

    pub(super) fn set_tab(&mut self, tab: Tab) {
        self.current_tab = tab;
    }
}
