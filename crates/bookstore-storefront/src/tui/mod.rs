/*
[INPUT]:  Storefront configuration, bookstore client, log buffer
[OUTPUT]: Ratatui-based storefront: catalog, basket, total, logs
[POS]:    TUI module for bookstore-storefront binary
[UPDATE]: When changing TUI layout, keybindings, or runtime controls
*/

mod app;
mod events;
mod input;
mod runtime;
mod terminal;
mod ui;

pub use runtime::{run_tui_with_log, LogBuffer, LogBufferHandle, LogWriterFactory};
