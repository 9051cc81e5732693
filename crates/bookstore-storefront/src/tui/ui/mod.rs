/*
[INPUT]:  TUI app state and log buffer snapshots
[OUTPUT]: Panel render functions for the storefront screen
[POS]:    TUI UI module root
[UPDATE]: When adding or renaming panels
*/

mod basket;
mod books;
mod layout;
mod logs;

pub(in crate::tui) use basket::draw_basket_summary;
pub(in crate::tui) use books::draw_books_table;
pub(in crate::tui) use layout::{draw_header, draw_tabs};
pub(in crate::tui) use logs::draw_logs;
