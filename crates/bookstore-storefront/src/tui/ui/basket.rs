/*
[INPUT]:  AppState basket, catalog titles, displayed total, loading flag
[OUTPUT]: Basket summary panel rendered into Ratatui frame
[POS]:    TUI UI basket panel rendering
[UPDATE]: When changing how basket lines or the total are shown
*/

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use bookstore_storefront::StoreState;

use crate::tui::app::AppState;
use crate::tui::runtime::{border_style, total_label};

pub(in crate::tui) fn draw_basket_summary(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    app: &AppState,
) {
    let store = &app.store;
    let mut lines = Vec::new();

    if store.basket().is_empty() {
        lines.push(Line::from(Span::styled(
            "Your basket is empty",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        lines.extend(basket_lines(store).into_iter().map(Line::from));
    }

    lines.push(Line::from(""));
    let total_style = if store.is_loading() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    lines.push(Line::from(Span::styled(
        total_label(store.total(), store.is_loading(), &app.currency_symbol),
        total_style,
    )));
    if !store.basket().is_empty() {
        lines.push(Line::from(Span::styled(
            "Press [c] to clear the basket",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title("Your Basket"),
    );
    frame.render_widget(widget, area);
}

/// `title xN` for every catalog book in the basket, in catalog order.
fn basket_lines(store: &StoreState) -> Vec<String> {
    store
        .catalog()
        .books()
        .iter()
        .filter_map(|book| match store.count_of(book.id) {
            0 => None,
            count => Some(format!("{} x{count}", book.title)),
        })
        .collect()
}
