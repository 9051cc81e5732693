/*
[INPUT]:  AppState catalog, basket counts, selection
[OUTPUT]: Available books table rendered into Ratatui frame
[POS]:    TUI UI catalog table rendering
[UPDATE]: When changing catalog columns
*/

use ratatui::layout::Constraint;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};

use crate::tui::app::AppState;
use crate::tui::runtime::{border_style, format_price, header_style, truncate_to_width};

const TITLE_WIDTH: u16 = 32;
const AUTHOR_WIDTH: u16 = 22;

pub(in crate::tui) fn draw_books_table(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    app: &mut AppState,
) {
    let books = app.store.catalog().books();
    let mut rows = Vec::with_capacity(books.len().max(1));

    for book in books {
        let qty = app.store.count_of(book.id);
        let qty_cell = if qty == 0 {
            Cell::from("")
        } else {
            Cell::from(format!("x{qty}")).style(Style::default().fg(Color::Green))
        };
        rows.push(Row::new(vec![
            Cell::from(truncate_to_width(&book.title, TITLE_WIDTH as usize)),
            Cell::from(truncate_to_width(&book.author, AUTHOR_WIDTH as usize)),
            Cell::from(format_price(book.price, &app.currency_symbol)),
            qty_cell,
        ]));
    }

    if rows.is_empty() {
        let placeholder = if app.catalog_loaded {
            "No books available"
        } else {
            "Loading catalog..."
        };
        rows.push(Row::new(vec![
            Cell::from(placeholder),
            Cell::from(""),
            Cell::from(""),
            Cell::from(""),
        ]));
    }

    let header = Row::new(vec![
        Cell::from("Title"),
        Cell::from("Author"),
        Cell::from("Price"),
        Cell::from("Qty"),
    ])
    .style(header_style());

    let table = Table::new(
        rows,
        [
            Constraint::Length(TITLE_WIDTH),
            Constraint::Length(AUTHOR_WIDTH),
            Constraint::Length(10),
            Constraint::Length(5),
        ],
    )
    .header(header)
    .row_highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("> ")
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title("Available Books"),
    );
    frame.render_stateful_widget(table, area, &mut app.table_state);
}
