/*
[INPUT]:  Frame regions, current tab
[OUTPUT]: Store header and tab bar
[POS]:    TUI UI shared layout pieces
[UPDATE]: When adding tabs or changing the header copy
*/

use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};

use crate::tui::app::Tab;
use crate::tui::runtime::{border_style, header_style};

pub(in crate::tui) fn draw_header(frame: &mut ratatui::Frame, area: ratatui::layout::Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Book Store",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("Add books to your basket and see the discount magic!"),
    ];
    let header = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style()),
        );
    frame.render_widget(header, area);
}

pub(in crate::tui) fn draw_tabs(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    current_tab: Tab,
) {
    let titles = vec![Line::from("Store"), Line::from("Logs")];
    let selected = match current_tab {
        Tab::Store => 0,
        Tab::Logs => 1,
    };

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title("Tabs"),
        )
        .highlight_style(header_style())
        .select(selected);

    frame.render_widget(tabs, area);
}
