/*
[INPUT]:  Storefront config, bookstore client, log buffer, crossterm input
[OUTPUT]: Ratatui-based TUI run loop, rendering, and log buffer utilities
[POS]:    TUI runtime loop and shared helpers
[UPDATE]: When changing TUI layout, keybindings, or runtime controls
*/

use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::{Arc, Mutex as StdMutex, PoisonError};

use anyhow::{Result, anyhow};
use crossterm::event::{Event as CrosstermEvent, KeyEventKind};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use rust_decimal::Decimal;
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tracing::{info, warn};
use tracing_subscriber::fmt::MakeWriter;
use unicode_width::UnicodeWidthChar;

use bookstore_adapter::{BookCatalog, BookstoreClient, PriceCalculator};
use bookstore_storefront::{load_catalog, DisplayedTotal, StoreState, StorefrontConfig};

use super::app::{AppState, Tab};
use super::events::handle_key_event;
use super::input::{InputPoller, UiEvent, poll_terminal};
use super::terminal::TerminalGuard;
use super::ui::*;

pub type LogBufferHandle = Arc<StdMutex<LogBuffer>>;

#[derive(Debug, Default)]
pub struct LogBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            capacity,
        }
    }

    pub fn push_line(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() >= self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }
}

/// `MakeWriter` that routes formatted log lines into a [`LogBuffer`]
/// instead of the terminal the TUI is drawing on.
#[derive(Clone)]
pub struct LogWriterFactory {
    buffer: LogBufferHandle,
}

impl LogWriterFactory {
    pub fn new(buffer: LogBufferHandle) -> Self {
        Self { buffer }
    }
}

pub struct LogWriter {
    buffer: LogBufferHandle,
    partial: String,
}

impl LogWriter {
    fn push(&self, line: String) {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_line(line);
    }
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let chunk = String::from_utf8_lossy(buf);
        self.partial.push_str(&chunk);
        while let Some(pos) = self.partial.find('\n') {
            let line = self.partial[..pos].trim_end_matches('\r').to_string();
            self.partial = self.partial[pos + 1..].to_string();
            self.push(line);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.partial.is_empty() {
            let line = std::mem::take(&mut self.partial);
            self.push(line);
        }
        Ok(())
    }
}

impl Drop for LogWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

impl<'a> MakeWriter<'a> for LogWriterFactory {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogWriter {
            buffer: self.buffer.clone(),
            partial: String::new(),
        }
    }
}

pub(crate) fn border_style() -> Style {
    Style::default().fg(Color::Magenta)
}

pub(crate) fn header_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn format_decimal(value: Decimal, scale: u32) -> String {
    let mut rounded = value.round_dp(scale);
    rounded.rescale(scale);
    rounded.to_string()
}

/// Symbol for an ISO currency code; unknown codes are printed as-is.
pub(crate) fn currency_symbol(code: Option<&str>, fallback: &str) -> String {
    match code {
        None => fallback.to_string(),
        Some("EUR") => "€".to_string(),
        Some("USD") => "$".to_string(),
        Some("GBP") => "£".to_string(),
        Some(other) => format!("{other} "),
    }
}

pub(crate) fn format_price(value: Decimal, symbol: &str) -> String {
    format!("{symbol}{}", format_decimal(value, 2))
}

pub(crate) fn total_label(total: &DisplayedTotal, loading: bool, fallback_symbol: &str) -> String {
    if loading {
        return "Total: Calculating...".to_string();
    }
    let symbol = currency_symbol(total.currency.as_deref(), fallback_symbol);
    format!("Total: {}", format_price(total.amount, &symbol))
}

/// Cut `text` to at most `max_width` terminal columns, marking the cut with `…`.
pub(crate) fn truncate_to_width(text: &str, max_width: usize) -> String {
    let full: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if full <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

pub(super) fn draw_footer(frame: &mut ratatui::Frame, area: ratatui::layout::Rect, app: &AppState) {
    let key_style = Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let mut line1 = vec![
        Span::styled("[Up/Down]", key_style),
        Span::raw(" Select  "),
        Span::styled("[+/Right]", key_style),
        Span::raw(" Add  "),
        Span::styled("[-/Left]", key_style),
        Span::raw(" Remove  "),
    ];
    if !app.store.basket().is_empty() {
        line1.push(Span::styled("[c]", key_style));
        line1.push(Span::raw(" Clear Basket"));
    }
    let line2 = Line::from(vec![
        Span::styled("[Tab/1/2]", key_style),
        Span::raw(" Switch  "),
        Span::styled("[q]", key_style),
        Span::raw(" Quit  "),
        Span::raw(format!("Status: {}", app.status_message)),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title("Hotkeys");
    let text = Text::from(vec![Line::from(line1), line2]);
    let widget = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}

pub async fn run_tui_with_log(
    config: &StorefrontConfig,
    client: Arc<BookstoreClient>,
    log_buffer: LogBufferHandle,
) -> Result<()> {
    let mut terminal = TerminalGuard::new()?;
    // Dropping `_input` on any return path stops the blocking poller.
    let (_input, mut event_rx) = InputPoller::spawn(poll_terminal);

    let calculator: Arc<dyn PriceCalculator> = client.clone();
    let (store, mut price_rx) = StoreState::new(calculator, Handle::current());
    let mut app = AppState::new(store, log_buffer, config.ui.currency_symbol.clone());

    let (catalog_tx, mut catalog_rx) = oneshot::channel();
    let catalog_source: Arc<dyn BookCatalog> = client;
    tokio::spawn(async move {
        let catalog = load_catalog(catalog_source.as_ref()).await;
        let _ = catalog_tx.send(catalog);
    });

    let mut tick = tokio::time::interval(config.tick_interval());
    let mut catalog_pending = true;
    let mut should_quit = false;

    while !should_quit {
        tokio::select! {
            _ = tick.tick() => {}
            maybe_event = event_rx.recv() => {
                match maybe_event {
                    Some(UiEvent::Input(CrosstermEvent::Key(key))) => {
                        if key.kind == KeyEventKind::Press && handle_key_event(&mut app, key.code) {
                            should_quit = true;
                        }
                    }
                    Some(_) => {}
                    None => return Err(anyhow!("terminal input closed")),
                }
            }
            Some(outcome) = price_rx.recv() => {
                app.store.apply_price_outcome(outcome);
            }
            loaded = &mut catalog_rx, if catalog_pending => {
                catalog_pending = false;
                match loaded {
                    Ok(catalog) => app.set_catalog(catalog),
                    Err(_) => {
                        warn!("catalog loader exited without a result");
                        app.set_catalog(Default::default());
                    }
                }
            }
        }

        terminal.draw(|frame| draw_ui(frame, &mut app))?;
    }

    info!("storefront closing");
    Ok(())
}

fn draw_ui(frame: &mut ratatui::Frame, app: &mut AppState) {
    let area = frame.area();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(8),
            Constraint::Length(3),
            Constraint::Length(4),
        ])
        .split(area);

    draw_header(frame, layout[0]);
    draw_tabs(frame, layout[2], app.current_tab);

    match app.current_tab {
        Tab::Store => {
            let body = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
                .split(layout[1]);
            draw_books_table(frame, body[0], app);
            draw_basket_summary(frame, body[1], app);
        }
        Tab::Logs => {
            draw_logs(frame, layout[1], &app.log_buffer);
        }
    }

    draw_footer(frame, layout[3], app);
}
