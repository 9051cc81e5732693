/*
[INPUT]:  Crossterm key codes
[OUTPUT]: Basket actions, tab switches, quit requests
[POS]:    TUI key routing
[UPDATE]: When changing keybindings
*/

use crossterm::event::KeyCode;

use super::app::{AppState, Tab};

/// Handles key events for the TUI.
///
/// Returns `true` if quit is requested, `false` otherwise.
pub(super) fn handle_key_event(app: &mut AppState, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Tab => app.next_tab(),
        KeyCode::Char('1') => app.set_tab(Tab::Store),
        KeyCode::Char('2') => app.set_tab(Tab::Logs),
        _ if app.current_tab != Tab::Store => {}
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right | KeyCode::Enter => {
            app.add_selected()
        }
        KeyCode::Char('-') | KeyCode::Left | KeyCode::Backspace => app.remove_selected(),
        KeyCode::Char('c') => app.clear_basket(),
        _ => {}
    }
    false
}
