use crate::app::{App, TextInput, View};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::action_queue::{Action, ActionTx};

mod api_keys;
mod confirm_delete;
mod dashboard;
mod project;
mod wizard;

fn enqueue_action(action_tx: &ActionTx, action: Action) {
    let _ = action_tx.send(action);
}

/// Shared line editing for every text field. Returns whether the key was used.
fn edit_text(input: &mut TextInput, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.home(),
        KeyCode::End => input.end(),
        _ => return false,
    }
    true
}

/// Route a key press to the topmost overlay, else the active view.
pub(super) fn handle_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    if app.delete_context.is_some() {
        confirm_delete::handle_confirm_delete_key(key, app, action_tx);
    } else if app.wizard.is_some() {
        wizard::handle_wizard_key(key, app, action_tx);
    } else if app.api_keys.is_prompting() {
        api_keys::handle_api_key_key(key, app);
    } else {
        match app.views.active_view() {
            View::Dashboard => dashboard::handle_dashboard_key(key, app, action_tx),
            View::ProjectDetail => project::handle_project_key(key, app, action_tx),
        }
    }
}
