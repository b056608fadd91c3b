use crate::app::{ApiKeyField, App};
use crossterm::event::{KeyCode, KeyEvent};

use super::edit_text;

pub(super) fn handle_api_key_key(key: KeyEvent, app: &mut App) {
    let Some(form) = app.api_keys.form.as_mut() else {
        return;
    };

    match key.code {
        KeyCode::Esc => {
            app.api_keys.dismiss();
            app.set_status("Statistics need at least one API key".to_string());
        }
        KeyCode::Tab | KeyCode::Down => form.focused = form.focused.next(),
        KeyCode::BackTab | KeyCode::Up => form.focused = form.focused.previous(),
        KeyCode::Enter => {
            // Enter on a filled custom field adds the key instead of saving
            if form.focused == ApiKeyField::Custom && form.add_custom_key() {
                return;
            }
            app.save_api_keys();
        }
        _ => {
            edit_text(form.focused_input(), key);
        }
    }
}
