use crate::app::{App, Segment};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::{edit_text, enqueue_action};

pub(super) fn handle_project_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Esc => {
            app.close_project();
            return;
        }
        KeyCode::Tab => {
            app.next_segment();
            return;
        }
        KeyCode::BackTab => {
            app.previous_segment();
            return;
        }
        _ => {}
    }

    if app.views.active_segment() == Segment::Chat {
        handle_chat_key(key, app, action_tx);
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('b') | KeyCode::Backspace => app.close_project(),
        KeyCode::Char('d') | KeyCode::Char('D') => app.request_delete(),
        KeyCode::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            app.select_segment(Segment::ALL[index]);
        }
        KeyCode::Right | KeyCode::Char('l') if app.views.active_segment() == Segment::Analysis => {
            app.next_analysis();
        }
        KeyCode::Left | KeyCode::Char('h') if app.views.active_segment() == Segment::Analysis => {
            app.previous_analysis();
        }
        KeyCode::Char('k') | KeyCode::Char('K')
            if app.views.active_segment() == Segment::Statistics =>
        {
            app.api_keys.prompt();
        }
        _ => {}
    }
}

fn handle_chat_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Enter => enqueue_action(action_tx, Action::SendChatMessage),
        KeyCode::Char('l') if ctrl => app.chat.clear(),
        // Stand-in for voice input: drop a sample question into the box
        KeyCode::Char('v') if ctrl => app.chat.suggest_question(&mut rand::rng()),
        _ => {
            edit_text(&mut app.chat.input, key);
        }
    }
}
