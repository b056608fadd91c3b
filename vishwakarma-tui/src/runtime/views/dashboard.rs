use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_dashboard_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    if app.dashboard.filtering {
        handle_filter_key(key, app);
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Down | KeyCode::Char('j') => app.dashboard.select_next(app.store.projects()),
        KeyCode::Up | KeyCode::Char('k') => app.dashboard.select_previous(),
        KeyCode::Enter => app.open_selected_project(),
        KeyCode::Char('n') | KeyCode::Char('N') => app.open_wizard(),
        KeyCode::Char('d') | KeyCode::Char('D') => app.request_delete(),
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.set_status("Reloading projects...".to_string());
            enqueue_action(action_tx, Action::LoadProjects);
        }
        KeyCode::Char('/') => app.dashboard.start_filter(),
        KeyCode::Esc => {
            app.dashboard.stop_filter(false, app.store.projects());
            app.clear_status();
        }
        _ => {}
    }
}

fn handle_filter_key(key: KeyEvent, app: &mut App) {
    let projects = app.store.projects();
    match key.code {
        KeyCode::Enter => app.dashboard.stop_filter(true, projects),
        KeyCode::Esc => app.dashboard.stop_filter(false, projects),
        KeyCode::Backspace => app.dashboard.filter_backspace(projects),
        KeyCode::Down => app.dashboard.select_next(projects),
        KeyCode::Up => app.dashboard.select_previous(),
        KeyCode::Char(c) => app.dashboard.filter_char(c, projects),
        _ => {}
    }
}
