use crate::app::{App, WizardStep};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::{edit_text, enqueue_action};

pub(super) fn handle_wizard_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    if key.code == KeyCode::Esc {
        app.cancel_wizard();
        app.set_status("Project creation cancelled".to_string());
        return;
    }

    let Some(wizard) = app.wizard.as_mut() else {
        return;
    };

    match wizard.step() {
        WizardStep::TypeSelection => match key.code {
            KeyCode::Up | KeyCode::Char('k') => wizard.move_type_cursor(false),
            KeyCode::Down | KeyCode::Char('j') => wizard.move_type_cursor(true),
            KeyCode::Char(' ') => {
                let project_type = wizard.type_under_cursor();
                let result = wizard.select_type(project_type);
                app.report(result);
            }
            KeyCode::Enter => {
                let result = wizard.advance_to_details();
                if app.report(result).is_some() {
                    app.clear_status();
                }
            }
            _ => {}
        },
        WizardStep::BasicDetails => match key.code {
            KeyCode::Char('b') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                let result = wizard.back_to_type();
                app.report(result);
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                wizard.toggle_details_field();
            }
            KeyCode::Enter => {
                let name = wizard.name_input.value.clone();
                let description = wizard.description_input.value.clone();
                let result = wizard.submit_details(&name, &description);
                if app.report(result).is_some() {
                    app.clear_status();
                }
            }
            _ => {
                if let Some(input) = wizard.focused_input() {
                    edit_text(input, key);
                }
            }
        },
        WizardStep::Questioning {
            answered: false, ..
        } => match key.code {
            KeyCode::Enter => {
                let answer = wizard.answer_input.value.clone();
                let result = wizard.submit_answer(&answer);
                if app.report(result).is_some() {
                    app.clear_status();
                }
            }
            _ => {
                edit_text(&mut wizard.answer_input, key);
            }
        },
        WizardStep::Questioning { answered: true, .. } => {
            if key.code != KeyCode::Enter {
                return;
            }
            if wizard.is_last_question() {
                if let Some((submission, project)) = app.finish_wizard() {
                    enqueue_action(
                        action_tx,
                        Action::SubmitProject {
                            submission,
                            project,
                        },
                    );
                }
            } else {
                let result = wizard.advance_question();
                app.report(result);
            }
        }
        WizardStep::Submitting => {}
    }
}
