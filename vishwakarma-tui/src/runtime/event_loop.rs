use crate::api::ApiClient;
use crate::app::App;
use crate::ui;
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use throbber_widgets_tui::ThrobberState;

use super::action_queue::{channel, completion_channel, Action};
use super::actions::{apply_completion, run_action};
use super::views::handle_key;

pub async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    client: &ApiClient,
) -> Result<()> {
    let (action_tx, mut action_rx) = channel();
    let (completion_tx, mut completion_rx) = completion_channel();
    let mut throbber_state = ThrobberState::default();

    let _ = action_tx.send(Action::LoadProjects);

    loop {
        while let Ok(action) = action_rx.try_recv() {
            run_action(action, app, client, &completion_tx);
        }

        terminal.draw(|f| ui::render(f, app, &mut throbber_state))?;

        if app.is_loading() {
            throbber_state.calc_next();
        }

        // Blocking poll; the short timeout lets spawned tasks progress
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(key, app, &action_tx);
                }
            }
        }

        while let Ok(completion) = completion_rx.try_recv() {
            apply_completion(completion, app, &action_tx);
        }

        if !app.running {
            break;
        }
        tokio::task::yield_now().await;
    }

    tracing::info!("event loop finished");
    Ok(())
}
