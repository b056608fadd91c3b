use crate::api::ApiClient;
use crate::app::{pick_reply, App};

use super::action_queue::{Action, ActionTx, Completion, CompletionTx};

/// Start the work behind an action. Nothing here blocks the loop; results
/// come back as completions.
pub(super) fn run_action(
    action: Action,
    app: &mut App,
    client: &ApiClient,
    completion_tx: &CompletionTx,
) {
    match action {
        Action::LoadProjects => {
            app.begin_request();
            let client = client.clone();
            let tx = completion_tx.clone();
            tokio::spawn(async move {
                let result = client.list_projects().await;
                let _ = tx.send(Completion::ProjectsLoaded(result));
            });
        }
        Action::SubmitProject {
            submission,
            project,
        } => {
            tracing::info!(submission, name = %project.name, "submitting project");
            app.begin_request();
            app.set_status("Creating project...".to_string());
            let client = client.clone();
            let tx = completion_tx.clone();
            tokio::spawn(async move {
                let result = client.create_project(&project).await;
                let _ = tx.send(Completion::ProjectCreated { submission, result });
            });
        }
        Action::ConfirmDelete => {
            let Some(ctx) = app.delete_context.take() else {
                return;
            };
            tracing::info!(project_id = ctx.project_id, "deleting project");
            app.begin_request();
            let id = ctx.project_id;
            let client = client.clone();
            let tx = completion_tx.clone();
            tokio::spawn(async move {
                let result = client.delete_project(id).await;
                let _ = tx.send(Completion::ProjectDeleted { id, result });
            });
        }
        Action::SendChatMessage => {
            if !app.chat.send_input() {
                return;
            }
            let delay = app.chat_reply_delay;
            let tx = completion_tx.clone();
            tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                let reply = pick_reply(&mut rand::rng());
                let _ = tx.send(Completion::ChatReply(reply));
            });
        }
    }
}

/// Apply a finished task to whatever the state is now.
pub(super) fn apply_completion(completion: Completion, app: &mut App, action_tx: &ActionTx) {
    match completion {
        Completion::ProjectsLoaded(result) => {
            app.end_request();
            app.apply_projects_loaded(result);
        }
        Completion::ProjectCreated { submission, result } => {
            app.end_request();
            if app.apply_project_created(submission, result) {
                let _ = action_tx.send(Action::LoadProjects);
            }
        }
        Completion::ProjectDeleted { id, result } => {
            app.end_request();
            app.apply_project_deleted(id, result);
        }
        Completion::ChatReply(reply) => {
            app.apply_chat_reply(reply);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::action_queue::{channel, completion_channel, ActionRx, CompletionRx};
    use super::*;
    use crate::api::DevBackend;
    use crate::app::{ChatRole, TextInput, View};
    use crate::config::AppConfig;
    use crate::content;
    use crate::types::ProjectType;
    use std::time::Duration;

    fn dev_app() -> App {
        App::new(&AppConfig::default(), true)
    }

    async fn settle(
        app: &mut App,
        client: &ApiClient,
        completion_tx: &CompletionTx,
        completion_rx: &mut CompletionRx,
        action_tx: &ActionTx,
        action_rx: &mut ActionRx,
    ) {
        while app.pending_requests > 0 {
            let completion = completion_rx.recv().await.unwrap();
            apply_completion(completion, app, action_tx);
            while let Ok(action) = action_rx.try_recv() {
                run_action(action, app, client, completion_tx);
            }
        }
    }

    #[tokio::test]
    async fn finishing_wizard_posts_once_with_every_answer() {
        let backend = DevBackend::empty();
        let client = ApiClient::with_dev_backend(backend.clone()).unwrap();
        let mut app = dev_app();
        let (action_tx, mut action_rx) = channel();
        let (completion_tx, mut completion_rx) = completion_channel();

        app.open_wizard();
        let wizard = app.wizard.as_mut().unwrap();
        wizard.select_type(ProjectType::MarketEntry).unwrap();
        wizard.advance_to_details().unwrap();
        wizard.submit_details("Chai Berlin", "Masala chai for Berlin").unwrap();
        for i in 0..content::QUESTION_COUNT {
            wizard.submit_answer(&format!("answer {}", i + 1)).unwrap();
            if i + 1 < content::QUESTION_COUNT {
                wizard.advance_question().unwrap();
            }
        }

        let (submission, project) = app.finish_wizard().unwrap();
        run_action(
            Action::SubmitProject {
                submission,
                project,
            },
            &mut app,
            &client,
            &completion_tx,
        );
        settle(
            &mut app,
            &client,
            &completion_tx,
            &mut completion_rx,
            &action_tx,
            &mut action_rx,
        )
        .await;

        let calls = backend.calls();
        assert_eq!(calls.create, 1);
        assert_eq!(calls.list, 1);

        let project = app.active_project().unwrap();
        assert_eq!(project.name, "Chai Berlin");
        assert_eq!(project.answers.len(), content::QUESTION_COUNT);
        assert_eq!(
            backend.project(project.id).unwrap().answers,
            project.answers
        );
        assert!(app.wizard.is_none());
    }

    #[tokio::test]
    async fn failed_load_leaves_dashboard_empty() {
        let backend = DevBackend::new();
        let client = ApiClient::with_dev_backend(backend.clone()).unwrap();
        let mut app = dev_app();
        let (action_tx, mut action_rx) = channel();
        let (completion_tx, mut completion_rx) = completion_channel();

        run_action(Action::LoadProjects, &mut app, &client, &completion_tx);
        settle(
            &mut app,
            &client,
            &completion_tx,
            &mut completion_rx,
            &action_tx,
            &mut action_rx,
        )
        .await;
        assert_eq!(app.visible_projects().len(), 2);

        backend.set_offline(true);
        run_action(Action::LoadProjects, &mut app, &client, &completion_tx);
        settle(
            &mut app,
            &client,
            &completion_tx,
            &mut completion_rx,
            &action_tx,
            &mut action_rx,
        )
        .await;
        assert!(app.visible_projects().is_empty());
        assert!(!app.is_loading());
    }

    #[tokio::test]
    async fn confirmed_delete_removes_project() {
        let backend = DevBackend::new();
        let client = ApiClient::with_dev_backend(backend.clone()).unwrap();
        let mut app = dev_app();
        let (action_tx, mut action_rx) = channel();
        let (completion_tx, mut completion_rx) = completion_channel();

        run_action(Action::LoadProjects, &mut app, &client, &completion_tx);
        settle(
            &mut app,
            &client,
            &completion_tx,
            &mut completion_rx,
            &action_tx,
            &mut action_rx,
        )
        .await;

        app.open_project(1);
        app.request_delete();
        run_action(Action::ConfirmDelete, &mut app, &client, &completion_tx);
        assert!(app.delete_context.is_none());
        settle(
            &mut app,
            &client,
            &completion_tx,
            &mut completion_rx,
            &action_tx,
            &mut action_rx,
        )
        .await;

        assert_eq!(backend.calls().delete, 1);
        assert!(app.store.find_by_id(1).is_none());
        assert_eq!(app.views.active_view(), View::Dashboard);
    }

    #[tokio::test]
    async fn delete_without_confirmation_context_does_nothing() {
        let backend = DevBackend::new();
        let client = ApiClient::with_dev_backend(backend.clone()).unwrap();
        let mut app = dev_app();
        let (completion_tx, _completion_rx) = completion_channel();

        run_action(Action::ConfirmDelete, &mut app, &client, &completion_tx);
        assert_eq!(backend.calls().delete, 0);
        assert!(!app.is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn chat_messages_precede_delayed_replies() {
        let client = ApiClient::with_dev_backend(DevBackend::empty()).unwrap();
        let mut app = dev_app();
        let (action_tx, _action_rx) = channel();
        let (completion_tx, mut completion_rx) = completion_channel();

        for text in ["hi", "there"] {
            app.chat.input = TextInput::from_str(text);
            run_action(Action::SendChatMessage, &mut app, &client, &completion_tx);
        }
        assert_eq!(app.chat.transcript().len(), 3);
        assert!(completion_rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(999)).await;
        assert!(completion_rx.try_recv().is_err());

        for _ in 0..2 {
            let completion = completion_rx.recv().await.unwrap();
            apply_completion(completion, &mut app, &action_tx);
        }

        let roles: Vec<ChatRole> = app.chat.transcript().iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![
                ChatRole::Assistant,
                ChatRole::User,
                ChatRole::User,
                ChatRole::Assistant,
                ChatRole::Assistant,
            ]
        );
        assert_eq!(app.chat.transcript()[1].text, "hi");
        assert_eq!(app.chat.transcript()[2].text, "there");
        assert!(content::CHAT_REPLIES.contains(&app.chat.transcript()[3].text.as_str()));
        assert_eq!(app.chat.pending_replies(), 0);
    }

    #[tokio::test]
    async fn blank_chat_input_schedules_nothing() {
        let client = ApiClient::with_dev_backend(DevBackend::empty()).unwrap();
        let mut app = dev_app();
        let (completion_tx, _completion_rx) = completion_channel();

        app.chat.input = TextInput::from_str("   ");
        run_action(Action::SendChatMessage, &mut app, &client, &completion_tx);
        assert_eq!(app.chat.transcript().len(), 1);
        assert_eq!(app.chat.pending_replies(), 0);
    }
}
