use std::fmt::Display;
use std::time::Duration;

use crate::api::ApiError;
use crate::config::AppConfig;
use crate::types::{NewProject, Project};

mod api_keys;
mod chat;
mod dashboard;
mod navigation;
mod state;
mod store;
mod wizard;

pub use api_keys::{mask_key, ApiKeyField, ApiKeyGate};
pub use chat::{pick_reply, ChatRole, ChatSession};
pub use dashboard::DashboardState;
pub use navigation::ViewRegistry;
pub use state::{DeleteContext, Segment, TextInput, View};
pub use store::ProjectStore;
pub use wizard::{DetailsField, Wizard, WizardStep};

pub struct App {
    pub running: bool,
    pub status_message: Option<String>,
    pub dev_mode: bool,

    // In-flight backend requests, drives the throbber
    pub pending_requests: usize,

    pub views: ViewRegistry,
    pub store: ProjectStore,
    pub dashboard: DashboardState,

    // Creation wizard, open while Some
    pub wizard: Option<Wizard>,
    // Id of the submission the open wizard is waiting on
    pending_submission: Option<u64>,
    submission_seq: u64,

    pub chat: ChatSession,
    pub api_keys: ApiKeyGate,
    pub delete_context: Option<DeleteContext>,

    // Which canned analysis the detail view shows
    pub analysis_index: usize,

    pub chat_reply_delay: Duration,
}

impl App {
    pub fn new(cfg: &AppConfig, dev_mode: bool) -> Self {
        Self {
            running: true,
            status_message: None,
            dev_mode,
            pending_requests: 0,
            views: ViewRegistry::default(),
            store: ProjectStore::new(),
            dashboard: DashboardState::default(),
            wizard: None,
            pending_submission: None,
            submission_seq: 0,
            chat: ChatSession::new(),
            api_keys: ApiKeyGate::default(),
            delete_context: None,
            analysis_index: 0,
            chat_reply_delay: Duration::from_millis(cfg.chat_reply_delay_ms),
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Show an error in the status bar, passing the value through on success.
    pub fn report<T, E: Display>(&mut self, result: Result<T, E>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.set_status(e.to_string());
                None
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.pending_requests > 0
    }

    pub fn begin_request(&mut self) {
        self.pending_requests += 1;
    }

    pub fn end_request(&mut self) {
        self.pending_requests = self.pending_requests.saturating_sub(1);
    }

    pub fn active_project(&self) -> Option<&Project> {
        match self.views.active_view() {
            View::ProjectDetail => self
                .views
                .active_project()
                .and_then(|id| self.store.find_by_id(id)),
            View::Dashboard => None,
        }
    }

    /// Projects shown on the dashboard after filtering.
    pub fn visible_projects(&self) -> Vec<&Project> {
        self.dashboard.visible(self.store.projects())
    }

    pub fn open_selected_project(&mut self) {
        let selected = self
            .dashboard
            .selected_project(self.store.projects())
            .map(|p| p.id);
        if let Some(id) = selected {
            self.open_project(id);
        }
    }

    pub fn open_wizard(&mut self) {
        tracing::debug!("opening creation wizard");
        self.wizard = Some(Wizard::new());
        self.pending_submission = None;
        self.clear_status();
    }

    pub fn cancel_wizard(&mut self) {
        self.pending_submission = None;
        if self.wizard.take().is_some() {
            tracing::debug!("creation wizard cancelled");
        }
    }

    /// Package the wizard draft for submission, tagged with a fresh
    /// submission id. Nothing is returned if the wizard is closed or not ready.
    pub fn finish_wizard(&mut self) -> Option<(u64, NewProject)> {
        let result = self.wizard.as_mut()?.finish();
        let project = self.report(result)?;
        self.submission_seq += 1;
        self.pending_submission = Some(self.submission_seq);
        Some((self.submission_seq, project))
    }

    /// Whether the open wizard is the one that sent `submission`.
    fn awaits_submission(&self, submission: u64) -> bool {
        self.pending_submission == Some(submission)
            && self.wizard.as_ref().is_some_and(Wizard::is_submitting)
    }

    /// Ask for confirmation before deleting. Targets the open project in the
    /// detail view, else the dashboard selection.
    pub fn request_delete(&mut self) {
        let target = self.active_project().cloned().or_else(|| {
            self.dashboard
                .selected_project(self.store.projects())
                .cloned()
        });
        if let Some(project) = target {
            self.delete_context = Some(DeleteContext {
                project_id: project.id,
                project_name: project.name,
            });
        }
    }

    pub fn cancel_delete(&mut self) {
        self.delete_context = None;
    }

    pub fn apply_projects_loaded(&mut self, result: Result<Vec<Project>, ApiError>) {
        match self.store.apply_load(result) {
            Ok(count) => tracing::info!(count, "projects loaded"),
            Err(e) => {
                tracing::error!("failed to load projects: {}", e);
                self.set_status(format!("Could not load projects: {}", e));
            }
        }

        if let Some(id) = self.views.active_project() {
            if self.store.find_by_id(id).is_none() {
                tracing::warn!(project_id = id, "open project vanished after reload");
                self.close_project();
            }
        }
        self.dashboard.clamp(self.store.projects());
    }

    /// Returns whether the store should be reloaded.
    pub fn apply_project_created(
        &mut self,
        submission: u64,
        result: Result<Project, ApiError>,
    ) -> bool {
        let owned = self.awaits_submission(submission);
        if owned {
            self.pending_submission = None;
        }
        match result {
            Ok(project) => {
                tracing::info!(project_id = project.id, name = %project.name, "project created");
                let id = project.id;
                let name = project.name.clone();
                self.store.insert(project);

                // Only jump to the project if the user is still waiting on it
                if owned {
                    self.wizard = None;
                    self.open_project(id);
                }
                self.set_status(format!("Created project \"{}\"", name));
                true
            }
            Err(e) => {
                tracing::error!("failed to create project: {}", e);
                if owned {
                    if let Some(wizard) = self.wizard.as_mut() {
                        wizard.submission_failed();
                    }
                }
                self.set_status(e.to_string());
                false
            }
        }
    }

    pub fn apply_project_deleted(&mut self, id: i64, result: Result<(), ApiError>) {
        match result {
            Ok(()) => {
                let removed = self.store.remove(id);
                tracing::info!(project_id = id, cached = removed.is_some(), "project deleted");
                if self.views.active_project() == Some(id) {
                    self.close_project();
                }
                self.dashboard.clamp(self.store.projects());
                if let Some(project) = removed {
                    self.set_status(format!("Deleted \"{}\"", project.name));
                }
            }
            Err(e) => {
                tracing::error!(project_id = id, "failed to delete project: {}", e);
                self.set_status(e.to_string());
            }
        }
    }

    pub fn apply_chat_reply(&mut self, reply: &str) {
        self.chat.receive_reply(reply);
    }
}
