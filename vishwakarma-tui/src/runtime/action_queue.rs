use crate::api::ApiError;
use crate::types::{NewProject, Project};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Work requested by a key handler.
#[derive(Debug, Clone)]
pub(super) enum Action {
    LoadProjects,
    SubmitProject { submission: u64, project: NewProject },
    ConfirmDelete,
    SendChatMessage,
}

/// Result of a spawned task, applied by the event loop.
#[derive(Debug)]
pub(super) enum Completion {
    ProjectsLoaded(Result<Vec<Project>, ApiError>),
    ProjectCreated {
        submission: u64,
        result: Result<Project, ApiError>,
    },
    ProjectDeleted { id: i64, result: Result<(), ApiError> },
    ChatReply(&'static str),
}

pub(super) type ActionTx = UnboundedSender<Action>;
pub(super) type ActionRx = UnboundedReceiver<Action>;
pub(super) type CompletionTx = UnboundedSender<Completion>;
pub(super) type CompletionRx = UnboundedReceiver<Completion>;

pub(super) fn channel() -> (ActionTx, ActionRx) {
    mpsc::unbounded_channel()
}

pub(super) fn completion_channel() -> (CompletionTx, CompletionRx) {
    mpsc::unbounded_channel()
}
