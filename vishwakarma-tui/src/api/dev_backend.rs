use crate::api::dto::CreateProjectRequest;
use crate::api::ApiError;
use crate::content;
use crate::types::{Project, ProjectType};
use reqwest::StatusCode;
use std::sync::{Arc, Mutex, MutexGuard};
use time::OffsetDateTime;

/// In-memory stand-in for the projects backend, used by `dev` mode and tests.
#[derive(Debug, Clone)]
pub struct DevBackend {
    store: Arc<Mutex<DevStore>>,
}

#[derive(Debug)]
struct DevStore {
    projects: Vec<Project>,
    next_id: i64,
    offline: bool,
    calls: CallCounts,
}

/// Number of requests served per endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallCounts {
    pub list: usize,
    pub create: usize,
    pub delete: usize,
}

impl DevBackend {
    pub fn new() -> Self {
        let projects = seed_projects();
        let next_id = projects.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Self::with_projects(projects, next_id)
    }

    #[allow(dead_code)]
    pub fn empty() -> Self {
        Self::with_projects(Vec::new(), 1)
    }

    fn with_projects(projects: Vec<Project>, next_id: i64) -> Self {
        Self {
            store: Arc::new(Mutex::new(DevStore {
                projects,
                next_id,
                offline: false,
                calls: CallCounts::default(),
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, DevStore> {
        self.store.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Make every following request fail as if the server were down.
    #[allow(dead_code)]
    pub fn set_offline(&self, offline: bool) {
        self.lock().offline = offline;
    }

    #[allow(dead_code)]
    pub fn calls(&self) -> CallCounts {
        self.lock().calls
    }

    /// The stored copy of a project, bypassing the call counters.
    #[allow(dead_code)]
    pub fn project(&self, id: i64) -> Option<Project> {
        self.lock().projects.iter().find(|p| p.id == id).cloned()
    }

    pub(super) fn list(&self) -> Result<Vec<Project>, ApiError> {
        let mut store = self.lock();
        store.calls.list += 1;
        ensure_online(&store, "GET /api/projects/")?;

        let mut projects = store.projects.clone();
        projects.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(projects)
    }

    pub(super) fn create(&self, request: &CreateProjectRequest<'_>) -> Result<Project, ApiError> {
        let mut store = self.lock();
        store.calls.create += 1;
        ensure_online(&store, "POST /api/projects/")?;

        let name = request.name.trim();
        if name.is_empty() {
            return Err(ApiError::Status {
                call: "POST /api/projects/",
                status: StatusCode::BAD_REQUEST,
                message: "'name' is required".to_string(),
            });
        }

        let charts = serde_json::to_value(&request.charts).unwrap_or_default();
        let project = Project {
            id: store.next_id,
            name: name.to_string(),
            project_type: request.project_type,
            description: request.description.to_string(),
            created_date: OffsetDateTime::now_utc().date(),
            questions_answered: !request.answers.is_empty(),
            answers: request.answers.to_vec(),
            charts,
        };
        store.next_id += 1;
        store.projects.push(project.clone());
        Ok(project)
    }

    pub(super) fn delete(&self, id: i64) -> Result<(), ApiError> {
        let mut store = self.lock();
        store.calls.delete += 1;
        ensure_online(&store, "DELETE /api/projects/:id/")?;

        let before = store.projects.len();
        store.projects.retain(|p| p.id != id);
        if store.projects.len() == before {
            return Err(ApiError::Status {
                call: "DELETE /api/projects/:id/",
                status: StatusCode::NOT_FOUND,
                message: "Failed to delete project. Please try again.".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for DevBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn ensure_online(store: &DevStore, call: &'static str) -> Result<(), ApiError> {
    if store.offline {
        return Err(ApiError::Status {
            call,
            status: StatusCode::SERVICE_UNAVAILABLE,
            message: "Backend unavailable".to_string(),
        });
    }
    Ok(())
}

fn seed_projects() -> Vec<Project> {
    let today = OffsetDateTime::now_utc().date();
    let earlier = today.previous_day().unwrap_or(today);

    let project = |id: i64,
                   name: &str,
                   project_type: ProjectType,
                   description: &str,
                   answers: [&str; content::QUESTION_COUNT]| Project {
        id,
        name: name.to_string(),
        project_type,
        description: description.to_string(),
        created_date: if id == 1 { earlier } else { today },
        questions_answered: true,
        answers: answers.iter().map(|a| a.to_string()).collect(),
        charts: serde_json::Value::Null,
    };

    vec![
        project(
            1,
            "Handloom Collective",
            ProjectType::GrowBusiness,
            "Scale our handwoven sarees from local fairs to online buyers",
            [
                "Urban women aged 25-45 who value handmade textiles",
                "Handwoven sarees, stoles and home linen",
                "Instagram posts and seasonal craft fairs",
                "Inconsistent supply from weavers and slow shipping",
                "Double online revenue and open one flagship store",
            ],
        ),
        project(
            2,
            "Filter Coffee Co.",
            ProjectType::MarketEntry,
            "Bring South Indian filter coffee to cafés in Pune",
            [
                "Students and young professionals in Pune",
                "Filter coffee blends, brewing kits and café supply",
                "None yet, planning a launch campaign with local influencers",
                "Brand awareness and café distribution contracts",
                "Supply 20 cafés and reach break-even by month 9",
            ],
        ),
    ]
}
