use thiserror::Error;

use crate::api::ApiError;
use crate::types::Project;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Project not found: {0}")]
    NotFound(i64),
}

/// Local cache of the backend's projects, in backend order.
#[derive(Debug, Clone, Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn find_by_id(&self, id: i64) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn get(&self, id: i64) -> Result<&Project, StoreError> {
        self.find_by_id(id).ok_or(StoreError::NotFound(id))
    }

    /// Apply the result of a full fetch. Success replaces the cache as a
    /// whole; failure leaves it empty.
    pub fn apply_load(&mut self, result: Result<Vec<Project>, ApiError>) -> Result<usize, ApiError> {
        match result {
            Ok(projects) => {
                self.projects = projects;
                Ok(self.projects.len())
            }
            Err(e) => {
                self.projects.clear();
                Err(e)
            }
        }
    }

    /// Cache a freshly created project until the follow-up reload lands.
    /// The backend lists newest first, so it goes to the front.
    pub fn insert(&mut self, project: Project) {
        self.projects.retain(|p| p.id != project.id);
        self.projects.insert(0, project);
    }

    pub fn remove(&mut self, id: i64) -> Option<Project> {
        let index = self.projects.iter().position(|p| p.id == id)?;
        Some(self.projects.remove(index))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::types::ProjectType;
    use reqwest::StatusCode;
    use time::macros::date;

    pub(crate) fn project(id: i64, name: &str) -> Project {
        Project {
            id,
            name: name.to_string(),
            project_type: ProjectType::GrowBusiness,
            description: String::new(),
            created_date: date!(2026 - 10 - 16),
            questions_answered: true,
            answers: vec!["a".to_string(); 5],
            charts: serde_json::Value::Null,
        }
    }

    fn offline() -> ApiError {
        ApiError::Status {
            call: "GET /api/projects/",
            status: StatusCode::SERVICE_UNAVAILABLE,
            message: "Backend unavailable".to_string(),
        }
    }

    #[test]
    fn load_replaces_cache_in_response_order() {
        let mut store = ProjectStore::new();
        store.insert(project(9, "stale"));

        let loaded = store
            .apply_load(Ok(vec![project(2, "b"), project(5, "e"), project(1, "a")]))
            .unwrap();

        assert_eq!(loaded, 3);
        let ids: Vec<i64> = store.projects().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 5, 1]);
        assert!(store.find_by_id(9).is_none());
    }

    #[test]
    fn failed_load_empties_cache() {
        let mut store = ProjectStore::new();
        store.apply_load(Ok(vec![project(1, "a")])).unwrap();

        assert!(store.apply_load(Err(offline())).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn removing_unknown_id_leaves_cache_unchanged() {
        let mut store = ProjectStore::new();
        store.apply_load(Ok(vec![project(1, "a"), project(2, "b")])).unwrap();

        assert!(store.remove(3).is_none());
        assert_eq!(store.len(), 2);
        assert_eq!(store.remove(1).map(|p| p.name), Some("a".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn insert_replaces_same_id() {
        let mut store = ProjectStore::new();
        store.insert(project(1, "draft"));
        store.insert(project(1, "canonical"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(1).unwrap().name, "canonical");
        assert_eq!(store.get(2), Err(StoreError::NotFound(2)));
    }
}
