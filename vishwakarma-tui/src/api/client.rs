use anyhow::{Context, Result};
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

use crate::api::dev_backend::DevBackend;
use crate::api::dto::{ChartsSnapshot, CreateProjectRequest, ErrorBody, ProjectsResponse};
use crate::api::ApiError;
use crate::types::{NewProject, Project};

const LOAD_FAILED: &str = "Failed to load projects";
const CREATE_FAILED: &str = "Failed to create project";
const DELETE_FAILED: &str = "Failed to delete project. Please try again.";

/// Client for the projects REST API. Cheap to clone; clones share the
/// connection pool (or the dev backend).
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
    dev_backend: Option<DevBackend>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .with_context(|| format!("Invalid API URL: {}", base_url))?;
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url,
            dev_backend: None,
        })
    }

    pub fn dev() -> Result<Self> {
        Self::with_dev_backend(DevBackend::new())
    }

    pub fn with_dev_backend(backend: DevBackend) -> Result<Self> {
        let base_url = Url::parse("http://localhost")?;
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url,
            dev_backend: Some(backend),
        })
    }

    pub fn is_dev(&self) -> bool {
        self.dev_backend.is_some()
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::Url(format!("{}: {}", path, e)))
    }

    async fn send(
        &self,
        request: RequestBuilder,
        call: &'static str,
        default_message: &str,
    ) -> Result<Response, ApiError> {
        let response = request
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|source| ApiError::Transport { call, source })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error)
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| default_message.to_string());
        tracing::warn!(%status, call, "backend returned an error: {}", message);
        Err(ApiError::Status {
            call,
            status,
            message,
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        call: &'static str,
        default_message: &str,
    ) -> Result<T, ApiError> {
        let response = self.send(request, call, default_message).await?;
        response
            .json::<T>()
            .await
            .map_err(|source| ApiError::Decode { call, source })
    }

    /// GET /api/projects/ — the full collection, in backend order.
    pub async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        if let Some(dev) = &self.dev_backend {
            return dev.list();
        }

        let response: ProjectsResponse = self
            .get_json(
                self.client.get(self.endpoint("/api/projects/")?),
                "GET /api/projects/",
                LOAD_FAILED,
            )
            .await?;
        Ok(response.into_projects())
    }

    /// POST /api/projects/ — returns the backend's canonical copy.
    pub async fn create_project(&self, project: &NewProject) -> Result<Project, ApiError> {
        let body = CreateProjectRequest {
            name: &project.name,
            project_type: project.project_type,
            description: &project.description,
            answers: &project.answers,
            charts: ChartsSnapshot::from_catalog(),
        };

        if let Some(dev) = &self.dev_backend {
            return dev.create(&body);
        }

        self.get_json(
            self.client
                .post(self.endpoint("/api/projects/")?)
                .json(&body),
            "POST /api/projects/",
            CREATE_FAILED,
        )
        .await
    }

    /// DELETE /api/projects/:id/ — the response body is ignored.
    pub async fn delete_project(&self, id: i64) -> Result<(), ApiError> {
        if let Some(dev) = &self.dev_backend {
            return dev.delete(id);
        }

        let response = self
            .send(
                self.client
                    .delete(self.endpoint(&format!("/api/projects/{}/", id))?),
                "DELETE /api/projects/:id/",
                DELETE_FAILED,
            )
            .await?;
        let _ = response.bytes().await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProjectType;

    fn draft(name: &str) -> NewProject {
        NewProject {
            name: name.to_string(),
            project_type: ProjectType::MarketEntry,
            description: "Masala chai for Berlin".to_string(),
            answers: (1..=5).map(|i| format!("answer {i}")).collect(),
        }
    }

    #[test]
    fn rejects_invalid_base_url() {
        assert!(ApiClient::new("not a url").is_err());
    }

    #[test]
    fn endpoints_join_onto_base_url() {
        let client = ApiClient::new("http://localhost:8000/").unwrap();
        assert_eq!(
            client.endpoint("/api/projects/3/").unwrap().as_str(),
            "http://localhost:8000/api/projects/3/"
        );
    }

    #[tokio::test]
    async fn create_then_list_round_trips_draft() {
        let client = ApiClient::with_dev_backend(DevBackend::empty()).unwrap();

        let created = client.create_project(&draft("Chai Berlin")).await.unwrap();
        let projects = client.list_projects().await.unwrap();

        let listed = projects.iter().find(|p| p.id == created.id).unwrap();
        assert_eq!(listed.name, "Chai Berlin");
        assert_eq!(listed.project_type, ProjectType::MarketEntry);
        assert_eq!(listed.description, "Masala chai for Berlin");
        assert_eq!(listed.answers, draft("Chai Berlin").answers);
        assert!(listed.questions_answered);
    }

    #[tokio::test]
    async fn create_sends_chart_snapshot() {
        let client = ApiClient::with_dev_backend(DevBackend::empty()).unwrap();
        let created = client.create_project(&draft("Charts")).await.unwrap();
        assert_eq!(created.charts["analysis"][1]["chartType"], "bar");
    }

    #[tokio::test]
    async fn backend_error_message_is_propagated() {
        let client = ApiClient::with_dev_backend(DevBackend::empty()).unwrap();
        let err = client.create_project(&draft("   ")).await.unwrap_err();
        assert_eq!(err.to_string(), "'name' is required");
        assert!(matches!(
            err,
            ApiError::Status { status, .. } if status == reqwest::StatusCode::BAD_REQUEST
        ));
    }

    #[tokio::test]
    async fn list_newest_first() {
        let client = ApiClient::dev().unwrap();
        let created = client.create_project(&draft("Newest")).await.unwrap();
        let projects = client.list_projects().await.unwrap();
        assert_eq!(projects[0].id, created.id);
    }

    #[tokio::test]
    async fn delete_unknown_project_fails() {
        let client = ApiClient::with_dev_backend(DevBackend::empty()).unwrap();
        assert!(client.delete_project(42).await.is_err());
    }
}
