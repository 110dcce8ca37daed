//! HTTP Task Store
//!
//! `reqwest` client for the `/api/tasks` REST endpoints.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Client, Response};

use super::TaskApi;
use crate::config::ApiConfig;
use crate::error::TaskError;
use crate::models::{Task, TaskDraft};

const TASKS_PATH: &str = "/api/tasks";

/// Characters left as-is inside a single path segment
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Debug, Clone)]
pub struct HttpTaskApi {
    client: Client,
    base_url: String,
}

impl HttpTaskApi {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.clone(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, TASKS_PATH)
    }

    fn task_url(&self, id: &str) -> String {
        format!(
            "{}/{}",
            self.collection_url(),
            utf8_percent_encode(id, PATH_SEGMENT)
        )
    }
}

fn ensure_success(response: Response) -> Result<Response, TaskError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(TaskError::Status(status.as_u16()))
    }
}

#[async_trait(?Send)]
impl TaskApi for HttpTaskApi {
    async fn list(&self) -> Result<Vec<Task>, TaskError> {
        let response = self.client.get(self.collection_url()).send().await?;
        Ok(ensure_success(response)?.json().await?)
    }

    async fn create(&self, draft: &TaskDraft) -> Result<Task, TaskError> {
        let response = self
            .client
            .post(self.collection_url())
            .json(draft)
            .send()
            .await?;
        Ok(ensure_success(response)?.json().await?)
    }

    async fn update(&self, id: &str, draft: &TaskDraft) -> Result<Task, TaskError> {
        let response = self.client.put(self.task_url(id)).json(draft).send().await?;
        Ok(ensure_success(response)?.json().await?)
    }

    async fn delete(&self, id: &str) -> Result<(), TaskError> {
        let response = self.client.delete(self.task_url(id)).send().await?;
        ensure_success(response)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn setup() -> (MockServer, HttpTaskApi) {
        let server = MockServer::start().await;
        let api = HttpTaskApi::new(&ApiConfig::new(&server.uri()));
        (server, api)
    }

    #[test]
    fn test_task_url_encodes_id() {
        let api = HttpTaskApi::new(&ApiConfig::new("http://localhost:5000/"));
        assert_eq!(api.collection_url(), "http://localhost:5000/api/tasks");
        assert_eq!(
            api.task_url("a1-b2"),
            "http://localhost:5000/api/tasks/a1-b2"
        );
        assert_eq!(
            api.task_url("a/b c"),
            "http://localhost:5000/api/tasks/a%2Fb%20c"
        );
    }

    #[tokio::test]
    async fn test_list_tasks() {
        let (server, api) = setup().await;
        Mock::given(method("GET"))
            .and(path("/api/tasks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "_id": "1", "name": "Buy milk", "completed": false },
                { "_id": "2", "name": "Walk dog", "completed": true },
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let tasks = api.list().await.expect("list failed");
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[1].id, "2");
        assert!(tasks[1].completed);
    }

    #[tokio::test]
    async fn test_create_posts_draft() {
        let (server, api) = setup().await;
        Mock::given(method("POST"))
            .and(path("/api/tasks"))
            .and(body_json(json!({ "name": "Buy milk", "completed": false })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "_id": "9", "name": "Buy milk", "completed": false,
            })))
            .expect(1)
            .mount(&server)
            .await;

        let created = api
            .create(&TaskDraft::new("Buy milk", false))
            .await
            .expect("create failed");
        assert_eq!(created.id, "9");
    }

    #[tokio::test]
    async fn test_update_puts_to_task_path() {
        let (server, api) = setup().await;
        Mock::given(method("PUT"))
            .and(path("/api/tasks/9"))
            .and(body_json(json!({ "name": "Buy oat milk", "completed": true })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "_id": "9", "name": "Buy oat milk", "completed": true,
            })))
            .expect(1)
            .mount(&server)
            .await;

        let updated = api
            .update("9", &TaskDraft::new("Buy oat milk", true))
            .await
            .expect("update failed");
        assert!(updated.completed);
    }

    #[tokio::test]
    async fn test_delete_ignores_confirmation_body() {
        let (server, api) = setup().await;
        Mock::given(method("DELETE"))
            .and(path("/api/tasks/9"))
            .respond_with(ResponseTemplate::new(200).set_body_string("Task deleted"))
            .expect(1)
            .mount(&server)
            .await;

        api.delete("9").await.expect("delete failed");
    }

    #[tokio::test]
    async fn test_error_status_maps_to_status_error() {
        let (server, api) = setup().await;
        Mock::given(method("DELETE"))
            .and(path("/api/tasks/gone"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "msg": "No task with id: gone",
            })))
            .mount(&server)
            .await;

        let err = api.delete("gone").await.unwrap_err();
        assert!(matches!(err, TaskError::Status(404)));
        assert_eq!(err.to_string(), "Request failed with status code 404");
    }

    #[tokio::test]
    async fn test_unreachable_store_is_http_error() {
        let api = HttpTaskApi::new(&ApiConfig::new("http://127.0.0.1:1"));
        let err = api.list().await.unwrap_err();
        assert!(matches!(err, TaskError::Http(_)));
        assert!(!err.is_validation());
    }
}
