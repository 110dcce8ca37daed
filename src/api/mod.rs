//! Remote Task Store
//!
//! The store the task list reads from and writes to. The browser build talks
//! to it over HTTP; tests swap in an in-memory fake.

mod http;

use async_trait::async_trait;

use crate::error::TaskError;
use crate::models::{Task, TaskDraft};

pub use http::HttpTaskApi;

#[async_trait(?Send)]
pub trait TaskApi {
    /// GET all tasks
    async fn list(&self) -> Result<Vec<Task>, TaskError>;

    /// POST a new task, returns it with its assigned id
    async fn create(&self, draft: &TaskDraft) -> Result<Task, TaskError>;

    /// PUT name and completion of an existing task
    async fn update(&self, id: &str, draft: &TaskDraft) -> Result<Task, TaskError>;

    async fn delete(&self, id: &str) -> Result<(), TaskError>;
}
