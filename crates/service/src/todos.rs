use async_trait::async_trait;
use uuid::Uuid;

use models::todo::{NewTodo, Todo, TodoPatch};

use crate::errors::ServiceError;

/// Trait abstraction for todo storage.
/// Implementations can be in-memory, file-backed, or database-backed.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// List items whose title contains `query` (case-insensitive);
    /// a blank query returns everything.
    async fn list(&self, query: &str) -> Vec<Todo>;
    async fn get(&self, id: Uuid) -> Option<Todo>;
    async fn create(&self, input: NewTodo) -> Result<Todo, ServiceError>;
    async fn update(&self, id: Uuid, patch: TodoPatch) -> Result<Todo, ServiceError>;
    /// Returns whether the id existed.
    async fn remove(&self, id: Uuid) -> Result<bool, ServiceError>;
}
