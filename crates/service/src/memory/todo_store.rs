use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use models::todo::{NewTodo, Todo, TodoPatch};

use crate::cache::ListCache;
use crate::errors::ServiceError;
use crate::todos::TodoStore;

/// In-memory todo store with a short-lived cache for the unfiltered
/// listing. A single lock guards both the map and the cache slot so a
/// snapshot can never be filled concurrently with a write.
pub struct MemoryTodoStore {
    inner: RwLock<StoreInner>,
}

struct StoreInner {
    items: HashMap<Uuid, Todo>,
    cache: ListCache<Todo>,
}

impl MemoryTodoStore {
    pub fn new(cache_ttl: Duration) -> Arc<Self> {
        Arc::new(Self {
            inner: RwLock::new(StoreInner {
                items: HashMap::new(),
                cache: ListCache::new(cache_ttl),
            }),
        })
    }
}

#[async_trait]
impl TodoStore for MemoryTodoStore {
    async fn list(&self, query: &str) -> Vec<Todo> {
        let q = query.trim();
        if q.is_empty() {
            // 空查询走缓存；未命中则全量扫描并回填快照
            let mut inner = self.inner.write().await;
            if let Some(items) = inner.cache.fresh() {
                debug!(event = "list_cache_hit", count = items.len(), "serving cached listing");
                return items;
            }
            let items: Vec<Todo> = inner.items.values().cloned().collect();
            inner.cache.fill(items.clone());
            debug!(event = "list_cache_fill", count = items.len(), "refreshed cached listing");
            return items;
        }

        let needle = q.to_lowercase();
        let inner = self.inner.read().await;
        inner
            .items
            .values()
            .filter(|t| t.title.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    async fn get(&self, id: Uuid) -> Option<Todo> {
        let inner = self.inner.read().await;
        inner.items.get(&id).cloned()
    }

    async fn create(&self, input: NewTodo) -> Result<Todo, ServiceError> {
        input.validate()?;
        let todo = Todo::new(input.title, input.completed);
        let mut inner = self.inner.write().await;
        inner.items.insert(todo.id, todo.clone());
        inner.cache.invalidate();
        debug!(event = "list_cache_invalidated", reason = "create", id = %todo.id);
        Ok(todo)
    }

    async fn update(&self, id: Uuid, patch: TodoPatch) -> Result<Todo, ServiceError> {
        patch.validate()?;
        let mut inner = self.inner.write().await;
        let item = inner
            .items
            .get_mut(&id)
            .ok_or_else(|| ServiceError::not_found("todo"))?;
        if let Some(title) = patch.title {
            item.title = title;
        }
        if let Some(completed) = patch.completed {
            item.completed = completed;
        }
        item.updated_at = Utc::now();
        let updated = item.clone();
        inner.cache.invalidate();
        debug!(event = "list_cache_invalidated", reason = "update", id = %id);
        Ok(updated)
    }

    async fn remove(&self, id: Uuid) -> Result<bool, ServiceError> {
        let mut inner = self.inner.write().await;
        let existed = inner.items.remove(&id).is_some();
        if existed {
            inner.cache.invalidate();
            debug!(event = "list_cache_invalidated", reason = "remove", id = %id);
        }
        Ok(existed)
    }
}
