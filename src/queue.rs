use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One unit of pending work that has satisfied all prerequisites and is
/// ready to be assigned to a node.
///
/// Queue items are created, reordered, and retired by the host controller.
/// This crate only hands out owned copies of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueItem {
    pub id: Uuid,
    pub task: String,
    pub enqueued_at: DateTime<Utc>,
}

impl QueueItem {
    pub fn new(task: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            task: task.into(),
            enqueued_at: Utc::now(),
        }
    }

    pub fn with_id(id: Uuid, task: impl Into<String>, enqueued_at: DateTime<Utc>) -> Self {
        Self {
            id,
            task: task.into(),
            enqueued_at,
        }
    }
}
