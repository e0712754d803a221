use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity the host controller assigned to a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Handle to a node owned by the host controller.
///
/// Values handed out by this crate are owned copies; holding or mutating one
/// has no effect on the host's registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
}

impl Node {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: NodeId(id),
            name: name.into(),
        }
    }
}

/// Live connection to a node's executor.
///
/// Both queries report the agent's state at the moment of the call; callers
/// must not cache the answers.
pub trait ExecutionAgent: Send + Sync {
    /// Whether the agent has lost its connection to the node.
    fn is_offline(&self) -> bool;

    /// Whether the agent is willing to take new work.
    fn is_accepting_tasks(&self) -> bool;
}
