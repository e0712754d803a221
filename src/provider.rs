//! Read-only snapshots of host scheduler state.
//!
//! [`CiStateProvider`] answers two questions for an external scheduler or
//! reporting layer: which nodes can take work right now, and which queued
//! items are waiting for one. It keeps no state of its own beyond the
//! collaborator handles it was built with, so every answer reflects the
//! host at the instant of the call.

use std::sync::Arc;

use serde::Serialize;

use crate::error::{CiStateError, Result};
use crate::host::{BuildQueue, ExecutionAgentLookup, NodeRegistry};
use crate::node::Node;
use crate::queue::QueueItem;

/// Read-only view of scheduler-relevant host state.
pub trait StateProvider {
    /// Nodes ready to execute builds, in the host's enumeration order.
    ///
    /// Never null; empty when no node currently qualifies.
    fn eligible_nodes(&self) -> Vec<Node>;

    /// Buildable queue items awaiting scheduling, in queue order.
    ///
    /// Never null; empty when the queue is empty.
    fn queued_items(&self) -> Vec<QueueItem>;
}

/// Combined result of one state query.
///
/// Carries no consistency guarantee with any later query; the host keeps
/// changing underneath.
#[derive(Debug, Clone, Serialize)]
pub struct ClusterSnapshot {
    pub nodes: Vec<Node>,
    pub queue: Vec<QueueItem>,
}

/// [`StateProvider`] backed by a live host controller.
pub struct CiStateProvider {
    registry: Arc<dyn NodeRegistry>,
    agents: Arc<dyn ExecutionAgentLookup>,
    queue: Arc<dyn BuildQueue>,
}

impl CiStateProvider {
    pub fn builder() -> CiStateProviderBuilder {
        CiStateProviderBuilder::default()
    }

    /// Wire a single host object that fulfills all three collaborator
    /// contracts into every slot.
    pub fn for_host<H>(host: Arc<H>) -> Self
    where
        H: NodeRegistry + ExecutionAgentLookup + BuildQueue + 'static,
    {
        Self {
            registry: host.clone(),
            agents: host.clone(),
            queue: host,
        }
    }

    /// Read eligible nodes and buildable items in one call.
    pub fn snapshot(&self) -> ClusterSnapshot {
        ClusterSnapshot {
            nodes: self.eligible_nodes(),
            queue: self.queued_items(),
        }
    }

    /// A node is ready iff it has an agent that is online and accepting
    /// tasks. Evaluated fresh on every call.
    fn node_ready(&self, node: &Node) -> bool {
        match self.agents.agent(node) {
            Some(agent) => !agent.is_offline() && agent.is_accepting_tasks(),
            None => false,
        }
    }
}

impl StateProvider for CiStateProvider {
    fn eligible_nodes(&self) -> Vec<Node> {
        let mut candidates = self.registry.nodes();
        candidates.push(self.registry.builtin_node());
        let total = candidates.len();

        let nodes: Vec<Node> = candidates
            .into_iter()
            .filter(|node| self.node_ready(node))
            .collect();

        tracing::debug!(
            eligible = nodes.len(),
            candidates = total,
            "Filtered node candidates"
        );

        nodes
    }

    fn queued_items(&self) -> Vec<QueueItem> {
        self.queue.buildable_items()
    }
}

/// Builder for [`CiStateProvider`].
///
/// All three collaborator handles are required. [`build`](Self::build) fails
/// with [`CiStateError::InvalidConfiguration`] when one is missing, so a
/// half-wired provider is never observable.
#[derive(Default)]
pub struct CiStateProviderBuilder {
    registry: Option<Arc<dyn NodeRegistry>>,
    agents: Option<Arc<dyn ExecutionAgentLookup>>,
    queue: Option<Arc<dyn BuildQueue>>,
}

impl CiStateProviderBuilder {
    pub fn registry(mut self, registry: Arc<dyn NodeRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn agents(mut self, agents: Arc<dyn ExecutionAgentLookup>) -> Self {
        self.agents = Some(agents);
        self
    }

    pub fn queue(mut self, queue: Arc<dyn BuildQueue>) -> Self {
        self.queue = Some(queue);
        self
    }

    pub fn build(self) -> Result<CiStateProvider> {
        let registry = self.registry.ok_or(CiStateError::InvalidConfiguration {
            missing: "node registry",
        })?;
        let agents = self.agents.ok_or(CiStateError::InvalidConfiguration {
            missing: "agent lookup",
        })?;
        let queue = self.queue.ok_or(CiStateError::InvalidConfiguration {
            missing: "build queue",
        })?;

        Ok(CiStateProvider {
            registry,
            agents,
            queue,
        })
    }
}
