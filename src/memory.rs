//! In-memory host controller for tests and embedding without a live CI
//! system.
//!
//! [`InMemoryCluster`] fulfills all three collaborator contracts, so one
//! `Arc<InMemoryCluster>` can back a whole provider via
//! [`CiStateProvider::for_host`](crate::provider::CiStateProvider::for_host).

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use crate::host::{BuildQueue, ExecutionAgentLookup, NodeRegistry};
use crate::node::{ExecutionAgent, Node, NodeId};
use crate::queue::QueueItem;

/// Agent whose availability flags can be flipped while handles to it are
/// already shared. Queries observe the current flag values.
#[derive(Debug)]
pub struct InMemoryAgent {
    offline: AtomicBool,
    accepting_tasks: AtomicBool,
}

impl InMemoryAgent {
    pub fn new(offline: bool, accepting_tasks: bool) -> Arc<Self> {
        Arc::new(Self {
            offline: AtomicBool::new(offline),
            accepting_tasks: AtomicBool::new(accepting_tasks),
        })
    }

    /// Agent that is online and accepting tasks.
    pub fn ready() -> Arc<Self> {
        Self::new(false, true)
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn set_accepting_tasks(&self, accepting: bool) {
        self.accepting_tasks.store(accepting, Ordering::SeqCst);
    }
}

impl ExecutionAgent for InMemoryAgent {
    fn is_offline(&self) -> bool {
        self.offline.load(Ordering::SeqCst)
    }

    fn is_accepting_tasks(&self) -> bool {
        self.accepting_tasks.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Default)]
struct ClusterInner {
    // Registration order doubles as the enumeration order reported to the
    // provider.
    nodes: Vec<Node>,
    agents: HashMap<NodeId, Arc<InMemoryAgent>>,
    items: Vec<QueueItem>,
}

/// Host controller double holding registry, agents, and queue in memory.
#[derive(Debug)]
pub struct InMemoryCluster {
    builtin: Node,
    inner: RwLock<ClusterInner>,
}

impl Default for InMemoryCluster {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryCluster {
    pub fn new() -> Self {
        Self::with_builtin(Node::new(0, "built-in"))
    }

    pub fn with_builtin(builtin: Node) -> Self {
        Self {
            builtin,
            inner: RwLock::new(ClusterInner::default()),
        }
    }

    /// Register a node without an agent.
    pub fn register_node(&self, node: Node) {
        let mut inner = self.inner.write().expect("cluster lock poisoned");
        tracing::debug!(node_id = %node.id, name = %node.name, "Node registered");
        inner.nodes.push(node);
    }

    /// Register a node and attach its agent in one step.
    pub fn register_node_with_agent(&self, node: Node, agent: Arc<InMemoryAgent>) {
        let mut inner = self.inner.write().expect("cluster lock poisoned");
        tracing::debug!(node_id = %node.id, name = %node.name, "Node registered");
        inner.agents.insert(node.id, agent);
        inner.nodes.push(node);
    }

    pub fn attach_agent(&self, id: NodeId, agent: Arc<InMemoryAgent>) {
        let mut inner = self.inner.write().expect("cluster lock poisoned");
        inner.agents.insert(id, agent);
    }

    pub fn detach_agent(&self, id: NodeId) {
        let mut inner = self.inner.write().expect("cluster lock poisoned");
        inner.agents.remove(&id);
    }

    /// Attach the agent that answers for the built-in node.
    pub fn attach_builtin_agent(&self, agent: Arc<InMemoryAgent>) {
        self.attach_agent(self.builtin.id, agent);
    }

    pub fn remove_node(&self, id: NodeId) {
        let mut inner = self.inner.write().expect("cluster lock poisoned");
        inner.nodes.retain(|node| node.id != id);
        inner.agents.remove(&id);
    }

    /// Append an item to the buildable queue. FIFO order is preserved.
    pub fn enqueue(&self, item: QueueItem) {
        let mut inner = self.inner.write().expect("cluster lock poisoned");
        inner.items.push(item);
    }

    pub fn clear_queue(&self) {
        let mut inner = self.inner.write().expect("cluster lock poisoned");
        inner.items.clear();
    }
}

impl NodeRegistry for InMemoryCluster {
    fn nodes(&self) -> Vec<Node> {
        self.inner.read().expect("cluster lock poisoned").nodes.clone()
    }

    fn builtin_node(&self) -> Node {
        self.builtin.clone()
    }
}

impl ExecutionAgentLookup for InMemoryCluster {
    fn agent(&self, node: &Node) -> Option<Arc<dyn ExecutionAgent>> {
        let inner = self.inner.read().expect("cluster lock poisoned");
        inner
            .agents
            .get(&node.id)
            .map(|agent| agent.clone() as Arc<dyn ExecutionAgent>)
    }
}

impl BuildQueue for InMemoryCluster {
    fn buildable_items(&self) -> Vec<QueueItem> {
        self.inner.read().expect("cluster lock poisoned").items.clone()
    }
}
