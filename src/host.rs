//! Contracts the host controller fulfills for this crate.
//!
//! The provider depends on these traits, never on a concrete host type, so
//! an embedding application wires in its live controller and tests wire in
//! [`InMemoryCluster`](crate::memory::InMemoryCluster).

use std::sync::Arc;

use crate::node::{ExecutionAgent, Node};
use crate::queue::QueueItem;

/// Registry of nodes known to the host controller.
pub trait NodeRegistry: Send + Sync {
    /// All registered nodes, in the host's enumeration order.
    fn nodes(&self) -> Vec<Node>;

    /// The controller's own built-in node.
    ///
    /// The host itself is a candidate for running work, alongside the
    /// registered nodes; it is enumerated after them.
    fn builtin_node(&self) -> Node;
}

/// Resolves the live execution agent attached to a node.
pub trait ExecutionAgentLookup: Send + Sync {
    /// Returns `None` when the node has no attached agent, e.g. before its
    /// first connection.
    fn agent(&self, node: &Node) -> Option<Arc<dyn ExecutionAgent>>;
}

/// The host controller's build queue.
pub trait BuildQueue: Send + Sync {
    /// Items currently ready to build, in the queue's native order.
    fn buildable_items(&self) -> Vec<QueueItem>;
}
