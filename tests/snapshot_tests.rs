use std::sync::Arc;

use chrono::{TimeZone, Utc};
use uuid::Uuid;

use ci_state::memory::{InMemoryAgent, InMemoryCluster};
use ci_state::node::Node;
use ci_state::provider::CiStateProvider;
use ci_state::queue::QueueItem;

#[test]
fn test_snapshot_combines_nodes_and_queue() {
    let cluster = Arc::new(InMemoryCluster::new());
    cluster.register_node_with_agent(Node::new(1, "a"), InMemoryAgent::ready());
    cluster.enqueue(QueueItem::new("build-1"));

    let provider = CiStateProvider::for_host(cluster);
    let snapshot = provider.snapshot();

    assert_eq!(snapshot.nodes.len(), 1);
    assert_eq!(snapshot.nodes[0].name, "a");
    assert_eq!(snapshot.queue.len(), 1);
    assert_eq!(snapshot.queue[0].task, "build-1");
}

#[test]
fn test_snapshots_are_independent() {
    let cluster = Arc::new(InMemoryCluster::new());
    let agent = InMemoryAgent::ready();
    cluster.register_node_with_agent(Node::new(1, "a"), agent.clone());
    cluster.enqueue(QueueItem::new("build-1"));

    let provider = CiStateProvider::for_host(cluster.clone());
    let before = provider.snapshot();

    agent.set_offline(true);
    cluster.clear_queue();
    let after = provider.snapshot();

    // The first snapshot keeps what it saw; the second reflects the host's
    // new state.
    assert_eq!(before.nodes.len(), 1);
    assert_eq!(before.queue.len(), 1);
    assert!(after.nodes.is_empty());
    assert!(after.queue.is_empty());
}

#[test]
fn test_snapshot_serializes_to_json() {
    let cluster = Arc::new(InMemoryCluster::new());
    cluster.register_node_with_agent(Node::new(7, "linux-builder"), InMemoryAgent::ready());

    let enqueued_at = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();
    let id = Uuid::nil();
    cluster.enqueue(QueueItem::with_id(id, "release-build", enqueued_at));

    let provider = CiStateProvider::for_host(cluster);
    let json = serde_json::to_value(provider.snapshot()).expect("snapshot serializes");

    assert_eq!(json["nodes"][0]["id"], 7);
    assert_eq!(json["nodes"][0]["name"], "linux-builder");
    assert_eq!(json["queue"][0]["task"], "release-build");
    assert_eq!(json["queue"][0]["id"], id.to_string());
}
