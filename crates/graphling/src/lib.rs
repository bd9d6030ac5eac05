use parking_lot::RwLock;
use std::collections::HashMap;

pub mod api;
pub mod error;
pub mod telemetry;

pub use error::GraphError;

// Re-export logging macros for consistent usage across the crate
pub use log::{debug, error, info, trace, warn};

// =============================================================================
// CORE DATA STRUCTURES
// =============================================================================

/// Property values are arbitrary JSON, keyed by name.
pub type PropertyMap = HashMap<String, serde_json::Value>;

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Node {
    pub id: u64,
    pub properties: PropertyMap,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Relationship {
    pub id: u64,
    pub start: u64,
    pub end: u64,
    #[serde(rename = "type")]
    pub rel_type: String,
    pub properties: PropertyMap,
}

/// Which relationships of a node to list, relative to that node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    All,
    Incoming,
    Outgoing,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::All => "all",
            Direction::Incoming => "in",
            Direction::Outgoing => "out",
        }
    }

    pub fn parse(s: &str) -> Option<Direction> {
        match s {
            "all" => Some(Direction::All),
            "in" | "incoming" => Some(Direction::Incoming),
            "out" | "outgoing" => Some(Direction::Outgoing),
            _ => None,
        }
    }
}

// =============================================================================
// GRAPH STORE
// =============================================================================

/// In-memory property graph used as the backing store for the test server.
///
/// All entities live behind a single lock: relationship endpoints must refer
/// to live nodes, and a node with attached relationships cannot be deleted,
/// so node and relationship mutations have to be checked together.
pub struct GraphStore {
    inner: RwLock<GraphInner>,
}

#[derive(Default)]
struct GraphInner {
    nodes: HashMap<u64, Node>,
    relationships: HashMap<u64, Relationship>,
    next_node_id: u64,
    next_relationship_id: u64,
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphStore {
    pub fn new() -> Self {
        GraphStore {
            inner: RwLock::new(GraphInner::default()),
        }
    }

    pub fn create_node(&self, properties: PropertyMap) -> Node {
        let mut inner = self.inner.write();
        let id = inner.next_node_id;
        inner.next_node_id += 1;
        let node = Node { id, properties };
        inner.nodes.insert(id, node.clone());
        node
    }

    pub fn node(&self, id: u64) -> Result<Node, GraphError> {
        self.inner
            .read()
            .nodes
            .get(&id)
            .cloned()
            .ok_or(GraphError::NodeNotFound { id })
    }

    /// Delete a node. Fails while relationships are still attached, mirroring
    /// the conflict semantics of the REST API this store backs.
    pub fn delete_node(&self, id: u64) -> Result<(), GraphError> {
        let mut inner = self.inner.write();
        if !inner.nodes.contains_key(&id) {
            return Err(GraphError::NodeNotFound { id });
        }
        let relationship_count = inner
            .relationships
            .values()
            .filter(|r| r.start == id || r.end == id)
            .count();
        if relationship_count > 0 {
            return Err(GraphError::NodeInUse {
                id,
                relationship_count,
            });
        }
        inner.nodes.remove(&id);
        Ok(())
    }

    /// Replace a node's property map.
    pub fn set_node_properties(&self, id: u64, properties: PropertyMap) -> Result<Node, GraphError> {
        let mut inner = self.inner.write();
        match inner.nodes.get_mut(&id) {
            Some(node) => {
                node.properties = properties;
                Ok(node.clone())
            }
            None => Err(GraphError::NodeNotFound { id }),
        }
    }

    pub fn node_properties(&self, id: u64) -> Result<PropertyMap, GraphError> {
        self.node(id).map(|node| node.properties)
    }

    /// Create a relationship between two live nodes. Self-relationships are
    /// allowed.
    pub fn create_relationship(
        &self,
        start: u64,
        end: u64,
        rel_type: String,
        properties: PropertyMap,
    ) -> Result<Relationship, GraphError> {
        let mut inner = self.inner.write();
        if !inner.nodes.contains_key(&start) {
            return Err(GraphError::NodeNotFound { id: start });
        }
        if !inner.nodes.contains_key(&end) {
            return Err(GraphError::NodeNotFound { id: end });
        }
        let id = inner.next_relationship_id;
        inner.next_relationship_id += 1;
        let relationship = Relationship {
            id,
            start,
            end,
            rel_type,
            properties,
        };
        inner.relationships.insert(id, relationship.clone());
        Ok(relationship)
    }

    pub fn relationship(&self, id: u64) -> Result<Relationship, GraphError> {
        self.inner
            .read()
            .relationships
            .get(&id)
            .cloned()
            .ok_or(GraphError::RelationshipNotFound { id })
    }

    pub fn delete_relationship(&self, id: u64) -> Result<(), GraphError> {
        match self.inner.write().relationships.remove(&id) {
            Some(_) => Ok(()),
            None => Err(GraphError::RelationshipNotFound { id }),
        }
    }

    /// List a node's relationships in the given direction, ordered by id.
    pub fn relationships_for(
        &self,
        id: u64,
        direction: Direction,
    ) -> Result<Vec<Relationship>, GraphError> {
        let inner = self.inner.read();
        if !inner.nodes.contains_key(&id) {
            return Err(GraphError::NodeNotFound { id });
        }
        let mut relationships: Vec<Relationship> = inner
            .relationships
            .values()
            .filter(|r| match direction {
                Direction::All => r.start == id || r.end == id,
                Direction::Outgoing => r.start == id,
                Direction::Incoming => r.end == id,
            })
            .cloned()
            .collect();
        relationships.sort_by_key(|r| r.id);
        Ok(relationships)
    }

    /// Remove every node and relationship, returning the removal counts.
    ///
    /// Id counters are not reset; a store never reuses an id within its
    /// lifetime.
    pub fn clean(&self) -> (u64, u64) {
        let mut inner = self.inner.write();
        let nodes_removed = inner.nodes.len() as u64;
        let relationships_removed = inner.relationships.len() as u64;
        inner.nodes.clear();
        inner.relationships.clear();
        (nodes_removed, relationships_removed)
    }

    pub fn node_count(&self) -> u64 {
        self.inner.read().nodes.len() as u64
    }

    pub fn relationship_count(&self) -> u64 {
        self.inner.read().relationships.len() as u64
    }
}
