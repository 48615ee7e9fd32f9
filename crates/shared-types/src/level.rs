//! Level graph read model
//!
//! Levels are admin-edited node/edge graphs exported as JSON
//! (`{ "nodes": [...], "edges": [...] }`). Only nodes tagged `"fingerprint"`
//! carry a reward transaction; every other node kind is inert passthrough
//! data and must survive any transform unchanged, including fields this
//! core does not model (kept in flattened `extra` maps).

use crate::network::NetworkCode;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Node kind tag for reward-bearing nodes.
pub const FINGERPRINT_KIND: &str = "fingerprint";

/// A gamification level: a numbered stage with its own node/edge graph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Level {
    /// Level number (1-based; the range is configuration, not a type bound)
    #[serde(default)]
    pub number: u32,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Graph vertices
    #[serde(default)]
    pub nodes: Vec<LevelNode>,
    /// Graph edges, opaque to this core
    #[serde(default)]
    pub edges: Vec<LevelEdge>,
}

impl Level {
    /// Parse a level from the admin JSON export format.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize back to the admin JSON export format.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Iterate over the fingerprint nodes, in graph order.
    pub fn fingerprint_nodes(&self) -> impl Iterator<Item = &LevelNode> {
        self.nodes.iter().filter(|n| n.is_fingerprint())
    }

    /// Transaction amounts currently recorded for one network, in graph order.
    pub fn amounts_for(&self, network: &NetworkCode) -> Vec<f64> {
        self.fingerprint_nodes()
            .filter_map(|n| n.data.transaction.as_ref())
            .filter(|tx| &tx.currency == network)
            .map(|tx| tx.amount)
            .collect()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// A graph vertex. The `kind` tag is an open string set; only
/// [`FINGERPRINT_KIND`] has meaning to this core.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LevelNode {
    /// Opaque identifier, stable across transforms
    pub id: String,
    /// Node kind tag
    #[serde(rename = "type")]
    pub kind: String,
    /// Node payload
    #[serde(default)]
    pub data: NodeData,
    /// Fields this core does not model, preserved verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LevelNode {
    pub fn is_fingerprint(&self) -> bool {
        self.kind == FINGERPRINT_KIND
    }
}

/// Node payload. Fingerprint nodes carry a transaction; other kinds do not.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction: Option<RewardTransaction>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The simulated reward transaction embedded in a fingerprint node.
///
/// `amount` is the only field the distribution engine overwrites.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RewardTransaction {
    /// Opaque identifier, stable across transforms
    pub id: String,
    /// Network this transaction settles on
    pub currency: NetworkCode,
    /// Reward amount, non-negative
    pub amount: f64,
    /// Informational; does not gate distribution eligibility
    #[serde(default)]
    pub status: TxStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// On-chain transaction hash shown in the reveal animation
    #[serde(default, rename = "transaction", skip_serializing_if = "Option::is_none")]
    pub tx_hash: Option<String>,
}

/// Display status of a simulated transaction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxStatus {
    Success,
    Fail,
    #[default]
    Pending,
}

/// A graph edge. Entirely opaque to this core; carried through transforms.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LevelEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
