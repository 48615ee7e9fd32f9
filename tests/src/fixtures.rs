//! Shared builders for levels, profiles, and defaults.

use shared_types::{
    GlobalRewardDefaults, Level, LevelNode, NetworkCode, NodeData, RewardTransaction, TxStatus,
    UserRewardProfile,
};
use std::collections::BTreeMap;

pub fn network(code: &str) -> NetworkCode {
    NetworkCode::from(code)
}

pub fn fingerprint_node(id: &str, currency: &str, amount: f64) -> LevelNode {
    LevelNode {
        id: id.into(),
        kind: "fingerprint".into(),
        data: NodeData {
            transaction: Some(RewardTransaction {
                id: format!("tx-{id}"),
                currency: network(currency),
                amount,
                status: TxStatus::Success,
                date: Some("2024-11-02".into()),
                tx_hash: None,
            }),
            extra: Default::default(),
        },
        extra: Default::default(),
    }
}

pub fn account_node(id: &str) -> LevelNode {
    LevelNode {
        id: id.into(),
        kind: "account".into(),
        data: NodeData::default(),
        extra: Default::default(),
    }
}

pub fn level(number: u32, nodes: Vec<LevelNode>) -> Level {
    Level {
        number,
        name: format!("Level {number}"),
        nodes,
        edges: vec![],
    }
}

pub fn profile(user_id: &str, slots: &[(u32, &str, f64)]) -> UserRewardProfile {
    let mut overrides: BTreeMap<u32, BTreeMap<NetworkCode, f64>> = BTreeMap::new();
    for &(lvl, code, amount) in slots {
        overrides.entry(lvl).or_default().insert(network(code), amount);
    }
    UserRewardProfile {
        user_id: user_id.into(),
        overrides,
    }
}

pub fn globals(slots: &[(u32, &str, f64)]) -> GlobalRewardDefaults {
    let mut defaults: BTreeMap<u32, BTreeMap<NetworkCode, f64>> = BTreeMap::new();
    for &(lvl, code, amount) in slots {
        defaults.entry(lvl).or_default().insert(network(code), amount);
    }
    GlobalRewardDefaults { defaults }
}
