//! Network code value type
//!
//! Network codes identify a cryptocurrency or token network (BTC, ETH,
//! TRON, USDT, BNB, SOL, ...). The set is configuration data, not a closed
//! enum: new networks must work without touching this crate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A cryptocurrency network code, e.g. `"BTC"` or `"ETH"`.
///
/// Comparison is case-sensitive; the surrounding application stores codes
/// uppercased and this core treats them as opaque keys.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NetworkCode(String);

impl NetworkCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NetworkCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NetworkCode {
    fn from(code: &str) -> Self {
        Self(code.to_owned())
    }
}

impl From<String> for NetworkCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}
