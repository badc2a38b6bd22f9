//! Transaction outputs returned by the matches endpoint.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::scalars::{deserialize_assets, deserialize_quantity};

/// Unit name used for ada in [`Value::quantity_of`].
pub const LOVELACE: &str = "lovelace";

/// A point on chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub slot_no: u64,
    pub header_hash: String,
}

/// Value locked in an output: lovelace plus native assets keyed by `policy_id.asset_name`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Value {
    #[serde(default, deserialize_with = "deserialize_quantity")]
    pub coins: u64,
    #[serde(default, deserialize_with = "deserialize_assets")]
    pub assets: BTreeMap<String, u64>,
}

impl Value {
    /// Quantity of a unit, `lovelace` or `policy_id.asset_name`. Missing units are zero.
    pub fn quantity_of(&self, unit: &str) -> u64 {
        if unit == LOVELACE {
            return self.coins;
        }
        self.assets.get(unit).copied().unwrap_or(0)
    }
}

/// A transaction output matched by a query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Match {
    pub transaction_index: u32,
    pub transaction_id: String,
    pub output_index: u32,
    pub address: String,
    pub datum_hash: Option<String>,
    pub datum_type: Option<String>,
    pub value: Value,
    pub created_at: Point,
    pub spent_at: Option<Point>,
    pub script_hash: Option<String>,
}

impl Match {
    /// Whether the output has been consumed.
    pub fn is_spent(&self) -> bool {
        self.spent_at.is_some()
    }

    /// Output reference in Kupo's `index@transaction_id` form.
    pub fn output_reference(&self) -> String {
        format!("{}@{}", self.output_index, self.transaction_id)
    }
}
