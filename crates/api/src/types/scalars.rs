//! Numeric scalars as Kupo serializes them.
//!
//! Quantities are usually JSON numbers, but some deployments (and proxies in front of
//! them) send them as strings to dodge 53-bit float limits in JavaScript clients. Both
//! forms are accepted.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

struct QuantityVisitor;

impl<'de> Visitor<'de> for QuantityVisitor {
    type Value = u64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an unsigned integer or a numeric string")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<u64, E> {
        Ok(value)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<u64, E> {
        u64::try_from(value).map_err(|_| E::custom(format!("negative quantity: {}", value)))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<u64, E> {
        value
            .parse()
            .map_err(|_| E::custom(format!("invalid quantity: {}", value)))
    }
}

/// Deserialize a quantity given as a number or a numeric string.
pub fn deserialize_quantity<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(QuantityVisitor)
}

#[derive(Deserialize)]
struct Quantity(#[serde(deserialize_with = "deserialize_quantity")] u64);

/// Deserialize a `policy.asset → quantity` map; `null` is an empty map.
pub fn deserialize_assets<'de, D>(deserializer: D) -> Result<BTreeMap<String, u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<BTreeMap<String, Quantity>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(unit, Quantity(quantity))| (unit, quantity))
        .collect())
}
