//! Dynamic request bodies for deliberately invalid create-item payloads.
//!
//! Valid payloads are typed ([`NewItem`]); anything the service should
//! reject is built here as a `serde_json::Value` derived from a valid one,
//! so each scenario differs from a known-good body in exactly one field.

use crate::model::NewItem;
use serde_json::{Map, Value};

/// Top-level fields of a create-item body, by wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    SellerId,
    Name,
    Price,
    Statistics,
}

impl ItemField {
    pub const ALL: [ItemField; 4] = [
        ItemField::SellerId,
        ItemField::Name,
        ItemField::Price,
        ItemField::Statistics,
    ];

    pub fn wire_name(&self) -> &'static str {
        match self {
            ItemField::SellerId => "sellerID",
            ItemField::Name => "name",
            ItemField::Price => "price",
            ItemField::Statistics => "statistics",
        }
    }
}

/// The wire form of a valid payload as a mutable JSON object.
pub fn to_object(item: &NewItem) -> Map<String, Value> {
    match serde_json::to_value(item) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

pub fn without(item: &NewItem, field: ItemField) -> Value {
    let mut map = to_object(item);
    map.remove(field.wire_name());
    Value::Object(map)
}

pub fn with_override(item: &NewItem, field: ItemField, value: Value) -> Value {
    let mut map = to_object(item);
    map.insert(field.wire_name().to_string(), value);
    Value::Object(map)
}

pub fn empty_body() -> Value {
    Value::Object(Map::new())
}
