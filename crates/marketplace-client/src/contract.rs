//! Expected-response contracts of the marketplace API.
//!
//! Every check returns a [`ContractViolation`] carrying the HTTP status and
//! raw body of the offending response, so a failed assertion can be
//! diagnosed from the test output alone.

use crate::client::ApiResponse;
use crate::model::{Item, NewItem, Statistics};
use serde_json::Value;
use std::fmt;

pub const ITEM_FIELDS: [&str; 6] = ["id", "sellerId", "name", "price", "statistics", "createdAt"];
pub const STATISTICS_FIELDS: [&str; 3] = ["likes", "viewCount", "contacts"];

/// Status codes a response may carry.
///
/// `OneOf` covers endpoints whose documented behavior allows several codes
/// for the same input (malformed ids answer 400 or 404).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpectedStatus {
    Exact(u16),
    OneOf(Vec<u16>),
}

impl ExpectedStatus {
    pub fn one_of(codes: &[u16]) -> Self {
        ExpectedStatus::OneOf(codes.to_vec())
    }

    pub fn matches(&self, status: u16) -> bool {
        match self {
            ExpectedStatus::Exact(code) => *code == status,
            ExpectedStatus::OneOf(codes) => codes.contains(&status),
        }
    }
}

impl fmt::Display for ExpectedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpectedStatus::Exact(code) => write!(f, "{code}"),
            ExpectedStatus::OneOf(codes) => {
                let codes: Vec<String> = codes.iter().map(u16::to_string).collect();
                write!(f, "one of [{}]", codes.join(", "))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContractViolation {
    pub expectation: String,
    pub status: u16,
    pub body: String,
}

impl ContractViolation {
    pub fn new(expectation: impl Into<String>, response: &ApiResponse) -> Self {
        Self {
            expectation: expectation.into(),
            status: response.status(),
            body: response.body().to_string(),
        }
    }
}

impl fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (status {}, body: {})",
            self.expectation,
            self.status,
            self.body.trim()
        )
    }
}

impl std::error::Error for ContractViolation {}

// =============================================================================
// STATUS
// =============================================================================

pub fn check_status(
    response: &ApiResponse,
    expected: &ExpectedStatus,
) -> Result<(), ContractViolation> {
    if expected.matches(response.status()) {
        Ok(())
    } else {
        Err(ContractViolation::new(
            format!("Expected status {expected}, got {}", response.status()),
            response,
        ))
    }
}

// =============================================================================
// BODY SHAPE
// =============================================================================

fn is_integer(value: &Value) -> bool {
    value.is_i64() || value.is_u64()
}

fn parse_body(response: &ApiResponse) -> Result<Value, ContractViolation> {
    response
        .json_value()
        .map_err(|e| ContractViolation::new(format!("Body is not valid JSON: {e}"), response))
}

/// Checks the three counters are present, integral and non-negative.
pub fn check_statistics_shape(
    response: &ApiResponse,
    value: &Value,
) -> Result<(), ContractViolation> {
    let object = value.as_object().ok_or_else(|| {
        ContractViolation::new(format!("statistics should be an object, got {value}"), response)
    })?;
    for field in STATISTICS_FIELDS {
        match object.get(field) {
            Some(counter) if is_integer(counter) && counter.as_i64().is_some_and(|n| n >= 0) => {}
            Some(counter) => {
                return Err(ContractViolation::new(
                    format!("statistics.{field} should be a non-negative integer, got {counter}"),
                    response,
                ));
            }
            None => {
                return Err(ContractViolation::new(
                    format!("statistics should contain '{field}'"),
                    response,
                ));
            }
        }
    }
    Ok(())
}

/// Checks an item object carries every field with the documented type.
pub fn check_item_shape(response: &ApiResponse, value: &Value) -> Result<(), ContractViolation> {
    let object = value.as_object().ok_or_else(|| {
        ContractViolation::new(format!("Item should be an object, got {value}"), response)
    })?;
    for field in ITEM_FIELDS {
        if !object.contains_key(field) {
            return Err(ContractViolation::new(
                format!("Item should contain '{field}'"),
                response,
            ));
        }
    }

    let typed = [
        ("id", object["id"].is_string(), "string"),
        ("sellerId", is_integer(&object["sellerId"]), "integer"),
        ("name", object["name"].is_string(), "string"),
        ("price", is_integer(&object["price"]), "integer"),
        ("createdAt", object["createdAt"].is_string(), "string"),
    ];
    for (field, ok, kind) in typed {
        if !ok {
            return Err(ContractViolation::new(
                format!("{field} should be {kind}, got {}", object[field]),
                response,
            ));
        }
    }
    if object["id"].as_str().is_some_and(str::is_empty) {
        return Err(ContractViolation::new("id should not be empty", response));
    }
    check_statistics_shape(response, &object["statistics"])
}

fn decode<T: serde::de::DeserializeOwned>(
    response: &ApiResponse,
    value: Value,
) -> Result<T, ContractViolation> {
    serde_json::from_value(value)
        .map_err(|e| ContractViolation::new(format!("Failed to decode body: {e}"), response))
}

// =============================================================================
// OPERATION CONTRACTS
// =============================================================================

/// Create answered 200 with a single well-formed item object.
pub fn check_created_item(response: &ApiResponse) -> Result<Item, ContractViolation> {
    check_status(response, &ExpectedStatus::Exact(200))?;
    let value = parse_body(response)?;
    check_item_shape(response, &value)?;
    decode(response, value)
}

/// A 200 carrying a JSON array of well-formed items (possibly empty).
pub fn check_item_array(response: &ApiResponse) -> Result<Vec<Item>, ContractViolation> {
    check_status(response, &ExpectedStatus::Exact(200))?;
    let value = parse_body(response)?;
    let elements = value.as_array().ok_or_else(|| {
        ContractViolation::new("Response should be a JSON array", response)
    })?;
    for element in elements {
        check_item_shape(response, element)?;
    }
    decode(response, value)
}

/// Get-by-id answered with a non-empty array whose first element is `expected_id`.
pub fn check_item_lookup(
    response: &ApiResponse,
    expected_id: &str,
) -> Result<Item, ContractViolation> {
    let items = check_item_array(response)?;
    let first = items.into_iter().next().ok_or_else(|| {
        ContractViolation::new("Response array should not be empty", response)
    })?;
    if first.id != expected_id {
        return Err(ContractViolation::new(
            format!("Expected item '{expected_id}', got '{}'", first.id),
            response,
        ));
    }
    Ok(first)
}

/// A 200 carrying a JSON array of statistics objects.
pub fn check_statistics_array(
    response: &ApiResponse,
) -> Result<Vec<Statistics>, ContractViolation> {
    check_status(response, &ExpectedStatus::Exact(200))?;
    let value = parse_body(response)?;
    let elements = value.as_array().ok_or_else(|| {
        ContractViolation::new("Response should be a JSON array", response)
    })?;
    for element in elements {
        check_statistics_shape(response, element)?;
    }
    decode(response, value)
}

/// Caller-supplied fields of a stored item equal the ones sent at creation.
pub fn check_item_matches(
    response: &ApiResponse,
    actual: &Item,
    expected: &NewItem,
) -> Result<(), ContractViolation> {
    let mismatches: Vec<String> = [
        ("name", actual.name != expected.name, format!("{:?} != {:?}", actual.name, expected.name)),
        ("price", actual.price != expected.price, format!("{} != {}", actual.price, expected.price)),
        (
            "sellerId",
            actual.seller_id != expected.seller_id,
            format!("{} != {}", actual.seller_id, expected.seller_id),
        ),
    ]
    .into_iter()
    .filter(|(_, differs, _)| *differs)
    .map(|(field, _, detail)| format!("{field}: {detail}"))
    .collect();

    if mismatches.is_empty() {
        Ok(())
    } else {
        Err(ContractViolation::new(
            format!("Item does not match creation payload ({})", mismatches.join("; ")),
            response,
        ))
    }
}

/// Two responses carry the same JSON document.
pub fn check_same_body(first: &ApiResponse, second: &ApiResponse) -> Result<(), ContractViolation> {
    let same = match (first.json_value(), second.json_value()) {
        (Ok(a), Ok(b)) => a == b,
        _ => first.body() == second.body(),
    };
    if same {
        Ok(())
    } else {
        Err(ContractViolation::new(
            format!("Bodies differ; other body: {}", second.body().trim()),
            first,
        ))
    }
}
