//! Request validation for the stub marketplace

use crate::error::ErrorResponse;
use crate::store::StoredStatistics;
use serde_json::{Map, Value};

/// Substrings that mark a name as an injection attempt.
const SUSPICIOUS_NAME_PATTERNS: [&str; 4] = ["--", ";", "/*", "'"];

#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedItem {
    pub seller_id: i64,
    pub name: String,
    pub price: i64,
    pub statistics: StoredStatistics,
}

fn required_integer(
    object: &Map<String, Value>,
    field: &str,
    path: &str,
    min: i64,
) -> Result<i64, ErrorResponse> {
    let value = object.get(field).ok_or_else(|| {
        ErrorResponse::validation_error(path, &format!("Field '{path}' is required"))
    })?;
    let number = value.as_i64().ok_or_else(|| {
        ErrorResponse::validation_error(path, &format!("Field '{path}' must be an integer"))
    })?;
    if number < min {
        return Err(ErrorResponse::validation_error(
            path,
            &format!("Field '{path}' must be at least {min}"),
        ));
    }
    Ok(number)
}

fn validate_statistics(value: Option<&Value>) -> Result<StoredStatistics, ErrorResponse> {
    let object = value.and_then(Value::as_object).ok_or_else(|| {
        ErrorResponse::validation_error("statistics", "Field 'statistics' must be an object")
    })?;
    Ok(StoredStatistics {
        likes: required_integer(object, "likes", "statistics.likes", 0)?,
        view_count: required_integer(object, "viewCount", "statistics.viewCount", 0)?,
        contacts: required_integer(object, "contacts", "statistics.contacts", 0)?,
    })
}

pub fn validate_name(name: &str) -> Result<(), ErrorResponse> {
    if name.trim().is_empty() {
        return Err(ErrorResponse::validation_error(
            "name",
            "Field 'name' must not be empty",
        ));
    }
    if SUSPICIOUS_NAME_PATTERNS
        .iter()
        .any(|pattern| name.contains(pattern))
    {
        return Err(ErrorResponse::validation_error(
            "name",
            "Field 'name' contains forbidden characters",
        ));
    }
    Ok(())
}

pub fn validate_create_request(body: &Value) -> Result<ValidatedItem, ErrorResponse> {
    let object = body.as_object().ok_or_else(|| {
        ErrorResponse::validation_error("body", "Request body must be a JSON object")
    })?;

    let seller_id = required_integer(object, "sellerID", "sellerID", 1)?;
    let name = match object.get("name") {
        Some(Value::String(name)) => name.clone(),
        Some(_) => {
            return Err(ErrorResponse::validation_error(
                "name",
                "Field 'name' must be a string",
            ));
        }
        None => {
            return Err(ErrorResponse::validation_error(
                "name",
                "Field 'name' is required",
            ));
        }
    };
    validate_name(&name)?;
    let price = required_integer(object, "price", "price", 0)?;
    let statistics = validate_statistics(object.get("statistics"))?;

    Ok(ValidatedItem {
        seller_id,
        name,
        price,
        statistics,
    })
}

pub fn validate_item_id(raw: &str) -> Result<(), ErrorResponse> {
    uuid::Uuid::parse_str(raw)
        .map(|_| ())
        .map_err(|_| ErrorResponse::invalid_parameter("id", raw, "Item id must be a UUID"))
}

pub fn parse_seller_id(raw: &str) -> Result<i64, ErrorResponse> {
    match raw.parse::<i64>() {
        Ok(seller_id) if seller_id > 0 => Ok(seller_id),
        _ => Err(ErrorResponse::invalid_parameter(
            "sellerID",
            raw,
            "Seller id must be a positive integer",
        )),
    }
}
