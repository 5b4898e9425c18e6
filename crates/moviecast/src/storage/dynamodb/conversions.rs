//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting DynamoDB AttributeValue maps into domain types
//! and plain JSON records. These are testable in isolation without DynamoDB
//! access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use moviecast_core::movie::{Attributes, CastMember, Movie, Record};
use moviecast_core::storage::RepositoryError;
use serde_json::{Number, Value};

pub type Item = HashMap<String, AttributeValue>;

const MOVIE_FIELDS: &[&str] = &["movieId", "title", "genreIds", "overview"];
const CAST_KEY_FIELDS: &[&str] = &["movieId", "actorName"];
const CAST_FIELDS: &[&str] = &["movieId", "actorName", "roleName"];

// ============================================================================
// Record conversions
// ============================================================================

/// Convert a whole DynamoDB item to its JSON record, every attribute kept.
pub fn item_to_record(item: &Item) -> Result<Record, RepositoryError> {
    extra_attributes(item, &[])
}

// ============================================================================
// Movie conversions
// ============================================================================

/// Convert a DynamoDB item to Movie.
pub fn item_to_movie(item: &Item) -> Result<Movie, RepositoryError> {
    Ok(Movie {
        movie_id: get_i64(item, "movieId")?,
        title: get_string(item, "title")?,
        genre_ids: get_i64_list(item, "genreIds")?,
        overview: get_optional_string(item, "overview"),
        attributes: extra_attributes(item, MOVIE_FIELDS)?,
    })
}

// ============================================================================
// Cast conversions
// ============================================================================

/// Convert a DynamoDB item to CastMember.
///
/// Only the table key is required. A `roleName` that is not a string stays
/// among the extra attributes.
pub fn item_to_cast_member(item: &Item) -> Result<CastMember, RepositoryError> {
    let role_name = get_optional_string(item, "roleName");
    let modelled = if role_name.is_some() {
        CAST_FIELDS
    } else {
        CAST_KEY_FIELDS
    };

    Ok(CastMember {
        movie_id: get_i64(item, "movieId")?,
        actor_name: get_string(item, "actorName")?,
        role_name,
        attributes: extra_attributes(item, modelled)?,
    })
}

// ============================================================================
// JSON conversions
// ============================================================================

/// Convert an attribute value to its plain JSON form.
pub fn attribute_to_json(value: &AttributeValue) -> Result<Value, RepositoryError> {
    match value {
        AttributeValue::S(s) => Ok(Value::String(s.clone())),
        AttributeValue::N(n) => number_to_json(n),
        AttributeValue::Bool(b) => Ok(Value::Bool(*b)),
        AttributeValue::Null(_) => Ok(Value::Null),
        AttributeValue::L(list) => list
            .iter()
            .map(attribute_to_json)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        AttributeValue::M(map) => map
            .iter()
            .map(|(k, v)| attribute_to_json(v).map(|json| (k.clone(), json)))
            .collect::<Result<Attributes, _>>()
            .map(Value::Object),
        AttributeValue::Ss(set) => Ok(Value::Array(
            set.iter().cloned().map(Value::String).collect(),
        )),
        AttributeValue::Ns(set) => set
            .iter()
            .map(|n| number_to_json(n))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        other => Err(RepositoryError::InvalidData(format!(
            "Unsupported attribute type: {:?}",
            other
        ))),
    }
}

/// Convert a DynamoDB number string to a JSON number.
fn number_to_json(n: &str) -> Result<Value, RepositoryError> {
    if let Ok(i) = n.parse::<i64>() {
        return Ok(Value::Number(i.into()));
    }
    if let Ok(u) = n.parse::<u64>() {
        return Ok(Value::Number(u.into()));
    }
    n.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .ok_or_else(|| RepositoryError::InvalidData(format!("Invalid number: {}", n)))
}

/// Collect every attribute not modelled as a struct field.
fn extra_attributes(item: &Item, modelled: &[&str]) -> Result<Attributes, RepositoryError> {
    item.iter()
        .filter(|(k, _)| !modelled.contains(&k.as_str()))
        .map(|(k, v)| attribute_to_json(v).map(|json| (k.clone(), json)))
        .collect()
}

// ============================================================================
// Helper functions
// ============================================================================

/// Get a required string attribute.
fn get_string(item: &Item, key: &str) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get an optional string attribute.
fn get_optional_string(item: &Item, key: &str) -> Option<String> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
}

/// Get a required integer attribute.
fn get_i64(item: &Item, key: &str) -> Result<i64, RepositoryError> {
    let n = item
        .get(key)
        .and_then(|v| v.as_n().ok())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))?;
    parse_i64(key, n)
}

/// Get an optional integer list attribute, stored either as a list of numbers
/// or a number set.
fn get_i64_list(item: &Item, key: &str) -> Result<Option<Vec<i64>>, RepositoryError> {
    match item.get(key) {
        None | Some(AttributeValue::Null(_)) => Ok(None),
        Some(AttributeValue::L(list)) => list
            .iter()
            .map(|v| match v.as_n() {
                Ok(n) => parse_i64(key, n),
                Err(_) => Err(RepositoryError::InvalidData(format!(
                    "Non-numeric element in {}",
                    key
                ))),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some),
        Some(AttributeValue::Ns(set)) => set
            .iter()
            .map(|n| parse_i64(key, n))
            .collect::<Result<Vec<_>, _>>()
            .map(Some),
        Some(_) => Err(RepositoryError::InvalidData(format!(
            "Missing or invalid field: {}",
            key
        ))),
    }
}

fn parse_i64(key: &str, n: &str) -> Result<i64, RepositoryError> {
    n.parse()
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid integer {}: {}", key, e)))
}
