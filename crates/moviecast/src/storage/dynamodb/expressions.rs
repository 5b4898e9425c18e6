//! Key condition expressions for the movies and cast tables.
//!
//! Both tables are partitioned by a numeric `movieId`. The cast table sorts
//! by `actorName`; its role index sorts by `roleName`.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use moviecast_core::movie::{CastFilter, CastQuery};

pub const MOVIE_KEY_CONDITION: &str = "movieId = :movieId";
pub const MOVIE_ID_PLACEHOLDER: &str = ":movieId";

const CAST_ALL_CONDITION: &str = "movieId = :m";
const CAST_ROLE_CONDITION: &str = "movieId = :m AND begins_with(roleName, :r)";
const CAST_ACTOR_CONDITION: &str = "movieId = :m AND begins_with(actorName, :a)";

/// Numeric attribute value for a movie id.
pub fn movie_id_value(movie_id: i64) -> AttributeValue {
    AttributeValue::N(movie_id.to_string())
}

/// Key condition expression for a cast filter.
pub fn cast_key_condition(filter: &CastFilter) -> &'static str {
    match filter {
        CastFilter::All => CAST_ALL_CONDITION,
        CastFilter::RolePrefix(_) => CAST_ROLE_CONDITION,
        CastFilter::ActorPrefix(_) => CAST_ACTOR_CONDITION,
    }
}

/// Values bound to the placeholders of [`cast_key_condition`].
pub fn cast_expression_values(query: &CastQuery) -> HashMap<String, AttributeValue> {
    let mut values = HashMap::from([(":m".to_string(), movie_id_value(query.movie_id))]);

    match &query.filter {
        CastFilter::All => {}
        CastFilter::RolePrefix(prefix) => {
            values.insert(":r".to_string(), AttributeValue::S(prefix.clone()));
        }
        CastFilter::ActorPrefix(prefix) => {
            values.insert(":a".to_string(), AttributeValue::S(prefix.clone()));
        }
    }

    values
}
