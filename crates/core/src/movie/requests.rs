//! Cast query parameters and their resolution into a store query.
//!
//! Resolution is a pure function so the branch selection can be tested
//! without any storage backend.

use std::collections::HashMap;

use super::error::{LookupError, INVALID_MOVIE_ID, MISSING_MOVIE_ID};
use super::parse::parse_movie_id;
use super::types::CastMember;

/// Raw query parameters of the cast endpoint.
///
/// A parameter counts as present when its key appears in the query string,
/// even with an empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CastQueryParams {
    pub movie_id: Option<String>,
    pub role_name: Option<String>,
    pub actor_name: Option<String>,
}

/// Builds the parameters from a decoded query string. Unknown keys are
/// ignored; a repeated key keeps its last value.
impl From<HashMap<String, String>> for CastQueryParams {
    fn from(mut query: HashMap<String, String>) -> Self {
        Self {
            movie_id: query.remove("movieId"),
            role_name: query.remove("roleName"),
            actor_name: query.remove("actorName"),
        }
    }
}

impl CastQueryParams {
    pub fn new(movie_id: impl Into<String>) -> Self {
        Self {
            movie_id: Some(movie_id.into()),
            ..Self::default()
        }
    }

    pub fn with_role_name(mut self, role_name: impl Into<String>) -> Self {
        self.role_name = Some(role_name.into());
        self
    }

    pub fn with_actor_name(mut self, actor_name: impl Into<String>) -> Self {
        self.actor_name = Some(actor_name.into());
        self
    }

    /// Resolves the parameters into a query.
    ///
    /// Precedence: missing `movieId` fails, then `roleName`, then `actorName`,
    /// otherwise all cast members of the movie.
    pub fn resolve(&self) -> Result<CastQuery, LookupError> {
        let raw_id = match self.movie_id.as_deref() {
            Some(raw) if !raw.is_empty() => raw,
            _ => return Err(LookupError::Validation(MISSING_MOVIE_ID)),
        };

        let movie_id = parse_movie_id(raw_id).ok_or(LookupError::Validation(INVALID_MOVIE_ID))?;

        let filter = if let Some(role) = &self.role_name {
            CastFilter::RolePrefix(role.clone())
        } else if let Some(actor) = &self.actor_name {
            CastFilter::ActorPrefix(actor.clone())
        } else {
            CastFilter::All
        };

        Ok(CastQuery { movie_id, filter })
    }
}

/// Sort-key condition applied within one movie's cast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CastFilter {
    /// Every cast member of the movie.
    All,
    /// Cast members whose role name starts with the prefix.
    RolePrefix(String),
    /// Cast members whose actor name starts with the prefix.
    ActorPrefix(String),
}

impl CastFilter {
    /// Returns true if the cast member satisfies this filter.
    pub fn matches(&self, member: &CastMember) -> bool {
        match self {
            CastFilter::All => true,
            CastFilter::RolePrefix(prefix) => member
                .role_name
                .as_deref()
                .is_some_and(|role| role.starts_with(prefix.as_str())),
            CastFilter::ActorPrefix(prefix) => member.actor_name.starts_with(prefix.as_str()),
        }
    }

    /// Returns true if the filter needs the role-name secondary index.
    pub fn uses_role_index(&self) -> bool {
        matches!(self, CastFilter::RolePrefix(_))
    }
}

/// A resolved cast query: one movie and an optional prefix filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CastQuery {
    pub movie_id: i64,
    pub filter: CastFilter,
}

impl CastQuery {
    /// Returns true if the cast member belongs to this query's result.
    pub fn matches(&self, member: &CastMember) -> bool {
        member.movie_id == self.movie_id && self.filter.matches(member)
    }
}
