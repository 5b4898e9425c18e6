use serde::{Deserialize, Serialize};

/// Attributes of a stored record beyond the ones modelled as fields.
pub type Attributes = serde_json::Map<String, serde_json::Value>;

/// A stored item in plain JSON form, attribute for attribute.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// A movie record from the movies collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub movie_id: i64,
    pub title: String,
    /// Genre identifiers in stored order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre_ids: Option<Vec<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    /// Any other attributes on the stored record, returned as-is.
    #[serde(flatten)]
    pub attributes: Attributes,
}

impl Movie {
    /// Creates a movie with no genres, overview or extra attributes.
    pub fn new(movie_id: i64, title: impl Into<String>) -> Self {
        Self {
            movie_id,
            title: title.into(),
            genre_ids: None,
            overview: None,
            attributes: Attributes::new(),
        }
    }

    /// Sets the genre identifiers.
    pub fn with_genre_ids(mut self, genre_ids: impl IntoIterator<Item = i64>) -> Self {
        self.genre_ids = Some(genre_ids.into_iter().collect());
        self
    }

    /// Sets the overview text.
    pub fn with_overview(mut self, overview: impl Into<String>) -> Self {
        self.overview = Some(overview.into());
        self
    }

    /// Adds an extra attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.attributes.insert(name.into(), value);
        self
    }

    /// Flattens the movie back into the record it was stored as.
    pub fn into_record(self) -> Record {
        let mut record = self.attributes;
        record.insert("movieId".to_string(), self.movie_id.into());
        record.insert("title".to_string(), self.title.into());
        if let Some(genre_ids) = self.genre_ids {
            record.insert("genreIds".to_string(), genre_ids.into());
        }
        if let Some(overview) = self.overview {
            record.insert("overview".to_string(), overview.into());
        }
        record
    }
}

/// A cast record: one actor playing one role in a movie.
///
/// `movieId` and `actorName` are the table key. `roleName` only keys the role
/// index, so rows outside that index may lack it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CastMember {
    pub movie_id: i64,
    pub actor_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
    #[serde(flatten)]
    pub attributes: Attributes,
}

impl CastMember {
    pub fn new(movie_id: i64, actor_name: impl Into<String>, role_name: impl Into<String>) -> Self {
        Self {
            movie_id,
            actor_name: actor_name.into(),
            role_name: Some(role_name.into()),
            attributes: Attributes::new(),
        }
    }

    /// Creates a cast row with no role name.
    pub fn without_role(movie_id: i64, actor_name: impl Into<String>) -> Self {
        Self {
            movie_id,
            actor_name: actor_name.into(),
            role_name: None,
            attributes: Attributes::new(),
        }
    }

    /// Adds an extra attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.attributes.insert(name.into(), value);
        self
    }
}

/// Response body of the scan endpoint. Records are returned as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieList {
    pub data: Vec<Record>,
}

/// Response body of the cast endpoint: movie details joined with its cast.
///
/// Only the movie's modelled fields are included; extra movie attributes are
/// dropped. Cast rows keep all of theirs. Movie fields absent from the stored
/// record are left out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieCast {
    pub movie_id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre_ids: Option<Vec<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    pub cast: Vec<CastMember>,
}

impl MovieCast {
    pub fn new(movie: Movie, cast: Vec<CastMember>) -> Self {
        Self {
            movie_id: movie.movie_id,
            title: movie.title,
            genre_ids: movie.genre_ids,
            overview: movie.overview,
            cast,
        }
    }
}
