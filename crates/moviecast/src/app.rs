use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{cast::get_movie_cast, health::livez, movies::list_movies},
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // Read-only API, so only GET needs CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE]);

    let movie_routes = Router::new()
        .route("/movies", get(list_movies))
        .route("/movies/cast", get(get_movie_cast))
        .layer(cors);

    Router::new()
        .route("/livez", get(livez))
        .merge(movie_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use moviecast_core::movie::{CastMember, CastQuery, Movie, Record};
    use moviecast_core::storage::{CastRepository, MovieRepository, RepositoryError, Result};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::storage::InMemoryRepository;

    /// Repository whose every call fails like an unreachable store.
    struct FailingRepository;

    #[async_trait]
    impl MovieRepository for FailingRepository {
        async fn scan_movies(&self) -> Result<Vec<Record>> {
            Err(RepositoryError::ConnectionFailed(
                "dynamodb.internal:8000 refused".to_string(),
            ))
        }

        async fn get_movie(&self, _movie_id: i64) -> Result<Option<Movie>> {
            Err(RepositoryError::ConnectionFailed(
                "dynamodb.internal:8000 refused".to_string(),
            ))
        }
    }

    #[async_trait]
    impl CastRepository for FailingRepository {
        async fn query_cast(&self, _query: &CastQuery) -> Result<Vec<CastMember>> {
            Err(RepositoryError::QueryFailed("Table not found".to_string()))
        }
    }

    fn test_state() -> AppState {
        AppState::with_repository(InMemoryRepository::with_records(
            vec![
                Movie::new(550, "Fight Club")
                    .with_genre_ids([1, 2, 3])
                    .with_overview("An insomniac office worker...")
                    .into_record(),
                Movie::new(13, "Forrest Gump").into_record(),
                Movie::new(77, "Untitled").with_attribute("draft", json!(true)).into_record(),
            ],
            vec![
                CastMember::new(550, "Brad Pitt", "Tyler Durden"),
                CastMember::new(550, "Edward Norton", "Narrator"),
                CastMember::new(550, "Helena Bonham Carter", "Marla Singer"),
                CastMember::new(999999, "Nobody", "Ghost"),
                CastMember::without_role(77, "Stand In"),
            ],
        ))
    }

    fn raw_state(movies: Vec<Value>) -> AppState {
        let movies = movies
            .into_iter()
            .map(|movie| match movie {
                Value::Object(record) => record,
                other => panic!("not a record: {other}"),
            })
            .collect();
        AppState::with_repository(InMemoryRepository::with_records(movies, Vec::new()))
    }

    fn failing_state() -> AppState {
        let repo = Arc::new(FailingRepository);
        AppState::new(repo.clone(), repo)
    }

    async fn get(state: AppState, uri: &str) -> (StatusCode, Value) {
        let response = create_app(state)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );

        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_livez() {
        let response = create_app(test_state())
            .oneshot(Request::builder().uri("/livez").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_movies() {
        let (status, body) = get(test_state(), "/movies").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().unwrap().len(), 3);
        assert_eq!(body["data"][0]["movieId"], 550);
    }

    #[tokio::test]
    async fn test_list_movies_returns_records_as_stored() {
        let stored = vec![
            json!({ "movieId": 13, "title": "Forrest Gump" }),
            json!({ "movieId": 404, "genreIds": ["drama"] }),
        ];

        let (status, body) = get(raw_state(stored.clone()), "/movies").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "data": stored }));
    }

    #[tokio::test]
    async fn test_list_movies_demo_data() {
        let (status, body) = get(AppState::with_demo_data(), "/movies").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().unwrap().len(), 3);
        assert_eq!(body["data"][0]["release_date"], "1999-10-15");
    }

    #[tokio::test]
    async fn test_list_movies_store_failure() {
        let (status, body) = get(failing_state(), "/movies").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Could not retrieve movies" }));
    }

    #[tokio::test]
    async fn test_cast_all_members() {
        let (status, body) = get(test_state(), "/movies/cast?movieId=550").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["movieId"], 550);
        assert_eq!(body["title"], "Fight Club");
        assert_eq!(body["genreIds"], json!([1, 2, 3]));
        assert_eq!(body["overview"], "An insomniac office worker...");
        assert_eq!(body["cast"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_cast_missing_movie_id() {
        let (status, body) = get(test_state(), "/movies/cast").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({ "message": "Missing query parameter: movieId" })
        );
    }

    #[tokio::test]
    async fn test_cast_missing_movie_id_with_filters() {
        let (status, body) = get(
            test_state(),
            "/movies/cast?roleName=Tyler&actorName=Brad",
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({ "message": "Missing query parameter: movieId" })
        );
    }

    #[tokio::test]
    async fn test_cast_empty_movie_id() {
        let (status, _) = get(test_state(), "/movies/cast?movieId=").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_cast_non_numeric_movie_id() {
        let (status, body) = get(test_state(), "/movies/cast?movieId=abc").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({ "message": "Invalid query parameter: movieId" })
        );
    }

    #[tokio::test]
    async fn test_cast_movie_id_with_trailing_garbage() {
        let (status, body) = get(test_state(), "/movies/cast?movieId=550abc").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["movieId"], 550);
    }

    #[tokio::test]
    async fn test_cast_unknown_movie() {
        let (status, body) = get(test_state(), "/movies/cast?movieId=404").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "message": "Movie not found" }));
    }

    #[tokio::test]
    async fn test_cast_rows_without_movie_are_not_found() {
        let (status, body) = get(test_state(), "/movies/cast?movieId=999999").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "message": "Movie not found" }));
    }

    #[tokio::test]
    async fn test_cast_actor_prefix() {
        let (status, body) = get(test_state(), "/movies/cast?movieId=550&actorName=Ed").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["cast"],
            json!([{
                "movieId": 550,
                "actorName": "Edward Norton",
                "roleName": "Narrator",
            }])
        );
    }

    #[tokio::test]
    async fn test_cast_role_prefix() {
        let (status, body) = get(test_state(), "/movies/cast?movieId=550&roleName=Marla").await;

        assert_eq!(status, StatusCode::OK);
        let cast = body["cast"].as_array().unwrap();
        assert_eq!(cast.len(), 1);
        assert_eq!(cast[0]["actorName"], "Helena Bonham Carter");
    }

    #[tokio::test]
    async fn test_cast_role_prefix_takes_precedence() {
        let (status, body) = get(
            test_state(),
            "/movies/cast?movieId=550&actorName=Brad&roleName=Narr",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let cast = body["cast"].as_array().unwrap();
        assert_eq!(cast.len(), 1);
        assert_eq!(cast[0]["actorName"], "Edward Norton");
    }

    #[tokio::test]
    async fn test_cast_omits_absent_movie_fields() {
        let (status, body) = get(test_state(), "/movies/cast?movieId=13").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "movieId": 13, "title": "Forrest Gump", "cast": [] })
        );
    }

    #[tokio::test]
    async fn test_cast_rows_without_role() {
        let (status, body) = get(test_state(), "/movies/cast?movieId=77").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["cast"],
            json!([{ "movieId": 77, "actorName": "Stand In" }])
        );
        assert!(body.get("draft").is_none());
    }

    #[tokio::test]
    async fn test_cast_repeated_parameter_keeps_last_value() {
        let (status, body) = get(test_state(), "/movies/cast?movieId=550&movieId=13").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "Forrest Gump");
    }

    #[tokio::test]
    async fn test_cast_repeated_filter_keeps_last_value() {
        let (status, body) = get(
            test_state(),
            "/movies/cast?movieId=550&roleName=Tyler&roleName=Narr",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let cast = body["cast"].as_array().unwrap();
        assert_eq!(cast.len(), 1);
        assert_eq!(cast[0]["actorName"], "Edward Norton");
    }

    #[tokio::test]
    async fn test_cast_no_matches_still_returns_movie() {
        let (status, body) = get(test_state(), "/movies/cast?movieId=13&actorName=Zed").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "Forrest Gump");
        assert_eq!(body["cast"], json!([]));
    }

    #[tokio::test]
    async fn test_cast_store_failure_hides_details() {
        let (status, body) = get(failing_state(), "/movies/cast?movieId=550").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Could not retrieve cast members" }));
    }
}
