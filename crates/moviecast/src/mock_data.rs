//! Demo records for running without DynamoDB.

use moviecast_core::movie::{CastMember, Movie, Record};
use serde_json::json;

/// Movie records served in demo mode.
pub fn demo_movies() -> Vec<Record> {
    [
        Movie::new(550, "Fight Club")
            .with_genre_ids([18, 53, 35])
            .with_overview(
                "A ticking-time-bomb insomniac and a slippery soap salesman channel \
                 primal male aggression into a shocking new form of therapy.",
            )
            .with_attribute("release_date", json!("1999-10-15")),
        Movie::new(13, "Forrest Gump")
            .with_genre_ids([35, 18, 10749])
            .with_overview(
                "A man with a low IQ has accomplished great things in his life and \
                 been present during significant historic events.",
            )
            .with_attribute("release_date", json!("1994-06-23")),
        Movie::new(680, "Pulp Fiction")
            .with_genre_ids([53, 80])
            .with_overview(
                "A burger-loving hit man, his philosophical partner and a drug-addled \
                 gangster's moll weave a tale of violence and redemption.",
            )
            .with_attribute("release_date", json!("1994-09-10")),
    ]
    .into_iter()
    .map(Movie::into_record)
    .collect()
}

/// Cast rows served in demo mode.
pub fn demo_cast() -> Vec<CastMember> {
    vec![
        CastMember::new(550, "Brad Pitt", "Tyler Durden")
            .with_attribute("roleDescription", json!("Soap salesman")),
        CastMember::new(550, "Edward Norton", "Narrator")
            .with_attribute("roleDescription", json!("Insomniac office worker")),
        CastMember::new(550, "Helena Bonham Carter", "Marla Singer")
            .with_attribute("roleDescription", json!("Support group tourist")),
        CastMember::new(13, "Tom Hanks", "Forrest Gump")
            .with_attribute("roleDescription", json!("Title character")),
        CastMember::new(13, "Robin Wright", "Jenny Curran")
            .with_attribute("roleDescription", json!("Forrest's childhood friend")),
        CastMember::new(680, "John Travolta", "Vincent Vega")
            .with_attribute("roleDescription", json!("Hit man")),
        CastMember::new(680, "Samuel L. Jackson", "Jules Winnfield")
            .with_attribute("roleDescription", json!("Hit man")),
        CastMember::new(680, "Uma Thurman", "Mia Wallace")
            .with_attribute("roleDescription", json!("Gangster's wife")),
    ]
}
