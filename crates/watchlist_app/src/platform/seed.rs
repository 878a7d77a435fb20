use watchlist_core::WatchedMovie;

/// In-memory starting contents of the watched list.
pub(crate) fn watched_movies() -> Vec<WatchedMovie> {
    vec![
        WatchedMovie {
            imdb_id: "tt15398776".to_string(),
            title: "Oppenheimer".to_string(),
            year: "2023".to_string(),
            poster: "https://m.media-amazon.com/images/M/MV5BMDBmYTZjNjUtN2M1MS00MTQ2LTk2ODgtNzc2M2QyZGE5NTVjXkEyXkFqcGdeQXVyNzAwMjU2MTY@._V1_SX300.jpg".to_string(),
            runtime_minutes: 180,
            imdb_rating: 8.6,
            user_rating: 10.0,
        },
        WatchedMovie {
            imdb_id: "tt1517268".to_string(),
            title: "Barbie".to_string(),
            year: "2023".to_string(),
            poster: "https://m.media-amazon.com/images/M/MV5BNjU3N2QxNzYtMjk1NC00MTc4LTk1NTQtMmUxNTljM2I0NDA5XkEyXkFqcGdeQXVyODE5NzE3OTE@._V1_SX300.jpg".to_string(),
            runtime_minutes: 114,
            imdb_rating: 7.2,
            user_rating: 8.0,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_keeps_insertion_order() {
        let titles: Vec<_> = watched_movies().into_iter().map(|m| m.title).collect();
        assert_eq!(titles, vec!["Oppenheimer", "Barbie"]);
    }

    #[test]
    fn oppenheimer_carries_its_release_year() {
        let movies = watched_movies();
        let oppenheimer = &movies[0];

        assert_eq!(oppenheimer.imdb_id, "tt15398776");
        assert_eq!(oppenheimer.year, "2023");
        assert_eq!(oppenheimer.runtime_minutes, 180);
        assert_eq!(oppenheimer.imdb_rating, 8.6);
        assert_eq!(oppenheimer.user_rating, 10.0);
    }
}
