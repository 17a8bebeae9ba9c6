use crate::app::catalog::MovieRecord;

/// Derives the visible list: case-insensitive substring match on the title
/// (query trimmed, empty matches everything) and exact match on the location
/// label (empty filter matches everything). Order is preserved from `source`.
pub fn filter_movies(source: &[MovieRecord], query: &str, location: &str) -> Vec<MovieRecord> {
    let term = query.trim().to_lowercase();
    source
        .iter()
        .filter(|movie| {
            let by_title = movie.title.to_lowercase().contains(&term);
            let by_location = location.is_empty() || movie.ubication.as_deref() == Some(location);
            by_title && by_location
        })
        .cloned()
        .collect()
}

/// Distinct non-empty location labels, sorted ascending. Feeds the location
/// selector after every successful fetch.
pub fn distinct_locations(movies: &[MovieRecord]) -> Vec<String> {
    let mut locations: Vec<String> = movies
        .iter()
        .filter_map(|movie| movie.ubication.clone())
        .filter(|label| !label.is_empty())
        .collect();
    locations.sort();
    locations.dedup();
    locations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str, ubication: Option<&str>) -> MovieRecord {
        MovieRecord {
            title: title.to_string(),
            poster: None,
            genre: None,
            year: None,
            ubication: ubication.map(str::to_string),
            description: None,
            imdb_id: format!("tt-{}", title.to_lowercase()),
        }
    }

    #[test]
    fn empty_query_and_location_return_source_unchanged() {
        let source = vec![
            movie("Dune", Some("North")),
            movie("Arrival", Some("South")),
            movie("Alien", None),
        ];
        assert_eq!(filter_movies(&source, "", ""), source);
    }

    #[test]
    fn title_match_is_case_insensitive_substring() {
        let source = vec![movie("Dune", Some("North")), movie("Arrival", Some("South"))];
        let filtered = filter_movies(&source, "du", "");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Dune");

        let filtered = filter_movies(&source, "RIV", "");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Arrival");
    }

    #[test]
    fn query_is_trimmed() {
        let source = vec![movie("Dune", None)];
        assert_eq!(filter_movies(&source, "  dune  ", "").len(), 1);
    }

    #[test]
    fn location_is_exact_match() {
        let source = vec![movie("Dune", Some("North")), movie("Arrival", Some("South"))];
        let filtered = filter_movies(&source, "", "South");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Arrival");

        assert!(filter_movies(&source, "", "Sou").is_empty());
    }

    #[test]
    fn missing_location_never_matches_a_location_filter() {
        let source = vec![movie("Alien", None)];
        assert!(filter_movies(&source, "", "North").is_empty());
        assert_eq!(filter_movies(&source, "", "").len(), 1);
    }

    #[test]
    fn query_and_location_combine() {
        let source = vec![
            movie("Dune", Some("North")),
            movie("Dune Part Two", Some("South")),
        ];
        let filtered = filter_movies(&source, "dune", "South");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Dune Part Two");
    }

    #[test]
    fn filtering_is_idempotent() {
        let source = vec![movie("Dune", Some("North")), movie("Arrival", Some("South"))];
        let once = filter_movies(&source, "a", "");
        let twice = filter_movies(&once, "a", "");
        assert_eq!(once, twice);
    }

    #[test]
    fn locations_are_sorted_deduplicated_and_non_empty() {
        let source = vec![
            movie("A", Some("South")),
            movie("B", Some("North")),
            movie("C", Some("South")),
            movie("D", Some("")),
            movie("E", None),
        ];
        assert_eq!(distinct_locations(&source), vec!["North", "South"]);
    }
}
