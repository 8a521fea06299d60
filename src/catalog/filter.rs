use serde::Serialize;

use super::segment::Segment;
use crate::models::Country;

/// The single active filter over the countries list.
///
/// Only one criterion is active at a time; switching to another replaces it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "mode", content = "value", rename_all = "snake_case")]
pub enum CountryFilter {
    #[default]
    None,
    Search(String),
    Segment(Segment),
    Letter(char),
}

impl CountryFilter {
    /// Build the filter for a segment label; unknown labels reset to `None`.
    pub fn from_segment_label(label: Option<&str>) -> Self {
        match label.and_then(Segment::from_label) {
            Some(segment) => CountryFilter::Segment(segment),
            None => CountryFilter::None,
        }
    }

    pub fn apply(&self, countries: &[Country]) -> Vec<Country> {
        match self {
            CountryFilter::None => countries.to_vec(),
            CountryFilter::Search(query) => search(countries, query),
            CountryFilter::Segment(segment) => filter_by_segment(countries, *segment),
            CountryFilter::Letter(letter) => filter_by_letter(countries, *letter),
        }
    }
}

/// Case-insensitive substring match on the name. An empty query matches all.
pub fn search(countries: &[Country], query: &str) -> Vec<Country> {
    let needle = query.to_lowercase();
    countries
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

pub fn filter_by_segment(countries: &[Country], segment: Segment) -> Vec<Country> {
    countries
        .iter()
        .filter(|c| segment.matches(&c.name))
        .cloned()
        .collect()
}

/// Countries whose initial is `letter`, case-insensitively.
pub fn filter_by_letter(countries: &[Country], letter: char) -> Vec<Country> {
    let wanted: String = letter.to_uppercase().collect();
    countries
        .iter()
        .filter(|c| c.initial() == wanted)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Country> {
        vec![
            Country::new("FR", "France"),
            Country::new("DE", "Germany"),
            Country::new("KE", "Kenya"),
            Country::new("ZA", "South Africa"),
            Country::new("BR", "Brazil"),
        ]
    }

    fn names(list: &[Country]) -> Vec<&str> {
        list.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_search_case_insensitive_substring() {
        let result = search(&sample(), "AFR");
        assert_eq!(names(&result), vec!["South Africa"]);
    }

    #[test]
    fn test_empty_search_returns_all() {
        assert_eq!(search(&sample(), ""), sample());
    }

    #[test]
    fn test_search_no_match() {
        assert!(search(&sample(), "atlantis").is_empty());
    }

    #[test]
    fn test_segment_filter() {
        let result = filter_by_segment(&sample(), Segment::DToJ);
        assert_eq!(names(&result), vec!["France", "Germany"]);
    }

    #[test]
    fn test_segments_are_disjoint() {
        let list = sample();
        for a in Segment::ALL {
            for b in Segment::ALL {
                if a == b {
                    continue;
                }
                let left = filter_by_segment(&list, a);
                let right = filter_by_segment(&list, b);
                assert!(left.iter().all(|c| !right.contains(c)));
            }
        }
    }

    #[test]
    fn test_segment_filter_idempotent() {
        let once = filter_by_segment(&sample(), Segment::RToZ);
        let twice = filter_by_segment(&once, Segment::RToZ);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_letter_filter() {
        let result = filter_by_letter(&sample(), 'k');
        assert_eq!(names(&result), vec!["Kenya"]);
    }

    #[test]
    fn test_from_segment_label_resets_on_unknown() {
        assert_eq!(
            CountryFilter::from_segment_label(Some("K...Q")),
            CountryFilter::Segment(Segment::KToQ)
        );
        assert_eq!(CountryFilter::from_segment_label(Some("")), CountryFilter::None);
        assert_eq!(CountryFilter::from_segment_label(None), CountryFilter::None);
    }

    #[test]
    fn test_apply_none_is_identity() {
        assert_eq!(CountryFilter::None.apply(&sample()), sample());
    }
}
