//! Case-insensitive substring filtering over incident collections.
//!
//! This is the whole query surface: a linear scan with a containment test
//! against one field. There is no sorting, no aggregation, and no query
//! language.

use crate::domain::Incident;

/// The incident field a substring filter applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    /// Match against the incident's area.
    Area,
    /// Match against the incident's type.
    Kind,
}

/// ASCII case-insensitive substring containment.
///
/// The empty needle is contained in every haystack.
#[must_use]
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    haystack
        .to_ascii_lowercase()
        .contains(&needle.to_ascii_lowercase())
}

/// Returns the incidents whose selected field contains `needle`, preserving
/// the order of the input slice.
#[must_use]
pub fn filter<'a>(incidents: &'a [Incident], field: FilterField, needle: &str) -> Vec<&'a Incident> {
    incidents
        .iter()
        .filter(|incident| {
            let haystack = match field {
                FilterField::Area => incident.area(),
                FilterField::Kind => incident.kind(),
            };
            contains_ignore_case(haystack, needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::domain::Incident;

    fn incident(id: u32, area: &str, kind: &str) -> Incident {
        Incident::new(
            id.to_string().parse().unwrap(),
            area.parse().unwrap(),
            kind.parse().unwrap(),
            "12:00".parse().unwrap(),
        )
    }

    #[test_case("Main Street", "main" => true ; "case folded prefix")]
    #[test_case("Main Street", "STREET" => true ; "case folded suffix")]
    #[test_case("Main Street", "in str" => true ; "interior with space")]
    #[test_case("Main Street", "" => true ; "empty needle")]
    #[test_case("Main Street", "avenue" => false ; "absent")]
    #[test_case("Main Street", "main streets" => false ; "needle longer than haystack")]
    fn containment(haystack: &str, needle: &str) -> bool {
        contains_ignore_case(haystack, needle)
    }

    #[test]
    fn filter_by_area_preserves_order() {
        let incidents = vec![
            incident(1, "Main St", "pothole"),
            incident(2, "Oak Ave", "streetlight"),
            incident(3, "Main St North", "graffiti"),
        ];

        let matches = filter(&incidents, FilterField::Area, "main");
        let ids: Vec<u32> = matches.iter().map(|i| i.id().get()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn filter_by_kind() {
        let incidents = vec![
            incident(1, "Main St", "pothole"),
            incident(2, "Oak Ave", "broken streetlight"),
        ];

        let matches = filter(&incidents, FilterField::Kind, "LIGHT");
        let ids: Vec<u32> = matches.iter().map(|i| i.id().get()).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn empty_needle_matches_everything() {
        let incidents = vec![
            incident(1, "Main St", "pothole"),
            incident(2, "Oak Ave", "streetlight"),
        ];

        assert_eq!(filter(&incidents, FilterField::Area, "").len(), 2);
        assert_eq!(filter(&incidents, FilterField::Kind, "").len(), 2);
    }

    #[test]
    fn no_matches_is_empty_not_error() {
        let incidents = vec![incident(1, "Main St", "pothole")];
        assert!(filter(&incidents, FilterField::Area, "harbour").is_empty());
    }

    // The containment law from the module contract: a record is in the
    // filtered output iff the folded needle is a substring of its folded
    // field.
    #[test]
    fn containment_law() {
        let incidents = vec![
            incident(1, "Main St", "pothole"),
            incident(2, "Oak Ave", "streetlight"),
            incident(3, "MAIN ST", "pothole"),
        ];

        for needle in ["main", "Oak", "st", "zzz", ""] {
            let matches = filter(&incidents, FilterField::Area, needle);
            for incident in &incidents {
                let expected = incident
                    .area()
                    .to_ascii_lowercase()
                    .contains(&needle.to_ascii_lowercase());
                assert_eq!(matches.contains(&incident), expected);
            }
        }
    }
}
