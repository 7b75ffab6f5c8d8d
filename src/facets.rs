//! Facet option lists derived from the loaded route set.
//!
//! Recomputed on every dataset load; never cached across languages.

use crate::filter;
use crate::locale::{FieldKey, Locale};
use crate::record::Route;
use itertools::Itertools;
use serde::Serialize;

/// One entry of a filter pick list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FacetOption {
    pub key: String,
    pub label: String,
}

impl FacetOption {
    fn new(value: String) -> FacetOption {
        FacetOption {
            key: value.clone(),
            label: value,
        }
    }
}

/// The derived pick lists for the duration and activity facets.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FacetOptions {
    pub durations: Vec<FacetOption>,
    pub activities: Vec<FacetOption>,
}

/// Derive the distinct, normalized, presentable facet values observed across
/// all loaded routes.
///
/// Durations are raw labels, deduplicated and sorted. Activities are
/// normalized as in [filter::normalize_activities], deduplicated across
/// routes, capitalized on the first character only, then sorted.
pub fn facet_options(routes: &[Route], locale: &Locale) -> FacetOptions {
    let durations = routes
        .iter()
        .filter_map(|route| route.field(FieldKey::Duration, locale))
        .map(str::to_owned)
        .unique()
        .sorted()
        .map(FacetOption::new)
        .collect_vec();
    let activities = routes
        .iter()
        .filter_map(|route| route.field(FieldKey::ActivityList, locale))
        .flat_map(filter::normalize_activities)
        .unique()
        .map(|token| capitalize_first(&token))
        .sorted()
        .map(FacetOption::new)
        .collect_vec();
    FacetOptions {
        durations,
        activities,
    }
}

fn capitalize_first(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::locale::{Language, Locale};

    fn route(name: &str, duration: Option<&str>, activities: Option<&str>) -> Route {
        let mut fields = std::collections::HashMap::new();
        if let Some(duration) = duration {
            fields.insert("duración_final".to_owned(), duration.to_owned());
        }
        if let Some(activities) = activities {
            fields.insert("atividade_lista".to_owned(), activities.to_owned());
        }
        Route {
            name: name.to_owned(),
            coordinates: vec![],
            fields,
        }
    }

    #[test]
    fn durations_are_distinct_and_sorted() {
        let locale = Locale::new(Language::Pt);
        let routes = [
            route("a", Some("2h"), None),
            route("b", Some("1h"), None),
            route("c", Some("2h"), None),
        ];
        let options = facet_options(&routes, &locale);
        let keys: Vec<&str> = options.durations.iter().map(|o| o.key.as_str()).collect();
        assert_eq!(keys, vec!["1h", "2h"]);
        for option in &options.durations {
            assert_eq!(option.key, option.label);
        }
    }

    #[test]
    fn activities_are_flattened_normalized_and_capitalized() {
        let locale = Locale::new(Language::Pt);
        let routes = [
            route("a", None, Some("['Hiking', 'Swimming']")),
            route("b", None, Some("['swimming', 'bird   watching']")),
        ];
        let options = facet_options(&routes, &locale);
        let labels: Vec<&str> = options.activities.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["Bird watching", "Hiking", "Swimming"]);
    }

    #[test]
    fn routes_without_facet_fields_contribute_nothing() {
        let locale = Locale::new(Language::Pt);
        let routes = [route("a", None, None)];
        let options = facet_options(&routes, &locale);
        assert!(options.durations.is_empty());
        assert!(options.activities.is_empty());
    }
}
