//! Route–resource association.
//!
//! A route's georeferenced-resources text carries one resource reference per
//! line; the first two characters of each line form an ID prefix. A resource
//! belongs to the route when its `id` starts with one of those prefixes.

use crate::locale::{FieldKey, Locale};
use crate::record::{Resource, Route};
use log::warn;

/// Extract the ordered list of ID prefixes from georeferenced-resources text.
///
/// Lines shorter than two characters after trimming would over-match as
/// degenerate prefixes; they are skipped as invalid.
pub fn route_prefixes(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| line.chars().count() >= 2)
        .map(|line| line.chars().take(2).collect())
        .collect()
}

/// The subset of `resources` referenced by `route`, in `resources` order.
///
/// A route without georeferenced-resources text is a data-quality issue, not
/// a crash: the full resource list is returned with a warning.
pub fn resources_for_route<'a>(
    route: &Route,
    resources: &'a [Resource],
    locale: &Locale,
) -> Vec<&'a Resource> {
    let text = route
        .field(FieldKey::GeoreferencedResources, locale)
        .filter(|text| !text.trim().is_empty());
    let Some(text) = text else {
        warn!(
            "route '{}' has no georeferenced resources text, keeping all resources",
            route.name
        );
        return resources.iter().collect();
    };
    let prefixes = route_prefixes(text);
    resources
        .iter()
        .filter(|resource| prefixes.iter().any(|p| resource.id.starts_with(p.as_str())))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::locale::Language;
    use std::collections::HashMap;

    fn resource(id: &str) -> Resource {
        Resource {
            id: id.to_owned(),
            lat: 15.0,
            lng: -23.0,
            category: String::new(),
            fields: HashMap::new(),
        }
    }

    fn route_with_text(text: Option<&str>) -> Route {
        let mut fields = HashMap::new();
        if let Some(text) = text {
            fields.insert("recursos georeferenciados".to_owned(), text.to_owned());
        }
        Route {
            name: "test".to_owned(),
            coordinates: vec![],
            fields,
        }
    }

    #[test]
    fn prefixes_are_first_two_characters_per_line() {
        let text = "01 - Praia\n05 - Farol";
        assert_eq!(route_prefixes(text), vec!["01", "05"]);
    }

    #[test]
    fn short_lines_are_skipped() {
        let text = "01 - Praia\n\n 7 \nx\n12 - Mercado";
        assert_eq!(route_prefixes(text), vec!["01", "12"]);
    }

    #[test]
    fn association_matches_by_id_prefix() {
        let locale = Locale::new(Language::Pt);
        let resources = [resource("01A"), resource("05B"), resource("12C")];
        let route = route_with_text(Some("01 - Praia\n05 - Farol"));
        let matched = resources_for_route(&route, &resources, &locale);
        let ids: Vec<&str> = matched.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["01A", "05B"]);
    }

    #[test]
    fn result_order_follows_resource_order() {
        let locale = Locale::new(Language::Pt);
        let resources = [resource("05B"), resource("01A")];
        let route = route_with_text(Some("01 - Praia\n05 - Farol"));
        let matched = resources_for_route(&route, &resources, &locale);
        let ids: Vec<&str> = matched.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["05B", "01A"]);
    }

    #[test]
    fn missing_text_keeps_all_resources() {
        let locale = Locale::new(Language::Pt);
        let resources = [resource("01A"), resource("12C")];
        for route in [route_with_text(None), route_with_text(Some("  \n "))] {
            let matched = resources_for_route(&route, &resources, &locale);
            assert_eq!(matched.len(), resources.len());
        }
    }
}
