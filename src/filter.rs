//! Multi-facet filtering.
//!
//! Facets combine by successive narrowing (logical AND); within one facet
//! the selected values combine as a union. An empty selection for a facet
//! means "no restriction", never "match nothing". Filtering is a pure
//! function of (records, selection, route scope) and preserves input order.

use crate::associate;
use crate::locale::{FieldKey, Locale};
use crate::record::{Resource, Route};
use itertools::Itertools;

/// Active filter selections, one value set per facet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub categories: Vec<String>,
    pub durations: Vec<String>,
    pub activities: Vec<String>,
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.durations.is_empty() && self.activities.is_empty()
    }
}

/// Normalize a raw activity-list value into lowercase tokens.
///
/// Bracket and quote punctuation is stripped, whitespace collapsed, and the
/// comma-delimited tokens lowercased and trimmed; empty tokens are dropped.
pub fn normalize_activities(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(clean_activity)
        .filter(|token| !token.is_empty())
        .collect()
}

fn clean_activity(raw: &str) -> String {
    let stripped: String = raw
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | '\'' | '"'))
        .collect();
    stripped.split_whitespace().join(" ").to_lowercase()
}

/// Filter point resources by route scope, then category.
///
/// With a selected route, only resources associated to it (see
/// [crate::associate]) are considered; `None` removes that pre-filter.
pub fn filter_resources<'a>(
    resources: &'a [Resource],
    route_scope: Option<&Route>,
    selection: &Selection,
    locale: &Locale,
) -> Vec<&'a Resource> {
    let scoped = match route_scope {
        Some(route) => associate::resources_for_route(route, resources, locale),
        None => resources.iter().collect_vec(),
    };
    scoped
        .into_iter()
        .filter(|resource| {
            selection.categories.is_empty()
                || selection.categories.iter().any(|c| *c == resource.category)
        })
        .collect()
}

/// Filter routes by duration, then activity.
pub fn filter_routes<'a>(
    routes: &'a [Route],
    selection: &Selection,
    locale: &Locale,
) -> Vec<&'a Route> {
    routes
        .iter()
        .filter(|route| passes_duration(route, selection, locale))
        .filter(|route| passes_activity(route, selection, locale))
        .collect()
}

/// Duration is compared on the raw label, no bucketing or parsing.
fn passes_duration(route: &Route, selection: &Selection, locale: &Locale) -> bool {
    if selection.durations.is_empty() {
        return true;
    }
    match route.field(FieldKey::Duration, locale) {
        Some(duration) => selection.durations.iter().any(|d| d == duration),
        None => false,
    }
}

/// Activity matches when the route's normalized token set intersects the
/// selection, case-insensitively.
fn passes_activity(route: &Route, selection: &Selection, locale: &Locale) -> bool {
    if selection.activities.is_empty() {
        return true;
    }
    let Some(raw) = route.field(FieldKey::ActivityList, locale) else {
        return false;
    };
    let tokens = normalize_activities(raw);
    selection
        .activities
        .iter()
        .any(|wanted| tokens.iter().any(|t| *t == wanted.to_lowercase()))
}
