//! Per-language dataset loading.
//!
//! Main entry point for binding raw rows to normalized records.

use crate::errors::{Result, invalid_input_ref};
use crate::facets::{self, FacetOptions};
use crate::input::RawRow;
use crate::locale::{Language, Locale};
use crate::record::{self, Resource, Route};
use itertools::Itertools;
use log::{info, warn};

/// The complete load result for one language.
///
/// Built whole before anything may filter against it; a language change
/// builds a new `Dataset` and the caller swaps the reference, facet
/// selections reset to empty rather than carrying over.
#[derive(Clone, Debug)]
pub struct Dataset {
    pub language: Language,
    pub resources: Vec<Resource>,
    pub routes: Vec<Route>,
    pub facets: FacetOptions,
}

impl Dataset {
    pub fn locale(&self) -> Locale {
        Locale::new(self.language)
    }

    /// Map all rows and derive the facet option lists.
    ///
    /// Rows with a malformed coordinate cell are skipped with a warning;
    /// the load fails only when no resource row at all could be mapped.
    pub fn load(
        resource_rows: &[RawRow],
        route_rows: &[RawRow],
        language: Language,
    ) -> Result<Dataset> {
        let locale = Locale::new(language);

        let mut resources = Vec::new();
        let mut skipped = 0usize;
        for row in resource_rows {
            match record::map_resource(row, &locale) {
                Ok(resource) => resources.push(resource),
                Err(e) => {
                    skipped += 1;
                    warn!("skipping resource row: {e}");
                }
            }
        }
        if resources.is_empty() && !resource_rows.is_empty() {
            return Err(invalid_input_ref("no resource row could be mapped"));
        }

        let routes = route_rows
            .iter()
            .map(|row| record::map_route(row, &locale))
            .collect_vec();
        let facets = facets::facet_options(&routes, &locale);

        info!(
            "loaded {language}: {} resources ({skipped} rows skipped), {} routes",
            resources.len(),
            routes.len(),
        );
        info!(
            "distinct categories: {}; facet options: {} durations, {} activities",
            resources.iter().map(|r| r.category.as_str()).unique().count(),
            facets.durations.len(),
            facets.activities.len(),
        );

        Ok(Dataset {
            language,
            resources,
            routes,
            facets,
        })
    }

    /// The route selected by name, if any.
    pub fn route_by_name(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.name == name)
    }
}
