//! Normalized resource and route records, mapped from raw rows.

use crate::errors::{Result, malformed_identity_field};
use crate::input::RawRow;
use crate::locale::{FieldKey, Locale};
use log::{debug, warn};
use serde::Serialize;
use std::collections::HashMap;

/// Raw header of the combined coordinate cell on resource rows.
///
/// This header and [ROUTE_COORDS_HEADER] keep a constant name across
/// languages; every other column goes through the locale dictionary.
pub const LAT_LNG_HEADER: &str = "Lat-Long";

/// Raw header of the transformed coordinate list on route rows.
pub const ROUTE_COORDS_HEADER: &str = "Rota LatLong Transformada";

/// Canonical key the category column is normalized to.
pub const CATEGORY_KEY: &str = "cara";

/// A coordinate pair with named components.
///
/// Consumers that need (lng, lat) order convert locally; the engine never
/// assumes a global tuple order.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// One tourist point of interest.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Resource {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    /// The classification facet value, from the category column.
    pub category: String,
    /// Every other column, keyed by its case-normalized header.
    pub fields: HashMap<String, String>,
}

/// One touring itinerary.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Route {
    /// Unique selection key within a language.
    pub name: String,
    /// Plotted line of the route; may be empty, never contains a
    /// malformed pair.
    pub coordinates: Vec<LatLng>,
    /// Every other column, keyed by its case-normalized header.
    pub fields: HashMap<String, String>,
}

impl Resource {
    /// Locale-indirect field access: `None` when the key has no label in
    /// this language or the column is absent from the dataset.
    pub fn field(&self, key: FieldKey, locale: &Locale) -> Option<&str> {
        lookup(&self.fields, key, locale)
    }
}

impl Route {
    /// Locale-indirect field access, as [Resource::field].
    pub fn field(&self, key: FieldKey, locale: &Locale) -> Option<&str> {
        lookup(&self.fields, key, locale)
    }
}

fn lookup<'a>(
    fields: &'a HashMap<String, String>,
    key: FieldKey,
    locale: &Locale,
) -> Option<&'a str> {
    let label = locale.label(key)?;
    fields.get(&label.to_lowercase()).map(String::as_str)
}

fn normalize_key(header: &str) -> String {
    if header.eq_ignore_ascii_case(CATEGORY_KEY) {
        CATEGORY_KEY.to_owned()
    } else {
        header.to_lowercase()
    }
}

/// Parse a `"lat,lng"` cell into a coordinate pair.
///
/// The cell must split into exactly two components and both must parse as
/// finite numbers.
pub fn parse_lat_lng(cell: &str) -> Result<LatLng> {
    let parts: Vec<&str> = cell.split(',').map(str::trim).collect();
    let &[lat, lng] = parts.as_slice() else {
        return Err(malformed_identity_field(format!(
            "expected 'lat,lng', got '{cell}'"
        )));
    };
    let lat: f64 = lat
        .parse()
        .map_err(|_| malformed_identity_field(format!("bad latitude in '{cell}'")))?;
    let lng: f64 = lng
        .parse()
        .map_err(|_| malformed_identity_field(format!("bad longitude in '{cell}'")))?;
    if !lat.is_finite() || !lng.is_finite() {
        return Err(malformed_identity_field(format!(
            "non-finite coordinate in '{cell}'"
        )));
    }
    Ok(LatLng { lat, lng })
}

/// Parse the semicolon-delimited transformed route column.
///
/// Malformed entries are dropped individually; the route itself survives.
fn parse_route_coordinates(cell: &str) -> Vec<LatLng> {
    let mut coordinates = Vec::new();
    for entry in cell.split(';') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        match parse_lat_lng(entry) {
            Ok(pair) => coordinates.push(pair),
            Err(e) => debug!("dropping route coordinate entry: {e}"),
        }
    }
    coordinates
}

/// Map one raw resource row into a [Resource].
///
/// Pure transform; fails only when the mandatory coordinate cell is missing
/// or malformed.
pub fn map_resource(row: &RawRow, locale: &Locale) -> Result<Resource> {
    let cell = row
        .get(LAT_LNG_HEADER)
        .ok_or_else(|| malformed_identity_field(format!("missing '{LAT_LNG_HEADER}' cell")))?;
    let LatLng { lat, lng } = parse_lat_lng(cell)?;

    let mut fields = HashMap::new();
    for (header, value) in row {
        if header == LAT_LNG_HEADER {
            continue;
        }
        fields.insert(normalize_key(header), value.clone());
    }
    let id = lookup(&fields, FieldKey::Id, locale)
        .unwrap_or_default()
        .to_owned();
    let category = fields.get(CATEGORY_KEY).cloned().unwrap_or_default();
    Ok(Resource {
        id,
        lat,
        lng,
        category,
        fields,
    })
}

/// Map one raw route row into a [Route].
///
/// A missing transformed coordinate column yields an empty plotted line, not
/// an error.
pub fn map_route(row: &RawRow, locale: &Locale) -> Route {
    let coordinates = row
        .get(ROUTE_COORDS_HEADER)
        .map(|cell| parse_route_coordinates(cell))
        .unwrap_or_default();

    let name_label = locale.label(FieldKey::RouteName);
    let name = name_label
        .and_then(|label| row.get(label))
        .cloned()
        .unwrap_or_default();
    if name.is_empty() {
        warn!("route row without a name in language {}", locale.language());
    }

    let mut fields = HashMap::new();
    for (header, value) in row {
        if header == ROUTE_COORDS_HEADER || Some(header.as_str()) == name_label {
            continue;
        }
        fields.insert(normalize_key(header), value.clone());
    }
    Route {
        name,
        coordinates,
        fields,
    }
}
