//! Locale dictionaries: canonical field keys resolved to per-language labels.
//!
//! Column headers in the source data vary by language; every cross-field
//! access goes through [Locale::label] instead of hardcoding a header
//! literal. The two identity headers (`Lat-Long` and the transformed route
//! column) are the only exception, see [crate::record].

use crate::errors::{Result, invalid_argument};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported dataset language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Pt,
    En,
    Es,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Language::Pt => write!(f, "pt"),
            Language::En => write!(f, "en"),
            Language::Es => write!(f, "es"),
        }
    }
}

impl FromStr for Language {
    type Err = Box<dyn std::error::Error>;

    fn from_str(s: &str) -> Result<Language> {
        match s {
            "pt" => Ok(Language::Pt),
            "en" => Ok(Language::En),
            "es" => Ok(Language::Es),
            other => Err(invalid_argument(format!(
                "unknown language '{other}', expected one of: pt, en, es"
            ))),
        }
    }
}

/// A stable, language-neutral identifier for a logical data field.
///
/// The enumeration replaces free-form dictionary lookups: a key that has no
/// label in some language resolves to `None` and the field is treated as
/// absent, it never panics downstream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Id,
    ResourceName,
    Description,
    Island,
    Council,
    Parish,
    Neighborhood,
    Classification,
    Category,
    ConservationStatus,
    RouteName,
    RouteDescription,
    Duration,
    Distance,
    Difficulty,
    ActivityList,
    GeoreferencedResources,
    StartingPoint,
    ExitPoint,
    Recommendations,
}

/// The dictionary for one language.
///
/// Constructed once per language and swapped wholesale on language change,
/// never mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Locale {
    language: Language,
}

impl Locale {
    pub fn new(language: Language) -> Locale {
        Locale { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// The column header / display label for `key` in this language.
    ///
    /// `None` means the language has no data for this key; consumers render
    /// nothing for the field.
    pub fn label(&self, key: FieldKey) -> Option<&'static str> {
        match self.language {
            Language::Pt => label_pt(key),
            Language::En => label_en(key),
            Language::Es => label_es(key),
        }
    }
}

fn label_pt(key: FieldKey) -> Option<&'static str> {
    use FieldKey::*;
    match key {
        Id => Some("id"),
        ResourceName => Some("nome do recurso turístico"),
        Description => Some("descrição do produto"),
        Island => Some("ilha"),
        Council => Some("conselho"),
        Parish => Some("freguesia"),
        Neighborhood => Some("bairro"),
        Classification => Some("classificação"),
        Category => Some("cara"),
        ConservationStatus => Some("estado de conservação"),
        RouteName => Some("Nome da rota"),
        RouteDescription => Some("descrição da rota máx. 300 palavras"),
        Duration => Some("duración_final"),
        Distance => Some("distância"),
        Difficulty => Some("dificuldade"),
        ActivityList => Some("atividade_lista"),
        GeoreferencedResources => Some("recursos georeferenciados"),
        StartingPoint => Some("ponto de início"),
        ExitPoint => Some("ponto de saída"),
        Recommendations => Some("recomendações"),
    }
}

fn label_en(key: FieldKey) -> Option<&'static str> {
    use FieldKey::*;
    match key {
        Id => Some("id"),
        ResourceName => Some("tourist resource name"),
        Description => Some("product description"),
        Island => Some("island"),
        Council => Some("council"),
        Parish => Some("parish"),
        Neighborhood => Some("neighborhood"),
        Classification => Some("classification"),
        Category => Some("cara"),
        ConservationStatus => Some("conservation status"),
        RouteName => Some("Route name"),
        RouteDescription => Some("route description max. 300 words"),
        Duration => Some("duration_final"),
        Distance => Some("distance"),
        Difficulty => Some("difficulty"),
        ActivityList => Some("activity_list"),
        GeoreferencedResources => Some("georeferenced resources"),
        // The English dataset does not carry these columns.
        StartingPoint => None,
        ExitPoint => None,
        Recommendations => None,
    }
}

fn label_es(key: FieldKey) -> Option<&'static str> {
    use FieldKey::*;
    match key {
        Id => Some("identificación"),
        ResourceName => Some("nombre del recurso turístico"),
        Description => Some("descripción del producto"),
        Island => Some("isla"),
        Council => Some("consejo"),
        Parish => Some("parroquia"),
        Neighborhood => Some("vecindario"),
        Classification => Some("clasificación"),
        Category => Some("cara"),
        ConservationStatus => Some("estado de conservación"),
        RouteName => Some("Nombre de la ruta"),
        RouteDescription => Some("descripción de la ruta max. 300 palabras"),
        Duration => Some("duración_final"),
        Distance => Some("distancia"),
        Difficulty => Some("dificultad"),
        ActivityList => Some("actividad_lista"),
        GeoreferencedResources => Some("recursos georeferenciados"),
        StartingPoint => Some("punto de inicio"),
        ExitPoint => Some("punto de salida"),
        Recommendations => Some("recomendaciones"),
    }
}
