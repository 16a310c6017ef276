//! UI string table with dotted-path lookup.
//!
//! Strings live in a static tree; a path like `"sortOptions.titleAsc"` is
//! resolved segment by segment. Resolution falls back from the requested
//! locale to English, and finally to the literal path when the key does not
//! exist, so the UI always has something to render.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Pt,
}

impl Locale {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "en" => Some(Locale::En),
            "pt" => Some(Locale::Pt),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Pt => "pt",
        }
    }
}

enum Node {
    Leaf { en: &'static str, pt: &'static str },
    Branch(&'static [(&'static str, Node)]),
}

const fn leaf(en: &'static str, pt: &'static str) -> Node {
    Node::Leaf { en, pt }
}

static MESSAGES: Node = Node::Branch(&[
    ("appName", leaf("Marquee", "Marquee")),
    (
        "tagline",
        leaf("Movie Discovery Catalog", "Catálogo de Descoberta de Filmes"),
    ),
    (
        "searchPlaceholder",
        leaf(
            "Search movies, actors, directors...",
            "Buscar filmes, atrizes, diretoras...",
        ),
    ),
    ("filterBy", leaf("Filter by", "Filtrar por")),
    ("releaseYear", leaf("Release Year", "Ano de Lançamento")),
    ("country", leaf("Country", "País")),
    ("language", leaf("Language", "Idioma")),
    ("tags", leaf("Tags", "Tags")),
    ("all", leaf("All", "Todos")),
    ("allCountries", leaf("All Countries", "Todos os Países")),
    ("allLanguages", leaf("All Languages", "Todos os Idiomas")),
    ("resetFilters", leaf("Reset Filters", "Limpar Filtros")),
    ("sortBy", leaf("Sort by", "Ordenar por")),
    (
        "sortOptions",
        Node::Branch(&[
            ("titleAsc", leaf("Title (A-Z)", "Título (A-Z)")),
            ("titleDesc", leaf("Title (Z-A)", "Título (Z-A)")),
            ("yearNewest", leaf("Year (Newest)", "Ano (Mais Novo)")),
            ("yearOldest", leaf("Year (Oldest)", "Ano (Mais Antigo)")),
            ("imdbHighest", leaf("IMDb Rating (Highest)", "Nota IMDb (Maior)")),
            ("imdbLowest", leaf("IMDb Rating (Lowest)", "Nota IMDb (Menor)")),
        ]),
    ),
    ("availability", leaf("Available on", "Disponível em")),
    ("watchOn", leaf("Watch on", "Assistir em")),
    (
        "availabilityCountry",
        leaf("Availability Region", "Região da Disponibilidade"),
    ),
    (
        "noMoviesFound",
        leaf(
            "No movies found matching your criteria.",
            "Nenhum filme encontrado com seus critérios.",
        ),
    ),
    ("loadingMovies", leaf("Loading movies...", "Carregando filmes...")),
    ("selectLanguage", leaf("Select Language", "Selecionar Idioma")),
    ("english", leaf("English", "English")),
    ("portuguese", leaf("Português (Brasil)", "Português (Brasil)")),
    ("showFilters", leaf("Show Filters", "Mostrar Filtros")),
    ("hideFilters", leaf("Hide Filters", "Esconder Filtros")),
    (
        "includeExplicitContent",
        leaf("Include Explicit Content", "Incluir Conteúdo Explícito"),
    ),
    (
        "movieCard",
        Node::Branch(&[
            ("year", leaf("Year", "Ano")),
            ("countries", leaf("Countries", "Países")),
            ("languages", leaf("Languages", "Idiomas")),
            ("tags", leaf("Genres", "Gêneros")),
            ("director", leaf("Director", "Direção")),
            ("description", leaf("Description", "Descrição")),
        ]),
    ),
    (
        "platforms",
        Node::Branch(&[
            ("Netflix", leaf("Netflix", "Netflix")),
            ("PrimeVideo", leaf("Prime Video", "Prime Video")),
            ("AppleTV", leaf("Apple TV+", "Apple TV+")),
            ("DisneyPlus", leaf("Disney+", "Disney+")),
            ("Max", leaf("Max", "Max")),
            ("ParamountPlus", leaf("Paramount+", "Paramount+")),
            ("Hulu", leaf("Hulu", "Hulu")),
            ("Mubi", leaf("Mubi", "Mubi")),
            ("Peacock", leaf("Peacock", "Peacock")),
            ("Globoplay", leaf("Globoplay", "Globoplay")),
            ("StarPlus", leaf("Star+", "Star+")),
            ("ClaroVideo", leaf("Claro video", "Claro video")),
            ("Looke", leaf("Looke", "Looke")),
            ("Telecine", leaf("Telecine", "Telecine")),
            ("Other", leaf("Other", "Outro")),
        ]),
    ),
]);

fn resolve(path: &str) -> Option<(&'static str, &'static str)> {
    let mut node = &MESSAGES;
    for segment in path.split('.') {
        match node {
            Node::Branch(children) => {
                node = &children.iter().find(|(key, _)| *key == segment)?.1;
            }
            // The path descends past a leaf, e.g. "appName.foo"
            Node::Leaf { .. } => return None,
        }
    }
    match node {
        Node::Leaf { en, pt } => Some((en, pt)),
        Node::Branch(_) => None,
    }
}

/// Resolves a dotted path for a locale.
///
/// Falls back to English when the localized slot is empty, and to the
/// literal path when the key is unknown.
pub fn lookup(locale: Locale, path: &str) -> &str {
    match resolve(path) {
        Some((en, pt)) => {
            let localized = match locale {
                Locale::En => en,
                Locale::Pt => pt,
            };
            if localized.is_empty() {
                en
            } else {
                localized
            }
        }
        None => path,
    }
}

/// The whole table for a locale, flattened to dotted paths.
pub fn table(locale: Locale) -> BTreeMap<String, String> {
    let mut out = BTreeMap::new();
    flatten(&MESSAGES, String::new(), locale, &mut out);
    out
}

fn flatten(node: &'static Node, prefix: String, locale: Locale, out: &mut BTreeMap<String, String>) {
    match node {
        Node::Leaf { en, pt } => {
            let localized = match locale {
                Locale::En => en,
                Locale::Pt => pt,
            };
            let value = if localized.is_empty() { en } else { localized };
            out.insert(prefix, value.to_string());
        }
        Node::Branch(children) => {
            for (key, child) in children.iter() {
                let path = if prefix.is_empty() {
                    (*key).to_string()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten(child, path, locale, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_parse() {
        assert_eq!(Locale::parse("en"), Some(Locale::En));
        assert_eq!(Locale::parse("PT"), Some(Locale::Pt));
        assert_eq!(Locale::parse(" pt "), Some(Locale::Pt));
        assert_eq!(Locale::parse("fr"), None);
        assert_eq!(Locale::parse(""), None);
        assert_eq!(Locale::En.as_str(), "en");
        assert_eq!(Locale::Pt.as_str(), "pt");
    }

    #[test]
    fn test_lookup_top_level_key() {
        assert_eq!(lookup(Locale::Pt, "filterBy"), "Filtrar por");
        assert_eq!(lookup(Locale::En, "filterBy"), "Filter by");
    }

    #[test]
    fn test_lookup_nested_path() {
        assert_eq!(lookup(Locale::Pt, "sortOptions.yearNewest"), "Ano (Mais Novo)");
        assert_eq!(lookup(Locale::En, "movieCard.director"), "Director");
        assert_eq!(lookup(Locale::Pt, "platforms.Other"), "Outro");
    }

    #[test]
    fn test_lookup_unknown_path_returns_key() {
        assert_eq!(lookup(Locale::En, "doesNotExist"), "doesNotExist");
        assert_eq!(lookup(Locale::Pt, "sortOptions.bogus"), "sortOptions.bogus");
        // Descending past a leaf is also unknown
        assert_eq!(lookup(Locale::En, "appName.nested"), "appName.nested");
        // A branch itself is not a string
        assert_eq!(lookup(Locale::En, "sortOptions"), "sortOptions");
    }

    #[test]
    fn test_table_is_flattened() {
        let table = table(Locale::Pt);
        assert_eq!(table.get("resetFilters").map(String::as_str), Some("Limpar Filtros"));
        assert_eq!(
            table.get("sortOptions.titleAsc").map(String::as_str),
            Some("Título (A-Z)")
        );
        assert_eq!(table.get("platforms.Netflix").map(String::as_str), Some("Netflix"));
        // No branch keys leak into the flat table
        assert!(!table.contains_key("sortOptions"));
    }

    #[test]
    fn test_tables_cover_same_keys() {
        let en: Vec<_> = table(Locale::En).into_keys().collect();
        let pt: Vec<_> = table(Locale::Pt).into_keys().collect();
        assert_eq!(en, pt);
    }
}
