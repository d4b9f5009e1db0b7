//! Path routing for the three site pages.

use crate::i18n::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    AboutStudy,
    VolunteerInformation,
}

impl Route {
    pub const ALL: [Route; 3] = [Route::Home, Route::AboutStudy, Route::VolunteerInformation];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::AboutStudy => "/about-the-study",
            Route::VolunteerInformation => "/volunteer-information",
        }
    }

    /// Match a request path. Query strings, fragments and a trailing slash
    /// are ignored; anything unknown is `None`.
    pub fn from_path(path: &str) -> Option<Route> {
        let path = strip_suffixes(path);
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        Route::ALL.into_iter().find(|route| route.path() == path)
    }
}

/// A request path split into an optional locale prefix and a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub locale: Option<Locale>,
    pub route: Option<Route>,
}

/// Parse `/th/about-the-study` style paths. The locale segment is optional.
pub fn parse_location(path: &str) -> Location {
    let path = strip_suffixes(path);
    let trimmed = path.trim_start_matches('/');
    let (first, rest) = trimmed.split_once('/').unwrap_or((trimmed, ""));

    match Locale::from_code(first) {
        Ok(locale) => Location {
            locale: Some(locale),
            route: Route::from_path(&format!("/{}", rest)),
        },
        Err(_) => Location {
            locale: None,
            route: Route::from_path(path),
        },
    }
}

/// The path with its locale prefix, query, fragment and trailing slash
/// removed. Known routes map to [`Route::path`].
pub fn canonical_path(path: &str) -> String {
    let location = parse_location(path);
    if let Some(route) = location.route {
        return route.path().to_string();
    }

    let trimmed = strip_suffixes(path).trim_start_matches('/');
    let rest = match location.locale {
        Some(_) => trimmed.split_once('/').map_or("", |(_, rest)| rest),
        None => trimmed,
    };
    format!("/{}", rest.trim_end_matches('/'))
}

/// Link to a route in a locale, as laid out by the static export.
pub fn href(route: Route, locale: Locale) -> String {
    match route {
        Route::Home => format!("/{}/", locale.code()),
        other => format!("/{}{}", locale.code(), other.path()),
    }
}

fn strip_suffixes(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}
