//! Routes and history for keypad screens.
//!
//! Screens are addressed by a path plus query parameters
//! (`/mapView?lat=47.2&lng=11.4`). The keypad layer reads the current route
//! through [`Router`], changes it with [`Router::set_route`], and walks back
//! with [`BackNavigator::go_back`]. [`History`] is a back stack implementing
//! both.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Route prefixes the screens are registered under.
pub mod routes {
    pub const START: &str = "/start";
    pub const ARTICLE: &str = "/article";
    pub const DETAIL: &str = "/detail";
    /// Prefix shared by every map screen; also matches [`MAP_VIEW`].
    pub const MAP: &str = "/map";
    pub const MAP_VIEW: &str = "/mapView";
    pub const OPTIONS: &str = "/options";
    pub const ABOUT: &str = "/about";
    pub const PRIVACY_POLICY: &str = "/privacy_policy";
    pub const SETTINGS_VIEW: &str = "/settingsView";
    pub const INTRO: &str = "/intro";
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("route is empty")]
    Empty,
    #[error("route {0:?} must start with '/'")]
    MissingSlash(String),
    #[error("route parameter {0:?} is not valid percent-encoded UTF-8")]
    BadEncoding(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub path: String,
    #[serde(default)]
    pub params: BTreeMap<String, String>,
}

impl Route {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: BTreeMap::new(),
        }
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.params.insert(key.into(), value.to_string());
        self
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Prefix test used to scope key actions (`/map` matches `/mapView`).
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.path.starts_with(prefix)
    }

    pub fn parse(s: &str) -> Result<Self, RouteError> {
        if s.is_empty() {
            return Err(RouteError::Empty);
        }
        if !s.starts_with('/') {
            return Err(RouteError::MissingSlash(s.to_string()));
        }
        let (path, query) = s.split_once('?').unwrap_or((s, ""));
        let params: BTreeMap<String, String> = query
            .split('&')
            .filter(|kv| !kv.is_empty())
            .map(|kv| {
                let (k, v) = kv.split_once('=').unwrap_or((kv, ""));
                Ok((decode(k)?, decode(v)?))
            })
            .collect::<Result<_, RouteError>>()?;
        Ok(Self {
            path: path.to_string(),
            params,
        })
    }
}

fn decode(s: &str) -> Result<String, RouteError> {
    urlencoding::decode(s)
        .map(|d| d.into_owned())
        .map_err(|_| RouteError::BadEncoding(s.to_string()))
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::parse(s)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        for (i, (k, v)) in self.params.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(
                f,
                "{sep}{}={}",
                urlencoding::encode(k),
                urlencoding::encode(v)
            )?;
        }
        Ok(())
    }
}

/// Routing collaborator.
pub trait Router {
    fn current_route(&self) -> Route;
    fn set_route(&mut self, route: Route);
}

/// History collaborator.
pub trait BackNavigator {
    /// Returns false when there is nothing to go back to.
    fn go_back(&mut self) -> bool;
}

/// A single object that is both router and history, which is what hosts
/// normally have.
pub trait RouteHost: Router + BackNavigator {}
impl<T> RouteHost for T where T: Router + BackNavigator {}

/// Back stack of routes. Never pops its last entry.
pub struct History {
    entries: Vec<Route>,
}

impl History {
    pub fn new(start: Route) -> Self {
        Self {
            entries: vec![start],
        }
    }

    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn push(&mut self, route: Route) {
        log::info!("route -> {route}");
        self.entries.push(route);
    }

    pub fn pop(&mut self) -> bool {
        // Don't pop if only one entry is present
        if self.entries.len() <= 1 {
            return false;
        }
        self.entries.pop();
        if let Some(r) = self.entries.last() {
            log::info!("route <- {r}");
        }
        true
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.entries).unwrap_or("[]".into())
    }

    /// Restore a stack saved with [`History::to_json`]. An empty or invalid
    /// document leaves the stack unchanged.
    pub fn from_json(&mut self, json: &str) -> Result<(), serde_json::Error> {
        let routes: Vec<Route> = serde_json::from_str(json)?;
        if !routes.is_empty() {
            self.entries = routes;
        }
        Ok(())
    }
}

impl Router for History {
    fn current_route(&self) -> Route {
        self.entries
            .last()
            .cloned()
            .unwrap_or_else(|| Route::new(routes::START))
    }

    fn set_route(&mut self, route: Route) {
        self.push(route);
    }
}

impl BackNavigator for History {
    fn go_back(&mut self) -> bool {
        self.pop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_route() {
        let r = Route::parse("/start?index=0").unwrap();
        assert_eq!(r.path, "/start");
        assert_eq!(r.param("index"), Some("0"));

        let r: Route = "/mapView?lat=1.5&lng=-3".parse().unwrap();
        assert_eq!(r.param("lat"), Some("1.5"));
        assert_eq!(r.param("lng"), Some("-3"));
        assert_eq!(r.to_string(), "/mapView?lat=1.5&lng=-3");

        assert_eq!(Route::parse(""), Err(RouteError::Empty));
        assert!(matches!(Route::parse("/start?search=%FF"), Err(RouteError::BadEncoding(_))));
        assert!(matches!(Route::parse("start"), Err(RouteError::MissingSlash(_))));
    }

    #[test]
    fn test_search_term_is_percent_encoded() {
        let r = Route::new(routes::START).with_param("search", "salt & pepper=1");
        let s = r.to_string();
        assert_eq!(s, "/start?search=salt%20%26%20pepper%3D1");
        assert_eq!(Route::parse(&s).unwrap(), r);

        let r = Route::parse("/start?search=Caf%C3%A9%20M%C3%BCller").unwrap();
        assert_eq!(r.param("search"), Some("Café Müller"));
    }

    #[test]
    fn test_prefix_matching() {
        let r = Route::new(routes::MAP_VIEW);
        assert!(r.starts_with(routes::MAP));
        assert!(!Route::new(routes::START).starts_with(routes::MAP));
    }

    #[test]
    fn test_history_never_pops_last() {
        let mut h = History::new(Route::new(routes::START));
        assert!(!h.go_back());

        h.set_route(Route::new(routes::ARTICLE));
        h.set_route(Route::new(routes::MAP_VIEW));
        assert_eq!(h.current_route().path, routes::MAP_VIEW);
        assert_eq!(h.size(), 3);

        assert!(h.go_back());
        assert!(h.go_back());
        assert_eq!(h.current_route().path, routes::START);
        assert!(!h.go_back());
        assert_eq!(h.size(), 1);
    }

    #[test]
    fn test_json_roundtrip_keeps_params() {
        let mut h = History::new(Route::new(routes::START));
        h.push(Route::new(routes::MAP_VIEW).with_param("lat", 47.25).with_param("lng", 11.4));
        let saved = h.to_json();

        let mut restored = History::new(Route::new(routes::INTRO));
        restored.from_json(&saved).unwrap();
        assert_eq!(restored.size(), 2);
        assert_eq!(restored.current_route().param("lat"), Some("47.25"));

        assert!(restored.from_json("not json").is_err());
        restored.from_json("[]").unwrap();
        assert_eq!(restored.size(), 2);
    }
}
