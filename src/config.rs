use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::CheckError;
use crate::router::{CheckScreen, PlaceholderScreen, Route, ScreenFactory};

/// On-disk shape of one route table entry:
///
/// ```toml
/// [[routes]]
/// name = "history"
/// path = "/history"
/// screen = "placeholder"
/// enabled = true
/// ```
#[derive(Debug, Deserialize)]
pub struct RouteSpec {
    pub name: String,
    pub path: String,
    pub screen: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

#[derive(Debug, Deserialize)]
struct RoutesFile {
    #[serde(default)]
    routes: Vec<RouteSpec>,
}

/// The table used when no `--routes` file is given: just the public
/// check form at the root.
#[must_use]
pub fn default_routes() -> Vec<Route> {
    vec![Route {
        name: "check".into(),
        path: "/".into(),
        factory: Box::new(|| Box::new(CheckScreen::default())),
        enabled: true,
    }]
}

/// Load a route table from TOML. Every entry's `screen` must name a
/// built-in screen; an unknown name is a config error pointing at the
/// offending route, not a silent skip.
pub fn load_routes(path: &Path) -> Result<Vec<Route>, CheckError> {
    let text = fs::read_to_string(path).map_err(|source| CheckError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let file: RoutesFile = toml::from_str(&text).map_err(|e| CheckError::Config {
        path: path.to_path_buf(),
        reason: e.message().to_string(),
    })?;

    file.routes
        .into_iter()
        .map(|spec| {
            let factory =
                screen_factory(&spec.screen, &spec.name).ok_or_else(|| CheckError::Config {
                    path: path.to_path_buf(),
                    reason: format!(
                        "unknown screen \"{}\" for route \"{}\"",
                        spec.screen, spec.name
                    ),
                })?;
            Ok(Route {
                name: spec.name,
                path: spec.path,
                factory,
                enabled: spec.enabled,
            })
        })
        .collect()
}

/// Resolve a screen name to its factory. `check` is the form page;
/// `placeholder` stands in for pages that only exist as routes.
fn screen_factory(screen: &str, route_name: &str) -> Option<ScreenFactory> {
    match screen {
        "check" => Some(Box::new(|| Box::new(CheckScreen::default()))),
        "placeholder" => {
            let name = route_name.to_string();
            Some(Box::new(move || {
                Box::new(PlaceholderScreen { name: name.clone() })
            }))
        }
        _ => None,
    }
}
