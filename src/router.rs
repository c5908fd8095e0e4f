use crate::form::CheckForm;
use crate::render::{self, Style};

/// Anything a resolved route can display.
pub trait Screen {
    fn render(&self, style: Style) -> String;
}

/// Builds a screen on demand. Routes hold factories, not screens, so
/// resolving twice gives two fresh screens.
pub type ScreenFactory = Box<dyn Fn() -> Box<dyn Screen>>;

/// One entry of the route table. The table is plain data handed to
/// [`Router::new`] by the caller; there is no global registry.
pub struct Route {
    pub name: String,
    pub path: String,
    pub factory: ScreenFactory,
    pub enabled: bool,
}

impl std::fmt::Debug for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Route")
            .field("name", &self.name)
            .field("path", &self.path)
            .field("factory", &"<factory>")
            .field("enabled", &self.enabled)
            .finish()
    }
}

/// Outcome of resolving a path against the table.
pub enum Resolved {
    Screen(Box<dyn Screen>),
    /// Known route, but the caller is not authenticated.
    Denied { path: String },
    NotFound,
}

/// Path-to-screen resolution with auth gating. The root path `/` is
/// always public; every other route requires the caller-supplied auth
/// flag. Where that flag comes from is the host's business; the router
/// only reads it.
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    #[must_use]
    pub fn new(routes: Vec<Route>) -> Self {
        Router { routes }
    }

    /// Exact path match over enabled routes. Disabled routes are
    /// invisible: they resolve like paths that were never declared.
    #[must_use]
    pub fn resolve(&self, path: &str, is_auth: bool) -> Resolved {
        let Some(route) = self.routes.iter().find(|r| r.enabled && r.path == path) else {
            return Resolved::NotFound;
        };
        if route.path != "/" && !is_auth {
            return Resolved::Denied {
                path: route.path.clone(),
            };
        }
        Resolved::Screen((route.factory)())
    }
}

/// The root page: a fresh check form in its initial state.
#[derive(Default)]
pub struct CheckScreen {
    form: CheckForm,
}

impl Screen for CheckScreen {
    fn render(&self, style: Style) -> String {
        render::report(self.form.state(), style)
    }
}

/// Stand-in for gated pages that have a route but no content of their
/// own yet.
pub struct PlaceholderScreen {
    pub name: String,
}

impl Screen for PlaceholderScreen {
    fn render(&self, _style: Style) -> String {
        format!("# {}\n(nothing to show here yet)", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Vec<Route> {
        vec![
            Route {
                name: "check".into(),
                path: "/".into(),
                factory: Box::new(|| Box::new(CheckScreen::default())),
                enabled: true,
            },
            Route {
                name: "history".into(),
                path: "/history".into(),
                factory: Box::new(|| {
                    Box::new(PlaceholderScreen {
                        name: "history".into(),
                    })
                }),
                enabled: true,
            },
            Route {
                name: "admin".into(),
                path: "/admin".into(),
                factory: Box::new(|| {
                    Box::new(PlaceholderScreen {
                        name: "admin".into(),
                    })
                }),
                enabled: false,
            },
        ]
    }

    #[test]
    fn root_is_public() {
        let router = Router::new(table());
        let Resolved::Screen(screen) = router.resolve("/", false) else {
            panic!("root must resolve without auth");
        };
        let out = screen.render(Style::Plain);
        assert!(out.starts_with("(00)"), "root renders the check form: {out}");
    }

    #[test]
    fn gated_route_requires_auth() {
        let router = Router::new(table());
        match router.resolve("/history", false) {
            Resolved::Denied { path } => assert_eq!(path, "/history"),
            _ => panic!("unauthenticated access must be denied"),
        }
        let Resolved::Screen(screen) = router.resolve("/history", true) else {
            panic!("authenticated access must resolve");
        };
        assert!(screen.render(Style::Plain).contains("history"));
    }

    #[test]
    fn disabled_route_is_invisible() {
        let router = Router::new(table());
        assert!(matches!(
            router.resolve("/admin", true),
            Resolved::NotFound
        ));
    }

    #[test]
    fn unknown_path_is_not_found() {
        let router = Router::new(table());
        assert!(matches!(
            router.resolve("/nope", true),
            Resolved::NotFound
        ));
    }

    #[test]
    fn empty_table_resolves_nothing() {
        let router = Router::new(Vec::new());
        assert!(matches!(router.resolve("/", true), Resolved::NotFound));
    }
}
