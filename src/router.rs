use tracing::info;

use crate::models::Route;

/// A request from the nav bar to show the page at `path`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkRequest {
    route: Route,
}

impl LinkRequest {
    pub fn new(route: Route) -> Self {
        Self { route }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn path(&self) -> &'static str {
        self.route.path()
    }
}

/// Page router behind the shell. `None` is the landing page.
#[derive(Debug, Default)]
pub struct PageRouter {
    current: Option<Route>,
    history: Vec<Route>,
}

impl PageRouter {
    pub fn new(start: Option<Route>) -> Self {
        Self {
            current: start,
            history: start.into_iter().collect(),
        }
    }

    pub fn current(&self) -> Option<Route> {
        self.current
    }

    pub fn history(&self) -> &[Route] {
        &self.history
    }

    pub fn follow(&mut self, request: LinkRequest) {
        let route = request.route();
        if self.current == Some(route) {
            return;
        }
        info!(path = request.path(), "navigating");
        self.current = Some(route);
        self.history.push(route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_landing_page_without_start_route() {
        let router = PageRouter::new(None);
        assert_eq!(router.current(), None);
        assert!(router.history().is_empty());
    }

    #[test]
    fn follow_records_history_and_skips_repeats() {
        let mut router = PageRouter::new(Some(Route::Overview));
        router.follow(LinkRequest::new(Route::Overview));
        router.follow(LinkRequest::new(Route::Refactor));
        router.follow(LinkRequest::new(Route::Refactor));
        router.follow(LinkRequest::new(Route::Overview));
        assert_eq!(router.current(), Some(Route::Overview));
        assert_eq!(router.history(), &[Route::Overview, Route::Refactor, Route::Overview]);
    }

    #[test]
    fn request_exposes_link_path() {
        let req = LinkRequest::new(Route::DependencyManagement);
        assert_eq!(req.path(), "/dependency_management");
    }
}
