//! Application routes.
//!
//! Lobby pages are served by the game server, so `/lobby/...` is reached by
//! a full page navigation and never appears here.

use yew_router::prelude::*;

/// Application routes.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    /// Entry page: name, create or join.
    #[at("/")]
    Home,
    /// 404 Not Found.
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn test_only_entry_and_not_found_routes() {
        let mut routes = Route::routes();
        routes.sort_unstable();
        assert_eq!(routes, vec!["/", "/404"]);
    }
}
