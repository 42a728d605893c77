//! Common test utilities shared across integration tests

use waypoint::{
    Action, Document, FormState, Route, Router, Screen, StateMap, StateValue, TextRenderer,
};

pub fn new_router() -> Router<TextRenderer> {
    Router::new(FormState::new(), TextRenderer::new())
}

/// Build an input map the way a binding would after the user typed.
#[allow(dead_code)]
pub fn inputs(pairs: &[(&str, &str)]) -> StateMap {
    pairs
        .iter()
        .map(|(id, value)| (id.to_string(), StateValue::from(*value)))
        .collect()
}

/// The document currently on screen.
pub fn current(router: &Router<TextRenderer>) -> &Document {
    router
        .renderer()
        .document()
        .expect("router renders on construction")
}

/// Press the button named `name` on the current screen, failing the test if
/// the screen has no such button.
#[allow(dead_code)]
pub fn press(router: &mut Router<TextRenderer>, name: &str, state: &StateMap) {
    let action: Action = current(router)
        .find_action(name)
        .unwrap_or_else(|| panic!("no '{}' action on {}", name, router.screen().path()))
        .clone();
    router.perform(&action, state).unwrap();
}

pub fn assert_on(router: &Router<TextRenderer>, route: Route) {
    assert_eq!(router.screen(), &Screen::View(route));
    assert_eq!(current(router).route, route.path());
}

/// Sign in with throwaway credentials, ending on the home screen.
#[allow(dead_code)]
pub fn signed_in_router() -> Router<TextRenderer> {
    let mut router = new_router();
    press(
        &mut router,
        waypoint::LOGIN_ACTION,
        &inputs(&[("email", "a@b.c"), ("password", "pw")]),
    );
    assert_on(&router, Route::Home);
    router
}
