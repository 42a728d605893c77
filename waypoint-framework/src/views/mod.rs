//! Builders turning application state into renderer-agnostic documents.

mod details;
mod form;
mod home;
mod login;
mod not_found;

use waypoint_protocol::{Action, AppBar, ButtonProps, Document, Node, TextProps};

use crate::{
    event::BACK_ACTION,
    route::{Route, Screen},
    state::AppState,
};

/// Build the single document for whichever screen is active.
pub fn render(state: &AppState) -> Document {
    match state.screen() {
        Screen::View(Route::Login) => login::view(&state.login_message()),
        Screen::View(Route::Home) => home::view(),
        Screen::View(Route::Form) => form::view(),
        Screen::View(Route::Details) => details::view(state.form()),
        Screen::NotFound(path) => not_found::view(path),
    }
}

fn app_bar(route: Route) -> AppBar {
    AppBar {
        title: route.title().to_string(),
        back: route
            .back()
            .map(|_| Action::named(BACK_ACTION, vec![])),
    }
}

fn styled_text(text: impl ToString, class: &str) -> Node {
    Node::Text(TextProps {
        text: text.to_string(),
        classes: vec![class.to_string()],
    })
}

fn primary_button(label: &str, on_click: Action) -> Node {
    Node::Button(ButtonProps {
        label: label.to_string(),
        on_click,
        classes: vec!["primary-action".to_string()],
    })
}

fn card(children: Vec<Node>) -> Node {
    Node::column(children, vec!["card".to_string()])
}
