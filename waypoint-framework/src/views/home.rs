use waypoint_protocol::{Action, Document};

use super::{app_bar, card, primary_button, styled_text};
use crate::{event::OPEN_FORM_ACTION, route::Route};

pub fn view() -> Document {
    Document {
        route: Route::Home.path().to_string(),
        app_bar: Some(app_bar(Route::Home)),
        node: card(vec![
            styled_text("Welcome!", "title"),
            styled_text("Navigate to the form page below.", "subtitle"),
            primary_button("Go to Form", Action::named(OPEN_FORM_ACTION, vec![])),
        ]),
    }
}
