use waypoint_protocol::{Action, Document};

use super::{card, primary_button, styled_text};
use crate::event::HOME_ACTION;

pub fn view(path: &str) -> Document {
    Document {
        route: path.to_string(),
        app_bar: None,
        node: card(vec![
            styled_text("Page not found", "title"),
            styled_text(format!("Nothing lives at '{}'", path), "subtitle"),
            primary_button("Go to Home", Action::named(HOME_ACTION, vec![])),
        ]),
    }
}
