use waypoint_protocol::{Document, Node};

use super::{app_bar, card, styled_text};
use crate::{form_state::FormRecord, route::Route};

pub fn view(record: &FormRecord) -> Document {
    Document {
        route: Route::Details.path().to_string(),
        app_bar: Some(app_bar(Route::Details)),
        node: card(vec![
            styled_text("User Details", "title"),
            Node::Divider,
            styled_text(format!("Name: {}", record.name), "detail"),
            styled_text(format!("Date of Birth: {}", record.date_of_birth), "detail"),
            styled_text(format!("Gender: {}", record.gender_label()), "detail"),
            styled_text(format!("Address: {}", record.address), "detail"),
            styled_text(format!("Country: {}", record.country_label()), "detail"),
        ]),
    }
}
