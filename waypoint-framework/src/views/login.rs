use waypoint_protocol::{Document, InputProps, Node};

use super::{card, primary_button, styled_text};
use crate::{
    event::login_action,
    login::{EMAIL_INPUT, PASSWORD_INPUT},
    route::Route,
};

pub fn view(error: &str) -> Document {
    Document {
        route: Route::Login.path().to_string(),
        app_bar: None,
        node: card(vec![
            styled_text("Login", "title"),
            styled_text("Please sign in to continue", "subtitle"),
            Node::Input(InputProps {
                id: EMAIL_INPUT.to_string(),
                label: "Email".to_string(),
                password: false,
                placeholder: None,
                classes: vec!["input".to_string()],
            }),
            Node::Input(InputProps {
                id: PASSWORD_INPUT.to_string(),
                label: "Password".to_string(),
                password: true,
                placeholder: None,
                classes: vec!["input".to_string()],
            }),
            styled_text(error, "error"),
            primary_button("Login", login_action()),
        ]),
    }
}
