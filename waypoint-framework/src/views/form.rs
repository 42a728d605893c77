use strum::VariantNames;
use waypoint_protocol::{DateInputProps, Document, InputProps, Node, SelectProps};

use super::{app_bar, card, primary_button, styled_text};
use crate::{
    event::submit_form_action,
    form_state::{
        Country, Gender, ADDRESS_INPUT, COUNTRY_INPUT, DATE_OF_BIRTH_INPUT, GENDER_INPUT,
        NAME_INPUT,
    },
    route::Route,
};

pub fn view() -> Document {
    Document {
        route: Route::Form.path().to_string(),
        app_bar: Some(app_bar(Route::Form)),
        node: card(vec![
            styled_text("Fill in your details", "title"),
            text_input(NAME_INPUT, "Full Name"),
            Node::DateInput(DateInputProps {
                id: DATE_OF_BIRTH_INPUT.to_string(),
                label: "Select Date of Birth".to_string(),
                classes: vec![],
            }),
            select(GENDER_INPUT, "Gender", Gender::VARIANTS),
            text_input(ADDRESS_INPUT, "Address"),
            select(COUNTRY_INPUT, "Country", Country::VARIANTS),
            primary_button("Submit", submit_form_action()),
        ]),
    }
}

fn text_input(id: &str, label: &str) -> Node {
    Node::Input(InputProps {
        id: id.to_string(),
        label: label.to_string(),
        password: false,
        placeholder: None,
        classes: vec!["input".to_string()],
    })
}

fn select(id: &str, label: &str, options: &[&str]) -> Node {
    Node::Select(SelectProps {
        id: id.to_string(),
        label: label.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        classes: vec!["input".to_string()],
    })
}
