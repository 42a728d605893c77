//! Form Flow Tests
//!
//! Submitting the form commits the form state and shows it on the details
//! screen exactly as entered.

#[cfg(test)]
mod common;

use common::{assert_on, current, inputs, press, signed_in_router};
use waypoint::{
    Country, Gender, Node, Route, StateMap, BACK_ACTION, OPEN_FORM_ACTION, SUBMIT_FORM_ACTION,
};

const DETAIL_LINES: [&str; 5] = [
    "Name: ",
    "Date of Birth: ",
    "Gender: ",
    "Address: ",
    "Country: ",
];

fn detail_texts(router: &waypoint::Router<waypoint::TextRenderer>) -> Vec<String> {
    current(router)
        .node
        .texts()
        .into_iter()
        .filter(|t| DETAIL_LINES.iter().any(|prefix| t.starts_with(prefix)))
        .map(str::to_string)
        .collect()
}

fn alice() -> StateMap {
    inputs(&[
        ("name", "Alice"),
        ("date_of_birth", "1990-05-01"),
        ("gender", "Female"),
        ("address", "1 Main St"),
        ("country", "Finland"),
    ])
}

#[test]
fn test_submit_shows_values_verbatim() {
    let mut router = signed_in_router();
    press(&mut router, OPEN_FORM_ACTION, &StateMap::new());
    press(&mut router, SUBMIT_FORM_ACTION, &alice());

    assert_on(&router, Route::Details);
    assert_eq!(
        detail_texts(&router),
        vec![
            "Name: Alice",
            "Date of Birth: 1990-05-01",
            "Gender: Female",
            "Address: 1 Main St",
            "Country: Finland",
        ]
    );

    router.navigate("/details");
    assert_eq!(detail_texts(&router)[0], "Name: Alice");
}

#[test]
fn test_no_date_gives_empty_date() {
    let mut router = signed_in_router();
    press(&mut router, OPEN_FORM_ACTION, &StateMap::new());
    press(&mut router, SUBMIT_FORM_ACTION, &inputs(&[("name", "Bob")]));

    assert_on(&router, Route::Details);
    assert_eq!(router.form().date_of_birth, "");
    assert!(detail_texts(&router).contains(&"Date of Birth: ".to_string()));
}

#[test]
fn test_resubmission_overwrites() {
    let mut router = signed_in_router();
    press(&mut router, OPEN_FORM_ACTION, &StateMap::new());
    press(&mut router, SUBMIT_FORM_ACTION, &alice());
    press(&mut router, BACK_ACTION, &StateMap::new());
    assert_on(&router, Route::Form);

    press(
        &mut router,
        SUBMIT_FORM_ACTION,
        &inputs(&[("address", "2 Side St"), ("country", "USA")]),
    );

    let record = router.form();
    assert_eq!(record.name, "");
    assert_eq!(record.date_of_birth, "");
    assert_eq!(record.gender, None);
    assert_eq!(record.address, "2 Side St");
    assert_eq!(record.country, Some(Country::Usa));
}

#[test]
fn test_back_from_details_keeps_commit() {
    let mut router = signed_in_router();
    press(&mut router, OPEN_FORM_ACTION, &StateMap::new());
    press(&mut router, SUBMIT_FORM_ACTION, &alice());
    press(&mut router, BACK_ACTION, &StateMap::new());
    press(&mut router, BACK_ACTION, &StateMap::new());

    assert_on(&router, Route::Home);
    assert_eq!(router.form().gender, Some(Gender::Female));
}

#[test]
fn test_form_offers_closed_choices() {
    let mut router = signed_in_router();
    press(&mut router, OPEN_FORM_ACTION, &StateMap::new());

    let mut selects = Vec::new();
    current(&router).node.walk(&mut |node| {
        if let Node::Select(props) = node {
            selects.push((props.id.clone(), props.options.clone()));
        }
    });

    assert_eq!(
        selects,
        vec![
            ("gender".to_string(), vec!["Male", "Female", "Other"]
                .into_iter()
                .map(String::from)
                .collect::<Vec<_>>()),
            ("country".to_string(), vec!["Finland", "Hungary", "Germany", "USA"]
                .into_iter()
                .map(String::from)
                .collect::<Vec<_>>()),
        ]
    );

    let submit = current(&router).find_action(SUBMIT_FORM_ACTION).unwrap();
    for id in waypoint::FORM_INPUTS {
        assert!(submit.captures(id));
    }
}
