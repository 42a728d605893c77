use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The current value of a single input widget. A cleared field is
/// [`StateValue::Empty`] rather than an empty string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StateValue {
    Empty,
    String(String),
}

impl StateValue {
    pub fn string(&self) -> &str {
        match self {
            StateValue::String(s) => s,
            _ => "",
        }
    }
}

impl From<&str> for StateValue {
    fn from(value: &str) -> Self {
        StateValue::from(value.to_string())
    }
}

impl From<String> for StateValue {
    fn from(value: String) -> Self {
        if value.is_empty() {
            StateValue::Empty
        } else {
            StateValue::String(value)
        }
    }
}

/// Input values keyed by input id, owned by whichever binding draws the widgets.
pub type StateMap = HashMap<String, StateValue>;

/// Reads a string input, treating a missing or cleared entry as empty.
pub fn string_value<'a>(state: &'a StateMap, id: &str) -> &'a str {
    state.get(id).map(StateValue::string).unwrap_or("")
}
