use maplit::hashmap;
use waypoint_protocol::{state::string_value, Action, StateMap};

use crate::{
    form_state::{FormFields, FORM_INPUTS},
    login::{EMAIL_INPUT, PASSWORD_INPUT},
    Error, Result,
};

pub const LOGIN_ACTION: &str = "login";
pub const OPEN_FORM_ACTION: &str = "open_form";
pub const SUBMIT_FORM_ACTION: &str = "submit_form";
pub const BACK_ACTION: &str = "back";
pub const HOME_ACTION: &str = "home";
pub const NAVIGATE_ACTION: &str = "navigate";

const PATH_ARG: &str = "path";

/// Everything that can move the application from one screen to another.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Go straight to a path, whatever is on screen.
    Navigate(String),
    LoginSubmitted { email: String, password: String },
    NavigateHome,
    OpenForm,
    FormSubmitted(FormFields),
    /// Follow the current screen's fixed back edge.
    NavigateBack,
}

impl Event {
    /// Decode a button action together with the input values it captured.
    pub fn from_action(action: &Action, inputs: &StateMap) -> Result<Event> {
        let event = match action.name.as_str() {
            LOGIN_ACTION => Event::LoginSubmitted {
                email: string_value(inputs, EMAIL_INPUT).to_string(),
                password: string_value(inputs, PASSWORD_INPUT).to_string(),
            },
            OPEN_FORM_ACTION => Event::OpenForm,
            SUBMIT_FORM_ACTION => Event::FormSubmitted(FormFields::from_inputs(inputs)),
            BACK_ACTION => Event::NavigateBack,
            HOME_ACTION => Event::NavigateHome,
            NAVIGATE_ACTION => {
                let path = action.arg(PATH_ARG).ok_or_else(|| Error::MissingArgument {
                    action: action.name.clone(),
                    key: PATH_ARG.to_string(),
                })?;
                Event::Navigate(path.to_string())
            }
            other => return Err(Error::UnknownAction(other.to_string())),
        };

        Ok(event)
    }

    /// Short name for log lines. Never includes field values.
    pub fn name(&self) -> &'static str {
        match self {
            Event::Navigate(_) => NAVIGATE_ACTION,
            Event::LoginSubmitted { .. } => LOGIN_ACTION,
            Event::NavigateHome => HOME_ACTION,
            Event::OpenForm => OPEN_FORM_ACTION,
            Event::FormSubmitted(_) => SUBMIT_FORM_ACTION,
            Event::NavigateBack => BACK_ACTION,
        }
    }
}

pub fn login_action() -> Action {
    Action::named(
        LOGIN_ACTION,
        vec![EMAIL_INPUT.to_string(), PASSWORD_INPUT.to_string()],
    )
}

pub fn submit_form_action() -> Action {
    Action::named(
        SUBMIT_FORM_ACTION,
        FORM_INPUTS.iter().map(|id| id.to_string()).collect(),
    )
}

pub fn navigate_action(path: impl ToString) -> Action {
    Action::new(
        NAVIGATE_ACTION,
        hashmap! { PATH_ARG.to_string() => path.to_string() },
        vec![],
    )
}
