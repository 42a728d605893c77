//! Screen routing and form state for a four-screen sign-in demo.
//!
//! Bindings feed button [`Action`]s (plus current input values) into a
//! [`Router`], which runs them through the transition table and hands the
//! resulting [`Document`] to a [`Renderer`].

mod config;
mod error;
mod event;
mod form_state;
mod login;
mod render;
mod route;
mod router;
mod script;
mod state;
mod transition;
mod views;

pub use config::Config;
pub use error::{Error, Result};
pub use event::{
    login_action, navigate_action, submit_form_action, Event, BACK_ACTION, HOME_ACTION,
    LOGIN_ACTION, NAVIGATE_ACTION, OPEN_FORM_ACTION, SUBMIT_FORM_ACTION,
};
pub use form_state::{
    Country, FormFields, FormRecord, FormState, Gender, ADDRESS_INPUT, COUNTRY_INPUT,
    DATE_OF_BIRTH_INPUT, FORM_INPUTS, GENDER_INPUT, NAME_INPUT,
};
pub use login::{check_credentials, LoginError, EMAIL_INPUT, PASSWORD_INPUT};
pub use render::{render_lines, Renderer, TextRenderer};
pub use route::{Route, Screen};
pub use router::Router;
pub use script::{run_script, run_step, Step};
pub use state::{reduce, AppState};
pub use transition::{transition, Effect, Transition};
pub use waypoint_protocol::{
    action::Action,
    document::{AppBar, Document},
    node::{
        ButtonProps, ContainerProps, DateInputProps, InputProps, Node, SelectProps,
        TextProps,
    },
    state::{StateMap, StateValue},
};

/// Structured logging for headless bindings and tools.
pub fn init_logging() {
    femme::start();
}
