use kv_log_macro as log;
use waypoint_protocol::Document;

use crate::{
    event::Event,
    form_state::{FormRecord, FormState},
    login::LoginError,
    route::Screen,
    transition::{transition, Effect},
    views,
};

/// Everything the screens are drawn from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppState {
    screen: Screen,
    form_state: FormState,
    login_error: Option<LoginError>,
}

impl AppState {
    pub fn new(form_state: FormState) -> AppState {
        AppState {
            form_state,
            ..AppState::default()
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn form(&self) -> &FormRecord {
        self.form_state.read()
    }

    pub fn login_error(&self) -> Option<LoginError> {
        self.login_error
    }

    /// The inline error under the sign-in form, empty when there is none.
    pub fn login_message(&self) -> String {
        self.login_error.map(|e| e.to_string()).unwrap_or_default()
    }

    /// Run one event through the transition table. Returns false when the
    /// event meant nothing on the current screen and was dropped.
    pub fn apply(&mut self, event: Event) -> bool {
        let Some(next) = transition(&self.screen, &event) else {
            log::warn!("Ignoring event", {
                screen: self.screen.path(),
                event: event.name()
            });
            return false;
        };

        match next.effect {
            Effect::None => {}
            Effect::SetLoginError(err) => {
                log::info!("Login rejected: {}", err);
                self.login_error = Some(err);
            }
            Effect::ClearLoginError => self.login_error = None,
            Effect::CommitForm => {
                if let Event::FormSubmitted(fields) = event {
                    self.form_state.commit(fields);
                    log::info!("Form committed");
                }
            }
        }

        if let Screen::NotFound(path) = &next.target {
            log::warn!("No route found", { path: path.as_str() });
        }

        if self.screen != next.target {
            log::info!("Navigated", {
                from: self.screen.path(),
                to: next.target.path()
            });
        }
        self.screen = next.target;

        true
    }
}

/// `(state, event) -> (state, document)`. Usable from any binding; the
/// document always reflects the state it is returned with.
pub fn reduce(mut state: AppState, event: Event) -> (AppState, Document) {
    state.apply(event);
    let document = views::render(&state);
    (state, document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        form_state::FormFields,
        route::{Route, Screen},
    };

    #[test]
    fn starts_on_login_with_no_error() {
        let state = AppState::new(FormState::new());
        assert_eq!(state.screen(), &Screen::View(Route::Login));
        assert_eq!(state.login_message(), "");
    }

    #[test]
    fn failed_then_successful_login_clears_error() {
        let state = AppState::default();
        let (state, _) = reduce(
            state,
            Event::LoginSubmitted {
                email: String::new(),
                password: "pw".to_string(),
            },
        );
        assert_eq!(state.login_error(), Some(LoginError::MissingCredentials));

        let (state, document) = reduce(
            state,
            Event::LoginSubmitted {
                email: "a@b.c".to_string(),
                password: "pw".to_string(),
            },
        );
        assert_eq!(state.login_error(), None);
        assert_eq!(document.route, "/home");
    }

    #[test]
    fn ignored_event_leaves_state_alone() {
        let mut state = AppState::default();
        let before = state.clone();
        assert!(!state.apply(Event::FormSubmitted(FormFields {
            name: "Mallory".to_string(),
            ..FormFields::default()
        })));
        assert_eq!(state, before);
    }

    #[test]
    fn document_matches_returned_state() {
        let (state, document) = reduce(AppState::default(), Event::NavigateHome);
        assert_eq!(document.route, state.screen().path());
        assert_eq!(document, views::render(&state));
    }
}
