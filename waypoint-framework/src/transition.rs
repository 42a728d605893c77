//! The navigation state machine, kept free of rendering and side effects so
//! the whole table can be checked on its own.

use crate::{
    event::Event,
    login::{check_credentials, LoginError},
    route::{Route, Screen},
};

/// Side effect to run when a transition fires.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    SetLoginError(LoginError),
    ClearLoginError,
    /// Overwrite the form state with the fields carried by the event.
    CommitForm,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub target: Screen,
    pub effect: Effect,
}

impl Transition {
    fn to(target: impl Into<Screen>) -> Transition {
        Transition {
            target: target.into(),
            effect: Effect::None,
        }
    }

    fn with(self, effect: Effect) -> Transition {
        Transition { effect, ..self }
    }
}

/// Look up the edge for `event` on `screen`. `None` means the event has no
/// meaning there and should be ignored.
pub fn transition(screen: &Screen, event: &Event) -> Option<Transition> {
    match (screen, event) {
        (_, Event::Navigate(path)) => Some(Transition::to(Screen::resolve(path))),
        (_, Event::NavigateHome) => Some(Transition::to(Route::Home)),

        (Screen::View(Route::Login), Event::LoginSubmitted { email, password }) => {
            Some(match check_credentials(email, password) {
                Ok(()) => Transition::to(Route::Home).with(Effect::ClearLoginError),
                Err(err) => Transition::to(Route::Login).with(Effect::SetLoginError(err)),
            })
        }

        (Screen::View(Route::Home), Event::OpenForm) => Some(Transition::to(Route::Form)),

        (Screen::View(Route::Form), Event::FormSubmitted(_)) => {
            Some(Transition::to(Route::Details).with(Effect::CommitForm))
        }

        (Screen::View(route), Event::NavigateBack) => route.back().map(Transition::to),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form_state::FormFields;

    fn login(email: &str, password: &str) -> Event {
        Event::LoginSubmitted {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    fn target(screen: Route, event: &Event) -> Option<Screen> {
        transition(&Screen::View(screen), event).map(|t| t.target)
    }

    #[test]
    fn login_gate() {
        assert_eq!(
            transition(&Route::Login.into(), &login("a@b.c", "pw")),
            Some(Transition::to(Route::Home).with(Effect::ClearLoginError))
        );
        assert_eq!(
            transition(&Route::Login.into(), &login("a@b.c", "")),
            Some(
                Transition::to(Route::Login)
                    .with(Effect::SetLoginError(LoginError::MissingCredentials))
            )
        );
    }

    #[test]
    fn table_edges() {
        assert_eq!(target(Route::Home, &Event::OpenForm), Some(Route::Form.into()));
        assert_eq!(target(Route::Form, &Event::NavigateBack), Some(Route::Home.into()));
        assert_eq!(target(Route::Details, &Event::NavigateBack), Some(Route::Form.into()));
        assert_eq!(
            transition(&Route::Form.into(), &Event::FormSubmitted(FormFields::default())),
            Some(Transition::to(Route::Details).with(Effect::CommitForm))
        );
    }

    #[test]
    fn events_out_of_place_are_ignored() {
        assert_eq!(target(Route::Login, &Event::OpenForm), None);
        assert_eq!(target(Route::Login, &Event::NavigateBack), None);
        assert_eq!(target(Route::Home, &Event::NavigateBack), None);
        assert_eq!(target(Route::Home, &login("a", "b")), None);
        assert_eq!(
            target(Route::Details, &Event::FormSubmitted(FormFields::default())),
            None
        );
        assert_eq!(
            transition(&Screen::NotFound("/x".to_string()), &Event::NavigateBack),
            None
        );
    }

    #[test]
    fn navigation_works_from_anywhere() {
        let not_found = Screen::NotFound("/x".to_string());
        assert_eq!(
            transition(&not_found, &Event::NavigateHome).map(|t| t.target),
            Some(Route::Home.into())
        );
        for route in Route::ALL {
            assert_eq!(
                target(route, &Event::Navigate("/details".to_string())),
                Some(Route::Details.into())
            );
            assert_eq!(
                target(route, &Event::Navigate("/nope".to_string())),
                Some(Screen::NotFound("/nope".to_string()))
            );
        }
    }
}
