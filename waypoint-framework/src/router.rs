use kv_log_macro as log;
use waypoint_protocol::{Action, StateMap};

use crate::{
    event::Event,
    config::Config,
    form_state::{FormRecord, FormState},
    route::Route,
    render::Renderer,
    route::Screen,
    state::{reduce, AppState},
    Result,
};

/// Owns the application state and keeps the renderer showing exactly one
/// screen: the one the latest event led to.
pub struct Router<R: Renderer> {
    state: AppState,
    renderer: R,
}

impl<R: Renderer> Router<R> {
    /// Start on the login screen and draw it straight away.
    pub fn new(form_state: FormState, renderer: R) -> Router<R> {
        let state = AppState::new(form_state);
        let mut router = Router { state, renderer };
        let document = crate::views::render(&router.state);
        router.renderer.render(&document);
        router
    }

    /// Start where `config` says. The login screen is always drawn first, so
    /// a non-login start costs one extra render.
    pub fn from_config(config: &Config, form_state: FormState, renderer: R) -> Router<R> {
        let mut router = Router::new(form_state, renderer);
        if Route::from_path(&config.initial_route) != Some(Route::Login) {
            log::info!("Starting away from login", { route: config.initial_route.as_str() });
            router.navigate(&config.initial_route);
        }
        router
    }

    /// Show the screen for `path`. Unknown paths show the not-found screen.
    pub fn navigate(&mut self, path: &str) {
        self.dispatch(Event::Navigate(path.to_string()));
    }

    pub fn dispatch(&mut self, event: Event) {
        log::debug!("Dispatching event", { event: event.name() });

        let state = std::mem::take(&mut self.state);
        let (state, document) = reduce(state, event);
        self.state = state;
        self.renderer.render(&document);
    }

    /// Handle a button press. An action no screen knows about is reported
    /// and leaves everything as it was.
    pub fn perform(&mut self, action: &Action, inputs: &StateMap) -> Result<()> {
        log::info!("Received action", { action: action });

        match Event::from_action(action, inputs) {
            Ok(event) => {
                self.dispatch(event);
                Ok(())
            }
            Err(err) => {
                log::error!("Dropping action: {}", err);
                Err(err)
            }
        }
    }

    pub fn screen(&self) -> &Screen {
        self.state.screen()
    }

    pub fn form(&self) -> &FormRecord {
        self.state.form()
    }

    pub fn login_message(&self) -> String {
        self.state.login_message()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}
