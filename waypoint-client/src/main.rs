mod screen;
mod ui_node;

use kv_log_macro as log;

use iced::{
    widget::{column, text, Column, Container},
    Alignment, Length, Size, Task,
};

use screen::Screen;
use waypoint::{Action, Config, FormState, Router, StateMap, StateValue};

#[derive(Debug, Clone)]
pub enum WaypointMessage {
    PerformAction(Action),
    FormValueChanged { id: String, value: StateValue },
}

struct Waypoint {
    title: String,
    router: Router<Screen>,
    state_map: StateMap,
    error_message: Option<String>,
}

impl Waypoint {
    fn new(config: Config) -> (Self, Task<WaypointMessage>) {
        let router = Router::from_config(&config, FormState::new(), Screen::default());

        (
            Waypoint {
                title: config.title,
                router,
                state_map: StateMap::new(),
                error_message: None,
            },
            Task::none(),
        )
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn update(&mut self, message: WaypointMessage) -> Task<WaypointMessage> {
        match message {
            WaypointMessage::PerformAction(action) => {
                match self.router.perform(&action, &self.state_map) {
                    Ok(()) => self.error_message = None,
                    Err(e) => self.error_message = Some(e.to_string()),
                }
            }
            WaypointMessage::FormValueChanged { id, value } => {
                log::debug!("Form value changed", { id: id.as_str() });

                // Inputs outlive navigation so fields show what was last typed.
                self.state_map.insert(id, value);
            }
        }

        Task::none()
    }

    fn view(&self) -> iced::Element<'_, WaypointMessage> {
        let screen = self.router.renderer();
        let body = ui_node::view_node(&screen.node, &self.state_map);

        let mut page = Column::new();
        if let Some(app_bar) = &screen.app_bar {
            page = page.push(ui_node::view_app_bar(app_bar));
        }

        let content = Container::new(body)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Alignment::Center)
            .align_y(Alignment::Center);

        let page = match &self.error_message {
            Some(error) => page.push(column![
                text(error).size(16).color([1.0, 0.0, 0.0]),
                content
            ]),
            None => page.push(content),
        };

        page.into()
    }
}

fn load_config() -> Config {
    match std::env::args().nth(1) {
        Some(path) => Config::load(&path).unwrap_or_else(|e| {
            log::error!("Falling back to default config: {}", e);
            Config::default()
        }),
        None => Config::default(),
    }
}

fn main() -> iced::Result {
    env_logger::init();

    let config = load_config();
    let window_size = Size::new(config.window_width, config.window_height);

    iced::application(Waypoint::title, Waypoint::update, Waypoint::view)
        .window_size(window_size)
        .run_with(move || Waypoint::new(config))
}
