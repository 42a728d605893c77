use serde::{Deserialize, Serialize};

use crate::{action::Action, node::Node};

/// Title bar shown above a screen, with an optional back button.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppBar {
    pub title: String,
    pub back: Option<Action>,
}

/// Everything a renderer needs to draw one screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub route: String,
    pub app_bar: Option<AppBar>,
    pub node: Node,
}

impl Document {
    /// Every action the user can trigger from this screen, app bar first.
    pub fn actions(&self) -> Vec<&Action> {
        let mut actions: Vec<&Action> = self
            .app_bar
            .iter()
            .filter_map(|bar| bar.back.as_ref())
            .collect();
        actions.extend(self.node.actions());
        actions
    }

    pub fn find_action(&self, name: &str) -> Option<&Action> {
        self.actions().into_iter().find(|action| action.name == name)
    }
}
