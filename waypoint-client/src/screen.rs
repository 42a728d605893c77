use waypoint::{AppBar, Document, Node, Renderer};

/// What the window is currently showing. Replaced wholesale on every render.
pub struct Screen {
    pub app_bar: Option<AppBar>,
    pub node: Node,
}

impl Default for Screen {
    fn default() -> Self {
        Screen {
            app_bar: None,
            node: Node::text("Loading..."),
        }
    }
}

impl Renderer for Screen {
    fn render(&mut self, document: &Document) {
        self.app_bar = document.app_bar.clone();
        self.node = document.node.clone();
    }
}
