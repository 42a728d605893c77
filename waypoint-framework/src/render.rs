use waypoint_protocol::{
    ButtonProps, ContainerProps, DateInputProps, Document, InputProps, Node, SelectProps,
    StateMap, StateValue, TextProps,
};

/// Whatever puts a document on screen. Each call replaces the previous
/// content entirely.
pub trait Renderer {
    fn render(&mut self, document: &Document);
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render(&mut self, document: &Document) {
        (**self).render(document)
    }
}

/// Headless renderer that keeps the latest document as plain text lines.
#[derive(Debug, Default)]
pub struct TextRenderer {
    inputs: StateMap,
    lines: Vec<String>,
    document: Option<Document>,
    renders: usize,
}

impl TextRenderer {
    pub fn new() -> TextRenderer {
        TextRenderer::default()
    }

    /// Show these input values in fields on the next render.
    pub fn with_inputs(inputs: StateMap) -> TextRenderer {
        TextRenderer {
            inputs,
            ..TextRenderer::default()
        }
    }

    pub fn inputs(&self) -> &StateMap {
        &self.inputs
    }

    /// Type into a field. The current screen is redrawn so the value shows.
    pub fn set_input(&mut self, id: impl ToString, value: impl Into<StateValue>) {
        self.inputs.insert(id.to_string(), value.into());
        if let Some(document) = &self.document {
            self.lines = render_lines(document, &self.inputs);
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    pub fn renders(&self) -> usize {
        self.renders
    }
}

impl Renderer for TextRenderer {
    fn render(&mut self, document: &Document) {
        self.lines = render_lines(document, &self.inputs);
        self.document = Some(document.clone());
        self.renders += 1;
    }
}

pub fn render_lines(document: &Document, inputs: &StateMap) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(bar) = &document.app_bar {
        let back = if bar.back.is_some() { "< " } else { "" };
        lines.push(format!("{}[{}]", back, bar.title));
    }
    node_lines(&document.node, inputs, 0, &mut lines);
    lines
}

fn node_lines(node: &Node, inputs: &StateMap, depth: usize, lines: &mut Vec<String>) {
    let indent = "  ".repeat(depth);
    let value = |id: &str| waypoint_protocol::state::string_value(inputs, id).to_string();

    match node {
        Node::Empty => {}
        Node::Container(ContainerProps { children, .. }) => {
            for child in children {
                node_lines(child, inputs, depth + 1, lines);
            }
        }
        Node::Text(TextProps { text, .. }) => {
            if !text.is_empty() {
                lines.push(format!("{}{}", indent, text));
            }
        }
        Node::Divider => lines.push(format!("{}----", indent)),
        Node::Button(ButtonProps { label, .. }) => lines.push(format!("{}({})", indent, label)),
        Node::Input(InputProps {
            id,
            label,
            password,
            ..
        }) => {
            let shown = if *password {
                "*".repeat(value(id.as_str()).chars().count())
            } else {
                value(id.as_str())
            };
            lines.push(format!("{}{}: [{}]", indent, label, shown));
        }
        Node::Select(SelectProps {
            id, label, options, ..
        }) => lines.push(format!(
            "{}{}: <{}> of {}",
            indent,
            label,
            value(id.as_str()),
            options.join("|")
        )),
        Node::DateInput(DateInputProps { id, label, .. }) => {
            lines.push(format!("{}{}: [{}]", indent, label, value(id.as_str())))
        }
    }
}
