use serde::{Deserialize, Serialize};

use crate::action::Action;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Children stacked top to bottom.
pub struct ContainerProps {
    pub children: Vec<Node>,
    pub classes: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextProps {
    pub text: String,
    pub classes: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonProps {
    pub label: String,
    pub on_click: Action,
    pub classes: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputProps {
    pub id: String,
    pub label: String,
    pub password: bool,
    pub placeholder: Option<String>,
    pub classes: Vec<String>,
}

/// A choice from a closed list. An unset input means nothing is selected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectProps {
    pub id: String,
    pub label: String,
    pub options: Vec<String>,
    pub classes: Vec<String>,
}

/// A calendar date, delivered to the application as `YYYY-MM-DD`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateInputProps {
    pub id: String,
    pub label: String,
    pub classes: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    Empty,
    Container(ContainerProps),
    Text(TextProps),
    Divider,
    Button(ButtonProps),
    Input(InputProps),
    Select(SelectProps),
    DateInput(DateInputProps),
}

impl Node {
    pub fn column(children: Vec<Node>, classes: Vec<String>) -> Node {
        Node::Container(ContainerProps {
            children,
            classes,
        })
    }

    pub fn text(text: impl ToString) -> Node {
        Node::Text(TextProps {
            text: text.to_string(),
            classes: vec![],
        })
    }

    /// Depth-first walk over this node and every descendant.
    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a Node)) {
        visit(self);
        if let Node::Container(ContainerProps { children, .. }) = self {
            for child in children {
                child.walk(visit);
            }
        }
    }

    /// Every button action reachable from this node, in document order.
    pub fn actions(&self) -> Vec<&Action> {
        let mut actions = Vec::new();
        self.walk(&mut |node| {
            if let Node::Button(ButtonProps { on_click, .. }) = node {
                actions.push(on_click);
            }
        });
        actions
    }

    /// Text content reachable from this node, in document order.
    pub fn texts(&self) -> Vec<&str> {
        let mut texts = Vec::new();
        self.walk(&mut |node| {
            if let Node::Text(TextProps { text, .. }) = node {
                texts.push(text.as_str());
            }
        });
        texts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walk_visits_nested_nodes_in_order() {
        let node = Node::column(
            vec![
                Node::text("a"),
                Node::column(vec![Node::text("b"), Node::Divider], vec![]),
                Node::Button(ButtonProps {
                    label: "Go".to_string(),
                    on_click: Action::named("go", vec![]),
                    classes: vec![],
                }),
            ],
            vec![],
        );

        assert_eq!(node.texts(), vec!["a", "b"]);
        assert_eq!(node.actions().len(), 1);
        assert_eq!(node.actions()[0].name, "go");
    }
}
