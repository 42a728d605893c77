use iced::{
    widget::{horizontal_rule, Button, Column, PickList, Row, Space, Text, TextInput},
    Alignment, Element, Length,
};

use crate::WaypointMessage;
use waypoint::{
    AppBar, ButtonProps, ContainerProps, DateInputProps, InputProps, Node, SelectProps,
    StateMap, StateValue, TextProps,
};

const ERROR_COLOUR: [f32; 3] = [0.9, 0.1, 0.1];
const PRIMARY_COLOUR: [f32; 3] = [0.12, 0.45, 0.9];

pub fn view_app_bar(app_bar: &AppBar) -> Element<'_, WaypointMessage> {
    let mut row = Row::new().spacing(10).padding(10).align_y(Alignment::Center);

    if let Some(back) = &app_bar.back {
        row = row.push(
            Button::new(Text::new("←")).on_press(WaypointMessage::PerformAction(back.clone())),
        );
    }

    row.push(Text::new(app_bar.title.clone()).size(20)).into()
}

pub fn view_node<'a>(node: &'a Node, state_map: &'a StateMap) -> Element<'a, WaypointMessage> {
    match node {
        Node::Empty => Space::new(Length::Fill, Length::Fill).into(),

        Node::Container(ContainerProps { children, .. }) => {
            let elements = children.iter().map(|child| view_node(child, state_map));

            Column::with_children(elements)
                .spacing(12)
                .padding(30)
                .align_x(Alignment::Center)
                .into()
        }

        Node::Text(TextProps { text, classes }) => {
            let mut widget = Text::new(text.clone());
            for class in classes {
                widget = match class.as_str() {
                    "title" => widget.size(30).color(PRIMARY_COLOUR),
                    "subtitle" => widget.size(16),
                    "detail" => widget.size(18),
                    "error" => widget.color(ERROR_COLOUR),
                    _ => widget,
                };
            }
            widget.into()
        }

        Node::Divider => horizontal_rule(1).into(),

        Node::Button(ButtonProps {
            label, on_click, ..
        }) => Button::new(Text::new(label.clone()))
            .on_press(WaypointMessage::PerformAction(on_click.clone()))
            .padding(10)
            .into(),

        Node::Input(InputProps {
            id,
            label,
            password,
            placeholder,
            ..
        }) => {
            let value = state_map.get(id).map(StateValue::string).unwrap_or("");
            let placeholder = placeholder.clone().unwrap_or_else(|| label.clone());
            let id = id.clone();

            let input = TextInput::new(&placeholder, value)
                .on_input(move |new_value| WaypointMessage::FormValueChanged {
                    id: id.clone(),
                    value: StateValue::from(new_value),
                })
                .secure(*password)
                .padding(8)
                .width(Length::Fixed(320.0));

            labelled(label, input.into())
        }

        Node::Select(SelectProps {
            id, label, options, ..
        }) => {
            let selected = state_map
                .get(id)
                .map(StateValue::string)
                .filter(|value| !value.is_empty())
                .map(str::to_string);
            let id = id.clone();

            let pick_list = PickList::new(options.clone(), selected, move |choice: String| {
                WaypointMessage::FormValueChanged {
                    id: id.clone(),
                    value: StateValue::from(choice),
                }
            })
            .placeholder(label.clone())
            .width(Length::Fixed(320.0));

            labelled(label, pick_list.into())
        }

        Node::DateInput(DateInputProps { id, label, .. }) => {
            let value = state_map.get(id).map(StateValue::string).unwrap_or("");
            let id = id.clone();

            let input = TextInput::new("YYYY-MM-DD", value)
                .on_input(move |new_value| WaypointMessage::FormValueChanged {
                    id: id.clone(),
                    value: StateValue::from(new_value),
                })
                .padding(8)
                .width(Length::Fixed(320.0));

            labelled(label, input.into())
        }
    }
}

fn labelled<'a>(
    label: &'a str,
    widget: Element<'a, WaypointMessage>,
) -> Element<'a, WaypointMessage> {
    Column::new()
        .spacing(4)
        .push(Text::new(label))
        .push(widget)
        .into()
}
