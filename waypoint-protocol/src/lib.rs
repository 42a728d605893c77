pub mod action;
pub mod document;
pub mod node;
pub mod state;

// Re-export commonly used types
pub use action::Action;
pub use document::{AppBar, Document};
pub use node::{
    ButtonProps, ContainerProps, DateInputProps, InputProps, Node, SelectProps,
    TextProps,
};
pub use state::{StateMap, StateValue};
