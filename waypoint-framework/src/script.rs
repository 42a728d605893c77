//! Line-oriented driver for headless sessions.
//!
//! ```text
//! # comments and blank lines are skipped
//! set email a@b.c
//! set password hunter2
//! press login
//! go /form
//! ```

use crate::{render::TextRenderer, router::Router, Error, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    Go(String),
    /// Type `value` into the input `id`. A missing value clears the field.
    Set { id: String, value: String },
    Press(String),
}

impl Step {
    /// Parse one script line; `None` for blank lines and comments.
    pub fn parse(line_number: usize, line: &str) -> Result<Option<Step>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();
        let missing = |what: &str| Error::Script {
            line: line_number,
            message: format!("'{}' needs {}", command, what),
        };

        let step = match command {
            "go" if rest.is_empty() => return Err(missing("a path")),
            "go" => Step::Go(rest.to_string()),
            "press" if rest.is_empty() => return Err(missing("an action name")),
            "press" => Step::Press(rest.to_string()),
            "set" => {
                let (id, value) = rest.split_once(' ').unwrap_or((rest, ""));
                if id.is_empty() {
                    return Err(missing("an input id"));
                }
                Step::Set {
                    id: id.to_string(),
                    value: value.trim().to_string(),
                }
            }
            other => {
                return Err(Error::Script {
                    line: line_number,
                    message: format!("unknown command '{}'", other),
                })
            }
        };

        Ok(Some(step))
    }
}

pub fn run_step(router: &mut Router<TextRenderer>, step: Step) -> Result<()> {
    match step {
        Step::Go(path) => router.navigate(&path),
        Step::Set { id, value } => router.renderer_mut().set_input(id, value),
        Step::Press(name) => {
            let action = router
                .renderer()
                .document()
                .and_then(|document| document.find_action(&name))
                .cloned()
                .ok_or_else(|| Error::NoSuchButton {
                    action: name.clone(),
                    route: router.screen().path().to_string(),
                })?;
            let inputs = router.renderer().inputs().clone();
            router.perform(&action, &inputs)?;
        }
    }

    Ok(())
}

/// Run every step in order, stopping at the first failure.
pub fn run_script(router: &mut Router<TextRenderer>, script: &str) -> Result<()> {
    for (index, line) in script.lines().enumerate() {
        if let Some(step) = Step::parse(index + 1, line)? {
            run_step(router, step)?;
        }
    }

    Ok(())
}
