use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Something a button asks the application to do.
///
/// `keys` names the input fields whose current values should travel with the
/// action; `args` carries fixed values baked in when the document was built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub name: String,
    pub args: HashMap<String, String>,
    pub keys: Vec<String>,
}

impl Action {
    pub fn named(name: impl ToString, keys: Vec<String>) -> Action {
        Action::new(name, HashMap::default(), keys)
    }

    pub fn new(name: impl ToString, args: HashMap<String, String>, keys: Vec<String>) -> Action {
        Action {
            name: name.to_string(),
            args,
            keys,
        }
    }

    pub fn arg(&self, key: &str) -> Option<&str> {
        self.args.get(key).map(String::as_str)
    }

    pub fn captures(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }
}

impl log::kv::ToValue for Action {
    fn to_value(&self) -> log::kv::Value<'_> {
        log::kv::Value::from_debug(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_action_has_no_args() {
        let action = Action::named("submit", vec!["email".to_string()]);
        assert_eq!(action.name, "submit");
        assert!(action.args.is_empty());
        assert!(action.captures("email"));
        assert!(!action.captures("password"));
    }

    #[test]
    fn arg_lookup() {
        let mut args = HashMap::new();
        args.insert("path".to_string(), "/home".to_string());
        let action = Action::new("navigate", args, vec![]);

        assert_eq!(action.arg("path"), Some("/home"));
        assert_eq!(action.arg("missing"), None);
    }
}
