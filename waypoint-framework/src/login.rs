use thiserror::Error;

pub const EMAIL_INPUT: &str = "email";
pub const PASSWORD_INPUT: &str = "password";

/// The one error a user can see. It is a presence check on the sign-in
/// form, not authentication, and it never locks anybody out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Please enter both email and password.")]
    MissingCredentials,
}

/// Allow the move to the home screen iff both fields have content.
pub fn check_credentials(email: &str, password: &str) -> Result<(), LoginError> {
    if email.is_empty() || password.is_empty() {
        Err(LoginError::MissingCredentials)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_present_passes() {
        assert_eq!(check_credentials("a@b.c", "hunter2"), Ok(()));
    }

    #[test]
    fn any_missing_fails() {
        assert_eq!(
            check_credentials("", "hunter2"),
            Err(LoginError::MissingCredentials)
        );
        assert_eq!(
            check_credentials("a@b.c", ""),
            Err(LoginError::MissingCredentials)
        );
        assert_eq!(check_credentials("", ""), Err(LoginError::MissingCredentials));
    }

    #[test]
    fn whitespace_counts_as_content() {
        assert_eq!(check_credentials(" ", " "), Ok(()));
    }

    #[test]
    fn message_is_user_facing() {
        assert_eq!(
            LoginError::MissingCredentials.to_string(),
            "Please enter both email and password."
        );
    }
}
