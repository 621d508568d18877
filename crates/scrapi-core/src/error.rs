use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error(
        "Did not find {field}, please add an environment variable `{env_var}` which contains it, or pass `{field}` as a named parameter."
    )]
    MissingCredential {
        field: &'static str,
        env_var: &'static str,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input for tool '{tool}': {reason}")]
    InvalidInput { tool: String, reason: String },
}

impl Error {
    /// Helper for creating configuration errors
    ///
    /// # Example
    /// ```
    /// use scrapi_core::Error;
    /// let err = Error::config_error("timeout_secs must be a number");
    /// ```
    pub fn config_error(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Helper for rejecting tool arguments before anything is sent
    ///
    /// # Example
    /// ```
    /// use scrapi_core::Error;
    /// let err = Error::invalid_input("scraperapi", "url must not be empty");
    /// assert!(err.to_string().contains("url must not be empty"));
    /// ```
    pub fn invalid_input(tool: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidInput {
            tool: tool.into(),
            reason: reason.into(),
        }
    }

    /// Returns true when the error was raised by argument validation
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidInput { .. })
    }
}
