use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("'{name}' is not a {program} command. Valid commands: {}", .valid.join(", "))]
    UnknownCommand {
        program: String,
        name: String,
        valid: Vec<String>,
    },

    #[error("the following arguments are required: {0}")]
    MissingArgument(String),

    #[error("unrecognized flag: {0}")]
    UnrecognizedFlag(String),

    #[error("invalid {expected} value for {flag}: '{value}'")]
    InvalidValue {
        flag: String,
        value: String,
        expected: &'static str,
    },

    #[error("flag {0} expects a value")]
    MissingValue(String),

    #[error("unexpected argument: {0}")]
    UnexpectedArgument(String),

    #[error("a subcommand is required")]
    MissingCommand(String),

    #[error("command '{0}' is already registered")]
    DuplicateCommand(String),

    #[error("{0}")]
    HelpRequested(String),

    #[error("{0}")]
    Custom(Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::HelpRequested(_) => 0,
            Error::UnknownCommand { .. } | Error::MissingCommand(_) | Error::Custom(_) => 1,
            _ => 2,
        }
    }

    pub fn custom(msg: impl Into<String>) -> Self {
        let msg: String = msg.into();
        Error::Custom(msg.into())
    }

    /// Errors the user fixes by re-invoking with different arguments.
    pub fn is_usage_error(&self) -> bool {
        !matches!(self, Error::Custom(_) | Error::DuplicateCommand(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
