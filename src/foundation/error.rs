pub type Ui4Result<T> = Result<T, Ui4Error>;

#[derive(thiserror::Error, Debug)]
pub enum Ui4Error {
    #[error("invalid event name '{name}', expected one of: {}", .allowed.join(", "))]
    InvalidEventName {
        name: String,
        allowed: Vec<&'static str>,
    },

    #[error("cannot set {value} as {attribute}")]
    UnsupportedValue { attribute: String, value: String },

    #[error("unknown dock keyword '{keyword}'")]
    UnknownDock { keyword: String },

    #[error("unknown attribute '{name}'")]
    UnknownAttribute { name: String },

    #[error("no suspended handler for continuation '{id}'")]
    ContinuationNotFound { id: String },

    #[error("unknown view '{id}'")]
    UnknownView { id: String },

    #[error("validation error: {0}")]
    Validation(String),

    #[error("parse error at byte {offset}: {message}")]
    Parse { offset: usize, message: String },

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Ui4Error {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn unsupported(attribute: impl Into<String>, value: impl std::fmt::Debug) -> Self {
        Self::UnsupportedValue {
            attribute: attribute.into(),
            value: format!("{value:?}"),
        }
    }

    pub fn unknown_view(id: impl std::fmt::Display) -> Self {
        Self::UnknownView { id: id.to_string() }
    }

    pub fn parse(offset: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            offset,
            message: message.into(),
        }
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for Ui4Error {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
