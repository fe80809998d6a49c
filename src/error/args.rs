use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArgumentError {
    #[error("invalid delimiter code point: '{value}'")]
    InvalidCodePoint { value: String },
}

impl ArgumentError {
    pub fn invalid_code_point(value: impl Into<String>) -> Self {
        Self::InvalidCodePoint {
            value: value.into(),
        }
    }
}
