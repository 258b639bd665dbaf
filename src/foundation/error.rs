pub type SignResult<T> = Result<T, SignError>;

#[derive(thiserror::Error, Debug)]
pub enum SignError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("check error: {0}")]
    Check(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SignError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    pub fn check(msg: impl Into<String>) -> Self {
        Self::Check(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            SignError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(SignError::decode("x").to_string().contains("decode error:"));
        assert!(SignError::render("x").to_string().contains("render error:"));
        assert!(SignError::check("x").to_string().contains("check error:"));
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = SignError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
