pub type GlideResult<T> = Result<T, GlideError>;

#[derive(thiserror::Error, Debug)]
pub enum GlideError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GlideError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefix_is_stable() {
        assert!(
            GlideError::validation("x")
                .to_string()
                .contains("validation error:")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = GlideError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
