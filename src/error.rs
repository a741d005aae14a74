pub type EndrollResult<T> = Result<T, EndrollError>;

#[derive(thiserror::Error, Debug)]
pub enum EndrollError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("geometry error: {0}")]
    Geometry(String),

    #[error("plan error: {0}")]
    Plan(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EndrollError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    pub fn plan(msg: impl Into<String>) -> Self {
        Self::Plan(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            EndrollError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(
            EndrollError::geometry("x")
                .to_string()
                .contains("geometry error:")
        );
        assert!(EndrollError::plan("x").to_string().contains("plan error:"));
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = EndrollError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
