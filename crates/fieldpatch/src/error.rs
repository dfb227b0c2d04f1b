use thiserror::Error as ThisError;

///
/// PatchError
///
/// Structured failures for patch evaluation and application.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum PatchError {
    #[error("cannot remove value from a non-optional field")]
    UnsupportedOperation,

    #[error("cannot replace a concrete value with nothing")]
    InvalidReplacement,

    #[error("no value carried by this patch")]
    EmptyOptional,

    #[error("label {label} was already used for another patch")]
    DuplicateLabel { label: String },

    #[error("no patch found for label {label}")]
    NotFound { label: String },

    #[error("patch failed for entry {label}: {source}")]
    Context {
        label: String,
        #[source]
        source: Box<Self>,
    },
}

impl PatchError {
    /// Wrap this error with the label of the patch set entry it came from.
    #[must_use]
    pub fn with_label(self, label: impl Into<String>) -> Self {
        Self::Context {
            label: label.into(),
            source: Box::new(self),
        }
    }

    /// Return the failing entry's label, if available.
    #[must_use]
    pub const fn label(&self) -> Option<&str> {
        match self {
            Self::Context { label, .. } => Some(label.as_str()),
            Self::DuplicateLabel { label } | Self::NotFound { label } => Some(label.as_str()),
            _ => None,
        }
    }

    /// Return the innermost, non-context error variant.
    #[must_use]
    pub fn leaf(&self) -> &Self {
        match self {
            Self::Context { source, .. } => source.leaf(),
            _ => self,
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_label_wraps_and_leaf_unwraps() {
        let err = PatchError::UnsupportedOperation.with_label("age");

        assert_eq!(err.label(), Some("age"));
        assert_eq!(err.leaf(), &PatchError::UnsupportedOperation);
        assert_eq!(
            err.to_string(),
            "patch failed for entry age: cannot remove value from a non-optional field"
        );
    }

    #[test]
    fn leaf_of_bare_error_is_itself() {
        let err = PatchError::InvalidReplacement;

        assert_eq!(err.label(), None);
        assert_eq!(err.leaf(), &PatchError::InvalidReplacement);
    }
}
