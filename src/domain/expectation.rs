/// What a check requires of the page body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expectation {
    /// The body equals the given text exactly.
    BodyEquals(String),
    /// The body has exactly this many characters.
    BodyLength(usize),
}

impl Expectation {
    pub fn verify(&self, body: &str) -> Result<(), ExpectationError> {
        match self {
            Self::BodyEquals(expected) => {
                if body == expected {
                    Ok(())
                } else {
                    Err(ExpectationError::BodyMismatch {
                        expected: expected.clone(),
                        actual: body.to_owned(),
                    })
                }
            }
            Self::BodyLength(expected) => {
                // Counted in chars, not bytes.
                let actual = body.chars().count();
                if actual == *expected {
                    Ok(())
                } else {
                    Err(ExpectationError::LengthMismatch {
                        expected: *expected,
                        actual,
                    })
                }
            }
        }
    }
}

impl std::fmt::Display for Expectation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BodyEquals(expected) => write!(f, "body equals {:?}", expected),
            Self::BodyLength(expected) => write!(f, "body length is {}", expected),
        }
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExpectationError {
    #[error("expected body {expected:?}, got {actual:?}")]
    BodyMismatch { expected: String, actual: String },
    #[error("expected body length {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}
