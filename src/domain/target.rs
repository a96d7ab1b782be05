use url::Url;

/// Absolute `http` or `https` URL of the page under test.
#[derive(Debug, Clone)]
pub struct TargetUrl(Url);

impl TargetUrl {
    pub fn parse(url: &str) -> Result<Self, TargetUrlParseError> {
        let url = Url::parse(url.trim())?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(TargetUrlParseError::Scheme(url.scheme().to_owned()));
        }
        if url.host_str().is_none() {
            return Err(TargetUrlParseError::MissingHost);
        }

        Ok(Self(url))
    }
}

impl AsRef<Url> for TargetUrl {
    fn as_ref(&self) -> &Url {
        &self.0
    }
}

impl std::fmt::Display for TargetUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TargetUrlParseError {
    #[error("target is not a valid URL")]
    Invalid(#[from] url::ParseError),
    #[error("unsupported target scheme `{0}`, expected `http` or `https`")]
    Scheme(String),
    #[error("target URL has no host")]
    MissingHost,
}
