/// Token carried in the `/activate/:token` route.
///
/// No format is assumed. The value is forwarded exactly as it was decoded
/// from the page URL; an absent segment yields the empty token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ActivationToken(String);

impl ActivationToken {
    pub fn new(s: impl Into<String>) -> ActivationToken {
        Self(s.into())
    }
}

impl AsRef<str> for ActivationToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::ActivationToken;

    #[test]
    fn token_is_kept_verbatim() {
        let raw = "  a b/c?d=%20 ";
        assert_eq!(ActivationToken::new(raw).as_ref(), raw);
    }

    #[test]
    fn default_token_is_empty() {
        assert!(ActivationToken::default().as_ref().is_empty());
    }
}
