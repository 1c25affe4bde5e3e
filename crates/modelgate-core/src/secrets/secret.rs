//! Secret value wrapper with redacted output and zeroized memory

use zeroize::{Zeroize, ZeroizeOnDrop};

/// An API key held in memory.
///
/// The plaintext is only reachable through [`SecretValue::expose`].
/// `Debug` and `Display` print a redaction marker, the type has no
/// `Serialize` impl, and the backing memory is scrubbed when the value
/// is dropped or replaced.
///
/// # Example
///
/// ```
/// use modelgate_core::secrets::SecretValue;
///
/// let key = SecretValue::new("sk-test");
/// assert_eq!(key.expose(), "sk-test");
/// assert_eq!(format!("{:?}", key), "SecretValue(<redacted>)");
/// ```
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecretValue(String);

impl SecretValue {
    /// Wrap a plaintext API key
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the plaintext for use by a provider client
    ///
    /// The borrow must not outlive the request that needed it; callers
    /// that need to hold on to the value should clone the `SecretValue`
    /// itself so the copy is also scrubbed on drop.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Whether the wrapped value is the empty string
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for SecretValue {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SecretValue {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Debug for SecretValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecretValue(<redacted>)")
    }
}

impl std::fmt::Display for SecretValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<redacted>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_value_expose() {
        let secret = SecretValue::new("sk-test-123");
        assert_eq!(secret.expose(), "sk-test-123");
        assert!(!secret.is_empty());
    }

    #[test]
    fn test_secret_value_redacted_debug() {
        let secret = SecretValue::new("sk-super-secret");
        let debug = format!("{:?}", secret);
        let display = format!("{}", secret);

        assert!(!debug.contains("sk-super-secret"));
        assert!(!display.contains("sk-super-secret"));
        assert_eq!(debug, "SecretValue(<redacted>)");
        assert_eq!(display, "<redacted>");
    }

    #[test]
    fn test_secret_value_equality() {
        assert_eq!(SecretValue::new("a"), SecretValue::new("a"));
        assert_ne!(SecretValue::new("a"), SecretValue::new("b"));
    }

    #[test]
    fn test_secret_value_empty() {
        assert!(SecretValue::new("").is_empty());
    }

    #[test]
    fn test_secret_value_from() {
        let from_str: SecretValue = "key".into();
        let from_string: SecretValue = String::from("key").into();
        assert_eq!(from_str, from_string);
    }
}
