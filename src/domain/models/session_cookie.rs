use std::fmt;

/// Normalized session cookie produced by a successful login. Opaque, sent
/// verbatim as the `Cookie` header on every later request in the same run and
/// never persisted across runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionCookie(String);

impl SessionCookie {
    pub fn new(cookie: String) -> SessionCookie {
        return SessionCookie(cookie);
    }

    pub fn as_str(&self) -> &str {
        return &self.0;
    }

    pub fn is_empty(&self) -> bool {
        return self.0.is_empty();
    }
}

impl fmt::Display for SessionCookie {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}
