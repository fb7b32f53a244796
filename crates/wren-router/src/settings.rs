//! Router behaviour settings.

/// Settings shared by every router in a [`RouterTree`](crate::RouterTree).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouterSettings {
    /// Reject malformed registration calls with an error.
    ///
    /// When `false`, calls whose arguments match no supported shape (a path
    /// without a handler, a handler followed by a router, ...) are logged at
    /// `warn` level and otherwise ignored.
    pub strict_use: bool,
}

impl Default for RouterSettings {
    fn default() -> Self {
        Self { strict_use: true }
    }
}

impl RouterSettings {
    /// Settings that log and skip malformed registration calls.
    #[must_use]
    pub fn permissive() -> Self {
        Self { strict_use: false }
    }
}
