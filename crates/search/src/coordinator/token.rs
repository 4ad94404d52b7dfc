use std::fmt;

/// Identifier of one issued search, minted per settled query.
///
/// Tokens are strictly increasing; a response is applied only if its token is
/// still the coordinator's current one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic source of [`RequestToken`]s.
#[derive(Debug, Default)]
pub(crate) struct TokenCounter {
    last: u64,
}

impl TokenCounter {
    pub(crate) fn mint(&mut self) -> RequestToken {
        self.last += 1;
        RequestToken(self.last)
    }
}
