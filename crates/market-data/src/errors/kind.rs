/// Coarse classification of a failed search.
///
/// The coordinator never distinguishes failures from empty results on screen;
/// the kind only changes how loudly a failure is logged.
///
/// | Kind | Meaning |
/// |------|---------|
/// | `Transient` | Timeout, rate limit or connection problem; the next keystroke may succeed |
/// | `Configuration` | Missing or rejected API key; every search will fail the same way |
/// | `Upstream` | The provider answered but the answer was unusable |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FailureKind {
    Transient,
    Configuration,
    Upstream,
}
