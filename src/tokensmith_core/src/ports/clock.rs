/// Source of wall-clock time, in whole seconds since the Unix epoch.
///
/// The handler reads it once per invocation and uses that value for both
/// issuing and checking validity windows.
pub trait Clock: Send + Sync {
    fn now(&self) -> i64;
}

/// A clock stuck at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now(&self) -> i64 {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> i64 {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn now(&self) -> i64 {
        (**self).now()
    }
}
