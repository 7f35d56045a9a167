/// Trailing-edge debouncer driven by an external millisecond clock.
///
/// Every [`Self::call`] replaces the pending value and pushes the deadline out to
/// `now_ms + quiet_ms`. [`Self::poll`] yields the last value once the quiet period has elapsed,
/// so a burst of calls produces a single trailing invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Debouncer<T> {
    quiet_ms: u64,
    pending: Option<(T, u64)>,
}

impl<T> Debouncer<T> {
    pub fn new(quiet_ms: u64) -> Self {
        Self {
            quiet_ms,
            pending: None,
        }
    }

    pub fn quiet_ms(&self) -> u64 {
        self.quiet_ms
    }

    /// Changes the quiet period. An already pending value keeps its deadline.
    pub fn set_quiet_ms(&mut self, quiet_ms: u64) {
        self.quiet_ms = quiet_ms;
    }

    pub fn call(&mut self, value: T, now_ms: u64) {
        self.pending = Some((value, now_ms.saturating_add(self.quiet_ms)));
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline_ms(&self) -> Option<u64> {
        self.pending.as_ref().map(|(_, due)| *due)
    }

    /// Returns the pending value once `now_ms` has reached its deadline.
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        let due = self.pending.as_ref()?.1;
        if now_ms < due {
            return None;
        }
        self.pending.take().map(|(value, _)| value)
    }

    /// Returns the pending value immediately, regardless of the deadline.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
