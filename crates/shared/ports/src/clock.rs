use agora_core::Timestamp;

/// Source of "now" for interval-driven behaviour
///
/// The world compares news refresh intervals against this rather than the
/// wall clock, so tests can hold time still or jump it forward.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;

    /// Time passed since `earlier`; negative if the clock was set back
    fn elapsed_since(&self, earlier: Timestamp) -> chrono::Duration {
        self.now() - earlier
    }

    fn name(&self) -> &str {
        "Clock"
    }
}
