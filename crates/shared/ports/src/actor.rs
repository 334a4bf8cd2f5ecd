use agora_core::{Decision, Stimulus};

/// Generic actor capability
///
/// Anything registered into a world implements this. An actor owns its
/// state exclusively and mutates it only from `receive_and_act`.
pub trait Actor: Send {
    /// Actor's name (unique within a world by convention)
    fn name(&self) -> &str;

    /// Consume a stimulus, optionally mutate own state, report the decision
    fn receive_and_act(&mut self, stimulus: &Stimulus) -> Decision;

    /// Forget perceived stimuli; financial state is kept
    fn reset_memory(&mut self);

    /// Actor type name (for logging)
    fn actor_type(&self) -> &'static str {
        "Actor"
    }
}
