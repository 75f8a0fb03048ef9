//! Buffered audio intents awaiting the host mixer.
//!
//! The core never plays sound. It records what should be heard and the host
//! drains the queue once per frame; dropping intents is harmless.

/// Sound requests emitted by the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioIntent {
    /// Begin the background track.
    StartMusic,
    /// Jump sound effect.
    PlayJump,
    /// Player-hit sound effect.
    PlayHurt,
    /// Pause the background track.
    PauseMusic,
    /// Resume the background track.
    UnpauseMusic,
}

/// Queue of intents produced since the last drain.
#[derive(Debug, Clone, Default)]
pub struct AudioOutbox {
    intents: Vec<AudioIntent>,
}

impl AudioOutbox {
    /// Queues `intent` for the host.
    pub fn push(&mut self, intent: AudioIntent) {
        self.intents.push(intent);
    }

    /// Hands every pending intent to the caller, oldest first.
    pub fn drain(&mut self) -> std::vec::Drain<'_, AudioIntent> {
        self.intents.drain(..)
    }

    /// Returns `true` when nothing is waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }

    /// Pending intents in emission order.
    #[must_use]
    pub fn pending(&self) -> &[AudioIntent] {
        &self.intents
    }
}
