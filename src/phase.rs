//! Top-level game phase machine.
//!
//! The transition table is a pure function of the current phase and a
//! trigger; side effects such as resetting the world are described by the
//! returned [`Transition`] and carried out by [`crate::game::Game`].

use serde::Serialize;

/// Which screen the game is on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum GamePhase {
    /// Title screen with start and quit buttons.
    #[default]
    Menu,
    /// The level is running.
    Playing,
    /// Health ran out.
    GameOver,
    /// The player reached the door.
    LevelComplete,
}

/// Something that may move the game to another phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseTrigger {
    /// The start button was clicked.
    StartPressed,
    /// The quit button was clicked.
    QuitPressed,
    /// The retry button was clicked or the retry key pressed.
    RetryPressed,
    /// The escape key was pressed.
    Escape,
    /// Health reached zero.
    HealthDepleted,
    /// The player touched the exit door.
    DoorReached,
}

/// Result of feeding a trigger to the phase machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The trigger has no meaning in this phase.
    Stay,
    /// Switch to another phase.
    Enter(GamePhase),
    /// Reset the world and resume playing.
    Restart,
    /// Terminate the process.
    Exit,
}

impl GamePhase {
    /// Looks up the transition for `trigger`.
    ///
    /// # Examples
    ///
    /// ```
    /// use beeline::phase::{GamePhase, PhaseTrigger, Transition};
    /// assert_eq!(
    ///     GamePhase::Menu.on(PhaseTrigger::StartPressed),
    ///     Transition::Enter(GamePhase::Playing)
    /// );
    /// assert_eq!(GamePhase::Menu.on(PhaseTrigger::Escape), Transition::Exit);
    /// ```
    #[must_use]
    pub const fn on(self, trigger: PhaseTrigger) -> Transition {
        use GamePhase::{GameOver, LevelComplete, Menu, Playing};
        use PhaseTrigger::{DoorReached, Escape, HealthDepleted, QuitPressed, RetryPressed, StartPressed};

        match (self, trigger) {
            (Menu, StartPressed) => Transition::Enter(Playing),
            (Menu, QuitPressed) => Transition::Exit,
            (Playing, HealthDepleted) => Transition::Enter(GameOver),
            (Playing, DoorReached) => Transition::Enter(LevelComplete),
            (Playing, Escape) => Transition::Enter(Menu),
            (GameOver, RetryPressed) => Transition::Restart,
            (Menu | GameOver | LevelComplete, Escape) => Transition::Exit,
            _ => Transition::Stay,
        }
    }

    /// Whether the world advances in this phase.
    #[must_use]
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use GamePhase::{GameOver, LevelComplete, Menu, Playing};
    use PhaseTrigger::{DoorReached, Escape, HealthDepleted, QuitPressed, RetryPressed, StartPressed};

    #[rstest]
    #[case(Menu, StartPressed, Transition::Enter(Playing))]
    #[case(Menu, QuitPressed, Transition::Exit)]
    #[case(Menu, Escape, Transition::Exit)]
    #[case(Playing, HealthDepleted, Transition::Enter(GameOver))]
    #[case(Playing, DoorReached, Transition::Enter(LevelComplete))]
    #[case(Playing, Escape, Transition::Enter(Menu))]
    #[case(GameOver, RetryPressed, Transition::Restart)]
    #[case(GameOver, Escape, Transition::Exit)]
    #[case(LevelComplete, Escape, Transition::Exit)]
    fn defined_transitions(
        #[case] phase: GamePhase,
        #[case] trigger: PhaseTrigger,
        #[case] expected: Transition,
    ) {
        assert_eq!(phase.on(trigger), expected);
    }

    #[rstest]
    #[case(Menu, RetryPressed)]
    #[case(Menu, HealthDepleted)]
    #[case(Playing, StartPressed)]
    #[case(Playing, RetryPressed)]
    #[case(Playing, QuitPressed)]
    #[case(GameOver, StartPressed)]
    #[case(GameOver, DoorReached)]
    #[case(LevelComplete, RetryPressed)]
    #[case(LevelComplete, HealthDepleted)]
    fn undefined_triggers_are_ignored(#[case] phase: GamePhase, #[case] trigger: PhaseTrigger) {
        assert_eq!(phase.on(trigger), Transition::Stay);
    }

    #[test]
    fn only_playing_advances_the_world() {
        assert!(Playing.is_playing());
        assert!(!Menu.is_playing());
        assert!(!GameOver.is_playing());
        assert!(!LevelComplete.is_playing());
    }
}
