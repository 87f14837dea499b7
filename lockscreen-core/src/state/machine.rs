//! Screen definitions and transitions

use heapless::Vec;

use super::events::{Effect, Event};

/// Most effects any single transition produces
pub const MAX_EFFECTS: usize = 4;

/// Screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen {
    /// Boot screen with the unlock prompt and button
    #[default]
    Locked,
    /// After unlocking; terminal
    Home,
}

/// Result of feeding an event to a screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub next: Screen,
    pub effects: Vec<Effect, MAX_EFFECTS>,
}

impl Transition {
    fn to(next: Screen, effects: &[Effect]) -> Self {
        let mut list = Vec::new();
        for &effect in effects.iter().take(MAX_EFFECTS) {
            let _ = list.push(effect);
        }
        Self {
            next,
            effects: list,
        }
    }
}

impl Screen {
    /// Whether buttons react to the cursor on this screen
    pub fn is_interactive(&self) -> bool {
        matches!(self, Screen::Locked)
    }

    /// Process an event and return the next screen with its effects
    ///
    /// The cursor has already been erased at its old position when a
    /// `CursorMoved` event is raised.
    pub fn transition(self, event: Event) -> Transition {
        use Effect::*;
        use Screen::*;

        match (self, event) {
            (Locked, Event::UnlockRequested) => Transition::to(
                Home,
                &[ClearAll, DrawLoadingMessage, SetInverted(false), RedrawCursor],
            ),

            (Locked, Event::CursorMoved { from, to }) => {
                let mut t = Transition::to(Locked, &[SetInverted(to.is_some())]);
                if from != to {
                    if let Some(old) = from {
                        let _ = t.effects.push(Unfill(old));
                    }
                    if let Some(new) = to {
                        let _ = t.effects.push(Fill(new));
                    }
                }
                let _ = t.effects.push(RedrawCursor);
                t
            }

            // Home is terminal; nothing on it reacts to the cursor
            (Home, Event::CursorMoved { .. }) => {
                Transition::to(Home, &[SetInverted(false), RedrawCursor])
            }
            (Home, Event::UnlockRequested) => Transition::to(Home, &[]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn effects(t: &Transition) -> &[Effect] {
        &t.effects
    }

    #[test]
    fn test_unlock() {
        let t = Screen::Locked.transition(Event::UnlockRequested);
        assert_eq!(t.next, Screen::Home);
        assert_eq!(
            effects(&t),
            &[
                Effect::ClearAll,
                Effect::DrawLoadingMessage,
                Effect::SetInverted(false),
                Effect::RedrawCursor
            ]
        );
    }

    #[test]
    fn test_home_ignores_unlock() {
        let t = Screen::Home.transition(Event::UnlockRequested);
        assert_eq!(t.next, Screen::Home);
        assert!(t.effects.is_empty());
    }

    #[test]
    fn test_move_onto_button() {
        let t = Screen::Locked.transition(Event::CursorMoved {
            from: None,
            to: Some(0),
        });
        assert_eq!(t.next, Screen::Locked);
        assert_eq!(
            effects(&t),
            &[Effect::SetInverted(true), Effect::Fill(0), Effect::RedrawCursor]
        );
    }

    #[test]
    fn test_move_between_buttons() {
        let t = Screen::Locked.transition(Event::CursorMoved {
            from: Some(2),
            to: Some(1),
        });
        assert_eq!(
            effects(&t),
            &[
                Effect::SetInverted(true),
                Effect::Unfill(2),
                Effect::Fill(1),
                Effect::RedrawCursor
            ]
        );
    }

    #[test]
    fn test_move_within_button() {
        let t = Screen::Locked.transition(Event::CursorMoved {
            from: Some(0),
            to: Some(0),
        });
        assert_eq!(effects(&t), &[Effect::SetInverted(true), Effect::RedrawCursor]);
    }

    #[test]
    fn test_move_off_button() {
        let t = Screen::Locked.transition(Event::CursorMoved {
            from: Some(0),
            to: None,
        });
        assert_eq!(
            effects(&t),
            &[Effect::SetInverted(false), Effect::Unfill(0), Effect::RedrawCursor]
        );
    }

    #[test]
    fn test_home_move() {
        let t = Screen::Home.transition(Event::CursorMoved {
            from: None,
            to: Some(3),
        });
        assert_eq!(t.next, Screen::Home);
        assert_eq!(effects(&t), &[Effect::SetInverted(false), Effect::RedrawCursor]);
        assert!(!Screen::Home.is_interactive());
        assert!(Screen::Locked.is_interactive());
    }
}
