//! Touch input and the measuring gesture.
//!
//! A gesture starts on press, follows the pointer while it moves and ends on
//! release or cancel. Transitions return a new [`GestureState`] instead of
//! mutating a shared point.

use crate::geom::ScreenPoint;

/// Masked touch action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchAction {
    /// First pointer went down.
    Down,
    /// A pointer moved.
    Move,
    /// Last pointer went up.
    Up,
    /// The gesture was aborted by the host.
    Cancel,
    /// An additional pointer went down.
    PointerDown,
    /// An additional pointer went up.
    PointerUp,
    /// Any other host action.
    Other,
}

/// A touch event with the positions of every active pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct TouchEvent {
    /// Action kind.
    pub action: TouchAction,
    /// Index of the pointer the action refers to.
    pub action_index: usize,
    /// Positions of all pointers, primary first.
    pub pointers: Vec<ScreenPoint>,
}

impl TouchEvent {
    /// Create a single-pointer event.
    pub fn single(action: TouchAction, position: ScreenPoint) -> Self {
        Self {
            action,
            action_index: 0,
            pointers: vec![position],
        }
    }

    /// Create a press event.
    pub fn down(x: f32, y: f32) -> Self {
        Self::single(TouchAction::Down, ScreenPoint::new(x, y))
    }

    /// Create a move event.
    pub fn moved(x: f32, y: f32) -> Self {
        Self::single(TouchAction::Move, ScreenPoint::new(x, y))
    }

    /// Create a release event.
    pub fn up(x: f32, y: f32) -> Self {
        Self::single(TouchAction::Up, ScreenPoint::new(x, y))
    }

    /// Create a cancel event.
    pub fn cancel(x: f32, y: f32) -> Self {
        Self::single(TouchAction::Cancel, ScreenPoint::new(x, y))
    }

    /// Position of the pointer the action refers to.
    pub fn action_pointer(&self) -> Option<ScreenPoint> {
        self.pointers.get(self.action_index).copied()
    }

    /// Position of the primary pointer.
    pub fn primary_pointer(&self) -> Option<ScreenPoint> {
        self.pointers.first().copied()
    }
}

/// Measuring gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureState {
    measuring: bool,
    point: Option<ScreenPoint>,
}

impl GestureState {
    /// State before any gesture.
    pub const fn idle() -> Self {
        Self {
            measuring: false,
            point: None,
        }
    }

    /// Whether a gesture is in progress.
    pub fn is_measuring(&self) -> bool {
        self.measuring
    }

    /// Last recorded gesture point, kept after the gesture ends.
    pub fn point(&self) -> Option<ScreenPoint> {
        self.point
    }

    /// Y of the measuring line while a gesture is in progress.
    pub fn active_y(&self) -> Option<f32> {
        if self.measuring {
            self.point.map(|point| point.y)
        } else {
            None
        }
    }

    /// Apply a touch event and return the resulting state.
    pub fn apply(self, event: &TouchEvent) -> Self {
        match event.action {
            TouchAction::Down => match event.action_pointer() {
                Some(point) => Self {
                    measuring: true,
                    point: Some(point),
                },
                None => self,
            },
            TouchAction::Move => self.follow(event, true),
            TouchAction::Up | TouchAction::Cancel => self.follow(event, false),
            TouchAction::PointerDown | TouchAction::PointerUp | TouchAction::Other => self,
        }
    }

    fn follow(self, event: &TouchEvent, keep_measuring: bool) -> Self {
        if !self.measuring {
            return self;
        }
        match (self.point, event.primary_pointer()) {
            (Some(point), Some(pointer)) => Self {
                measuring: keep_measuring,
                point: Some(point.with_y(pointer.y)),
            },
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_move_release_round_trip() {
        let state = GestureState::idle().apply(&TouchEvent::down(50.0, 100.0));
        assert!(state.is_measuring());
        assert_eq!(state.point(), Some(ScreenPoint::new(50.0, 100.0)));

        let state = state.apply(&TouchEvent::moved(75.0, 300.0));
        assert!(state.is_measuring());
        assert_eq!(state.point(), Some(ScreenPoint::new(50.0, 300.0)));

        let state = state.apply(&TouchEvent::up(80.0, 400.0));
        assert!(!state.is_measuring());
        assert_eq!(state.point(), Some(ScreenPoint::new(50.0, 400.0)));
        assert_eq!(state.active_y(), None);
    }

    #[test]
    fn cancel_ends_gesture_with_final_y() {
        let state = GestureState::idle()
            .apply(&TouchEvent::down(1.0, 2.0))
            .apply(&TouchEvent::cancel(3.0, 40.0));
        assert!(!state.is_measuring());
        assert_eq!(state.point(), Some(ScreenPoint::new(1.0, 40.0)));
    }

    #[test]
    fn move_and_release_while_idle_are_ignored() {
        let idle = GestureState::idle();
        assert_eq!(idle.apply(&TouchEvent::moved(1.0, 2.0)), idle);
        assert_eq!(idle.apply(&TouchEvent::up(1.0, 2.0)), idle);

        let ended = idle
            .apply(&TouchEvent::down(5.0, 10.0))
            .apply(&TouchEvent::up(5.0, 20.0));
        assert_eq!(ended.apply(&TouchEvent::moved(5.0, 99.0)), ended);
    }

    #[test]
    fn press_uses_action_pointer_and_moves_follow_primary() {
        let down = TouchEvent {
            action: TouchAction::Down,
            action_index: 1,
            pointers: vec![ScreenPoint::new(0.0, 0.0), ScreenPoint::new(30.0, 60.0)],
        };
        let state = GestureState::idle().apply(&down);
        assert_eq!(state.point(), Some(ScreenPoint::new(30.0, 60.0)));

        let moved = TouchEvent {
            action: TouchAction::Move,
            action_index: 0,
            pointers: vec![ScreenPoint::new(0.0, 15.0), ScreenPoint::new(30.0, 90.0)],
        };
        assert_eq!(
            state.apply(&moved).point(),
            Some(ScreenPoint::new(30.0, 15.0))
        );
    }

    #[test]
    fn secondary_pointer_actions_are_noops() {
        let state = GestureState::idle().apply(&TouchEvent::down(5.0, 10.0));
        for action in [TouchAction::PointerDown, TouchAction::PointerUp, TouchAction::Other] {
            let event = TouchEvent::single(action, ScreenPoint::new(9.0, 90.0));
            assert_eq!(state.apply(&event), state);
        }
    }

    #[test]
    fn press_without_pointer_keeps_state() {
        let event = TouchEvent {
            action: TouchAction::Down,
            action_index: 2,
            pointers: vec![ScreenPoint::new(1.0, 1.0)],
        };
        assert_eq!(GestureState::idle().apply(&event), GestureState::idle());
    }
}
