use crate::geom::{ScreenPoint, ScreenRect};
use crate::gesture::{TouchAction, TouchEvent};

/// Left-button mouse input that stands in for the touch pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MouseInput {
    Press,
    Move,
    Release,
    /// Release delivered after the pointer left the view.
    ReleaseOutside,
}

impl MouseInput {
    pub(crate) fn touch_action(self) -> TouchAction {
        match self {
            Self::Press => TouchAction::Down,
            Self::Move => TouchAction::Move,
            Self::Release => TouchAction::Up,
            Self::ReleaseOutside => TouchAction::Cancel,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct RulerUiState {
    /// Window-space bounds of the last painted frame.
    pub(crate) bounds: Option<ScreenRect>,
}

impl RulerUiState {
    /// Convert a window position into view-local coordinates.
    pub(crate) fn to_local(&self, position: ScreenPoint) -> ScreenPoint {
        match self.bounds {
            Some(bounds) => bounds.to_local(position),
            None => position,
        }
    }

    /// Translate mouse input at a window position into a view-local touch event.
    pub(crate) fn touch_event(&self, input: MouseInput, position: ScreenPoint) -> TouchEvent {
        TouchEvent::single(input.touch_action(), self.to_local(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offset_state() -> RulerUiState {
        RulerUiState {
            bounds: Some(ScreenRect::new(
                ScreenPoint::new(100.0, 50.0),
                ScreenPoint::new(400.0, 700.0),
            )),
        }
    }

    #[test]
    fn mouse_inputs_map_to_touch_actions() {
        assert_eq!(MouseInput::Press.touch_action(), TouchAction::Down);
        assert_eq!(MouseInput::Move.touch_action(), TouchAction::Move);
        assert_eq!(MouseInput::Release.touch_action(), TouchAction::Up);
        assert_eq!(MouseInput::ReleaseOutside.touch_action(), TouchAction::Cancel);
    }

    #[test]
    fn release_outside_cancels_at_local_position() {
        let event = offset_state().touch_event(
            MouseInput::ReleaseOutside,
            ScreenPoint::new(120.0, 800.0),
        );
        assert_eq!(event, TouchEvent::cancel(20.0, 750.0));
    }

    #[test]
    fn press_then_outside_release_ends_gesture() {
        let state = offset_state();
        let mut ruler = crate::ruler::Ruler::default();
        let press = state.touch_event(MouseInput::Press, ScreenPoint::new(150.0, 250.0));
        ruler.handle_touch(&press);
        assert!(ruler.gesture().is_measuring());
        let release = state.touch_event(MouseInput::ReleaseOutside, ScreenPoint::new(150.0, 900.0));
        ruler.handle_touch(&release);
        assert!(!ruler.gesture().is_measuring());
        assert_eq!(ruler.gesture().point(), Some(ScreenPoint::new(50.0, 850.0)));
    }

    #[test]
    fn positions_pass_through_before_first_frame() {
        let state = RulerUiState::default();
        let pos = ScreenPoint::new(12.0, 34.0);
        assert_eq!(state.to_local(pos), pos);
    }

    #[test]
    fn positions_are_relative_to_last_bounds() {
        assert_eq!(
            offset_state().to_local(ScreenPoint::new(150.0, 450.0)),
            ScreenPoint::new(50.0, 400.0)
        );
    }
}
