use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton as WinitMouseButton, WindowEvent};
use winit::window::Window;

use crate::input::{
    InputEvent, InputState, MouseButton, MouseButtonState, PointerButtonEvent, PointerMoveEvent,
};

/// Translates a winit `WindowEvent` into an engine `InputEvent`.
///
/// Returns `None` for events not represented by the input subsystem.
pub(crate) fn translate_window_event(
    window: &Window,
    state: &InputState,
    event: &WindowEvent,
) -> Option<InputEvent> {
    match event {
        WindowEvent::Focused(f) => Some(InputEvent::Focused(*f)),

        WindowEvent::CursorLeft { .. } => Some(InputEvent::PointerLeft),

        WindowEvent::CursorMoved { position, .. } => {
            let (x, y) = to_logical_f32(window, *position);
            Some(InputEvent::PointerMoved(PointerMoveEvent { x, y }))
        }

        WindowEvent::MouseInput { state: st, button, .. } => button_event(state, *button, *st),

        _ => None,
    }
}

/// Builds a button event at the tracked pointer position.
///
/// winit 0.30 reports no position with `MouseInput` and none with
/// `CursorEntered`, so a button event that arrives before the first
/// `CursorMoved` (or after `CursorLeft`) has no known location and is dropped.
fn button_event(
    state: &InputState,
    button: WinitMouseButton,
    st: ElementState,
) -> Option<InputEvent> {
    let Some((x, y)) = state.pointer_pos else {
        log::debug!("dropping {button:?} {st:?}: pointer position unknown");
        return None;
    };

    let st = match st {
        ElementState::Pressed => MouseButtonState::Pressed,
        ElementState::Released => MouseButtonState::Released,
    };

    Some(InputEvent::PointerButton(PointerButtonEvent {
        button: map_mouse_button(button),
        state: st,
        x,
        y,
    }))
}

fn to_logical_f32(window: &Window, pos: PhysicalPosition<f64>) -> (f32, f32) {
    let scale = window.scale_factor();
    let logical = pos.to_logical::<f64>(scale);
    (logical.x as f32, logical.y as f32)
}

fn map_mouse_button(b: WinitMouseButton) -> MouseButton {
    match b {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Back,
        WinitMouseButton::Forward => MouseButton::Forward,
        WinitMouseButton::Other(v) => MouseButton::Other(v),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputFrame;

    #[test]
    fn press_uses_tracked_pointer_position() {
        let state = InputState {
            pointer_pos: Some((12.0, 34.0)),
            ..InputState::default()
        };

        let ev = button_event(&state, WinitMouseButton::Left, ElementState::Pressed);

        assert_eq!(
            ev,
            Some(InputEvent::PointerButton(PointerButtonEvent {
                button: MouseButton::Left,
                state: MouseButtonState::Pressed,
                x: 12.0,
                y: 34.0,
            }))
        );
    }

    #[test]
    fn button_without_known_position_is_dropped() {
        let state = InputState::default();

        assert_eq!(button_event(&state, WinitMouseButton::Left, ElementState::Pressed), None);
        assert_eq!(button_event(&state, WinitMouseButton::Left, ElementState::Released), None);
    }

    #[test]
    fn click_after_pointer_left_is_dropped() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, InputEvent::PointerMoved(PointerMoveEvent { x: 5.0, y: 5.0 }));
        state.apply_event(&mut frame, InputEvent::PointerLeft);

        assert_eq!(button_event(&state, WinitMouseButton::Left, ElementState::Pressed), None);
    }
}
