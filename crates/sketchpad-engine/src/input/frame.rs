use super::types::{InputEvent, MouseButton, PointerButtonEvent};

/// Per-frame input batch.
///
/// `InputState` holds what is currently down and where the pointer is;
/// `InputFrame` holds what happened since the previous frame. The runtime
/// clears it after every frame.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Raw events in arrival order.
    pub events: Vec<InputEvent>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn push_event(&mut self, ev: InputEvent) {
        self.events.push(ev);
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Every press of `button` this frame, in arrival order.
    ///
    /// Repeated clicks within one frame are all reported.
    pub fn presses(&self, button: MouseButton) -> impl Iterator<Item = &PointerButtonEvent> {
        self.events.iter().filter_map(move |ev| match ev {
            InputEvent::PointerButton(b) if b.is_press_of(button) => Some(b),
            _ => None,
        })
    }
}
