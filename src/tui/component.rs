use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components follow the same split as the core: they receive data via
/// props (struct fields), may borrow persistent presentation state
/// (scroll offsets, the frame's hit map), and render into a `Rect`.
///
/// `render` takes `&mut self` so a component can write into the state it
/// borrowed, the same way ratatui's `StatefulWidget` does.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events on its own state.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
