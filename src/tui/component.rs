use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components are transient: constructed each frame from borrowed app data
/// (props) plus any long-lived presentation state they manage (`&mut State`
/// fields), then rendered into a `Rect` and dropped.
///
/// # Mutability
///
/// `render` takes `&mut self` so a component can update layout caches and
/// scroll state during the render pass, matching Ratatui's `StatefulWidget`
/// pattern.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
