/// Pointer events delivered to the decorative visual.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEvent {
    Enter,
    Leave,
}

/// Hover flag for the decorative visual. The most recent event wins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverState {
    hovered: bool,
}

impl HoverState {
    pub fn apply(&mut self, event: PointerEvent) {
        self.hovered = matches!(event, PointerEvent::Enter);
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unhovered() {
        assert!(!HoverState::default().is_hovered());
    }

    #[test]
    fn last_event_wins() {
        let mut hover = HoverState::default();
        hover.apply(PointerEvent::Enter);
        hover.apply(PointerEvent::Enter);
        hover.apply(PointerEvent::Leave);
        assert!(!hover.is_hovered());

        hover.apply(PointerEvent::Leave);
        hover.apply(PointerEvent::Enter);
        assert!(hover.is_hovered());
    }
}
