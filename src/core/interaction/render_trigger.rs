/// What the host should do after an input has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum RenderTrigger {
    /// Nothing render-relevant changed.
    #[default]
    None,
    /// The viewport changed; render the latest state when convenient.
    Schedule,
    /// Render now even if an identical request was already submitted.
    Force,
}

impl RenderTrigger {
    /// The stronger of two triggers, for coalescing several inputs per frame.
    #[must_use]
    pub fn combine(self, other: Self) -> Self {
        self.max(other)
    }

    #[must_use]
    pub fn needs_render(self) -> bool {
        self != Self::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_keeps_strongest() {
        assert_eq!(RenderTrigger::None.combine(RenderTrigger::Schedule), RenderTrigger::Schedule);
        assert_eq!(RenderTrigger::Force.combine(RenderTrigger::Schedule), RenderTrigger::Force);
        assert_eq!(RenderTrigger::None.combine(RenderTrigger::None), RenderTrigger::None);
    }

    #[test]
    fn test_needs_render() {
        assert!(!RenderTrigger::None.needs_render());
        assert!(RenderTrigger::Schedule.needs_render());
        assert!(RenderTrigger::Force.needs_render());
    }
}
