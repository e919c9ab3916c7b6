//! The single footer content slot.
//!
//! The footer container holds exactly one of the loading, failed or end
//! visuals at a time. Replacing the content detaches the previous visual
//! before the next one is attached, so a stale failed view can never accept
//! a retry tap once it has been swapped out.

use super::FooterState;

/// Which configured visual is attached to the footer container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FooterContent {
    Loading,
    Failed,
    End,
}

impl FooterContent {
    /// The visual that represents `state`, if any.
    pub fn for_state(state: FooterState) -> Option<Self> {
        match state {
            FooterState::Absent => None,
            FooterState::Loading => Some(FooterContent::Loading),
            FooterState::Failed => Some(FooterContent::Failed),
            FooterState::End => Some(FooterContent::End),
        }
    }
}

/// Owned footer container.
///
/// `generation` increases on every attach or detach so hosts can tell that
/// the footer has to be re-rendered.
#[derive(Debug, Default)]
pub struct FooterSlot {
    attached: Option<FooterContent>,
    generation: u64,
}

impl FooterSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently attached content.
    #[inline]
    pub fn attached(&self) -> Option<FooterContent> {
        self.attached
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Detaches the current content and attaches `next`.
    ///
    /// Returns the detached content. Replacing content with itself is a
    /// no-op and does not bump the generation.
    pub fn replace(&mut self, next: Option<FooterContent>) -> Option<FooterContent> {
        if self.attached == next {
            return None;
        }
        let previous = self.attached.take();
        self.attached = next;
        self.generation += 1;
        previous
    }

    /// Marks the attached content as re-rendered after its view was swapped.
    pub fn refresh(&mut self) -> bool {
        if self.attached.is_none() {
            return false;
        }
        self.generation += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_only_bumps_when_attached() {
        let mut slot = FooterSlot::new();
        assert!(!slot.refresh());
        assert_eq!(slot.generation(), 0);
        slot.replace(Some(FooterContent::End));
        assert!(slot.refresh());
        assert_eq!(slot.generation(), 2);
        assert_eq!(slot.attached(), Some(FooterContent::End));
    }

    #[test]
    fn test_replace_returns_detached_content() {
        let mut slot = FooterSlot::new();
        assert_eq!(slot.replace(Some(FooterContent::Loading)), None);
        assert_eq!(
            slot.replace(Some(FooterContent::Failed)),
            Some(FooterContent::Loading)
        );
        assert_eq!(slot.attached(), Some(FooterContent::Failed));
    }

    #[test]
    fn test_replace_with_same_content_keeps_generation() {
        let mut slot = FooterSlot::new();
        slot.replace(Some(FooterContent::End));
        let generation = slot.generation();
        slot.replace(Some(FooterContent::End));
        assert_eq!(slot.generation(), generation);
    }

    #[test]
    fn test_replace_with_none_detaches() {
        let mut slot = FooterSlot::new();
        slot.replace(Some(FooterContent::Loading));
        assert_eq!(slot.replace(None), Some(FooterContent::Loading));
        assert_eq!(slot.attached(), None);
        assert_eq!(slot.generation(), 2);
    }
}
