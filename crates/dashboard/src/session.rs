//! Per-session reactive state.
//!
//! A `Session` holds what one viewer has done so far: their toggle counter
//! and the last text they typed into each query box. The dataset itself is
//! shared through the `Dashboard`; nothing here is global, so two viewers
//! clicking the same toggle never see each other's mode.

use crate::toggle::{LabelMode, ToggleState};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    toggle: ToggleState,
    actor_query: Option<String>,
    title_query: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&self) -> &ToggleState {
        &self.toggle
    }

    pub fn toggle_mut(&mut self) -> &mut ToggleState {
        &mut self.toggle
    }

    pub fn label_mode(&self) -> LabelMode {
        self.toggle.mode()
    }

    /// Last actor-table query, `None` until one is typed
    pub fn actor_query(&self) -> Option<&str> {
        self.actor_query.as_deref()
    }

    pub fn set_actor_query(&mut self, query: Option<String>) {
        self.actor_query = query;
    }

    /// Last title-summary query
    pub fn title_query(&self) -> Option<&str> {
        self.title_query.as_deref()
    }

    pub fn set_title_query(&mut self, query: Option<String>) {
        self.title_query = query;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sessions_are_independent() {
        let mut first = Session::new();
        let second = Session::new();

        first.toggle_mut().click();
        first.set_actor_query(Some("Bateman".to_string()));

        assert_eq!(first.label_mode(), LabelMode::Percent);
        assert_eq!(second.label_mode(), LabelMode::Value);
        assert_eq!(first.actor_query(), Some("Bateman"));
        assert_eq!(second.actor_query(), None);
    }
}
