// ---------------------------------------------------------------------------
// NavigationCursor
// ---------------------------------------------------------------------------

/// Ephemeral state for one status-change interaction.
///
/// ```text
/// open → MainList ──select_main──> SubList(main)
///          ^                            │
///          └─────back_to_main_list──────┘
/// ```
///
/// The cursor is never persisted; closing the interaction is dropping
/// the value. Transitions consume the cursor and hand back the next
/// one, so a stale copy cannot leak back into the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationCursor {
    /// Main status the user drilled into, if any.
    pub selected_main: Option<String>,

    /// Whether the main-status list is the visible level.
    pub showing_main_list: bool,

    /// Live search input, applied at whichever level is visible.
    pub search_term: String,
}

impl NavigationCursor {
    /// A fresh cursor at the main-status list.
    pub fn open() -> NavigationCursor {
        NavigationCursor {
            selected_main: None,
            showing_main_list: true,
            search_term: String::new(),
        }
    }

    /// Drill into one main status, clearing the search. Pure UI
    /// transition: nothing is validated or persisted here.
    pub fn select_main(self, main: impl Into<String>) -> NavigationCursor {
        NavigationCursor {
            selected_main: Some(main.into()),
            showing_main_list: false,
            search_term: String::new(),
        }
    }

    /// Return to the main-status list, clearing the search.
    pub fn back_to_main_list(self) -> NavigationCursor {
        NavigationCursor::open()
    }

    /// Same level, new search input.
    pub fn with_search_term(mut self, term: impl Into<String>) -> NavigationCursor {
        self.search_term = term.into();
        self
    }
}

impl Default for NavigationCursor {
    fn default() -> Self {
        NavigationCursor::open()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_shows_main_list() {
        let cursor = NavigationCursor::open();
        assert!(cursor.showing_main_list);
        assert!(cursor.selected_main.is_none());
        assert!(cursor.search_term.is_empty());
    }

    #[test]
    fn select_then_back_round_trips() {
        let cursor = NavigationCursor::open()
            .select_main("Active Leads")
            .back_to_main_list();
        assert_eq!(cursor, NavigationCursor::open());
    }

    #[test]
    fn select_main_clears_search() {
        let cursor = NavigationCursor::open()
            .with_search_term("rejec")
            .select_main("Active Leads");
        assert_eq!(cursor.selected_main.as_deref(), Some("Active Leads"));
        assert!(!cursor.showing_main_list);
        assert!(cursor.search_term.is_empty());
    }

    #[test]
    fn search_term_keeps_level() {
        let cursor = NavigationCursor::open()
            .select_main("Active Leads")
            .with_search_term("fresh");
        assert_eq!(cursor.selected_main.as_deref(), Some("Active Leads"));
        assert_eq!(cursor.search_term, "fresh");
    }
}
