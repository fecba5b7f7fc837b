//! Guest tab navigation.
//!
//! The active tab is never stored. It is derived from the final segment of
//! the current route every time it is asked for, so the tab bar can only
//! ever highlight one item (or none, for a route no tab owns).

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Maximum number of previous routes remembered for [`NavigationState::back`].
const MAX_HISTORY: usize = 16;

/// A tab in the guest app's bottom navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Stable identifier, also the route segment the tab owns.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Route the tab links to.
    pub href: String,
}

impl NavItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            href: href.into(),
        }
    }
}

/// The guest app's default tabs.
pub fn default_items() -> Vec<NavItem> {
    vec![
        NavItem::new("resorts", "Resorts", "/huesped/resorts"),
        NavItem::new("reservations", "Reservas", "/huesped/reservations"),
        NavItem::new("account", "Cuenta", "/huesped/account"),
    ]
}

/// Extract the final segment of a route.
///
/// Query strings and fragments are ignored and trailing slashes are
/// normalized away. Returns `None` for an empty route.
pub fn last_segment(path: &str) -> Option<&str> {
    let path = path.split(|c: char| c == '?' || c == '#').next().unwrap_or_default();
    let segment = path.trim_end_matches('/').rsplit('/').next()?;
    if segment.is_empty() {
        None
    } else {
        Some(segment)
    }
}

/// Return the id of the tab whose href ends in the same segment as `path`.
///
/// When several tabs share a final segment the first one wins, so at most
/// one id is ever returned.
pub fn compute_active_tab<'a>(path: &str, items: &'a [NavItem]) -> Option<&'a str> {
    let segment = last_segment(path)?;
    items
        .iter()
        .find(|item| last_segment(&item.href) == Some(segment))
        .map(|item| item.id.as_str())
}

/// Current route plus the fixed tab list it is matched against.
#[derive(Debug, Clone)]
pub struct NavigationState {
    items: Vec<NavItem>,
    current_path: String,
    history: VecDeque<String>,
}

impl NavigationState {
    /// Create a navigation state starting at `initial_path`.
    pub fn new(items: Vec<NavItem>, initial_path: impl Into<String>) -> Self {
        Self {
            items,
            current_path: initial_path.into(),
            history: VecDeque::new(),
        }
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// Id of the highlighted tab, if the current route belongs to one.
    pub fn active_tab(&self) -> Option<&str> {
        compute_active_tab(&self.current_path, &self.items)
    }

    /// Index of the highlighted tab in [`Self::items`].
    pub fn active_index(&self) -> Option<usize> {
        let id = self.active_tab()?;
        self.items.iter().position(|item| item.id == id)
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_tab() == Some(id)
    }

    /// Move to a new route, remembering the current one.
    ///
    /// Navigating to the route already shown is a no-op.
    pub fn navigate(&mut self, path: impl Into<String>) {
        let path = path.into();
        if path == self.current_path {
            return;
        }
        tracing::debug!(from = %self.current_path, to = %path, "navigate");
        let previous = std::mem::replace(&mut self.current_path, path);
        self.history.push_back(previous);
        if self.history.len() > MAX_HISTORY {
            self.history.pop_front();
        }
    }

    /// Return to the previous route. Returns false if there is none.
    pub fn back(&mut self) -> bool {
        match self.history.pop_back() {
            Some(previous) => {
                self.current_path = previous;
                true
            }
            None => false,
        }
    }

    /// Navigate to the tab after the active one, wrapping around.
    ///
    /// From a route no tab owns this goes to the first tab.
    pub fn next_tab(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let next = match self.active_index() {
            Some(i) => (i + 1) % self.items.len(),
            None => 0,
        };
        let href = self.items[next].href.clone();
        self.navigate(href);
    }

    /// Navigate to the tab before the active one, wrapping around.
    ///
    /// From a route no tab owns this goes to the last tab.
    pub fn prev_tab(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let len = self.items.len();
        let prev = match self.active_index() {
            Some(i) => (i + len - 1) % len,
            None => len - 1,
        };
        let href = self.items[prev].href.clone();
        self.navigate(href);
    }

    /// Navigate directly to the tab at `index`, if it exists.
    pub fn select_tab(&mut self, index: usize) {
        if let Some(item) = self.items.get(index) {
            let href = item.href.clone();
            self.navigate(href);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_route_is_active() {
        let items = default_items();
        assert_eq!(compute_active_tab("/huesped/account", &items), Some("account"));
    }

    #[test]
    fn test_trailing_slash_is_normalized() {
        let items = default_items();
        assert_eq!(compute_active_tab("/huesped/resorts/", &items), Some("resorts"));
        assert_eq!(compute_active_tab("/huesped/resorts//", &items), Some("resorts"));
    }

    #[test]
    fn test_result_same_with_or_without_trailing_slash() {
        let items = default_items();
        for path in [
            "/huesped/account",
            "/huesped/reservations",
            "/huesped/unknown",
            "/huesped",
            "resorts",
        ] {
            let with_slash = format!("{}/", path);
            assert_eq!(
                compute_active_tab(path, &items),
                compute_active_tab(&with_slash, &items),
                "path {}",
                path
            );
        }
    }

    #[test]
    fn test_empty_path_has_no_active_tab() {
        let items = default_items();
        assert_eq!(compute_active_tab("", &items), None);
        assert_eq!(compute_active_tab("/", &items), None);
        assert_eq!(compute_active_tab("///", &items), None);
    }

    #[test]
    fn test_unmatched_route_has_no_active_tab() {
        let items = default_items();
        assert_eq!(compute_active_tab("/huesped/spa", &items), None);
        assert_eq!(compute_active_tab("/huesped/account/settings", &items), None);
    }

    #[test]
    fn test_query_and_fragment_are_ignored() {
        let items = default_items();
        assert_eq!(compute_active_tab("/huesped/account?tab=2", &items), Some("account"));
        assert_eq!(compute_active_tab("/huesped/resorts/#top", &items), Some("resorts"));
    }

    #[test]
    fn test_result_is_always_a_known_id() {
        let items = default_items();
        let paths = [
            "/huesped/account",
            "/a/b/c",
            "reservations",
            "/x/resorts/",
            "",
            "?",
            "#resorts",
        ];
        for path in paths {
            if let Some(id) = compute_active_tab(path, &items) {
                assert!(items.iter().any(|item| item.id == id), "{} -> {}", path, id);
            }
        }
    }

    #[test]
    fn test_empty_items_never_match() {
        assert_eq!(compute_active_tab("/huesped/account", &[]), None);
    }

    #[test]
    fn test_first_item_wins_on_duplicate_segment() {
        let items = vec![
            NavItem::new("first", "First", "/a/home"),
            NavItem::new("second", "Second", "/b/home"),
        ];
        assert_eq!(compute_active_tab("/c/home", &items), Some("first"));
    }

    #[test]
    fn test_href_of_root_never_matches() {
        let items = vec![NavItem::new("root", "Root", "/")];
        assert_eq!(compute_active_tab("/", &items), None);
    }

    #[test]
    fn test_exactly_one_active_flag() {
        let nav = NavigationState::new(default_items(), "/huesped/reservations");
        let active: Vec<_> = nav.items().iter().filter(|i| nav.is_active(&i.id)).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, "reservations");
        assert_eq!(nav.active_index(), Some(1));
    }

    #[test]
    fn test_next_and_prev_wrap() {
        let mut nav = NavigationState::new(default_items(), "/huesped/account");
        nav.next_tab();
        assert_eq!(nav.active_tab(), Some("resorts"));
        nav.prev_tab();
        assert_eq!(nav.active_tab(), Some("account"));
    }

    #[test]
    fn test_cycle_from_unmatched_route() {
        let mut nav = NavigationState::new(default_items(), "/huesped/spa");
        nav.next_tab();
        assert_eq!(nav.active_tab(), Some("resorts"));

        let mut nav = NavigationState::new(default_items(), "/huesped/spa");
        nav.prev_tab();
        assert_eq!(nav.active_tab(), Some("account"));
    }

    #[test]
    fn test_back_restores_previous_route() {
        let mut nav = NavigationState::new(default_items(), "/huesped/resorts");
        nav.navigate("/huesped/account");
        nav.navigate("/huesped/spa");
        assert_eq!(nav.active_tab(), None);

        assert!(nav.back());
        assert_eq!(nav.current_path(), "/huesped/account");
        assert!(nav.back());
        assert_eq!(nav.current_path(), "/huesped/resorts");
        assert!(!nav.back());
    }

    #[test]
    fn test_navigate_to_same_route_keeps_history() {
        let mut nav = NavigationState::new(default_items(), "/huesped/resorts");
        nav.navigate("/huesped/resorts");
        assert!(!nav.back());
    }

    #[test]
    fn test_history_is_bounded() {
        let mut nav = NavigationState::new(default_items(), "/r/0");
        for i in 1..=40 {
            nav.navigate(format!("/r/{}", i));
        }
        let mut steps = 0;
        while nav.back() {
            steps += 1;
        }
        assert_eq!(steps, MAX_HISTORY);
        assert_eq!(nav.current_path(), "/r/24");
    }

    #[test]
    fn test_select_tab_out_of_range_is_ignored() {
        let mut nav = NavigationState::new(default_items(), "/huesped/resorts");
        nav.select_tab(7);
        assert_eq!(nav.active_tab(), Some("resorts"));
        nav.select_tab(2);
        assert_eq!(nav.active_tab(), Some("account"));
    }
}
