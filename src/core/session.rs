//! Session state: the current input selection, the conversion history, and
//! the favorites list.
//!
//! One logical owner per session. State is constructed at session start,
//! mutated only by user actions, and discarded at session end; nothing is
//! persisted.

use std::sync::{Mutex, MutexGuard};

use crate::shared::error::{AppError, AppResult};
use crate::shared::types::{Category, ConversionRecord, Favorite, Selection};

/// Single-owner session state. The presentation layer goes through
/// [`Session`] (the Tauri managed-state wrapper) and never touches fields
/// directly.
pub struct SessionState {
    selection: Selection,
    /// Newest-last internally; consumers display reversed.
    history: Vec<ConversionRecord>,
    favorites: Vec<Favorite>,
}

impl SessionState {
    pub fn new() -> Self {
        let category = Category::Length;
        let unit = category.first_unit();
        Self {
            selection: Selection {
                category,
                value: 1.0,
                from_unit: unit.to_string(),
                to_unit: unit.to_string(),
            },
            history: Vec::new(),
            favorites: Vec::new(),
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Replace the current snapshot, returning the stored selection, or
    /// `None` when all four fields match the previous snapshot exactly.
    ///
    /// The dirty check keeps redundant refresh cycles from re-appending
    /// identical history entries downstream. A category switch resets both
    /// units to the new category's first declared unit rather than carrying
    /// unit names across categories.
    pub fn set_selection(
        &mut self,
        category: Category,
        value: f64,
        from_unit: &str,
        to_unit: &str,
    ) -> Option<Selection> {
        let unchanged = category == self.selection.category
            && value == self.selection.value
            && from_unit == self.selection.from_unit
            && to_unit == self.selection.to_unit;
        if unchanged {
            return None;
        }

        let (from_unit, to_unit) = if category != self.selection.category {
            let first = category.first_unit();
            (first.to_string(), first.to_string())
        } else {
            (from_unit.to_string(), to_unit.to_string())
        };

        self.selection = Selection {
            category,
            value,
            from_unit,
            to_unit,
        };
        Some(self.selection.clone())
    }

    /// Append one completed conversion. Unbounded within a session.
    pub fn record_conversion(&mut self, record: ConversionRecord) {
        self.history.push(record);
    }

    /// History in display order, newest first.
    pub fn history(&self) -> impl Iterator<Item = &ConversionRecord> {
        self.history.iter().rev()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Favorite names are unique: adding under a taken name fails with
    /// [`AppError::DuplicateFavorite`] instead of stacking a second entry
    /// behind the same removal key.
    pub fn add_favorite(
        &mut self,
        name: &str,
        category: Category,
        from_unit: &str,
        to_unit: &str,
    ) -> AppResult<()> {
        if self.favorites.iter().any(|favorite| favorite.name == name) {
            return Err(AppError::DuplicateFavorite(name.to_string()));
        }
        self.favorites.push(Favorite {
            name: name.to_string(),
            category,
            from_unit: from_unit.to_string(),
            to_unit: to_unit.to_string(),
        });
        Ok(())
    }

    /// Remove every favorite matching `name`; absent names are a no-op.
    pub fn remove_favorite(&mut self, name: &str) {
        self.favorites.retain(|favorite| favorite.name != name);
    }

    /// Favorites in insertion order.
    pub fn favorites(&self) -> &[Favorite] {
        &self.favorites
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Session state wrapper handed to `app.manage`.
///
/// Commands arrive sequentially per session, but Tauri managed state must
/// still be `Sync`, so the state sits behind a mutex.
pub struct Session {
    state: Mutex<SessionState>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(SessionState::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                eprintln!("[Session] State mutex poisoned, recovering...");
                poisoned.into_inner()
            }
        }
    }

    pub fn selection(&self) -> Selection {
        self.lock().selection().clone()
    }

    pub fn set_selection(
        &self,
        category: Category,
        value: f64,
        from_unit: &str,
        to_unit: &str,
    ) -> Option<Selection> {
        self.lock().set_selection(category, value, from_unit, to_unit)
    }

    pub fn record_conversion(&self, record: ConversionRecord) {
        self.lock().record_conversion(record);
    }

    /// History snapshot in display order, newest first.
    pub fn history(&self) -> Vec<ConversionRecord> {
        self.lock().history().cloned().collect()
    }

    pub fn clear_history(&self) {
        self.lock().clear_history();
    }

    pub fn add_favorite(
        &self,
        name: &str,
        category: Category,
        from_unit: &str,
        to_unit: &str,
    ) -> AppResult<()> {
        self.lock().add_favorite(name, category, from_unit, to_unit)
    }

    pub fn remove_favorite(&self, name: &str) {
        self.lock().remove_favorite(name);
    }

    pub fn favorites(&self) -> Vec<Favorite> {
        self.lock().favorites().to_vec()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(category: Category, value: f64, from: &str, result: f64, to: &str) -> ConversionRecord {
        ConversionRecord::new(category, value, from, result, to)
    }

    #[test]
    fn starts_with_default_selection_and_empty_state() {
        let state = SessionState::new();
        assert_eq!(state.selection().category, Category::Length);
        assert_eq!(state.selection().from_unit, "meters");
        assert_eq!(state.selection().to_unit, "meters");
        assert_eq!(state.history().count(), 0);
        assert!(state.favorites().is_empty());
    }

    #[test]
    fn identical_selection_is_a_no_op() {
        let mut state = SessionState::new();
        assert!(state
            .set_selection(Category::Length, 5.0, "feet", "meters")
            .is_some());
        assert!(state
            .set_selection(Category::Length, 5.0, "feet", "meters")
            .is_none());
        assert_eq!(state.selection().from_unit, "feet");
    }

    #[test]
    fn category_switch_resets_units_to_first_declared() {
        let mut state = SessionState::new();
        state.set_selection(Category::Length, 5.0, "feet", "meters");

        let selection = state
            .set_selection(Category::Weight, 5.0, "feet", "meters")
            .expect("category switch is a change");
        assert_eq!(selection.category, Category::Weight);
        assert_eq!(selection.from_unit, "grams");
        assert_eq!(selection.to_unit, "grams");
    }

    #[test]
    fn units_survive_resubmission_after_category_switch() {
        // Favorite recall across categories: the switch resets units, the
        // follow-up same-category submission applies the bookmarked pair
        let mut state = SessionState::new();
        state.set_selection(Category::Weight, 2.0, "pounds", "ounces");

        let switched = state
            .set_selection(Category::Speed, 2.0, "mph", "knots")
            .expect("category switch is a change");
        assert_eq!(switched.from_unit, "m/s");
        assert_eq!(switched.to_unit, "m/s");

        let recalled = state
            .set_selection(Category::Speed, 2.0, "mph", "knots")
            .expect("unit pick after the switch is a change");
        assert_eq!(recalled.from_unit, "mph");
        assert_eq!(recalled.to_unit, "knots");
    }

    #[test]
    fn history_displays_newest_first() {
        let mut state = SessionState::new();
        state.record_conversion(record(Category::Length, 1.0, "meters", 100.0, "centimeters"));
        state.record_conversion(record(Category::Time, 2.0, "hours", 120.0, "minutes"));

        let values: Vec<f64> = state.history().map(|r| r.value).collect();
        assert_eq!(values, vec![2.0, 1.0]);
    }

    #[test]
    fn clear_history_empties_the_sequence() {
        let mut state = SessionState::new();
        state.record_conversion(record(Category::Length, 1.0, "meters", 100.0, "centimeters"));
        state.clear_history();
        assert_eq!(state.history().count(), 0);
    }

    #[test]
    fn duplicate_favorite_name_is_rejected() {
        let mut state = SessionState::new();
        state
            .add_favorite("commute", Category::Length, "miles", "kilometers")
            .unwrap();

        let err = state
            .add_favorite("commute", Category::Speed, "mph", "km/h")
            .unwrap_err();
        assert!(matches!(err, AppError::DuplicateFavorite(_)));
        assert_eq!(state.favorites().len(), 1);
    }

    #[test]
    fn remove_favorite_is_a_no_op_when_absent() {
        let mut state = SessionState::new();
        state
            .add_favorite("commute", Category::Length, "miles", "kilometers")
            .unwrap();

        state.remove_favorite("unknown");
        assert_eq!(state.favorites().len(), 1);

        state.remove_favorite("commute");
        assert!(state.favorites().is_empty());
    }

    #[test]
    fn favorites_keep_insertion_order() {
        let mut state = SessionState::new();
        state
            .add_favorite("a", Category::Length, "miles", "kilometers")
            .unwrap();
        state
            .add_favorite("b", Category::Time, "hours", "minutes")
            .unwrap();

        let names: Vec<&str> = state.favorites().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn session_wrapper_round_trips_state() {
        let session = Session::new();
        session.set_selection(Category::DataStorage, 1.0, "gigabytes", "megabytes");
        session.record_conversion(record(
            Category::DataStorage,
            1.0,
            "gigabytes",
            1024.0,
            "megabytes",
        ));

        assert_eq!(session.selection().category, Category::DataStorage);
        assert_eq!(session.history().len(), 1);
        session.clear_history();
        assert!(session.history().is_empty());
    }
}
