//! The filter board: enabled flags, values and visual order of every filter.
//!
//! The DOM mirrors this model. Control events write into it, and after a
//! drag the order read back from the DOM is adopted through
//! [`FilterBoard::set_order`], which checks it is a permutation of the
//! catalog.

use std::collections::HashSet;

use thiserror::Error;

use super::filter::{FilterDefinition, FilterValue, Param};

/// Errors when adopting a new filter order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// The order has a different number of entries than the board
    #[error("Order has {found} entries, expected {expected}")]
    LengthMismatch { expected: usize, found: usize },

    /// The order names a filter that isn't on the board
    #[error("Unknown filter in order: {0}")]
    UnknownFilter(String),

    /// The order names a filter more than once
    #[error("Filter listed twice in order: {0}")]
    Duplicate(String),
}

/// State of one filter on the board.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterEntry {
    pub def: &'static FilterDefinition,
    pub enabled: bool,
    pub value: FilterValue,
}

impl FilterEntry {
    fn new(def: &'static FilterDefinition) -> Self {
        Self {
            def,
            enabled: false,
            value: def.default_value(),
        }
    }

    /// Name of the filter.
    pub fn name(&self) -> &'static str {
        self.def.name
    }
}

/// Ordered state of all filters.
#[derive(Debug, Clone)]
pub struct FilterBoard {
    catalog: &'static [FilterDefinition],
    entries: Vec<FilterEntry>,
}

impl FilterBoard {
    /// Create a board with every filter disabled at its defaults, in catalog order.
    pub fn new(catalog: &'static [FilterDefinition]) -> Self {
        Self {
            catalog,
            entries: catalog.iter().map(FilterEntry::new).collect(),
        }
    }

    /// Definitions in catalog order (independent of the visual order).
    pub fn catalog(&self) -> &'static [FilterDefinition] {
        self.catalog
    }

    /// Entries in visual order.
    pub fn entries(&self) -> &[FilterEntry] {
        &self.entries
    }

    /// Look up an entry by filter name.
    pub fn entry(&self, name: &str) -> Option<&FilterEntry> {
        self.entries.iter().find(|e| e.name() == name)
    }

    fn entry_mut(&mut self, name: &str) -> Option<&mut FilterEntry> {
        self.entries.iter_mut().find(|e| e.name() == name)
    }

    /// Filter names in visual order.
    pub fn order(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name().to_string()).collect()
    }

    /// Enable or disable a filter. Returns `false` for unknown names.
    pub fn set_enabled(&mut self, name: &str, enabled: bool) -> bool {
        match self.entry_mut(name) {
            Some(entry) => {
                entry.enabled = enabled;
                true
            }
            None => false,
        }
    }

    /// Set one parameter, snapped to its slider step.
    ///
    /// Returns the stored value, or `None` if the filter or parameter doesn't exist.
    pub fn set_value(&mut self, name: &str, param: Param, value: f64) -> Option<f64> {
        let entry = self.entry_mut(name)?;
        let spec = entry.def.param(param)?;
        let snapped = spec.range.snap(value);
        entry.value.set(param, snapped).then_some(snapped)
    }

    /// Move `name` in front of `anchor`, or to the end when `anchor` is `None`.
    ///
    /// Returns `true` if the order changed.
    pub fn move_before(&mut self, name: &str, anchor: Option<&str>) -> bool {
        if anchor == Some(name) {
            return false;
        }
        let Some(from) = self.entries.iter().position(|e| e.name() == name) else {
            return false;
        };
        let before = self.order();
        let entry = self.entries.remove(from);
        let to = match anchor {
            Some(anchor) => match self.entries.iter().position(|e| e.name() == anchor) {
                Some(index) => index,
                None => {
                    self.entries.insert(from, entry);
                    return false;
                }
            },
            None => self.entries.len(),
        };
        self.entries.insert(to, entry);
        self.order() != before
    }

    /// Adopt an order read back from the page.
    ///
    /// The order must name every filter exactly once.
    pub fn set_order<S: AsRef<str>>(&mut self, order: &[S]) -> Result<(), OrderError> {
        if order.len() != self.entries.len() {
            return Err(OrderError::LengthMismatch {
                expected: self.entries.len(),
                found: order.len(),
            });
        }

        let mut seen = HashSet::new();
        let mut reordered = Vec::with_capacity(order.len());
        for name in order {
            let name = name.as_ref();
            if !seen.insert(name) {
                return Err(OrderError::Duplicate(name.to_string()));
            }
            let entry = self
                .entry(name)
                .ok_or_else(|| OrderError::UnknownFilter(name.to_string()))?;
            reordered.push(entry.clone());
        }

        self.entries = reordered;
        Ok(())
    }

    /// Disable every filter and restore default values. The order is kept.
    pub fn reset_to_defaults(&mut self) {
        for entry in &mut self.entries {
            entry.enabled = false;
            entry.value = entry.def.default_value();
        }
    }

    /// Labels of enabled filters, in catalog order.
    pub fn active_labels(&self) -> Vec<&'static str> {
        self.catalog
            .iter()
            .filter(|def| self.entry(def.name).is_some_and(|e| e.enabled))
            .map(|def| def.label)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog;

    fn board() -> FilterBoard {
        FilterBoard::new(catalog::all())
    }

    #[test]
    fn test_new_board_matches_catalog() {
        let board = board();
        assert_eq!(board.entries().len(), catalog::all().len());
        assert!(board.entries().iter().all(|e| !e.enabled));
        assert_eq!(board.order()[0], "grayscale");
        assert_eq!(
            board.entry("brightness").unwrap().value,
            FilterValue::Pair {
                alpha: 1.0,
                beta: 0.0
            }
        );
    }

    #[test]
    fn test_set_value_snaps() {
        let mut board = board();
        assert_eq!(board.set_value("blur", Param::Value, 6.2), Some(7.0));
        assert_eq!(board.set_value("brightness", Param::Beta, -37.0), Some(-40.0));
        assert_eq!(board.set_value("blur", Param::Alpha, 1.0), None);
        assert_eq!(board.set_value("vignette", Param::Value, 1.0), None);
    }

    #[test]
    fn test_move_to_top() {
        let mut board = board();
        assert!(board.move_before("blur", Some("grayscale")));
        assert_eq!(board.order()[0], "blur");
        assert_eq!(board.order()[1], "grayscale");
        assert_eq!(board.order().len(), catalog::all().len());
    }

    #[test]
    fn test_move_to_end() {
        let mut board = board();
        assert!(board.move_before("grayscale", None));
        assert_eq!(board.order().last().map(String::as_str), Some("grayscale"));
        assert!(!board.move_before("grayscale", None));
    }

    #[test]
    fn test_move_noop_cases() {
        let mut board = board();
        assert!(!board.move_before("blur", Some("blur")));
        assert!(!board.move_before("blur", Some("edges")));
        assert!(!board.move_before("unknown", None));
        assert!(!board.move_before("blur", Some("unknown")));
        assert_eq!(board.order(), FilterBoard::new(catalog::all()).order());
    }

    #[test]
    fn test_set_order_requires_permutation() {
        let mut board = board();
        let mut order = board.order();
        order.reverse();
        assert!(board.set_order(&order).is_ok());
        assert_eq!(board.order(), order);

        assert_eq!(
            board.set_order(&order[1..]),
            Err(OrderError::LengthMismatch {
                expected: 10,
                found: 9
            })
        );

        let mut dup = order.clone();
        dup[1] = dup[0].clone();
        assert_eq!(board.set_order(&dup), Err(OrderError::Duplicate(dup[0].clone())));

        let mut unknown = order.clone();
        unknown[0] = "vignette".to_string();
        assert_eq!(
            board.set_order(&unknown),
            Err(OrderError::UnknownFilter("vignette".to_string()))
        );

        // Failed attempts leave the order untouched
        assert_eq!(board.order(), order);
    }

    #[test]
    fn test_reset_keeps_order() {
        let mut board = board();
        board.set_enabled("sepia", true);
        board.set_value("sepia", Param::Value, 1.7);
        board.move_before("sepia", Some("grayscale"));

        board.reset_to_defaults();
        let sepia = board.entry("sepia").unwrap();
        assert!(!sepia.enabled);
        assert_eq!(sepia.value, FilterValue::Single(1.0));
        assert_eq!(board.order()[0], "sepia");
    }

    #[test]
    fn test_active_labels_in_catalog_order() {
        let mut board = board();
        board.set_enabled("noise", true);
        board.set_enabled("grayscale", true);
        board.move_before("noise", Some("grayscale"));
        assert_eq!(board.active_labels(), vec!["Grayscale", "Noise"]);
    }
}
