use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chip {
    pub label: String,
    pub on: bool,
}

/// A fixed row of independently togglable labels (raid days, attunements).
/// Any subset may be on; display order is the order the labels were given in.
#[derive(Debug, Clone, Default)]
pub struct ChipToggleSet {
    chips: Vec<Chip>,
}

impl ChipToggleSet {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::default();
        set.initialize(labels);
        set
    }

    /// Builds the set over `labels` with every label in `selected` switched on.
    /// Selected labels outside the universe are ignored; repeats do not cancel out.
    pub fn with_selected<I, S>(labels: I, selected: &[String]) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new(labels);
        for label in selected {
            if !set.set(label.trim(), true) {
                tracing::debug!("Ignoring unknown chip '{label}'");
            }
        }
        set
    }

    /// Replaces the universe. Every chip starts off.
    pub fn initialize<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.chips = labels
            .into_iter()
            .map(|label| Chip {
                label: label.into(),
                on: false,
            })
            .collect();
    }

    /// Flips one label. Returns its new state, or `None` for a label not in the set.
    pub fn toggle(&mut self, label: &str) -> Option<bool> {
        let chip = self.chips.iter_mut().find(|c| c.label == label)?;
        chip.on = !chip.on;
        Some(chip.on)
    }

    fn set(&mut self, label: &str, on: bool) -> bool {
        match self.chips.iter_mut().find(|c| c.label == label) {
            Some(chip) => {
                chip.on = on;
                true
            }
            None => false,
        }
    }

    pub fn is_on(&self, label: &str) -> bool {
        self.chips.iter().any(|c| c.on && c.label == label)
    }

    /// Labels currently on, in display order.
    pub fn current_on(&self) -> Vec<String> {
        self.chips
            .iter()
            .filter(|c| c.on)
            .map(|c| c.label.clone())
            .collect()
    }

    pub fn chips(&self) -> &[Chip] {
        &self.chips
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::taxonomy::{ATTUNEMENTS, DAYS};

    #[test]
    fn test_initialize_starts_all_off() {
        let set = ChipToggleSet::new(DAYS.iter().copied());
        assert_eq!(set.chips().len(), 7);
        assert!(set.current_on().is_empty());
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut set = ChipToggleSet::new(DAYS.iter().copied());
        assert_eq!(set.toggle("Wed"), Some(true));
        assert_eq!(set.toggle("Wed"), Some(false));
        assert!(!set.is_on("Wed"));
        assert!(set.current_on().is_empty());
    }

    #[test]
    fn test_current_on_follows_display_order() {
        let mut set = ChipToggleSet::new(DAYS.iter().copied());
        set.toggle("Sun");
        set.toggle("Mon");
        set.toggle("Thu");
        assert_eq!(set.current_on(), ["Mon", "Thu", "Sun"]);
    }

    #[test]
    fn test_all_on_is_valid() {
        let mut set = ChipToggleSet::new(ATTUNEMENTS.iter().copied());
        for label in ATTUNEMENTS {
            set.toggle(label);
        }
        assert_eq!(set.current_on(), ATTUNEMENTS);
    }

    #[test]
    fn test_toggle_unknown_label_is_noop() {
        let mut set = ChipToggleSet::new(DAYS.iter().copied());
        assert_eq!(set.toggle("Someday"), None);
        assert!(set.current_on().is_empty());
    }

    #[test]
    fn test_reinitialize_forgets_state() {
        let mut set = ChipToggleSet::new(DAYS.iter().copied());
        set.toggle("Mon");
        set.initialize(DAYS.iter().copied());
        assert!(set.current_on().is_empty());
    }

    #[test]
    fn test_with_selected_canonicalizes() {
        let selected = vec![
            "Fri".to_string(),
            "Tue".to_string(),
            "Fri".to_string(),
            "Holiday".to_string(),
        ];
        let set = ChipToggleSet::with_selected(DAYS.iter().copied(), &selected);
        assert_eq!(set.current_on(), ["Tue", "Fri"]);
    }
}
