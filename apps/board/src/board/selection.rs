//! Dependent class → spec selectors.
//!
//! Two modes share one controller. `Filter` (search screens) always offers the
//! "any" sentinel and may leave class and spec unset. `Declare` (need rows,
//! player profiles) never offers it and always holds a concrete pair.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::taxonomy::{self, default_class, is_class, offers_spec, specs_for};

pub const ANY_CLASS_LABEL: &str = "Any class";
pub const ANY_SPEC_LABEL: &str = "Any spec";

/// One entry of a rendered selector. The sentinel has an empty `value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    fn any(label: &str) -> Self {
        Self {
            value: String::new(),
            label: label.to_string(),
        }
    }

    fn plain(value: &str) -> Self {
        Self {
            value: value.to_string(),
            label: value.to_string(),
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.value.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    #[default]
    Filter,
    Declare,
}

impl SelectionMode {
    pub fn offers_any(self) -> bool {
        matches!(self, SelectionMode::Filter)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Unknown class '{0}'")]
    UnknownClass(String),

    #[error("Spec '{spec}' is not offered for {class}")]
    SpecNotOffered { class: String, spec: String },

    #[error("A concrete {0} must be chosen")]
    ChoiceRequired(&'static str),
}

/// The current (class, spec) pair. `None` is the unset / "any" state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub spec: Option<String>,
}

/// Sentinel first (when requested), then every class in taxonomy order.
pub fn populate_classes(include_unset: bool) -> Vec<SelectOption> {
    let sentinel = include_unset.then(|| SelectOption::any(ANY_CLASS_LABEL));
    sentinel
        .into_iter()
        .chain(taxonomy::class_names().map(SelectOption::plain))
        .collect()
}

/// Sentinel first (when requested), then the specs of `current_class`.
/// An unset class falls back to the first class so the control is never empty.
pub fn populate_specs(current_class: Option<&str>, include_unset: bool) -> Vec<SelectOption> {
    let basis = normalize(current_class).unwrap_or(default_class());
    let sentinel = include_unset.then(|| SelectOption::any(ANY_SPEC_LABEL));
    sentinel
        .into_iter()
        .chain(specs_for(basis).iter().copied().map(SelectOption::plain))
        .collect()
}

fn normalize(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[derive(Debug, Clone)]
pub struct SelectionController {
    mode: SelectionMode,
    selection: Selection,
    spec_options: Vec<SelectOption>,
}

impl SelectionController {
    pub fn new(mode: SelectionMode) -> Self {
        let class = match mode {
            SelectionMode::Filter => None,
            SelectionMode::Declare => Some(default_class().to_string()),
        };
        let mut controller = Self {
            mode,
            selection: Selection { class, spec: None },
            spec_options: Vec::new(),
        };
        controller.rebuild_specs(None);
        controller
    }

    /// Replays a snapshot from the UI: the class change first, then the spec pick.
    /// A missing spec keeps whatever default the class change produced.
    pub fn restore(mode: SelectionMode, snapshot: &Selection) -> Result<Self, SelectionError> {
        let mut controller = Self::new(mode);
        let class = normalize(snapshot.class.as_deref());
        if class.is_some() || mode.offers_any() {
            controller.on_class_changed(class)?;
        }
        if let Some(spec) = normalize(snapshot.spec.as_deref()) {
            controller.pick_spec(Some(spec))?;
        }
        Ok(controller)
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn class_options(&self) -> Vec<SelectOption> {
        populate_classes(self.mode.offers_any())
    }

    pub fn spec_options(&self) -> &[SelectOption] {
        &self.spec_options
    }

    /// Rebuilds the spec list for `new_class`. The previous spec survives only
    /// if the new class also offers it; otherwise it falls back to the mode's default.
    pub fn on_class_changed(&mut self, new_class: Option<&str>) -> Result<(), SelectionError> {
        let new_class = normalize(new_class);
        match new_class {
            None if !self.mode.offers_any() => return Err(SelectionError::ChoiceRequired("class")),
            Some(class) if !is_class(class) => {
                return Err(SelectionError::UnknownClass(class.to_string()))
            }
            _ => {}
        }

        let previous = self.selection.spec.take();
        self.selection.class = new_class.map(str::to_string);
        self.rebuild_specs(previous);
        Ok(())
    }

    /// A direct pick from the spec selector. `None` selects the sentinel,
    /// which only filter mode offers.
    pub fn pick_spec(&mut self, spec: Option<&str>) -> Result<(), SelectionError> {
        match normalize(spec) {
            None if self.mode.offers_any() => {
                self.selection.spec = None;
                Ok(())
            }
            None => Err(SelectionError::ChoiceRequired("spec")),
            Some(spec) if offers_spec(self.basis(), spec) => {
                self.selection.spec = Some(spec.to_string());
                Ok(())
            }
            Some(spec) => Err(SelectionError::SpecNotOffered {
                class: self.basis().to_string(),
                spec: spec.to_string(),
            }),
        }
    }

    fn basis(&self) -> &str {
        self.selection.class.as_deref().unwrap_or(default_class())
    }

    fn default_spec(&self) -> Option<String> {
        match self.mode {
            SelectionMode::Filter => None,
            SelectionMode::Declare => specs_for(self.basis()).first().map(|s| s.to_string()),
        }
    }

    fn rebuild_specs(&mut self, previous: Option<String>) {
        self.spec_options =
            populate_specs(self.selection.class.as_deref(), self.mode.offers_any());
        let spec = match previous {
            Some(spec) if offers_spec(self.basis(), &spec) => Some(spec),
            _ => self.default_spec(),
        };
        self.selection.spec = spec;
    }
}
