use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub const NO_NEEDS_YET: &str = "No needs added yet.";

/// One recruitment need. Stored guilds hold needs as free-form objects, so
/// decoding never fails: see `From<Value>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct NeedRecord {
    pub class: String,
    pub spec: String,
    pub role: String,
    pub prio: Option<i64>,
}

/// Strings as-is, numbers and booleans printed, anything else empty.
fn scalar_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Whole numbers only, whether sent as a number or as text.
fn lenient_prio(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

impl From<Value> for NeedRecord {
    fn from(value: Value) -> Self {
        let class = match scalar_text(value.get("class")) {
            class if class.trim().is_empty() => scalar_text(value.get("class_name")),
            class => class,
        };
        Self {
            class,
            spec: scalar_text(value.get("spec")),
            role: scalar_text(value.get("role")),
            prio: lenient_prio(value.get("prio")),
        }
    }
}

impl NeedRecord {
    pub fn new(
        class: impl Into<String>,
        spec: impl Into<String>,
        role: impl Into<String>,
        prio: i64,
    ) -> Self {
        Self {
            class: class.into(),
            spec: spec.into(),
            role: role.into(),
            prio: Some(prio),
        }
    }

    fn prio_label(&self) -> String {
        self.prio.map(|p| p.to_string()).unwrap_or_default()
    }

    /// Row text in the needs editor.
    pub fn line(&self) -> String {
        format!(
            "{} {} | {} | Prio {}",
            self.class,
            self.spec,
            self.role,
            self.prio_label()
        )
    }

    /// Badge text on a rendered guild. An empty spec leaves no gap.
    pub fn badge(&self) -> String {
        let spec = if self.spec.is_empty() {
            String::new()
        } else {
            format!(" {}", self.spec)
        };
        format!(
            "Need: {}{} ({}) Prio {}",
            self.class,
            spec,
            self.role,
            self.prio_label()
        )
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NeedsError {
    #[error("No need at position {index} (list holds {len})")]
    OutOfRange { index: usize, len: usize },
}

/// The needs being edited in one guild-creation form. Positions stay contiguous.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NeedsList {
    items: Vec<NeedRecord>,
}

impl NeedsList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends without deduplication; the same (class, spec, role) may repeat.
    pub fn add(
        &mut self,
        class: impl Into<String>,
        spec: impl Into<String>,
        role: impl Into<String>,
        prio: i64,
    ) {
        self.push(NeedRecord::new(class, spec, role, prio));
    }

    pub fn push(&mut self, need: NeedRecord) {
        self.items.push(need);
    }

    /// Removes one need and shifts the rest down. Out-of-range positions leave
    /// the list untouched.
    pub fn remove_at(&mut self, index: usize) -> Result<NeedRecord, NeedsError> {
        if index >= self.items.len() {
            return Err(NeedsError::OutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    /// An owned copy for submission; later edits do not reach it.
    pub fn snapshot(&self) -> Vec<NeedRecord> {
        self.items.clone()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn lines(&self) -> Vec<String> {
        self.items.iter().map(NeedRecord::line).collect()
    }
}

impl From<Vec<NeedRecord>> for NeedsList {
    fn from(items: Vec<NeedRecord>) -> Self {
        Self { items }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_appends_in_order() {
        let mut needs = NeedsList::new();
        needs.add("Priest", "Holy", "Heal", 1);
        needs.add("Warrior", "Protection", "Tank", 2);
        let snapshot = needs.snapshot();
        assert_eq!(snapshot[0].class, "Priest");
        assert_eq!(snapshot[1].class, "Warrior");
    }

    #[test]
    fn test_duplicates_are_allowed() {
        let mut needs = NeedsList::new();
        needs.add("Priest", "Holy", "Heal", 1);
        needs.add("Priest", "Holy", "Heal", 3);
        assert_eq!(needs.len(), 2);
    }

    #[test]
    fn test_remove_front_until_empty() {
        let mut needs = NeedsList::new();
        let n = 4;
        for prio in 0..n {
            needs.add("Mage", "Frost", "DPS", prio);
        }
        for _ in 0..n {
            assert!(needs.remove_at(0).is_ok());
        }
        assert!(needs.is_empty());
    }

    #[test]
    fn test_remove_shifts_later_items_down() {
        let mut needs = NeedsList::new();
        needs.add("Rogue", "Combat", "DPS", 1);
        needs.add("Druid", "Feral", "Tank", 2);
        needs.add("Shaman", "Restoration", "Heal", 3);

        let removed = needs.remove_at(1).unwrap();
        assert_eq!(removed.class, "Druid");
        let classes: Vec<_> = needs.snapshot().into_iter().map(|n| n.class).collect();
        assert_eq!(classes, ["Rogue", "Shaman"]);
    }

    #[test]
    fn test_remove_out_of_range_leaves_list_unchanged() {
        let mut needs = NeedsList::new();
        needs.add("Hunter", "Survival", "DPS", 2);
        let before = needs.clone();
        assert_eq!(
            needs.remove_at(5),
            Err(NeedsError::OutOfRange { index: 5, len: 1 })
        );
        assert_eq!(needs, before);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut needs = NeedsList::new();
        needs.add("Warlock", "Affliction", "DPS", 3);
        let snapshot = needs.snapshot();
        needs.remove_at(0).unwrap();
        needs.add("Paladin", "Holy", "Heal", 1);
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].class, "Warlock");
    }

    #[test]
    fn test_line_and_badge_text() {
        let need = NeedRecord::new("Warrior", "Fury", "DPS", 3);
        assert_eq!(need.line(), "Warrior Fury | DPS | Prio 3");
        assert_eq!(need.badge(), "Need: Warrior Fury (DPS) Prio 3");

        let specless = NeedRecord::new("Druid", "", "Heal", 1);
        assert_eq!(specless.badge(), "Need: Druid (Heal) Prio 1");
    }

    #[test]
    fn test_decodes_class_name_alias_and_nulls() {
        let json = r#"{"class_name": "Mage", "spec": null, "role": "DPS"}"#;
        let need: NeedRecord = serde_json::from_str(json).unwrap();
        assert_eq!(need.class, "Mage");
        assert_eq!(need.spec, "");
        assert_eq!(need.prio, None);
        assert_eq!(need.badge(), "Need: Mage (DPS) Prio ");
    }

    #[test]
    fn test_class_wins_over_class_name_unless_empty() {
        let json = r#"{"class": "", "class_name": "Mage", "role": "DPS", "prio": 2}"#;
        let need: NeedRecord = serde_json::from_str(json).unwrap();
        assert_eq!(need.class, "Mage");
        assert_eq!(need.prio, Some(2));

        let json = r#"{"class": "Priest", "class_name": "Mage", "role": "Heal"}"#;
        let need: NeedRecord = serde_json::from_str(json).unwrap();
        assert_eq!(need.class, "Priest");
    }

    #[test]
    fn test_prio_accepts_any_scalar() {
        let decode = |prio: &str| {
            let json = format!(r#"{{"class": "Mage", "prio": {prio}}}"#);
            serde_json::from_str::<NeedRecord>(&json).unwrap().prio
        };
        assert_eq!(decode(r#""3""#), Some(3));
        assert_eq!(decode("4.0"), Some(4));
        assert_eq!(decode("2.5"), None);
        assert_eq!(decode(r#""high""#), None);
        assert_eq!(decode("null"), None);
        assert_eq!(decode("[1]"), None);
    }

    #[test]
    fn test_odd_shapes_still_decode() {
        let needs: Vec<NeedRecord> =
            serde_json::from_str(r#"["Mage", 7, null, {"class": 5, "role": true}]"#).unwrap();
        assert_eq!(needs.len(), 4);
        assert_eq!(needs[0], NeedRecord::default());
        assert_eq!(needs[3].class, "5");
        assert_eq!(needs[3].role, "true");
    }

    #[test]
    fn test_serializes_class_key() {
        let value = serde_json::to_value(NeedRecord::new("Rogue", "Combat", "DPS", 2)).unwrap();
        assert_eq!(value["class"], "Rogue");
        assert_eq!(value["prio"], 2);
    }
}
