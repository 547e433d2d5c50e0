//! Sparse search queries. A field makes it into the query only when its
//! trimmed value is non-empty; values are never coerced.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Query parameter name → value.
pub type FilterParams = BTreeMap<String, String>;

#[derive(Debug, Default)]
pub struct FilterQueryBuilder {
    params: FilterParams,
}

impl FilterQueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: &str, value: Option<&str>) -> Self {
        if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
            self.params.insert(name.to_string(), value.to_string());
        }
        self
    }

    pub fn build(self) -> FilterParams {
        self.params
    }
}

/// Guild search screen.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GuildFilterForm {
    pub realm: Option<String>,
    pub faction: Option<String>,
    pub language: Option<String>,
    pub q: Option<String>,
    pub need_class: Option<String>,
    pub need_role: Option<String>,
}

impl GuildFilterForm {
    pub fn to_params(&self) -> FilterParams {
        FilterQueryBuilder::new()
            .field("realm", self.realm.as_deref())
            .field("faction", self.faction.as_deref())
            .field("language", self.language.as_deref())
            .field("q", self.q.as_deref())
            .field("need_class", self.need_class.as_deref())
            .field("need_role", self.need_role.as_deref())
            .build()
    }
}

/// Player search screen. `min_skill` stays a string; the server parses it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerFilterForm {
    pub realm: Option<String>,
    pub faction: Option<String>,
    pub language: Option<String>,
    pub q: Option<String>,
    pub class_name: Option<String>,
    pub spec: Option<String>,
    pub role: Option<String>,
    pub min_skill: Option<String>,
}

impl PlayerFilterForm {
    pub fn to_params(&self) -> FilterParams {
        FilterQueryBuilder::new()
            .field("realm", self.realm.as_deref())
            .field("faction", self.faction.as_deref())
            .field("language", self.language.as_deref())
            .field("q", self.q.as_deref())
            .field("class_name", self.class_name.as_deref())
            .field("spec", self.spec.as_deref())
            .field("role", self.role.as_deref())
            .field("min_skill", self.min_skill.as_deref())
            .build()
    }
}
