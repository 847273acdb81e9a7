//! Prefecture and municipality entities.

use serde::{Deserialize, Serialize};

/// A prefecture together with its municipalities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prefecture {
    pub id: i32,

    /// Two-digit JIS prefecture code (e.g. "01", "13")
    pub code: String,

    pub name: String,

    #[serde(default)]
    pub municipalities: Vec<Municipality>,
}

impl Prefecture {
    /// Copy of this prefecture keeping only active municipalities
    pub fn with_active_municipalities(&self) -> Self {
        Self {
            id: self.id,
            code: self.code.clone(),
            name: self.name.clone(),
            municipalities: self
                .municipalities
                .iter()
                .filter(|m| m.is_active)
                .cloned()
                .collect(),
        }
    }
}

/// A municipality (city, ward, town or village)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Municipality {
    pub id: i32,
    pub prefecture_code: String,
    /// Six-digit local government organization code
    pub organization_code: String,
    pub prefecture_name_kanji: String,
    pub municipality_name_kanji: String,
    pub prefecture_name_kana: String,
    pub municipality_name_kana: String,
    pub is_active: bool,
}
