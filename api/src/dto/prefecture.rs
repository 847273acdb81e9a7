use serde::{Deserialize, Serialize};
use validator::Validate;

use geo_core::domain::entities::prefecture::{Municipality, Prefecture};

use crate::validation::{Field, FieldLabels};

/// Path parameters of `GET /prefectures/{code}`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GetPrefectureRequest {
    /// Two-digit prefecture code, e.g. "13"
    #[validate(
        required,
        custom(function = "crate::validation::rules::numeric"),
        length(equal = 2)
    )]
    pub code: Option<String>,
}

impl FieldLabels for GetPrefectureRequest {
    const FIELDS: &'static [Field] = &[Field::labelled(
        "code",
        "都道府県コード",
        &["required", "numeric", "length"],
    )];
}

impl GetPrefectureRequest {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
        }
    }
}

/// Entry of the prefecture list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefectureResponse {
    pub id: i32,
    pub code: String,
    pub name: String,
}

impl From<Prefecture> for PrefectureResponse {
    fn from(prefecture: Prefecture) -> Self {
        Self {
            id: prefecture.id,
            code: prefecture.code,
            name: prefecture.name,
        }
    }
}

/// Prefecture detail with its active municipalities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetPrefectureResponse {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub municipalities: Vec<MunicipalityResponse>,
}

impl From<Prefecture> for GetPrefectureResponse {
    fn from(prefecture: Prefecture) -> Self {
        Self {
            id: prefecture.id,
            code: prefecture.code,
            name: prefecture.name,
            municipalities: prefecture
                .municipalities
                .into_iter()
                .map(MunicipalityResponse::from)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MunicipalityResponse {
    pub id: i32,
    pub prefecture_code: String,
    pub organization_code: String,
    pub prefecture_name_kanji: String,
    pub municipality_name_kanji: String,
    pub prefecture_name_kana: String,
    pub municipality_name_kana: String,
    pub is_active: bool,
}

impl From<Municipality> for MunicipalityResponse {
    fn from(m: Municipality) -> Self {
        Self {
            id: m.id,
            prefecture_code: m.prefecture_code,
            organization_code: m.organization_code,
            prefecture_name_kanji: m.prefecture_name_kanji,
            municipality_name_kanji: m.municipality_name_kanji,
            prefecture_name_kana: m.prefecture_name_kana,
            municipality_name_kana: m.municipality_name_kana,
            is_active: m.is_active,
        }
    }
}
