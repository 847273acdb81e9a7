pub mod prefecture;

pub use prefecture::{
    GetPrefectureRequest, GetPrefectureResponse, MunicipalityResponse, PrefectureResponse,
};
