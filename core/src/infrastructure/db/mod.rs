use sea_orm::prelude::Json;

pub mod postgres;

/// String lists are stored as JSON arrays. Non-string entries are skipped.
pub(crate) fn strings_from_json(value: &Json) -> Vec<String> {
    value
        .as_array()
        .map(|values| {
            values
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

pub(crate) fn strings_to_json(values: &[String]) -> Json {
    Json::Array(values.iter().cloned().map(Json::String).collect())
}
