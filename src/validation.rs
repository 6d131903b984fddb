use crate::error::Validation;
use serde_json::Value;
use validator::{ValidationError, ValidationErrors};

/// Wire names of the bounded input fields, in the order violations are reported.
///
/// Each entry pairs the Rust field name with its wire key, as either may key the
/// derived validation errors.
pub(crate) const FIELD_ORDER: [(&str, &str); 10] = [
    ("input_id", "input_id"),
    ("street", "street"),
    ("street2", "street2"),
    ("secondary", "secondary"),
    ("city", "city"),
    ("state", "state"),
    ("zip_code", "zipcode"),
    ("last_line", "lastline"),
    ("addressee", "addressee"),
    ("urbanization", "urbanization"),
];

pub(crate) const MIN_CANDIDATES: i32 = 1;
pub(crate) const MAX_CANDIDATES: i32 = 10;

pub(crate) fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, str::is_empty)
}

/// Either city and state or a zip code must be given.
pub fn validate_locality(
    city: Option<&str>,
    state: Option<&str>,
    zip_code: Option<&str>,
) -> Result<(), Validation> {
    if (is_blank(city) || is_blank(state)) && is_blank(zip_code) {
        return Err(Validation::LocalityRequired);
    }

    Ok(())
}

/// Zero means "no candidates override" and is accepted as is.
pub fn validate_candidates(candidates: i32) -> Result<(), Validation> {
    if candidates != 0 && !(MIN_CANDIDATES..=MAX_CANDIDATES).contains(&candidates) {
        return Err(Validation::CandidatesOutOfRange(candidates));
    }

    Ok(())
}

/// Picks the first violated field in wire order and turns it into a [`Validation`].
///
/// Every field carrying a rule is listed in [`FIELD_ORDER`], so `None` means
/// `errors` holds no field errors at all.
pub(crate) fn first_violation(errors: &ValidationErrors) -> Option<Validation> {
    let field_errors = errors.field_errors();
    FIELD_ORDER.iter().find_map(|&(name, wire)| {
        field_errors
            .get(wire)
            .or_else(|| field_errors.get(name))
            .and_then(|errors| errors.first())
            .map(|error| violation(wire, error))
    })
}

/// Every rule on an address input is a `length` rule with a `max`.
fn violation(field: &'static str, error: &ValidationError) -> Validation {
    let param = |key: &str| error.params.get(key).and_then(Value::as_u64);
    let actual = error
        .params
        .get("value")
        .and_then(Value::as_str)
        .map(|value| value.chars().count() as u64);

    match (param("min"), actual) {
        (Some(min), Some(actual)) if actual < min => Validation::Required { field },
        _ => Validation::TooLong {
            field,
            max: param("max").unwrap_or_default(),
        },
    }
}
