use crate::deserializers::lenient_option;
use serde::Deserialize;

/// The normalized parts of a matched address.
///
/// A key missing from the response is `None`, never an empty string.
#[derive(Debug, Deserialize, Clone, Default, Eq, PartialEq)]
#[non_exhaustive]
pub struct Components {
    #[serde(default, deserialize_with = "lenient_option")]
    /// Puerto Rico urbanization name.
    pub urbanization: Option<String>,
    #[serde(default, deserialize_with = "lenient_option")]
    /// House, PO box or building number.
    pub primary_number: Option<String>,
    #[serde(default, deserialize_with = "lenient_option")]
    pub street_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_option", alias = "street_predirection")]
    /// Directional that precedes the street name, e.g. `N` in `N Main St`.
    pub street_pre_direction: Option<String>,
    #[serde(default, deserialize_with = "lenient_option", alias = "street_postdirection")]
    /// Directional that follows the street name, e.g. `NW` in `Pennsylvania Ave NW`.
    pub street_post_direction: Option<String>,
    #[serde(default, deserialize_with = "lenient_option")]
    pub street_suffix: Option<String>,
    #[serde(default, deserialize_with = "lenient_option")]
    /// Apartment or suite number.
    pub secondary_number: Option<String>,
    #[serde(default, deserialize_with = "lenient_option")]
    /// Descriptor of the secondary number, e.g. `Apt` or `Ste`.
    pub secondary_designator: Option<String>,
    #[serde(default, deserialize_with = "lenient_option")]
    pub extra_secondary_number: Option<String>,
    #[serde(default, deserialize_with = "lenient_option")]
    pub extra_secondary_designator: Option<String>,
    #[serde(default, deserialize_with = "lenient_option")]
    /// Private mailbox designator, `PMB` or `#`.
    pub pmb_designator: Option<String>,
    #[serde(default, deserialize_with = "lenient_option")]
    pub pmb_number: Option<String>,
    #[serde(default, deserialize_with = "lenient_option")]
    /// USPS preferred city name.
    pub city_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_option")]
    /// Default city name of the 5 digit zip code.
    pub default_city_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_option")]
    pub state_abbreviation: Option<String>,
    #[serde(default, deserialize_with = "lenient_option", rename = "zipcode")]
    /// 5 digit zip code.
    pub zip_code: Option<String>,
    #[serde(default, deserialize_with = "lenient_option")]
    /// The ZIP+4 add-on.
    pub plus4_code: Option<String>,
    #[serde(default, deserialize_with = "lenient_option")]
    /// Last two digits of the house or box number, or `99` if none.
    pub delivery_point: Option<String>,
    #[serde(default, deserialize_with = "lenient_option")]
    /// Correction character for the delivery point barcode.
    pub delivery_point_check_digit: Option<String>,
}

impl Components {
    /// Zip code with its ZIP+4 add-on, `99705-9901`.
    pub fn full_zip_code(&self) -> Option<String> {
        match (&self.zip_code, &self.plus4_code) {
            (Some(zip), Some(plus4)) => Some(format!("{}-{}", zip, plus4)),
            (Some(zip), None) => Some(zip.clone()),
            (None, _) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zipcode_key() {
        let json = r#"{ "zipcode": "99705", "plus4_code": "9901" }"#;
        let components: Components = serde_json::from_str(json).unwrap();

        assert_eq!(Some("99705".to_string()), components.zip_code);
        assert_eq!(Some("99705-9901".to_string()), components.full_zip_code());
    }

    #[test]
    fn directions_under_either_key() {
        let json = r#"{ "street_pre_direction": "N", "street_postdirection": "NW" }"#;
        let components: Components = serde_json::from_str(json).unwrap();

        assert_eq!(Some("N".to_string()), components.street_pre_direction);
        assert_eq!(Some("NW".to_string()), components.street_post_direction);
    }

    #[test]
    fn missing_keys_are_none() {
        let components: Components = serde_json::from_str(r#"{ "street_name": "Main" }"#).unwrap();

        assert_eq!(Some("Main".to_string()), components.street_name);
        assert_eq!(None, components.urbanization);
        assert_eq!(None, components.primary_number);
        assert_eq!(None, components.zip_code);
        assert_eq!(None, components.full_zip_code());
    }
}
