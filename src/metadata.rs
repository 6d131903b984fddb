use crate::codes::{ElotSort, Precision, Rdi, RecordType, ZipType};
use crate::deserializers::lenient_option;
use serde::Deserialize;

/// Geographic and postal classification of a matched address.
///
/// Always present on an [`AddressOutput`](crate::AddressOutput), even when the
/// response carries no `metadata` object; each field is then `None`.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct Metadata {
    #[serde(default, deserialize_with = "lenient_option")]
    pub record_type: Option<RecordType>,
    #[serde(default, deserialize_with = "lenient_option")]
    pub zip_type: Option<ZipType>,
    #[serde(default, deserialize_with = "lenient_option")]
    /// 5 digit county FIPS code.
    pub county_fips: Option<String>,
    #[serde(default, deserialize_with = "lenient_option")]
    pub county_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_option")]
    /// Postal carrier route for the zip code.
    pub carrier_route: Option<String>,
    #[serde(default, deserialize_with = "lenient_option")]
    /// Congressional district, `AL` for at-large.
    pub congressional_district: Option<String>,
    #[serde(default, deserialize_with = "lenient_option")]
    /// `Y` when the address is the default address of a building.
    pub building_default_indicator: Option<String>,
    #[serde(default, deserialize_with = "lenient_option")]
    pub rdi: Option<Rdi>,
    #[serde(default, deserialize_with = "lenient_option")]
    /// eLOT sequence number.
    pub elot_sequence: Option<String>,
    #[serde(default, deserialize_with = "lenient_option")]
    pub elot_sort: Option<ElotSort>,
    #[serde(default, deserialize_with = "lenient_option")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient_option")]
    pub longitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient_option")]
    /// How precise `latitude` and `longitude` are.
    pub precision: Option<Precision>,
    #[serde(default, deserialize_with = "lenient_option")]
    /// Common name of the time zone, e.g. `Alaska`.
    pub time_zone: Option<String>,
    #[serde(default, deserialize_with = "lenient_option")]
    /// Hours the time zone is offset from UTC.
    pub utc_offset: Option<f64>,
    #[serde(default, deserialize_with = "lenient_option")]
    /// Whether the time zone observes daylight saving time.
    pub dst: Option<bool>,
}

impl Metadata {
    /// Latitude and longitude, when both were returned.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes() {
        let json = r#"
            {
                "record_type": "S",
                "zip_type": "Standard",
                "rdi": "Commercial",
                "elot_sort": "A",
                "precision": "Zip8",
                "utc_offset": -9,
                "dst": true
            }
        "#;
        let metadata: Metadata = serde_json::from_str(json).unwrap();

        assert_eq!(Some(RecordType::Street), metadata.record_type);
        assert_eq!(Some(ZipType::Standard), metadata.zip_type);
        assert_eq!(Some(Rdi::Commercial), metadata.rdi);
        assert_eq!(Some(ElotSort::Ascending), metadata.elot_sort);
        assert_eq!(Some(Precision::Zip8), metadata.precision);
        assert_eq!(Some(-9.0), metadata.utc_offset);
        assert_eq!(Some(true), metadata.dst);
        assert_eq!(None, metadata.coordinates());
    }

    #[test]
    fn empty_record_type_is_no_match() {
        let metadata: Metadata = serde_json::from_str(r#"{ "record_type": "" }"#).unwrap();

        assert_eq!(Some(RecordType::NoMatch), metadata.record_type);
    }

    #[test]
    fn empty_object() {
        let metadata: Metadata = serde_json::from_str("{}").unwrap();

        assert_eq!(Metadata::default(), metadata);
    }
}
