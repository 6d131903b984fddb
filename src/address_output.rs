use crate::deserializers::{default_on_mismatch, lenient_option, non_empty_object};
use crate::{error::Error, Analysis, Components, Metadata};
use serde::Deserialize;
use serde_json::Value;

/// One verified candidate for a submitted address.
///
/// Use `input_index` and `candidate_index` to correlate a candidate with the
/// input it answers: a batch may return zero, one or several candidates per
/// input.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct AddressOutput {
    #[serde(default, deserialize_with = "lenient_option")]
    /// The `input_id` of the submitted address, if one was given.
    pub input_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_option")]
    /// 0-based position of the input among the submitted addresses.
    pub input_index: Option<u32>,
    #[serde(default, deserialize_with = "lenient_option")]
    /// 0-based position of this candidate among the candidates for the same input.
    pub candidate_index: Option<u32>,
    #[serde(default, deserialize_with = "lenient_option")]
    pub addressee: Option<String>,
    #[serde(default, deserialize_with = "lenient_option")]
    /// First delivery line, usually the street address.
    pub delivery_line_1: Option<String>,
    #[serde(default, deserialize_with = "lenient_option")]
    /// Second delivery line, only set when the address needs two.
    pub delivery_line_2: Option<String>,
    #[serde(default, deserialize_with = "lenient_option")]
    /// City, state and ZIP+4, e.g. `North Pole AK 99705-9901`.
    pub last_line: Option<String>,
    #[serde(default, deserialize_with = "lenient_option")]
    /// 12 digit POSTNET barcode.
    pub delivery_point_barcode: Option<String>,
    #[serde(default, deserialize_with = "non_empty_object")]
    /// `None` when the response has no components at all.
    pub components: Option<Components>,
    #[serde(default, deserialize_with = "default_on_mismatch")]
    pub metadata: Metadata,
    #[serde(default, deserialize_with = "default_on_mismatch")]
    pub analysis: Analysis,
}

impl AddressOutput {
    /// Decodes one element of a street address response.
    ///
    /// Any key may be missing; missing keys read as `None`.
    pub fn from_value(value: Value) -> Result<Self, Error> {
        serde_json::from_value(value).map_err(Error::from)
    }

    /// Whether the DPV status confirms the primary number.
    pub fn is_dpv_confirmed(&self) -> bool {
        self.analysis.is_dpv_confirmed()
    }
}

/// Decodes a street address response, a JSON array of candidates, keeping its order.
pub fn decode_candidates(body: &[u8]) -> Result<Vec<AddressOutput>, Error> {
    serde_json::from_slice(body).map_err(Error::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::{DpvMatchCode, RecordType};
    use serde_json::json;

    #[test]
    fn empty_object() {
        let output = AddressOutput::from_value(json!({})).unwrap();

        assert_eq!(None, output.input_id);
        assert_eq!(None, output.input_index);
        assert_eq!(None, output.candidate_index);
        assert_eq!(None, output.delivery_line_1);
        assert_eq!(None, output.components);
        assert_eq!(Metadata::default(), output.metadata);
        assert_eq!(Analysis::default(), output.analysis);
        assert!(output.analysis.footnotes.is_empty());
    }

    #[test]
    fn null_sub_objects() {
        let output = AddressOutput::from_value(json!({
            "components": null,
            "metadata": null,
            "analysis": null
        }))
        .unwrap();

        assert_eq!(None, output.components);
        assert_eq!(Metadata::default(), output.metadata);
        assert_eq!(Analysis::default(), output.analysis);
    }

    #[test]
    fn empty_components_are_absent() {
        let output = AddressOutput::from_value(json!({ "components": {} })).unwrap();

        assert_eq!(None, output.components);
    }

    #[test]
    fn partial_sub_objects() {
        let output = AddressOutput::from_value(json!({
            "input_index": 1,
            "candidate_index": 2,
            "components": { "city_name": "North Pole" },
            "metadata": { "record_type": "S" },
            "analysis": { "dpv_match_code": "S" }
        }))
        .unwrap();

        assert_eq!(Some(1), output.input_index);
        assert_eq!(Some(2), output.candidate_index);
        let components = output.components.as_ref().unwrap();
        assert_eq!(Some("North Pole".to_string()), components.city_name);
        assert_eq!(None, components.zip_code);
        assert_eq!(Some(RecordType::Street), output.metadata.record_type);
        assert_eq!(None, output.metadata.latitude);
        assert_eq!(
            Some(DpvMatchCode::ConfirmedDropSecondary),
            output.analysis.dpv_match_code
        );
        assert!(output.is_dpv_confirmed());
    }

    #[test]
    fn candidates_keep_order() {
        let body = br#"[ { "input_index": 1 }, { "input_index": 0 } ]"#;
        let outputs = decode_candidates(body).unwrap();

        assert_eq!(2, outputs.len());
        assert_eq!(Some(1), outputs[0].input_index);
        assert_eq!(Some(0), outputs[1].input_index);
    }

    #[test]
    fn mistyped_fields_do_not_spoil_the_batch() {
        let body = br#"[
            {
                "input_index": 0,
                "candidate_index": "0",
                "delivery_line_1": 1,
                "components": { "primary_number": 1, "city_name": "North Pole" },
                "metadata": { "latitude": "64.7", "record_type": 7, "dst": "yes" },
                "analysis": { "dpv_match_code": 5, "lacslink_code": [] }
            },
            { "input_index": 1, "components": "x", "metadata": [], "analysis": 3 }
        ]"#;
        let outputs = decode_candidates(body).unwrap();

        assert_eq!(2, outputs.len());
        assert_eq!(Some(0), outputs[0].input_index);
        assert_eq!(None, outputs[0].candidate_index);
        assert_eq!(None, outputs[0].delivery_line_1);
        let components = outputs[0].components.as_ref().unwrap();
        assert_eq!(None, components.primary_number);
        assert_eq!(Some("North Pole".to_string()), components.city_name);
        assert_eq!(Metadata::default(), outputs[0].metadata);
        assert_eq!(Analysis::default(), outputs[0].analysis);

        assert_eq!(Some(1), outputs[1].input_index);
        assert_eq!(None, outputs[1].components);
        assert_eq!(Metadata::default(), outputs[1].metadata);
        assert_eq!(Analysis::default(), outputs[1].analysis);
    }

    #[test]
    fn no_candidates() {
        assert!(decode_candidates(b"[]").unwrap().is_empty());
    }

    #[test]
    fn malformed_json() {
        assert!(matches!(
            decode_candidates(b"[{ \"input_index\": "),
            Err(Error::Decode(_))
        ));
        assert!(matches!(decode_candidates(b"{}"), Err(Error::Decode(_))));
    }
}
