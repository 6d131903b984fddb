use crate::codes::{DpvFootnote, DpvMatchCode, LacsLinkIndicator};
use crate::deserializers::{
    flag_from_bool, flag_from_true, flag_from_yes_no, footnotes_from_str, lenient_option,
};
use serde::Deserialize;

/// Match diagnostics of a verified address.
///
/// The flags are tri-state: `None` means the service did not say, it never
/// stands in for `false`.
#[derive(Debug, Deserialize, Clone, Default, Eq, PartialEq)]
#[non_exhaustive]
pub struct Analysis {
    #[serde(default, deserialize_with = "lenient_option")]
    /// Delivery Point Validation status.
    pub dpv_match_code: Option<DpvMatchCode>,
    #[serde(default, deserialize_with = "lenient_option")]
    /// Concatenated two character codes explaining the DPV status, e.g. `AABB`.
    /// See [`Analysis::dpv_footnote_codes`].
    pub dpv_footnotes: Option<String>,
    #[serde(default, deserialize_with = "flag_from_yes_no")]
    /// Whether the address is a Commercial Mail Receiving Agency, e.g. a private mailbox store.
    pub dpv_cmra: Option<bool>,
    #[serde(default, deserialize_with = "flag_from_yes_no")]
    /// Whether the delivery point was active before but is not currently.
    pub dpv_vacant: Option<bool>,
    #[serde(default, deserialize_with = "flag_from_yes_no")]
    /// Whether the address is active.
    pub active: Option<bool>,
    // A `false` on the wire stays `None`, unlike `suitelink_match`.
    #[serde(default, deserialize_with = "flag_from_true")]
    /// Whether the address is flagged by the USPS Early Warning System.
    pub ews_match: Option<bool>,
    #[serde(default, deserialize_with = "footnotes_from_str")]
    /// Changes made to the input, each entry terminated by `#`, e.g. `L#`.
    pub footnotes: Vec<String>,
    #[serde(default, deserialize_with = "lenient_option")]
    pub lacslink_code: Option<String>,
    #[serde(default, deserialize_with = "lenient_option")]
    pub lacslink_indicator: Option<LacsLinkIndicator>,
    #[serde(default, deserialize_with = "flag_from_bool")]
    /// Whether SuiteLink appended a missing secondary number.
    pub suitelink_match: Option<bool>,
}

impl Analysis {
    /// Splits [`Analysis::dpv_footnotes`] into its two character codes.
    ///
    /// A trailing odd character is kept as an unrecognized code.
    pub fn dpv_footnote_codes(&self) -> Vec<DpvFootnote> {
        let footnotes = match self.dpv_footnotes {
            Some(ref footnotes) => footnotes.chars().collect::<Vec<_>>(),
            None => return vec![],
        };
        footnotes
            .chunks(2)
            .map(|code| DpvFootnote::from(code.iter().collect::<String>()))
            .collect()
    }

    /// Whether the DPV status confirms the primary number.
    pub fn is_dpv_confirmed(&self) -> bool {
        matches!(
            self.dpv_match_code,
            Some(DpvMatchCode::Confirmed)
                | Some(DpvMatchCode::ConfirmedDropSecondary)
                | Some(DpvMatchCode::ConfirmedMissingSecondary)
        )
    }
}
