/*!
Enumerated codes used by the street address API.

Each code domain is a closed enum with an `Unrecognized` fallback carrying the
raw wire value, so a code added by the service is kept instead of dropped.
*/
use serde::Deserialize;
use std::fmt;

macro_rules! wire_code {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $code:literal,)+
        }
        $(eq = $eq:path)?
    ) => {
        $(#[$meta])*
        #[derive(Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
        #[serde(from = "String")]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
            /// A code not documented at the time of writing.
            Unrecognized(String),
        }

        impl $name {
            /// The code as it appears on the wire.
            pub fn as_str(&self) -> &str {
                match *self {
                    $($name::$variant => $code,)+
                    $name::Unrecognized(ref s) => s.as_str(),
                }
            }
        }

        impl<'a> From<&'a str> for $name {
            fn from(s: &str) -> $name {
                #[allow(unused_variables)]
                let eq = |a: &str, b: &str| a == b;
                $(let eq = $eq;)?
                $(if eq(s, $code) {
                    return $name::$variant;
                })+
                $name::Unrecognized(s.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> $name {
                $name::from(s.as_str())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_code! {
    /// Delivery Point Validation status of the matched address.
    DpvMatchCode {
        /// Confirmed, primary number and secondary number (if present) are valid.
        Confirmed => "Y",
        /// Not confirmed as a valid delivery point.
        NotConfirmed => "N",
        /// Primary number confirmed, the given secondary number was not and was dropped.
        ConfirmedDropSecondary => "S",
        /// Primary number confirmed, a required secondary number is missing.
        ConfirmedMissingSecondary => "D",
    }
}

wire_code! {
    /// Two character footnotes explaining the DPV match code.
    DpvFootnote {
        /// Street, city, state and zip code are valid.
        CityStateZip => "AA",
        /// Address not present in the USPS data, no ZIP+4 assigned.
        NoZip4 => "A1",
        /// Entire address is a valid delivery point.
        WithZip4 => "BB",
        /// Primary number valid, secondary number invalid or unnecessary.
        DropSecondary => "CC",
        /// Military or diplomatic address.
        Military => "F1",
        /// General delivery address.
        General => "G1",
        PrimaryNumberMissing => "M1",
        PrimaryNumberInvalid => "M3",
        /// Primary number valid, secondary number missing for a high-rise address.
        MissingSecondary => "N1",
        /// PO, RR or HC box number missing.
        BoxMissing => "P1",
        /// PO, RR or HC box number invalid.
        BoxInvalid => "P3",
        /// Valid address at a CMRA with a PMB.
        WithPmb => "RR",
        /// Valid address at a CMRA without a PMB.
        NoPmb => "R1",
        /// Unique zip code, address not verified at street level.
        ZipCode => "U1",
    }
}

wire_code! {
    /// Outcome of the LACSLink conversion of rural-route addresses.
    LacsLinkIndicator {
        /// Converted, the new address was found.
        Match => "Y",
        /// Converted, the secondary number was dropped.
        DropSecondary => "S",
        /// Conversion needed but no new address was found.
        NoMatch => "N",
        /// False positive.
        FalsePositive => "F",
    }
}

wire_code! {
    /// Type of the USPS record the address was matched to.
    RecordType {
        Firm => "F",
        GeneralDelivery => "G",
        HighRise => "H",
        PostOfficeBox => "P",
        RuralRoute => "R",
        Street => "S",
        /// The address was not matched.
        NoMatch => "",
    }
}

wire_code! {
    ZipType {
        /// Zip code assigned to a single organization.
        Unique => "Unique",
        Military => "Military",
        /// Zip code for PO boxes only.
        PoBox => "POBox",
        Standard => "Standard",
    }
}

wire_code! {
    /// Residential Delivery Indicator.
    ///
    /// The service capitalizes these values, so they are compared ignoring ASCII case.
    Rdi {
        Residential => "residential",
        Commercial => "commercial",
        Unknown => "unknown",
    }
    eq = str::eq_ignore_ascii_case
}

wire_code! {
    /// Enhanced Line of Travel sort order.
    ElotSort {
        Ascending => "A",
        Descending => "D",
        Unsorted => "",
    }
}

wire_code! {
    /// Precision of the returned coordinates, from coarsest to finest.
    Precision {
        Unknown => "Unknown",
        None => "None",
        State => "State",
        SolutionArea => "SolutionArea",
        City => "City",
        Zip5 => "Zip5",
        Zip6 => "Zip6",
        Zip7 => "Zip7",
        Zip8 => "Zip8",
        Zip9 => "Zip9",
        Structure => "Structure",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes() {
        assert_eq!(DpvMatchCode::Confirmed, DpvMatchCode::from("Y"));
        assert_eq!(DpvMatchCode::ConfirmedMissingSecondary, "D".into());
        assert_eq!(LacsLinkIndicator::FalsePositive, "F".into());
        assert_eq!(ZipType::PoBox, "POBox".into());
        assert_eq!(Precision::Zip8, "Zip8".into());
        assert_eq!(Precision::None, "None".into());
        assert_eq!(DpvFootnote::WithZip4, "BB".into());
    }

    #[test]
    fn empty_codes() {
        assert_eq!(RecordType::NoMatch, RecordType::from(""));
        assert_eq!(ElotSort::Unsorted, ElotSort::from(""));
        assert_eq!("", RecordType::NoMatch.as_str());
    }

    #[test]
    fn unrecognized_code_keeps_wire_value() {
        let code = DpvMatchCode::from("X");
        assert_eq!(DpvMatchCode::Unrecognized("X".into()), code);
        assert_eq!("X", code.as_str());
        assert_eq!(RecordType::Unrecognized("s".into()), "s".into());
    }

    #[test]
    fn rdi_ignores_case() {
        assert_eq!(Rdi::Commercial, Rdi::from("Commercial"));
        assert_eq!(Rdi::Residential, Rdi::from("residential"));
        assert_eq!("commercial", Rdi::Commercial.as_str());
    }

    #[test]
    fn deserialize_from_string() {
        let precision: Precision = serde_json::from_str(r#""Structure""#).unwrap();
        assert_eq!(Precision::Structure, precision);
        assert_eq!("Structure", precision.to_string());
    }
}
