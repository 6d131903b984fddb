use crate::error::Error;
use crate::validation::{first_violation, validate_candidates, validate_locality};
use serde::Serialize;
use validator::Validate;

/// Fields of an address to verify. Derives Default, so remember to
/// `..Default::default()` after you specify what you want.
///
/// Turned into an [`AddressInput`] by [`AddressInput::new`], which checks the
/// constraints the street address API documents for each field.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AddressFields {
    /// Caller supplied correlation key, echoed back in every candidate. At most 16 characters.
    pub input_id: Option<String>,
    /// The street line of the address, or the entire address. Required.
    pub street: String,
    pub street2: Option<String>,
    /// Apartment, suite or office number.
    pub secondary: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    /// City, state and zip code combined.
    pub last_line: Option<String>,
    /// Recipient name or firm name.
    pub addressee: Option<String>,
    /// Only used with Puerto Rico addresses.
    pub urbanization: Option<String>,
}

/// One postal address submitted for verification.
///
/// Every field is checked once at construction; afterwards only the number of
/// candidates can change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
pub struct AddressInput {
    #[validate(length(max = 16))]
    input_id: Option<String>,
    #[validate(length(min = 1, max = 64))]
    street: String,
    #[validate(length(max = 64))]
    street2: Option<String>,
    #[validate(length(max = 32))]
    secondary: Option<String>,
    #[validate(length(max = 64))]
    city: Option<String>,
    #[validate(length(max = 32))]
    state: Option<String>,
    #[serde(rename = "zipcode")]
    #[validate(length(max = 16))]
    zip_code: Option<String>,
    #[serde(rename = "lastline")]
    #[validate(length(max = 64))]
    last_line: Option<String>,
    #[validate(length(max = 64))]
    addressee: Option<String>,
    #[validate(length(max = 64))]
    urbanization: Option<String>,
    candidates: i32,
}

impl AddressInput {
    /// Validates the fields and builds the input. Asks for a single candidate.
    ///
    /// # Examples
    ///
    /// ```
    /// use smartystreets::{AddressFields, AddressInput};
    ///
    /// let input = AddressInput::new(AddressFields {
    ///     street: "1600 Pennsylvania Ave NW".into(),
    ///     city: Some("Washington".into()),
    ///     state: Some("DC".into()),
    ///     ..Default::default()
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(1, input.candidates());
    /// ```
    pub fn new(fields: AddressFields) -> Result<Self, Error> {
        validate_locality(
            fields.city.as_deref(),
            fields.state.as_deref(),
            fields.zip_code.as_deref(),
        )?;

        let input = AddressInput {
            input_id: fields.input_id,
            street: fields.street,
            street2: fields.street2,
            secondary: fields.secondary,
            city: fields.city,
            state: fields.state,
            zip_code: fields.zip_code,
            last_line: fields.last_line,
            addressee: fields.addressee,
            urbanization: fields.urbanization,
            candidates: 1,
        };

        if let Err(errors) = input.validate() {
            if let Some(violation) = first_violation(&errors) {
                return Err(violation.into());
            }
        }

        Ok(input)
    }

    /// Sets the maximum number of candidates returned for an ambiguous address.
    ///
    /// Accepts 1 to 10. Zero is let through unchecked and sent as is, the service
    /// then applies its own default.
    pub fn set_candidates(&mut self, candidates: i32) -> Result<(), Error> {
        validate_candidates(candidates)?;
        self.candidates = candidates;
        Ok(())
    }

    /// Builder flavour of [`AddressInput::set_candidates`].
    pub fn with_candidates(mut self, candidates: i32) -> Result<Self, Error> {
        self.set_candidates(candidates)?;
        Ok(self)
    }

    pub fn input_id(&self) -> Option<&str> {
        self.input_id.as_deref()
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn street2(&self) -> Option<&str> {
        self.street2.as_deref()
    }

    pub fn secondary(&self) -> Option<&str> {
        self.secondary.as_deref()
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    pub fn zip_code(&self) -> Option<&str> {
        self.zip_code.as_deref()
    }

    pub fn last_line(&self) -> Option<&str> {
        self.last_line.as_deref()
    }

    pub fn addressee(&self) -> Option<&str> {
        self.addressee.as_deref()
    }

    pub fn urbanization(&self) -> Option<&str> {
        self.urbanization.as_deref()
    }

    pub fn candidates(&self) -> i32 {
        self.candidates
    }

    /// Query string pairs for a single address lookup. Absent fields are left out.
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let optional = [
            ("input_id", &self.input_id),
            ("street2", &self.street2),
            ("secondary", &self.secondary),
            ("city", &self.city),
            ("state", &self.state),
            ("zipcode", &self.zip_code),
            ("lastline", &self.last_line),
            ("addressee", &self.addressee),
            ("urbanization", &self.urbanization),
        ];

        let mut pairs = vec![("street", self.street.clone())];
        pairs.extend(
            optional
                .into_iter()
                .filter_map(|(key, value)| value.clone().map(|value| (key, value))),
        );
        pairs.push(("candidates", self.candidates.to_string()));
        pairs
    }
}
