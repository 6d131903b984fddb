use crate::address_output::decode_candidates;
use crate::{error::Error, AddressInput, AddressOutput, Client};

/// Path of the street address API, relative to the client's base URL.
pub const STREET_ADDRESS_PATH: &str = "street-address";

/// US street address verification.
///
/// Borrowed from a [`Client`] with [`Client::street_address`].
#[derive(Debug, Clone, Copy)]
pub struct StreetAddress<'a> {
    client: &'a Client,
}

impl<'a> StreetAddress<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        StreetAddress { client }
    }

    /// Verifies a single address with a GET request.
    ///
    /// Returns no candidates when nothing matched, and several when the address
    /// is ambiguous and more than one candidate was asked for.
    pub async fn validate(&self, address: &AddressInput) -> Result<Vec<AddressOutput>, Error> {
        let body = self
            .client
            .get(STREET_ADDRESS_PATH, &address.query_pairs())
            .await?;
        decode_candidates(&body)
    }

    /// Verifies several addresses with one POST request.
    ///
    /// Candidates come back in the order of the response, not one per input:
    /// use [`AddressOutput::input_index`] and [`AddressOutput::candidate_index`]
    /// to match them with `addresses`.
    pub async fn batch_validate(
        &self,
        addresses: &[AddressInput],
    ) -> Result<Vec<AddressOutput>, Error> {
        let body = self.client.post(STREET_ADDRESS_PATH, addresses).await?;
        decode_candidates(&body)
    }
}
