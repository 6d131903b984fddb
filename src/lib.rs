/*!
# SmartyStreets US street address verification client library using async / await

## Legal

Dual-licensed under `MIT` or the [UNLICENSE](http://unlicense.org/).

## Features

Implements the [US Street Address API](https://smartystreets.com/docs/cloud/us-street-api):
single address lookups with a GET request and batches with a POST request.

Inputs are checked against the field limits the API documents before anything is
sent. Responses are decoded into [`AddressOutput`] values with their
[`Components`], [`Metadata`] and [`Analysis`]. Every response field is optional,
a missing key reads as `None`.

Using [reqwest](https://crates.io/crates/reqwest) for the HTTP client and
[validator](https://crates.io/crates/validator) for the input limits.

## Known quirks

`ews_match` is only ever `Some(true)` or `None`: a `false` from the service reads
as `None`. `suitelink_match` keeps both `true` and `false`. This mirrors how the
service's reference clients read these fields.

[`AddressInput::set_candidates`] lets `0` through without a range check.

## Usage

Add dependency to Cargo.toml:

```toml
[dependencies]
smartystreets = "0.1"
```

src/main.rs:

```rust,no_run
use smartystreets::{AddressFields, AddressInput, Client, Credentials};

#[tokio::main]
async fn main() -> Result<(), smartystreets::Error> {
    let client = Client::builder(Credentials::from_env()?).build()?;

    let mut input = AddressInput::new(AddressFields {
        input_id: Some("1".into()),
        street: "1 Santa Claus Ln".into(),
        city: Some("North Pole".into()),
        state: Some("AK".into()),
        zip_code: Some("99705".into()),
        ..Default::default()
    })?;
    input.set_candidates(3)?;

    for candidate in client.street_address().validate(&input).await? {
        println!(
            "{} / {}: {:?} {:?}",
            candidate.delivery_line_1.unwrap_or_default(),
            candidate.last_line.unwrap_or_default(),
            candidate.analysis.dpv_match_code,
            candidate.metadata.coordinates(),
        );
    }

    Ok(())
}
```
*/
#[macro_use]
extern crate lazy_static;

mod address_input;
mod address_output;
mod analysis;
mod client;
pub mod codes;
mod components;
mod deserializers;
pub mod error;
mod metadata;
mod street_address;
pub mod validation;

pub use address_input::{AddressFields, AddressInput};
pub use address_output::{decode_candidates, AddressOutput};
pub use analysis::Analysis;
pub use client::{Client, ClientBuilder, Credentials, AUTH_ID_VAR, AUTH_TOKEN_VAR, USER_AGENT};
pub use components::Components;
pub use error::{Error, Validation};
pub use metadata::Metadata;
pub use street_address::{StreetAddress, STREET_ADDRESS_PATH};
