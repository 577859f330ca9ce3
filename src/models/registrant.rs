//! Applicant details as sent by the storefront, and the registrant profile
//! submitted to the reseller's customer endpoint.

use serde::{Deserialize, Serialize};

/// Every registrant is registered in Great Britain.
pub const REGISTRANT_COUNTRY: &str = "GB";

/// International dialling code for [`REGISTRANT_COUNTRY`].
pub const REGISTRANT_COUNTRY_CODE: u16 = 44;

/// Account type used for all customers created by this service.
pub const REGISTRANT_ACCOUNT_TYPE: &str = "personal";

/// Postal address block of the applicant details.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApplicantAddress {
    pub line1: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
}

/// Applicant details from the `/register-domain` request body.
///
/// Every field is optional; absent and `null` values both become empty
/// strings in the [`RegistrantProfile`].
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserDetails {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address: Option<ApplicantAddress>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Customer record body for the reseller's customer-registration endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrantProfile {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub post_code: String,
    pub country: String,
    pub country_code: u16,
    pub phone: String,
    pub email: String,
    pub account_type: String,
}

impl From<&UserDetails> for RegistrantProfile {
    fn from(details: &UserDetails) -> Self {
        let address = details.address.clone().unwrap_or_default();
        Self {
            first_name: details.first_name.clone().unwrap_or_default(),
            last_name: details.last_name.clone().unwrap_or_default(),
            address: address.line1.unwrap_or_default(),
            city: address.city.unwrap_or_default(),
            state: address.region.unwrap_or_default(),
            post_code: address.postal_code.unwrap_or_default(),
            country: REGISTRANT_COUNTRY.to_string(),
            country_code: REGISTRANT_COUNTRY_CODE,
            phone: details.phone.clone().unwrap_or_default(),
            email: details.email.clone().unwrap_or_default(),
            account_type: REGISTRANT_ACCOUNT_TYPE.to_string(),
        }
    }
}
