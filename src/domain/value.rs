use crate::domain::validation::ValidationError;

use phonenumber::country;

/// Parsed phone number, normalized to the MSISDN form the API expects.
///
/// Infobip takes `from`/`to` as international digits without a leading `+`
/// (`447860099300`). Equality, ordering, and hashing use that form.
#[derive(Debug, Clone)]
pub struct PhoneNumber {
    raw: String,
    msisdn: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// Field name used in validation errors.
    pub const FIELD: &'static str = "phone_number";

    /// Parse and normalize a phone number.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;
        if !phonenumber::is_valid(&parsed) {
            return Err(ValidationError::InvalidPhoneNumber { input: raw });
        }

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();
        let msisdn = e164.trim_start_matches('+').to_owned();

        Ok(Self {
            raw,
            msisdn,
            parsed,
        })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// International digits without `+`, as sent in `from`/`to`.
    pub fn msisdn(&self) -> &str {
        &self.msisdn
    }

    /// The parsed phone number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl From<PhoneNumber> for String {
    fn from(value: PhoneNumber) -> Self {
        value.msisdn
    }
}

impl From<&PhoneNumber> for String {
    fn from(value: &PhoneNumber) -> Self {
        value.msisdn.clone()
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.msisdn == other.msisdn
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.msisdn.hash(state);
    }
}

impl std::cmp::PartialOrd for PhoneNumber {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::cmp::Ord for PhoneNumber {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.msisdn.cmp(&other.msisdn)
    }
}
