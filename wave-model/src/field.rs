use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Dotted address of an editable user field, e.g. `address.city`.
///
/// Variants are declared in form order; `Ord` follows that order so maps
/// keyed by `FieldPath` iterate top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldPath {
    Name,
    Username,
    Email,
    Phone,
    Website,
    AddressStreet,
    AddressSuite,
    AddressCity,
    AddressZipcode,
    CompanyName,
    CompanyCatchPhrase,
}

impl FieldPath {
    pub const ALL: [FieldPath; 11] = [
        FieldPath::Name,
        FieldPath::Username,
        FieldPath::Email,
        FieldPath::Phone,
        FieldPath::Website,
        FieldPath::AddressStreet,
        FieldPath::AddressSuite,
        FieldPath::AddressCity,
        FieldPath::AddressZipcode,
        FieldPath::CompanyName,
        FieldPath::CompanyCatchPhrase,
    ];

    /// Order in which the form validates fields: required fields first,
    /// then the optional format checks. Errors, the focused field and the
    /// summary all follow it.
    pub const VALIDATION_ORDER: [FieldPath; 7] = [
        FieldPath::Name,
        FieldPath::Username,
        FieldPath::Email,
        FieldPath::AddressCity,
        FieldPath::CompanyName,
        FieldPath::Phone,
        FieldPath::Website,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            FieldPath::Name => "name",
            FieldPath::Username => "username",
            FieldPath::Email => "email",
            FieldPath::Phone => "phone",
            FieldPath::Website => "website",
            FieldPath::AddressStreet => "address.street",
            FieldPath::AddressSuite => "address.suite",
            FieldPath::AddressCity => "address.city",
            FieldPath::AddressZipcode => "address.zipcode",
            FieldPath::CompanyName => "company.name",
            FieldPath::CompanyCatchPhrase => "company.catchPhrase",
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldPath {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldPath::ALL
            .into_iter()
            .find(|path| path.as_str() == s)
            .ok_or_else(|| ModelError::UnknownField(s.to_string()))
    }
}
