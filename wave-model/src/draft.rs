//! Editable user shape used while a record is being authored.
//!
//! A draft carries only the fields a person types in. Coordinates and the
//! company `bs` line are filled with placeholders when the draft becomes a
//! [`NewUser`].

use crate::field::FieldPath;
use crate::user::{
    Address, Company, DEFAULT_COMPANY_BS, Geo, NewUser, User,
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserDraft {
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub address: DraftAddress,
    pub company: DraftCompany,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DraftAddress {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DraftCompany {
    pub name: String,
    pub catch_phrase: String,
}

impl UserDraft {
    pub fn get(&self, path: FieldPath) -> &str {
        match path {
            FieldPath::Name => &self.name,
            FieldPath::Username => &self.username,
            FieldPath::Email => &self.email,
            FieldPath::Phone => &self.phone,
            FieldPath::Website => &self.website,
            FieldPath::AddressStreet => &self.address.street,
            FieldPath::AddressSuite => &self.address.suite,
            FieldPath::AddressCity => &self.address.city,
            FieldPath::AddressZipcode => &self.address.zipcode,
            FieldPath::CompanyName => &self.company.name,
            FieldPath::CompanyCatchPhrase => &self.company.catch_phrase,
        }
    }

    pub fn set(&mut self, path: FieldPath, value: impl Into<String>) {
        let slot = match path {
            FieldPath::Name => &mut self.name,
            FieldPath::Username => &mut self.username,
            FieldPath::Email => &mut self.email,
            FieldPath::Phone => &mut self.phone,
            FieldPath::Website => &mut self.website,
            FieldPath::AddressStreet => &mut self.address.street,
            FieldPath::AddressSuite => &mut self.address.suite,
            FieldPath::AddressCity => &mut self.address.city,
            FieldPath::AddressZipcode => &mut self.address.zipcode,
            FieldPath::CompanyName => &mut self.company.name,
            FieldPath::CompanyCatchPhrase => &mut self.company.catch_phrase,
        };
        *slot = value.into();
    }

    /// True when every field is empty or whitespace.
    pub fn is_blank(&self) -> bool {
        FieldPath::ALL
            .iter()
            .all(|path| self.get(*path).trim().is_empty())
    }

    pub fn into_new_user(self) -> NewUser {
        NewUser {
            name: self.name,
            username: self.username,
            email: self.email,
            phone: self.phone,
            website: self.website,
            address: Address {
                street: self.address.street,
                suite: self.address.suite,
                city: self.address.city,
                zipcode: self.address.zipcode,
                geo: Geo::default(),
            },
            company: Company {
                name: self.company.name,
                catch_phrase: self.company.catch_phrase,
                bs: DEFAULT_COMPANY_BS.to_string(),
            },
        }
    }
}

impl UserDraft {
    /// Write the draft's fields over `user`, keeping its id, coordinates and
    /// `company.bs`.
    pub fn apply_to(self, user: &User) -> User {
        let mut updated = user.clone();
        updated.name = self.name;
        updated.username = self.username;
        updated.email = self.email;
        updated.phone = self.phone;
        updated.website = self.website;
        updated.address.street = self.address.street;
        updated.address.suite = self.address.suite;
        updated.address.city = self.address.city;
        updated.address.zipcode = self.address.zipcode;
        updated.company.name = self.company.name;
        updated.company.catch_phrase = self.company.catch_phrase;
        updated
    }
}

impl From<&User> for UserDraft {
    fn from(user: &User) -> Self {
        UserDraft {
            name: user.name.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            website: user.website.clone(),
            address: DraftAddress {
                street: user.address.street.clone(),
                suite: user.address.suite.clone(),
                city: user.address.city.clone(),
                zipcode: user.address.zipcode.clone(),
            },
            company: DraftCompany {
                name: user.company.name.clone(),
                catch_phrase: user.company.catch_phrase.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::UserId;

    #[test]
    fn set_reaches_nested_fields() {
        let mut draft = UserDraft::default();
        draft.set(FieldPath::AddressCity, "Gwenborough");
        draft.set(FieldPath::CompanyCatchPhrase, "Proactive");

        assert_eq!(draft.address.city, "Gwenborough");
        assert_eq!(draft.get(FieldPath::CompanyCatchPhrase), "Proactive");
    }

    #[test]
    fn whitespace_only_draft_is_blank() {
        let mut draft = UserDraft::default();
        assert!(draft.is_blank());

        draft.set(FieldPath::AddressZipcode, "   ");
        assert!(draft.is_blank());

        draft.set(FieldPath::AddressZipcode, "10001");
        assert!(!draft.is_blank());
    }

    #[test]
    fn new_user_gets_placeholders() {
        let mut draft = UserDraft::default();
        draft.set(FieldPath::Name, "Ada");
        draft.set(FieldPath::CompanyName, "Engines Ltd");

        let new_user = draft.into_new_user();
        assert_eq!(new_user.address.geo.lat, "0");
        assert_eq!(new_user.address.geo.lng, "0");
        assert_eq!(new_user.company.bs, "business services");
        assert_eq!(new_user.company.name, "Engines Ltd");
    }

    #[test]
    fn apply_to_keeps_id_geo_and_bs() {
        let mut draft = UserDraft::default();
        draft.set(FieldPath::Name, "Ada");
        let mut original = draft.clone().into_new_user().with_id(UserId(4));
        original.address.geo.lat = "51.5".to_string();
        original.company.bs = "difference engines".to_string();

        let mut edited = UserDraft::from(&original);
        edited.set(FieldPath::Name, "Ada Lovelace");
        let updated = edited.apply_to(&original);

        assert_eq!(updated.id, UserId(4));
        assert_eq!(updated.name, "Ada Lovelace");
        assert_eq!(updated.address.geo.lat, "51.5");
        assert_eq!(updated.company.bs, "difference engines");
    }
}
