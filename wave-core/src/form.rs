//! Draft, touched-set and error tracking for the add/edit user form.

use std::collections::BTreeSet;

use wave_model::{FieldPath, User, UserDraft, UserId};

use crate::error::FormError;
use crate::validation::{FormErrors, validate_form};

/// Result of [`UserForm::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome<T> {
    /// The draft validated and the continuation ran.
    Submitted(T),
    /// Errors are retained on the form; `focus` is the first invalid field.
    Rejected { focus: FieldPath },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserForm {
    draft: UserDraft,
    initial: UserDraft,
    editing: Option<UserId>,
    touched: BTreeSet<FieldPath>,
    errors: FormErrors,
}

impl UserForm {
    /// Empty form for a new user.
    pub fn new() -> Self {
        Self::default()
    }

    /// Form seeded from an existing record. Submission runs the same rules
    /// as for a new user.
    pub fn editing(user: &User) -> Self {
        let draft = UserDraft::from(user);
        Self {
            initial: draft.clone(),
            draft,
            editing: Some(user.id),
            ..Self::default()
        }
    }

    pub fn draft(&self) -> &UserDraft {
        &self.draft
    }

    pub fn editing_id(&self) -> Option<UserId> {
        self.editing
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn is_touched(&self, path: FieldPath) -> bool {
        self.touched.contains(&path)
    }

    /// Store `value` at `path`, drop that field's error and mark it touched.
    pub fn set_field(&mut self, path: FieldPath, value: impl Into<String>) {
        self.draft.set(path, value);
        self.errors.remove(path);
        self.touched.insert(path);
    }

    /// [`set_field`](Self::set_field) addressed by dotted path, e.g.
    /// `"address.city"`.
    pub fn set_field_by_name(
        &mut self,
        path: &str,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        let path: FieldPath = path.parse()?;
        self.set_field(path, value);
        Ok(())
    }

    /// Validate the whole draft and mark every field touched. On success the
    /// draft is handed to `on_success` and the form is cleared.
    pub fn submit<F, T>(&mut self, on_success: F) -> SubmitOutcome<T>
    where
        F: FnOnce(UserDraft) -> T,
    {
        self.errors = validate_form(&self.draft);
        self.touched.extend(FieldPath::ALL);

        if let Some(focus) = self.errors.first() {
            tracing::debug!(
                errors = self.errors.len(),
                %focus,
                "user form rejected"
            );
            return SubmitOutcome::Rejected { focus };
        }

        let draft = self.draft.clone();
        self.reset();
        SubmitOutcome::Submitted(on_success(draft))
    }

    /// Back to the initial draft with nothing touched and no errors.
    pub fn reset(&mut self) {
        self.draft = self.initial.clone();
        self.touched.clear();
        self.errors.clear();
    }

    /// Error to render next to `path`; untouched fields show none.
    pub fn visible_error(&self, path: FieldPath) -> Option<&'static str> {
        if self.is_touched(path) {
            self.errors.get(path)
        } else {
            None
        }
    }

    /// Messages for the "please fix the following" summary, once anything
    /// has been touched.
    pub fn error_summary(&self) -> Option<Vec<&'static str>> {
        if self.errors.is_empty() || self.touched.is_empty() {
            None
        } else {
            Some(self.errors.messages())
        }
    }

    /// A new form has changes once any field is non-blank; an edit form
    /// once the draft differs from the record it was seeded from.
    pub fn has_unsaved_changes(&self) -> bool {
        match self.editing {
            Some(_) => self.draft != self.initial,
            None => !self.draft.is_blank(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{CITY_REQUIRED, NAME_REQUIRED, PHONE_INVALID};

    fn fill_valid(form: &mut UserForm) {
        form.set_field(FieldPath::Name, "Leanne Graham");
        form.set_field(FieldPath::Username, "Bret");
        form.set_field(FieldPath::Email, "Sincere@april.biz");
        form.set_field(FieldPath::AddressCity, "Gwenborough");
        form.set_field(FieldPath::CompanyName, "Romaguera-Crona");
    }

    #[test]
    fn untouched_errors_stay_hidden_until_submit() {
        let mut form = UserForm::new();
        form.set_field(FieldPath::Name, "Ada");

        let outcome = form.submit(|_| ());

        assert_eq!(
            outcome,
            SubmitOutcome::Rejected {
                focus: FieldPath::Username
            }
        );
        assert_eq!(form.visible_error(FieldPath::AddressCity), Some(CITY_REQUIRED));
        assert!(form.is_touched(FieldPath::CompanyCatchPhrase));
    }

    #[test]
    fn focus_prefers_missing_city_over_bad_phone() {
        let mut form = UserForm::new();
        fill_valid(&mut form);
        form.set_field(FieldPath::Phone, "call me");
        form.set_field(FieldPath::AddressCity, "");

        let outcome = form.submit(|_| ());

        assert_eq!(
            outcome,
            SubmitOutcome::Rejected {
                focus: FieldPath::AddressCity
            }
        );
        assert_eq!(
            form.error_summary(),
            Some(vec![CITY_REQUIRED, PHONE_INVALID])
        );
    }

    #[test]
    fn editing_a_field_clears_its_error() {
        let mut form = UserForm::new();
        form.submit(|_| ());
        assert_eq!(form.visible_error(FieldPath::Name), Some(NAME_REQUIRED));

        form.set_field(FieldPath::Name, "A");
        assert_eq!(form.visible_error(FieldPath::Name), None);
        assert!(form.errors().contains(FieldPath::Email));
    }

    #[test]
    fn valid_submit_hands_over_draft_and_clears() {
        let mut form = UserForm::new();
        fill_valid(&mut form);
        assert!(form.has_unsaved_changes());

        let outcome = form.submit(|draft| draft.address.city);

        assert_eq!(outcome, SubmitOutcome::Submitted("Gwenborough".to_string()));
        assert!(!form.has_unsaved_changes());
        assert!(form.error_summary().is_none());
    }

    #[test]
    fn set_field_by_name_rejects_unknown_paths() {
        let mut form = UserForm::new();
        assert!(form.set_field_by_name("company.name", "Acme").is_ok());
        assert_eq!(form.draft().company.name, "Acme");
        assert!(form.set_field_by_name("address.geo", "0").is_err());
    }

    #[test]
    fn reset_restores_empty_draft() {
        let mut form = UserForm::new();
        form.set_field(FieldPath::Email, "bad");
        form.submit(|_| ());
        assert!(form.error_summary().is_some());

        form.reset();

        assert_eq!(form.draft(), &UserDraft::default());
        assert!(form.errors().is_empty());
        assert!(!form.is_touched(FieldPath::Email));
    }

    #[test]
    fn edit_form_tracks_changes_against_record() {
        let mut seed = UserForm::new();
        fill_valid(&mut seed);
        let user = seed.draft().clone().into_new_user().with_id(UserId(3));

        let mut form = UserForm::editing(&user);
        assert!(!form.has_unsaved_changes());
        assert_eq!(form.editing_id(), Some(UserId(3)));

        form.set_field(FieldPath::Username, "no");
        assert!(form.has_unsaved_changes());
        assert!(matches!(
            form.submit(|draft| draft.apply_to(&user)),
            SubmitOutcome::Rejected {
                focus: FieldPath::Username
            }
        ));

        form.set_field(FieldPath::Username, "Bret2");
        match form.submit(|draft| draft.apply_to(&user)) {
            SubmitOutcome::Submitted(updated) => {
                assert_eq!(updated.id, UserId(3));
                assert_eq!(updated.username, "Bret2");
            }
            other => panic!("expected submit, got {other:?}"),
        }
        assert_eq!(form.draft().username, "Bret");
    }
}
