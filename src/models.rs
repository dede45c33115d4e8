//! Domain Models
//!
//! Data structures matching the remote contact service, plus the
//! transient form drafts edited on the client.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Gender accepted by the service for users and contacts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    /// Wire value ("male" / "female" / "other")
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }

    /// Display label ("Male" / "Female" / "Other")
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

/// Authenticated user as returned by the login endpoint.
/// The password hash never reaches the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub gender: Option<Gender>,
}

/// Contact record (matches the service). The in-memory list is a cache
/// of server state, never an independent source of truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: u32,
    pub contact_name: String,
    pub contact_phone: String,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub contact_address: Option<String>,
    pub contact_gender: Gender,
    #[serde(default)]
    pub contact_favorite: bool,
    pub user_id: u32,
}

/// Profile fields shown on the profile screens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub phone: String,
    pub email: String,
}

// ========================
// Form Drafts
// ========================

/// Staging copy of a contact while the user is typing. Text fields stay
/// plain strings so partially-typed input is representable; gender is
/// unset until chosen. Discarded on cancel or successful submit.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct ContactDraft {
    pub id: Option<u32>,
    #[validate(length(min = 1, message = "Name and phone are required"))]
    pub contact_name: String,
    #[validate(length(min = 1, message = "Name and phone are required"))]
    pub contact_phone: String,
    #[validate(custom(function = "crate::validate::email_if_present"))]
    pub contact_email: String,
    pub contact_address: String,
    #[validate(required(message = "Gender is required"))]
    pub contact_gender: Option<Gender>,
    pub contact_favorite: bool,
    pub user_id: u32,
}

impl ContactDraft {
    /// Empty template owned by the given user
    pub fn empty(user_id: u32) -> Self {
        Self {
            user_id,
            ..Self::default()
        }
    }

    /// Load a draft from an existing record for editing
    pub fn from_contact(contact: &Contact) -> Self {
        Self {
            id: Some(contact.id),
            contact_name: contact.contact_name.clone(),
            contact_phone: contact.contact_phone.clone(),
            contact_email: contact.contact_email.clone().unwrap_or_default(),
            contact_address: contact.contact_address.clone().unwrap_or_default(),
            contact_gender: Some(contact.contact_gender),
            contact_favorite: contact.contact_favorite,
            user_id: contact.user_id,
        }
    }

    fn email(&self) -> Option<String> {
        if self.contact_email.is_empty() {
            None
        } else {
            Some(self.contact_email.clone())
        }
    }

    fn address(&self) -> Option<String> {
        if self.contact_address.is_empty() {
            None
        } else {
            Some(self.contact_address.clone())
        }
    }

    /// Create payload (contact sans id). None until a gender is chosen.
    pub fn to_new_contact(&self) -> Option<NewContact> {
        Some(NewContact {
            contact_name: self.contact_name.clone(),
            contact_phone: self.contact_phone.clone(),
            contact_email: self.email(),
            contact_address: self.address(),
            contact_gender: self.contact_gender?,
            contact_favorite: self.contact_favorite,
            user_id: self.user_id,
        })
    }

    /// Full record for the update endpoint. None until the draft has an
    /// id and a gender.
    pub fn to_contact(&self) -> Option<Contact> {
        Some(Contact {
            id: self.id?,
            contact_name: self.contact_name.clone(),
            contact_phone: self.contact_phone.clone(),
            contact_email: self.email(),
            contact_address: self.address(),
            contact_gender: self.contact_gender?,
            contact_favorite: self.contact_favorite,
            user_id: self.user_id,
        })
    }

    /// Field-by-field comparison against the record the draft was loaded
    /// from. An unchanged draft must not issue an update call.
    pub fn differs_from(&self, original: &Contact) -> bool {
        self.contact_name != original.contact_name
            || self.contact_phone != original.contact_phone
            || self.email() != original.contact_email
            || self.address() != original.contact_address
            || self.contact_gender != Some(original.contact_gender)
            || self.contact_favorite != original.contact_favorite
    }
}

/// Login screen inputs
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct LoginForm {
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Please enter a valid email")
    )]
    pub email: String,
    #[validate(custom(function = "crate::validate::password_rules"))]
    pub password: String,
}

/// Registration screen inputs
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct RegisterForm {
    #[validate(custom(function = "crate::validate::name_required"))]
    pub name: String,
    #[validate(required(message = "Please select a gender"))]
    pub gender: Option<Gender>,
    #[validate(custom(function = "crate::validate::phone_digits"))]
    pub phone: String,
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Please enter a valid email")
    )]
    pub email: String,
    #[validate(custom(function = "crate::validate::password_rules"))]
    pub password: String,
}

/// Password reset inputs (email + replacement password)
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct ResetPasswordForm {
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Please enter a valid email")
    )]
    pub email: String,
    #[validate(custom(function = "crate::validate::password_rules"))]
    pub password: String,
}

/// Edit-profile screen inputs
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct ProfileDraft {
    #[validate(custom(function = "crate::validate::name_required"))]
    pub name: String,
    #[validate(required(message = "Please select a gender"))]
    pub gender: Option<Gender>,
    #[validate(custom(function = "crate::validate::phone_digits"))]
    pub phone: String,
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Please enter a valid email")
    )]
    pub email: String,
}

impl ProfileDraft {
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            gender: profile.gender,
            phone: profile.phone.clone(),
            email: profile.email.clone(),
        }
    }
}

// ========================
// Wire Payloads
// ========================

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub gender: Gender,
    pub phone: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub password: String,
}

/// Contact sans id, as sent to the add endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewContact {
    pub contact_name: String,
    pub contact_phone: String,
    pub contact_email: Option<String>,
    pub contact_address: Option<String>,
    pub contact_gender: Gender,
    pub contact_favorite: bool,
    pub user_id: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteContactRequest {
    pub user_id: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateProfileRequest {
    pub name: String,
    pub gender: Gender,
    pub phone: String,
    pub email: String,
}

// ========================
// Response Envelopes
// ========================

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub user: User,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactsResponse {
    pub contacts: Vec<Contact>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatedContactResponse {
    pub data: Contact,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileResponse {
    pub profile: Profile,
}

/// Error bodies and plain acknowledgements share this shape
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_contact(id: u32) -> Contact {
        Contact {
            id,
            contact_name: format!("Contact {}", id),
            contact_phone: "5551234567".to_string(),
            contact_email: Some("contact@example.com".to_string()),
            contact_address: None,
            contact_gender: Gender::Female,
            contact_favorite: false,
            user_id: 7,
        }
    }

    #[test]
    fn gender_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Gender::Male).unwrap(), "\"male\"");
        assert_eq!(
            serde_json::from_str::<Gender>("\"other\"").unwrap(),
            Gender::Other
        );
    }

    #[test]
    fn user_round_trips_through_json() {
        let user = User {
            id: 3,
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            phone: "5551234567".to_string(),
            gender: Some(Gender::Female),
        };
        let raw = serde_json::to_string(&user).unwrap();
        assert_eq!(serde_json::from_str::<User>(&raw).unwrap(), user);
    }

    #[test]
    fn empty_draft_keeps_user_id() {
        let draft = ContactDraft::empty(42);
        assert_eq!(draft.user_id, 42);
        assert!(draft.contact_name.is_empty());
        assert_eq!(draft.contact_gender, None);
    }

    #[test]
    fn draft_converts_to_create_payload() {
        let draft = ContactDraft {
            contact_name: "Ana Diaz".to_string(),
            contact_phone: "5551234567".to_string(),
            contact_gender: Some(Gender::Female),
            user_id: 7,
            ..ContactDraft::default()
        };
        let payload = draft.to_new_contact().unwrap();
        assert_eq!(payload.contact_name, "Ana Diaz");
        assert_eq!(payload.contact_phone, "5551234567");
        assert_eq!(payload.contact_gender, Gender::Female);
        assert_eq!(payload.contact_email, None);
        assert!(!payload.contact_favorite);
    }

    #[test]
    fn draft_without_gender_has_no_payload() {
        let draft = ContactDraft {
            contact_name: "Ana Diaz".to_string(),
            contact_phone: "5551234567".to_string(),
            ..ContactDraft::default()
        };
        assert!(draft.to_new_contact().is_none());
    }

    #[test]
    fn untouched_draft_does_not_differ() {
        let contact = make_contact(1);
        let draft = ContactDraft::from_contact(&contact);
        assert!(!draft.differs_from(&contact));
    }

    #[test]
    fn any_single_changed_field_differs() {
        let contact = make_contact(1);

        let mut draft = ContactDraft::from_contact(&contact);
        draft.contact_phone = "5559999999".to_string();
        assert!(draft.differs_from(&contact));

        let mut draft = ContactDraft::from_contact(&contact);
        draft.contact_favorite = true;
        assert!(draft.differs_from(&contact));

        let mut draft = ContactDraft::from_contact(&contact);
        draft.contact_email.clear();
        assert!(draft.differs_from(&contact));
    }

    #[test]
    fn empty_email_and_address_become_absent() {
        let mut contact = make_contact(1);
        contact.contact_email = None;
        let draft = ContactDraft::from_contact(&contact);
        assert!(draft.contact_email.is_empty());

        let record = draft.to_contact().unwrap();
        assert_eq!(record.contact_email, None);
        assert_eq!(record.contact_address, None);
    }
}
