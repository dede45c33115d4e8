//! REST API Client
//!
//! Thin JSON wrappers over the contact service, one async method per
//! endpoint. All failures are classified into [`ApiError`]; no retries.

use reqwest::Client as HttpClient;
use reqwest::Response;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::models::{
    Contact, ContactsResponse, CreatedContactResponse, DeleteContactRequest, LoginRequest,
    LoginResponse, MessageResponse, NewContact, Profile, ProfileResponse, RegisterRequest,
    ResetPasswordRequest, UpdateProfileRequest, User,
};

/// Backend origin the client is fixed to unless overridden
pub const DEFAULT_BASE_URL: &str = "https://personal-contact-book-server.onrender.com";

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: HttpClient,
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: HttpClient::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Decode a success body, or classify the response as an error with
    /// the server's `{message}` when the body carries one.
    async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        let status = resp.status();
        if status.is_success() {
            Ok(resp.json::<T>().await?)
        } else {
            let message = resp.json::<MessageResponse>().await.ok().map(|m| m.message);
            Err(ApiError::from_status(status.as_u16(), message))
        }
    }

    /// Like [`Self::decode`] for endpoints whose success body we ignore.
    async fn acknowledge(resp: Response) -> Result<(), ApiError> {
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            let message = resp.json::<MessageResponse>().await.ok().map(|m| m.message);
            Err(ApiError::from_status(status.as_u16(), message))
        }
    }

    // ========================
    // Auth
    // ========================

    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let payload = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let resp = self.http.post(self.url("/login")).json(&payload).send().await?;
        let body: LoginResponse = Self::decode(resp).await?;
        Ok(body.user)
    }

    pub async fn register(&self, payload: &RegisterRequest) -> Result<(), ApiError> {
        let resp = self
            .http
            .post(self.url("/register"))
            .json(payload)
            .send()
            .await?;
        Self::acknowledge(resp).await
    }

    pub async fn reset_password(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let payload = ResetPasswordRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let resp = self
            .http
            .post(self.url("/forgot-password"))
            .json(&payload)
            .send()
            .await?;
        Self::acknowledge(resp).await
    }

    // ========================
    // Contacts
    // ========================

    pub async fn list_contacts(&self, user_id: u32) -> Result<Vec<Contact>, ApiError> {
        let resp = self
            .http
            .get(self.url(&format!("/contacts/{}", user_id)))
            .send()
            .await?;
        let body: ContactsResponse = Self::decode(resp).await?;
        Ok(body.contacts)
    }

    pub async fn create_contact(&self, payload: &NewContact) -> Result<Contact, ApiError> {
        let resp = self
            .http
            .post(self.url("/add-contact"))
            .json(payload)
            .send()
            .await?;
        let body: CreatedContactResponse = Self::decode(resp).await?;
        Ok(body.data)
    }

    pub async fn update_contact(&self, id: u32, payload: &Contact) -> Result<(), ApiError> {
        let resp = self
            .http
            .put(self.url(&format!("/update-contact/{}", id)))
            .json(payload)
            .send()
            .await?;
        Self::acknowledge(resp).await
    }

    pub async fn delete_contact(&self, id: u32, user_id: u32) -> Result<(), ApiError> {
        let resp = self
            .http
            .delete(self.url(&format!("/delete-contact/{}", id)))
            .json(&DeleteContactRequest { user_id })
            .send()
            .await?;
        Self::acknowledge(resp).await
    }

    // ========================
    // Profile
    // ========================

    pub async fn get_profile(&self, user_id: u32) -> Result<Profile, ApiError> {
        let resp = self
            .http
            .get(self.url(&format!("/profile/{}", user_id)))
            .send()
            .await?;
        let body: ProfileResponse = Self::decode(resp).await?;
        Ok(body.profile)
    }

    pub async fn update_profile(
        &self,
        user_id: u32,
        payload: &UpdateProfileRequest,
    ) -> Result<(), ApiError> {
        let resp = self
            .http
            .put(self.url(&format!("/update-profile/{}", user_id)))
            .json(payload)
            .send()
            .await?;
        Self::acknowledge(resp).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let client = ApiClient::with_base_url("https://api.example.com/");
        assert_eq!(client.url("/login"), "https://api.example.com/login");
    }

    #[test]
    fn default_client_targets_the_fixed_origin() {
        let client = ApiClient::new();
        assert_eq!(
            client.url("/contacts/3"),
            format!("{}/contacts/3", DEFAULT_BASE_URL)
        );
    }
}
