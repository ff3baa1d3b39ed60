use crate::cart::models::{AddToCartRequest, Cart, CheckoutReceipt, CheckoutRequest};
use crate::catalog::models::Course;
use crate::config::ApiConfig;
use crate::error::{LearnHubError, Result};
use crate::learning::models::{CompleteLectureRequest, EnrollmentRecord};
use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// List endpoints answer either a bare array or an object wrapping it.
#[derive(Deserialize)]
#[serde(untagged)]
enum Listing<T> {
    Bare(Vec<T>),
    Courses { courses: Vec<T> },
    Enrollments { enrollments: Vec<T> },
}

impl<T> Listing<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            Listing::Bare(v) | Listing::Courses { courses: v } | Listing::Enrollments { enrollments: v } => v,
        }
    }
}

/// Blocking client for the LearnHub backend REST API.
pub struct LearnHubClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl LearnHubClient {
    pub fn new(base_url: &str, token: Option<&str>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.map(str::to_string),
        })
    }

    pub fn from_config(api: &ApiConfig) -> Result<Self> {
        Self::new(
            &api.base_url,
            api.token.as_deref(),
            Duration::from_secs(api.timeout_secs),
        )
    }

    /// Helper for testing to override base URL (e.g. wiremock)
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = self.authorized(request).send()?;
        let status = response.status();
        debug!(url = %response.url(), %status, "LearnHub API response");

        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(LearnHubError::Api { status, body });
        }
        Ok(response)
    }

    fn decode<T: DeserializeOwned>(response: Response, what: &'static str) -> Result<T> {
        let text = response.text()?;
        serde_json::from_str(&text).map_err(|source| LearnHubError::Decode { what, source })
    }

    pub fn list_courses(&self) -> Result<Vec<Course>> {
        let response = self.send(self.client.get(self.url("/courses")))?;
        let listing: Listing<Course> = Self::decode(response, "course listing")?;
        Ok(listing.into_vec())
    }

    pub fn get_course(&self, id: &str) -> Result<Course> {
        match self.send(self.client.get(self.url(&format!("/courses/{}", id)))) {
            Ok(response) => Self::decode(response, "course"),
            Err(LearnHubError::Api { status, .. }) if status == StatusCode::NOT_FOUND => {
                Err(LearnHubError::NotFound(format!("course {}", id)))
            }
            Err(e) => Err(e),
        }
    }

    pub fn instructor_courses(&self) -> Result<Vec<Course>> {
        let response = self.send(self.client.get(self.url("/instructor/courses")))?;
        let listing: Listing<Course> = Self::decode(response, "instructor course listing")?;
        Ok(listing.into_vec())
    }

    pub fn get_cart(&self) -> Result<Cart> {
        let response = self.send(self.client.get(self.url("/cart")))?;
        Self::decode(response, "cart")
    }

    pub fn add_to_cart(&self, course_id: &str) -> Result<Cart> {
        let body = AddToCartRequest {
            course_id: course_id.to_string(),
        };
        let response = self.send(self.client.post(self.url("/cart")).json(&body))?;
        Self::decode(response, "cart")
    }

    pub fn remove_from_cart(&self, course_id: &str) -> Result<Cart> {
        let response = self.send(
            self.client
                .delete(self.url(&format!("/cart/{}", course_id))),
        )?;
        Self::decode(response, "cart")
    }

    pub fn checkout(&self, promo_code: Option<&str>) -> Result<CheckoutReceipt> {
        let body = CheckoutRequest {
            promo_code: promo_code.map(str::to_string),
        };
        let response = self.send(self.client.post(self.url("/checkout")).json(&body))?;
        Self::decode(response, "checkout receipt")
    }

    pub fn list_enrollments(&self) -> Result<Vec<EnrollmentRecord>> {
        let response = self.send(self.client.get(self.url("/enrollments")))?;
        let listing: Listing<EnrollmentRecord> = Self::decode(response, "enrollments")?;
        Ok(listing.into_vec())
    }

    pub fn complete_lecture(
        &self,
        course_id: &str,
        lecture_id: &str,
        watched_seconds: Option<u64>,
    ) -> Result<EnrollmentRecord> {
        let url = self.url(&format!(
            "/enrollments/{}/lectures/{}/complete",
            course_id, lecture_id
        ));
        let body = CompleteLectureRequest { watched_seconds };
        let response = self.send(self.client.post(url).json(&body))?;
        Self::decode(response, "enrollment")
    }
}
