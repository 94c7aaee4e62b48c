//! Contract with the external backend API.
//!
//! The [`Backend`] trait is implemented over HTTP by the web server and by
//! in-memory fakes in tests.

use std::future::Future;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::records::{
    BlogPost, Enquiry, FranchiseApplication, NewEnquiry, NewFranchiseApplication,
    NewRegistration, Registration,
};
use crate::session::User;

/// Failure of a single backend call.
///
/// Serialisable so it survives the trip from a server function to the
/// browser unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ApiError {
    #[error("not authorized")]
    Unauthorized,
    #[error("not found")]
    NotFound,
    #[error("{0}")]
    Invalid(String),
    #[error("backend returned HTTP {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Map a non-success HTTP status onto an error kind.
    pub fn from_status(code: u16) -> Self {
        match code {
            401 | 403 => ApiError::Unauthorized,
            404 => ApiError::NotFound,
            other => ApiError::Status(other),
        }
    }
}

/// Result of a backend call as seen by pages.
pub type Fetched<T> = Result<T, ApiError>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of a successful `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// Operations the site needs from the backend API.
///
/// Admin listings take the bearer token; public reads and lead submissions
/// do not.
pub trait Backend: Send + Sync {
    fn enquiries(&self, token: &str) -> impl Future<Output = Fetched<Vec<Enquiry>>> + Send;

    fn registrations(
        &self,
        token: &str,
    ) -> impl Future<Output = Fetched<Vec<Registration>>> + Send;

    fn franchise_applications(
        &self,
        token: &str,
    ) -> impl Future<Output = Fetched<Vec<FranchiseApplication>>> + Send;

    fn blog_posts(&self) -> impl Future<Output = Fetched<Vec<BlogPost>>> + Send;

    fn blog_post(&self, id: &str) -> impl Future<Output = Fetched<BlogPost>> + Send;

    fn login(&self, request: &LoginRequest) -> impl Future<Output = Fetched<LoginResponse>> + Send;

    fn submit_enquiry(&self, enquiry: &NewEnquiry) -> impl Future<Output = Fetched<()>> + Send;

    fn submit_registration(
        &self,
        registration: &NewRegistration,
    ) -> impl Future<Output = Fetched<()>> + Send;

    fn submit_franchise_application(
        &self,
        application: &NewFranchiseApplication,
    ) -> impl Future<Output = Fetched<()>> + Send;
}

#[cfg(test)]
pub(crate) mod fake {
    //! In-memory backend used by the loader tests.

    use super::*;

    #[derive(Debug, Clone)]
    pub struct FakeBackend {
        pub token: String,
        pub enquiries: Fetched<Vec<Enquiry>>,
        pub registrations: Fetched<Vec<Registration>>,
        pub franchise: Fetched<Vec<FranchiseApplication>>,
        pub posts: Vec<BlogPost>,
    }

    impl FakeBackend {
        pub fn with_counts(enquiries: usize, registrations: usize, franchise: usize) -> Self {
            FakeBackend {
                token: "secret".into(),
                enquiries: Ok((0..enquiries).map(enquiry).collect()),
                registrations: Ok((0..registrations).map(registration).collect()),
                franchise: Ok((0..franchise).map(application).collect()),
                posts: Vec::new(),
            }
        }

        fn authorize<T: Clone>(&self, token: &str, data: &Fetched<T>) -> Fetched<T> {
            if token != self.token {
                return Err(ApiError::Unauthorized);
            }
            data.clone()
        }
    }

    pub fn enquiry(i: usize) -> Enquiry {
        Enquiry {
            id: format!("e{i}"),
            name: format!("Enquirer {i}"),
            email: format!("e{i}@example.com"),
            phone: None,
            service_interested_in: None,
            message: "Please call me back".into(),
            created_at: "2024-05-01T09:00:00Z".into(),
        }
    }

    pub fn registration(i: usize) -> Registration {
        Registration {
            id: format!("r{i}"),
            name: format!("Trainee {i}"),
            email: format!("r{i}@example.com"),
            course_title: "ISO 9001 Internal Auditor".into(),
            country: "Kenya".into(),
            payment_status: Default::default(),
            created_at: "2024-05-02T09:00:00Z".into(),
        }
    }

    pub fn application(i: usize) -> FranchiseApplication {
        FranchiseApplication {
            id: format!("f{i}"),
            name: format!("Applicant {i}"),
            business_name: format!("Quality Partners {i}"),
            country: "Peru".into(),
            experience: "5 years".into(),
            email: format!("f{i}@example.com"),
            status: Default::default(),
            created_at: "2024-05-03T09:00:00Z".into(),
        }
    }

    pub fn post(id: &str) -> BlogPost {
        BlogPost {
            id: id.into(),
            title: "Why ISO 9001 matters".into(),
            author: "Editorial Team".into(),
            content: "Line one\nLine two".into(),
            tags: Some(vec!["quality".into(), "iso".into()]),
            created_at: "2024-02-10T12:00:00Z".into(),
        }
    }

    impl Backend for FakeBackend {
        async fn enquiries(&self, token: &str) -> Fetched<Vec<Enquiry>> {
            self.authorize(token, &self.enquiries)
        }

        async fn registrations(&self, token: &str) -> Fetched<Vec<Registration>> {
            self.authorize(token, &self.registrations)
        }

        async fn franchise_applications(&self, token: &str) -> Fetched<Vec<FranchiseApplication>> {
            self.authorize(token, &self.franchise)
        }

        async fn blog_posts(&self) -> Fetched<Vec<BlogPost>> {
            Ok(self.posts.clone())
        }

        async fn blog_post(&self, id: &str) -> Fetched<BlogPost> {
            self.posts
                .iter()
                .find(|p| p.id == id)
                .cloned()
                .ok_or(ApiError::NotFound)
        }

        async fn login(&self, _request: &LoginRequest) -> Fetched<LoginResponse> {
            Err(ApiError::Unauthorized)
        }

        async fn submit_enquiry(&self, _enquiry: &NewEnquiry) -> Fetched<()> {
            Ok(())
        }

        async fn submit_registration(&self, _registration: &NewRegistration) -> Fetched<()> {
            Ok(())
        }

        async fn submit_franchise_application(
            &self,
            _application: &NewFranchiseApplication,
        ) -> Fetched<()> {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::from_status(401), ApiError::Unauthorized);
        assert_eq!(ApiError::from_status(403), ApiError::Unauthorized);
        assert_eq!(ApiError::from_status(404), ApiError::NotFound);
        assert_eq!(ApiError::from_status(502), ApiError::Status(502));
    }

    #[test]
    fn test_error_survives_json() {
        let err = ApiError::Invalid("Name is required".into());
        let json = serde_json::to_string(&err).unwrap();
        let back: ApiError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, err);
    }
}
