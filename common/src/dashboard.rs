//! Admin dashboard data: the concurrent three-collection load and what the
//! page does with its outcome.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::api::{ApiError, Backend, Fetched};
use crate::notice::Notice;
use crate::records::{Enquiry, FranchiseApplication, Registration};
use crate::session::{CredentialStore, Session};

/// Everything the dashboard tables show, in server order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub enquiries: Vec<Enquiry>,
    pub registrations: Vec<Registration>,
    pub franchise_applications: Vec<FranchiseApplication>,
}

/// One of the summary cards above the tabs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub count: usize,
}

impl DashboardData {
    pub fn stats(&self) -> [StatCard; 3] {
        [
            StatCard {
                label: "Total Enquiries",
                count: self.enquiries.len(),
            },
            StatCard {
                label: "Course Registrations",
                count: self.registrations.len(),
            },
            StatCard {
                label: "Franchise Applications",
                count: self.franchise_applications.len(),
            },
        ]
    }

    pub fn is_empty(&self, tab: Tab) -> bool {
        match tab {
            Tab::Enquiries => self.enquiries.is_empty(),
            Tab::Registrations => self.registrations.is_empty(),
            Tab::Franchise => self.franchise_applications.is_empty(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Enquiries,
    Registrations,
    Franchise,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Enquiries, Tab::Registrations, Tab::Franchise];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Enquiries => "Enquiries",
            Tab::Registrations => "Registrations",
            Tab::Franchise => "Franchise Applications",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Tab::Enquiries => "Recent Enquiries",
            Tab::Registrations => "Course Registrations",
            Tab::Franchise => "Franchise Applications",
        }
    }

    /// Text shown instead of a table when the collection is empty.
    pub fn empty_placeholder(self) -> &'static str {
        match self {
            Tab::Enquiries => "No enquiries yet",
            Tab::Registrations => "No registrations yet",
            Tab::Franchise => "No applications yet",
        }
    }
}

/// Fetch the three admin collections concurrently.
///
/// All three requests run to completion before this returns.  If any of them
/// was rejected as unauthorized the whole load is `Unauthorized`; otherwise
/// the first failure (in tab order) wins.
pub async fn load_dashboard<B: Backend>(backend: &B, token: &str) -> Fetched<DashboardData> {
    let (enquiries, registrations, franchise_applications) = futures::join!(
        backend.enquiries(token),
        backend.registrations(token),
        backend.franchise_applications(token),
    );

    let unauthorized = [
        enquiries.as_ref().err(),
        registrations.as_ref().err(),
        franchise_applications.as_ref().err(),
    ]
    .contains(&Some(&ApiError::Unauthorized));
    if unauthorized {
        warn!("Dashboard load rejected: token not authorized");
        return Err(ApiError::Unauthorized);
    }

    let data = DashboardData {
        enquiries: enquiries?,
        registrations: registrations?,
        franchise_applications: franchise_applications?,
    };
    info!(
        "Dashboard loaded: {} enquiries, {} registrations, {} franchise applications",
        data.enquiries.len(),
        data.registrations.len(),
        data.franchise_applications.len()
    );
    Ok(data)
}

/// What the dashboard page should do once the load has settled.
#[derive(Debug, Clone, PartialEq)]
pub enum Settled {
    Ready(DashboardData),
    /// Show the notice and keep the tables empty.
    Failed(Notice),
    /// The token was rejected; show the notice and go to the login page.
    SignedOut(Notice),
}

/// Apply a finished dashboard load to the client state.
pub fn settle(store: &impl CredentialStore, fetched: Fetched<DashboardData>) -> Settled {
    match fetched {
        Ok(data) => Settled::Ready(data),
        Err(ApiError::Unauthorized) => match Session::clear(store) {
            Ok(()) => Settled::SignedOut(Notice::error("Session expired, please log in again")),
            Err(e) => {
                warn!("Cannot clear rejected credentials: {e}");
                Settled::SignedOut(Notice::error(
                    "Session expired, but stored credentials could not be cleared",
                ))
            }
        },
        Err(_) => Settled::Failed(Notice::error("Failed to load data")),
    }
}

// ─── tests ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{self, FakeBackend};
    use crate::session::{MemoryStore, TOKEN_KEY, USER_KEY};

    #[tokio::test]
    async fn test_counts_and_empty_tab() {
        let backend = FakeBackend::with_counts(2, 0, 3);
        let data = load_dashboard(&backend, "secret").await.unwrap();

        let counts: Vec<usize> = data.stats().iter().map(|c| c.count).collect();
        assert_eq!(counts, vec![2, 0, 3]);
        assert!(data.is_empty(Tab::Registrations));
        assert!(!data.is_empty(Tab::Enquiries));
        assert_eq!(Tab::Registrations.empty_placeholder(), "No registrations yet");
    }

    #[tokio::test]
    async fn test_rows_keep_server_order() {
        let mut backend = FakeBackend::with_counts(0, 0, 0);
        let order = [7, 2, 9, 1];
        backend.enquiries = Ok(order.iter().map(|&i| fake::enquiry(i)).collect());

        let data = load_dashboard(&backend, "secret").await.unwrap();
        let ids: Vec<&str> = data.enquiries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["e7", "e2", "e9", "e1"]);
    }

    #[tokio::test]
    async fn test_any_unauthorized_fetch_wins() {
        let mut backend = FakeBackend::with_counts(1, 1, 1);
        backend.enquiries = Err(ApiError::Status(500));
        backend.franchise = Err(ApiError::Unauthorized);

        let result = load_dashboard(&backend, "secret").await;
        assert_eq!(result, Err(ApiError::Unauthorized));
    }

    #[tokio::test]
    async fn test_wrong_token_is_unauthorized() {
        let backend = FakeBackend::with_counts(1, 1, 1);
        let result = load_dashboard(&backend, "stale").await;
        assert_eq!(result, Err(ApiError::Unauthorized));
    }

    #[tokio::test]
    async fn test_first_failure_in_tab_order() {
        let mut backend = FakeBackend::with_counts(1, 1, 1);
        backend.registrations = Err(ApiError::Status(503));
        backend.franchise = Err(ApiError::Transport("timeout".into()));

        let result = load_dashboard(&backend, "secret").await;
        assert_eq!(result, Err(ApiError::Status(503)));
    }

    #[test]
    fn test_settle_unauthorized_clears_credentials() {
        let store = MemoryStore::new();
        store.insert(TOKEN_KEY, "secret");
        store.insert(USER_KEY, r#"{"name":"Priya","role":"admin"}"#);

        let settled = settle(&store, Err(ApiError::Unauthorized));
        assert!(matches!(settled, Settled::SignedOut(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_settle_other_failure_keeps_credentials() {
        let store = MemoryStore::new();
        store.insert(TOKEN_KEY, "secret");

        let settled = settle(&store, Err(ApiError::Status(500)));
        assert_eq!(settled, Settled::Failed(Notice::error("Failed to load data")));
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("secret"));
    }

    #[test]
    fn test_settle_unauthorized_with_broken_storage() {
        let store = MemoryStore::broken();
        store.insert(TOKEN_KEY, "secret");

        let settled = settle(&store, Err(ApiError::Unauthorized));
        assert_eq!(
            settled,
            Settled::SignedOut(Notice::error(
                "Session expired, but stored credentials could not be cleared"
            ))
        );
    }

    #[test]
    fn test_settle_ready() {
        let store = MemoryStore::new();
        let data = DashboardData::default();
        assert_eq!(settle(&store, Ok(data.clone())), Settled::Ready(data));
    }
}
