use crate::api::{ApiClient, ApiError};
use crate::notice::{Notice, FETCH_FAILED};
use event_console_dto::records::{Counts, Person};
use log::warn;
use strum::{Display, EnumIter};

/// One independently fetched piece of the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub enum Loadable<T> {
    Loading,
    Ready(T),
    Failed,
}

// Manual impl, derive would require `T: Default`.
impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Loadable::Loading
    }
}

impl<T> Loadable<T> {
    /// A failure never replaces data that already arrived.
    fn fail(&mut self) {
        if !matches!(self, Loadable::Ready(_)) {
            *self = Loadable::Failed;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum DashboardSection {
    Counts,
    TotalAmount,
    TotalParticipants,
    LatestUsers,
    LatestStaff,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardUpdate {
    Counts(Counts),
    TotalAmount(f64),
    TotalParticipants(u64),
    LatestUsers(Vec<Person>),
    LatestStaff(Vec<Person>),
    Failed(DashboardSection),
}

impl DashboardSection {
    /// Fetches this section alone. Failures are logged here and folded into the update.
    pub async fn fetch(self, client: &ApiClient) -> DashboardUpdate {
        let result: Result<DashboardUpdate, ApiError> = match self {
            DashboardSection::Counts => client.counts().await.map(DashboardUpdate::Counts),
            DashboardSection::TotalAmount => {
                client.total_amount().await.map(DashboardUpdate::TotalAmount)
            }
            DashboardSection::TotalParticipants => client
                .total_participants()
                .await
                .map(DashboardUpdate::TotalParticipants),
            DashboardSection::LatestUsers => {
                client.latest_users().await.map(DashboardUpdate::LatestUsers)
            }
            DashboardSection::LatestStaff => {
                client.latest_staff().await.map(DashboardUpdate::LatestStaff)
            }
        };
        result.unwrap_or_else(|e| {
            warn!("Dashboard section {} failed: {}", self, e);
            DashboardUpdate::Failed(self)
        })
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct DashboardState {
    pub counts: Loadable<Counts>,
    pub total_amount: Loadable<f64>,
    pub total_participants: Loadable<u64>,
    pub latest_users: Loadable<Vec<Person>>,
    pub latest_staff: Loadable<Vec<Person>>,
}

impl DashboardUpdate {
    /// The notice a failed section raises.
    pub fn notice(&self) -> Option<Notice> {
        matches!(self, DashboardUpdate::Failed(_)).then(|| Notice::error(FETCH_FAILED))
    }
}

impl DashboardState {
    /// Applies one section's result, touching nothing else.
    pub fn apply(&mut self, update: DashboardUpdate) {
        match update {
            DashboardUpdate::Counts(counts) => self.counts = Loadable::Ready(counts),
            DashboardUpdate::TotalAmount(amount) => self.total_amount = Loadable::Ready(amount),
            DashboardUpdate::TotalParticipants(total) => {
                self.total_participants = Loadable::Ready(total)
            }
            DashboardUpdate::LatestUsers(users) => self.latest_users = Loadable::Ready(users),
            DashboardUpdate::LatestStaff(staff) => self.latest_staff = Loadable::Ready(staff),
            DashboardUpdate::Failed(DashboardSection::Counts) => self.counts.fail(),
            DashboardUpdate::Failed(DashboardSection::TotalAmount) => self.total_amount.fail(),
            DashboardUpdate::Failed(DashboardSection::TotalParticipants) => {
                self.total_participants.fail()
            }
            DashboardUpdate::Failed(DashboardSection::LatestUsers) => self.latest_users.fail(),
            DashboardUpdate::Failed(DashboardSection::LatestStaff) => self.latest_staff.fail(),
        }
    }
}

/// Formats the collected amount the way the dashboard card shows it.
pub fn format_amount(amount: f64) -> String {
    format!("₹{:.2}", amount)
}
