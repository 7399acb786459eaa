use serde::{Deserialize, Serialize};

/// Registrations per event, as shown on the dashboard grid.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct EventCount {
    pub event: String,
    #[serde(default)]
    pub participants: u64,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Counts {
    #[serde(default)]
    pub events: Vec<EventCount>,
    #[serde(default)]
    pub staff_count: u64,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AmountTotal {
    pub total_amount: f64,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserTotal {
    pub total_user_count: u64,
}

/// Short form of a user or staff member: latest registrations and search hits.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub mobile: String,
    pub created_at: String,
}

impl Person {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Full registration record of a participant or teacher.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Registrant {
    pub first_name: String,
    pub last_name: String,
    pub college_name: String,
    /// Registration token printed on the badge, not a session credential.
    #[serde(rename = "Token")]
    pub token: String,
    pub mobile: String,
    pub email: String,
    pub country: String,
    pub state: String,
    pub created_at: String,
    /// Photo URL.
    #[serde(rename = "Image")]
    pub image: String,
}

impl Registrant {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct LatestUsers {
    #[serde(default)]
    pub users: Vec<Person>,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct LatestStaff {
    #[serde(default)]
    pub staff: Vec<Person>,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct UserList {
    #[serde(default)]
    pub users: Vec<Registrant>,
}

/// The staff listing capitalises its key.
#[derive(Deserialize, Debug, Default, Clone)]
pub struct StaffList {
    #[serde(rename = "Staff", default)]
    pub staff: Vec<Registrant>,
}

/// Search answer. At most one of the two is present, neither when nothing matched.
#[derive(Deserialize, Debug, Default, Clone)]
pub struct MobileSearch {
    #[serde(default)]
    pub user: Option<Person>,
    #[serde(default)]
    pub staff: Option<Person>,
}

impl MobileSearch {
    pub fn into_results(self) -> Vec<Person> {
        self.user.or(self.staff).into_iter().collect()
    }
}
