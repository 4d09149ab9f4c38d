use chrono::{DateTime, Utc};

/// A user profile, keyed by the caller-supplied `id`.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub id: String,
    pub username: String,
    pub usertype: String,
    pub locality: Option<String>,
    pub licensenumber: Option<String>,
    pub isverified: bool,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A request for donations raised by a user.
#[derive(Debug, Clone, PartialEq)]
pub struct DonationRequest {
    pub id: String,
    /// Profile id of the requester. Not checked against the profiles table.
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub amount: f64,
    pub created_at: DateTime<Utc>,
    pub fulfilled: bool,
}

/// Online availability of a doctor, keyed by `doctor_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct DoctorStatus {
    pub doctor_id: String,
    pub is_online: bool,
    pub phone_number: String,
    pub created_at: DateTime<Utc>,
}

/// The six mappings held by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Profiles,
    DonationRequests,
    DoctorStatus,
    Posts,
    Comments,
    Notifications,
}

impl Table {
    pub const ALL: [Table; 6] = [
        Table::Profiles,
        Table::DonationRequests,
        Table::DoctorStatus,
        Table::Posts,
        Table::Comments,
        Table::Notifications,
    ];
}
