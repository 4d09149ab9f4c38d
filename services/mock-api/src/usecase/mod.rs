pub mod doctor_status;
pub mod donation;
pub mod profile;
pub mod store;
