pub mod doctor_status;
pub mod donation;
pub mod extract;
pub mod health;
pub mod profile;
pub mod store;

use serde::Serialize;

/// `{"status": "success", "data": ...}` envelope returned by writes.
#[derive(Serialize)]
pub struct Success<T> {
    pub status: &'static str,
    pub data: T,
}

impl<T> Success<T> {
    pub fn new(data: T) -> Self {
        Self {
            status: "success",
            data,
        }
    }
}

/// `{"data": ...}` envelope returned by reads.
#[derive(Serialize)]
pub struct Data<T> {
    pub data: T,
}

/// `{"status": "success"}` with no payload.
#[derive(Serialize)]
pub struct Ack {
    pub status: &'static str,
}

impl Ack {
    pub fn success() -> Self {
        Self { status: "success" }
    }
}
