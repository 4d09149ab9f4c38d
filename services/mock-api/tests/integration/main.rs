
mod donation_test;
mod profile_test;
