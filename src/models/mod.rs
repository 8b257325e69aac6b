pub mod appointments;
pub mod identities;
