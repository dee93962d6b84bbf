pub mod home;
pub mod tutorial;
