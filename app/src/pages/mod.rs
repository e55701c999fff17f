pub mod home;
pub mod section;
