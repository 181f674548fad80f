pub mod profile;

pub use profile::UserProfile;
