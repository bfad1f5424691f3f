pub mod manifest;
pub mod media;
#[cfg(feature = "remote")]
pub mod remote;
pub mod seed;
pub mod store;
