pub mod credentials;
pub mod extraction;
pub mod observability;
pub mod process;
pub mod transcoding;
