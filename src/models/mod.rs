//! Domain models for the click-ops detector.
//!
//! - [`Subscription`] - Azure subscription as listed by `az account list`
//! - [`ResourceRecord`] - One resource from `az resource list`

mod resource;
mod subscription;

// Re-export public types
pub use resource::ResourceRecord;
pub use subscription::Subscription;
