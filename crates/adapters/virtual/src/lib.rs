//! # homegate-adapter-virtual
//!
//! Virtual/demo adapter that provides in-memory implementations of every port
//! for testing and demonstration purposes.
//!
//! ## Provided implementations
//!
//! | Type | Port | Behaviour |
//! |------|------|-----------|
//! | [`VirtualUserDirectory`] | `UserRepository`, `TokenAuthenticator` | Seeded users with tokens and device lists |
//! | [`RecordingPublisher`] | `CommandPublisher` | Records every publish for assertions |
//! | [`StaticDeviceInformation`] | `DeviceInformation` | Echoes the request as a fixed JSON shape |
//!
//! ## Dependency rule
//!
//! Depends on `homegate-app` (port traits) and `homegate-domain` only.

pub mod information;
pub mod publisher;
pub mod users;

pub use information::StaticDeviceInformation;
pub use publisher::RecordingPublisher;
pub use users::VirtualUserDirectory;
