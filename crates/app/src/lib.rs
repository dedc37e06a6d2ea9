//! # homegate-app
//!
//! Application layer — the gateway use-case and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `UserRepository` — ownership store lookup by user id
//!   - `TokenAuthenticator` — bearer token to actor resolution
//!   - `CommandPublisher` — asynchronous command hand-off
//!   - `DeviceInformation` — opaque device telemetry lookup
//! - Provide the **gateway service** implementing the three operations:
//!   discover, control, and info
//! - Orchestrate domain objects without knowing *how* persistence or IO works
//!
//! ## Dependency rule
//! Depends on `homegate-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
