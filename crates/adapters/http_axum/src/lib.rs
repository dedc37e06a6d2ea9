//! # homegate-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the ConnectedHome JSON API (`/api/devices`, `/api/devices/turnon`,
//!   `/api/devices/turnoff`, `/api/devices/info`)
//! - Resolve bearer tokens into actors through the `TokenAuthenticator` port
//!   before any gateway logic runs
//! - Echo the `Message-Id` request header into response envelopes
//! - Map gateway errors into HTTP responses
//!   (`Unauthorized` → 401 `{"error":"Unauthorized"}`)
//!
//! ## Dependency rule
//! Depends on `homegate-app` (for port traits and the gateway service) and
//! `homegate-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod extract;
pub mod router;
pub mod state;
