//! # homegate-domain
//!
//! Pure domain model for the homegate device command gateway.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers and error conventions
//! - Define **Users** (actors that own devices)
//! - Define **Devices** (the things the gateway authorizes commands for)
//! - Define **Actions** (the closed `TURN_ON` / `TURN_OFF` vocabulary shared
//!   between the gateway and the command publisher)
//! - Define the **Envelope** response schema (header + payload) used by the
//!   ConnectedHome protocol
//! - Contain all invariant enforcement (ownership membership checks)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod action;
pub mod device;
pub mod envelope;
pub mod error;
pub mod id;
pub mod user;
