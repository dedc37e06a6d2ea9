//! # homegate-adapter-mqtt
//!
//! MQTT adapter — implements the `CommandPublisher` port over
//! [rumqttc](https://docs.rs/rumqttc).
//!
//! ## Responsibilities
//! - Connect to an MQTT broker and keep the connection alive from a
//!   background task
//! - Publish one command message per authorized control request:
//!   topic `{base_topic}/{user_id}/{device_id}`, payload the lower-cased
//!   action, QoS 1 (at-least-once)
//! - Surface hand-off failures as publish errors; delivery beyond the broker
//!   is not tracked here
//!
//! ## Dependency rule
//! Same as other adapters: depends on `homegate-app` and `homegate-domain`.

pub mod config;
pub mod error;
pub mod publisher;

pub use config::MqttConfig;
pub use error::MqttError;
pub use publisher::MqttCommandPublisher;
