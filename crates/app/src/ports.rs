//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.

pub mod authenticator;
pub mod command_publisher;
pub mod device_information;
pub mod user_repo;

pub use authenticator::TokenAuthenticator;
pub use command_publisher::CommandPublisher;
pub use device_information::DeviceInformation;
pub use user_repo::UserRepository;
