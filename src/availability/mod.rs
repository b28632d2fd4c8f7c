mod compat;
mod mention;
mod reason;
mod repository;
mod service;
mod status;
mod user;

pub use compat::Compatibility;
pub use mention::{resolve_token, MentionParseError, MentionParser, TimableMention};
pub use reason::{parse_reason, Reason};
pub use repository::{InMemoryRepository, Repository};
pub use service::{AvailabilityService, Profile};
pub use status::Status;
pub use user::{User, UserId};
