pub mod connection;
pub mod error;
pub mod repositories;

mod rows;

pub use connection::database::{Database, DatabaseOptions};
pub use error::{DbError, Result};
pub use repositories::event_repository::EventRepository;
pub use repositories::rsvp_repository::RsvpRepository;
pub use repositories::user_repository::UserRepository;
