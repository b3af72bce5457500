mod client;
mod events;

pub use client::{Client, FetchError};
pub use events::{Event, EventKind};

pub(crate) mod prelude {
    pub use super::Client;
    pub use super::Event;
}
