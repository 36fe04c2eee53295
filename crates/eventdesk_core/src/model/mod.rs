//! Domain records held by the store.

mod draft;
mod event;
mod user;

pub use draft::{EventDraft, ParticipantKind};
pub use event::Event;
pub use user::User;
