pub mod biography;
pub mod document;
pub mod error;
pub mod person;
pub mod schedule;

pub use biography::{BiographySections, Category};
pub use document::{DocumentFormat, DocumentRole, RawDocument};
pub use error::{ModelError, Result};
pub use person::{Person, ResolvedMatch, SpeakerLink};
pub use schedule::{ScheduleEntry, SessionKind};
