//! Narrow collaborator capabilities the card is constructed with, plus one
//! default implementation of each.

pub mod datefmt;
pub mod i18n;
pub mod router;

pub use datefmt::{DateFormatter, PatternDateFormatter};
pub use i18n::{Message, MessageCatalog, Translator};
pub use router::{Router, StateParams, StateRegistry};
