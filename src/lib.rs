//! Persistent volume card view-model for the cluster dashboard.
//!
//! The parent list hands each [`PersistentVolume`] to a
//! [`PersistentVolumeCard`], which derives the detail href, the localized
//! creation tooltip and the rest of the card's display values.

pub mod card;
pub mod error;
pub mod format;
pub mod models;
pub mod services;
pub mod settings;

pub use card::{CardContext, PersistentVolumeCard};
pub use error::CardError;
pub use models::k8s::{PersistentVolume, PersistentVolumeCardView, PersistentVolumeList};
pub use settings::CardSettings;
