use chrono::{DateTime, Utc};

use crate::error::CardError;
use crate::format::{format_age, short_access_modes, storage_capacity};
use crate::models::k8s::{PersistentVolume, PersistentVolumeCardView, PersistentVolumeList};
use crate::services::i18n::{
    MSG_PERSISTENT_VOLUME_LIST_CREATED_AT_TOOLTIP,
    MSG_PERSISTENT_VOLUME_LIST_CREATED_AT_UNKNOWN_TOOLTIP,
};
use crate::services::router::PERSISTENT_VOLUME_DETAIL_STATE;
use crate::services::{
    DateFormatter, MessageCatalog, PatternDateFormatter, Router, StateParams, StateRegistry,
    Translator,
};

const UNKNOWN_AGE: &str = "<unknown>";

/// Controller for the persistent volume card.
///
/// Borrows one persistent volume from the parent list for the duration of a
/// render and derives the values the card template shows.
pub struct PersistentVolumeCard<'a> {
    persistent_volume: &'a PersistentVolume,
    name: &'a str,
    router: &'a dyn Router,
    dates: &'a dyn DateFormatter,
    translator: &'a dyn Translator,
}

impl<'a> PersistentVolumeCard<'a> {
    /// Fails with [`CardError::NotBound`] when the volume has no name. An
    /// empty name is accepted.
    pub fn new(
        persistent_volume: &'a PersistentVolume,
        router: &'a dyn Router,
        dates: &'a dyn DateFormatter,
        translator: &'a dyn Translator,
    ) -> Result<Self, CardError> {
        let name = persistent_volume
            .object_meta
            .name
            .as_deref()
            .ok_or(CardError::NotBound)?;

        Ok(Self {
            persistent_volume,
            name,
            router,
            dates,
            translator,
        })
    }

    pub fn persistent_volume(&self) -> &'a PersistentVolume {
        self.persistent_volume
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Href of this volume's detail page.
    pub fn detail_href(&self) -> Result<String, CardError> {
        // Persistent volumes are cluster scoped: no namespace.
        let href = self
            .router
            .href(PERSISTENT_VOLUME_DETAIL_STATE, &StateParams::new("", self.name))?;
        log::debug!("persistent volume {:?}: detail href {href}", self.name);
        Ok(href)
    }

    /// Localized "Created at <short date>" tooltip.
    ///
    /// A missing or unparseable date yields "Created at unknown time".
    pub fn created_at_tooltip(&self, creation_date: Option<&str>) -> String {
        match creation_date.and_then(|raw| self.dates.parse(raw)) {
            Some(date) => self.created_at_tooltip_for(&date),
            None => {
                log::warn!(
                    "persistent volume {:?}: unusable creation date {:?}",
                    self.name,
                    creation_date
                );
                self.translator
                    .translate(&MSG_PERSISTENT_VOLUME_LIST_CREATED_AT_UNKNOWN_TOOLTIP, &[])
            }
        }
    }

    pub fn created_at_tooltip_for(&self, creation_date: &DateTime<Utc>) -> String {
        let formatted = self.dates.short_format(creation_date);
        self.translator.translate(
            &MSG_PERSISTENT_VOLUME_LIST_CREATED_AT_TOOLTIP,
            &[("creationDate", formatted.as_str())],
        )
    }

    /// Every value the card template displays, with age relative to `now`.
    pub fn view(&self, now: DateTime<Utc>) -> Result<PersistentVolumeCardView, CardError> {
        let pv = self.persistent_volume;
        let raw_created = pv.object_meta.creation_timestamp.as_deref();
        let age = raw_created
            .and_then(|raw| self.dates.parse(raw))
            .map(|created| format_age(created, now))
            .unwrap_or_else(|| UNKNOWN_AGE.to_string());

        Ok(PersistentVolumeCardView {
            name: self.name.to_string(),
            detail_href: self.detail_href()?,
            status: pv.status.clone(),
            claim: pv.claim.clone(),
            capacity: storage_capacity(&pv.capacity),
            access_modes: short_access_modes(&pv.access_modes),
            reclaim_policy: pv.reclaim_policy.clone(),
            storage_class: pv.storage_class.clone(),
            reason: pv.reason.clone(),
            age,
            created_at_tooltip: self.created_at_tooltip(raw_created),
        })
    }
}

/// Owns the default collaborators so cards can borrow them.
#[derive(Debug, Clone, Default)]
pub struct CardContext {
    router: StateRegistry,
    dates: PatternDateFormatter,
    translator: MessageCatalog,
}

impl CardContext {
    pub fn new(router: StateRegistry, dates: PatternDateFormatter, translator: MessageCatalog) -> Self {
        Self {
            router,
            dates,
            translator,
        }
    }

    pub fn card<'a>(
        &'a self,
        persistent_volume: &'a PersistentVolume,
    ) -> Result<PersistentVolumeCard<'a>, CardError> {
        PersistentVolumeCard::new(persistent_volume, &self.router, &self.dates, &self.translator)
    }

    /// Card views for a whole list page. Unnamed entries are skipped with a
    /// warning so one bad item does not blank the list.
    pub fn views(
        &self,
        list: &PersistentVolumeList,
        now: DateTime<Utc>,
    ) -> Result<Vec<PersistentVolumeCardView>, CardError> {
        let mut views = Vec::with_capacity(list.persistent_volumes.len());
        for pv in &list.persistent_volumes {
            match self.card(pv) {
                Ok(card) => views.push(card.view(now)?),
                Err(CardError::NotBound) => {
                    log::warn!("persistent volume list: skipping entry without objectMeta.name");
                }
                Err(e) => return Err(e),
            }
        }
        Ok(views)
    }
}
