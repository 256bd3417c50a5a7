// Rust structs mirroring the dashboard backend's persistent volume payloads
use std::collections::BTreeMap;

use chrono::SecondsFormat;
use k8s_openapi::api::core::v1 as corev1;
use serde::{Deserialize, Serialize};

use crate::error::CardError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectMeta {
    /// `None` only for malformed payloads; a card refuses to bind to those.
    pub name: Option<String>,
    pub namespace: Option<String>,
    pub labels: BTreeMap<String, String>,
    /// Raw RFC 3339 string as sent by the backend. Parsed at display time so
    /// a bad value degrades the tooltip instead of failing the whole list.
    pub creation_timestamp: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypeMeta {
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersistentVolume {
    pub object_meta: ObjectMeta,
    pub type_meta: TypeMeta,
    /// Resource name ("storage") to quantity ("10Gi").
    pub capacity: BTreeMap<String, String>,
    pub access_modes: Vec<String>,
    pub reclaim_policy: String,
    pub storage_class: String,
    /// Volume phase: Available, Bound, Released, Failed, Pending.
    pub status: String,
    /// `<namespace>/<name>` of the bound claim, empty when unbound.
    pub claim: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListMeta {
    pub total_items: usize,
}

/// The page of persistent volumes the list view renders cards from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersistentVolumeList {
    pub list_meta: ListMeta,
    pub persistent_volumes: Vec<PersistentVolume>,
}

impl PersistentVolumeList {
    pub fn from_json(payload: &str) -> Result<Self, CardError> {
        Ok(serde_json::from_str(payload)?)
    }
}

impl From<&corev1::PersistentVolume> for PersistentVolume {
    fn from(pv: &corev1::PersistentVolume) -> Self {
        let meta = &pv.metadata;
        let spec = pv.spec.as_ref();
        let status = pv.status.as_ref();

        let capacity = spec
            .and_then(|s| s.capacity.as_ref())
            .map(|c| c.iter().map(|(k, q)| (k.clone(), q.0.clone())).collect())
            .unwrap_or_default();

        let claim = spec
            .and_then(|s| s.claim_ref.as_ref())
            .map(|r| {
                format!(
                    "{}/{}",
                    r.namespace.as_deref().unwrap_or_default(),
                    r.name.as_deref().unwrap_or_default()
                )
            })
            .unwrap_or_default();

        PersistentVolume {
            object_meta: ObjectMeta {
                name: meta.name.clone(),
                namespace: meta.namespace.clone(),
                labels: meta.labels.clone().unwrap_or_default(),
                creation_timestamp: meta
                    .creation_timestamp
                    .as_ref()
                    .map(|t| t.0.to_rfc3339_opts(SecondsFormat::Secs, true)),
            },
            type_meta: TypeMeta {
                kind: "persistentvolume".to_string(),
            },
            capacity,
            access_modes: spec.and_then(|s| s.access_modes.clone()).unwrap_or_default(),
            reclaim_policy: spec
                .and_then(|s| s.persistent_volume_reclaim_policy.clone())
                .unwrap_or_default(),
            storage_class: spec
                .and_then(|s| s.storage_class_name.clone())
                .unwrap_or_default(),
            status: status.and_then(|s| s.phase.clone()).unwrap_or_default(),
            claim,
            reason: status.and_then(|s| s.reason.clone()).unwrap_or_default(),
        }
    }
}

/// Display-ready values for one persistent volume card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistentVolumeCardView {
    pub name: String,
    pub detail_href: String,
    pub status: String,
    pub claim: String,
    pub capacity: String,
    /// Abbreviated, e.g. "RWO,ROX"
    pub access_modes: String,
    pub reclaim_policy: String,
    pub storage_class: String,
    pub reason: String,
    pub age: String,
    pub created_at_tooltip: String,
}
