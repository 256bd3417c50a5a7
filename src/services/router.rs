use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::CardError;

pub const PERSISTENT_VOLUME_DETAIL_STATE: &str = "persistentvolumedetail";
pub const PERSISTENT_VOLUME_LIST_STATE: &str = "persistentvolumelist";

/// Parameters of a resource detail state. Cluster-scoped resources leave
/// `namespace` empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateParams {
    pub namespace: String,
    pub object_name: String,
}

impl StateParams {
    pub fn new(namespace: impl Into<String>, object_name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            object_name: object_name.into(),
        }
    }

    fn get(&self, param: &str) -> Option<&str> {
        match param {
            "objectNamespace" => Some(&self.namespace),
            "objectName" => Some(&self.object_name),
            _ => None,
        }
    }
}

/// Builds navigable hrefs for named states.
pub trait Router: Send + Sync {
    fn href(&self, state: &str, params: &StateParams) -> Result<String, CardError>;
}

/// State name → URL template table.
///
/// Templates are `/`-separated. A `:param` segment is replaced by the
/// URL-encoded parameter value; `:param?` is dropped when the value is empty.
#[derive(Debug, Clone)]
pub struct StateRegistry {
    prefix: String,
    states: HashMap<String, String>,
}

impl StateRegistry {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            states: HashMap::new(),
        }
    }

    /// Registry with the persistent volume list and detail states.
    pub fn with_default_states(prefix: impl Into<String>) -> Self {
        Self::new(prefix)
            .register(PERSISTENT_VOLUME_LIST_STATE, "/persistentvolume")
            .register(PERSISTENT_VOLUME_DETAIL_STATE, "/persistentvolume/:objectName")
    }

    pub fn register(mut self, state: impl Into<String>, template: impl Into<String>) -> Self {
        self.states.insert(state.into(), template.into());
        self
    }
}

impl Default for StateRegistry {
    fn default() -> Self {
        Self::with_default_states("#!")
    }
}

impl Router for StateRegistry {
    fn href(&self, state: &str, params: &StateParams) -> Result<String, CardError> {
        let template = self
            .states
            .get(state)
            .ok_or_else(|| CardError::UnknownState(state.to_string()))?;

        let mut href = self.prefix.clone();
        for segment in template.split('/').filter(|s| !s.is_empty()) {
            let Some(param) = segment.strip_prefix(':') else {
                href.push('/');
                href.push_str(segment);
                continue;
            };

            let (param, optional) = match param.strip_suffix('?') {
                Some(p) => (p, true),
                None => (param, false),
            };
            let value = params.get(param).ok_or_else(|| CardError::UnknownRouteParam {
                state: state.to_string(),
                param: param.to_string(),
            })?;

            if optional && value.is_empty() {
                continue;
            }
            href.push('/');
            href.push_str(&urlencoding::encode(value));
        }

        if template.starts_with('/') && href.len() == self.prefix.len() {
            href.push('/');
        }
        Ok(href)
    }
}
