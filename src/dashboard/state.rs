//! View state of a list controller

use serde::Serialize;

/// Tri-state model consumed by the rendering surfaces
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum ViewState<T> {
    /// Waiting for the response; no data yet
    Loading,
    /// Fetch failed; carries the message shown to the user
    Error(String),
    /// Collection received (possibly empty)
    Ready(Vec<T>),
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState::Loading
    }
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ViewState::Ready(_))
    }

    /// Error message, if the fetch failed
    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Items, once ready
    pub fn items(&self) -> Option<&[T]> {
        match self {
            ViewState::Ready(items) => Some(items),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_loading() {
        let state: ViewState<u32> = ViewState::default();
        assert!(state.is_loading());
        assert_eq!(state.items(), None);
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_accessors() {
        let ready = ViewState::Ready(vec![1, 2]);
        assert!(ready.is_ready());
        assert_eq!(ready.items(), Some(&[1, 2][..]));

        let failed: ViewState<u32> = ViewState::Error("HTTP error! status: 500".to_string());
        assert_eq!(failed.error(), Some("HTTP error! status: 500"));
        assert!(!failed.is_ready());
    }

    #[test]
    fn test_serialized_shape() {
        let ready = serde_json::to_value(ViewState::Ready(vec![1])).unwrap();
        assert_eq!(ready, serde_json::json!({"state": "ready", "data": [1]}));

        let loading = serde_json::to_value(ViewState::<u32>::Loading).unwrap();
        assert_eq!(loading, serde_json::json!({"state": "loading"}));
    }
}
