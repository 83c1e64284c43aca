//! Presentation-facing fetch state.

use serde::{Deserialize, Serialize};

/// Tri-state handed to the presentation layer for each fetch operation.
///
/// Per-token degradation (default name/image fill) is invisible here: it
/// produces `Ready` with normal-looking content. `Failed` is reserved for
/// total pipeline failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum FetchState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> FetchState<T> {
    /// Project a pipeline result into the tri-state.
    pub fn from_result(result: Result<T, anyhow::Error>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(e) => Self::Failed(format!("{e:#}")),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_result() {
        let ok: FetchState<u32> = FetchState::from_result(Ok(7));
        assert_eq!(ok.ready(), Some(&7));
        assert!(!ok.is_loading());

        let err: FetchState<u32> = FetchState::from_result(Err(anyhow::anyhow!("boom")));
        assert!(err.error().unwrap().contains("boom"));
        assert!(err.ready().is_none());
    }
}
