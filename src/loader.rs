use crate::error::FolioError;
use crate::github::client::RepoSource;
use crate::github::types::DisplayList;

/// What the projects grid can show. `Populated` always holds a non-empty list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Populated(DisplayList),
    Empty,
}

impl LoadState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, LoadState::Loading)
    }

    pub fn label(&self) -> &'static str {
        match self {
            LoadState::Loading => "loading",
            LoadState::Populated(_) => "ready",
            LoadState::Empty => "empty",
        }
    }

    pub fn display_list(&self) -> Option<&DisplayList> {
        match self {
            LoadState::Populated(list) => Some(list),
            _ => None,
        }
    }
}

/// Runs the one fetch for a mount and folds every outcome into a terminal
/// state. Failures are only visible in the log.
pub async fn load(source: &dyn RepoSource) -> LoadState {
    match source.list_repos().await {
        Ok(records) => {
            let upstream = records.len();
            let list = DisplayList::derive(records);
            tracing::info!(upstream, shown = list.len(), "repository list loaded");
            if list.is_empty() {
                LoadState::Empty
            } else {
                LoadState::Populated(list)
            }
        }
        Err(e) => {
            let kind = match e {
                FolioError::Format(_) => "format",
                _ => "transport",
            };
            tracing::error!(kind, error = %e, "repository list fetch failed");
            LoadState::Empty
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MountId(u64);

/// Lifecycle of the projects grid: one fetch per mount, results from a
/// previous mount are discarded.
#[derive(Debug, Default)]
pub struct RepositoryListLoader {
    mounted: Option<(MountId, LoadState)>,
    next_id: u64,
}

impl RepositoryListLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fresh mount in `Loading`. The caller issues exactly one
    /// [`load`] for the returned id and hands the outcome to [`Self::resolve`].
    pub fn mount(&mut self) -> MountId {
        self.next_id += 1;
        let id = MountId(self.next_id);
        self.mounted = Some((id, LoadState::Loading));
        id
    }

    pub fn unmount(&mut self) {
        self.mounted = None;
    }

    pub fn state(&self) -> Option<&LoadState> {
        self.mounted.as_ref().map(|(_, s)| s)
    }

    /// Applies a finished load. Returns false when the result was dropped
    /// because its mount is gone or already settled.
    pub fn resolve(&mut self, id: MountId, outcome: LoadState) -> bool {
        match self.mounted {
            Some((current, ref mut state)) if current == id && !state.is_terminal() => {
                *state = outcome;
                true
            }
            _ => {
                tracing::debug!(?id, "discarding load result for stale mount");
                false
            }
        }
    }
}
