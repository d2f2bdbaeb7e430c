use scoutmap_shared::filter::{compute_visible, FilterCriteria};
use scoutmap_shared::models::GroupRecord;

/// Lifecycle of the one data load a session performs. A failed load is
/// terminal: the session stays interactive with an empty group set and
/// nothing retries automatically.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

/// Every way a session can change. User input and load completion both
/// funnel through [`Session::apply`], so the selection-vs-visibility
/// invariant lives in exactly one place.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    DataLoaded(Vec<GroupRecord>),
    LoadFailed(String),
    SetSearchTerm(String),
    SetCity(String),
    ToggleRama(String),
    ClearRamas,
    ClearFilters,
    Select(u32),
    ClearSelection,
}

/// The whole mutable session state: load phase, the immutable group
/// set, the filter criteria and the current selection. Everything the
/// UI shows is a pure projection of this struct.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    pub load: LoadState,
    pub groups: Vec<GroupRecord>,
    pub criteria: FilterCriteria,
    pub selected_id: Option<u32>,
}

impl Session {
    /// Single update entry point.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::DataLoaded(groups) => {
                self.criteria = FilterCriteria::for_groups(&groups);
                self.groups = groups;
                self.load = LoadState::Ready;
                self.selected_id = None;
            }
            Action::LoadFailed(message) => {
                self.load = LoadState::Failed(message);
            }
            Action::SetSearchTerm(term) => self.criteria.search_term = term,
            Action::SetCity(city) => self.criteria.selected_city = city,
            Action::ToggleRama(rama) => self.criteria.toggle_rama(&rama),
            Action::ClearRamas => self.criteria.clear_ramas(),
            Action::ClearFilters => {
                // Resets criteria AND selection back to session defaults.
                self.criteria.clear();
                self.selected_id = None;
            }
            Action::Select(id) => self.selected_id = Some(id),
            Action::ClearSelection => self.selected_id = None,
        }
        self.drop_hidden_selection();
    }

    /// A selection that fell out of the visible set is cleared, so the
    /// detail panel can never show a group absent from the list.
    fn drop_hidden_selection(&mut self) {
        if let Some(id) = self.selected_id {
            if !self.visible().iter().any(|g| g.id == id) {
                self.selected_id = None;
            }
        }
    }

    /// The filtered subset, in load order.
    pub fn visible(&self) -> Vec<GroupRecord> {
        compute_visible(&self.groups, &self.criteria)
    }

    pub fn selected_group(&self) -> Option<&GroupRecord> {
        self.selected_id
            .and_then(|id| self.groups.iter().find(|g| g.id == id))
    }

    pub fn is_loading(&self) -> bool {
        self.load == LoadState::Loading
    }

    pub fn load_error(&self) -> Option<&str> {
        match &self.load {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}
