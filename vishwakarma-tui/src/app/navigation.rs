use super::state::{Segment, View};
use super::store::{ProjectStore, StoreError};
use super::App;

/// Which view and segment are visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRegistry {
    active_view: View,
    active_project: Option<i64>,
    active_segment: Segment,
}

impl Default for ViewRegistry {
    fn default() -> Self {
        Self {
            active_view: View::Dashboard,
            active_project: None,
            active_segment: Segment::Description,
        }
    }
}

impl ViewRegistry {
    pub fn active_view(&self) -> View {
        self.active_view
    }

    pub fn active_project(&self) -> Option<i64> {
        self.active_project
    }

    pub fn active_segment(&self) -> Segment {
        self.active_segment
    }

    pub fn open_project(&mut self, id: i64, store: &ProjectStore) -> Result<(), StoreError> {
        store.get(id)?;
        self.active_view = View::ProjectDetail;
        self.active_project = Some(id);
        self.active_segment = Segment::Description;
        Ok(())
    }

    pub fn close_project(&mut self) {
        self.active_view = View::Dashboard;
        self.active_project = None;
    }

    /// Returns whether the segment changed. Ignored outside the detail view.
    pub fn select_segment(&mut self, segment: Segment) -> bool {
        if self.active_view != View::ProjectDetail || self.active_segment == segment {
            return false;
        }
        self.active_segment = segment;
        true
    }
}

impl App {
    pub fn open_project(&mut self, id: i64) {
        match self.views.open_project(id, &self.store) {
            Ok(()) => {
                tracing::debug!(project_id = id, "opened project");
                self.analysis_index = 0;
            }
            Err(e) => {
                tracing::warn!(project_id = id, "cannot open project: {}", e);
            }
        }
    }

    pub fn close_project(&mut self) {
        tracing::debug!("back to dashboard");
        self.views.close_project();
        self.api_keys.dismiss();
    }

    /// Switch segment, prompting for API keys the first time statistics
    /// are shown in a session.
    pub fn select_segment(&mut self, segment: Segment) {
        self.views.select_segment(segment);
        if self.views.active_view() == View::ProjectDetail && segment == Segment::Statistics {
            self.api_keys.prompt();
        }
    }

    pub fn next_segment(&mut self) {
        self.select_segment(self.views.active_segment().next());
    }

    pub fn previous_segment(&mut self) {
        self.select_segment(self.views.active_segment().previous());
    }

    pub fn save_api_keys(&mut self) {
        match self.api_keys.save() {
            Ok(()) => {
                tracing::info!("api keys acknowledged for this session");
                self.set_status("API keys saved".to_string());
            }
            Err(e) => self.set_status(e.to_string()),
        }
    }

    /// Analysis carousel in the detail view.
    pub fn next_analysis(&mut self) {
        self.analysis_index = (self.analysis_index + 1) % crate::content::ANALYSES.len();
    }

    pub fn previous_analysis(&mut self) {
        let len = crate::content::ANALYSES.len();
        self.analysis_index = (self.analysis_index + len - 1) % len;
    }
}
