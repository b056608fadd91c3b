use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use super::state::TextInput;
use crate::types::Project;

/// Dashboard list state: cursor plus an optional fuzzy filter.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub selected: usize,
    pub filter_input: TextInput,
    pub filtering: bool,
}

impl DashboardState {
    /// Projects that pass the filter, in store order.
    pub fn visible<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        let query = self.filter_input.value.trim();
        if query.is_empty() {
            return projects.iter().collect();
        }

        let matcher = SkimMatcherV2::default();
        projects
            .iter()
            .filter(|project| {
                let haystack = format!(
                    "{} {} {}",
                    project.name, project.project_type, project.description
                );
                matcher.fuzzy_match(&haystack, query).is_some()
            })
            .collect()
    }

    pub fn selected_project<'a>(&self, projects: &'a [Project]) -> Option<&'a Project> {
        self.visible(projects).get(self.selected).copied()
    }

    pub fn select_next(&mut self, projects: &[Project]) {
        let len = self.visible(projects).len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Keep the cursor inside the visible list after the cache or filter changed.
    pub fn clamp(&mut self, projects: &[Project]) {
        let len = self.visible(projects).len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn start_filter(&mut self) {
        self.filtering = true;
    }

    pub fn filter_char(&mut self, c: char, projects: &[Project]) {
        self.filter_input.insert(c);
        self.selected = 0;
        self.clamp(projects);
    }

    pub fn filter_backspace(&mut self, projects: &[Project]) {
        self.filter_input.backspace();
        self.clamp(projects);
    }

    /// Leave filter mode; `keep` retains the query as an active filter.
    pub fn stop_filter(&mut self, keep: bool, projects: &[Project]) {
        self.filtering = false;
        if !keep {
            self.filter_input.clear();
        }
        self.clamp(projects);
    }
}
