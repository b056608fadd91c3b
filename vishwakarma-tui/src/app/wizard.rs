//! Project creation wizard.
//!
//! `TypeSelection → BasicDetails → Questioning(i) → Submitting`, with one
//! back edge from `BasicDetails` to `TypeSelection`. Every operation either
//! applies completely or returns a [`WizardError`] and leaves the wizard
//! untouched.

use thiserror::Error;

use super::state::TextInput;
use crate::content::{self, Analysis};
use crate::types::{NewProject, ProjectType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    TypeSelection,
    BasicDetails,
    Questioning { index: usize, answered: bool },
    Submitting,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("Please select a project type")]
    NoTypeSelected,
    #[error("Project name is required")]
    EmptyName,
    #[error("Please provide an answer")]
    EmptyAnswer,
    #[error("This question is already answered")]
    AlreadyAnswered,
    #[error("Answer the current question first")]
    NotAnswered,
    #[error("That was the last question, create the project instead")]
    LastQuestion,
    #[error("Not available at this step")]
    WrongStep,
}

/// Data collected so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardDraft {
    pub project_type: Option<ProjectType>,
    pub name: String,
    pub description: String,
    pub answers: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailsField {
    Name,
    Description,
}

#[derive(Debug, Clone)]
pub struct Wizard {
    step: WizardStep,
    draft: WizardDraft,
    question_count: usize,

    // Form state for the current step
    pub type_cursor: usize,
    pub name_input: TextInput,
    pub description_input: TextInput,
    pub answer_input: TextInput,
    pub details_field: DetailsField,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::TypeSelection,
            draft: WizardDraft::default(),
            question_count: content::QUESTION_COUNT,
            type_cursor: 0,
            name_input: TextInput::new(),
            description_input: TextInput::new(),
            answer_input: TextInput::new(),
            details_field: DetailsField::Name,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &WizardDraft {
        &self.draft
    }

    pub fn question_count(&self) -> usize {
        self.question_count
    }

    pub fn current_question(&self) -> Option<&'static str> {
        match self.step {
            WizardStep::Questioning { index, .. } => content::QUESTIONS.get(index).copied(),
            _ => None,
        }
    }

    /// Canned analysis for the question just answered.
    pub fn current_analysis(&self) -> Option<&'static Analysis> {
        match self.step {
            WizardStep::Questioning {
                index,
                answered: true,
            } => content::analysis_for(index),
            _ => None,
        }
    }

    pub fn is_last_question(&self) -> bool {
        matches!(self.step, WizardStep::Questioning { index, .. } if index + 1 == self.question_count)
    }

    pub fn is_submitting(&self) -> bool {
        self.step == WizardStep::Submitting
    }

    pub fn select_type(&mut self, project_type: ProjectType) -> Result<(), WizardError> {
        if self.step != WizardStep::TypeSelection {
            return Err(WizardError::WrongStep);
        }
        self.draft.project_type = Some(project_type);
        Ok(())
    }

    pub fn advance_to_details(&mut self) -> Result<(), WizardError> {
        if self.step != WizardStep::TypeSelection {
            return Err(WizardError::WrongStep);
        }
        if self.draft.project_type.is_none() {
            return Err(WizardError::NoTypeSelected);
        }
        self.step = WizardStep::BasicDetails;
        self.details_field = DetailsField::Name;
        Ok(())
    }

    pub fn back_to_type(&mut self) -> Result<(), WizardError> {
        if self.step != WizardStep::BasicDetails {
            return Err(WizardError::WrongStep);
        }
        self.step = WizardStep::TypeSelection;
        Ok(())
    }

    pub fn submit_details(&mut self, name: &str, description: &str) -> Result<(), WizardError> {
        if self.step != WizardStep::BasicDetails {
            return Err(WizardError::WrongStep);
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(WizardError::EmptyName);
        }

        self.draft.name = name.to_string();
        self.draft.description = description.trim().to_string();
        self.draft.answers.clear();
        self.answer_input.clear();
        self.step = WizardStep::Questioning {
            index: 0,
            answered: false,
        };
        Ok(())
    }

    pub fn submit_answer(&mut self, text: &str) -> Result<(), WizardError> {
        let WizardStep::Questioning { index, answered } = self.step else {
            return Err(WizardError::WrongStep);
        };
        if answered {
            return Err(WizardError::AlreadyAnswered);
        }
        let answer = text.trim();
        if answer.is_empty() {
            return Err(WizardError::EmptyAnswer);
        }

        self.draft.answers.push(answer.to_string());
        self.step = WizardStep::Questioning {
            index,
            answered: true,
        };
        Ok(())
    }

    pub fn advance_question(&mut self) -> Result<(), WizardError> {
        let WizardStep::Questioning { index, answered } = self.step else {
            return Err(WizardError::WrongStep);
        };
        if !answered {
            return Err(WizardError::NotAnswered);
        }
        if index + 1 >= self.question_count {
            return Err(WizardError::LastQuestion);
        }

        self.answer_input.clear();
        self.step = WizardStep::Questioning {
            index: index + 1,
            answered: false,
        };
        Ok(())
    }

    /// Package the draft for submission and enter `Submitting`. Only valid
    /// once the last question is answered.
    pub fn finish(&mut self) -> Result<NewProject, WizardError> {
        let WizardStep::Questioning { index, answered } = self.step else {
            return Err(WizardError::WrongStep);
        };
        if !answered {
            return Err(WizardError::NotAnswered);
        }
        if index + 1 != self.question_count || self.draft.answers.len() != self.question_count {
            return Err(WizardError::WrongStep);
        }
        let project_type = self.draft.project_type.ok_or(WizardError::NoTypeSelected)?;

        self.step = WizardStep::Submitting;
        Ok(NewProject {
            name: self.draft.name.clone(),
            project_type,
            description: self.draft.description.clone(),
            answers: self.draft.answers.clone(),
        })
    }

    /// Return to the answered last question so the user can retry.
    pub fn submission_failed(&mut self) {
        if self.step == WizardStep::Submitting {
            self.step = WizardStep::Questioning {
                index: self.question_count.saturating_sub(1),
                answered: true,
            };
        }
    }

    pub fn move_type_cursor(&mut self, down: bool) {
        let len = ProjectType::ALL.len();
        self.type_cursor = if down {
            (self.type_cursor + 1).min(len - 1)
        } else {
            self.type_cursor.saturating_sub(1)
        };
    }

    pub fn type_under_cursor(&self) -> ProjectType {
        ProjectType::ALL[self.type_cursor.min(ProjectType::ALL.len() - 1)]
    }

    pub fn toggle_details_field(&mut self) {
        self.details_field = match self.details_field {
            DetailsField::Name => DetailsField::Description,
            DetailsField::Description => DetailsField::Name,
        };
    }

    /// The text input that receives typed characters at this step.
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.step {
            WizardStep::BasicDetails => Some(match self.details_field {
                DetailsField::Name => &mut self.name_input,
                DetailsField::Description => &mut self.description_input,
            }),
            WizardStep::Questioning {
                answered: false, ..
            } => Some(&mut self.answer_input),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_questions() -> Wizard {
        let mut wizard = Wizard::new();
        wizard.select_type(ProjectType::GrowBusiness).unwrap();
        wizard.advance_to_details().unwrap();
        wizard.submit_details("  Tiffin Service ", " Home-cooked lunches ").unwrap();
        wizard
    }

    fn answer_all(wizard: &mut Wizard) {
        for i in 0..wizard.question_count() {
            wizard.submit_answer(&format!("answer {}", i + 1)).unwrap();
            if i + 1 < wizard.question_count() {
                wizard.advance_question().unwrap();
            }
        }
    }

    #[test]
    fn advance_to_details_requires_type() {
        let mut wizard = Wizard::new();
        assert_eq!(wizard.advance_to_details(), Err(WizardError::NoTypeSelected));
        assert_eq!(wizard.step(), WizardStep::TypeSelection);

        wizard.select_type(ProjectType::MarketEntry).unwrap();
        assert_eq!(wizard.step(), WizardStep::TypeSelection);
        wizard.advance_to_details().unwrap();
        assert_eq!(wizard.step(), WizardStep::BasicDetails);
    }

    #[test]
    fn select_type_only_on_first_step() {
        let mut wizard = at_questions();
        assert_eq!(
            wizard.select_type(ProjectType::MarketEntry),
            Err(WizardError::WrongStep)
        );
        assert_eq!(wizard.draft().project_type, Some(ProjectType::GrowBusiness));
    }

    #[test]
    fn back_from_details_keeps_type() {
        let mut wizard = Wizard::new();
        wizard.select_type(ProjectType::MarketEntry).unwrap();
        wizard.advance_to_details().unwrap();
        wizard.back_to_type().unwrap();
        assert_eq!(wizard.step(), WizardStep::TypeSelection);
        assert_eq!(wizard.draft().project_type, Some(ProjectType::MarketEntry));
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut wizard = Wizard::new();
        wizard.select_type(ProjectType::GrowBusiness).unwrap();
        wizard.advance_to_details().unwrap();

        assert_eq!(wizard.submit_details("   ", "desc"), Err(WizardError::EmptyName));
        assert_eq!(wizard.step(), WizardStep::BasicDetails);
        assert_eq!(wizard.draft().name, "");
    }

    #[test]
    fn details_are_trimmed_and_questions_start_at_zero() {
        let wizard = at_questions();
        assert_eq!(wizard.draft().name, "Tiffin Service");
        assert_eq!(wizard.draft().description, "Home-cooked lunches");
        assert_eq!(
            wizard.step(),
            WizardStep::Questioning {
                index: 0,
                answered: false
            }
        );
        assert_eq!(wizard.current_question(), Some(content::QUESTIONS[0]));
        assert!(wizard.current_analysis().is_none());
    }

    #[test]
    fn blank_answer_changes_nothing() {
        let mut wizard = at_questions();
        for blank in ["", "   ", "\t\n"] {
            assert_eq!(wizard.submit_answer(blank), Err(WizardError::EmptyAnswer));
        }
        assert!(wizard.draft().answers.is_empty());
        assert_eq!(
            wizard.step(),
            WizardStep::Questioning {
                index: 0,
                answered: false
            }
        );
    }

    #[test]
    fn answer_surfaces_matching_analysis() {
        let mut wizard = at_questions();
        wizard.submit_answer("Young professionals").unwrap();
        wizard.advance_question().unwrap();
        wizard.submit_answer(" Meal plans ").unwrap();

        assert_eq!(wizard.draft().answers, vec!["Young professionals", "Meal plans"]);
        assert_eq!(
            wizard.current_analysis().map(|a| a.title),
            Some(content::ANALYSES[1].title)
        );
    }

    #[test]
    fn cannot_answer_twice_or_skip_ahead() {
        let mut wizard = at_questions();
        assert_eq!(wizard.advance_question(), Err(WizardError::NotAnswered));
        wizard.submit_answer("first").unwrap();
        assert_eq!(wizard.submit_answer("again"), Err(WizardError::AlreadyAnswered));
        assert_eq!(wizard.draft().answers.len(), 1);
    }

    #[test]
    fn last_question_must_finish() {
        let mut wizard = at_questions();
        answer_all(&mut wizard);

        assert!(wizard.is_last_question());
        assert_eq!(wizard.advance_question(), Err(WizardError::LastQuestion));
    }

    #[test]
    fn finish_before_last_answer_is_rejected() {
        let mut wizard = at_questions();
        wizard.submit_answer("only one").unwrap();
        assert_eq!(wizard.finish(), Err(WizardError::WrongStep));
        wizard.advance_question().unwrap();
        assert_eq!(wizard.finish(), Err(WizardError::NotAnswered));
        assert!(!wizard.is_submitting());
    }

    #[test]
    fn finish_packages_every_answer() {
        let mut wizard = at_questions();
        answer_all(&mut wizard);

        let project = wizard.finish().unwrap();
        assert!(wizard.is_submitting());
        assert_eq!(project.name, "Tiffin Service");
        assert_eq!(project.project_type, ProjectType::GrowBusiness);
        assert_eq!(project.answers.len(), content::QUESTION_COUNT);
        assert!(project.answers.iter().all(|a| !a.trim().is_empty()));
    }

    #[test]
    fn failed_submission_allows_retry() {
        let mut wizard = at_questions();
        answer_all(&mut wizard);
        let first = wizard.finish().unwrap();
        assert_eq!(wizard.finish(), Err(WizardError::WrongStep));

        wizard.submission_failed();
        assert_eq!(wizard.draft().answers.len(), content::QUESTION_COUNT);
        assert_eq!(wizard.finish().unwrap(), first);
    }

    #[test]
    fn focused_input_follows_step() {
        let mut wizard = Wizard::new();
        assert!(wizard.focused_input().is_none());

        wizard.select_type(ProjectType::GrowBusiness).unwrap();
        wizard.advance_to_details().unwrap();
        wizard.focused_input().unwrap().insert('A');
        wizard.toggle_details_field();
        wizard.focused_input().unwrap().insert('B');
        assert_eq!(wizard.name_input.value, "A");
        assert_eq!(wizard.description_input.value, "B");

        wizard.submit_details("A", "B").unwrap();
        wizard.focused_input().unwrap().insert('C');
        assert_eq!(wizard.answer_input.value, "C");
        wizard.submit_answer("C").unwrap();
        assert!(wizard.focused_input().is_none());
    }

    #[test]
    fn type_cursor_is_clamped() {
        let mut wizard = Wizard::new();
        wizard.move_type_cursor(false);
        assert_eq!(wizard.type_under_cursor(), ProjectType::GrowBusiness);
        wizard.move_type_cursor(true);
        wizard.move_type_cursor(true);
        assert_eq!(wizard.type_under_cursor(), ProjectType::MarketEntry);
    }
}
