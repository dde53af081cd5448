//! Questionnaire answer set and mutation operations.
//!
//! This layer is deliberately lenient: any value is accepted for any
//! field, and strictness lives entirely in the validator. That lets a UI
//! bind inputs directly to the model while submission stays strict.

use serde::{Deserialize, Serialize};

/// Scalar (single-value) questionnaire fields addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarField {
    Age,
    Sex,
    Region,
    EducationLevel,
    Track,
    ScienceLevel,
    LiteratureLevel,
    CurrentStatus,
    WorkStyle,
    WorkType,
    HasCareerInMind,
    SpecificCareer,
    PrimaryGoal,
    Entrepreneurship,
    Smartphone,
    Internet,
    ParentActivity,
    ExistingSkill,
}

/// Multi-select questionnaire fields addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultiField {
    Languages,
    PreferredSubjects,
    PreferredActivities,
    LikedActions,
    LearningStyles,
}

/// The full questionnaire answer set.
///
/// Field order matters: the validator reports violations in this
/// declaration order, and the positional wire contract serializes
/// fields in it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormModel {
    pub age: Option<u32>,
    pub sex: String,
    pub region: String,
    pub languages: Vec<String>,
    pub education_level: String,
    pub track: String,
    pub science_level: String,
    pub literature_level: String,
    pub current_status: String,
    pub preferred_subjects: Vec<String>,
    pub preferred_activities: Vec<String>,
    pub work_style: String,
    pub liked_actions: Vec<String>,
    pub work_type: String,
    pub has_career_in_mind: String,
    pub specific_career: String,
    pub primary_goal: String,
    pub entrepreneurship: String,
    pub smartphone: String,
    pub internet: String,
    pub parent_activity: String,
    pub learning_styles: Vec<String>,
    pub existing_skill: String,
}

impl FormModel {
    /// Replace a scalar field value unconditionally.
    ///
    /// Never fails: the age field parses leniently (unparseable input
    /// clears it), and every other field stores the string as given.
    pub fn set(&mut self, field: ScalarField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ScalarField::Age => self.age = value.trim().parse().ok(),
            ScalarField::Sex => self.sex = value,
            ScalarField::Region => self.region = value,
            ScalarField::EducationLevel => self.education_level = value,
            ScalarField::Track => self.track = value,
            ScalarField::ScienceLevel => self.science_level = value,
            ScalarField::LiteratureLevel => self.literature_level = value,
            ScalarField::CurrentStatus => self.current_status = value,
            ScalarField::WorkStyle => self.work_style = value,
            ScalarField::WorkType => self.work_type = value,
            ScalarField::HasCareerInMind => self.has_career_in_mind = value,
            ScalarField::SpecificCareer => self.specific_career = value,
            ScalarField::PrimaryGoal => self.primary_goal = value,
            ScalarField::Entrepreneurship => self.entrepreneurship = value,
            ScalarField::Smartphone => self.smartphone = value,
            ScalarField::Internet => self.internet = value,
            ScalarField::ParentActivity => self.parent_activity = value,
            ScalarField::ExistingSkill => self.existing_skill = value,
        }
    }

    /// Add `value` to a multi-select field if `included`, remove it
    /// otherwise. Idempotent in both directions.
    pub fn toggle(&mut self, field: MultiField, value: &str, included: bool) {
        let set = self.multi_mut(field);
        let present = set.iter().any(|v| v == value);
        if included && !present {
            set.push(value.to_string());
        } else if !included && present {
            set.retain(|v| v != value);
        }
    }

    /// Read access to a multi-select field by name.
    pub fn multi(&self, field: MultiField) -> &[String] {
        match field {
            MultiField::Languages => &self.languages,
            MultiField::PreferredSubjects => &self.preferred_subjects,
            MultiField::PreferredActivities => &self.preferred_activities,
            MultiField::LikedActions => &self.liked_actions,
            MultiField::LearningStyles => &self.learning_styles,
        }
    }

    fn multi_mut(&mut self, field: MultiField) -> &mut Vec<String> {
        match field {
            MultiField::Languages => &mut self.languages,
            MultiField::PreferredSubjects => &mut self.preferred_subjects,
            MultiField::PreferredActivities => &mut self.preferred_activities,
            MultiField::LikedActions => &mut self.liked_actions,
            MultiField::LearningStyles => &mut self.learning_styles,
        }
    }

    /// Restore every field to its default value.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_model_is_empty() {
        let m = FormModel::default();
        assert!(m.age.is_none());
        assert!(m.region.is_empty());
        assert!(m.languages.is_empty());
        assert!(m.existing_skill.is_empty());
    }

    #[test]
    fn set_parses_age_leniently() {
        let mut m = FormModel::default();
        m.set(ScalarField::Age, "18");
        assert_eq!(m.age, Some(18));
        m.set(ScalarField::Age, " 21 ");
        assert_eq!(m.age, Some(21));
        m.set(ScalarField::Age, "dix-huit");
        assert_eq!(m.age, None);
    }

    #[test]
    fn set_accepts_any_scalar_value() {
        // Out-of-enum values are stored as-is; the validator decides.
        let mut m = FormModel::default();
        m.set(ScalarField::Region, "Atlantide");
        assert_eq!(m.region, "Atlantide");
        m.set(ScalarField::ScienceLevel, "Élevé");
        assert_eq!(m.science_level, "Élevé");
    }

    #[test]
    fn toggle_is_idempotent() {
        let mut m = FormModel::default();
        m.toggle(MultiField::Languages, "Français", true);
        m.toggle(MultiField::Languages, "Français", true);
        assert_eq!(m.languages, vec!["Français"]);

        m.toggle(MultiField::Languages, "Français", false);
        m.toggle(MultiField::Languages, "Français", false);
        assert!(m.languages.is_empty());
    }

    #[test]
    fn toggle_preserves_selection_order() {
        let mut m = FormModel::default();
        m.toggle(MultiField::PreferredSubjects, "Physique", true);
        m.toggle(MultiField::PreferredSubjects, "Maths", true);
        assert_eq!(m.preferred_subjects, vec!["Physique", "Maths"]);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut m = FormModel::default();
        m.set(ScalarField::Age, "18");
        m.set(ScalarField::Region, "Lomé");
        m.toggle(MultiField::LikedActions, "Créer", true);
        m.reset();
        assert_eq!(m, FormModel::default());
    }

    #[test]
    fn model_serde_roundtrip() {
        let mut m = FormModel::default();
        m.set(ScalarField::Age, "19");
        m.set(ScalarField::Region, "Kara");
        m.toggle(MultiField::Languages, "Kabiyè", true);

        let json = serde_json::to_string(&m).unwrap();
        let parsed: FormModel = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, m);
    }
}
