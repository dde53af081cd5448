//! Submission validation rules.
//!
//! Pure function over an immutable model read. Violations come back in
//! field declaration order so callers (and tests) can rely on an exact
//! ordered list; the career-detail conditional is checked after every
//! unconditional rule.

use std::fmt;

use serde::Serialize;

use super::model::FormModel;

/// Stable identifier for the field a violation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    Age,
    Region,
    Languages,
    EducationLevel,
    ScienceLevel,
    LiteratureLevel,
    CurrentStatus,
    PreferredSubjects,
    PreferredActivities,
    WorkStyle,
    LikedActions,
    WorkType,
    HasCareerInMind,
    SpecificCareer,
    PrimaryGoal,
    Entrepreneurship,
    Smartphone,
    Internet,
    ParentActivity,
    LearningStyles,
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Age => "age",
            Self::Region => "region",
            Self::Languages => "languages",
            Self::EducationLevel => "education_level",
            Self::ScienceLevel => "science_level",
            Self::LiteratureLevel => "literature_level",
            Self::CurrentStatus => "current_status",
            Self::PreferredSubjects => "preferred_subjects",
            Self::PreferredActivities => "preferred_activities",
            Self::WorkStyle => "work_style",
            Self::LikedActions => "liked_actions",
            Self::WorkType => "work_type",
            Self::HasCareerInMind => "has_career_in_mind",
            Self::SpecificCareer => "specific_career",
            Self::PrimaryGoal => "primary_goal",
            Self::Entrepreneurship => "entrepreneurship",
            Self::Smartphone => "smartphone",
            Self::Internet => "internet",
            Self::ParentActivity => "parent_activity",
            Self::LearningStyles => "learning_styles",
        };
        write!(f, "{s}")
    }
}

/// One unmet form constraint, with the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: FieldId,
    pub message: &'static str,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Validate a model for submission. An empty result means submittable.
///
/// Presence-only checks: a value outside its catalog is accepted here,
/// mirroring the permissive behavior of the original form.
pub fn validate(model: &FormModel) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut require = |failed: bool, field: FieldId, message: &'static str| {
        if failed {
            violations.push(Violation { field, message });
        }
    };

    require(
        !matches!(model.age, Some(a) if (12..=25).contains(&a)),
        FieldId::Age,
        "L'âge doit être entre 12 et 25 ans",
    );
    require(
        model.region.is_empty(),
        FieldId::Region,
        "La localité est obligatoire",
    );
    require(
        model.languages.is_empty(),
        FieldId::Languages,
        "Au moins une langue est obligatoire",
    );
    require(
        model.education_level.is_empty(),
        FieldId::EducationLevel,
        "Le niveau d'étude est obligatoire",
    );
    require(
        model.science_level.is_empty(),
        FieldId::ScienceLevel,
        "Le niveau en sciences est obligatoire",
    );
    require(
        model.literature_level.is_empty(),
        FieldId::LiteratureLevel,
        "Le niveau en littérature est obligatoire",
    );
    require(
        model.current_status.is_empty(),
        FieldId::CurrentStatus,
        "La situation actuelle est obligatoire",
    );
    require(
        model.preferred_subjects.is_empty(),
        FieldId::PreferredSubjects,
        "Au moins une matière préférée est obligatoire",
    );
    require(
        model.preferred_activities.is_empty(),
        FieldId::PreferredActivities,
        "Au moins une activité préférée est obligatoire",
    );
    require(
        model.work_style.is_empty(),
        FieldId::WorkStyle,
        "La préférence de travail est obligatoire",
    );
    require(
        model.liked_actions.is_empty(),
        FieldId::LikedActions,
        "Au moins une chose aimée est obligatoire",
    );
    require(
        model.work_type.is_empty(),
        FieldId::WorkType,
        "Le type de travail est obligatoire",
    );
    require(
        model.has_career_in_mind.is_empty(),
        FieldId::HasCareerInMind,
        "L'indication métier en tête est obligatoire",
    );
    require(
        model.primary_goal.is_empty(),
        FieldId::PrimaryGoal,
        "La motivation est obligatoire",
    );
    require(
        model.entrepreneurship.is_empty(),
        FieldId::Entrepreneurship,
        "L'intérêt entrepreneuriat est obligatoire",
    );
    require(
        model.smartphone.is_empty(),
        FieldId::Smartphone,
        "L'accès smartphone est obligatoire",
    );
    require(
        model.internet.is_empty(),
        FieldId::Internet,
        "L'accès internet est obligatoire",
    );
    require(
        model.parent_activity.is_empty(),
        FieldId::ParentActivity,
        "L'activité des parents est obligatoire",
    );
    require(
        model.learning_styles.is_empty(),
        FieldId::LearningStyles,
        "Au moins un style d'apprentissage est obligatoire",
    );

    // Conditional rule, always evaluated last to keep a deterministic
    // global order.
    require(
        model.has_career_in_mind == "Oui" && model.specific_career.trim().is_empty(),
        FieldId::SpecificCareer,
        "Veuillez préciser le métier",
    );

    violations
}
