//! Transformation from the internal form model to the external service
//! contract.
//!
//! The key strings are fixed by the external contract and must match
//! byte-for-byte, accents included. `Métier` is structurally optional:
//! the downstream service treats key presence as the optionality signal,
//! so unless a career is in mind the key is omitted entirely, never sent
//! as an empty string.

use serde::Serialize;
use serde_json::{json, Value};

use crate::form::FormModel;

/// Externally-keyed payload sent to the recommendation service.
#[derive(Debug, Clone, Serialize)]
pub struct OrientationPayload {
    #[serde(rename = "Âge")]
    pub age: u32,
    #[serde(rename = "Sexe")]
    pub sex: String,
    #[serde(rename = "Localité")]
    pub region: String,
    #[serde(rename = "Langue parlée")]
    pub languages: Vec<String>,
    #[serde(rename = "Niveau d'étude actuel")]
    pub education_level: String,
    #[serde(rename = "Filière suivie")]
    pub track: String,
    #[serde(rename = "Matières scientifiques")]
    pub science_level: String,
    #[serde(rename = "Matières littéraires")]
    pub literature_level: String,
    #[serde(rename = "Tu es actuellement")]
    pub current_status: String,
    #[serde(rename = "Matière(s) préférée(s)")]
    pub preferred_subjects: Vec<String>,
    #[serde(rename = "Activité(s) préférée(s)")]
    pub preferred_activities: Vec<String>,
    #[serde(rename = "Préfères-tu travailler")]
    pub work_style: String,
    #[serde(rename = "Tu aimes")]
    pub liked_actions: Vec<String>,
    #[serde(rename = "Type de travail qui t'attire")]
    pub work_type: String,
    #[serde(rename = "As-tu un métier en tête ?")]
    pub has_career_in_mind: String,
    #[serde(rename = "Métier", skip_serializing_if = "Option::is_none")]
    pub career: Option<String>,
    #[serde(rename = "Tu veux")]
    pub primary_goal: String,
    #[serde(rename = "Es-tu intéressé(e) par l'entrepreneuriat ?")]
    pub entrepreneurship: String,
    #[serde(rename = "Accès à un smartphone")]
    pub smartphone: String,
    #[serde(rename = "Accès internet régulier ?")]
    pub internet: String,
    #[serde(rename = "Activité des parents")]
    pub parent_activity: String,
    #[serde(rename = "Tu apprends mieux en")]
    pub learning_styles: Vec<String>,
    #[serde(rename = "As-tu déjà une compétence ?")]
    pub existing_skill: String,
}

/// Map a form model to the external payload.
///
/// Total and side-effect-free for any model that passed validation;
/// behavior on an invalid model is unspecified (the flow never calls it
/// on one).
pub fn transform(model: &FormModel) -> OrientationPayload {
    OrientationPayload {
        age: model.age.unwrap_or_default(),
        sex: model.sex.clone(),
        region: model.region.clone(),
        languages: model.languages.clone(),
        education_level: model.education_level.clone(),
        track: model.track.clone(),
        science_level: model.science_level.clone(),
        literature_level: model.literature_level.clone(),
        current_status: model.current_status.clone(),
        preferred_subjects: model.preferred_subjects.clone(),
        preferred_activities: model.preferred_activities.clone(),
        work_style: model.work_style.clone(),
        liked_actions: model.liked_actions.clone(),
        work_type: model.work_type.clone(),
        has_career_in_mind: model.has_career_in_mind.clone(),
        career: (model.has_career_in_mind == "Oui").then(|| model.specific_career.clone()),
        primary_goal: model.primary_goal.clone(),
        entrepreneurship: model.entrepreneurship.clone(),
        smartphone: model.smartphone.clone(),
        internet: model.internet.clone(),
        parent_activity: model.parent_activity.clone(),
        learning_styles: model.learning_styles.clone(),
        existing_skill: model.existing_skill.clone(),
    }
}

impl OrientationPayload {
    /// Field values in the fixed order of the legacy positional contract.
    ///
    /// Unlike the structured contract, the career slot is always present
    /// here (empty when no career is in mind) because the receiver
    /// addresses fields by position.
    pub fn positional_values(&self) -> Vec<Value> {
        vec![
            json!(self.age),
            json!(self.sex),
            json!(self.region),
            json!(self.languages),
            json!(self.education_level),
            json!(self.track),
            json!(self.science_level),
            json!(self.literature_level),
            json!(self.current_status),
            json!(self.preferred_subjects),
            json!(self.preferred_activities),
            json!(self.work_style),
            json!(self.liked_actions),
            json!(self.work_type),
            json!(self.has_career_in_mind),
            json!(self.career.clone().unwrap_or_default()),
            json!(self.primary_goal),
            json!(self.entrepreneurship),
            json!(self.smartphone),
            json!(self.internet),
            json!(self.parent_activity),
            json!(self.learning_styles),
            json!(self.existing_skill),
        ]
    }
}
