//! Offline rule engine — synthesizes a recommendation without any
//! network call.
//!
//! Port of the legacy local recommendation logic: the track follows the
//! self-assessed subject levels, and the career list is overridden by
//! what the student likes doing. Deterministic on purpose, so it can
//! back the flow in tests and in offline deployments.

use async_trait::async_trait;

use crate::error::RecommendationError;
use crate::payload::OrientationPayload;

use super::RecommendationBackend;

/// Career list overrides keyed by a liked action. First match wins.
const CAREER_OVERRIDES: [(&str, [&str; 4]); 3] = [
    (
        "Soigner",
        ["Médecin", "Infirmier", "Pharmacien", "Kinésithérapeute"],
    ),
    (
        "Enseigner",
        ["Professeur", "Formateur", "Éducateur", "Directeur d'école"],
    ),
    ("Créer", ["Designer", "Architecte", "Artiste", "Développeur"]),
];

/// Local rule-based recommendation backend. Never fails.
pub struct RuleBackend;

impl RuleBackend {
    pub fn new() -> Self {
        Self
    }

    fn compose(&self, payload: &OrientationPayload) -> String {
        let (track, base_careers, domain) = if payload.science_level == "Élevé" {
            (
                "Série D (Sciences expérimentales)",
                ["Médecin", "Ingénieur", "Pharmacien", "Vétérinaire"],
                "sciences",
            )
        } else if payload.literature_level == "Élevé" {
            (
                "Série L (Littéraire)",
                ["Professeur", "Journaliste", "Avocat", "Traducteur"],
                "littérature",
            )
        } else {
            (
                "Série C (Mathématiques)",
                ["Comptable", "Informaticien", "Banquier", "Statisticien"],
                "mathématiques",
            )
        };

        let careers = CAREER_OVERRIDES
            .iter()
            .find(|(action, _)| payload.liked_actions.iter().any(|a| a == action))
            .map(|(_, list)| *list)
            .unwrap_or(base_careers);

        let career_lines: Vec<String> =
            careers.iter().map(|c| format!("• {c}")).collect();

        let interests = if payload.preferred_subjects.is_empty() {
            "les études".to_string()
        } else {
            payload.preferred_subjects[..payload.preferred_subjects.len().min(2)].join(", ")
        };

        let first_subject = payload
            .preferred_subjects
            .first()
            .map(String::as_str)
            .unwrap_or("sciences");

        let advice = if payload.entrepreneurship == "Oui" {
            "Votre intérêt pour l'entrepreneuriat est un atout ! Considérez des formations en gestion d'entreprise."
        } else {
            "N'hésitez pas à explorer l'entrepreneuriat, c'est une excellente voie au Togo !"
        };

        format!(
            "🎯 **Recommandation personnalisée YVA**

Bonjour ! Basé sur votre profil, voici ma recommandation :

**🎓 Orientation scolaire recommandée :**
{track}

**💼 Métiers adaptés à votre profil :**
{careers}

**🌟 Pourquoi cette recommandation ?**
Vos compétences en {domain} et votre intérêt pour {interests} montrent une affinité naturelle pour ce domaine.

**📚 Prochaines étapes avec YVA :**
• Explorez nos mini-formations en {first_subject}
• Renforcez vos compétences avec nos modules pratiques
• Découvrez les opportunités au Togo dans votre région ({region})

**💡 Conseil spécial :**
{advice}

Bonne chance dans votre parcours ! 🚀",
            track = track,
            careers = career_lines.join("\n"),
            domain = domain,
            interests = interests,
            first_subject = first_subject,
            region = payload.region,
            advice = advice,
        )
    }
}

impl Default for RuleBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecommendationBackend for RuleBackend {
    fn name(&self) -> &'static str {
        "rules"
    }

    async fn request(
        &self,
        payload: &OrientationPayload,
    ) -> Result<String, RecommendationError> {
        Ok(self.compose(payload))
    }
}
