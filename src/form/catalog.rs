//! Choice lists offered by the questionnaire UI.
//!
//! The model layer accepts arbitrary strings; these catalogs exist so
//! presentation layers render the same options the service was tuned on.

/// The six regions of Togo.
pub const REGIONS: [&str; 6] = [
    "Lomé",
    "Maritime",
    "Plateaux",
    "Centrale",
    "Kara",
    "Savanes",
];

pub const LANGUAGES: [&str; 5] = ["Français", "Ewe", "Kabiyè", "Mina", "Autre"];

pub const EDUCATION_LEVELS: [&str; 5] = [
    "Collège",
    "Lycée (Seconde)",
    "Lycée (Première)",
    "Lycée (Terminale)",
    "Université",
];

/// Lycée tracks.
pub const TRACKS: [&str; 5] = ["Série D", "Série C", "Série L", "Série F", "Série G"];

/// Self-assessed subject levels (science and literature).
pub const SUBJECT_LEVELS: [&str; 3] = ["Faible", "Moyen", "Élevé"];

pub const CURRENT_STATUSES: [&str; 3] = ["En cours", "En pause", "Déscolarisé"];

pub const SUBJECTS: [&str; 7] = [
    "Maths",
    "Physique",
    "Chimie",
    "SVT",
    "Français",
    "Histoire-Géo",
    "Anglais",
];

pub const ACTIVITIES: [&str; 5] = ["Bricoler", "Coder", "Dessiner", "Vendre", "Cultiver"];

pub const WORK_STYLES: [&str; 3] = ["Seul(e)", "En équipe", "Peu importe"];

pub const LIKED_ACTIONS: [&str; 5] = ["Créer", "Réparer", "Soigner", "Enseigner", "Organiser"];

pub const WORK_TYPES: [&str; 4] = ["Fixe", "Mobile", "En ligne", "Manuel"];

pub const YES_NO: [&str; 2] = ["Oui", "Non"];

pub const GOALS: [&str; 4] = [
    "Trouver un emploi rapidement",
    "Faire de longues études",
    "Créer mon entreprise",
    "Être utile à ma communauté",
];

pub const INTERNET_ACCESS: [&str; 3] = ["Fréquent", "Parfois", "Rarement"];

pub const PARENT_ACTIVITIES: [&str; 5] = [
    "Agriculture",
    "Commerce",
    "Artisanat",
    "Fonctionnaire",
    "Autre",
];

pub const LEARNING_STYLES: [&str; 4] = ["Vidéo", "Lecture", "Exercice pratique", "Groupe"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogs_have_no_duplicates() {
        fn all_distinct(options: &[&str]) -> bool {
            let mut seen = std::collections::HashSet::new();
            options.iter().all(|o| seen.insert(*o))
        }
        assert!(all_distinct(&REGIONS));
        assert!(all_distinct(&LANGUAGES));
        assert!(all_distinct(&EDUCATION_LEVELS));
        assert!(all_distinct(&TRACKS));
        assert!(all_distinct(&SUBJECTS));
        assert!(all_distinct(&ACTIVITIES));
        assert!(all_distinct(&LIKED_ACTIONS));
        assert!(all_distinct(&WORK_TYPES));
        assert!(all_distinct(&GOALS));
        assert!(all_distinct(&PARENT_ACTIVITIES));
        assert!(all_distinct(&LEARNING_STYLES));
    }
}
