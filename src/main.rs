use std::time::Duration;

use orienta::client::RecommendationClient;
use orienta::config::{BackendKind, ClientConfig};
use orienta::context::SessionContext;
use orienta::error::ConfigError;
use orienta::flow::{FlowController, FlowState};
use orienta::form::{MultiField, ScalarField};
use orienta::render::{Block, Span};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let backend = match std::env::var("ORIENTA_BACKEND").as_deref() {
        Ok("structured") => BackendKind::Structured,
        Ok("positional") => BackendKind::Positional,
        Ok("rules") | Err(_) => BackendKind::Rules,
        Ok(other) => {
            eprintln!("Unknown ORIENTA_BACKEND '{other}', falling back to rules");
            BackendKind::Rules
        }
    };

    let mut config = ClientConfig {
        backend,
        ..Default::default()
    };
    if let Ok(endpoint) = std::env::var("ORIENTA_ENDPOINT") {
        config.endpoint = endpoint;
    }
    if let Ok(key) = std::env::var("ORIENTA_API_KEY") {
        config.api_key = Some(secrecy::SecretString::from(key));
    }
    if let Ok(secs) = std::env::var("ORIENTA_TIMEOUT_SECS") {
        let secs: u64 = secs.parse().map_err(|e| ConfigError::InvalidValue {
            key: "ORIENTA_TIMEOUT_SECS".to_string(),
            message: format!("{e}"),
        })?;
        config.timeout = Duration::from_secs(secs);
    }

    eprintln!("🧭 Orienta v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Backend: {:?}", config.backend);
    if config.backend != BackendKind::Rules {
        eprintln!("   Endpoint: {}", config.endpoint);
    }

    let client = RecommendationClient::from_config(&config)?;
    let flow = FlowController::new(SessionContext::new("demo"), client);

    // Answer the questionnaire with a sample profile
    flow.edit(ScalarField::Age, "18").await;
    flow.edit(ScalarField::Sex, "Homme").await;
    flow.edit(ScalarField::Region, "Lomé").await;
    flow.toggle(MultiField::Languages, "Français", true).await;
    flow.toggle(MultiField::Languages, "Ewe", true).await;
    flow.edit(ScalarField::EducationLevel, "Lycée (Terminale)").await;
    flow.edit(ScalarField::Track, "Série D").await;
    flow.edit(ScalarField::ScienceLevel, "Élevé").await;
    flow.edit(ScalarField::LiteratureLevel, "Moyen").await;
    flow.edit(ScalarField::CurrentStatus, "En cours").await;
    flow.toggle(MultiField::PreferredSubjects, "Maths", true).await;
    flow.toggle(MultiField::PreferredSubjects, "Physique", true).await;
    flow.toggle(MultiField::PreferredActivities, "Bricoler", true).await;
    flow.toggle(MultiField::PreferredActivities, "Coder", true).await;
    flow.edit(ScalarField::WorkStyle, "En équipe").await;
    flow.toggle(MultiField::LikedActions, "Créer", true).await;
    flow.toggle(MultiField::LikedActions, "Réparer", true).await;
    flow.edit(ScalarField::WorkType, "Fixe").await;
    flow.edit(ScalarField::HasCareerInMind, "Oui").await;
    flow.edit(ScalarField::SpecificCareer, "Ingénieur informatique").await;
    flow.edit(ScalarField::PrimaryGoal, "Être utile à ma communauté").await;
    flow.edit(ScalarField::Entrepreneurship, "Oui").await;
    flow.edit(ScalarField::Smartphone, "Oui").await;
    flow.edit(ScalarField::Internet, "Fréquent").await;
    flow.edit(ScalarField::ParentActivity, "Commerce").await;
    flow.toggle(MultiField::LearningStyles, "Vidéo", true).await;
    flow.toggle(MultiField::LearningStyles, "Exercice pratique", true)
        .await;
    flow.edit(ScalarField::ExistingSkill, "Programmation Python basique")
        .await;

    match flow.submit().await {
        FlowState::Displaying(display) => {
            if display.degraded.is_some() {
                eprintln!("   (service unavailable — fallback recommendation shown)\n");
            }
            for block in &display.blocks {
                print_block(block);
            }
        }
        FlowState::ValidationFailed(violations) => {
            eprintln!("Le formulaire est incomplet :");
            for violation in violations {
                eprintln!("  - {violation}");
            }
        }
        other => eprintln!("Unexpected flow state: {other:?}"),
    }

    Ok(())
}

fn print_block(block: &Block) {
    match block {
        Block::Heading { level, spans } => {
            println!("\n{} {}", "#".repeat(*level as usize), spans_text(spans));
        }
        Block::Paragraph(spans) => println!("\n{}", spans_text(spans)),
        Block::ListItem(spans) => println!("  • {}", spans_text(spans)),
    }
}

fn spans_text(spans: &[Span]) -> String {
    spans
        .iter()
        .map(|span| match span {
            Span::Plain(t) => t.clone(),
            Span::Strong(t) => t.to_uppercase(),
            Span::Emphasis(t) => t.clone(),
        })
        .collect()
}
