use tracing::{event, Level};

use crate::{
    goals::{
        text_generator::TextGenerator,
        types::{DescriptionGenerationRequest, DescriptionGenerationResponse},
    },
    UseCaseError,
};

pub async fn generate_description<G: TextGenerator>(
    params: DescriptionGenerationRequest,
    generator: Option<G>,
) -> Result<DescriptionGenerationResponse, UseCaseError> {
    let title = params.title.trim();
    if title.is_empty() {
        return Err(UseCaseError::BadRequest(
            "Goal title must not be empty.".to_string(),
        ));
    }
    let generator = generator.ok_or(UseCaseError::ServiceUnavailable(
        "Description generation is not configured.".to_string(),
    ))?;

    let prompt = build_prompt(title);
    let generated = generator.generate(&prompt).await.map_err(|e| {
        event!(target: "backend", Level::WARN, "{}", e);
        UseCaseError::BadGateway("Failed to generate a description.".to_string())
    })?;

    match strip_prompt(&generated, &prompt) {
        description if description.is_empty() => Err(UseCaseError::BadGateway(
            "No description was generated.".to_string(),
        )),
        description => Ok(DescriptionGenerationResponse { description }),
    }
}

fn build_prompt(title: &str) -> String {
    format!("Summarize: \"{}\".", title)
}

/// Causal models echo the prompt before their continuation.
fn strip_prompt(generated: &str, prompt: &str) -> String {
    generated
        .strip_prefix(prompt)
        .unwrap_or(generated)
        .trim()
        .to_string()
}
