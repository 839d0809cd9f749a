use actix_web::{
    post,
    web::{Data, Json},
    HttpResponse,
};
use common::settings::types::Settings;
use use_cases::{
    goals::{
        generate_description::generate_description, text_generator::InferenceApiClient,
        types::DescriptionGenerationRequest,
    },
    UseCaseError,
};

use crate::utils::{response_400, response_500, response_502, response_503};

#[tracing::instrument(name = "Generating a goal description", skip(settings, client))]
#[post("/description")]
pub async fn generate_description_endpoint(
    settings: Data<Settings>,
    client: Data<reqwest::Client>,
    req: Json<DescriptionGenerationRequest>,
) -> HttpResponse {
    match generate_description(
        req.into_inner(),
        InferenceApiClient::init(&client, &settings.text_generation),
    )
    .await
    {
        Ok(res) => HttpResponse::Ok().json(res),
        Err(e) => match &e {
            UseCaseError::BadRequest(message) => response_400(message),
            UseCaseError::BadGateway(message) => response_502(message),
            UseCaseError::ServiceUnavailable(message) => response_503(message),
            _ => response_500(e),
        },
    }
}
