use crate::dtos::catalog::{NationalityResponse, ServiceDetailResponse, ServiceResponse};
use crate::error::ApiError;
use crate::state::AppState;
use axum::{Json, extract::State};
use database::services::catalog::CatalogService;

/// Get active services with their detail line items
#[utoipa::path(
    get,
    path = "/services",
    responses(
        (status = 200, description = "List of active services", body = [ServiceResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Services"
)]
pub async fn get_services(
    State(state): State<AppState>,
) -> Result<Json<Vec<ServiceResponse>>, ApiError> {
    let services = CatalogService::active_services_with_details(&state.db).await?;

    let responses = services
        .into_iter()
        .map(|(service, details)| {
            let detail_responses = details
                .into_iter()
                .map(|detail| ServiceDetailResponse {
                    name: detail.name,
                    description: detail.description,
                })
                .collect();

            ServiceResponse {
                id: service.id.to_string(),
                name: service.name,
                description: service.description,
                image: service.image,
                price: service.price,
                working_hours: service.working_hours,
                details: detail_responses,
            }
        })
        .collect();

    Ok(Json(responses))
}

/// Get the nationality reference list for the contact step of the wizard
#[utoipa::path(
    get,
    path = "/nationalities",
    responses(
        (status = 200, description = "List of nationalities", body = [NationalityResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Services"
)]
pub async fn get_nationalities(
    State(state): State<AppState>,
) -> Result<Json<Vec<NationalityResponse>>, ApiError> {
    let nationalities = CatalogService::list_nationalities(&state.db).await?;

    let responses = nationalities
        .into_iter()
        .map(|nationality| NationalityResponse {
            id: nationality.id.to_string(),
            name: nationality.name,
            code: nationality.code,
        })
        .collect();

    Ok(Json(responses))
}
