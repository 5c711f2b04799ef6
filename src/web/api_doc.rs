use utoipa::OpenApi;

use super::api::error::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        super::api::flights::nearby_flights,
        super::api::balloons::list_balloons,
    ),
    components(
        schemas(
            crate::flights::NearbyFlight,
            crate::balloons::BalloonFix,
            ErrorResponse,
        )
    ),
    info(
        title = "Stratowatch API",
        description = "Balloon constellation snapshot and nearby-flight lookup",
        version = "0.1.0"
    ),
    tags(
        (name = "balloons", description = "Constellation snapshot"),
        (name = "flights", description = "Nearby-flight lookup")
    )
)]
pub struct ApiDoc;
