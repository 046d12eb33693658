pub mod app_state_builder;
pub mod auth_helper;
pub mod lms_fixtures;
pub mod stubs;

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::test;

/// Reads the response body as JSON.
pub async fn read_json<B: MessageBody>(resp: ServiceResponse<B>) -> serde_json::Value {
    test::read_body_json(resp).await
}
