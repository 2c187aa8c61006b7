use poem_openapi::{payload::Json, OpenApi, Tags};

pub const GREETING: &str = "Hello, this is the main endpoint of the API";

/// Root API
pub struct RootApi;

/// API tags for root endpoints
#[derive(Tags)]
enum ApiTags {
    /// Service entry point
    Root,
}

#[OpenApi]
impl RootApi {
    /// Greeting for the API root
    #[oai(path = "/", method = "get", tag = "ApiTags::Root")]
    async fn root(&self) -> Json<String> {
        Json(GREETING.to_string())
    }
}
