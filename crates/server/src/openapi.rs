use utoipa::OpenApi;

use crate::routes::songs::{AddResponse, SongInput};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::songs::add,
        crate::routes::songs::update,
        crate::routes::songs::text,
        crate::routes::songs::delete,
        crate::routes::songs::library,
    ),
    components(schemas(SongInput, AddResponse)),
    tags(
        (name = "health"),
        (name = "songs")
    )
)]
pub struct ApiDoc;
