use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub uptime: f64,
}

#[derive(utoipa::ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct TodoDoc {
    pub id: String,
    pub title: String,
    pub completed: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(utoipa::ToSchema)]
pub struct CreateTodoInputDoc {
    pub title: String,
    pub completed: Option<bool>,
}

#[derive(utoipa::ToSchema)]
pub struct UpdateTodoInputDoc {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

#[derive(utoipa::ToSchema)]
pub struct FieldErrorDoc {
    pub field: String,
    pub message: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::todos::list,
        crate::routes::todos::create,
        crate::routes::todos::get_by_id,
        crate::routes::todos::update,
        crate::routes::todos::remove,
    ),
    components(
        schemas(
            HealthResponse,
            TodoDoc,
            CreateTodoInputDoc,
            UpdateTodoInputDoc,
            FieldErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "todos")
    )
)]
pub struct ApiDoc;
