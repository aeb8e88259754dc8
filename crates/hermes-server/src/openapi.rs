use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hermes API",
        version = "0.1.0",
        description = "StackOverflow question summarizer backed by external LLM providers."
    ),
    paths(
        crate::routes::summarize,
        crate::routes::chat,
        crate::routes::health,
    ),
    components(schemas(
        crate::dto::SummarizeRequest,
        crate::dto::SummarizeResponse,
        crate::dto::SummaryData,
        crate::dto::ChatRequest,
        crate::dto::ChatResponse,
        crate::dto::ChatData,
        crate::dto::HealthResponse,
        crate::dto::ErrorResponse,
    )),
    tags(
        (name = "summarize", description = "Question summarization"),
        (name = "chat", description = "Follow-up chat"),
        (name = "system", description = "Health and system status"),
    )
)]
pub struct ApiDoc;
