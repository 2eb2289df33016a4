use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use bson::doc;
use mongodb::{Client, Database};
use std::io;
use todo_service::db::TodoStore;
use todo_service::handlers;
use todo_service::openapi::ApiDoc;
use todo_service::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

async fn health(database: web::Data<Database>) -> HttpResponse {
    match database.run_command(doc! { "ping": 1 }).await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({
            "status": "ok",
            "service": "todo-service",
            "version": env!("CARGO_PKG_VERSION")
        })),
        Err(e) => HttpResponse::ServiceUnavailable().json(serde_json::json!({
            "status": "unhealthy",
            "error": format!("MongoDB ping failed: {}", e),
            "service": "todo-service"
        })),
    }
}

async fn redirect_to_docs() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/api-docs/"))
        .finish()
}

/// To-Do Service
///
/// CRUD HTTP service for scheduled social-media posts, backed by MongoDB.
///
/// # Routes
///
/// - `/api/todos` - Create, read, update, delete to-do posts
/// - `/api-docs/` - Interactive Swagger UI (also the target of `GET /`)
/// - `/health` - Liveness probe with a store ping
#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration loading failed: {}", e);
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting todo-service v{}", env!("CARGO_PKG_VERSION"));

    // Connect to MongoDB and fail fast when the store is unreachable
    let client = match Client::with_uri_str(&config.database.url).await {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("MongoDB client creation failed: {}", e);
            eprintln!("ERROR: Failed to create MongoDB client: {}", e);
            std::process::exit(1);
        }
    };

    let database = client
        .default_database()
        .unwrap_or_else(|| client.database(&config.database.name));

    if let Err(e) = database.run_command(doc! { "ping": 1 }).await {
        tracing::error!("MongoDB ping failed: {}", e);
        eprintln!("ERROR: Failed to reach MongoDB: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Connected to MongoDB database `{}`", database.name());

    let store = web::Data::new(TodoStore::new(&database));
    let database = web::Data::new(database);
    let cors_config = config.cors.clone();

    let bind_address = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("Starting HTTP server at {}", bind_address);

    HttpServer::new(move || {
        // Build CORS configuration
        let mut cors = Cors::default();
        for origin in cors_config.allowed_origins.split(',') {
            let origin = origin.trim();
            if origin == "*" {
                cors = cors.allow_any_origin();
            } else {
                cors = cors.allowed_origin(origin);
            }
        }
        cors = cors.allow_any_method().allow_any_header().max_age(3600);

        // Keep the uniform {"message"} body for malformed JSON as well
        let json_config = web::JsonConfig::default().error_handler(|err, _req| {
            let message = err.to_string();
            actix_web::error::InternalError::from_response(
                err,
                HttpResponse::BadRequest().json(serde_json::json!({ "message": message })),
            )
            .into()
        });

        let openapi_doc = ApiDoc::openapi();

        App::new()
            .app_data(store.clone())
            .app_data(database.clone())
            .app_data(json_config)
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(tracing_actix_web::TracingLogger::default())
            .service(
                SwaggerUi::new("/api-docs/{_:.*}").url("/api-docs/openapi.json", openapi_doc),
            )
            .route("/", web::get().to(redirect_to_docs))
            .route("/api-docs", web::get().to(redirect_to_docs))
            .route("/health", web::get().to(health))
            .configure(handlers::register_routes)
    })
    .bind(&bind_address)?
    .run()
    .await
}
