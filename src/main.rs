//! Server entry point: env config, database bootstrap, demo seed, router.

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use std::sync::Arc;
use student_registry::{
    api_routes, common_routes_with_ready, ensure_database_exists, ensure_tables, seed_demo_data,
    AppState, CourseRepository, CourseService, PgCourseRepository, PgStudentRepository,
    StudentRepository, StudentService,
};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("student_registry=info")),
        )
        .init();

    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "postgres://localhost/student_registry".into());
    ensure_database_exists(&database_url).await?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;
    ensure_tables(&pool).await?;

    let students_repo: Arc<dyn StudentRepository> =
        Arc::new(PgStudentRepository::new(pool.clone()));
    let courses_repo: Arc<dyn CourseRepository> = Arc::new(PgCourseRepository::new(pool.clone()));
    seed_demo_data(students_repo.as_ref(), courses_repo.as_ref()).await?;

    let state = AppState::new(
        StudentService::new(students_repo, courses_repo.clone()),
        CourseService::new(courses_repo),
    );

    // The Angular dev server is the only browser client.
    let cors = CorsLayer::new()
        .allow_origin("http://localhost:4200".parse::<HeaderValue>()?)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    let app = Router::new()
        .merge(common_routes_with_ready(pool))
        .nest("/api", api_routes(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
