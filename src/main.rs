use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{http::header, middleware::Logger, web, App, HttpServer};

use examgen_server::{
    app_state::AppState,
    auth::{AuthMiddleware, JwtService},
    config::Config,
    handlers,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    if env_is_production() {
        config.validate_for_production();
    }

    let host = config.web_server_host.clone();
    let port = config.web_server_port;
    let allowed_origins = config.cors_allowed_origins.clone();
    let jwt_service = JwtService::new(&config.jwt_secret, config.jwt_expiration_hours);

    let state = AppState::new(config)
        .await
        .expect("failed to initialize application state");
    let state = web::Data::new(Arc::new(state));
    let jwt_service = web::Data::new(jwt_service);

    log::info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST", "DELETE"])
            .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE])
            .max_age(3600);

        App::new()
            .app_data(state.clone())
            .app_data(jwt_service.clone())
            .wrap(Logger::default())
            .wrap(cors)
            .service(handlers::health_check)
            .service(handlers::health_check_ready)
            .service(
                // Everything under /api requires a valid bearer token.
                web::scope("")
                    .wrap(AuthMiddleware)
                    .service(handlers::generate_question_set)
                    .service(handlers::list_question_sets)
                    .service(handlers::get_question_set)
                    .service(handlers::submit_exam)
                    .service(handlers::get_exam_result)
                    .service(handlers::list_cached_tests)
                    .service(handlers::get_cached_test)
                    .service(handlers::delete_cached_test),
            )
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}

fn env_is_production() -> bool {
    std::env::var("ENVIRONMENT")
        .map(|v| v.eq_ignore_ascii_case("production"))
        .unwrap_or(false)
}
