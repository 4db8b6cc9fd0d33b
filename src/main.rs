use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{
    http::header::{self, HeaderName},
    middleware::Logger,
    web, App, HttpServer,
};

use certquiz_server::{
    app_state::AppState, config::Config, handlers::configure_routes,
    middleware::{RequestIdMiddleware, REQUEST_ID_HEADER},
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    if config.is_production() {
        config
            .validate_for_production()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;
    }

    let state = AppState::new(config)
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    let bind_addr = (
        state.config.web_server_host.clone(),
        state.config.web_server_port,
    );
    let jwt_service = web::Data::from(state.jwt_service.clone());
    let state = web::Data::new(Arc::new(state));

    log::info!("Starting HTTP server on {}:{}", bind_addr.0, bind_addr.1);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&state.config.cors_allowed_origin)
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE])
            .expose_headers(vec![
                header::LOCATION,
                HeaderName::from_static(REQUEST_ID_HEADER),
            ])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(RequestIdMiddleware)
            .app_data(state.clone())
            .app_data(jwt_service.clone())
            .configure(configure_routes)
    })
    .bind(bind_addr)?
    .run()
    .await
}
