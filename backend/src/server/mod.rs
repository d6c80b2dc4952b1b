//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use crate::Trace;
#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::UserService;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::site::{calculate_result, contact, server_info};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::{
    add_user, create_user, delete_user, get_user, list_users, update_user,
};
use crate::inbound::http::{json_config, query_config};

/// Build the application with every route, middleware and shared state.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use actix_web::web;
/// use mockable::DefaultClock;
/// use userdesk::domain::UserService;
/// use userdesk::domain::ports::InMemoryUserStore;
/// use userdesk::inbound::http::health::HealthState;
/// use userdesk::inbound::http::state::HttpState;
/// use userdesk::server::build_app;
///
/// let service = UserService::new(Arc::new(InMemoryUserStore::new()), Arc::new(DefaultClock));
/// let state = HttpState::from_service(service, Arc::new(DefaultClock));
/// let _app = build_app(web::Data::new(HealthState::new()), web::Data::new(state));
/// ```
pub fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api")
        .service(list_users)
        .service(create_user)
        .service(add_user)
        .service(get_user)
        .service(update_user)
        .service(delete_user)
        .service(server_info)
        .service(contact)
        .service(calculate_result);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(json_config())
        .app_data(query_config())
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server over the configured store.
///
/// The health state is marked ready once the listener is bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig {
        bind_addr,
        store,
        clock,
    } = config;
    let service = UserService::new(std::sync::Arc::new(store), clock.clone());
    let http_state = web::Data::new(HttpState::from_service(service, clock));
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
