//! Application state and factory
//!
//! This module holds the shared application state and provides the factory
//! for creating the Actix-web application.

use actix_web::{
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, Error,
};

use geo_core::repositories::PrefectureRepository;
use geo_core::services::PrefectureService;

use crate::handlers::{health::health_check, prefecture};
use crate::middleware::TraceMiddleware;

/// Application state that holds shared services
pub struct AppState<R>
where
    R: PrefectureRepository,
{
    pub prefecture_service: PrefectureService<R>,
}

impl<R> AppState<R>
where
    R: PrefectureRepository,
{
    pub fn new(prefecture_service: PrefectureService<R>) -> Self {
        Self { prefecture_service }
    }
}

/// Register all routes
pub fn configure<R>(cfg: &mut web::ServiceConfig)
where
    R: PrefectureRepository + 'static,
{
    cfg.route("/health", web::get().to(health_check)).service(
        web::scope("/prefectures")
            .route("", web::get().to(prefecture::list_prefectures::<R>))
            .route("/{code}", web::get().to(prefecture::get_prefecture::<R>)),
    );
}

/// Create and configure the application with all dependencies
pub fn create_app<R>(
    app_state: web::Data<AppState<R>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = Error,
        InitError = (),
    >,
>
where
    R: PrefectureRepository + 'static,
{
    App::new()
        .app_data(app_state)
        .wrap(TraceMiddleware)
        .configure(configure::<R>)
}
