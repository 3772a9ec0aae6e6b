use actix_web::{middleware::DefaultHeaders, web};

use super::tasks::tasks_handlers;
use crate::error::TaskError;
use crate::repository::TaskGateway;

pub fn tasks_configure<G: TaskGateway + 'static>(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default()
        .error_handler(|err, _req| TaskError::BadRequest(err.to_string()).into());
    let path_config = web::PathConfig::default()
        .error_handler(|err, _req| TaskError::BadRequest(err.to_string()).into());

    cfg.service(
        web::scope("/tasks")
            .wrap(DefaultHeaders::new().add(("Access-Control-Allow-Origin", "*")))
            .app_data(json_config)
            .app_data(path_config)
            .route("", web::post().to(tasks_handlers::create_task::<G>))
            .route("/completed", web::get().to(tasks_handlers::list_completed::<G>))
            .route("/incomplete", web::get().to(tasks_handlers::list_incomplete::<G>))
            .route("/{id}/done", web::post().to(tasks_handlers::mark_done::<G>))
    );
}
