use actix_web::{http::header, web, HttpResponse};
use log::info;
use validator::Validate;

use super::tasks_models::TaskRequest;
use crate::error::TaskError;
use crate::repository::TaskGateway;
use crate::service::task_service::TaskService;

// Latest five completed tasks
pub async fn list_completed<G: TaskGateway + 'static>(
    service: web::Data<TaskService<G>>,
) -> Result<HttpResponse, TaskError> {
    info!("Received request to list completed tasks");
    let tasks = service.list_completed().await?;
    Ok(HttpResponse::Ok().json(tasks))
}

// Latest five incomplete tasks
pub async fn list_incomplete<G: TaskGateway + 'static>(
    service: web::Data<TaskService<G>>,
) -> Result<HttpResponse, TaskError> {
    info!("Received request to list incomplete tasks");
    let tasks = service.list_incomplete().await?;
    Ok(HttpResponse::Ok().json(tasks))
}

pub async fn create_task<G: TaskGateway + 'static>(
    service: web::Data<TaskService<G>>,
    req: web::Json<TaskRequest>,
) -> Result<HttpResponse, TaskError> {
    let request = req.into_inner();
    info!("Received request to create task: {}", request.title);
    request.validate()?;

    let created = service.create(request).await?;
    let mut response = HttpResponse::Created();
    if let Some(id) = created.id {
        response.insert_header((header::LOCATION, format!("/tasks/{}", id)));
    }
    Ok(response.json(created))
}

pub async fn mark_done<G: TaskGateway + 'static>(
    service: web::Data<TaskService<G>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, TaskError> {
    let id = path.into_inner();
    info!("Received request to mark task {} done", id);
    service.mark_done(id).await?;
    Ok(HttpResponse::NoContent().finish())
}
