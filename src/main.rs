use std::io;

use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;
use log::{info, warn};
use sqlx::mysql::MySqlPoolOptions;

use todo_backend::config::Config;
use todo_backend::repository::{InMemoryTaskGateway, MySqlTaskGateway, TaskGateway};
use todo_backend::routes::routes::tasks_configure;
use todo_backend::service::task_service::TaskService;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let config = Config::from_env().map_err(io::Error::other)?;

    match &config.database_url {
        Some(database_url) => {
            let pool = MySqlPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(database_url)
                .await
                .map_err(io::Error::other)?;
            let gateway = MySqlTaskGateway::new(pool);
            gateway.migrate().await.map_err(io::Error::other)?;
            serve(gateway, &config.server_address).await
        }
        None => {
            warn!("DATABASE_URL is not set, tasks are kept in memory only");
            serve(InMemoryTaskGateway::new(), &config.server_address).await
        }
    }
}

async fn serve<G>(gateway: G, server_address: &str) -> io::Result<()>
where
    G: TaskGateway + Send + Sync + 'static,
{
    let service = web::Data::new(TaskService::new(gateway));
    info!("Server running at http://{}", server_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(service.clone())
            .configure(tasks_configure::<G>)
    })
    .bind(server_address)?
    .run()
    .await
}
