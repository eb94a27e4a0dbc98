//! HTTP API for taskify.
//!
//! Exposes the task store and range queries as JSON endpoints, serves the
//! browser front end from the static directory and logs every request.
//!
//! | Method | Path | Operation |
//! |---|---|---|
//! | `POST` | `/api/tasks` | create a task (body must carry `date`) |
//! | `GET` | `/api/tasks/:date` | tasks of one date |
//! | `PUT` | `/api/tasks/:date/:id` | merge fields into a task |
//! | `DELETE` | `/api/tasks/:date/:id` | delete a task |
//! | `GET` | `/api/filter?mode=&from=&to=` | tasks of a date range |
//! | `GET` | `/api/export-range?mode=&from=&to=` | date range as `.xlsx` download |

pub mod routes;

use crate::db::storage::{FileStorage, PartitionStorage};
use crate::db::tasks::Tasks;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::{msg_info, msg_success, msg_warning};
use anyhow::Result;
use routes::AppState;
use std::net::SocketAddr;
use std::sync::Arc;

/// Starts the HTTP server and runs until the process is stopped.
pub async fn serve(config: &Config, operator_name: &str) -> Result<()> {
    let partitions_dir = config.partitions_dir()?;
    let storage: Box<dyn PartitionStorage> = Box::new(FileStorage::new(&partitions_dir)?);
    let state = Arc::new(AppState::new(Tasks::with_storage(storage), operator_name));
    tracing::info!(dir = %partitions_dir.display(), "task partitions directory");

    let static_dir = if config.static_dir.is_dir() {
        Some(config.static_dir.as_path())
    } else {
        msg_warning!(Message::StaticDirMissing(config.static_dir.display().to_string()));
        None
    };
    let app = routes::router(state, static_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    msg_info!(Message::OperatorName(operator_name.to_string()));
    msg_success!(Message::ServerStarted(format!("http://localhost:{}", config.port)));

    axum::serve(listener, app).await?;
    Ok(())
}
