mod assets;
mod cli;
mod infra;
mod report;
mod routes;
mod server;

use points_planner::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
