mod cli;
mod demo;
mod diagnose;
mod infra;
mod routes;
mod server;

use uchinoko::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
