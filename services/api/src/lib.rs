mod cli;
mod infra;
mod report;
mod routes;
mod server;

use rentroll::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
