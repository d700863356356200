mod cli;
mod infra;
mod register;
mod routes;
mod server;

use signup::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
