use anyhow::{Context, Result};
use clap::Parser;
use schooldesk::cli::{self, Cli, Command};
use schooldesk::{app, logging, store};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_path = cli.log_file.clone().unwrap_or_else(cli::default_log_path);
    logging::init(&log_path, &cli.log_level)?;

    match cli.command {
        Command::Open {
            path,
            page_size,
            tab,
        } => {
            let path = cli::resolve_store_path(path);
            info!(path = %path.display(), page_size, ?tab, "opening store");
            app::run(path, page_size, tab).await
        }
        Command::Seed { path, force } => {
            let path = cli::resolve_store_path(path);
            let store = store::seed::write_sample(&path, force)
                .await
                .context("failed to write sample store")?;
            println!(
                "Wrote {} users, {} teachers, {} invoices, {} exams and {} questions to {}",
                store.users.len(),
                store.teachers.len(),
                store.invoices.len(),
                store.exams.len(),
                store.questions.len(),
                path.display()
            );
            Ok(())
        }
    }
}
