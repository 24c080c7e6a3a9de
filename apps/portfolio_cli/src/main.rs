use std::{sync::Arc, time::Duration};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use page_core::{
    catalog::HIGHLIGHTS, ContactSubmitter, DelayedSubmitter, FormPhase, PageController,
    ThemeMarker,
};
use shared::domain::{FormField, PortfolioItem};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Browse the portfolio and send contact messages from a terminal")]
struct Args {
    /// Category label to list ("All" lists everything).
    #[arg(long, default_value = "All")]
    category: String,
    /// Also print the featured projects.
    #[arg(long)]
    highlights: bool,
    /// Print listed items as JSON.
    #[arg(long)]
    json: bool,
    /// Deliver contact messages to this URL instead of simulating delivery.
    /// Falls back to `PORTFOLIO_CONTACT_ENDPOINT`.
    #[arg(long)]
    contact_endpoint: Option<String>,
    #[arg(long, default_value_t = DelayedSubmitter::DEFAULT_DELAY.as_millis() as u64)]
    submit_delay_ms: u64,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Send a message through the contact form.
    Send {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        message: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut page = PageController::new(Arc::new(ThemeMarker::new()));

    match args.command {
        Some(Command::Send {
            name,
            email,
            message,
        }) => {
            let endpoint = args
                .contact_endpoint
                .or_else(|| std::env::var("PORTFOLIO_CONTACT_ENDPOINT").ok());
            let submitter = page_core::submitter_for(
                endpoint.as_deref(),
                Duration::from_millis(args.submit_delay_ms),
            )
            .context("failed to set up contact delivery")?;
            page.set_field(FormField::Name, name);
            page.set_field(FormField::Email, email);
            page.set_field(FormField::Message, message);
            let request_id = send_message(&mut page, submitter.as_ref()).await?;
            println!("Message sent (request {request_id}).");
        }
        None => {
            page.select_category(&args.category);
            let items = page.visible_items();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&items)?);
            } else if items.is_empty() {
                println!("No portfolio items in category \"{}\".", args.category);
            } else {
                for item in &items {
                    println!("{}", format_item(item));
                }
            }

            if args.highlights {
                println!();
                for highlight in &HIGHLIGHTS {
                    println!("* {}: {}", highlight.title, highlight.stats.join(" | "));
                }
            }
        }
    }

    Ok(())
}

fn format_item(item: &PortfolioItem) -> String {
    format!(
        "#{} {} [{} · {}]",
        item.id.0,
        item.title,
        item.category.label(),
        item.software
    )
}

/// Runs the page's submit flow to completion and returns the receipt's request id.
async fn send_message(page: &mut PageController, submitter: &dyn ContactSubmitter) -> Result<String> {
    let pending = page
        .submit_form()
        .context("contact form is not ready to send")?;
    let result = pending.run(submitter).await;
    let request_id = result
        .outcome
        .as_ref()
        .ok()
        .map(|receipt| receipt.request_id.to_string());
    page.complete_submission(result);

    match (page.form_phase(), request_id) {
        (FormPhase::Idle, Some(request_id)) => Ok(request_id),
        (FormPhase::Failed { error }, _) => bail!("message not sent: {error}"),
        (phase, _) => bail!("contact form ended in unexpected state {phase:?}"),
    }
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
