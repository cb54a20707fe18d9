// Book Client - Catalog form controller for the books REST API
// Copyright (C) 2025 Book Client contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.


use anyhow::{Context, Result};
use book_client::{BookController, BookForm, BookId, BooksClient, ClientConfig};
use clap::{Args, Parser, Subcommand};
use dialoguer::Confirm;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "books-cli")]
#[command(about = "Manage the books catalog from the terminal", long_about = None)]
struct Cli {
    /// Books API base URL [default: $BOOK_API_BASE_URL or http://localhost:8080]
    #[arg(long)]
    base_url: Option<String>,

    /// Request timeout in seconds [default: $BOOK_API_TIMEOUT_SECS or 30]
    #[arg(long)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every book
    List,
    /// Show one book in detail
    Show {
        id: String,
    },
    /// Add a new book
    Add {
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Change an existing book; fields not given keep their current value
    Edit {
        id: String,
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Delete a book
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Args, Default)]
struct FieldArgs {
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    author: Option<String>,
    #[arg(long)]
    isbn: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    price: Option<String>,
    #[arg(long)]
    publish_date: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    language: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    page_count: Option<String>,
    #[arg(long)]
    publisher: Option<String>,
    #[arg(long)]
    cover_image_url: Option<String>,
    #[arg(long)]
    edition: Option<String>,
}

impl FieldArgs {
    /// Write every given flag into the form
    fn apply(self, form: &mut BookForm) {
        let pairs = [
            (self.title, &mut form.title),
            (self.author, &mut form.author),
            (self.isbn, &mut form.isbn),
            (self.price, &mut form.price),
            (self.publish_date, &mut form.publish_date),
            (self.description, &mut form.description),
            (self.language, &mut form.language),
            (self.page_count, &mut form.page_count),
            (self.publisher, &mut form.publisher),
            (self.cover_image_url, &mut form.cover_image_url),
            (self.edition, &mut form.edition),
        ];
        for (value, field) in pairs {
            if let Some(value) = value {
                *field = value;
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let env_config = ClientConfig::from_env().context("Invalid client environment")?;
    let mut builder = env_config.to_builder();
    if let Some(base_url) = cli.base_url {
        builder = builder.base_url(base_url);
    }
    if let Some(secs) = cli.timeout {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    let config = builder.build();
    let client = BooksClient::with_config(config).context("Failed to create books client")?;
    let mut controller = BookController::new(client);

    let outcome = match cli.command {
        Commands::List => controller.load_books().await,
        Commands::Show { id } => controller.show_detail(&BookId::new(id)).await,
        Commands::Add { fields } => {
            fields.apply(controller.form_mut());
            controller.submit().await
        }
        Commands::Edit { id, fields } => {
            match controller.begin_edit(&BookId::new(id)).await {
                Ok(()) => {
                    fields.apply(controller.form_mut());
                    controller.submit().await
                }
                Err(e) => Err(e),
            }
        }
        Commands::Delete { id, yes } => {
            let mut prompt_error = None;
            let result = controller
                .delete(&BookId::new(id), |message| {
                    if yes {
                        return true;
                    }
                    Confirm::new()
                        .with_prompt(message)
                        .default(false)
                        .interact()
                        .unwrap_or_else(|e| {
                            prompt_error = Some(e);
                            false
                        })
                })
                .await;
            if let Some(e) = prompt_error {
                return Err(e).context("Failed to read confirmation");
            }
            match result {
                Ok(false) => {
                    println!("Cancelled.");
                    return Ok(ExitCode::SUCCESS);
                }
                other => other.map(|_| ()),
            }
        }
    };

    print!("{}", controller.view());

    Ok(if outcome.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
