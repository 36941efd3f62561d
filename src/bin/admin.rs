//! Terminal tool for the Boolean University portal.
//!
//! Runs the same authentication service as the web server against a fresh
//! in-memory directory, so lockout behaviour can be observed without a
//! browser.
//!
//! # Usage
//!
//! ```bash
//! # Show the seeded accounts
//! cargo run --bin admin -- users
//!
//! # Interactive login loop
//! cargo run --bin admin -- login
//!
//! # Lock after two wrong passwords, no simulated latency
//! cargo run --bin admin -- login --max-attempts 2 --delay-ms 0
//! ```
//!
//! Nothing is persisted: every invocation starts from the seed table.

use boolean_portal::application::services::{AuthService, LoginPolicy};
use boolean_portal::domain::entities::UserStatus;
use boolean_portal::error::AuthError;
use boolean_portal::infrastructure::memory::InMemoryUserRepository;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use std::sync::Arc;
use std::time::Duration;

/// CLI tool for the Boolean University portal.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List seeded accounts with attempt counters and lock status
    Users,

    /// Log in interactively and watch the lockout counter
    Login {
        /// Wrong passwords that lock an account
        #[arg(long, default_value_t = 3)]
        max_attempts: u32,

        /// Simulated latency before each check, in milliseconds
        #[arg(long, default_value_t = 1000)]
        delay_ms: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Users => handle_users().await?,
        Commands::Login {
            max_attempts,
            delay_ms,
        } => handle_login(max_attempts, delay_ms).await?,
    }

    Ok(())
}

fn build_service(max_attempts: u32, delay_ms: u64) -> Result<AuthService<InMemoryUserRepository>> {
    if !(1..=100).contains(&max_attempts) {
        bail!("--max-attempts must be between 1 and 100");
    }

    let policy = LoginPolicy {
        max_attempts,
        latency: Duration::from_millis(delay_ms),
    };

    let users = InMemoryUserRepository::with_demo_users()
        .map_err(|e| anyhow::anyhow!("Failed to seed directory: {}", e))?;

    Ok(AuthService::new(Arc::new(users), policy))
}

async fn handle_users() -> Result<()> {
    let service = build_service(LoginPolicy::default().max_attempts, 0)?;
    let users = service
        .user_status()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to read directory: {}", e))?;

    print_status_table(&users);
    Ok(())
}

/// Interactive login loop.
///
/// # Flow
///
/// 1. Prompt for email (defaults to the last one entered) and password
/// 2. Authenticate and print the outcome
/// 3. On success, print the session record that would be handed to the dashboard
/// 4. Show the account table and ask whether to continue
async fn handle_login(max_attempts: u32, delay_ms: u64) -> Result<()> {
    let service = build_service(max_attempts, delay_ms)?;

    println!("{}", "🎓 Boolean University Login".bright_blue().bold());
    println!(
        "  Accounts lock after {} wrong password(s).",
        max_attempts.to_string().bright_white().bold()
    );
    println!();

    let mut last_email = String::new();

    loop {
        let email: String = Input::new()
            .with_prompt("Email")
            .with_initial_text(last_email.clone())
            .allow_empty(true)
            .interact_text()?;

        let password = Password::new()
            .with_prompt("Password")
            .allow_empty_password(true)
            .interact()?;

        println!("{}", "⏳ Signing in...".bright_black());

        match service.authenticate(&email, &password).await {
            Ok(session) => {
                println!(
                    "{}",
                    format!("✅ Welcome back, {}!", session.display_name)
                        .green()
                        .bold()
                );
                println!("  Landing page: {}", session.landing_path().cyan());
                println!("  Session:      {}", session.to_json()?.bright_black());
            }
            Err(e @ AuthError::WrongSecret { remaining }) => {
                println!("{}", format!("❌ {}", e.user_message()).red());
                println!(
                    "  {}",
                    format!("{remaining} attempt(s) left before lockout").bright_black()
                );
            }
            Err(AuthError::Store(e)) => bail!("Directory failure: {}", e),
            Err(e) => println!("{}", format!("❌ {}", e.user_message()).red()),
        }

        println!();
        print_status_table(&service.user_status().await?);

        let again = Confirm::new()
            .with_prompt("Try another login?")
            .default(true)
            .interact()?;

        if !again {
            break;
        }

        last_email = email.trim().to_string();
        println!();
    }

    Ok(())
}

/// Prints the account table.
///
/// # Output Format
///
/// ```text
///   Email                          Role           Attempts  Status
///   ──────────────────────────────────────────────────────────────────
///   john.smith@boolean.edu         Student        0         ACTIVE
///   sarah.johnson@boolean.edu      Faculty        3         LOCKED
/// ```
fn print_status_table(users: &[UserStatus]) {
    println!("{}", "📋 Accounts".bright_blue().bold());
    println!();

    println!(
        "  {:<30} {:<14} {:<9} {:<8}",
        "Email".bright_white().bold(),
        "Role".bright_white().bold(),
        "Attempts".bright_white().bold(),
        "Status".bright_white().bold()
    );
    println!("  {}", "─".repeat(66).bright_black());

    for user in users {
        let status = if user.locked {
            "LOCKED".red()
        } else {
            "ACTIVE".green()
        };

        println!(
            "  {:<30} {:<14} {:<9} {}",
            user.email.cyan(),
            user.role.as_str(),
            user.attempts.to_string().bright_black(),
            status
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();
}
