//! campus_ledger entry point
//!
//! One binary, one mode per run:
//!
//! ```text
//! campus_ledger --check              connect and report database health
//! campus_ledger --ingest             interactive batched student ingest
//! campus_ledger --transfer           interactive debit/credit transfer
//! campus_ledger --list               print the roster
//! campus_ledger --delete <id>        delete one student
//! campus_ledger --env <name>         config environment (default: dev)
//! ```

use anyhow::{Context, anyhow};
use campus_ledger::config::AppConfig;
use campus_ledger::db::Database;
use campus_ledger::input::{ConsoleSource, prompt_transfer_input};
use campus_ledger::ledger::{TransferRequest, TransferService};
use campus_ledger::roster::{IngestService, RosterRepository};

// ============================================================
// ARGUMENT PARSING
// ============================================================

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

fn use_check_mode() -> bool {
    std::env::args().any(|a| a == "--check")
}

fn use_ingest_mode() -> bool {
    std::env::args().any(|a| a == "--ingest")
}

fn use_transfer_mode() -> bool {
    std::env::args().any(|a| a == "--transfer")
}

fn use_list_mode() -> bool {
    std::env::args().any(|a| a == "--list")
}

/// Get the student id following --delete, if present
fn get_delete_id() -> Option<i32> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--delete" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

// ============================================================
// MAIN
// ============================================================

fn main() {
    let env = get_env();
    let config = AppConfig::load(&env);
    let _log_guard = campus_ledger::logging::init_logging(&config);

    tracing::info!("Starting campus_ledger ({}) in {} env", env!("GIT_HASH"), env);

    let rt = tokio::runtime::Runtime::new().expect("Failed to build tokio runtime");

    match rt.block_on(run(&config)) {
        Ok(status) => println!("{}", status),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

async fn run(config: &AppConfig) -> anyhow::Result<String> {
    if use_transfer_mode() {
        // Input is read and validated before any storage access
        let raw = prompt_transfer_input().ok_or_else(|| anyhow!("No transfer input"))?;
        let request = TransferRequest::parse(&raw)?;

        let db = Database::connect(&config.database)
            .await
            .context("Database connection failed")?;
        TransferService::execute(&db, &request).await?;
        return Ok("Transaction Successful!".to_string());
    }

    let db = Database::connect(&config.database)
        .await
        .context("Database connection failed")?;

    if use_check_mode() {
        db.health_check().await?;
        return Ok("Database Connected Successfully".to_string());
    }

    if use_list_mode() {
        let students = RosterRepository::list_all(db.pool()).await?;
        for s in &students {
            println!(
                "Student -> id: {}, Name: {}, Age: {}, Score: {}",
                s.id, s.name, s.age, s.score
            );
        }
        return Ok(format!("{} students in roster", students.len()));
    }

    if let Some(id) = get_delete_id() {
        let affected = RosterRepository::delete(db.pool(), id).await?;
        return Ok(if affected > 0 {
            format!("Deleted student {}", id)
        } else {
            format!("No student with id {}", id)
        });
    }

    if use_ingest_mode() {
        let mut source = ConsoleSource::new();
        let inserted = IngestService::new().run(&mut source, &db).await?;
        return Ok(format!("Inserted {} students successfully", inserted));
    }

    Err(anyhow!(
        "No mode selected: use --check, --ingest, --transfer, --list or --delete <id>"
    ))
}
