//! Guardpost console: composition root and operator-facing view layer.
//!
//! Wires the HTTP roster gateway into the application services and exposes
//! them as argv commands; all rendering lives here, all behavior below.

#![forbid(unsafe_code)]

mod console_config;

use std::env;
use std::io::{self, Write};
use std::sync::Arc;

use guardpost_application::{
    EnrollmentWizard, NextOutcome, RosterGateway, ShiftPlanningService, WizardStep,
};
use guardpost_core::{AppError, AppResult, NonEmptyString};
use guardpost_domain::{
    CatalogEntryId, CatalogKind, GuardDutyId, NewPosition, PositionId, ShiftWindow, SoldierId,
};
use guardpost_infrastructure::HttpRosterGateway;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::console_config::ConsoleConfig;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = ConsoleConfig::load()?;
    info!(api_url = %config.api_url, "guardpost console starting");

    let gateway: Arc<dyn RosterGateway> =
        Arc::new(HttpRosterGateway::new(reqwest::Client::new(), config.api_url));

    let args: Vec<String> = env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("catalogs") => show_catalogs(gateway.as_ref()).await,
        Some("add-catalog") => {
            add_catalog_entry(gateway.as_ref(), args.get(1).map(String::as_str), args.get(2)).await
        }
        Some("soldiers") => show_soldiers(gateway.as_ref()).await,
        Some("remove-soldier") => {
            let id = parse_id(args.get(1))?;
            gateway.delete_soldier(SoldierId::from_raw(id)).await?;
            println!("Soldier {id} removed.");
            Ok(())
        }
        Some("positions") => show_positions(gateway.as_ref()).await,
        Some("add-position") => add_position(gateway.as_ref(), &args[1..]).await,
        Some("remove-position") => {
            let id = parse_id(args.get(1))?;
            gateway.delete_position(PositionId::from_raw(id)).await?;
            println!("Position {id} removed.");
            Ok(())
        }
        Some("duties") => show_duties(gateway.as_ref()).await,
        Some("remove-duty") => {
            let id = parse_id(args.get(1))?;
            gateway.delete_duty(GuardDutyId::from_raw(id)).await?;
            println!("Guard duty {id} removed.");
            Ok(())
        }
        Some("enroll") => run_enrollment(gateway.clone()).await,
        Some("generate") => run_generation(gateway.clone(), args.get(1)).await,
        _ => {
            print_usage();
            Err(AppError::Validation("unknown command".to_owned()))
        }
    }
}

fn print_usage() {
    println!("usage: guardpost <command>");
    println!("  catalogs");
    println!("  add-catalog <functionality|restriction|condition> <name>");
    println!("  soldiers | remove-soldier <id>");
    println!("  positions | add-position <name> <count> [func_ids] [cond_ids] [restr_ids]");
    println!("  remove-position <id>");
    println!("  duties | remove-duty <id>");
    println!("  enroll");
    println!("  generate HH:MM-HH:MM[,HH:MM-HH:MM...]");
}

async fn show_catalogs(gateway: &dyn RosterGateway) -> AppResult<()> {
    for kind in [
        CatalogKind::Functionality,
        CatalogKind::Restriction,
        CatalogKind::Condition,
    ] {
        println!("{kind} entries:");
        for entry in gateway.list_catalog(kind).await? {
            println!("  {}. {}", entry.id, entry.name);
        }
    }
    Ok(())
}

async fn add_catalog_entry(
    gateway: &dyn RosterGateway,
    kind: Option<&str>,
    name: Option<&String>,
) -> AppResult<()> {
    let kind = match kind {
        Some("functionality") => CatalogKind::Functionality,
        Some("restriction") => CatalogKind::Restriction,
        Some("condition") => CatalogKind::Condition,
        other => {
            return Err(AppError::Validation(format!(
                "unknown catalog '{}'",
                other.unwrap_or("<missing>")
            )));
        }
    };
    let name = NonEmptyString::new(name.cloned().unwrap_or_default())?;
    gateway.create_catalog_entry(kind, name).await?;
    println!("Added {kind} entry.");
    Ok(())
}

async fn show_soldiers(gateway: &dyn RosterGateway) -> AppResult<()> {
    for soldier in gateway.list_soldiers().await? {
        println!(
            "{}. {} (id {}, personal id {})",
            soldier.index,
            soldier.display_name(),
            soldier.id,
            soldier.personal_id.as_deref().unwrap_or("-"),
        );
        if !soldier.functionalities.is_empty() {
            println!("   functionalities: {}", soldier.functionalities.join(", "));
        }
        if !soldier.restrictions.is_empty() {
            println!("   restrictions: {}", soldier.restrictions.join(", "));
        }
    }
    Ok(())
}

async fn show_positions(gateway: &dyn RosterGateway) -> AppResult<()> {
    for position in gateway.list_positions().await? {
        println!(
            "{}. {} (x{})",
            position.id, position.name, position.required_count
        );
    }
    Ok(())
}

async fn add_position(gateway: &dyn RosterGateway, args: &[String]) -> AppResult<()> {
    let name = args
        .first()
        .cloned()
        .ok_or_else(|| AppError::Validation("position name is required".to_owned()))?;
    let count = args
        .get(1)
        .and_then(|value| value.parse::<u32>().ok())
        .ok_or_else(|| AppError::Validation("position count must be a number".to_owned()))?;

    let position = NewPosition::new(
        name,
        count,
        parse_id_list(args.get(2))?,
        parse_id_list(args.get(3))?,
        parse_id_list(args.get(4))?,
    )?;
    gateway.create_position(position).await?;
    println!("Position added.");
    Ok(())
}

async fn show_duties(gateway: &dyn RosterGateway) -> AppResult<()> {
    for duty in gateway.list_duties().await? {
        println!(
            "{}. {} - {} ({} to {})",
            duty.id, duty.position, duty.soldier, duty.start_time, duty.end_time
        );
    }
    Ok(())
}

/// Drives the enrollment wizard over stdin, one step per prompt round.
async fn run_enrollment(gateway: Arc<dyn RosterGateway>) -> AppResult<()> {
    let functionalities = gateway.list_catalog(CatalogKind::Functionality).await?;
    let restrictions = gateway.list_catalog(CatalogKind::Restriction).await?;
    let roster = gateway.list_soldiers().await?;

    let mut wizard = EnrollmentWizard::new(gateway.clone());
    loop {
        println!("-- {}", wizard.step().title());
        match wizard.step() {
            WizardStep::PersonalInfo => {
                wizard.draft_mut().first_name = prompt("First name")?;
                wizard.draft_mut().last_name = prompt("Last name")?;
                wizard.draft_mut().personal_id = prompt("Personal ID (optional)")?;
            }
            WizardStep::Functionality => {
                for entry in &functionalities {
                    println!("  {}. {}", entry.id, entry.name);
                }
                for id in parse_id_list(Some(&prompt("Functionality id")?))? {
                    wizard.draft_mut().functionality.toggle(id);
                }
            }
            WizardStep::Restrictions => {
                for entry in &restrictions {
                    println!("  {}. {}", entry.id, entry.name);
                }
                for id in parse_id_list(Some(&prompt("Restriction ids (comma separated)")?))? {
                    wizard.draft_mut().restrictions.toggle(id);
                }
            }
            WizardStep::IncompatibleWith => {
                for soldier in &roster {
                    println!("  {}. {}", soldier.id, soldier.display_name());
                }
                let raw = prompt("Incompatible soldier ids (comma separated)")?;
                for id in parse_raw_id_list(&raw)? {
                    wizard.draft_mut().incompatible.toggle(SoldierId::from_raw(id));
                }
            }
        }

        match wizard.next().await? {
            NextOutcome::Advanced(_) => {}
            NextOutcome::Rejected => {
                println!("{}", wizard.last_error().unwrap_or("Invalid input."));
            }
            NextOutcome::Submitted => {
                println!("Soldier enrolled.");
                break;
            }
        }
    }

    // Scoped re-fetch of the affected collection, not a full reload.
    show_soldiers(gateway.as_ref()).await
}

async fn run_generation(
    gateway: Arc<dyn RosterGateway>,
    windows: Option<&String>,
) -> AppResult<()> {
    let windows = windows
        .ok_or_else(|| {
            AppError::Validation("generate requires a window list, e.g. 08:00-12:00".to_owned())
        })?
        .split(',')
        .map(ShiftWindow::parse)
        .collect::<AppResult<Vec<_>>>()?;

    let service = ShiftPlanningService::new(gateway);
    let outcome = service.generate_and_commit(&windows).await?;

    for warning in &outcome.warnings {
        println!("warning: {warning}");
    }
    for skipped in &outcome.skipped {
        println!("skipped: {skipped}");
    }
    for failure in &outcome.failures {
        println!("failed: {failure}");
    }
    println!("Committed {} duty record(s).", outcome.committed);
    for duty in &outcome.duties {
        println!(
            "{}. {} - {} ({} to {})",
            duty.id, duty.position, duty.soldier, duty.start_time, duty.end_time
        );
    }
    Ok(())
}

fn prompt(label: &str) -> AppResult<String> {
    print!("{label}: ");
    io::stdout()
        .flush()
        .map_err(|error| AppError::Internal(error.to_string()))?;
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .map_err(|error| AppError::Internal(error.to_string()))?;
    Ok(line.trim().to_owned())
}

fn parse_id(value: Option<&String>) -> AppResult<i64> {
    value
        .and_then(|value| value.parse::<i64>().ok())
        .ok_or_else(|| AppError::Validation("a numeric id is required".to_owned()))
}

fn parse_raw_id_list(raw: &str) -> AppResult<Vec<i64>> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|_| AppError::Validation(format!("'{token}' is not a numeric id")))
        })
        .collect()
}

fn parse_id_list(value: Option<&String>) -> AppResult<Vec<CatalogEntryId>> {
    let raw = value.map(String::as_str).unwrap_or_default();
    Ok(parse_raw_id_list(raw)?
        .into_iter()
        .map(CatalogEntryId::from_raw)
        .collect())
}
