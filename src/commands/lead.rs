use clap::{Args, Subcommand};
use serde::Serialize;

use leadctl::lead::{self, Lead, NewLead};
use leadctl::validation;

use super::{CmdResult, GlobalArgs};
use crate::tty;

#[derive(Default, Serialize)]
pub struct LeadOutput {
    command: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    lead_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lead: Option<Lead>,
    #[serde(skip_serializing_if = "Option::is_none")]
    leads: Option<Vec<Lead>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    updated: Option<Vec<String>>,
}

#[derive(Args)]
pub struct LeadArgs {
    #[command(subcommand)]
    command: LeadCommand,
}

#[derive(Subcommand)]
enum LeadCommand {
    /// Record a new lead (prompts for missing fields on a terminal)
    Add {
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        /// Existing website, if any
        #[arg(long)]
        website: Option<String>,
        /// Where the lead came from (default: landing_page)
        #[arg(long)]
        source: Option<String>,
    },
    /// List leads, newest first
    List {
        /// Only leads with this status
        #[arg(long)]
        status: Option<String>,
    },
    /// Show one lead
    Show {
        /// Lead ID
        id: i64,
    },
    /// Update a lead's status
    Status {
        /// Lead ID
        id: i64,
        /// New status (e.g. contacted, qualified, converted)
        status: String,
        /// Replace the lead's notes
        #[arg(long)]
        notes: Option<String>,
    },
}

pub fn run(args: LeadArgs, global: &GlobalArgs) -> CmdResult<LeadOutput> {
    match args.command {
        LeadCommand::Add {
            first_name,
            last_name,
            email,
            phone,
            website,
            source,
        } => {
            let interactive = tty::can_prompt()
                && [&first_name, &last_name, &email, &phone]
                    .iter()
                    .any(|v| v.is_none());

            let ask = |value: Option<String>, label: &str, default: Option<&str>| {
                if value.is_some() || !interactive {
                    return Ok(validation::non_blank(value));
                }
                tty::prompt_with_default(label, default)
            };

            if interactive {
                tty::status("\n=== Add New Lead ===\n");
            }

            let new_lead = NewLead {
                first_name: validation::require_value(
                    ask(first_name, "First Name", None)?,
                    "first_name",
                )?,
                last_name: validation::require_value(
                    ask(last_name, "Last Name", None)?,
                    "last_name",
                )?,
                email: validation::require_value(ask(email, "Email", None)?, "email")?,
                phone: validation::require_value(ask(phone, "Phone", None)?, "phone")?,
                current_website: ask(website, "Current Website (optional)", None)?,
                source: ask(source, "Source", Some(lead::DEFAULT_SOURCE))?,
            };

            add(global, &new_lead)
        }
        LeadCommand::List { status } => list(global, status.as_deref()),
        LeadCommand::Show { id } => show(global, id),
        LeadCommand::Status { id, status, notes } => {
            set_status(global, id, &status, notes.as_deref())
        }
    }
}

fn add(global: &GlobalArgs, new_lead: &NewLead) -> CmdResult<LeadOutput> {
    let (store, _) = global.open_store()?;
    let id = lead::add(&store, new_lead)?;
    let created = lead::load(&store, id)?;

    Ok((
        LeadOutput {
            command: "lead.add".to_string(),
            lead_id: Some(id),
            lead: Some(created),
            updated: Some(vec!["created".to_string()]),
            ..Default::default()
        },
        0,
    ))
}

fn list(global: &GlobalArgs, status: Option<&str>) -> CmdResult<LeadOutput> {
    let (store, _) = global.open_store()?;
    let leads = lead::list(&store, status)?;

    Ok((
        LeadOutput {
            command: "lead.list".to_string(),
            leads: Some(leads),
            ..Default::default()
        },
        0,
    ))
}

fn show(global: &GlobalArgs, id: i64) -> CmdResult<LeadOutput> {
    let (store, _) = global.open_store()?;
    let found = lead::load(&store, id)?;

    Ok((
        LeadOutput {
            command: "lead.show".to_string(),
            lead_id: Some(found.id),
            lead: Some(found),
            ..Default::default()
        },
        0,
    ))
}

fn set_status(
    global: &GlobalArgs,
    id: i64,
    status: &str,
    notes: Option<&str>,
) -> CmdResult<LeadOutput> {
    let (store, _) = global.open_store()?;
    lead::update_status(&store, id, status, notes)?;

    let mut updated = vec!["status".to_string()];
    if notes.is_some_and(|n| !n.is_empty()) {
        updated.push("notes".to_string());
    }

    Ok((
        LeadOutput {
            command: "lead.status".to_string(),
            lead_id: Some(id),
            lead: Some(lead::load(&store, id)?),
            updated: Some(updated),
            ..Default::default()
        },
        0,
    ))
}
