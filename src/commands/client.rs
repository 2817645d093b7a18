use clap::{Args, Subcommand};
use serde::Serialize;

use leadctl::client::{self, Client, ClientUpdate, NewClient};
use leadctl::defaults::Settings;
use leadctl::lead::{self, Lead};
use leadctl::preview::{self, GeneratedPreview};
use leadctl::slugify::slugify;
use leadctl::{time, validation, BulkResult, Error, Store};

use super::{CmdResult, GlobalArgs};
use crate::tty;

#[derive(Default, Serialize)]
pub struct ClientOutput {
    command: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    client_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    client: Option<Client>,
    #[serde(skip_serializing_if = "Option::is_none")]
    clients: Option<Vec<Client>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    updated: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    preview_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    converted_lead_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generated: Option<GeneratedPreview>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bulk: Option<BulkResult<GeneratedPreview>>,
}

#[derive(Args)]
pub struct ClientArgs {
    #[command(subcommand)]
    command: ClientCommand,
}

#[derive(Args, Default)]
struct ClientFields {
    /// URL slug (defaults to a slug of the business name)
    #[arg(long)]
    slug: Option<String>,
    /// Business name
    #[arg(long = "name")]
    business_name: Option<String>,
    /// Business type (plumber, electrician, restaurant, ...)
    #[arg(long = "type")]
    business_type: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    address: Option<String>,
    /// Comma-separated list of services
    #[arg(long)]
    services: Option<String>,
}

#[derive(Subcommand)]
enum ClientCommand {
    /// Register a client (prompts for missing fields on a terminal)
    Add {
        /// Lead this client was converted from
        #[arg(long)]
        lead_id: Option<i64>,
        #[command(flatten)]
        fields: ClientFields,
        /// Skip writing the preview config after creating the client
        #[arg(long)]
        no_generate: bool,
    },
    /// List clients, newest first
    List {
        /// Only clients with this status
        #[arg(long)]
        status: Option<String>,
    },
    /// Show one client and its preview URL
    Show {
        /// Client ID
        id: i64,
    },
    /// Update selected client fields
    #[command(visible_alias = "edit")]
    Set {
        /// Client ID
        id: i64,
        #[command(flatten)]
        fields: ClientFields,
        #[arg(long)]
        status: Option<String>,
        /// Service tier (e.g. website_only)
        #[arg(long)]
        tier: Option<String>,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long)]
        lead_id: Option<i64>,
    },
    /// Update a client's status
    Status {
        /// Client ID
        id: i64,
        /// New status
        status: String,
    },
    /// Write the preview config for one client
    Generate {
        /// Client ID
        id: i64,
    },
    /// Write preview configs for every client
    GenerateAll,
}

pub fn run(args: ClientArgs, global: &GlobalArgs) -> CmdResult<ClientOutput> {
    match args.command {
        ClientCommand::Add {
            lead_id,
            fields,
            no_generate,
        } => {
            let interactive = tty::can_prompt() && fields.business_name.is_none();
            add(global, lead_id, fields, no_generate, interactive)
        }
        ClientCommand::List { status } => list(global, status.as_deref()),
        ClientCommand::Show { id } => show(global, id),
        ClientCommand::Set {
            id,
            fields,
            status,
            tier,
            notes,
            lead_id,
        } => {
            let changes = ClientUpdate {
                lead_id,
                slug: fields.slug,
                business_name: fields.business_name,
                business_type: fields.business_type,
                phone: fields.phone,
                email: fields.email,
                address: fields.address,
                services: fields.services,
                status,
                tier,
                notes,
            };
            set(global, id, &changes)
        }
        ClientCommand::Status { id, status } => {
            set(global, id, &ClientUpdate::status(status))
        }
        ClientCommand::Generate { id } => generate(global, id),
        ClientCommand::GenerateAll => generate_all(global),
    }
}

// ============================================================================
// Add wizard
// ============================================================================

fn parse_lead_id(raw: &str) -> leadctl::Result<i64> {
    raw.parse().map_err(|_| {
        Error::validation_invalid_argument(
            "lead_id",
            format!("Lead ID must be numeric, got '{}'", raw),
            None,
            None,
        )
    })
}

/// Collect the new client's fields from flags, prompting for the rest when
/// running interactively.
fn collect_new_client(
    store: &Store,
    lead_id: Option<i64>,
    fields: ClientFields,
    interactive: bool,
) -> leadctl::Result<(NewClient, Option<Lead>)> {
    let ask = |value: Option<String>, label: &str, default: Option<&str>| {
        if value.is_some() {
            return Ok(validation::non_blank(value));
        }
        if interactive {
            return tty::prompt_with_default(label, default);
        }
        Ok(default.map(str::to_string))
    };

    let lead_id = match lead_id {
        Some(id) => Some(id),
        None if interactive => {
            let raw = tty::prompt("Lead ID (optional, press Enter to skip): ")?;
            if raw.is_empty() {
                None
            } else {
                Some(parse_lead_id(&raw)?)
            }
        }
        None => None,
    };

    let source_lead = lead_id.map(|id| lead::load(store, id)).transpose()?;
    if let Some(found) = &source_lead {
        if interactive {
            tty::status(&format!(
                "  Found lead: {} ({})",
                found.full_name(),
                found.email
            ));
        }
    }

    let business_name =
        validation::require_value(ask(fields.business_name, "Business Name", None)?, "business_name")?;

    let suggested_slug = slugify(&business_name);
    let slug = validation::require_value(
        ask(fields.slug, "Slug", Some(suggested_slug.as_str()))?,
        "slug",
    )?;

    let business_type = ask(
        fields.business_type,
        "Business Type (plumber, electrician, restaurant, etc.)",
        None,
    )?;
    let phone = ask(
        fields.phone,
        "Phone",
        source_lead.as_ref().map(|l| l.phone.as_str()),
    )?;
    let email = ask(
        fields.email,
        "Email",
        source_lead.as_ref().map(|l| l.email.as_str()),
    )?;
    let address = ask(fields.address, "Address", None)?;
    let services = ask(fields.services, "Services (comma-separated)", None)?;

    Ok((
        NewClient {
            slug,
            business_name,
            business_type,
            lead_id,
            phone,
            email,
            address,
            services,
        },
        source_lead,
    ))
}

fn add(
    global: &GlobalArgs,
    lead_id: Option<i64>,
    fields: ClientFields,
    no_generate: bool,
    interactive: bool,
) -> CmdResult<ClientOutput> {
    let (store, settings) = global.open_store()?;

    if interactive {
        tty::status("\n=== Add New Client ===\n");
    }

    let (new_client, source_lead) = collect_new_client(&store, lead_id, fields, interactive)?;

    let id = client::register(&store, &new_client)?;
    let converted_lead_id = source_lead.map(|found| found.id);

    let created = client::load(&store, id)?;

    let should_generate = if no_generate {
        false
    } else if interactive {
        tty::prompt("\nGenerate preview JSON now? [Y/n]: ")?.to_lowercase() != "n"
    } else {
        true
    };

    let generated = if should_generate {
        Some(generate_one(&created, &settings)?)
    } else {
        None
    };

    Ok((
        ClientOutput {
            command: "client.add".to_string(),
            client_id: Some(id),
            preview_url: Some(client::preview_url(&settings.preview_base_url, &created.slug)),
            client: Some(created),
            updated: Some(vec!["created".to_string()]),
            converted_lead_id,
            generated,
            ..Default::default()
        },
        0,
    ))
}

// ============================================================================
// Read / update
// ============================================================================

fn list(global: &GlobalArgs, status: Option<&str>) -> CmdResult<ClientOutput> {
    let (store, _) = global.open_store()?;
    let clients = client::list(&store, status)?;

    Ok((
        ClientOutput {
            command: "client.list".to_string(),
            clients: Some(clients),
            ..Default::default()
        },
        0,
    ))
}

fn show(global: &GlobalArgs, id: i64) -> CmdResult<ClientOutput> {
    let (store, settings) = global.open_store()?;
    let found = client::load(&store, id)?;

    Ok((
        ClientOutput {
            command: "client.show".to_string(),
            client_id: Some(found.id),
            preview_url: Some(client::preview_url(&settings.preview_base_url, &found.slug)),
            client: Some(found),
            ..Default::default()
        },
        0,
    ))
}

fn set(global: &GlobalArgs, id: i64, changes: &ClientUpdate) -> CmdResult<ClientOutput> {
    let (store, _) = global.open_store()?;
    let updated = client::update(&store, id, changes)?;

    Ok((
        ClientOutput {
            command: "client.set".to_string(),
            client_id: Some(id),
            client: Some(client::load(&store, id)?),
            updated: Some(updated),
            ..Default::default()
        },
        0,
    ))
}

// ============================================================================
// Preview generation
// ============================================================================

fn generate_one(found: &Client, settings: &Settings) -> leadctl::Result<GeneratedPreview> {
    preview::generate(
        found,
        &settings.output_dir,
        &settings.preview_base_url,
        &time::now(),
    )
}

fn generate(global: &GlobalArgs, id: i64) -> CmdResult<ClientOutput> {
    let (store, settings) = global.open_store()?;
    let found = client::load(&store, id)?;
    let generated = generate_one(&found, &settings)?;

    Ok((
        ClientOutput {
            command: "client.generate".to_string(),
            client_id: Some(found.id),
            preview_url: Some(generated.preview_url.clone()),
            generated: Some(generated),
            ..Default::default()
        },
        0,
    ))
}

fn generate_all(global: &GlobalArgs) -> CmdResult<ClientOutput> {
    let (store, settings) = global.open_store()?;
    let clients = client::list(&store, None)?;

    tty::status(&format!("Generating {} client configs...", clients.len()));

    let now = time::now();
    let bulk = BulkResult::from_outcomes(
        "client.generate_all",
        clients.iter().map(|c| {
            (
                c.id.to_string(),
                preview::generate(c, &settings.output_dir, &settings.preview_base_url, &now),
            )
        }),
    );

    let exit_code = if bulk.summary.failed > 0 { 1 } else { 0 };

    Ok((
        ClientOutput {
            command: "client.generate_all".to_string(),
            bulk: Some(bulk),
            ..Default::default()
        },
        exit_code,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use leadctl::lead::NewLead;
    use leadctl::ErrorCode;

    fn named(name: &str) -> ClientFields {
        ClientFields {
            business_name: Some(name.to_string()),
            ..Default::default()
        }
    }

    fn maria(store: &Store) -> i64 {
        lead::add(
            store,
            &NewLead {
                first_name: "Maria".to_string(),
                last_name: "Lopez".to_string(),
                email: "maria@lopezelectric.com".to_string(),
                phone: "555-0142".to_string(),
                ..Default::default()
            },
        )
        .unwrap()
    }

    fn workspace(dir: &tempfile::TempDir) -> GlobalArgs {
        let db = dir.path().join("leadctl.db");
        Store::initialize(&db).unwrap();

        GlobalArgs {
            db: Some(db.display().to_string()),
            output_dir: Some(dir.path().join("clients").display().to_string()),
        }
    }

    #[test]
    fn missing_name_without_terminal_is_missing_argument() {
        let store = Store::open_in_memory().unwrap();

        let err = collect_new_client(&store, None, ClientFields::default(), false).unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationMissingArgument);
    }

    #[test]
    fn lead_contact_details_fill_missing_fields() {
        let store = Store::open_in_memory().unwrap();
        let lead_id = maria(&store);

        let (new_client, source) =
            collect_new_client(&store, Some(lead_id), named("Lopez Electric"), false).unwrap();

        assert_eq!(source.map(|l| l.id), Some(lead_id));
        assert_eq!(new_client.slug, "lopez-electric");
        assert_eq!(new_client.phone.as_deref(), Some("555-0142"));
        assert_eq!(new_client.email.as_deref(), Some("maria@lopezelectric.com"));
        assert_eq!(new_client.lead_id, Some(lead_id));
    }

    #[test]
    fn explicit_flags_win_over_lead_details() {
        let store = Store::open_in_memory().unwrap();
        let lead_id = maria(&store);
        let fields = ClientFields {
            phone: Some("555-9999".to_string()),
            slug: Some("lopez".to_string()),
            ..named("Lopez Electric")
        };

        let (new_client, _) = collect_new_client(&store, Some(lead_id), fields, false).unwrap();

        assert_eq!(new_client.slug, "lopez");
        assert_eq!(new_client.phone.as_deref(), Some("555-9999"));
    }

    #[test]
    fn unknown_lead_is_rejected_before_insert() {
        let store = Store::open_in_memory().unwrap();

        let err = collect_new_client(&store, Some(77), named("Ghost Co"), false).unwrap_err();

        assert_eq!(err.code, ErrorCode::LeadNotFound);
    }

    #[test]
    fn add_converts_lead_and_writes_preview() {
        let dir = tempfile::tempdir().unwrap();
        let global = workspace(&dir);
        let lead_id = maria(&Store::open(&dir.path().join("leadctl.db")).unwrap());

        let (output, exit_code) =
            add(&global, Some(lead_id), named("Lopez Electric"), false, false).unwrap();

        assert_eq!(exit_code, 0);
        assert_eq!(output.converted_lead_id, Some(lead_id));
        let generated = output.generated.unwrap();
        assert_eq!(
            generated.path,
            dir.path().join("clients").join("lopez-electric.json")
        );
        assert!(generated.path.exists());

        let store = Store::open(&dir.path().join("leadctl.db")).unwrap();
        let converted = lead::load(&store, lead_id).unwrap();
        assert_eq!(converted.status.as_deref(), Some(lead::STATUS_CONVERTED));
    }

    #[test]
    fn add_with_no_generate_skips_preview() {
        let dir = tempfile::tempdir().unwrap();
        let global = workspace(&dir);

        let (output, _) = add(&global, None, named("Acme"), true, false).unwrap();

        assert!(output.generated.is_none());
        assert_eq!(output.converted_lead_id, None);
        assert!(!dir.path().join("clients").join("acme.json").exists());
    }

    #[test]
    fn generate_all_keeps_going_and_exits_1_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let global = workspace(&dir);
        add(&global, None, named("Alpha"), true, false).unwrap();
        add(&global, None, named("Beta"), true, false).unwrap();
        std::fs::create_dir_all(dir.path().join("clients").join("beta.json")).unwrap();

        let (output, exit_code) = generate_all(&global).unwrap();

        assert_eq!(exit_code, 1);
        let bulk = output.bulk.unwrap();
        assert_eq!(bulk.summary.succeeded, 1);
        assert_eq!(bulk.summary.failed, 1);
        assert!(dir.path().join("clients").join("alpha.json").is_file());
    }
}
