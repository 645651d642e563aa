use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use rolo::api::PhonebookApi;
use rolo::commands::{CmdMessage, MessageLevel};
use rolo::config::RoloConfig;
use rolo::error::{Result, RoloError};
use rolo::group::GroupRegistry;
use rolo::model::{Contact, Field, SearchField};
use rolo::store::fs::FileStore;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands, SearchBy};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: PhonebookApi<FileStore>,
    config: RoloConfig,
    data_dir: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Search { term, by }) => handle_search(&ctx, &term, by),
        Some(Commands::Add {
            name,
            phone,
            email,
            group,
        }) => handle_add(&mut ctx, name, phone, email, group),
        Some(Commands::Modify {
            name,
            new_name,
            phone,
            email,
            group,
        }) => handle_modify(&mut ctx, &name, new_name, phone, email, group),
        Some(Commands::Delete { name }) => handle_delete(&mut ctx, &name),
        Some(Commands::Purge { yes }) => handle_purge(&mut ctx, yes),
        Some(Commands::Sort) => handle_sort(&mut ctx),
        Some(Commands::Groups) => handle_groups(&ctx),
        Some(Commands::Doctor) => handle_doctor(&mut ctx),
        Some(Commands::Path) => handle_path(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.dir {
        Some(dir) => dir.clone(),
        None => match std::env::var_os("ROLO_HOME") {
            Some(dir) => PathBuf::from(dir),
            None => ProjectDirs::from("com", "rolo", "rolo")
                .ok_or_else(|| RoloError::Store("Could not determine the data dir".to_string()))?
                .data_dir()
                .to_path_buf(),
        },
    };

    let config = RoloConfig::load(&data_dir).unwrap_or_default();
    let store = FileStore::new(data_dir.clone()).with_data_file(config.get_data_file());
    let groups = GroupRegistry::with_defaults(config.default_groups.clone());

    Ok(AppContext {
        api: PhonebookApi::new(store, groups),
        config,
        data_dir,
    })
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list()?;
    if !result.listed.is_empty() {
        print_contacts(&result.listed);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, term: &str, by: SearchBy) -> Result<()> {
    let field = match by {
        SearchBy::Name => SearchField::Name,
        SearchBy::Phone => SearchField::Phone,
        SearchBy::Group => SearchField::Group,
    };
    let result = ctx.api.search(field, term)?;
    if !result.listed.is_empty() {
        print_contacts(&result.listed);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(
    ctx: &mut AppContext,
    name: String,
    phone: String,
    email: String,
    group: String,
) -> Result<()> {
    if name.is_empty() {
        return Err(RoloError::Api("Name cannot be empty".into()));
    }
    let result = ctx.api.add(name, phone, email, &group)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_modify(
    ctx: &mut AppContext,
    name: &str,
    new_name: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    group: Option<String>,
) -> Result<()> {
    let given = [
        new_name.is_some(),
        phone.is_some(),
        email.is_some(),
        group.is_some(),
    ]
    .iter()
    .filter(|g| **g)
    .count();

    let result = match given {
        4 => ctx.api.modify_all(
            name,
            new_name.unwrap_or_default(),
            phone.unwrap_or_default(),
            email.unwrap_or_default(),
            &group.unwrap_or_default(),
        )?,
        1 => {
            let (field, value) = if let Some(v) = new_name {
                (Field::Name, v)
            } else if let Some(v) = phone {
                (Field::Phone, v)
            } else if let Some(v) = email {
                (Field::Email, v)
            } else {
                (Field::Group, group.unwrap_or_default())
            };
            ctx.api.modify_field(name, field, value)?
        }
        _ => {
            return Err(RoloError::Api(
                "Provide exactly one field flag, or all of --new-name, --phone, --email and --group"
                    .into(),
            ))
        }
    };

    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, name: &str) -> Result<()> {
    let result = ctx.api.delete(name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_purge(ctx: &mut AppContext, yes: bool) -> Result<()> {
    let result = ctx.api.purge(yes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_sort(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.sort()?;
    print_contacts(&result.listed);
    print_messages(&result.messages);
    Ok(())
}

fn handle_groups(ctx: &AppContext) -> Result<()> {
    println!("Select a group:");
    for (index, name) in ctx.api.group_choices() {
        println!("{} {}", format!("{}.", index).yellow(), name);
    }
    Ok(())
}

fn handle_doctor(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.doctor()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_path(ctx: &AppContext) -> Result<()> {
    if let Some(path) = ctx.api.data_path() {
        println!("{}", path.display());
    }
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    match (key.as_deref(), value) {
        (None, _) => {
            println!("data-file = {}", ctx.config.get_data_file());
            println!("default-groups = {}", ctx.config.default_groups.join(", "));
        }
        (Some("data-file"), None) => {
            println!("data-file = {}", ctx.config.get_data_file());
        }
        (Some("data-file"), Some(v)) => {
            ctx.config.set_data_file(&v);
            ctx.config.save(&ctx.data_dir)?;
            println!("data-file = {}", ctx.config.get_data_file());
        }
        (Some(other), _) => {
            println!("Unknown config key: {}", other);
        }
    }
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const NAME_COL: usize = 22;
const PHONE_COL: usize = 12;
const GROUP_COL: usize = 12;

fn print_contacts(contacts: &[Contact]) {
    if contacts.is_empty() {
        println!("No contacts found.");
        return;
    }

    for (i, contact) in contacts.iter().enumerate() {
        let idx = format!("{:>3}. ", i + 1);
        println!(
            "{}{} {} {} {}",
            idx.yellow(),
            pad(&contact.name, NAME_COL).bold(),
            pad(&contact.phone, PHONE_COL),
            pad(&contact.group, GROUP_COL).cyan(),
            contact.email.dimmed()
        );
    }
}

fn pad(s: &str, width: usize) -> String {
    let w = s.width();
    if w >= width {
        return s.to_string();
    }
    format!("{}{}", s, " ".repeat(width - w))
}
