use super::menu::Menu;
use super::print::{print_messages, render_card, render_config, render_table};
use super::setup::{Cli, Commands};
use clap::Parser;
use contactz::api::{ConfigAction, ContactsApi};
use contactz::error::Result;
use contactz::init::{initialize, resolve_data_dir};
use contactz::logging::{init_logging, Verbosity};
use contactz::model::{ContactDraft, ContactUpdate, Field};
use contactz::store::fs::FileStore;
use std::io;

struct AppContext {
    api: ContactsApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let verbosity = if cli.quiet {
        Verbosity::Quiet
    } else {
        Verbosity::from_count(cli.verbose)
    };
    init_logging(verbosity);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        None | Some(Commands::Menu) => handle_menu(&mut ctx),
        Some(Commands::Add {
            name,
            phone,
            email,
            address,
        }) => handle_add(&mut ctx, ContactDraft::new(name, phone, email, address)),
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Search { query }) => handle_search(&ctx, query.join(" ")),
        Some(Commands::View { id }) => handle_view(&ctx, id),
        Some(Commands::Edit {
            id,
            name,
            phone,
            email,
            address,
        }) => {
            let mut update = ContactUpdate::default();
            for (field, value) in [
                (Field::Name, name),
                (Field::Phone, phone),
                (Field::Email, email),
                (Field::Address, address),
            ] {
                if let Some(value) = value {
                    update.set(field, value);
                }
            }
            handle_edit(&mut ctx, id, update)
        }
        Some(Commands::Delete { id }) => handle_delete(&mut ctx, id),
        Some(Commands::NextId) => handle_next_id(&ctx),
        Some(Commands::Doctor { fix }) => handle_doctor(&mut ctx, fix),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli.dir.as_deref())?;
    let ctx = initialize(&data_dir);
    Ok(AppContext { api: ctx.api })
}

fn handle_menu(ctx: &mut AppContext) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(&mut ctx.api, stdin.lock(), stdout.lock()).run()
}

fn handle_add(ctx: &mut AppContext, draft: ContactDraft) -> Result<()> {
    let result = ctx.api.add_contact(draft)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_contacts()?;
    print!("{}", render_table(&result.listed_contacts));
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, query: String) -> Result<()> {
    let result = ctx.api.search_contacts(&query)?;
    if result.listed_contacts.is_empty() {
        println!("No matching contacts found.");
    } else {
        print!("{}", render_table(&result.listed_contacts));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, id: u32) -> Result<()> {
    let result = ctx.api.view_contact(id)?;
    for contact in &result.listed_contacts {
        print!("{}", render_card(contact));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, id: u32, update: ContactUpdate) -> Result<()> {
    let result = ctx.api.edit_contact(id, &update)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: u32) -> Result<()> {
    let result = ctx.api.delete_contact(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_next_id(ctx: &AppContext) -> Result<()> {
    println!("{}", ctx.api.next_id()?);
    Ok(())
}

fn handle_doctor(ctx: &mut AppContext, fix: bool) -> Result<()> {
    let result = ctx.api.doctor(fix)?;
    println!("Store: {}", ctx.api.paths().store_file.display());
    if let Some(report) = &result.report {
        if report.exists {
            println!(
                "Size: {} bytes, {} record(s), {} trailing byte(s)",
                report.bytes, report.records, report.trailing
            );
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let (Some(config), true) = (&result.config, result.messages.is_empty()) {
        print!("{}", render_config(config));
    }
    print_messages(&result.messages);
    Ok(())
}
