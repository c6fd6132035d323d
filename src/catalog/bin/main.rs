include!("../../lib.rs");

use std::io;
use std::io::{BufRead, Write};
use crate::catalog::command::add_item_cmd::AddItemCommandRequest;
use crate::catalog::controller;
use crate::catalog::controller::{MenuChoice, MENU};
use crate::catalog::domain::CatalogService;
use crate::core::controller::AppState;
use crate::core::repository::RepositoryStore;
use crate::items::domain::model::ItemKind;
use crate::utils::trace::setup_tracing;

// sample seed data lives in the driver; the catalog itself only accepts
// items through add_item
fn seed_catalog(svc: &mut dyn CatalogService) {
    let requests = vec![
        AddItemCommandRequest::new("1984", "George Orwell", "1234567890", ItemKind::Book),
        AddItemCommandRequest::new("To Kill a Mockingbird", "Harper Lee", "0987654321",
                                   ItemKind::EBook { file_size: "1.5MB".to_string() }),
        AddItemCommandRequest::new("The Great Gatsby", "F. Scott Fitzgerald", "1122334455",
                                   ItemKind::AudioBook { duration_mins: 300 }),
    ];
    for req in requests {
        if let Err(msg) = controller::add_item(svc, req) {
            tracing::warn!("failed to seed catalog: {}", msg);
        }
    }
}

fn prompt_title(out: &mut impl Write, lines: &mut impl Iterator<Item = io::Result<String>>,
                action: &str) -> io::Result<Option<String>> {
    write!(out, "Enter the title of the book to {}: ", action)?;
    out.flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?.trim_end().to_string())),
        None => Ok(None),
    }
}

fn main() -> io::Result<()> {
    setup_tracing();

    let state = AppState::new("main", RepositoryStore::InMemory);
    let mut svc = catalog::factory::create_catalog_service(&state.config, state.store);
    seed_catalog(svc.as_mut());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut out = io::stdout();

    loop {
        write!(out, "{}", MENU)?;
        out.flush()?;
        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        match MenuChoice::parse(line.as_str()) {
            Ok(MenuChoice::Borrow) => {
                let Some(title) = prompt_title(&mut out, &mut lines, "borrow")? else { break };
                match controller::borrow_item(svc.as_mut(), title.as_str()) {
                    Ok(msg) => writeln!(out, "{}", msg)?,
                    Err(msg) => writeln!(out, "{}", msg)?,
                }
            }
            Ok(MenuChoice::Return) => {
                let Some(title) = prompt_title(&mut out, &mut lines, "return")? else { break };
                match controller::return_item(svc.as_mut(), title.as_str()) {
                    Ok(msg) => writeln!(out, "{}", msg)?,
                    Err(msg) => writeln!(out, "{}", msg)?,
                }
            }
            Ok(MenuChoice::ListAvailable) => {
                match controller::list_available(svc.as_mut()) {
                    Ok(listing) => writeln!(out, "{}", listing)?,
                    Err(msg) => writeln!(out, "{}", msg)?,
                }
            }
            Ok(MenuChoice::Exit) => {
                writeln!(out, "Exiting the system.")?;
                break;
            }
            Err(msg) => {
                writeln!(out, "{}", msg)?;
            }
        }
    }
    Ok(())
}
