use crate::catalog::command::add_item_cmd::{AddItemCommand, AddItemCommandRequest};
use crate::catalog::command::borrow_item_cmd::{BorrowItemCommand, BorrowItemCommandRequest};
use crate::catalog::command::list_available_cmd::{ListAvailableCommand, ListAvailableCommandRequest};
use crate::catalog::command::return_item_cmd::{ReturnItemCommand, ReturnItemCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::core::command::Command;
use crate::core::controller::ConsoleError;

pub(crate) const MENU: &str = "\nLibrary Book System\n\
                               1. Borrow a book\n\
                               2. Return a book\n\
                               3. Display available books\n\
                               4. Exit\n\
                               Enter your choice: ";

#[derive(Debug, PartialEq)]
pub(crate) enum MenuChoice {
    Borrow,
    Return,
    ListAvailable,
    Exit,
}

impl MenuChoice {
    pub(crate) fn parse(line: &str) -> Result<MenuChoice, ConsoleError> {
        match line.trim() {
            "1" => Ok(MenuChoice::Borrow),
            "2" => Ok(MenuChoice::Return),
            "3" => Ok(MenuChoice::ListAvailable),
            "4" => Ok(MenuChoice::Exit),
            _ => Err("Invalid choice. Please try again.".to_string()),
        }
    }
}

pub(crate) fn add_item(svc: &mut dyn CatalogService, req: AddItemCommandRequest) -> Result<String, ConsoleError> {
    let res = AddItemCommand::new(svc).execute(req)?;
    Ok(format!("Added '{}' to the catalog.", res.item.title))
}

pub(crate) fn borrow_item(svc: &mut dyn CatalogService, title: &str) -> Result<String, ConsoleError> {
    let res = BorrowItemCommand::new(svc).execute(BorrowItemCommandRequest::new(title))?;
    Ok(format!("You have successfully borrowed '{}'.", res.item.title))
}

pub(crate) fn return_item(svc: &mut dyn CatalogService, title: &str) -> Result<String, ConsoleError> {
    let res = ReturnItemCommand::new(svc).execute(ReturnItemCommandRequest::new(title))?;
    Ok(format!("You have successfully returned '{}'.", res.item.title))
}

pub(crate) fn list_available(svc: &mut dyn CatalogService) -> Result<String, ConsoleError> {
    let res = ListAvailableCommand::new(svc).execute(ListAvailableCommandRequest::new())?;
    let mut out = String::from("\nAvailable Books:");
    for item in &res.items {
        out.push('\n');
        out.push_str(item.to_string().as_str());
    }
    Ok(out)
}
