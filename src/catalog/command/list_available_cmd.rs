use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::items::dto::ItemDto;

pub(crate) struct ListAvailableCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> ListAvailableCommand<'a> {
    pub(crate) fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListAvailableCommandRequest {}

impl ListAvailableCommandRequest {
    pub fn new() -> Self {
        Self {}
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ListAvailableCommandResponse {
    pub items: Vec<ItemDto>,
}

impl ListAvailableCommandResponse {
    pub fn new(items: Vec<ItemDto>) -> Self {
        Self {
            items,
        }
    }
}

impl<'a> Command<ListAvailableCommandRequest, ListAvailableCommandResponse> for ListAvailableCommand<'a> {
    fn execute(&mut self, _req: ListAvailableCommandRequest) -> Result<ListAvailableCommandResponse, CommandError> {
        self.catalog_service.list_available()
            .map_err(CommandError::from).map(ListAvailableCommandResponse::new)
    }
}
