use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::items::dto::ItemDto;

pub(crate) struct ReturnItemCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> ReturnItemCommand<'a> {
    pub(crate) fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReturnItemCommandRequest {
    pub(crate) title: String,
}

impl ReturnItemCommandRequest {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ReturnItemCommandResponse {
    pub item: ItemDto,
}

impl ReturnItemCommandResponse {
    pub fn new(item: ItemDto) -> Self {
        Self {
            item,
        }
    }
}

impl<'a> Command<ReturnItemCommandRequest, ReturnItemCommandResponse> for ReturnItemCommand<'a> {
    fn execute(&mut self, req: ReturnItemCommandRequest) -> Result<ReturnItemCommandResponse, CommandError> {
        self.catalog_service.return_by_title(req.title.as_str())
            .map_err(CommandError::from).map(ReturnItemCommandResponse::new)
    }
}
