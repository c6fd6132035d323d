use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::items::dto::ItemDto;

pub(crate) struct BorrowItemCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> BorrowItemCommand<'a> {
    pub(crate) fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct BorrowItemCommandRequest {
    pub(crate) title: String,
}

impl BorrowItemCommandRequest {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct BorrowItemCommandResponse {
    pub item: ItemDto,
}

impl BorrowItemCommandResponse {
    pub fn new(item: ItemDto) -> Self {
        Self {
            item,
        }
    }
}

impl<'a> Command<BorrowItemCommandRequest, BorrowItemCommandResponse> for BorrowItemCommand<'a> {
    fn execute(&mut self, req: BorrowItemCommandRequest) -> Result<BorrowItemCommandResponse, CommandError> {
        self.catalog_service.borrow_by_title(req.title.as_str())
            .map_err(CommandError::from).map(BorrowItemCommandResponse::new)
    }
}
