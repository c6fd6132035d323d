use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::items::domain::model::ItemKind;
use crate::items::dto::ItemDto;

pub(crate) struct AddItemCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> AddItemCommand<'a> {
    pub(crate) fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddItemCommandRequest {
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) isbn: String,
    pub(crate) kind: ItemKind,
}

impl AddItemCommandRequest {
    pub fn new(title: &str, author: &str, isbn: &str, kind: ItemKind) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            kind,
        }
    }

    pub fn build_item(&self) -> ItemDto {
        ItemDto::new(self.title.as_str(), self.author.as_str(), self.isbn.as_str(), self.kind.clone())
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AddItemCommandResponse {
    pub item: ItemDto,
}

impl AddItemCommandResponse {
    pub fn new(item: ItemDto) -> Self {
        Self {
            item,
        }
    }
}

impl<'a> Command<AddItemCommandRequest, AddItemCommandResponse> for AddItemCommand<'a> {
    fn execute(&mut self, req: AddItemCommandRequest) -> Result<AddItemCommandResponse, CommandError> {
        let item = req.build_item();
        self.catalog_service.add_item(&item).map_err(CommandError::from).map(|_| AddItemCommandResponse::new(item))
    }
}
