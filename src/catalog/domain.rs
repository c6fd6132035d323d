pub mod service;

use crate::core::library::LibraryResult;
use crate::items::dto::ItemDto;

pub(crate) trait CatalogService: Sync + Send {
    fn add_item(&mut self, item: &ItemDto) -> LibraryResult<ItemDto>;
    fn borrow_by_title(&mut self, title: &str) -> LibraryResult<ItemDto>;
    fn return_by_title(&mut self, title: &str) -> LibraryResult<ItemDto>;
    fn list_available(&self) -> LibraryResult<Vec<ItemDto>>;
}
