pub mod mem_item_repository;

use crate::core::library::LibraryResult;
use crate::core::repository::Repository;
use crate::items::domain::model::ItemEntity;

pub(crate) trait ItemRepository: Repository<ItemEntity> {
    // first insertion-order match wins; later duplicates are shadowed
    fn find_first_by_title(&self, title: &str) -> LibraryResult<ItemEntity>;
}
