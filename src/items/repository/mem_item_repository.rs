use std::collections::HashMap;
use crate::core::library::{ItemStatus, LibraryError, LibraryResult};
use crate::core::repository::Repository;
use crate::items::domain::model::ItemEntity;
use crate::items::repository::ItemRepository;

// MemItemRepository keeps all items in a Vec so that insertion order is the
// scan order; every lookup is a linear scan (no index at this scale).
pub(crate) struct MemItemRepository {
    items: Vec<ItemEntity>,
}

impl MemItemRepository {
    pub(crate) fn new() -> Self {
        Self {
            items: Vec::new(),
        }
    }

    fn matches(entity: &ItemEntity, predicate: &HashMap<String, String>) -> bool {
        predicate.iter().all(|(field, value)| match field.as_str() {
            "title" => entity.title == *value,
            "isbn" => entity.isbn == *value,
            "status" => entity.status == ItemStatus::from(value.to_string()),
            _ => false,
        })
    }
}

impl Repository<ItemEntity> for MemItemRepository {
    fn create(&mut self, entity: &ItemEntity) -> LibraryResult<usize> {
        self.items.push(entity.clone());
        Ok(1)
    }

    fn update(&mut self, entity: &ItemEntity) -> LibraryResult<usize> {
        match self.items.iter().position(|i| i.item_id == entity.item_id) {
            Some(index) => {
                let mut updated = entity.clone();
                updated.version = self.items[index].version + 1;
                self.items[index] = updated;
                Ok(1)
            }
            None => {
                Err(LibraryError::not_found(
                    format!("item with id {} not found", entity.item_id).as_str()))
            }
        }
    }

    fn get(&self, id: &str) -> LibraryResult<ItemEntity> {
        self.items.iter().find(|i| i.item_id == id).cloned()
            .ok_or_else(|| LibraryError::not_found(
                format!("item with id {} not found", id).as_str()))
    }

    fn query(&self, predicate: &HashMap<String, String>) -> LibraryResult<Vec<ItemEntity>> {
        Ok(self.items.iter()
            .filter(|i| Self::matches(i, predicate))
            .cloned()
            .collect())
    }
}

impl ItemRepository for MemItemRepository {
    fn find_first_by_title(&self, title: &str) -> LibraryResult<ItemEntity> {
        self.items.iter().find(|i| i.title == title).cloned()
            .ok_or_else(|| LibraryError::not_found(
                format!("Book '{}' not found in the library.", title).as_str()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::library::{ItemStatus, LibraryError};
    use crate::core::repository::Repository;
    use crate::items::domain::model::{ItemEntity, ItemKind};
    use crate::items::repository::ItemRepository;
    use crate::items::repository::mem_item_repository::MemItemRepository;

    #[test]
    fn test_should_create_and_get() {
        let mut repo = MemItemRepository::new();
        let item = ItemEntity::new("1984", "George Orwell", "1234567890", ItemKind::Book);
        assert_eq!(1, repo.create(&item).expect("should create"));

        let loaded = repo.get(item.item_id.as_str()).expect("should get");
        assert_eq!(item, loaded);
    }

    #[test]
    fn test_should_update_in_place_with_version_bump() {
        let mut repo = MemItemRepository::new();
        let first = ItemEntity::new("first", "a", "1", ItemKind::Book);
        let second = ItemEntity::new("second", "b", "2", ItemKind::Book);
        let _ = repo.create(&first).expect("should create");
        let _ = repo.create(&second).expect("should create");

        let mut changed = first.clone();
        changed.status = ItemStatus::Borrowed;
        let _ = repo.update(&changed).expect("should update");

        let all = repo.query(&HashMap::new()).expect("should query");
        assert_eq!(2, all.len());
        assert_eq!("first", all[0].title.as_str());
        assert_eq!(ItemStatus::Borrowed, all[0].status);
        assert_eq!(1, all[0].version);
    }

    #[test]
    fn test_should_fail_update_unknown_id() {
        let mut repo = MemItemRepository::new();
        let item = ItemEntity::new("1984", "George Orwell", "1234567890", ItemKind::Book);
        let err = repo.update(&item).expect_err("update should fail");
        assert!(matches!(err, LibraryError::NotFound { message: _ }));
    }

    #[test]
    fn test_should_query_in_insertion_order() {
        let mut repo = MemItemRepository::new();
        for title in ["a", "b", "c"] {
            let _ = repo.create(&ItemEntity::new(title, "author", "isbn", ItemKind::Book))
                .expect("should create");
        }
        let all = repo.query(&HashMap::new()).expect("should query");
        let titles: Vec<&str> = all.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(vec!["a", "b", "c"], titles);
    }

    #[test]
    fn test_should_query_by_status() {
        let mut repo = MemItemRepository::new();
        let mut borrowed = ItemEntity::new("gone", "author", "isbn", ItemKind::Book);
        borrowed.status = ItemStatus::Borrowed;
        let _ = repo.create(&borrowed).expect("should create");
        let _ = repo.create(&ItemEntity::new("here", "author", "isbn", ItemKind::Book))
            .expect("should create");

        let available = repo.query(
            &HashMap::from([("status".to_string(), "Available".to_string())])).expect("should query");
        assert_eq!(1, available.len());
        assert_eq!("here", available[0].title.as_str());
    }

    #[test]
    fn test_should_find_first_duplicate_title() {
        let mut repo = MemItemRepository::new();
        let first = ItemEntity::new("Dup", "a", "1", ItemKind::Book);
        let second = ItemEntity::new("Dup", "b", "2", ItemKind::Book);
        let _ = repo.create(&first).expect("should create");
        let _ = repo.create(&second).expect("should create");

        let found = repo.find_first_by_title("Dup").expect("should find");
        assert_eq!(first.item_id, found.item_id);
    }

    #[test]
    fn test_should_not_find_missing_title() {
        let repo = MemItemRepository::new();
        let err = repo.find_first_by_title("X").expect_err("should not find");
        assert!(matches!(err, LibraryError::NotFound { message: _ }));
    }
}
