use std::collections::HashMap;
use tracing::debug;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;
use crate::gateway::events::EventPublisher;
use crate::items::domain::Item;
use crate::items::domain::model::ItemEntity;
use crate::items::dto::ItemDto;
use crate::items::repository::ItemRepository;

pub(crate) struct CatalogServiceImpl {
    branch_id: String,
    item_repository: Box<dyn ItemRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(config: &Configuration, item_repository: Box<dyn ItemRepository>,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            item_repository,
            events_publisher,
        }
    }

    fn metadata(&self) -> HashMap<String, String> {
        HashMap::from([("branch_id".to_string(), self.branch_id.to_string())])
    }
}

impl CatalogService for CatalogServiceImpl {
    fn add_item(&mut self, item: &ItemDto) -> LibraryResult<ItemDto> {
        let _ = self.item_repository.create(&ItemEntity::from(item))?;
        debug!("added item {} titled '{}'", item.item_id, item.title);
        self.events_publisher.publish(&DomainEvent::added(
            "item_added", "catalog", item.item_id.as_str(), &self.metadata(), item)?)?;
        Ok(item.clone())
    }

    fn borrow_by_title(&mut self, title: &str) -> LibraryResult<ItemDto> {
        let mut entity = self.item_repository.find_first_by_title(title)?;
        entity.borrow()?;
        let _ = self.item_repository.update(&entity)?;
        let dto = ItemDto::from(&entity);
        self.events_publisher.publish(&DomainEvent::borrowed(
            "item_borrowed", "catalog", entity.item_id.as_str(), &self.metadata(), &dto)?)?;
        Ok(dto)
    }

    fn return_by_title(&mut self, title: &str) -> LibraryResult<ItemDto> {
        let mut entity = self.item_repository.find_first_by_title(title)?;
        entity.returned()?;
        let _ = self.item_repository.update(&entity)?;
        let dto = ItemDto::from(&entity);
        self.events_publisher.publish(&DomainEvent::returned(
            "item_returned", "catalog", entity.item_id.as_str(), &self.metadata(), &dto)?)?;
        Ok(dto)
    }

    // re-scans the whole catalog on every call, insertion order preserved
    fn list_available(&self) -> LibraryResult<Vec<ItemDto>> {
        let res = self.item_repository.query(&HashMap::new())?;
        Ok(res.iter().map(ItemDto::from).filter(|i| i.is_available()).collect())
    }
}

impl From<&ItemEntity> for ItemDto {
    fn from(other: &ItemEntity) -> Self {
        Self {
            item_id: other.item_id.to_string(),
            version: other.version,
            title: other.title.to_string(),
            author: other.author.to_string(),
            isbn: other.isbn.to_string(),
            status: other.status,
            kind: other.kind.clone(),
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

impl From<&ItemDto> for ItemEntity {
    fn from(other: &ItemDto) -> Self {
        Self {
            item_id: other.item_id.to_string(),
            version: other.version,
            title: other.title.to_string(),
            author: other.author.to_string(),
            isbn: other.isbn.to_string(),
            status: other.status,
            kind: other.kind.clone(),
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}
