use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;
use crate::gateway::GatewayPublisherVia;

pub trait Repository<Entity>: Sync + Send {
    // create an entity
    fn create(&mut self, entity: &Entity) -> LibraryResult<usize>;

    // updates an entity in place, keeping its position
    fn update(&mut self, entity: &Entity) -> LibraryResult<usize>;

    // get an entity by id
    fn get(&self, id: &str) -> LibraryResult<Entity>;

    // find entities matching predicate fields, in insertion order
    fn query(&self, predicate: &HashMap<String, String>) -> LibraryResult<Vec<Entity>>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub(crate) enum RepositoryStore {
    InMemory,
}

impl RepositoryStore {
    pub fn gateway_publisher(&self) -> GatewayPublisherVia {
        match self {
            RepositoryStore::InMemory => { GatewayPublisherVia::Log }
        }
    }
}
