use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;

pub(crate) trait EventPublisher: Sync + Send {
    fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError>;
}
