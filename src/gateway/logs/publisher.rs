use tracing::info;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// LogPublisher emits domain events to the tracing subscriber; there is no
// remote broker in a single-process catalog.
pub(crate) struct LogPublisher {}

impl LogPublisher {
    pub(crate) fn new() -> Self {
        Self {}
    }
}

impl EventPublisher for LogPublisher {
    fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        let json = serde_json::to_string(event)?;
        info!("published {}", json);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::events::DomainEvent;
    use crate::gateway::events::EventPublisher;
    use crate::gateway::logs::publisher::LogPublisher;

    #[test]
    fn test_should_publish_event() {
        let publisher = LogPublisher::new();
        let event = DomainEvent::added("name", "group", "key", &HashMap::new(), &"data".to_string())
            .expect("build event");
        publisher.publish(&event).expect("should publish");
    }
}
