use crate::core::domain::Identifiable;
use crate::core::library::ItemStatus;

pub mod model;

pub(crate) trait Item: Identifiable {
    fn title(&self) -> &str;
    fn status(&self) -> ItemStatus;

    fn is_available(&self) -> bool {
        self.status() == ItemStatus::Available
    }
}
