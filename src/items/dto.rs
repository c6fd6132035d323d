use std::fmt;
use std::fmt::{Display, Formatter};
use chrono::{NaiveDateTime, Utc};
use uuid::Uuid;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::ItemStatus;
use crate::items::domain::Item;
use crate::items::domain::model::ItemKind;
use crate::utils::date::serializer;

// ItemDto is a data transfer object for the catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct ItemDto {
    pub item_id: String,
    pub version: i64,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub status: ItemStatus,
    pub kind: ItemKind,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl ItemDto {
    pub fn new(title: &str, author: &str, isbn: &str, kind: ItemKind) -> ItemDto {
        ItemDto {
            item_id: Uuid::new_v4().to_string(),
            version: 0,
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            status: ItemStatus::Available,
            kind,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}

// the human-readable catalog line, e.g.
// Title: 1984, Author: George Orwell, ISBN: 1234567890 (Available)
impl Display for ItemDto {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Title: {}, Author: {}, ISBN: {} ({})",
               self.title, self.author, self.isbn, self.status)?;
        match &self.kind {
            ItemKind::Book => Ok(()),
            ItemKind::EBook { file_size } => {
                write!(f, " (EBook, File Size: {})", file_size)
            }
            ItemKind::AudioBook { duration_mins } => {
                write!(f, " (AudioBook, Duration: {} mins)", duration_mins)
            }
        }
    }
}

impl Identifiable for ItemDto {
    fn id(&self) -> String {
        self.item_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Item for ItemDto {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn status(&self) -> ItemStatus {
        self.status
    }
}
