use chrono::{NaiveDateTime, Utc};
use uuid::Uuid;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::{ItemStatus, LibraryError, LibraryResult};
use crate::items::domain::Item;
use crate::utils::date::serializer;

// ItemKind captures the presentation of a catalog entry; variant fields are
// free text carried through to the rendered summary without validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) enum ItemKind {
    Book,
    EBook {
        file_size: String,
    },
    AudioBook {
        duration_mins: i64,
    },
}

// ItemEntity abstracts one book-like unit in the catalog. The title is the
// lookup key and is immutable after construction; duplicates are allowed and
// the first inserted one shadows the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct ItemEntity {
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

impl ItemEntity {
    pub fn new(title: &str, author: &str, isbn: &str, kind: ItemKind) -> Self {
        Self {
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

    pub fn borrow(&mut self) -> LibraryResult<()> {
        if self.status == ItemStatus::Borrowed {
            return Err(LibraryError::already_borrowed(
                format!("The book '{}' is already borrowed.", self.title).as_str()));
        }
        self.status = ItemStatus::Borrowed;
        self.updated_at = Utc::now().naive_utc();
        Ok(())
    }

    pub fn returned(&mut self) -> LibraryResult<()> {
        if self.status == ItemStatus::Available {
            return Err(LibraryError::not_borrowed(
                format!("The book '{}' was not borrowed.", self.title).as_str()));
        }
        self.status = ItemStatus::Available;
        self.updated_at = Utc::now().naive_utc();
        Ok(())
    }
}

impl Identifiable for ItemEntity {
    fn id(&self) -> String {
        self.item_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Item for ItemEntity {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn status(&self) -> ItemStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::{ItemStatus, LibraryError};
    use crate::items::domain::Item;
    use crate::items::domain::model::{ItemEntity, ItemKind};

    #[test]
    fn test_should_build_available_item() {
        let item = ItemEntity::new("1984", "George Orwell", "1234567890", ItemKind::Book);
        assert_eq!("1984", item.title.as_str());
        assert_eq!("George Orwell", item.author.as_str());
        assert_eq!(ItemStatus::Available, item.status);
        assert!(item.is_available());
    }

    #[test]
    fn test_should_borrow_once() {
        let mut item = ItemEntity::new("1984", "George Orwell", "1234567890", ItemKind::Book);
        item.borrow().expect("should borrow");
        assert_eq!(ItemStatus::Borrowed, item.status);

        let err = item.borrow().expect_err("second borrow should fail");
        assert!(matches!(err, LibraryError::AlreadyBorrowed { message: _ }));
        assert_eq!(ItemStatus::Borrowed, item.status);
    }

    #[test]
    fn test_should_return_only_borrowed() {
        let mut item = ItemEntity::new("1984", "George Orwell", "1234567890", ItemKind::Book);
        item.borrow().expect("should borrow");
        item.returned().expect("should return");
        assert_eq!(ItemStatus::Available, item.status);

        let err = item.returned().expect_err("second return should fail");
        assert!(matches!(err, LibraryError::NotBorrowed { message: _ }));
        assert_eq!(ItemStatus::Available, item.status);
    }

    #[test]
    fn test_should_accept_empty_fields() {
        let item = ItemEntity::new("", "", "", ItemKind::EBook { file_size: "".to_string() });
        assert_eq!("", item.title.as_str());
        assert!(item.is_available());
    }
}
