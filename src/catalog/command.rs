pub mod add_item_cmd;
pub mod borrow_item_cmd;
pub mod return_item_cmd;
pub mod list_available_cmd;
