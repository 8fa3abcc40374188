pub mod add_missing_items;
pub mod get_shopping_list;
pub mod remove_item;
pub mod save_shopping_list;
