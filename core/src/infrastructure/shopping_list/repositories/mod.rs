pub mod shopping_list_repository;
