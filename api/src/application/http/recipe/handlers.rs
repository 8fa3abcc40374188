pub mod generate_recipes;
pub mod upload_fridge_photo;
