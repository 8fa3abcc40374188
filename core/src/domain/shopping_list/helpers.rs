use crate::domain::{recipe::entities::Ingredient, shopping_list::entities::DEFAULT_QUANTITY};

/// Appends every name not already on the list, in order, as an item still to buy.
///
/// Matching is exact and case-sensitive. Existing entries keep their position
/// and values, and a name repeated in `names` is appended once.
pub fn merge_missing(list: &[Ingredient], names: &[String]) -> Vec<Ingredient> {
    let mut merged = list.to_vec();

    for name in names {
        if merged.iter().any(|item| &item.name == name) {
            continue;
        }
        merged.push(Ingredient {
            name: name.clone(),
            quantity: DEFAULT_QUANTITY.to_string(),
            is_available: false,
        });
    }

    merged
}

/// Drops the entry at `index`; an index past the end leaves the list untouched.
pub fn remove_item(list: &[Ingredient], index: usize) -> Vec<Ingredient> {
    list.iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, item)| item.clone())
        .collect()
}
