use serde_json::json;

/// Returns the JSON schema the model must follow when proposing recipes
pub fn get_recipe_schema() -> serde_json::Value {
    json!({
        "type": "array",
        "minItems": 4,
        "maxItems": 6,
        "items": {
            "type": "object",
            "properties": {
                "id": { "type": "string" },
                "title": { "type": "string" },
                "description": { "type": "string" },
                "difficulty": {
                    "type": "string",
                    "enum": ["Easy", "Medium", "Hard"]
                },
                "prep_time": { "type": "string" },
                "calories": { "type": "integer" },
                "cuisine": { "type": "string" },
                "youtube_query": { "type": "string" },
                "chefs_secret": { "type": "string" },
                "beverage_pairing": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "description": { "type": "string" }
                    },
                    "required": ["name", "description"]
                },
                "dietary_tags": {
                    "type": "array",
                    "items": { "type": "string" }
                },
                "ingredients": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "name": { "type": "string" },
                            "quantity": { "type": "string" },
                            "is_available": { "type": "boolean" }
                        },
                        "required": ["name", "quantity", "is_available"]
                    }
                },
                "instructions": {
                    "type": "array",
                    "items": { "type": "string" }
                }
            },
            "required": [
                "title", "description", "difficulty", "prep_time", "calories",
                "ingredients", "instructions", "dietary_tags",
                "beverage_pairing", "chefs_secret"
            ]
        }
    })
}
