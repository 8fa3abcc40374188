use utoipa::OpenApi;

use super::config::__path_get_config;
use crate::application::http::{
    admin::router::AdminApiDoc,
    authentication::router::AuthenticationApiDoc,
    booking::router::BookingApiDoc,
    chat::router::ChatApiDoc,
    chef::router::{ChefApiDoc, ChefApplicationApiDoc},
    feedback::router::FeedbackApiDoc,
    health::router::HealthApiDoc,
    preferences::router::PreferencesApiDoc,
    recipe::router::RecipeApiDoc,
    shopping_list::router::ShoppingListApiDoc,
    sync::router::SyncApiDoc,
    user::router::UserApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "CulinaryAI API"
    ),
    paths(get_config),
    nest(
        (path = "/auth", api = AuthenticationApiDoc),
        (path = "/recipes", api = RecipeApiDoc),
        (path = "/chat", api = ChatApiDoc),
        (path = "/me", api = UserApiDoc),
        (path = "/me", api = PreferencesApiDoc),
        (path = "/shopping-list", api = ShoppingListApiDoc),
        (path = "/chefs", api = ChefApiDoc),
        (path = "/chef-applications", api = ChefApplicationApiDoc),
        (path = "/bookings", api = BookingApiDoc),
        (path = "/admin", api = AdminApiDoc),
        (path = "/feedback", api = FeedbackApiDoc),
        (path = "/sync", api = SyncApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_paths_are_published() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        assert!(paths.contains_key("/config"));
        assert!(paths.contains_key("/auth/signup"));
        assert!(paths.contains_key("/me/preferences"));
        assert!(paths.contains_key("/chef-applications/{application_id}/approve"));
        assert!(paths.contains_key("/sync/{topic}"));
        assert!(paths.contains_key("/health/ready"));
    }
}
