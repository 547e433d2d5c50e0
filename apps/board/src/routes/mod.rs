pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::board::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/board/upstream/health",
            get(handlers::handle_upstream_health),
        )
        // Form vocabulary and selector state
        .route("/board/vocab", get(handlers::handle_vocab))
        .route(
            "/board/options/classes",
            get(handlers::handle_class_options),
        )
        .route("/board/options/specs", get(handlers::handle_spec_options))
        .route(
            "/board/selection/class",
            post(handlers::handle_class_change),
        )
        .route("/board/selection/spec", post(handlers::handle_spec_pick))
        .route("/board/chips/toggle", post(handlers::handle_chip_toggle))
        .route("/board/needs/add", post(handlers::handle_need_add))
        .route("/board/needs/remove", post(handlers::handle_need_remove))
        .route(
            "/board/progress/preview",
            post(handlers::handle_progress_preview),
        )
        // Guilds
        .route(
            "/board/guilds",
            get(handlers::handle_search_guilds).post(handlers::handle_create_guild),
        )
        .route(
            "/board/guilds/:id",
            get(handlers::handle_get_guild)
                .put(handlers::handle_update_guild)
                .delete(handlers::handle_delete_guild),
        )
        .route(
            "/board/guilds/:id/applications",
            get(handlers::handle_guild_applications),
        )
        // Players
        .route(
            "/board/players",
            get(handlers::handle_search_players).post(handlers::handle_create_player),
        )
        .route(
            "/board/players/:id",
            get(handlers::handle_get_player)
                .put(handlers::handle_update_player)
                .delete(handlers::handle_delete_player),
        )
        .route("/board/applications", post(handlers::handle_apply))
        .with_state(state)
}
