use std::convert::Infallible;

use axum::{
    extract::{Path, State},
    response::sse::{Event, KeepAlive, Sse},
};
use culinary_core::domain::sync::{
    entities::{Snapshot, SyncTopic},
    ports::SyncService,
};
use futures::{Stream, StreamExt};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        server::{api_entities::api_error::ApiError, app_state::AppState},
        sync::feed::snapshot_feed,
    },
};

fn to_event(topic: SyncTopic, snapshot: &Snapshot) -> Event {
    Event::default()
        .event(topic.as_str())
        .json_data(snapshot)
        .unwrap_or_else(|e| {
            tracing::error!("Failed to serialize snapshot: {}", e);
            Event::default().event("error").data("snapshot unavailable")
        })
}

#[utoipa::path(
    get,
    path = "/{topic}",
    tag = "sync",
    summary = "Live snapshots of a collection",
    description = "Server-sent events: the full current state now, then again after each relevant change. \
        Topics: chefs, bookings, users, transactions, applications, payouts, settings, shopping-list. \
        The token may be passed as `access_token` query parameter.",
    params(
        ("topic" = String, Path, description = "Topic name"),
    ),
    responses(
        (status = 200, description = "text/event-stream of snapshots", body = Snapshot),
        (status = 403, description = "Topic restricted to admins"),
        (status = 404, description = "Unknown topic")
    )
)]
pub async fn subscribe(
    Path(topic): Path<String>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, ApiError> {
    let topic = SyncTopic::try_from(topic.as_str())
        .map_err(|_| ApiError::NotFound(format!("Unknown topic '{}'", topic)))?;

    // Subscribe before the first read so no change slips in between.
    let receiver = state.service.subscribe();
    let initial = state
        .service
        .snapshot(identity.clone(), topic)
        .await
        .map_err(ApiError::from)?;

    let stream = snapshot_feed(state.service.clone(), identity, topic, initial, receiver)
        .map(move |snapshot| Ok(to_event(topic, &snapshot)));

    Ok(Sse::new(stream).keep_alive(KeepAlive::default()))
}
