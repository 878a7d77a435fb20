use crate::{AppState, Effect, FetchState, Msg, MIN_QUERY_LEN};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::QueryChanged(query) => {
            if !state.set_query(query) {
                return (state, Vec::new());
            }

            let mut effects = Vec::with_capacity(2);
            if let Some(request_id) = state.in_flight() {
                effects.push(Effect::CancelSearch { request_id });
            }

            if state.query().chars().count() < MIN_QUERY_LEN {
                state.set_fetch(FetchState::Idle);
            } else {
                let request_id = state.allocate_request();
                state.set_fetch(FetchState::Loading { request_id });
                effects.push(Effect::StartSearch {
                    request_id,
                    query: state.query().to_owned(),
                });
            }
            effects
        }
        Msg::SearchSettled {
            request_id,
            outcome,
        } => {
            // A settle for anything but the current request belongs to a superseded query.
            if state.in_flight() != Some(request_id) {
                return (state, Vec::new());
            }
            let next = match outcome {
                Ok(results) => FetchState::Success(results),
                Err(failure) => FetchState::Failed(failure.message().to_owned()),
            };
            state.set_fetch(next);
            Vec::new()
        }
        Msg::MovieSelected(id) => {
            state.toggle_selection(id);
            Vec::new()
        }
        Msg::HighlightedSelected => {
            if let Some(id) = state.highlighted_id() {
                state.toggle_selection(id);
            }
            Vec::new()
        }
        Msg::CursorMoved(delta) => {
            state.move_cursor(delta);
            Vec::new()
        }
        Msg::DetailsClosed => {
            state.clear_selection();
            Vec::new()
        }
        Msg::WatchedLoaded(watched) => {
            state.set_watched(watched);
            Vec::new()
        }
        Msg::PanelToggled(panel) => {
            state.toggle_panel(panel);
            Vec::new()
        }
        Msg::RatingHovered(stars) => {
            state.rating_mut().hover(stars);
            Vec::new()
        }
        Msg::RatingHoverCleared => {
            state.rating_mut().clear_hover();
            Vec::new()
        }
        Msg::RatingCommitted => {
            let rating = state.rating_mut();
            let stars = rating.displayed();
            if stars > 0 {
                rating.rate(stars);
            }
            rating.clear_hover();
            Vec::new()
        }
        Msg::RatingConfigured(rating) => {
            *state.rating_mut() = rating;
            Vec::new()
        }
    };

    (state, effects)
}
