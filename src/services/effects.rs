use crate::{
    app_state::AppState,
    domain::{session::Effect, Actor, Shift, ToggleOutcome},
};

use super::shift_requests::{add_detailed_shift, toggle_shift};

/// What applying a single session effect resulted in.
#[derive(Debug, Clone, PartialEq)]
pub enum EffectOutcome {
    Toggled(ToggleOutcome),
    Added(Shift),
    Alert(String),
}

/// Applies reducer effects in order. A failed effect becomes an alert and
/// does not stop the ones after it.
#[tracing::instrument(name = "Applying session effects", skip_all)]
pub async fn apply_effects(
    state: &AppState,
    actor: &Actor,
    effects: Vec<Effect>,
) -> Vec<EffectOutcome> {
    let mut outcomes = Vec::with_capacity(effects.len());

    for effect in effects {
        let outcome = match effect {
            Effect::ToggleShift(key) => toggle_shift(state, actor, key)
                .await
                .map(EffectOutcome::Toggled),
            Effect::AddShift(request) => add_detailed_shift(state, actor, request)
                .await
                .map(EffectOutcome::Added),
            Effect::Alert(message) => Ok(EffectOutcome::Alert(message)),
        };

        outcomes.push(outcome.unwrap_or_else(|e| {
            tracing::debug!(error = %e, "session effect failed");
            EffectOutcome::Alert(e.user_message())
        }));
    }

    outcomes
}
