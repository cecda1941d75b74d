//! Message processing: update loop plus action dispatch

use gpanel_gateway::Gateway;

use crate::actions::{handle_action, ActionContext};
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function, following chained
/// messages and dispatching every action in order.
pub fn process_message<G: Gateway + Sync + 'static>(
    state: &mut AppState,
    message: Message,
    ctx: &mut ActionContext<G>,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);
        for action in result.actions {
            handle_action(action, ctx);
        }
        msg = result.message;
    }
}
