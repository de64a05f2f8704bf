use std::sync::atomic::{AtomicUsize, Ordering};

use crate::command::CommandId;

// Single static counter for all drawing commands
static NEXT_COMMAND_ID: AtomicUsize = AtomicUsize::new(1);

pub fn generate_id() -> CommandId {
    CommandId(NEXT_COMMAND_ID.fetch_add(1, Ordering::SeqCst))
}
