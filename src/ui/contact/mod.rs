//! Contact form state, intents, and reducer.

mod intent;
mod reducer;
mod state;

pub use intent::ContactIntent;
pub use reducer::ContactReducer;
pub use state::{ContactField, ContactFormState};
