//! Form cards for adding slots, parking and removing vehicles.
//!
//! - `state.rs` - field values and focus
//! - `intent.rs` - editing and focus actions
//! - `reducer.rs` - pure transitions; submitting is handled by `App`

mod intent;
mod reducer;
mod state;

pub use intent::FormIntent;
pub use reducer::{FormReducer, MAX_SLOT_INPUT_LEN};
pub use state::{Card, Field, FieldKind, FormState};
