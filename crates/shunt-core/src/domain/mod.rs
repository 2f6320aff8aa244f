//! Domain model (dispatch spec, mappings, outcomes, errors).

pub mod errors;
pub mod mapping;
pub mod outcome;
pub mod spec;

pub use self::errors::{DispatchError, ErrorKind};
pub use self::mapping::ActionMapping;
pub use self::outcome::{Outcome, OutcomeKind};
pub use self::spec::{DEFAULT_METHOD_KEY, DispatchEntry, DispatchSpec, IMAGE_BUTTON_SUFFIX};
