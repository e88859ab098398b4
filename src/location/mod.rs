pub mod gate;
pub mod selector;

pub use gate::{confirm_location, needs_selection, stored_location, SelectionError, StoredLocation};
pub use selector::{MunicipalityOption, SelectEvent, SelectorState};
