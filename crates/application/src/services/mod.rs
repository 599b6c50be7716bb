//! Application services - Page components and the route use case

mod map_surface;
mod page_context;
mod place_autocomplete;
mod route_orchestrator;
mod text_input;
mod ui_state;

pub use map_surface::MapSurface;
pub use page_context::{PageConfig, PageContext, PageInputs, PageSnapshot, PageSubscription};
pub use place_autocomplete::{AutocompleteOptions, PlaceAutocomplete, fill_input_with_address};
pub use route_orchestrator::RouteOrchestrator;
pub use text_input::{InputField, TextInput};
pub use ui_state::{LoadingGuard, ResultPanel, UiState, UiStateController};
