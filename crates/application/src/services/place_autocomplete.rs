//! Place autocomplete bound to one location input
//!
//! Suggestions come from a [`PlaceSuggestionPort`]. Selecting one resolves the
//! place and notifies every `on_place_selected` handler; writing the address
//! back into the input is one such handler ([`fill_input_with_address`]).

use std::fmt;
use std::sync::Arc;

use domain::BoundingBox;
use parking_lot::RwLock;
use tracing::{debug, instrument, warn};

use super::text_input::{InputField, TextInput};
use crate::error::ApplicationError;
use crate::ports::{PlaceDetails, PlaceSuggestion, PlaceSuggestionPort, SuggestionQuery};

type PlaceSelectedHandler = Box<dyn Fn(&PlaceDetails) + Send + Sync>;

/// Geographic constraints applied to suggestions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutocompleteOptions {
    pub bounds: BoundingBox,
    /// `false`: outside results allowed but deprioritized
    pub strict_bounds: bool,
}

impl Default for AutocompleteOptions {
    fn default() -> Self {
        Self {
            bounds: BoundingBox::dehradun(),
            strict_bounds: false,
        }
    }
}

/// Suggestion behaviour attached to one input
pub struct PlaceAutocomplete {
    field: InputField,
    options: AutocompleteOptions,
    places: Arc<dyn PlaceSuggestionPort>,
    handlers: RwLock<Vec<PlaceSelectedHandler>>,
}

impl fmt::Debug for PlaceAutocomplete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaceAutocomplete")
            .field("field", &self.field)
            .field("options", &self.options)
            .field("handlers", &self.handlers.read().len())
            .finish_non_exhaustive()
    }
}

impl PlaceAutocomplete {
    /// Attach suggestion behaviour to `input`
    pub fn bind(
        places: Arc<dyn PlaceSuggestionPort>,
        input: &TextInput,
        options: AutocompleteOptions,
    ) -> Self {
        debug!(field = %input.field(), strict = options.strict_bounds, "Autocomplete bound");
        Self {
            field: input.field(),
            options,
            places,
            handlers: RwLock::new(Vec::new()),
        }
    }

    /// Input this binding belongs to
    #[must_use]
    pub const fn field(&self) -> InputField {
        self.field
    }

    /// Register a handler invoked with every selected place
    pub fn on_place_selected<F>(&self, handler: F)
    where
        F: Fn(&PlaceDetails) + Send + Sync + 'static,
    {
        self.handlers.write().push(Box::new(handler));
    }

    /// Drop every registered handler
    pub fn unbind(&self) {
        self.handlers.write().clear();
    }

    /// Predictions for the typed text; blank text yields none without a lookup
    #[instrument(skip(self), fields(field = %self.field))]
    pub async fn suggest(&self, text: &str) -> Result<Vec<PlaceSuggestion>, ApplicationError> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let query = SuggestionQuery {
            input: text.to_string(),
            bounds: self.options.bounds,
            strict_bounds: self.options.strict_bounds,
        };

        self.places.suggest(&query).await.inspect_err(|e| {
            warn!(error = %e, "Place suggestions failed");
        })
    }

    /// Resolve a selected suggestion and emit the place-selected event
    #[instrument(skip(self), fields(field = %self.field))]
    pub async fn select(&self, place_id: &str) -> Result<PlaceDetails, ApplicationError> {
        let place = self.places.place_details(place_id).await.inspect_err(|e| {
            warn!(error = %e, "Place details lookup failed");
        })?;

        for handler in self.handlers.read().iter() {
            handler(&place);
        }

        debug!(has_address = place.formatted_address.is_some(), "Place selected");
        Ok(place)
    }
}

/// Handler overwriting `input` with the selected place's formatted address
///
/// Places without an address leave the input untouched.
pub fn fill_input_with_address(input: Arc<TextInput>) -> impl Fn(&PlaceDetails) + Send + Sync {
    move |place| {
        if let Some(address) = &place.formatted_address {
            input.set(address.as_str());
        }
    }
}
