//! Page context - owns every component of one route page
//!
//! Replaces the ambient page globals (map, inputs, status elements) with an
//! explicit value created by [`PageContext::initialize`] and released by
//! [`PageContext::teardown`].

use std::fmt;
use std::sync::Arc;

use domain::{BoundingBox, GeoLocation, LocationInput, MapView, RouteResult};
use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, info};

use super::map_surface::MapSurface;
use super::place_autocomplete::{AutocompleteOptions, PlaceAutocomplete, fill_input_with_address};
use super::route_orchestrator::RouteOrchestrator;
use super::text_input::{InputField, TextInput};
use super::ui_state::{UiState, UiStateController};
use crate::error::RouteError;
use crate::ports::{PlaceSuggestionPort, RoutingPort};

/// Startup parameters of a page
#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    /// Element identifier of the map container
    pub map_container: String,
    pub center: GeoLocation,
    pub zoom: u8,
    /// Area place suggestions are biased towards
    pub autocomplete_bounds: BoundingBox,
    pub strict_bounds: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            map_container: "map".to_string(),
            center: GeoLocation::dehradun(),
            zoom: 13,
            autocomplete_bounds: BoundingBox::dehradun(),
            strict_bounds: false,
        }
    }
}

/// Current text of both inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageInputs {
    pub start: LocationInput,
    pub end: LocationInput,
}

/// Everything the page currently displays
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageSnapshot {
    pub inputs: PageInputs,
    pub map: MapView,
    pub ui: UiState,
}

/// One page's components, wired together
pub struct PageContext {
    start: Arc<TextInput>,
    end: Arc<TextInput>,
    map: Arc<MapSurface>,
    ui: Arc<UiStateController>,
    start_autocomplete: PlaceAutocomplete,
    end_autocomplete: PlaceAutocomplete,
    orchestrator: RouteOrchestrator,
}

impl fmt::Debug for PageContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageContext")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("map", &self.map)
            .field("ui", &self.ui)
            .finish_non_exhaustive()
    }
}

impl PageContext {
    /// Create the map, bind autocomplete to both inputs and hide all status
    /// elements
    pub fn initialize(
        config: &PageConfig,
        routing: Arc<dyn RoutingPort>,
        places: Arc<dyn PlaceSuggestionPort>,
    ) -> Self {
        let map = Arc::new(MapSurface::initialize(
            config.map_container.clone(),
            config.center,
            config.zoom,
        ));
        let ui = Arc::new(UiStateController::new());
        let start = Arc::new(TextInput::new(InputField::Start));
        let end = Arc::new(TextInput::new(InputField::End));

        let options = AutocompleteOptions {
            bounds: config.autocomplete_bounds,
            strict_bounds: config.strict_bounds,
        };
        let start_autocomplete = PlaceAutocomplete::bind(Arc::clone(&places), &start, options);
        start_autocomplete.on_place_selected(fill_input_with_address(Arc::clone(&start)));
        let end_autocomplete = PlaceAutocomplete::bind(places, &end, options);
        end_autocomplete.on_place_selected(fill_input_with_address(Arc::clone(&end)));

        let orchestrator = RouteOrchestrator::new(routing, Arc::clone(&map), Arc::clone(&ui));

        info!(container = %config.map_container, "Page initialized");

        Self {
            start,
            end,
            map,
            ui,
            start_autocomplete,
            end_autocomplete,
            orchestrator,
        }
    }

    /// The input for `field`
    #[must_use]
    pub fn input(&self, field: InputField) -> &Arc<TextInput> {
        match field {
            InputField::Start => &self.start,
            InputField::End => &self.end,
        }
    }

    /// The autocomplete binding of `field`
    #[must_use]
    pub fn autocomplete(&self, field: InputField) -> &PlaceAutocomplete {
        match field {
            InputField::Start => &self.start_autocomplete,
            InputField::End => &self.end_autocomplete,
        }
    }

    #[must_use]
    pub fn map(&self) -> &MapSurface {
        &self.map
    }

    #[must_use]
    pub fn ui(&self) -> &UiStateController {
        &self.ui
    }

    /// Route between the inputs' current texts (the "calculate" action)
    pub async fn calculate_route(&self) -> Result<RouteResult, RouteError> {
        let start = self.start.value();
        let end = self.end.value();
        self.orchestrator.calculate_route(&start, &end).await
    }

    /// Current page state
    #[must_use]
    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            inputs: PageInputs {
                start: self.start.value(),
                end: self.end.value(),
            },
            map: self.map.snapshot(),
            ui: self.ui.snapshot(),
        }
    }

    /// Change notifications for all page components
    #[must_use]
    pub fn subscribe(&self) -> PageSubscription {
        PageSubscription {
            start: self.start.subscribe(),
            end: self.end.subscribe(),
            map: self.map.subscribe(),
            ui: self.ui.subscribe(),
        }
    }

    /// Detach autocomplete handlers and clear the map
    pub fn teardown(&self) {
        self.start_autocomplete.unbind();
        self.end_autocomplete.unbind();
        self.map.clear_route();
        debug!("Page torn down");
    }
}

/// Receiver of page changes
#[derive(Debug)]
pub struct PageSubscription {
    start: watch::Receiver<LocationInput>,
    end: watch::Receiver<LocationInput>,
    map: watch::Receiver<MapView>,
    ui: watch::Receiver<UiState>,
}

impl PageSubscription {
    /// Wait for the next change; `false` once the page is gone
    pub async fn changed(&mut self) -> bool {
        tokio::select! {
            r = self.start.changed() => r.is_ok(),
            r = self.end.changed() => r.is_ok(),
            r = self.map.changed() => r.is_ok(),
            r = self.ui.changed() => r.is_ok(),
        }
    }

    /// Latest state, marking every component as seen
    pub fn current(&mut self) -> PageSnapshot {
        PageSnapshot {
            inputs: PageInputs {
                start: self.start.borrow_and_update().clone(),
                end: self.end.borrow_and_update().clone(),
            },
            map: self.map.borrow_and_update().clone(),
            ui: self.ui.borrow_and_update().clone(),
        }
    }
}
