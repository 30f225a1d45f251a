//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::NetworkName;
use crate::planner::{Directions, Itinerary, RouteSegment, format_minutes};

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page listing stored networks.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub networks: Vec<String>,
}

/// Directions for one stored network.
#[derive(Template)]
#[template(path = "route.html")]
pub struct RouteTemplate {
    pub route: RouteView,
}

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Planned route view model.
#[derive(Debug, Clone)]
pub struct RouteView {
    pub network: String,
    pub rounded_minutes: i64,
    pub steps: Vec<StepView>,
    /// Plain-text directions, as the command line prints them
    pub directions: String,
}

impl RouteView {
    /// Create from a planned itinerary.
    pub fn from_itinerary(network: &NetworkName, itinerary: &Itinerary) -> Self {
        Self {
            network: network.to_string(),
            rounded_minutes: itinerary.rounded_minutes(),
            steps: itinerary
                .segments()
                .iter()
                .enumerate()
                .map(|(i, s)| StepView::from_segment(i + 1, s))
                .collect(),
            directions: Directions(itinerary).to_string(),
        }
    }

    /// Whether there is nothing to do: already there, or no way there.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// One numbered step of a route.
#[derive(Debug, Clone)]
pub struct StepView {
    pub number: usize,
    pub from: String,
    pub to: String,
    /// Minutes, two decimal places
    pub duration: String,
    pub is_cart: bool,
    pub line: Option<String>,
}

impl StepView {
    /// Create from a planned hop.
    pub fn from_segment(number: usize, segment: &RouteSegment) -> Self {
        Self {
            number,
            from: segment.from_label.clone(),
            to: segment.to_label.clone(),
            duration: format_minutes(segment.duration_minutes),
            is_cart: segment.is_transit(),
            line: segment.line.clone(),
        }
    }

    /// Verb for the step.
    pub fn action(&self) -> &'static str {
        if self.is_cart { "Ride the cart" } else { "Walk" }
    }
}
