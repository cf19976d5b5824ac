//! The display-ready itinerary shape.
//!
//! These types are what the presentation layer consumes, so their JSON
//! field names are part of the public contract.

use serde::{Deserialize, Serialize};

use super::{Coordinates, FareBand};

/// Travel advice attached to every itinerary.
pub const TIPS: &str = "Board early during rush hours. Have exact change ready.";

/// How a step is travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TravelMode {
    #[default]
    Walk,
    Transit,
    Drive,
    /// Anything else the provider reports.
    #[serde(rename = "TRAVEL_MODE_UNSPECIFIED", other)]
    Unspecified,
}

impl TravelMode {
    /// Instruction used when the provider gives none.
    pub fn default_instruction(&self) -> &'static str {
        match self {
            TravelMode::Walk => "Walk",
            TravelMode::Transit => "Take public transport",
            TravelMode::Drive => "Drive",
            TravelMode::Unspecified => "Continue",
        }
    }

    pub fn icon(&self) -> StepIcon {
        match self {
            TravelMode::Walk => StepIcon::Walk,
            TravelMode::Transit => StepIcon::Bus,
            TravelMode::Drive => StepIcon::Car,
            TravelMode::Unspecified => StepIcon::ArrowRight,
        }
    }
}

/// Icon tag rendered next to a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepIcon {
    Walk,
    Bus,
    Car,
    ArrowRight,
}

impl StepIcon {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepIcon::Walk => "walk",
            StepIcon::Bus => "bus",
            StepIcon::Car => "car",
            StepIcon::ArrowRight => "arrow-right",
        }
    }
}

/// An operating agency for a transit line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Agency {
    pub name: String,
}

/// A matatu (or other transit) line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitLine {
    /// Display name, e.g. "Route 46"
    pub name: String,

    /// Route code painted on the vehicle, e.g. "46" or "33A"
    pub short_name: String,

    /// Hex colour hint
    pub color: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub agencies: Vec<Agency>,

    /// Vehicle type label, e.g. "Bus"
    pub vehicle: String,
}

/// A boarding or alighting point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitStop {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Coordinates>,
}

impl TransitStop {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: None,
        }
    }
}

/// Transit-only detail for a step.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitDetails {
    pub line: TransitLine,
    pub departure_stop: TransitStop,
    pub arrival_stop: TransitStop,

    /// Clock string, e.g. "07:05" or "6:15 AM"
    pub departure_time: String,
    pub arrival_time: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub headsign: Option<String>,

    pub num_stops: u32,

    /// Service frequency label, e.g. "Every 10 min"
    pub frequency: String,
}

/// One step of an itinerary, in travel order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteStep {
    pub instruction: String,

    /// e.g. "350 m"; empty when unknown
    pub distance: String,

    /// e.g. "5 min"; empty when unknown
    pub duration: String,

    pub travel_mode: TravelMode,
    pub icon: StepIcon,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub transit_details: Option<TransitDetails>,
}

impl RouteStep {
    /// A step with no transit detail; the icon follows the travel mode.
    pub fn new(
        instruction: impl Into<String>,
        distance: impl Into<String>,
        duration: impl Into<String>,
        travel_mode: TravelMode,
    ) -> Self {
        Self {
            instruction: instruction.into(),
            distance: distance.into(),
            duration: duration.into(),
            travel_mode,
            icon: travel_mode.icon(),
            transit_details: None,
        }
    }

    pub fn with_transit(mut self, details: TransitDetails) -> Self {
        self.transit_details = Some(details);
        self
    }

    pub fn is_transit(&self) -> bool {
        self.transit_details.is_some()
    }
}

/// A lighter-weight alternative to the primary itinerary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlternativeSummary {
    pub stage: String,
    pub routes: Vec<String>,
    pub fare: FareBand,
    pub time: String,
}

/// The normalized, display-ready description of a journey.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Itinerary {
    /// Primary boarding stage
    pub stage: String,

    /// Route codes in the order they are boarded, never empty
    pub routes: Vec<String>,

    /// Total duration, e.g. "38 min"
    pub time: String,

    pub fare: FareBand,
    pub tips: String,
    pub steps: Vec<RouteStep>,
    pub alternatives: Vec<AlternativeSummary>,
}

impl Itinerary {
    /// Steps that board a vehicle.
    pub fn transit_steps(&self) -> impl Iterator<Item = &RouteStep> {
        self.steps.iter().filter(|s| s.is_transit())
    }
}

/// Collect route codes in order, dropping repeats.
pub fn unique_routes<'a>(codes: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut routes: Vec<String> = Vec::new();
    for code in codes {
        if !routes.iter().any(|r| r == code) {
            routes.push(code.to_string());
        }
    }
    routes
}
