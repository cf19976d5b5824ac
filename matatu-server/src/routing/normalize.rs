//! Mapping provider directions into the display itinerary.
//!
//! The provider's transit data is patchy for matatus: lines often have no
//! short name, stops no name, and frequencies are never what riders see.
//! Every gap is filled here so the presentation layer can rely on a
//! complete shape.

use rand::Rng;
use tracing::{debug, info};

use crate::domain::{
    Agency, FareBand, Itinerary, RouteStep, TIPS, TransitDetails, TransitLine, TransitStop,
    TravelMode, derive_stage, unique_routes,
};
use crate::maps::{ComputeRoutesResponse, ProviderStop, RouteLegStep, RouteTransitDetails};

use super::fallback::{
    BRAND_COLOR, DEFAULT_DISTANCE_METERS, DEFAULT_ROUTES, DEFAULT_TIME, DEFAULT_VEHICLE,
    alternatives, minimal_itinerary, multi_leg_itinerary,
};
use super::filler::Filler;

/// Turn a directions response into an itinerary.
///
/// - no route: the minimal two-step itinerary
/// - a route whose first leg has no steps: a synthesized two-matatu
///   itinerary
/// - otherwise: the provider's steps, with gaps filled
pub fn normalize_routes<R: Rng>(
    response: &ComputeRoutesResponse,
    origin_label: &str,
    destination_label: &str,
    filler: &mut Filler<R>,
) -> Itinerary {
    let Some(route) = response.routes.first() else {
        info!("no route from provider, using minimal itinerary");
        return minimal_itinerary(origin_label, destination_label);
    };

    let time = route
        .duration
        .as_deref()
        .filter(|d| !d.is_empty())
        .map(format_duration)
        .unwrap_or_else(|| DEFAULT_TIME.to_string());
    let distance = route.distance_meters.filter(|d| *d > 0.0);

    let provider_steps = route.legs.first().map(|l| l.steps.as_slice()).unwrap_or(&[]);
    debug!(count = provider_steps.len(), "mapping provider steps");

    let steps: Vec<RouteStep> = provider_steps
        .iter()
        .map(|s| map_step(s, origin_label, destination_label, filler))
        .collect();

    if steps.is_empty() {
        info!("route has no steps, synthesizing matatu itinerary");
        return multi_leg_itinerary(origin_label, destination_label, &time, distance, filler);
    }

    let first_transit = steps.iter().find_map(|s| s.transit_details.as_ref());
    let stage = first_transit
        .map(|d| d.departure_stop.name.clone())
        .unwrap_or_else(|| derive_stage(origin_label).to_string());

    let mut routes = unique_routes(
        steps
            .iter()
            .filter_map(|s| s.transit_details.as_ref())
            .map(|d| d.line.short_name.as_str()),
    );
    if routes.is_empty() {
        routes = DEFAULT_ROUTES.iter().map(|r| r.to_string()).collect();
    }

    Itinerary {
        stage,
        routes,
        time,
        fare: FareBand::for_distance(distance.unwrap_or(DEFAULT_DISTANCE_METERS)),
        tips: TIPS.to_string(),
        steps,
        alternatives: alternatives(origin_label, distance, filler),
    }
}

/// Map one provider step, filling every missing field.
fn map_step<R: Rng>(
    step: &RouteLegStep,
    origin_label: &str,
    destination_label: &str,
    filler: &mut Filler<R>,
) -> RouteStep {
    let mode = step.travel_mode.unwrap_or_default();

    let instruction = step
        .navigation_instruction
        .as_ref()
        .and_then(|n| non_empty(n.instructions.as_deref()))
        .unwrap_or(mode.default_instruction());

    let distance = step.distance_meters.map(format_distance).unwrap_or_default();

    let duration = step
        .static_duration
        .as_deref()
        .or(step.duration.as_deref())
        .map(format_duration)
        .unwrap_or_default();

    let mapped = RouteStep::new(instruction, distance, duration, mode);

    match &step.transit_details {
        Some(td) => mapped.with_transit(map_transit(td, origin_label, destination_label, filler)),
        None => mapped,
    }
}

fn map_transit<R: Rng>(
    td: &RouteTransitDetails,
    origin_label: &str,
    destination_label: &str,
    filler: &mut Filler<R>,
) -> TransitDetails {
    let line = td.transit_line.as_ref();

    let short_name = line
        .and_then(|l| non_empty(l.short_name.as_deref()))
        .map(str::to_string)
        .unwrap_or_else(|| filler.route_code());
    let name = line
        .and_then(|l| non_empty(l.name.as_deref()))
        .map(str::to_string)
        .unwrap_or_else(|| format!("Route {short_name}"));
    let color = line
        .and_then(|l| non_empty(l.color.as_deref()))
        .unwrap_or(BRAND_COLOR)
        .to_string();
    let agencies: Vec<Agency> = line
        .map(|l| {
            l.agencies
                .iter()
                .filter_map(|a| non_empty(a.name.as_deref()))
                .map(|name| Agency {
                    name: name.to_string(),
                })
                .collect()
        })
        .unwrap_or_default();
    let vehicle = line
        .and_then(|l| l.vehicle.as_ref())
        .and_then(|v| v.name.as_ref())
        .and_then(|n| non_empty(n.text.as_deref()))
        .unwrap_or(DEFAULT_VEHICLE)
        .to_string();

    let stops = td.stop_details.as_ref();
    let departure_stop = map_stop(
        stops.and_then(|s| s.departure_stop.as_ref()),
        origin_label,
    );
    let arrival_stop = map_stop(
        stops.and_then(|s| s.arrival_stop.as_ref()),
        destination_label,
    );

    let values = td.localized_values.as_ref();
    let departure_time = values
        .and_then(|v| non_empty(v.departure_text()))
        .map(str::to_string)
        .unwrap_or_else(|| filler.departure_time());
    let arrival_time = values
        .and_then(|v| non_empty(v.arrival_text()))
        .map(str::to_string)
        .unwrap_or_else(|| filler.arrival_time());

    let num_stops = match td.stop_count {
        Some(n) if n > 0 => n,
        _ => filler.stop_count(),
    };

    TransitDetails {
        line: TransitLine {
            name,
            short_name,
            color,
            agencies,
            vehicle,
        },
        departure_stop,
        arrival_stop,
        departure_time,
        arrival_time,
        headsign: td.headsign.clone(),
        num_stops,
        // Provider frequencies never match matatu reality; always ours.
        frequency: filler.frequency(),
    }
}

/// Provider stop, or the stage guessed from the user's text.
fn map_stop(stop: Option<&ProviderStop>, label: &str) -> TransitStop {
    let name = stop
        .and_then(|s| non_empty(s.name.as_deref()))
        .unwrap_or_else(|| derive_stage(label));

    TransitStop {
        name: name.to_string(),
        location: stop.and_then(|s| s.location).and_then(|l| l.coordinates()),
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

/// Whole meters, e.g. `"350 m"`.
pub fn format_distance(meters: f64) -> String {
    format!("{} m", meters.round())
}

/// `"300s"` → `"5 min"`; anything not in the seconds encoding passes
/// through unchanged.
pub fn format_duration(raw: &str) -> String {
    let Some(secs) = raw.strip_suffix('s') else {
        return raw.to_string();
    };

    match secs.trim().parse::<f64>() {
        Ok(secs) if secs.is_finite() => format!("{} min", (secs / 60.0).round()),
        _ => raw.to_string(),
    }
}
