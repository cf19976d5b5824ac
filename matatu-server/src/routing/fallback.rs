//! Synthesized itineraries.
//!
//! Used when the provider answers successfully but without anything we can
//! show: no route at all gets the minimal two-step itinerary, a route
//! without usable steps gets a realistic two-matatu itinerary.

use rand::Rng;

use crate::domain::{
    AlternativeSummary, FareBand, Itinerary, RouteStep, TIPS, TransitDetails, TransitLine,
    TransitStop, TravelMode, derive_stage, unique_routes,
};

use super::filler::Filler;

/// Route codes used when nothing better is known.
pub const DEFAULT_ROUTES: [&str; 2] = ["14", "46"];

/// Total time shown when the provider gives none.
pub const DEFAULT_TIME: &str = "45 mins";

/// Distance assumed for fares when the provider gives none.
pub const DEFAULT_DISTANCE_METERS: f64 = 5000.0;

/// Colour used for lines without one.
pub const BRAND_COLOR: &str = "#FF6B35";

/// Vehicle label used for lines without one.
pub const DEFAULT_VEHICLE: &str = "Bus";

/// Where the two synthesized matatu legs meet.
const TRANSFER_STAGE: &str = "Town Centre";

/// Itinerary for a response with no route at all.
pub fn minimal_itinerary(origin_label: &str, destination_label: &str) -> Itinerary {
    let stage = derive_stage(origin_label);

    Itinerary {
        stage: stage.to_string(),
        routes: DEFAULT_ROUTES.iter().map(|r| r.to_string()).collect(),
        time: DEFAULT_TIME.to_string(),
        fare: FareBand::for_distance(DEFAULT_DISTANCE_METERS),
        tips: TIPS.to_string(),
        steps: vec![
            RouteStep::new(format!("Walk to {stage}"), "200 m", "", TravelMode::Walk),
            RouteStep::new(
                format!("Board matatu to {destination_label}"),
                "",
                "",
                TravelMode::Transit,
            ),
        ],
        alternatives: Vec::new(),
    }
}

/// A synthesized matatu leg.
struct SyntheticLeg<'a> {
    code: String,
    from: &'a str,
    to: &'a str,
    distance: String,
    minutes: u32,
    departs: &'static str,
    arrives: &'static str,
    num_stops: u32,
}

fn matatu_step<R: Rng>(leg: SyntheticLeg<'_>, filler: &mut Filler<R>) -> RouteStep {
    let details = TransitDetails {
        line: TransitLine {
            name: format!("Route {}", leg.code),
            short_name: leg.code.clone(),
            color: BRAND_COLOR.to_string(),
            agencies: Vec::new(),
            vehicle: DEFAULT_VEHICLE.to_string(),
        },
        departure_stop: TransitStop::named(leg.from),
        arrival_stop: TransitStop::named(leg.to),
        departure_time: leg.departs.to_string(),
        arrival_time: leg.arrives.to_string(),
        headsign: None,
        num_stops: leg.num_stops,
        frequency: filler.frequency(),
    };

    RouteStep::new(
        format!("Take matatu {}", leg.code),
        leg.distance,
        format!("{} min", leg.minutes),
        TravelMode::Transit,
    )
    .with_transit(details)
}

/// Share of `total` meters as a distance string, or `fixed` when unknown.
fn share(total: Option<f64>, fraction: f64, fixed: &str) -> String {
    match total {
        Some(m) => format!("{} m", (m * fraction).round()),
        None => fixed.to_string(),
    }
}

/// Two-matatu itinerary for a route whose steps were unusable.
///
/// Walk to the origin stage, ride to the town centre, walk to the
/// connecting stage, ride on to the destination stage, walk the rest. The
/// first ride covers 70% of the distance and the second 30%.
pub fn multi_leg_itinerary<R: Rng>(
    origin_label: &str,
    destination_label: &str,
    time: &str,
    distance_meters: Option<f64>,
    filler: &mut Filler<R>,
) -> Itinerary {
    let departure_stage = derive_stage(origin_label);
    let arrival_stage = derive_stage(destination_label);
    let first = filler.route_code();
    let second = filler.route_code();

    let steps = vec![
        RouteStep::new(
            format!("Walk to {departure_stage}"),
            "150 m",
            "2 min",
            TravelMode::Walk,
        ),
        matatu_step(
            SyntheticLeg {
                code: first.clone(),
                from: departure_stage,
                to: TRANSFER_STAGE,
                distance: share(distance_meters, 0.7, "8 km"),
                minutes: 25,
                departs: "6:15 AM",
                arrives: "6:40 AM",
                num_stops: 12,
            },
            filler,
        ),
        RouteStep::new(
            "Walk to connecting stage",
            "100 m",
            "1 min",
            TravelMode::Walk,
        ),
        matatu_step(
            SyntheticLeg {
                code: second.clone(),
                from: TRANSFER_STAGE,
                to: arrival_stage,
                distance: share(distance_meters, 0.3, "3 km"),
                minutes: 15,
                departs: "6:45 AM",
                arrives: "7:00 AM",
                num_stops: 8,
            },
            filler,
        ),
        RouteStep::new(
            format!("Walk to {destination_label}"),
            "80 m",
            "1 min",
            TravelMode::Walk,
        ),
    ];

    Itinerary {
        stage: departure_stage.to_string(),
        routes: unique_routes([first.as_str(), second.as_str()]),
        time: time.to_string(),
        fare: FareBand::for_distance(distance_meters.unwrap_or(DEFAULT_DISTANCE_METERS)),
        tips: TIPS.to_string(),
        steps,
        alternatives: alternatives(origin_label, distance_meters, filler),
    }
}

/// Two alternative summaries: a longer one with two routes and a shorter
/// one with a single route.
pub fn alternatives<R: Rng>(
    origin_label: &str,
    distance_meters: Option<f64>,
    filler: &mut Filler<R>,
) -> Vec<AlternativeSummary> {
    let distance = distance_meters.unwrap_or(DEFAULT_DISTANCE_METERS);

    let two_routes = {
        let stage = filler.alternative_stage(origin_label);
        let a = filler.route_code();
        let b = filler.route_code();
        AlternativeSummary {
            stage,
            routes: unique_routes([a.as_str(), b.as_str()]),
            fare: FareBand::for_distance(distance * 1.1),
            time: "52 min".to_string(),
        }
    };

    let one_route = AlternativeSummary {
        stage: filler.alternative_stage(origin_label),
        routes: vec![filler.route_code()],
        fare: FareBand::for_distance(distance * 0.9),
        time: "48 min".to_string(),
    };

    vec![two_routes, one_route]
}
