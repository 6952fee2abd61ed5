//! Builtin fixture catalog for the GTFS GraphQL load-test suite.
//!
//! Each entry mirrors one request shape the harness drives against the
//! target GraphQL endpoint, from the cheap full-feed route listing up to the
//! pattern drill-down with stop times. Query text is authored, not parsed;
//! the test suite keeps it syntactically valid.

use crate::error::{Error, Result};
use crate::fixture::{Placeholder, QueryFixture};

const NAMESPACE: Placeholder = Placeholder::new("namespace");
const RANDOM_ROUTE_ID: Placeholder = Placeholder::new("randomRouteId");
const RANDOM_PATTERN_ID: Placeholder = Placeholder::new("randomPatternId");

/// Route list for a whole feed.
const FEED_ROUTES_QUERY: &str = r#"query ($namespace: String) {
  feed(namespace: $namespace) {
    feed_id
    feed_version
    filename
    routes {
      route_id
      route_type
    }
  }
}"#;

/// Trips of one route, selected by id.
const FEED_ROUTE_TRIPS_QUERY: &str = r#"query ($namespace: String, $route_id: String) {
  feed(namespace: $namespace) {
    feed_id
    feed_version
    filename
    routes(route_id: [$route_id]) {
      route_id
      route_type
      trips {
        trip_id
        route_id
      }
    }
  }
}"#;

/// Patterns of one route with the trips under each pattern.
const FEED_ROUTE_PATTERN_TRIPS_QUERY: &str = r#"query ($namespace: String, $route_id: String) {
  feed(namespace: $namespace) {
    feed_id
    feed_version
    filename
    routes(route_id: [$route_id]) {
      route_id
      route_type
      patterns {
        pattern_id
        route_id
        trips {
          trip_id
          pattern_id
        }
      }
    }
  }
}"#;

/// One pattern's stops and trips, stop times included. The deepest builtin
/// selection.
const FEED_ROUTE_PATTERN_STOPS_AND_TRIPS_QUERY: &str =
    r#"query ($namespace: String, $pattern_id: String) {
  feed(namespace: $namespace) {
    feed_id
    feed_version
    filename
    patterns(pattern_id: [$pattern_id]) {
      pattern_id
      route_id
      stops {
        stop_id
      }
      trips {
        trip_id
        pattern_id
        stop_times {
          stop_id
          trip_id
        }
      }
    }
  }
}"#;

/// Full stop list of a feed plus its row counts. The widest builtin result
/// set.
const STOPS_QUERY: &str = r#"query stops($namespace: String) {
  feed(namespace: $namespace) {
    namespace
    feed_id
    feed_version
    filename
    row_counts {
      stops
    }
    stops {
      stop_id
      stop_name
      stop_lat
      stop_lon
    }
  }
}"#;

static FIXTURES: [QueryFixture; 5] = [
    QueryFixture::new(
        "feed_routes",
        "Route list for a feed",
        FEED_ROUTES_QUERY,
        &[("namespace", NAMESPACE)],
    ),
    QueryFixture::new(
        "feed_route_trips",
        "Trips of one route, selected by route_id",
        FEED_ROUTE_TRIPS_QUERY,
        &[("namespace", NAMESPACE), ("route_id", RANDOM_ROUTE_ID)],
    ),
    QueryFixture::new(
        "feed_route_pattern_trips",
        "Patterns and their trips for one route",
        FEED_ROUTE_PATTERN_TRIPS_QUERY,
        &[("namespace", NAMESPACE), ("route_id", RANDOM_ROUTE_ID)],
    ),
    QueryFixture::new(
        "feed_route_pattern_stops_and_trips",
        "Stops, trips and stop_times of one pattern",
        FEED_ROUTE_PATTERN_STOPS_AND_TRIPS_QUERY,
        &[("namespace", NAMESPACE), ("pattern_id", RANDOM_PATTERN_ID)],
    ),
    QueryFixture::new(
        "stops",
        "Feed stop list with row counts",
        STOPS_QUERY,
        &[("namespace", NAMESPACE)],
    ),
];

/// All builtin fixtures in catalog order.
#[must_use]
pub fn all() -> &'static [QueryFixture] {
    &FIXTURES
}

/// Looks up a fixture by name.
///
/// Returns `None` if the name is not in the catalog.
#[must_use]
pub fn get(name: &str) -> Option<&'static QueryFixture> {
    FIXTURES.iter().find(|fixture| fixture.name() == name)
}

/// Looks up a fixture by name, failing with [`Error::UnknownFixture`].
///
/// # Errors
///
/// Returns an error if the name is not in the catalog.
pub fn require(name: &str) -> Result<&'static QueryFixture> {
    get(name).ok_or_else(|| Error::UnknownFixture(name.to_string()))
}

/// Catalog fixture names in order.
#[must_use]
pub fn names() -> Vec<&'static str> {
    FIXTURES.iter().map(QueryFixture::name).collect()
}
