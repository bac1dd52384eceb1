//! Plans trips over a small road map, once by distance and once by time.
//!
//! Run with `cargo run --example road_trip`.

use anyhow::{Context, Result};
use digraph::{Digraph, VertexKey};

#[derive(Debug, Clone, Copy)]
struct RoadSegment {
    miles: f64,
    miles_per_hour: f64,
}

impl RoadSegment {
    fn minutes(&self) -> f64 {
        60.0 * self.miles / self.miles_per_hour
    }
}

#[derive(Debug, Clone, Copy)]
enum TripMetric {
    Distance,
    Time,
}

type RoadMap = Digraph<&'static str, RoadSegment>;

fn road_map() -> Result<RoadMap> {
    let mut map = RoadMap::new();
    for (key, name) in [
        (0, "Anteater Plaza"),
        (1, "Bison Ave & Jamboree"),
        (2, "Culver Dr & Michelson"),
        (3, "Irvine Center Dr & Sand Canyon"),
        (4, "Newport Beach Pier"),
    ] {
        map.add_vertex(key, name)?;
    }

    for (from, to, miles, miles_per_hour) in [
        (0, 1, 1.4, 35.0),
        (1, 0, 1.4, 35.0),
        (1, 2, 2.2, 45.0),
        (2, 1, 2.2, 45.0),
        (0, 3, 6.5, 65.0),
        (3, 0, 6.5, 65.0),
        (2, 3, 3.1, 40.0),
        (3, 4, 9.0, 65.0),
        (2, 4, 7.8, 30.0),
        (4, 2, 7.8, 30.0),
    ] {
        map.add_edge(from, to, RoadSegment { miles, miles_per_hour })?;
    }

    if !map.is_strongly_connected() {
        anyhow::bail!("road map has unreachable intersections");
    }
    Ok(map)
}

fn format_minutes(total: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let whole = total.floor() as u64;
    let seconds = ((total - total.floor()) * 60.0 * 10.0).round() / 10.0;
    let (hours, minutes) = (whole / 60, whole % 60);

    let mut parts = Vec::new();
    if hours != 0 {
        parts.push(format!("{hours} hours"));
    }
    if minutes != 0 {
        parts.push(format!("{minutes} minutes"));
    }
    if seconds != 0.0 {
        parts.push(format!("{seconds} seconds"));
    }
    parts.join(" ")
}

fn plan(map: &RoadMap, from: VertexKey, to: VertexKey, metric: TripMetric) -> Result<()> {
    let paths = match metric {
        TripMetric::Distance => map.find_shortest_paths(from, |s| s.miles)?,
        TripMetric::Time => map.find_shortest_paths(from, RoadSegment::minutes)?,
    };
    let steps = paths
        .path_to(to)
        .with_context(|| format!("no route from {from} to {to}"))?;

    let heading = match metric {
        TripMetric::Distance => "Shortest distance",
        TripMetric::Time => "Shortest driving time",
    };
    println!("{heading} from {} to {}", map.vertex_info(from)?, map.vertex_info(to)?);
    println!("  Begin at {}", map.vertex_info(from)?);

    let mut total = 0.0;
    for (step_from, step_to) in steps {
        let segment = map.edge_info(step_from, step_to)?;
        let name = map.vertex_info(step_to)?;
        match metric {
            TripMetric::Distance => {
                println!("  Continue to {name} ({} miles)", segment.miles);
                total += segment.miles;
            }
            TripMetric::Time => {
                let minutes = segment.minutes();
                println!(
                    "  Continue to {name} ({} miles @ {}mph = {})",
                    segment.miles,
                    segment.miles_per_hour,
                    format_minutes(minutes)
                );
                total += minutes;
            }
        }
    }

    match metric {
        TripMetric::Distance => println!("Total distance: {total:.1} miles\n"),
        TripMetric::Time => println!("Total time: {}\n", format_minutes(total)),
    }
    Ok(())
}

fn main() -> Result<()> {
    let map = road_map()?;
    plan(&map, 0, 4, TripMetric::Distance)?;
    plan(&map, 0, 4, TripMetric::Time)?;
    plan(&map, 4, 0, TripMetric::Time)?;
    Ok(())
}
