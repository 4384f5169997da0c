//! Route planning: tier-ordered sequencing of stops over the map.

use courier_core::{GridMap, Point};
use courier_paths::{AstarPather, Pather, SearchField, manhattan};
use log::debug;

use crate::stop::Stop;

/// Cardinal-move pather over a delivery map.
///
/// Neighbors are offered right, left, down, up. This fixed expansion order,
/// together with the frontier's insertion-order tie-break, makes the chosen
/// route among equal-length candidates deterministic.
pub struct RoutePather<'a> {
    pub map: &'a GridMap,
}

impl Pather for RoutePather<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for &d in &[
            Point::new(1, 0),
            Point::new(-1, 0),
            Point::new(0, 1),
            Point::new(0, -1),
        ] {
            let np = p + d;
            if self.map.passable(np) {
                buf.push(np);
            }
        }
    }
}

impl AstarPather for RoutePather<'_> {
    fn estimate(&self, from: Point, to: Point) -> i32 {
        manhattan(from, to)
    }
}

/// Outcome of routing a single stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Full route from the leg's origin to the stop, both ends included.
    Route(Vec<Point>),
    /// No route exists; the courier stays where the previous leg ended.
    Unreachable,
}

/// One stop of the finished plan, in execution order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leg {
    pub stop: Stop,
    pub outcome: Outcome,
}

/// Rearrange stops into tier-ascending, then input, order.
///
/// A stable three-bucket partition: stops sharing a tier keep their relative
/// manifest order. This is also the order legs are executed in.
pub fn tier_order(stops: &[Stop]) -> Vec<Stop> {
    let mut buckets: [Vec<Stop>; 3] = [Vec::new(), Vec::new(), Vec::new()];
    for &s in stops {
        buckets[s.tier.index()].push(s);
    }
    buckets.into_iter().flatten().collect()
}

/// Plan every stop in tier order, chaining origins.
///
/// Starts at the map's depot. Each found route advances the origin to its
/// stop; an unreachable stop is reported and skipped, and later legs search
/// from the last stop actually reached. Legs run strictly one after another
/// because of exactly this origin chaining.
pub fn plan(map: &GridMap, stops: &[Stop]) -> Vec<Leg> {
    let mut field = SearchField::new(map.size());
    let pather = RoutePather { map };
    let mut origin = map.depot();
    let mut legs = Vec::with_capacity(stops.len());

    for stop in tier_order(stops) {
        match field.astar_path(&pather, origin, stop.pos) {
            Some(route) => {
                debug!(
                    "routed {} -> {} in {} steps",
                    origin,
                    stop.pos,
                    route.len() - 1
                );
                origin = stop.pos;
                legs.push(Leg {
                    stop,
                    outcome: Outcome::Route(route),
                });
            }
            None => {
                debug!("no route {} -> {}", origin, stop.pos);
                legs.push(Leg {
                    stop,
                    outcome: Outcome::Unreachable,
                });
            }
        }
    }
    legs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stop::Tier;
    use courier_core::Cell;

    /// Build a map from digit rows, e.g. `"200 010"` (0 free, 1 obstacle,
    /// 2 depot).
    fn grid(rows: &[&str]) -> GridMap {
        let height = rows.len() as i32;
        let width = rows[0].len() as i32;
        let cells: Vec<Cell> = rows
            .iter()
            .flat_map(|r| r.chars())
            .map(|c| Cell::from_code(c as i32 - '0' as i32).unwrap())
            .collect();
        GridMap::from_cells(width, height, cells).unwrap()
    }

    fn stop(x: i32, y: i32, tier: Tier) -> Stop {
        Stop::new(Point::new(x, y), tier)
    }

    fn route_of(leg: &Leg) -> &[Point] {
        match &leg.outcome {
            Outcome::Route(r) => r,
            Outcome::Unreachable => panic!("expected a route for {}", leg.stop.pos),
        }
    }

    #[test]
    fn tier_order_is_stable_within_tiers() {
        let stops = vec![
            stop(5, 0, Tier::Deferred),
            stop(1, 0, Tier::Standard),
            stop(2, 0, Tier::Urgent),
            stop(3, 0, Tier::Standard),
            stop(4, 0, Tier::Urgent),
        ];
        let ordered = tier_order(&stops);
        let xs: Vec<i32> = ordered.iter().map(|s| s.pos.x).collect();
        assert_eq!(xs, vec![2, 4, 1, 3, 5]);
        assert!(ordered.windows(2).all(|w| w[0].tier <= w[1].tier));
    }

    #[test]
    fn urgent_legs_run_first_and_chain_origins() {
        let map = grid(&["200", "000", "000"]);
        // Listed standard-first; the urgent stop must still be routed first.
        let stops = vec![stop(2, 2, Tier::Standard), stop(0, 2, Tier::Urgent)];
        let legs = plan(&map, &stops);

        assert_eq!(legs.len(), 2);
        assert_eq!(legs[0].stop.pos, Point::new(0, 2));
        assert_eq!(legs[1].stop.pos, Point::new(2, 2));

        let first = route_of(&legs[0]);
        assert_eq!(first.first(), Some(&Point::new(0, 0)));
        assert_eq!(first.len(), 3); // 2 steps
        // Second leg starts where the first one delivered.
        let second = route_of(&legs[1]);
        assert_eq!(second.first(), Some(&Point::new(0, 2)));
        assert_eq!(second.len(), 3); // 2 steps
    }

    #[test]
    fn wall_forces_detour_through_open_row() {
        let map = grid(&["200", "010", "010"]);
        let legs = plan(&map, &[stop(2, 2, Tier::Urgent)]);
        let route = route_of(&legs[0]);
        assert_eq!(route.len(), 5); // 4 steps
        assert!(route.contains(&Point::new(1, 0)));
    }

    #[test]
    fn unreachable_stop_keeps_the_origin() {
        // (3, 1) is walled in; the later stop must still route from the depot.
        let map = grid(&["20101", "00101", "00100"]);
        let stops = vec![stop(3, 1, Tier::Urgent), stop(1, 2, Tier::Standard)];
        let legs = plan(&map, &stops);

        assert_eq!(legs[0].outcome, Outcome::Unreachable);
        let second = route_of(&legs[1]);
        assert_eq!(second.first(), Some(&Point::new(0, 0)));
        assert_eq!(second.last(), Some(&Point::new(1, 2)));
    }

    #[test]
    fn stop_on_obstacle_reports_unreachable() {
        let map = grid(&["200", "010", "000"]);
        let legs = plan(&map, &[stop(1, 1, Tier::Urgent)]);
        assert_eq!(legs[0].outcome, Outcome::Unreachable);
    }

    #[test]
    fn out_of_bounds_stop_reports_unreachable() {
        let map = grid(&["20", "00"]);
        let legs = plan(&map, &[stop(9, 9, Tier::Urgent), stop(1, 1, Tier::Standard)]);
        assert_eq!(legs[0].outcome, Outcome::Unreachable);
        assert!(matches!(legs[1].outcome, Outcome::Route(_)));
    }

    #[test]
    fn stop_at_current_origin_is_a_single_cell_route() {
        let map = grid(&["20", "00"]);
        let legs = plan(&map, &[stop(0, 0, Tier::Urgent)]);
        assert_eq!(route_of(&legs[0]), &[Point::new(0, 0)]);
    }

    #[test]
    fn all_tiers_complete_in_rank_order() {
        let map = grid(&["2000", "0000"]);
        let stops = vec![
            stop(3, 1, Tier::Deferred),
            stop(1, 0, Tier::Urgent),
            stop(2, 1, Tier::Standard),
            stop(3, 0, Tier::Urgent),
        ];
        let legs = plan(&map, &stops);
        let ranks: Vec<i32> = legs.iter().map(|l| l.stop.tier.rank()).collect();
        assert_eq!(ranks, vec![1, 1, 2, 3]);
        // Within the urgent tier, manifest order is preserved.
        assert_eq!(legs[0].stop.pos, Point::new(1, 0));
        assert_eq!(legs[1].stop.pos, Point::new(3, 0));
    }
}
