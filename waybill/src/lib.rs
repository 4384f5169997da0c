//! Waybill — a courier dispatch planner over grid maps.
//!
//! Reads a delivery-area map and a manifest of prioritized stops, then plans
//! shortest routes visiting every stop: urgent tier first, each reached stop
//! becoming the origin of the next leg.

pub mod loader;
pub mod plan;
pub mod report;
pub mod stop;
