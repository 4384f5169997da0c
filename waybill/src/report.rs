//! Console rendering of a finished plan.

use std::io::{self, Write};

use crate::plan::{Leg, Outcome};

/// Write the manifest and every routed leg to `w`.
///
/// The manifest lists all stops in tier-then-manifest order. Each leg then
/// prints its full route (every cell from origin to stop) or an explicit
/// no-route note, and a delivery summary closes the report. Writing to the
/// sink is this module's only effect.
pub fn write_plan<W: Write>(w: &mut W, legs: &[Leg]) -> io::Result<()> {
    writeln!(w, "Stops by priority:")?;
    for leg in legs {
        writeln!(w, "  {} ({})", leg.stop.pos, leg.stop.tier)?;
    }
    writeln!(w)?;

    let mut delivered = 0;
    for leg in legs {
        match &leg.outcome {
            Outcome::Route(route) => {
                delivered += 1;
                writeln!(
                    w,
                    "Route to {} ({}), {} steps:",
                    leg.stop.pos,
                    leg.stop.tier,
                    route.len() - 1
                )?;
                for p in route {
                    writeln!(w, "  {p}")?;
                }
            }
            Outcome::Unreachable => {
                writeln!(w, "No route to {} ({})", leg.stop.pos, leg.stop.tier)?;
            }
        }
        writeln!(w)?;
    }
    writeln!(w, "Delivered {delivered} of {} stops.", legs.len())?;
    Ok(())
}
