//! Collision resolution against static platform geometry
//!
//! Movement is resolved one axis at a time: move, then push back out of
//! whatever platform the move ran into. Platforms are checked in insertion
//! order and the first one that qualifies wins; there is no sorting by
//! penetration depth, so overlapping platforms resolve by level-content order.

use serde::{Deserialize, Serialize};

use super::geom::{Body, Rect};
use crate::consts::{LANDING_TOLERANCE, SURFACE_TOLERANCE};

/// Which axis a move is resolved along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Result of resolving one axis of movement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AxisResolution {
    /// A platform stopped (or reverted) the move
    pub blocked: bool,
    /// The body came to rest on a platform top (vertical axis only)
    pub grounded: bool,
}

/// Apply the body's velocity along `axis` and resolve against `platforms`.
///
/// Horizontal: the move is reverted when it pushes the body into the side of
/// a platform. A body whose feet are within [`SURFACE_TOLERANCE`] of the
/// platform top is walking onto it and is let through.
///
/// Vertical: a falling body whose previous bottom was at or above a platform
/// top snaps onto it and is grounded; a rising body whose previous top was at
/// or below a platform bottom bumps its head. Both zero the vertical velocity.
pub fn resolve_axis(body: &mut Body, platforms: &[Rect], axis: Axis) -> AxisResolution {
    match axis {
        Axis::Horizontal => resolve_horizontal(body, platforms),
        Axis::Vertical => resolve_vertical(body, platforms),
    }
}

fn resolve_horizontal(body: &mut Body, platforms: &[Rect]) -> AxisResolution {
    let old_x = body.pos.x;
    body.pos.x += body.vel.x;
    let rect = body.rect();

    let wall = platforms
        .iter()
        .find(|p| rect.intersects(p) && rect.bottom() > p.top() + SURFACE_TOLERANCE);

    if wall.is_some() {
        body.pos.x = old_x;
        return AxisResolution {
            blocked: true,
            grounded: false,
        };
    }
    AxisResolution::default()
}

fn resolve_vertical(body: &mut Body, platforms: &[Rect]) -> AxisResolution {
    let old_top = body.pos.y;
    let old_bottom = body.bottom();
    body.pos.y += body.vel.y;
    let rect = body.rect();

    for platform in platforms {
        if !rect.intersects(platform) {
            continue;
        }
        if body.vel.y > 0.0 && old_bottom <= platform.top() + LANDING_TOLERANCE {
            body.pos.y = platform.top() - body.size.y;
            body.vel.y = 0.0;
            return AxisResolution {
                blocked: true,
                grounded: true,
            };
        }
        if body.vel.y < 0.0 && old_top >= platform.bottom() - LANDING_TOLERANCE {
            body.pos.y = platform.bottom();
            body.vel.y = 0.0;
            return AxisResolution {
                blocked: true,
                grounded: false,
            };
        }
    }
    AxisResolution::default()
}

/// Simplified enemy physics: integrate both axes at once, then land on the
/// first platform the body sinks into while descending. Enemies are never
/// blocked sideways and never bump their heads.
///
/// Returns whether the body is grounded this tick.
pub fn integrate_and_land(body: &mut Body, platforms: &[Rect]) -> bool {
    body.pos += body.vel;
    let rect = body.rect();

    let landing = platforms
        .iter()
        .find(|p| rect.intersects(p) && body.vel.y > 0.0 && rect.top() < p.top());

    match landing {
        Some(platform) => {
            body.pos.y = platform.top() - body.size.y;
            body.vel.y = 0.0;
            true
        }
        None => false,
    }
}
