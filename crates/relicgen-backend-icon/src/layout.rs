//! Fan layouts for the three hand families.
//!
//! Cards sit on an arc of radius [`FAN_RADIUS`] around a pivot well below
//! the icon, so only their upper parts show. Each family then nudges
//! individual cards by fixed fractions of the icon size.

use relicgen_spec::HandFamily;

/// Radius of every fan arc.
pub const FAN_RADIUS: f64 = 400.0;

/// Icon-relative offset, truncated to whole pixels.
fn pct(fraction: f64) -> f64 {
    (256.0 * fraction).trunc()
}

/// Where one card lands on the icon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPlacement {
    /// Index into the relic's card list.
    pub index: usize,
    /// Center of the rotated card, icon pixels.
    pub center_x: f64,
    pub center_y: f64,
    /// Clockwise rotation in degrees.
    pub angle_deg: f64,
}

impl CardPlacement {
    /// Top-left paste position for a rotated card of `width x height`.
    pub fn top_left(&self, width: u32, height: u32) -> (i64, i64) {
        (
            (self.center_x - width as f64 / 2.0).trunc() as i64,
            (self.center_y - height as f64 / 2.0).trunc() as i64,
        )
    }
}

/// A pivot and the angle of its first card; each following card turns
/// 10 degrees further clockwise.
struct Fan {
    pivot_x: f64,
    pivot_y: f64,
    start_angle: f64,
}

impl Fan {
    const STEP_DEG: f64 = 10.0;

    fn place(&self, index: usize, slot: usize, dx: f64, dy: f64) -> CardPlacement {
        let angle = self.start_angle + slot as f64 * Self::STEP_DEG;
        let (sin, cos) = angle.to_radians().sin_cos();
        CardPlacement {
            index,
            center_x: self.pivot_x + FAN_RADIUS * sin + dx,
            center_y: self.pivot_y - FAN_RADIUS * cos + dy,
            angle_deg: angle,
        }
    }
}

/// Placements for every card of a hand family, in drawing order.
pub fn fan_layout(family: HandFamily) -> Vec<CardPlacement> {
    match family {
        HandFamily::Pair => pair_layout(),
        HandFamily::Triple => triple_layout(),
        HandFamily::Run => run_layout(),
    }
}

fn pair_layout() -> Vec<CardPlacement> {
    let fan = Fan {
        pivot_x: 200.0,
        pivot_y: 650.0,
        start_angle: -5.0,
    };
    let shift = pct(0.15);

    (0..2)
        .map(|i| {
            let mut p = fan.place(i, i, -shift, -shift);
            if i == 1 {
                p.center_y -= pct(0.10);
            }
            p
        })
        .collect()
}

fn triple_layout() -> Vec<CardPlacement> {
    let fan = Fan {
        pivot_x: 203.0,
        pivot_y: 612.0,
        start_angle: -10.0,
    };

    (0..3)
        .map(|i| {
            let mut p = fan.place(i, i, -pct(0.10), 0.0);
            match i {
                1 => p.center_y -= pct(0.10),
                2 => {
                    p.center_x -= pct(0.07);
                    p.center_y += pct(0.05);
                    // Position uses the base angle; only the card turns
                    p.angle_deg += 3.0;
                }
                _ => {}
            }
            p
        })
        .collect()
}

fn run_layout() -> Vec<CardPlacement> {
    let top = Fan {
        pivot_x: 200.0,
        pivot_y: 550.0,
        start_angle: -5.0,
    };
    let bottom = Fan {
        pivot_x: 200.0,
        pivot_y: 750.0,
        start_angle: -5.0,
    };

    let mut placements = Vec::with_capacity(4);
    for slot in 0..2 {
        let mut p = top.place(slot, slot, 0.0, pct(0.05));
        if slot == 0 {
            p.center_y += pct(0.05);
        }
        placements.push(p);
    }
    for slot in 0..2 {
        let mut p = bottom.place(2 + slot, slot, -pct(0.08), -pct(0.40));
        if slot == 0 {
            p.center_y += pct(0.10);
        } else {
            p.angle_deg += 2.0;
            p.center_y += pct(0.07);
        }
        placements.push(p);
    }
    placements
}
