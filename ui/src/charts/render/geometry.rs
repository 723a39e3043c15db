//! Coordinate mapping, tick generation and arc paths.

use std::f64::consts::TAU;

/// Axis-aligned rectangle in SVG user units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Rect {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            x0: x0.min(x1),
            y0: y0.min(y1),
            x1: x0.max(x1),
            y1: y0.max(y1),
        }
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    pub fn center(&self) -> (f64, f64) {
        ((self.x0 + self.x1) / 2.0, (self.y0 + self.y1) / 2.0)
    }
}

/// Linear mapping from a data domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 {
            return r0;
        }
        r0 + (value - d0) / span * (r1 - r0)
    }

    /// Same as [`map`](Self::map) with the value pinned inside the domain.
    pub fn map_clamped(&self, value: f64) -> f64 {
        let (lo, hi) = (self.domain.0.min(self.domain.1), self.domain.0.max(self.domain.1));
        self.map(value.clamp(lo, hi))
    }

    /// Tick positions inside the domain: every `step` when given, otherwise
    /// roughly `count` nicely spaced values.
    pub fn ticks(&self, step: Option<f64>, count: usize) -> Vec<f64> {
        let (min, max) = self.domain;
        let step = match step {
            Some(step) if step > 0.0 => step,
            _ => nice_step((max - min) / count.max(1) as f64),
        };
        stepped_ticks(min, max, step)
    }
}

/// Rounds a raw step to 1, 2, 5 or 10 times a power of ten.
pub fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let base = 10_f64.powf(step.log10().floor());
    let error = step / base;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * base
}

/// Multiples of `step` lying within `min..=max`.
pub fn stepped_ticks(min: f64, max: f64, step: f64) -> Vec<f64> {
    if !(step > 0.0) || !min.is_finite() || !max.is_finite() || min > max {
        return Vec::new();
    }
    const EPS: f64 = 1e-9;
    let first = (min / step - EPS).ceil() as i64;
    let last = (max / step + EPS).floor() as i64;
    (first..=last)
        .take(1_000)
        .map(|i| clean(i as f64 * step))
        .collect()
}

/// Drops floating-point noise such as `0.30000000000000004`.
fn clean(value: f64) -> f64 {
    let rounded = (value * 1e9).round() / 1e9;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Decimal places needed to print ticks spaced `step` apart.
pub fn decimals_for(step: f64) -> usize {
    if !(step > 0.0) || step >= 1.0 {
        return 0;
    }
    (-step.log10().floor()).clamp(0.0, 4.0) as usize
}

/// Upper bound for an axis with no configured maximum.
pub fn nice_ceiling(max: f64) -> f64 {
    if max <= 0.0 {
        return 0.0;
    }
    let step = nice_step(max / 5.0);
    if step == 0.0 {
        return max;
    }
    clean((max / step - 1e-9).ceil() * step)
}

/// Equal-width slots for categorical positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandScale {
    count: usize,
    range: (f64, f64),
    /// Fraction of each slot left empty.
    padding: f64,
}

impl BandScale {
    pub fn new(count: usize, range: (f64, f64), padding: f64) -> Self {
        Self {
            count,
            range,
            padding: padding.clamp(0.0, 0.9),
        }
    }

    fn slot(&self) -> f64 {
        (self.range.1 - self.range.0) / self.count.max(1) as f64
    }

    /// Start and width of the filled part of slot `index`.
    pub fn band(&self, index: usize) -> (f64, f64) {
        let slot = self.slot();
        let width = slot * (1.0 - self.padding);
        let start = self.range.0 + slot * index as f64 + (slot - width) / 2.0;
        (start, width)
    }

    pub fn center(&self, index: usize) -> f64 {
        self.range.0 + self.slot() * (index as f64 + 0.5)
    }
}

/// Point at `radius` from `center`, with angle 0 at twelve o'clock and growing
/// clockwise.
pub fn polar(center: (f64, f64), radius: f64, angle: f64) -> (f64, f64) {
    (
        center.0 + radius * angle.sin(),
        center.1 - radius * angle.cos(),
    )
}

/// SVG path of a ring segment between `start` and `end` (radians).
pub fn annular_sector(center: (f64, f64), outer: f64, inner: f64, start: f64, end: f64) -> String {
    let sweep = (end - start).clamp(0.0, TAU);
    // A full ring cannot be drawn as a single arc; split it in two.
    if sweep >= TAU - 1e-9 {
        let mid = start + TAU / 2.0;
        return format!(
            "{} {}",
            annular_sector(center, outer, inner, start, mid),
            annular_sector(center, outer, inner, mid, start + TAU)
        );
    }
    let large = u8::from(sweep > TAU / 2.0);
    let (ox0, oy0) = polar(center, outer, start);
    let (ox1, oy1) = polar(center, outer, end);
    let (ix1, iy1) = polar(center, inner, end);
    let (ix0, iy0) = polar(center, inner, start);
    format!(
        "M{ox0:.2},{oy0:.2} A{outer:.2},{outer:.2} 0 {large} 1 {ox1:.2},{oy1:.2} \
         L{ix1:.2},{iy1:.2} A{inner:.2},{inner:.2} 0 {large} 0 {ix0:.2},{iy0:.2} Z"
    )
}

/// Closed polygon path through `points`.
pub fn polygon(points: &[(f64, f64)]) -> String {
    let mut d = polyline(points);
    if !d.is_empty() {
        d.push_str(" Z");
    }
    d
}

/// Open path through `points`.
pub fn polyline(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .enumerate()
        .map(|(i, (x, y))| {
            let cmd = if i == 0 { 'M' } else { 'L' };
            format!("{cmd}{x:.2},{y:.2}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_scale_maps_and_inverts_range() {
        let scale = LinearScale::new((0.0, 10.0), (300.0, 100.0));
        assert_eq!(scale.map(0.0), 300.0);
        assert_eq!(scale.map(5.0), 200.0);
        assert_eq!(scale.map_clamped(20.0), 100.0);
    }

    #[test]
    fn degenerate_domain_maps_to_range_start() {
        let scale = LinearScale::new((1.0, 1.0), (0.0, 50.0));
        assert_eq!(scale.map(1.0), 0.0);
    }

    #[test]
    fn explicit_step_ticks() {
        let scale = LinearScale::new((0.6, 0.95), (0.0, 1.0));
        assert_eq!(scale.ticks(Some(0.1), 5), vec![0.6, 0.7, 0.8, 0.9]);

        let matrix = LinearScale::new((-0.5, 4.5), (0.0, 1.0));
        assert_eq!(
            matrix.ticks(Some(1.0), 5),
            vec![0.0, 1.0, 2.0, 3.0, 4.0]
        );
    }

    #[test]
    fn nice_ticks_cover_domain() {
        let scale = LinearScale::new((0.0, 80.0), (0.0, 1.0));
        assert_eq!(
            scale.ticks(None, 5),
            vec![0.0, 20.0, 40.0, 60.0, 80.0]
        );
        let effect = LinearScale::new((-0.5, 0.5), (0.0, 1.0));
        assert_eq!(
            effect.ticks(None, 5),
            vec![-0.4, -0.2, 0.0, 0.2, 0.4]
        );
    }

    #[test]
    fn nice_step_rounds_to_1_2_5() {
        assert!((nice_step(0.13) - 0.1).abs() < 1e-12);
        assert_eq!(nice_step(16.0), 20.0);
        assert_eq!(nice_step(40.0), 50.0);
        assert_eq!(nice_step(0.0), 0.0);
    }

    #[test]
    fn decimals_follow_step() {
        assert_eq!(decimals_for(10.0), 0);
        assert_eq!(decimals_for(0.5), 1);
        assert_eq!(decimals_for(0.02), 2);
    }

    #[test]
    fn nice_ceiling_rounds_up() {
        assert_eq!(nice_ceiling(96.0), 100.0);
        assert_eq!(nice_ceiling(0.0), 0.0);
    }

    #[test]
    fn bands_are_centered_in_slots() {
        let band = BandScale::new(4, (0.0, 400.0), 0.2);
        assert_eq!(band.band(0), (10.0, 80.0));
        assert_eq!(band.center(3), 350.0);
    }

    #[test]
    fn polar_starts_at_twelve_oclock() {
        let (x, y) = polar((100.0, 100.0), 50.0, 0.0);
        assert!((x - 100.0).abs() < 1e-9 && (y - 50.0).abs() < 1e-9);
        let (x, y) = polar((100.0, 100.0), 50.0, TAU / 4.0);
        assert!((x - 150.0).abs() < 1e-9 && (y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn sector_uses_large_arc_flag_past_half_turn() {
        let small = annular_sector((0.0, 0.0), 10.0, 5.0, 0.0, 1.0);
        assert!(small.contains(" 0 0 1 "));
        let large = annular_sector((0.0, 0.0), 10.0, 5.0, 0.0, 4.0);
        assert!(large.contains(" 0 1 1 "));
        let ring = annular_sector((0.0, 0.0), 10.0, 5.0, 0.0, TAU);
        assert_eq!(ring.matches('Z').count(), 2);
    }

    #[test]
    fn polygon_closes_path() {
        assert_eq!(
            polygon(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]),
            "M0.00,0.00 L1.00,0.00 L1.00,1.00 Z"
        );
        assert_eq!(polygon(&[]), "");
    }
}
