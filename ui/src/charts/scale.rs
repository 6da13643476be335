//! Linear and band scales.

/// Maps a continuous domain onto a pixel range. The range may be inverted
/// (y axes run bottom to top).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / span * (r1 - r0)
    }

    pub fn invert(&self, position: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = r1 - r0;
        if span == 0.0 {
            return (d0 + d1) / 2.0;
        }
        d0 + (position - r0) / span * (d1 - d0)
    }

    /// Round tick values covering the domain, roughly `count` of them.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (lo, hi) = if self.domain.0 <= self.domain.1 {
            self.domain
        } else {
            (self.domain.1, self.domain.0)
        };
        let step = nice_step(hi - lo, count);
        let first = (lo / step).ceil();
        let last = (hi / step + 1e-9).floor();
        if !first.is_finite() || !last.is_finite() || last < first {
            return Vec::new();
        }

        // Round to the step's precision so 3 × 0.2 prints as 0.6.
        let decimals = (-step.log10().floor()).max(0.0) as i32;
        let scale = 10f64.powi(decimals);
        (first as i64..=last as i64)
            .map(|i| (i as f64 * step * scale).round() / scale)
            .collect()
    }
}

/// A 1, 2 or 5 × 10ⁿ step splitting `span` into about `count` intervals.
pub fn nice_step(span: f64, count: usize) -> f64 {
    if !span.is_finite() || span <= 0.0 {
        return 1.0;
    }
    let raw = span / count.max(1) as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let nice = if normalized < 1.5 {
        1.0
    } else if normalized < 3.0 {
        2.0
    } else if normalized < 7.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Smallest multiple of the nice step that is ≥ `max`.
pub fn nice_upper(max: f64, count: usize) -> f64 {
    if !max.is_finite() || max <= 0.0 {
        return 1.0;
    }
    let step = nice_step(max, count);
    (max / step - 1e-9).ceil() * step
}

/// Evenly spaced categorical bands, in the order categories were given.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    categories: Vec<String>,
    range: (f64, f64),
    padding: f64,
}

impl BandScale {
    /// `padding` is the fraction of each step left empty between bands.
    pub fn new(categories: Vec<String>, range: (f64, f64), padding: f64) -> Self {
        Self {
            categories,
            range,
            padding: padding.clamp(0.0, 0.95),
        }
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn step(&self) -> f64 {
        if self.categories.is_empty() {
            return 0.0;
        }
        (self.range.1 - self.range.0) / self.categories.len() as f64
    }

    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding)
    }

    /// Left edge of the band for `category`.
    pub fn position(&self, category: &str) -> Option<f64> {
        let index = self.categories.iter().position(|c| c == category)?;
        Some(self.range.0 + index as f64 * self.step() + self.step() * self.padding / 2.0)
    }

    pub fn center(&self, category: &str) -> Option<f64> {
        self.position(category).map(|left| left + self.bandwidth() / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_maps_and_inverts() {
        let scale = LinearScale::new((0.0, 5.0), (300.0, 0.0));
        assert_eq!(scale.map(0.0), 300.0);
        assert_eq!(scale.map(5.0), 0.0);
        assert_eq!(scale.map(2.5), 150.0);
        assert_eq!(scale.invert(150.0), 2.5);
    }

    #[test]
    fn degenerate_domain_maps_to_the_middle() {
        let scale = LinearScale::new((3.0, 3.0), (0.0, 100.0));
        assert_eq!(scale.map(3.0), 50.0);
    }

    #[test]
    fn ticks_are_round_numbers() {
        let scale = LinearScale::new((0.0, 5.0), (0.0, 1.0));
        assert_eq!(scale.ticks(5), vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);

        let scale = LinearScale::new((0.0, 1000.0), (0.0, 1.0));
        assert_eq!(scale.ticks(5), vec![0.0, 200.0, 400.0, 600.0, 800.0, 1000.0]);

        let scale = LinearScale::new((0.15, 0.95), (0.0, 1.0));
        assert_eq!(scale.ticks(4), vec![0.2, 0.4, 0.6, 0.8]);
    }

    #[test]
    fn nice_upper_rounds_up() {
        assert_eq!(nice_upper(4.7, 5), 5.0);
        assert_eq!(nice_upper(5.0, 5), 5.0);
        assert_eq!(nice_upper(578.0, 5), 600.0);
        assert_eq!(nice_upper(0.0, 5), 1.0);
    }

    #[test]
    fn bands_split_the_range() {
        let scale = BandScale::new(vec!["A".into(), "B".into()], (0.0, 200.0), 0.2);
        assert_eq!(scale.step(), 100.0);
        assert_eq!(scale.bandwidth(), 80.0);
        assert_eq!(scale.position("A"), Some(10.0));
        assert_eq!(scale.position("B"), Some(110.0));
        assert_eq!(scale.center("B"), Some(150.0));
        assert_eq!(scale.position("C"), None);
    }
}
