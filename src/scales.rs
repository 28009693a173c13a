use crate::data_types::{Dataset, Field};
use d3rs::scale::{LinearScale, Scale as D3Scale};

/// Number of ticks a nice domain is rounded for, matching D3's default.
pub const DEFAULT_TICK_COUNT: usize = 10;

/// Linear value-to-pixel mapping with a "nice" domain.
#[derive(Clone)]
pub struct ChartScale {
    inner: LinearScale,
    domain: (f64, f64),
    range: (f32, f32),
}

impl ChartScale {
    /// Builds a scale over `domain` as given, without rounding.
    pub fn new_linear(domain: (f64, f64), range: (f32, f32)) -> Self {
        let mut d_min = domain.0;
        let mut d_max = domain.1;
        if (d_max - d_min).abs() < f64::EPSILON {
            d_min -= 0.5;
            d_max += 0.5;
        }
        let inner = LinearScale::new()
            .domain(d_min, d_max)
            .range(range.0 as f64, range.1 as f64);
        Self {
            inner,
            domain: (d_min, d_max),
            range,
        }
    }

    /// Builds a scale whose domain is extended outwards to round tick values.
    pub fn new_nice(domain: (f64, f64), range: (f32, f32), count: usize) -> Self {
        let mut d_min = domain.0;
        let mut d_max = domain.1;
        if (d_max - d_min).abs() < f64::EPSILON {
            d_min -= 0.5;
            d_max += 0.5;
        }
        Self::new_linear(nice_domain(d_min, d_max, count), range)
    }

    pub fn map(&self, value: f64) -> f32 {
        let res = self.inner.scale(value) as f32;
        if res.is_nan() || res.is_infinite() {
            0.0
        } else {
            res
        }
    }

    pub fn invert(&self, pixel: f32) -> f64 {
        self.inner.invert(pixel as f64).unwrap_or(0.0)
    }

    pub fn range(&self) -> (f32, f32) {
        self.range
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn contains(&self, value: f64) -> bool {
        let (lo, hi) = self.domain;
        value >= lo.min(hi) && value <= hi.max(lo)
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        self.inner.ticks(count)
    }

    pub fn format_tick(&self, value: f64) -> String {
        if value.abs() < 0.001 && value.abs() > 0.0 {
            format!("{:.4}", value)
        } else if value.abs() >= 1000.0 || value.fract() == 0.0 {
            format!("{:.0}", value)
        } else {
            format!("{:.1}", value)
        }
    }
}

/// Scale for `field` over the whole dataset, mapped onto `range`.
///
/// The domain spans the field's extent, rounded outwards to nice values.
/// NaN values are skipped; a dataset with no finite value gets `[0, 1]`.
pub fn compute_scale(dataset: &Dataset, field: Field, range: (f32, f32)) -> ChartScale {
    let extent = dataset.extent(field).unwrap_or((0.0, 1.0));
    ChartScale::new_nice(extent, range, DEFAULT_TICK_COUNT)
}

/// Extends `[start, stop]` so both ends fall on multiples of the tick step.
pub fn nice_domain(start: f64, stop: f64, count: usize) -> (f64, f64) {
    let reversed = stop < start;
    let (mut lo, mut hi) = if reversed { (stop, start) } else { (start, stop) };

    let mut previous = None;
    for _ in 0..10 {
        let step = tick_increment(lo, hi, count);
        if previous == Some(step) {
            break;
        } else if step > 0.0 {
            lo = (lo / step).floor() * step;
            hi = (hi / step).ceil() * step;
        } else if step < 0.0 {
            lo = (lo * step).ceil() / step;
            hi = (hi * step).floor() / step;
        } else {
            break;
        }
        previous = Some(step);
    }

    if reversed {
        (hi, lo)
    } else {
        (lo, hi)
    }
}

/// Tick spacing in the 1-2-5 series. Sub-unit steps are returned as the
/// negated inverse (`-10.0` means `0.1`) to keep the arithmetic exact.
fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let e10 = 50f64.sqrt();
    let e5 = 10f64.sqrt();
    let e2 = 2f64.sqrt();

    let step = (stop - start) / count.max(1) as f64;
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= e10 {
        10.0
    } else if error >= e5 {
        5.0
    } else if error >= e2 {
        2.0
    } else {
        1.0
    };

    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -10f64.powf(-power) / factor
    }
}
