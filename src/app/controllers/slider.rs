/// Steps moved by PageUp/PageDown
const PAGE_STEPS: f64 = 10.0;

/// Range slider value model. The value always sits on a step inside `[min, max]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    min: f64,
    max: f64,
    step: f64,
    value: f64,
}

impl Slider {
    /// Degenerate ranges are repaired: `max <= min` becomes `min + 1`, and a
    /// non-positive step becomes 1.
    pub fn new(min: f64, max: f64, step: f64, value: f64) -> Self {
        let min = if min.is_finite() { min } else { 0.0 };
        let max = if max.is_finite() && max > min { max } else { min + 1.0 };
        let step = if step.is_finite() && step > 0.0 { step } else { 1.0 };
        let mut slider = Self { min, max, step, value: min };
        slider.set_value(value);
        slider
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Clamp and snap to the nearest step counted from `min`.
    pub fn set_value(&mut self, value: f64) -> f64 {
        let value = if value.is_nan() { self.min } else { value };
        let clamped = value.clamp(self.min, self.max);
        let steps = ((clamped - self.min) / self.step).round();
        let snapped = self.min + steps * self.step;
        // the last step may overshoot when the range is not a step multiple
        let within = if snapped > self.max { snapped - self.step } else { snapped };
        self.value = round_to_step_precision(within.max(self.min), self.step);
        self.value
    }

    /// Map a pointer position (0 = left edge, 1 = right edge) to a value.
    pub fn set_from_fraction(&mut self, fraction: f64) -> f64 {
        let fraction = if fraction.is_nan() { 0.0 } else { fraction.clamp(0.0, 1.0) };
        self.set_value(self.min + fraction * (self.max - self.min))
    }

    /// Current position along the track in `[0, 1]`.
    pub fn fraction(&self) -> f64 {
        (self.value - self.min) / (self.max - self.min)
    }

    pub fn step_up(&mut self) -> f64 {
        self.set_value(self.value + self.step)
    }

    pub fn step_down(&mut self) -> f64 {
        self.set_value(self.value - self.step)
    }

    pub fn page_up(&mut self) -> f64 {
        self.set_value(self.value + self.step * PAGE_STEPS)
    }

    pub fn page_down(&mut self) -> f64 {
        self.set_value(self.value - self.step * PAGE_STEPS)
    }

    pub fn to_min(&mut self) -> f64 {
        self.set_value(self.min)
    }

    pub fn to_max(&mut self) -> f64 {
        self.set_value(self.max)
    }
}

/// Drop float noise like 0.30000000000000004 by rounding to the step's decimals.
fn round_to_step_precision(value: f64, step: f64) -> f64 {
    let text = format!("{}", step);
    let decimals = text.split_once('.').map_or(0, |(_, frac)| frac.len()).min(10);
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
