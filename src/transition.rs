//! Time based tweening used to animate axes, circles and their labels.

use d3rs::ease::ease_cubic_in_out;
use glam::Vec2;
use std::time::{Duration, Instant};

/// Values that can be blended linearly.
pub trait Interpolate: Copy {
    fn lerp(self, to: Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn lerp(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

impl Interpolate for f64 {
    fn lerp(self, to: Self, t: f32) -> Self {
        self + (to - self) * t as f64
    }
}

impl Interpolate for (f64, f64) {
    fn lerp(self, to: Self, t: f32) -> Self {
        (Interpolate::lerp(self.0, to.0, t), Interpolate::lerp(self.1, to.1, t))
    }
}

impl Interpolate for Vec2 {
    fn lerp(self, to: Self, t: f32) -> Self {
        Vec2::new(
            Interpolate::lerp(self.x, to.x, t),
            Interpolate::lerp(self.y, to.y, t),
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween<T> {
    from: T,
    to: T,
    start: Instant,
    duration: Duration,
}

impl<T: Interpolate> Tween<T> {
    /// A tween that is already at rest on `value`.
    pub fn settled(value: T, now: Instant) -> Self {
        Self {
            from: value,
            to: value,
            start: now,
            duration: Duration::ZERO,
        }
    }

    pub fn new(from: T, to: T, start: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            start,
            duration,
        }
    }

    /// Eased progress in `[0, 1]`, on D3's default cubic in-out curve.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        let t = (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0);
        ease_cubic_in_out(t) as f32
    }

    pub fn value_at(&self, now: Instant) -> T {
        self.from.lerp(self.to, self.progress(now))
    }

    pub fn target(&self) -> T {
        self.to
    }

    pub fn is_running(&self, now: Instant) -> bool {
        !self.duration.is_zero() && now < self.start + self.duration
    }

    /// Restarts towards `to` from wherever the tween currently is.
    pub fn retarget(&mut self, to: T, now: Instant, duration: Duration) {
        self.from = self.value_at(now);
        self.to = to;
        self.start = now;
        self.duration = duration;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_is_eased_and_clamped() {
        let start = Instant::now();
        let tween = Tween::new(0.0f32, 1.0, start, Duration::from_millis(1000));
        let at = |ms: u64| tween.progress(start + Duration::from_millis(ms));

        assert_eq!(at(0), 0.0);
        assert_eq!(at(500), 0.5);
        assert_eq!(at(1000), 1.0);
        assert_eq!(at(2000), 1.0, "progress past the end stays at 1");
        assert!(at(250) < 0.25, "slow start");
        assert!(at(750) > 0.75, "slow finish");

        let later = Tween::new(0.0f32, 1.0, start + Duration::from_millis(10), Duration::from_secs(1));
        assert_eq!(later.progress(start), 0.0, "instants before the start clamp to 0");
    }

    #[test]
    fn test_settled_tween_never_runs() {
        let now = Instant::now();
        let tween = Tween::settled(3.0f64, now);
        assert!(!tween.is_running(now));
        assert_eq!(tween.value_at(now + Duration::from_secs(1)), 3.0);
    }

    #[test]
    fn test_domain_tween() {
        let start = Instant::now();
        let tween = Tween::new((0.0, 10.0), (10.0, 30.0), start, Duration::from_millis(200));
        assert_eq!(tween.value_at(start), (0.0, 10.0));
        assert_eq!(tween.value_at(start + Duration::from_millis(100)), (5.0, 20.0));
        assert_eq!(tween.value_at(start + Duration::from_millis(400)), (10.0, 30.0));
        assert!(tween.is_running(start + Duration::from_millis(199)));
    }

    #[test]
    fn test_retarget_keeps_continuity() {
        let start = Instant::now();
        let mut tween = Tween::new(Vec2::ZERO, Vec2::new(100.0, 0.0), start, Duration::from_secs(1));
        let mid = start + Duration::from_millis(300);
        let at_mid = tween.value_at(mid);

        tween.retarget(Vec2::new(0.0, 100.0), mid, Duration::from_secs(1));
        assert_eq!(tween.value_at(mid), at_mid);
        assert_eq!(tween.target(), Vec2::new(0.0, 100.0));
        assert_eq!(tween.value_at(mid + Duration::from_secs(1)), Vec2::new(0.0, 100.0));
    }
}
