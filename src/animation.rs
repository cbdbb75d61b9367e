use std::time::Duration;

/// Timing curve of a transition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseOut,
}

impl Easing {
    /// Maps linear progress `t` to eased progress
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
        }
    }
}

/// Displayed ship angle, interpolated toward the controller's angle.
///
/// This is purely visual. The controller never reads it back.
#[derive(Clone, Debug)]
pub struct AngleAnimation {
    shown: f64,
    from: f64,
    to: f64,
    elapsed: Duration,
    duration: Duration,
    easing: Easing,
}

impl AngleAnimation {
    pub fn new(angle: f64) -> Self {
        AngleAnimation {
            shown: angle,
            from: angle,
            to: angle,
            elapsed: Duration::ZERO,
            duration: Duration::ZERO,
            easing: Easing::Linear,
        }
    }

    /// Starts a new transition from the currently displayed angle
    pub fn retarget(&mut self, target: f64, duration: Duration, easing: Easing) {
        self.from = self.shown;
        self.to = target;
        self.elapsed = Duration::ZERO;
        self.duration = duration;
        self.easing = easing;
        if duration.is_zero() {
            self.shown = target;
        }
    }

    /// Steps the transition by `dt` and returns the displayed angle
    pub fn advance(&mut self, dt: Duration) -> f64 {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.shown = if self.is_settled() {
            self.to
        } else {
            let t = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
            self.from + (self.to - self.from) * self.easing.apply(t)
        };
        self.shown
    }

    pub fn shown(&self) -> f64 {
        self.shown
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    pub fn is_settled(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOVE: Duration = Duration::from_millis(100);

    #[test]
    fn easing_endpoints() {
        for easing in [Easing::Linear, Easing::EaseOut] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert_eq!(easing.apply(3.0), 1.0);
        }
        assert!(Easing::EaseOut.apply(0.5) > Easing::Linear.apply(0.5));
    }

    #[test]
    fn linear_transition_reaches_target_exactly() {
        let mut animation = AngleAnimation::new(0.0);
        animation.retarget(1.0, MOVE, Easing::Linear);
        let halfway = animation.advance(Duration::from_millis(50));
        assert!((halfway - 0.5).abs() < 1e-9);
        assert_eq!(animation.advance(Duration::from_millis(80)), 1.0);
        assert!(animation.is_settled());
    }

    #[test]
    fn retarget_starts_from_displayed_value() {
        let mut animation = AngleAnimation::new(0.0);
        animation.retarget(1.0, MOVE, Easing::Linear);
        animation.advance(Duration::from_millis(50));
        animation.retarget(2.0, MOVE, Easing::Linear);
        assert!((animation.shown() - 0.5).abs() < 1e-9);
        assert_eq!(animation.advance(MOVE), 2.0);
    }

    #[test]
    fn release_keeps_target() {
        let mut animation = AngleAnimation::new(0.0);
        animation.retarget(-0.0055, MOVE, Easing::Linear);
        animation.advance(Duration::from_millis(20));
        let target = animation.target();
        animation.retarget(target, Duration::from_millis(500), Easing::EaseOut);
        assert_eq!(animation.target(), -0.0055);
        assert_eq!(animation.advance(Duration::from_secs(1)), -0.0055);
    }

    #[test]
    fn zero_duration_jumps() {
        let mut animation = AngleAnimation::new(0.0);
        animation.retarget(3.0, Duration::ZERO, Easing::EaseOut);
        assert_eq!(animation.shown(), 3.0);
        assert_eq!(animation.advance(Duration::ZERO), 3.0);
    }
}
