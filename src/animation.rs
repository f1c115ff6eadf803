// src/animation.rs

/// Snapshot of a [`ValueAnimation`] after a tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationFrame {
    /// Interpolated value for this frame.
    pub value: f64,
    /// True on exactly one tick: the one where the animation settles on its
    /// target.
    pub just_finished: bool,
}

/// A single value interpolated over a fixed duration with an
/// ease-out-exponential curve.
///
/// The animation is driven by the host loop: callers feed it the current
/// clock via [`ValueAnimation::tick`]. The start timestamp is stamped on the
/// first tick after a restart, so a restart always begins from its start
/// value no matter when the next frame arrives.
///
/// Restarting never queues or blends: [`ValueAnimation::restart`] overwrites
/// the endpoints in place and the value snaps to the new start value.
#[derive(Clone, Debug)]
pub struct ValueAnimation {
    from: f64,
    to: f64,
    duration_secs: f64,
    started_at: Option<f64>,
    running: bool,
    value: f64,
}

impl ValueAnimation {
    pub fn new(initial: f64, duration_secs: f64) -> Self {
        Self {
            from: initial,
            to: initial,
            duration_secs,
            started_at: None,
            running: false,
            value: initial,
        }
    }

    /// Replaces the endpoints and restarts from scratch. Any animation in
    /// flight is discarded and the value snaps to `from`.
    pub fn restart(&mut self, from: f64, to: f64) {
        self.from = from;
        self.to = to;
        self.started_at = None;
        self.running = true;
        self.value = from;
    }

    /// Advances the animation to `now` (seconds, same clock across calls).
    pub fn tick(&mut self, now: f64) -> AnimationFrame {
        if !self.running {
            return AnimationFrame {
                value: self.value,
                just_finished: false,
            };
        }

        let started_at = *self.started_at.get_or_insert(now);
        let elapsed = now - started_at;

        if elapsed >= self.duration_secs {
            self.value = self.to;
            self.running = false;
            self.started_at = None;
            return AnimationFrame {
                value: self.value,
                just_finished: true,
            };
        }

        let t = (elapsed / self.duration_secs).clamp(0.0, 1.0);
        self.value = (self.to - self.from).mul_add(ease_out_expo(t), self.from);
        AnimationFrame {
            value: self.value,
            just_finished: false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn target(&self) -> f64 {
        self.to
    }
}

/// Ease-out exponential: fast start, asymptotic finish, exact 1.0 at t = 1.
fn ease_out_expo(t: f64) -> f64 {
    if (t - 1.0).abs() < f64::EPSILON {
        1.0
    } else {
        1.0 - (-10.0 * t).exp2()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_out_expo_endpoints() {
        assert_eq!(ease_out_expo(0.0), 0.0);
        assert_eq!(ease_out_expo(1.0), 1.0);
    }

    #[test]
    fn test_ease_out_expo_is_monotonic() {
        let mut prev = ease_out_expo(0.0);
        for i in 1..=100 {
            let next = ease_out_expo(f64::from(i) / 100.0);
            assert!(next >= prev, "curve regressed at step {}", i);
            prev = next;
        }
    }

    #[test]
    fn test_ease_out_expo_front_loads_progress() {
        // Over half the travel should be done in the first fifth of the time.
        assert!(ease_out_expo(0.2) > 0.5);
    }

    #[test]
    fn test_new_animation_is_idle() {
        let mut anim = ValueAnimation::new(0.0, 1.0);
        assert!(!anim.is_running());
        let frame = anim.tick(5.0);
        assert_eq!(frame.value, 0.0);
        assert!(!frame.just_finished);
    }

    #[test]
    fn test_first_tick_stamps_start_and_snaps_to_from() {
        let mut anim = ValueAnimation::new(0.0, 1.0);
        anim.restart(0.0, 99.0);
        // The clock may be well past zero when the first frame arrives.
        let frame = anim.tick(42.5);
        assert_eq!(frame.value, 0.0);
        assert!(anim.is_running());
    }

    #[test]
    fn test_progress_is_eased_not_linear() {
        let mut anim = ValueAnimation::new(0.0, 1.0);
        anim.restart(0.0, 99.0);
        anim.tick(0.0);
        let frame = anim.tick(0.5);
        // OutExpo at t = 0.5 is 1 - 2^-5 = 0.96875.
        assert!((frame.value - 99.0 * 0.96875).abs() < 1e-9);
    }

    #[test]
    fn test_settles_exactly_on_target_and_finishes_once() {
        let mut anim = ValueAnimation::new(0.0, 1.0);
        anim.restart(0.0, 99.0);
        anim.tick(10.0);
        let frame = anim.tick(11.0);
        assert_eq!(frame.value, 99.0);
        assert!(frame.just_finished);
        assert!(!anim.is_running());

        let frame = anim.tick(12.0);
        assert_eq!(frame.value, 99.0);
        assert!(!frame.just_finished);
    }

    #[test]
    fn test_restart_overwrites_in_place() {
        let mut anim = ValueAnimation::new(0.0, 1.0);
        anim.restart(0.0, 99.0);
        anim.tick(0.0);
        let mid = anim.tick(0.3);
        assert!(mid.value > 0.0 && mid.value < 99.0);

        // Reversing mid-flight discards the old animation entirely; the
        // value snaps to the new start value.
        anim.restart(99.0, 0.0);
        assert_eq!(anim.value(), 99.0);
        let frame = anim.tick(0.4);
        assert_eq!(frame.value, 99.0);
        assert!(!frame.just_finished);

        // And the restarted animation runs on its own fresh clock.
        let frame = anim.tick(1.5);
        assert_eq!(frame.value, 0.0);
        assert!(frame.just_finished);
    }

    #[test]
    fn test_restart_before_first_tick_resets_timing() {
        let mut anim = ValueAnimation::new(0.0, 1.0);
        anim.restart(0.0, 99.0);
        anim.restart(0.0, 99.0);
        anim.tick(7.0);
        // Started at 7.0, so half the duration later it is still in flight.
        let frame = anim.tick(7.5);
        assert!(!frame.just_finished);
        assert!(anim.is_running());
        assert_eq!(anim.target(), 99.0);
    }
}
