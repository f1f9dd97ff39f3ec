//! Easing functions for animations and transitions.
//!
//! An easing function maps the elapsed time of an animation, as a fraction
//! `time_percent` in `[0, 1]`, to a progress value. Progress is conventionally
//! in `[0, 1]` too, but not every variant keeps that contract ([bounce]
//! returns a stepped band indicator) and callers must not assume
//! monotonicity unless the variant documents it.
//!
//! Fixed mappings are plain functions, parametrized ones are factories
//! returning closures:
//!
//! ```
//! use assert_approx_eq::assert_approx_eq;
//! use curve_interp::easing;
//!
//! let ease = easing::expo_up_down(2.0, 2.0, 1.0, 1.0);
//! assert_approx_eq!(0.5, ease(0.5), 1e-9);
//! ```

/// Linear easing, progress equals elapsed time.
pub fn linear(time_percent: f64) -> f64 {
    time_percent
}

/// Stepped band indicator over four time bands.
///
/// Returns 1, 2, 3 or 4 for `[0, 0.1)`, `[0.1, 0.5)`, `[0.5, 0.9)` and
/// `[0.9, 1]` respectively. The output is a discrete level, not a progress
/// fraction in `[0, 1]`.
pub fn bounce(time_percent: f64) -> f64 {
    if time_percent < 0.1 {
        1.0
    } else if time_percent < 0.5 {
        2.0
    } else if time_percent < 0.9 {
        3.0
    } else {
        4.0
    }
}

/// Easing that accelerates exponentially up to a split point, then
/// decelerates exponentially after it.
///
/// `up_time` and `down_time` are relative weights of the two phases and are
/// normalized so they sum to 1; when both are 0 the split defaults to 0.5.
/// The rise follows `(t / up)^up_expo * up`, the fall
/// `1 - ((1 - t) / down)^down_expo * down`.
pub fn expo_up_down(
    up_expo: f64,
    down_expo: f64,
    up_time: f64,
    down_time: f64,
) -> impl Fn(f64) -> f64 {
    let (up, down) = normalize_times(up_time, down_time);

    move |time_percent| {
        if time_percent <= up {
            (time_percent * (1.0 / up)).powf(up_expo) * up
        } else {
            1.0 - ((1.0 - time_percent) * (1.0 / down)).powf(down_expo) * down
        }
    }
}

/// Easing that decelerates exponentially up to a split point, then
/// accelerates exponentially after it, the mirror of [expo_up_down].
pub fn expo_down_up(
    down_expo: f64,
    up_expo: f64,
    down_time: f64,
    up_time: f64,
) -> impl Fn(f64) -> f64 {
    let (down, up) = normalize_times(down_time, up_time);

    move |time_percent| {
        if time_percent <= down {
            (1.0 - (1.0 - time_percent * (1.0 / down)).powf(down_expo)) * down
        } else {
            down + ((time_percent - down) * (1.0 / up)).powf(up_expo) * up
        }
    }
}

/// Threshold step: progress is 0 before `time` and 1 at or after it.
pub fn intermit(time: f64) -> impl Fn(f64) -> f64 {
    move |time_percent| if time_percent < time { 0.0 } else { 1.0 }
}

fn normalize_times(first: f64, second: f64) -> (f64, f64) {
    if first == 0.0 && second == 0.0 {
        (0.5, 0.5)
    } else {
        (first / (first + second), second / (first + second))
    }
}
