//! Browser clock and randomness.

#[cfg(feature = "hydrate")]
use booth::factory::CaptureTime;
#[cfg(feature = "hydrate")]
use rand::SeedableRng;
#[cfg(feature = "hydrate")]
use rand::rngs::SmallRng;

/// Capture time in the guest's local calendar.
#[cfg(feature = "hydrate")]
pub fn capture_time() -> CaptureTime {
    let now = js_sys::Date::new_0();
    CaptureTime {
        iso: String::from(now.to_iso_string()),
        year: i32::try_from(now.get_full_year()).unwrap_or(1970),
        month: now.get_month() + 1,
        day: now.get_date(),
    }
}

/// Milliseconds since the Unix epoch.
#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// Small non-cryptographic RNG seeded from `Math.random`.
#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn rng() -> SmallRng {
    SmallRng::seed_from_u64((js_sys::Math::random() * u64::MAX as f64) as u64)
}

/// Run `f` once after `ms` milliseconds.
#[cfg(feature = "hydrate")]
pub fn after(ms: u64, f: impl FnOnce() + 'static) {
    gloo_timers::callback::Timeout::new(u32::try_from(ms).unwrap_or(u32::MAX), f).forget();
}
