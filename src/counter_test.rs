#![allow(clippy::float_cmp)]

use super::*;

fn animation(raw: &str) -> CounterAnimation {
    CounterAnimation::new(CounterTarget::parse(raw).unwrap(), 1800.0)
}

// =============================================================
// Parsing
// =============================================================

#[test]
fn parses_plain_integer() {
    assert_eq!(CounterTarget::parse("42"), Some(CounterTarget { value: 42, plus: false }));
}

#[test]
fn keeps_plus_suffix() {
    assert_eq!(CounterTarget::parse(" 120+ "), Some(CounterTarget { value: 120, plus: true }));
}

#[test]
fn ignores_trailing_text_after_digits() {
    assert_eq!(CounterTarget::parse("15 papers").map(|t| t.value), Some(15));
    assert_eq!(CounterTarget::parse("1,200").map(|t| t.value), Some(1));
}

#[test]
fn accepts_leading_sign() {
    assert_eq!(CounterTarget::parse("-7").map(|t| t.value), Some(-7));
    assert_eq!(CounterTarget::parse("+7").map(|t| t.value), Some(7));
}

#[test]
fn oversized_digit_run_saturates() {
    let target = CounterTarget::parse("99999999999999999999+").unwrap();
    assert_eq!(target, CounterTarget { value: i64::MAX, plus: true });
    assert_eq!(CounterTarget::parse("-99999999999999999999").map(|t| t.value), Some(-i64::MAX));

    let mut counter = CounterAnimation::new(target, 1800.0);
    counter.start(0.0);
    assert_eq!(counter.frame(1800.0).as_deref(), Some("9223372036854775807+"));
}

#[test]
fn rejects_non_numeric_text() {
    assert_eq!(CounterTarget::parse("many"), None);
    assert_eq!(CounterTarget::parse(""), None);
    assert_eq!(CounterTarget::parse("+"), None);
    assert_eq!(CounterTarget::parse("-x"), None);
}

#[test]
fn render_reattaches_suffix() {
    let target = CounterTarget { value: 50, plus: true };
    assert_eq!(target.render(37), "37+");
    assert_eq!(CounterTarget { value: 50, plus: false }.render(37), "37");
}

// =============================================================
// Easing
// =============================================================

#[test]
fn ease_out_cubic_endpoints() {
    assert_eq!(ease_out_cubic(0.0), 0.0);
    assert_eq!(ease_out_cubic(1.0), 1.0);
    assert_eq!(ease_out_cubic(0.5), 0.875);
}

#[test]
fn value_is_monotonic_and_exact_at_end() {
    let anim = animation("250+");
    let mut last = i64::MIN;
    for step in 0..=200 {
        let value = anim.value_at(f64::from(step) * 10.0);
        assert!(value >= last, "value dropped at step {step}: {value} < {last}");
        last = value;
    }
    assert_eq!(anim.value_at(1800.0), 250);
    assert_eq!(anim.value_at(5000.0), 250);
    assert_eq!(anim.value_at(0.0), 0);
}

#[test]
fn progress_is_clamped() {
    let anim = animation("10");
    assert_eq!(anim.progress(-100.0), 0.0);
    assert_eq!(anim.progress(900.0), 0.5);
    assert_eq!(anim.progress(99_999.0), 1.0);
}

// =============================================================
// Frames
// =============================================================

#[test]
fn no_frames_before_start() {
    let mut anim = animation("10");
    assert!(!anim.is_running());
    assert_eq!(anim.frame(100.0), None);
}

#[test]
fn start_is_one_shot() {
    let mut anim = animation("10");
    assert!(anim.start(1000.0));
    assert!(!anim.start(2000.0));
    assert!(anim.is_running());
}

#[test]
fn frames_run_until_duration_then_stop() {
    let mut anim = animation("100+");
    anim.start(1000.0);
    assert_eq!(anim.frame(1000.0).as_deref(), Some("0+"));
    assert_eq!(anim.frame(1900.0).as_deref(), Some("88+"));
    assert!(anim.is_running());
    assert_eq!(anim.frame(2800.0).as_deref(), Some("100+"));
    assert!(!anim.is_running());
    assert_eq!(anim.frame(2900.0), None);
}
