use std::collections::HashSet;

use lfsr::{
    polynomial::{known_taps, tabulated_widths},
    register::{fibonacci_step, galois_step},
    utils::bitops::reverse_bits,
    ConfigError, LfsrConfig, RunOutcome, RunSummary, SequenceDriver, ShiftDirection, Step,
    StepSink, Variant,
};

/// Records visited states in a bitset with one bit per possible state and
/// fails on a repeat. A 31-bit register needs 256 MiB.
struct StateTracker {
    seen: Vec<u64>,
    distinct: u64,
    finish: Option<RunSummary<u64>>,
}

impl StateTracker {
    fn new(width: u32) -> Self {
        let words = ((1u64 << width) as usize).div_ceil(64);
        Self {
            seen: vec![0; words],
            distinct: 0,
            finish: None,
        }
    }
}

impl StepSink<u64> for StateTracker {
    fn on_step(&mut self, step: &Step<u64>) {
        assert_ne!(step.state, 0);
        let slot = &mut self.seen[(step.state / 64) as usize];
        let bit = 1u64 << (step.state % 64);
        assert_eq!(*slot & bit, 0, "state {:#x} repeated at step {}", step.state, step.index);
        *slot |= bit;
        self.distinct += 1;
    }

    fn on_finish(&mut self, summary: &RunSummary<u64>) {
        assert!(self.finish.is_none(), "finish reported twice");
        self.finish = Some(*summary);
    }
}

fn check_full_period(width: u32, variant: Variant) {
    let config = LfsrConfig::<u64>::from_width(width).with_variant(variant);
    let mut tracker = StateTracker::new(width);
    let summary = SequenceDriver::new(&config)
        .unwrap()
        .run(&mut tracker)
        .unwrap_or_else(|err| panic!("width={} {}: {}", width, variant, err));

    let period = (1u64 << width) - 1;
    assert_eq!(summary.outcome, RunOutcome::Completed);
    assert_eq!(summary.steps, period, "width={} {}", width, variant);
    assert_eq!(summary.state, period);
    assert_eq!(tracker.distinct, period);
    assert_eq!(tracker.finish, Some(summary));
}

#[test]
fn test_tabulated_widths_fibonacci() {
    for width in 2..=20 {
        check_full_period(width, Variant::Fibonacci);
    }
}

#[test]
fn test_tabulated_widths_galois() {
    for width in 2..=20 {
        check_full_period(width, Variant::Galois);
    }
}

#[test]
#[ignore = "walks up to 2^31 states, run with --ignored"]
fn test_wide_tabulated_widths() {
    for (width, _) in tabulated_widths().filter(|(w, _)| *w > 20) {
        check_full_period(width, Variant::Fibonacci);
        check_full_period(width, Variant::Galois);
    }
}

fn one_period(width: u32, variant: Variant, taps: u64) -> Vec<bool> {
    let start = (1u64 << width) - 1;
    let mut state = start;
    let mut outputs = Vec::new();
    loop {
        let output = match variant {
            Variant::Fibonacci => fibonacci_step(width, ShiftDirection::Right, taps, &mut state),
            Variant::Galois => galois_step(width, ShiftDirection::Right, taps, &mut state),
        };
        outputs.push(output);
        if state == start {
            return outputs;
        }
    }
}

fn is_rotation(a: &[bool], b: &[bool]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let doubled: Vec<bool> = a.iter().chain(a.iter()).copied().collect();
    doubled.windows(b.len()).any(|window| window == b)
}

#[test]
fn test_galois_output_is_rotation_of_fibonacci() {
    // One period of the Galois register with the mirrored mask is a cyclic
    // shift of the Fibonacci output: both satisfy the same linear recurrence.
    // The shift amount depends on the width.
    for width in 2..=10 {
        let taps = known_taps(width).unwrap();
        let fibonacci = one_period(width, Variant::Fibonacci, taps);
        let galois = one_period(width, Variant::Galois, reverse_bits(width, taps));
        assert_eq!(fibonacci.len() as u64, (1u64 << width) - 1);
        assert!(
            is_rotation(&fibonacci, &galois),
            "width={}: galois output is not a rotation of fibonacci",
            width
        );
    }
}

#[test]
fn test_galois_output_satisfies_fibonacci_recurrence() {
    // out[k + n] = XOR of out[k + i] for every tap i of the Fibonacci mask
    for width in [5u32, 8, 12, 16] {
        let taps = known_taps(width).unwrap();
        let galois = one_period(width, Variant::Galois, reverse_bits(width, taps));
        let n = width as usize;
        for k in 0..galois.len() - n {
            let feedback = (0..n)
                .filter(|i| (taps >> i) & 1 == 1)
                .fold(false, |acc, i| acc ^ galois[k + i]);
            assert_eq!(galois[k + n], feedback, "width={} k={}", width, k);
        }
    }
}

#[test]
fn test_scenario_width4_explicit_taps() {
    let config = LfsrConfig::<u64>::from_width(4)
        .with_taps(0x3)
        .with_start(0xf)
        .with_shift(ShiftDirection::Right);
    let mut steps: Vec<Step<u64>> = Vec::new();
    let summary = SequenceDriver::new(&config).unwrap().run(&mut steps).unwrap();
    assert_eq!(summary.steps, 15);
    assert_eq!(steps[14].state, 0xf);
    assert!(steps.iter().all(|s| s.state != 0));
    let bits: String = steps.iter().map(|s| if s.output { '1' } else { '0' }).collect();
    assert_eq!(bits, "111100010011010");
}

#[test]
fn test_scenario_width8_galois_default_taps() {
    let config = LfsrConfig::<u64>::from_width(8)
        .with_variant(Variant::Galois)
        .with_start(0xff)
        .with_error_check(true);
    let summary = SequenceDriver::new(&config)
        .unwrap()
        .run(&mut Vec::<Step<u64>>::new())
        .unwrap();
    assert_eq!(summary.steps, 255);
}

#[test]
fn test_scenario_zero_taps_uses_table() {
    let driver = SequenceDriver::new(&LfsrConfig::<u64>::from_width(5).with_taps(0)).unwrap();
    assert_eq!(driver.resolved().taps, 0x5);
}

#[test]
fn test_scenario_untabulated_width() {
    let result = SequenceDriver::new(&LfsrConfig::<u64>::from_width(25));
    assert_eq!(
        result.err(),
        Some(ConfigError::NoTapsAvailable { width: 25 })
    );
}

#[test]
fn test_scenario_step_limit() {
    let config = LfsrConfig::<u64>::from_width(4)
        .with_taps(0x3)
        .with_start(0x1)
        .with_step_limit(3);
    let mut steps: Vec<Step<u64>> = Vec::new();
    let summary = SequenceDriver::new(&config).unwrap().run(&mut steps).unwrap();
    assert_eq!(summary.outcome, RunOutcome::Completed);
    assert_eq!(summary.steps, 3);
    let outputs: Vec<bool> = steps.iter().map(|s| s.output).collect();
    assert_eq!(outputs, vec![true, false, false]);
}

#[test]
fn test_narrow_word_full_width() {
    // an 8-bit register stored in a u8 exercises the width == W::BITS edge
    let config = LfsrConfig::<u8>::from_width(8);
    let mut steps: Vec<Step<u8>> = Vec::new();
    let summary = SequenceDriver::new(&config).unwrap().run(&mut steps).unwrap();
    assert_eq!(summary.steps, 255);
    let distinct: HashSet<u8> = steps.iter().map(|s| s.state).collect();
    assert_eq!(distinct.len(), 255);
}
