// Host-side tests for the frame-rate governor state machine.

use plexus_core::{GovernorAction, PerformanceGovernor, Tier};

fn feed(governor: &mut PerformanceGovernor, rate: f32, ticks: usize) -> Vec<GovernorAction> {
    (0..ticks).map(|_| governor.observe(rate)).collect()
}

#[test]
fn healthy_frame_rate_proceeds() {
    let mut g = PerformanceGovernor::new();
    assert!(feed(&mut g, 60.0, 100)
        .iter()
        .all(|a| *a == GovernorAction::Proceed));
    assert_eq!(g.tier(), Tier::Normal);
    assert_eq!(g.state().consecutive_fps_drops, 0);
}

#[test]
fn fifteen_fps_counts_as_a_drop() {
    let mut g = PerformanceGovernor::new();
    assert_eq!(g.observe(15.0), GovernorAction::Hold);
    assert_eq!(g.state().consecutive_fps_drops, 1);
    assert_eq!(g.observe(15.01), GovernorAction::Proceed);
}

#[test]
fn eleventh_low_tick_reduces_density_once() {
    let mut g = PerformanceGovernor::new();
    let actions = feed(&mut g, 10.0, 20);
    let reductions: Vec<usize> = actions
        .iter()
        .enumerate()
        .filter(|(_, a)| **a == GovernorAction::ReduceDensity)
        .map(|(i, _)| i + 1)
        .collect();
    assert_eq!(reductions, vec![11]);
    assert!(actions[..10].iter().all(|a| *a == GovernorAction::Hold));
    assert_eq!(g.tier(), Tier::DegradedDensity);
    assert_eq!(g.state().consecutive_fps_drops, 20);
}

#[test]
fn twenty_first_low_tick_pauses_and_resets_counter() {
    let mut g = PerformanceGovernor::new();
    let actions = feed(&mut g, 10.0, 21);
    let pauses: Vec<usize> = actions
        .iter()
        .enumerate()
        .filter(|(_, a)| **a == GovernorAction::Pause)
        .map(|(i, _)| i + 1)
        .collect();
    assert_eq!(pauses, vec![21]);
    assert_eq!(g.tier(), Tier::Paused);
    assert_eq!(g.state().consecutive_fps_drops, 0);
}

#[test]
fn good_frames_do_not_clear_the_drop_counter() {
    let mut g = PerformanceGovernor::new();
    feed(&mut g, 10.0, 8);
    assert_eq!(g.observe(60.0), GovernorAction::Proceed);
    assert_eq!(g.state().consecutive_fps_drops, 8);
    // Three more isolated drops push past the degrade threshold.
    feed(&mut g, 10.0, 2);
    assert_eq!(g.observe(10.0), GovernorAction::ReduceDensity);
    assert_eq!(g.state().consecutive_fps_above, 0);
}

#[test]
fn resume_returns_to_normal() {
    let mut g = PerformanceGovernor::new();
    feed(&mut g, 5.0, 21);
    assert_eq!(g.tier(), Tier::Paused);
    g.resume();
    assert_eq!(g.tier(), Tier::Normal);
    assert_eq!(g.observe(30.0), GovernorAction::Proceed);
}
