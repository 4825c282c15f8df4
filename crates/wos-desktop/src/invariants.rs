//! Runtime-checkable window manager invariants
//!
//! These hold between any two public calls on [`WindowManager`]. They are
//! used by unit and property tests, and a host may assert them in debug
//! builds.
//!
//! # Invariants
//!
//! 1. **Single Focus**: at most one window is active
//! 2. **Distinct Stacking**: no two windows share a z-index
//! 3. **Counter Bound**: every z-index lies in `(base, counter]`
//! 4. **Restore Snapshot**: a window has a restore geometry iff it is maximized
//! 5. **Hidden Inactive**: a minimized window is never the active one

use std::collections::HashSet;

use crate::window::{WindowManager, WindowState};

/// An invariant violation with details
#[derive(Clone, Debug)]
pub struct InvariantViolation {
    /// Name of the violated invariant
    pub invariant: &'static str,
    /// Description of what went wrong
    pub description: String,
}

/// Check all window manager invariants.
///
/// Returns a list of violations (empty if all invariants hold).
pub fn check_all_invariants(wm: &WindowManager) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    violations.extend(check_single_focus(wm));
    violations.extend(check_distinct_stacking(wm));
    violations.extend(check_counter_bound(wm));
    violations.extend(check_restore_snapshot(wm));
    violations.extend(check_hidden_inactive(wm));

    violations
}

/// Invariant 1: at most one window is active
fn check_single_focus(wm: &WindowManager) -> Vec<InvariantViolation> {
    let active: Vec<&str> = wm.all_windows().filter(|w| w.is_active()).map(|w| w.id()).collect();
    if active.len() <= 1 {
        return Vec::new();
    }
    vec![InvariantViolation {
        invariant: "single_focus",
        description: format!("{} windows are active: {:?}", active.len(), active),
    }]
}

/// Invariant 2: no two windows share a z-index
fn check_distinct_stacking(wm: &WindowManager) -> Vec<InvariantViolation> {
    let mut seen = HashSet::new();
    let mut violations = Vec::new();

    for window in wm.windows_by_z() {
        if !seen.insert(window.z_index()) {
            violations.push(InvariantViolation {
                invariant: "distinct_stacking",
                description: format!(
                    "window {} shares z-index {}",
                    window.id(),
                    window.z_index()
                ),
            });
        }
    }

    violations
}

/// Invariant 3: every z-index lies in `(base, counter]`
fn check_counter_bound(wm: &WindowManager) -> Vec<InvariantViolation> {
    let base = wm.base_z_index();
    let counter = wm.z_counter();

    wm.all_windows()
        .filter(|w| w.z_index() <= base || w.z_index() > counter)
        .map(|w| InvariantViolation {
            invariant: "counter_bound",
            description: format!(
                "window {} has z-index {} outside ({}, {}]",
                w.id(),
                w.z_index(),
                base,
                counter
            ),
        })
        .collect()
}

/// Invariant 4: restore geometry present iff maximized
fn check_restore_snapshot(wm: &WindowManager) -> Vec<InvariantViolation> {
    wm.all_windows()
        .filter(|w| w.restore_geometry().is_some() != (w.state() == WindowState::Maximized))
        .map(|w| InvariantViolation {
            invariant: "restore_snapshot",
            description: format!(
                "window {} is {:?} with restore geometry {:?}",
                w.id(),
                w.state(),
                w.restore_geometry()
            ),
        })
        .collect()
}

/// Invariant 5: minimized windows are never active
fn check_hidden_inactive(wm: &WindowManager) -> Vec<InvariantViolation> {
    wm.all_windows()
        .filter(|w| w.state() == WindowState::Minimized && w.is_active())
        .map(|w| InvariantViolation {
            invariant: "hidden_inactive",
            description: format!("minimized window {} is active", w.id()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Rect, Size};
    use crate::window::{WindowContent, WindowOptions};

    const DESKTOP: Size = Size::new(800.0, 600.0);

    fn assert_clean(wm: &WindowManager) {
        let violations = check_all_invariants(wm);
        assert!(violations.is_empty(), "violations: {:?}", violations);
    }

    #[test]
    fn test_fresh_manager_is_clean() {
        assert_clean(&WindowManager::new(DESKTOP));
    }

    #[test]
    fn test_lifecycle_stays_clean() {
        let mut wm = WindowManager::new(DESKTOP);
        for id in ["a", "b", "c"] {
            wm.create_window(id, id, WindowContent::Empty, None).unwrap();
            assert_clean(&wm);
        }
        wm.focus("a");
        assert_clean(&wm);
        wm.toggle_maximize("b");
        assert_clean(&wm);
        wm.toggle_minimize("b");
        assert_clean(&wm);
        wm.toggle_minimize("b");
        assert_clean(&wm);
        wm.close("c");
        assert_clean(&wm);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Clone, Debug)]
        enum Op {
            Create(u8),
            Focus(u8),
            Move(u8, f32, f32),
            Maximize(u8),
            Minimize(u8),
            Resize(u8, f32, f32),
            Close(u8),
        }

        fn op() -> impl Strategy<Value = Op> {
            let id = 0u8..5;
            let coord = -2000.0f32..2000.0;
            prop_oneof![
                id.clone().prop_map(Op::Create),
                id.clone().prop_map(Op::Focus),
                (id.clone(), coord.clone(), coord.clone()).prop_map(|(i, x, y)| Op::Move(i, x, y)),
                id.clone().prop_map(Op::Maximize),
                id.clone().prop_map(Op::Minimize),
                (id.clone(), 0.0f32..3000.0, 0.0f32..3000.0).prop_map(|(i, w, h)| Op::Resize(i, w, h)),
                id.prop_map(Op::Close),
            ]
        }

        fn name(i: u8) -> String {
            format!("w{}", i)
        }

        fn apply(wm: &mut WindowManager, op: &Op) {
            match op {
                Op::Create(i) => {
                    let _ = wm.create_window(name(*i), "t", WindowContent::Empty, None);
                }
                Op::Focus(i) => wm.focus(&name(*i)),
                Op::Move(i, x, y) => wm.move_to(&name(*i), *x, *y),
                Op::Maximize(i) => wm.toggle_maximize(&name(*i)),
                Op::Minimize(i) => wm.toggle_minimize(&name(*i)),
                Op::Resize(i, w, h) => wm.resize(&name(*i), *w, *h),
                Op::Close(i) => wm.close(&name(*i)),
            }
        }

        proptest! {
            /// Any sequence of operations leaves every invariant intact
            #[test]
            fn invariants_hold_for_any_sequence(ops in prop::collection::vec(op(), 0..60)) {
                let mut wm = WindowManager::new(DESKTOP);
                for op in &ops {
                    apply(&mut wm, op);
                    let violations = check_all_invariants(&wm);
                    prop_assert!(violations.is_empty(), "after {:?}: {:?}", op, violations);
                }
            }

            /// Collection size equals the number of distinct ids created
            #[test]
            fn distinct_creates_all_succeed(ids in prop::collection::vec(0u8..20, 0..40)) {
                let mut wm = WindowManager::new(DESKTOP);
                let mut distinct = HashSet::new();
                for i in &ids {
                    let result = wm.create_window(name(*i), "t", WindowContent::Empty, None).is_ok();
                    prop_assert_eq!(result, distinct.insert(*i));
                }
                prop_assert_eq!(wm.count(), distinct.len());
            }

            /// Focus leaves exactly one active window, strictly on top
            #[test]
            fn focus_is_exclusive_and_topmost(count in 1u8..8, target in 0u8..8) {
                let mut wm = WindowManager::new(DESKTOP);
                for i in 0..count {
                    wm.create_window(name(i), "t", WindowContent::Empty, None).unwrap();
                }
                let target = name(target % count);
                wm.focus(&target);

                let active: Vec<&str> = wm.all_windows().filter(|w| w.is_active()).map(|w| w.id()).collect();
                prop_assert_eq!(active, vec![target.as_str()]);
                let top = wm.get(&target).unwrap().z_index();
                prop_assert!(wm.all_windows().filter(|w| w.id() != target).all(|w| w.z_index() < top));
            }

            /// Moves never leave the desktop, for any input coordinates
            #[test]
            fn move_stays_inside(
                x in prop::num::f32::ANY,
                y in prop::num::f32::ANY,
                w in 10.0f32..1200.0,
                h in 10.0f32..900.0,
            ) {
                let mut wm = WindowManager::new(DESKTOP);
                wm.create_window("w", "t", WindowContent::Empty, Some(WindowOptions::at(50.0, 50.0, w, h))).unwrap();
                wm.move_to("w", x, y);

                let g = wm.get("w").unwrap().geometry();
                prop_assert!(g.x >= 0.0 && g.y >= 0.0);
                if w <= DESKTOP.width {
                    prop_assert!(g.right() <= DESKTOP.width);
                }
                if h <= DESKTOP.height {
                    prop_assert!(g.bottom() <= DESKTOP.height);
                }
            }

            /// Maximize twice restores the exact prior geometry
            #[test]
            fn maximize_round_trip_exact(
                x in 0.0f32..400.0,
                y in 0.0f32..300.0,
                w in 200.0f32..400.0,
                h in 150.0f32..300.0,
            ) {
                let mut wm = WindowManager::new(DESKTOP);
                wm.create_window("w", "t", WindowContent::Empty, Some(WindowOptions::at(x, y, w, h))).unwrap();
                wm.toggle_maximize("w");
                wm.toggle_maximize("w");
                prop_assert_eq!(wm.get("w").unwrap().geometry(), Rect::new(x, y, w, h));
            }
        }
    }
}
