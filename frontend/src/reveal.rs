//! Scroll-triggered entrance transitions.
//!
//! Every section owns one [`RevealController`] through [`use_reveal`]. The
//! controller starts hidden, flips to revealed the first time the section
//! crosses its intersection threshold, and stops observing right away. The
//! browser subscription is released exactly once, either on reveal or when
//! the section unmounts.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::error::DomError;

/// Browsers report the ratio at the crossing with some rounding.
const RATIO_TOLERANCE: f64 = 1e-3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Revealed,
}

/// One intersection report for the observed element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealSample {
    pub intersecting: bool,
    pub ratio: f64,
}

impl RevealSample {
    pub fn meets(&self, threshold: f64) -> bool {
        self.intersecting && self.ratio + RATIO_TOLERANCE >= threshold
    }
}

impl From<&IntersectionObserverEntry> for RevealSample {
    fn from(entry: &IntersectionObserverEntry) -> Self {
        Self {
            intersecting: entry.is_intersecting(),
            ratio: entry.intersection_ratio(),
        }
    }
}

/// A live viewport observation that can be stopped.
#[cfg_attr(test, mockall::automock)]
pub trait Subscription {
    fn release(&mut self);
}

pub struct RevealController<S: Subscription> {
    threshold: f64,
    state: RevealState,
    subscription: Option<S>,
    observing: bool,
}

impl<S: Subscription> RevealController<S> {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            state: RevealState::Hidden,
            subscription: None,
            observing: false,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == RevealState::Revealed
    }

    #[cfg(test)]
    pub fn is_observing(&self) -> bool {
        self.observing
    }

    /// Takes ownership of the subscription. Only the first one is kept; any
    /// later offer is released on the spot.
    pub fn attach(&mut self, mut subscription: S) -> bool {
        if self.subscription.is_some() || self.is_visible() {
            subscription.release();
            return false;
        }
        self.subscription = Some(subscription);
        self.observing = true;
        true
    }

    /// Feeds one intersection report. Returns `true` only on the call that
    /// reveals the section.
    pub fn observe(&mut self, sample: RevealSample) -> bool {
        if !self.observing || !sample.meets(self.threshold) {
            return false;
        }
        self.state = RevealState::Revealed;
        self.stop();
        true
    }

    fn stop(&mut self) {
        if !self.observing {
            return;
        }
        self.observing = false;
        if let Some(subscription) = self.subscription.as_mut() {
            subscription.release();
        }
    }
}

impl<S: Subscription> Drop for RevealController<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Browser side of the observation. The callback closure lives as long as the
/// observer; it is only dropped together with the controller, never from
/// inside its own invocation.
pub struct ObserverSubscription {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Subscription for ObserverSubscription {
    fn release(&mut self) {
        debug!("intersection observer released");
        self.observer.disconnect();
    }
}

/// Feeds a batch of reports to the controller behind `weak`. A callback that
/// fires after the section unmounted finds the controller gone and does
/// nothing, so it can never flip the flag of a released observation.
fn deliver<S, I>(weak: &Weak<RefCell<RevealController<S>>>, samples: I) -> bool
where
    S: Subscription,
    I: IntoIterator<Item = RevealSample>,
{
    let Some(controller) = weak.upgrade() else {
        return false;
    };
    let mut controller = controller.borrow_mut();
    samples.into_iter().any(|sample| controller.observe(sample))
}

/// Keeps a section's observation alive. Dropping it releases the observer.
pub struct RevealWatch {
    _controller: Rc<RefCell<RevealController<ObserverSubscription>>>,
}

pub fn watch<F>(element: &Element, threshold: f64, on_reveal: F) -> Result<RevealWatch, DomError>
where
    F: Fn() + 'static,
{
    let controller = Rc::new(RefCell::new(RevealController::new(threshold)));

    let weak = Rc::downgrade(&controller);
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, _observer: IntersectionObserver| {
            let samples = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| RevealSample::from(&entry));
            if deliver(&weak, samples) {
                on_reveal();
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| DomError::js("create intersection observer", e))?;
    observer.observe(element);

    controller.borrow_mut().attach(ObserverSubscription {
        observer,
        _callback: callback,
    });

    Ok(RevealWatch {
        _controller: controller,
    })
}

/// Returns whether the element behind `node` has been revealed.
///
/// The observer starts after the first render and only if the node is
/// attached. It is released on unmount whether or not the reveal happened.
#[hook]
pub fn use_reveal(node: NodeRef, threshold: f64) -> bool {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observation = node.cast::<Element>().and_then(|element| {
                    let id = element.id();
                    let on_reveal = {
                        let id = id.clone();
                        move || {
                            debug!("revealed #{}", id);
                            visible.set(true);
                        }
                    };
                    match watch(&element, threshold, on_reveal) {
                        Ok(observation) => {
                            debug!("observing #{} at threshold {}", id, threshold);
                            Some(observation)
                        }
                        Err(e) => {
                            warn!("reveal for #{} disabled: {}", id, e);
                            None
                        }
                    }
                });
                move || drop(observation)
            },
            node,
        );
    }

    *visible
}

/// How an element moves into place when revealed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entrance {
    Rise,
    RiseFar,
    SlideLeft,
    Fade,
    Grow,
}

impl Entrance {
    const fn modifier(self) -> &'static str {
        match self {
            Entrance::Rise => "rise",
            Entrance::RiseFar => "rise-far",
            Entrance::SlideLeft => "slide-left",
            Entrance::Fade => "fade",
            Entrance::Grow => "grow",
        }
    }

    pub fn classes(self, visible: bool) -> Classes {
        classes!("reveal", self.modifier(), visible.then_some("revealed"))
    }
}

/// Per-item transition delays: `base + index * step` milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stagger {
    pub base_ms: u32,
    pub step_ms: u32,
}

impl Stagger {
    pub const fn new(base_ms: u32, step_ms: u32) -> Self {
        Self { base_ms, step_ms }
    }

    pub const fn delay_ms(&self, index: usize) -> u32 {
        self.base_ms + index as u32 * self.step_ms
    }

    pub fn style(&self, index: usize) -> String {
        delay_style(self.delay_ms(index))
    }
}

pub fn delay_style(delay_ms: u32) -> String {
    format!("transition-delay: {}ms;", delay_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(intersecting: bool, ratio: f64) -> RevealSample {
        RevealSample { intersecting, ratio }
    }

    fn released_once() -> MockSubscription {
        let mut sub = MockSubscription::new();
        sub.expect_release().times(1).return_const(());
        sub
    }

    #[test]
    fn starts_hidden_and_reveals_once() {
        let mut controller = RevealController::new(0.2);
        assert_eq!(controller.state(), RevealState::Hidden);
        assert!(controller.attach(released_once()));

        assert!(!controller.observe(sample(true, 0.05)));
        assert!(!controller.is_visible());

        assert!(controller.observe(sample(true, 0.25)));
        assert!(controller.is_visible());
        assert!(!controller.is_observing());

        // Leaving and re-entering the viewport changes nothing.
        assert!(!controller.observe(sample(false, 0.0)));
        assert!(!controller.observe(sample(true, 1.0)));
        assert!(controller.is_visible());
    }

    #[test]
    fn stays_hidden_without_a_qualifying_intersection() {
        let mut controller = RevealController::new(0.1);
        controller.attach(released_once());
        for ratio in [0.0, 0.01, 0.05, 0.098] {
            assert!(!controller.observe(sample(true, ratio)));
        }
        assert!(!controller.observe(sample(false, 0.5)));
        assert_eq!(controller.state(), RevealState::Hidden);
    }

    #[test]
    fn threshold_is_inclusive_within_rounding() {
        assert!(sample(true, 0.1).meets(0.1));
        assert!(sample(true, 0.0999).meets(0.1));
        assert!(!sample(true, 0.09).meets(0.1));
        assert!(!sample(false, 0.1).meets(0.1));
    }

    #[test]
    fn unmount_before_reveal_releases_once() {
        let mut controller = RevealController::new(0.1);
        controller.attach(released_once());
        drop(controller);
    }

    #[test]
    fn unmount_after_reveal_does_not_release_again() {
        let mut controller = RevealController::new(0.1);
        controller.attach(released_once());
        assert!(controller.observe(sample(true, 0.5)));
        drop(controller);
    }

    #[test]
    fn never_attached_never_reveals() {
        let mut controller: RevealController<MockSubscription> = RevealController::new(0.1);
        assert!(!controller.observe(sample(true, 1.0)));
        assert!(!controller.is_visible());
    }

    #[test]
    fn second_subscription_is_refused_and_released() {
        let mut controller = RevealController::new(0.1);
        assert!(controller.attach(released_once()));
        assert!(!controller.attach(released_once()));
    }

    #[test]
    fn repeated_mount_cycles_release_every_subscription() {
        for _ in 0..50 {
            let mut controller = RevealController::new(0.1);
            controller.attach(released_once());
        }
    }

    #[test]
    fn late_callback_after_unmount_is_ignored() {
        let controller = Rc::new(RefCell::new(RevealController::new(0.1)));
        controller.borrow_mut().attach(released_once());
        let weak = Rc::downgrade(&controller);

        assert!(!deliver(&weak, [sample(true, 0.05)]));
        drop(controller);
        assert!(!deliver(&weak, [sample(true, 1.0)]));
    }

    #[test]
    fn callback_batch_reveals_on_the_first_qualifying_report() {
        let controller = Rc::new(RefCell::new(RevealController::new(0.2)));
        controller.borrow_mut().attach(released_once());
        let weak = Rc::downgrade(&controller);

        assert!(deliver(&weak, [sample(false, 0.0), sample(true, 0.3), sample(true, 0.9)]));
        assert!(controller.borrow().is_visible());
        assert!(!deliver(&weak, [sample(true, 1.0)]));
    }

    #[test]
    fn concept_threshold_waits_for_a_fifth_of_the_section() {
        use crate::config::{CONCEPT_REVEAL_THRESHOLD, REVEAL_THRESHOLD};
        let partial = sample(true, 0.15);
        assert!(partial.meets(REVEAL_THRESHOLD));
        assert!(!partial.meets(CONCEPT_REVEAL_THRESHOLD));
        assert!(sample(true, 0.2).meets(CONCEPT_REVEAL_THRESHOLD));
    }

    #[test]
    fn stagger_is_base_plus_index_times_step() {
        let stagger = Stagger::new(400, 100);
        for n in 0..12 {
            assert_eq!(stagger.delay_ms(n), 400 + n as u32 * 100);
        }
        assert_eq!(Stagger::new(0, 200).delay_ms(0), 0);
        assert_eq!(Stagger::new(300, 150).style(2), "transition-delay: 600ms;");
    }

    #[test]
    fn entrance_classes_follow_visibility() {
        assert_eq!(Entrance::Rise.classes(false).to_string(), "reveal rise");
        assert_eq!(Entrance::Rise.classes(true).to_string(), "reveal rise revealed");
        assert_eq!(Entrance::SlideLeft.classes(true).to_string(), "reveal slide-left revealed");
    }
}
