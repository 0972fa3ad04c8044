use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::debug;
use yew::prelude::*;

/// Reveals `target` one character at a time.
#[derive(Clone, Debug, PartialEq)]
pub struct Typewriter {
    target: &'static str,
    shown: usize,
}

pub enum TypewriterAction {
    Tick,
}

impl Typewriter {
    pub fn new(target: &'static str) -> Self {
        Self { target, shown: 0 }
    }

    pub fn text(&self) -> &'static str {
        let end = self
            .target
            .char_indices()
            .nth(self.shown)
            .map_or(self.target.len(), |(i, _)| i);
        &self.target[..end]
    }

    pub fn is_complete(&self) -> bool {
        self.shown >= self.target.chars().count()
    }

    /// Shows one more character. Returns `false` once the text is complete.
    pub fn tick(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.shown += 1;
        true
    }
}

impl Reducible for Typewriter {
    type Action = TypewriterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            TypewriterAction::Tick => {
                if self.is_complete() {
                    return self;
                }
                let mut next = (*self).clone();
                next.tick();
                if next.is_complete() {
                    debug!("typewriter finished \"{}\"", next.target);
                }
                Rc::new(next)
            }
        }
    }
}

/// Types `target` out every `interval_ms` once `active` turns true. The timer
/// is dropped when the text is complete or the component unmounts.
#[hook]
pub fn use_typewriter(target: &'static str, interval_ms: u32, active: bool) -> &'static str {
    let typewriter = use_reducer_eq(|| Typewriter::new(target));
    let complete = typewriter.is_complete();

    {
        let dispatcher = typewriter.dispatcher();
        use_effect_with_deps(
            move |&(active, complete): &(bool, bool)| {
                let interval = (active && !complete).then(|| {
                    Interval::new(interval_ms, move || dispatcher.dispatch(TypewriterAction::Tick))
                });
                move || drop(interval)
            },
            (active, complete),
        );
    }

    typewriter.text()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TYPEWRITER_TARGET;

    #[test]
    fn grows_one_character_per_tick() {
        let mut typewriter = Typewriter::new(TYPEWRITER_TARGET);
        assert_eq!(typewriter.text(), "");

        let expected = TYPEWRITER_TARGET.chars().count();
        for n in 1..=expected {
            assert!(typewriter.tick());
            assert_eq!(typewriter.text().chars().count(), n);
            assert!(TYPEWRITER_TARGET.starts_with(typewriter.text()));
        }
        assert_eq!(typewriter.text(), "INVISTA EM CULTURA");
        assert!(typewriter.is_complete());
    }

    #[test]
    fn stops_growing_once_complete() {
        let mut typewriter = Typewriter::new(TYPEWRITER_TARGET);
        while typewriter.tick() {}
        for _ in 0..5 {
            assert!(!typewriter.tick());
            assert_eq!(typewriter.text(), TYPEWRITER_TARGET);
        }
    }

    #[test]
    fn reducer_keeps_the_same_state_when_complete() {
        let mut done = Typewriter::new("OK");
        while done.tick() {}
        let done = Rc::new(done);
        let next = done.clone().reduce(TypewriterAction::Tick);
        assert!(Rc::ptr_eq(&done, &next));
    }

    #[test]
    fn never_splits_a_multibyte_character() {
        let mut typewriter = Typewriter::new("ORÇAMENTO");
        for _ in 0..3 {
            typewriter.tick();
        }
        assert_eq!(typewriter.text(), "ORÇ");
    }
}
