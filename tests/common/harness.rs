//! Search bar fixtures
//!
//! A [`Recorder`] hands out callbacks that append to one shared log, so tests
//! can assert on the exact order the bar talked to its host.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use searchbar::search_bar::{Callbacks, ManualClock, ManualScheduler, SearchBar};
use searchbar::shared::SearchBarConfig;

pub const MS: Duration = Duration::from_millis(1);

/// One host callback invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Text(String),
    Submit,
    Focus,
    Blur,
    Hide,
    Back,
    X,
}

impl Call {
    pub fn cleared() -> Self {
        Call::Text(String::new())
    }
}

#[derive(Debug, Clone, Default)]
pub struct Recorder {
    calls: Rc<RefCell<Vec<Call>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self) -> impl Fn(Call) + 'static {
        let calls = Rc::clone(&self.calls);
        move |call| calls.borrow_mut().push(call)
    }

    /// Every callback except `on_back`, so back presses fall through to hide
    pub fn callbacks(&self) -> Callbacks {
        let text = self.push();
        let submit = self.push();
        let focus = self.push();
        let blur = self.push();
        let hide = self.push();
        let x = self.push();
        Callbacks::new(move |value| text(Call::Text(value.to_string())))
            .on_submit_editing(move || submit(Call::Submit))
            .on_focus(move || focus(Call::Focus))
            .on_blur(move || blur(Call::Blur))
            .on_hide(move || hide(Call::Hide))
            .on_x(move || x(Call::X))
    }

    pub fn callbacks_with_back(&self) -> Callbacks {
        let back = self.push();
        self.callbacks().on_back(move || back(Call::Back))
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, call: &Call) -> usize {
        self.calls.borrow().iter().filter(|c| *c == call).count()
    }

    pub fn reset(&self) {
        self.calls.borrow_mut().clear();
    }
}

/// A bar on a manual clock, with a recorder attached
pub fn manual_bar(config: SearchBarConfig) -> (ManualClock, Recorder, SearchBar<ManualScheduler>) {
    let recorder = Recorder::new();
    let clock = ManualClock::new();
    let bar = SearchBar::with_scheduler(
        config,
        recorder.callbacks(),
        ManualScheduler::new(clock.clone()),
    );
    (clock, recorder, bar)
}
