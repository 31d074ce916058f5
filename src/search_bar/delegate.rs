//! Input Delegate
//!
//! Routes events from the text input and icon buttons to the host. The
//! search text is owned by the host: the only way the bar changes it is by
//! calling `handle_change_text`.

type TextCallback = Box<dyn FnMut(&str)>;
type Callback = Box<dyn FnMut()>;

/// Host callbacks. Only `handle_change_text` is mandatory.
pub struct Callbacks {
    handle_change_text: TextCallback,
    on_submit_editing: Option<Callback>,
    on_focus: Option<Callback>,
    on_blur: Option<Callback>,
    on_hide: Option<Callback>,
    on_back: Option<Callback>,
    on_x: Option<Callback>,
}

impl Callbacks {
    pub fn new(handle_change_text: impl FnMut(&str) + 'static) -> Self {
        Self {
            handle_change_text: Box::new(handle_change_text),
            on_submit_editing: None,
            on_focus: None,
            on_blur: None,
            on_hide: None,
            on_back: None,
            on_x: None,
        }
    }

    pub fn on_submit_editing(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_submit_editing = Some(Box::new(f));
        self
    }

    pub fn on_focus(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_focus = Some(Box::new(f));
        self
    }

    pub fn on_blur(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_blur = Some(Box::new(f));
        self
    }

    pub fn on_hide(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_hide = Some(Box::new(f));
        self
    }

    /// Replaces the default back behavior, which is to hide the bar
    pub fn on_back(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_back = Some(Box::new(f));
        self
    }

    pub fn on_x(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_x = Some(Box::new(f));
        self
    }
}

impl std::fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Callbacks")
            .field("on_submit_editing", &self.on_submit_editing.is_some())
            .field("on_focus", &self.on_focus.is_some())
            .field("on_blur", &self.on_blur.is_some())
            .field("on_hide", &self.on_hide.is_some())
            .field("on_back", &self.on_back.is_some())
            .field("on_x", &self.on_x.is_some())
            .finish_non_exhaustive()
    }
}

fn fire(callback: &mut Option<Callback>) {
    if let Some(callback) = callback.as_mut() {
        callback();
    }
}

/// Forwards input events to [`Callbacks`]
#[derive(Debug)]
pub struct InputDelegate {
    callbacks: Callbacks,
    clear_on_blur: bool,
}

impl InputDelegate {
    pub fn new(callbacks: Callbacks, clear_on_blur: bool) -> Self {
        Self {
            callbacks,
            clear_on_blur,
        }
    }

    pub fn set_clear_on_blur(&mut self, clear_on_blur: bool) {
        self.clear_on_blur = clear_on_blur;
    }

    pub fn change_text(&mut self, text: &str) {
        (self.callbacks.handle_change_text)(text);
    }

    pub fn clear_input(&mut self) {
        tracing::trace!("Clearing search input");
        self.change_text("");
    }

    pub fn submit(&mut self) {
        fire(&mut self.callbacks.on_submit_editing);
    }

    pub fn focus(&mut self) {
        fire(&mut self.callbacks.on_focus);
    }

    pub fn blur(&mut self) {
        fire(&mut self.callbacks.on_blur);
        if self.clear_on_blur {
            self.clear_input();
        }
    }

    pub fn notify_hide(&mut self) {
        fire(&mut self.callbacks.on_hide);
    }

    /// Clear-button press: clear, then tell the host
    pub fn press_close(&mut self) {
        self.clear_input();
        fire(&mut self.callbacks.on_x);
    }

    /// Back-button press. Returns false when no host handler exists and the
    /// caller should hide the bar itself.
    pub fn press_back(&mut self) -> bool {
        match self.callbacks.on_back.as_mut() {
            Some(on_back) => {
                on_back();
                true
            }
            None => false,
        }
    }
}
