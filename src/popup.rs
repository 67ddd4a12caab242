//! Popup Manager
//!
//! At most one modal is active at a time. The dimming overlay and the page
//! scroll lock follow from whether any modal is active.

/// Mutually exclusive modals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modal {
    Cart,
    Checkout,
    Message,
    ProductDetail,
    Auth,
}

impl Modal {
    pub const ALL: [Modal; 5] = [
        Modal::Cart,
        Modal::Checkout,
        Modal::Message,
        Modal::ProductDetail,
        Modal::Auth,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageKind {
    #[default]
    Success,
    Error,
}

impl MessageKind {
    pub fn class(&self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            MessageKind::Success => "fa-solid fa-circle-check",
            MessageKind::Error => "fa-solid fa-circle-exclamation",
        }
    }
}

/// Content of the message popup
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Message {
    pub kind: MessageKind,
    pub title: String,
    pub text: String,
}

pub const ERROR_TITLE: &str = "Error";
pub const SUCCESS_TITLE: &str = "Thank you for your order";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PopupState {
    active: Option<Modal>,
    message: Message,
}

impl PopupState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate `modal`, deactivating every other one
    pub fn open(&mut self, modal: Modal) {
        self.active = Some(modal);
    }

    pub fn close_all(&mut self) {
        self.active = None;
    }

    pub fn active(&self) -> Option<Modal> {
        self.active
    }

    pub fn is_open(&self, modal: Modal) -> bool {
        self.active == Some(modal)
    }

    /// Overlay and scroll lock
    pub fn overlay_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn message(&self) -> &Message {
        &self.message
    }

    pub fn show_message(&mut self, kind: MessageKind, title: &str, text: &str) {
        self.message = Message {
            kind,
            title: title.to_string(),
            text: text.to_string(),
        };
        self.open(Modal::Message);
    }

    pub fn show_error(&mut self, text: &str) {
        self.show_message(MessageKind::Error, ERROR_TITLE, text);
    }

    pub fn show_success(&mut self, text: &str) {
        self.show_message(MessageKind::Success, SUCCESS_TITLE, text);
    }
}
