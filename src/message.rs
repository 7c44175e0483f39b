//! Message region: transient success/error feedback.
//!
//! Hidden -> Visible(n) on `Show`, Visible(n) -> Hidden when the timer for
//! generation n fires. A newer message bumps the generation, so an expiry
//! left over from an older message is ignored.

use std::rc::Rc;

use yew::prelude::*;

pub const MESSAGE_TTL_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    pub fn class(self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub kind: MessageKind,
}

impl Message {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Error,
        }
    }
}

pub enum MessageAction {
    Show(Message),
    Expire(u64),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageState {
    current: Option<Message>,
    generation: u64,
}

impl MessageState {
    pub fn visible(&self) -> Option<&Message> {
        self.current.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Reducible for MessageState {
    type Action = MessageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            MessageAction::Show(message) => Rc::new(MessageState {
                current: Some(message),
                generation: self.generation + 1,
            }),
            MessageAction::Expire(generation) if generation == self.generation => {
                Rc::new(MessageState {
                    current: None,
                    generation: self.generation,
                })
            }
            MessageAction::Expire(_) => self,
        }
    }
}

pub fn message_view(state: &MessageState) -> Html {
    match state.visible() {
        Some(m) => html! {
            <div id="message" class={classes!("message", m.kind.class())} role="status">
                { m.text.clone() }
            </div>
        },
        None => html! { <div id="message" class="message hidden"></div> },
    }
}
