//! The board's three flows: load the list, sign up, unregister.
//!
//! Each flow talks to a `RemoteSource` and returns what the controller
//! should do next. Nothing here touches the DOM or the console; failures
//! are handed back so the caller can log them.

use std::cell::Cell;
use std::rc::Rc;

use crate::api::RemoteSource;
use crate::error::{Action, BoardError};
use crate::message::Message;
use crate::model::SignupRequest;
use crate::view::ListState;

#[derive(Debug, Clone, PartialEq)]
pub struct LoadOutcome {
    pub list: ListState,
    pub failure: Option<BoardError>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WriteOutcome {
    pub message: Message,
    /// Clear the sign-up form fields.
    pub reset_form: bool,
    /// Fetch the activity list again.
    pub reload: bool,
    pub failure: Option<BoardError>,
}

impl WriteOutcome {
    fn failed(action: Action, err: BoardError) -> Self {
        Self {
            message: Message::error(err.notice(action)),
            reset_form: false,
            reload: false,
            failure: Some(err),
        }
    }
}

/// At most one request of a kind at a time. The slot frees when the guard drops.
#[derive(Debug, Clone, Default)]
pub struct InFlight(Rc<Cell<bool>>);

#[derive(Debug)]
pub struct InFlightGuard(Rc<Cell<bool>>);

impl InFlight {
    pub fn try_begin(&self) -> Option<InFlightGuard> {
        if self.0.replace(true) {
            return None;
        }
        Some(InFlightGuard(self.0.clone()))
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

pub async fn load_activities<S: RemoteSource>(source: &S) -> LoadOutcome {
    match source.fetch_activities().await {
        Ok(activities) => LoadOutcome {
            list: ListState::Loaded(activities),
            failure: None,
        },
        Err(err) => LoadOutcome {
            list: ListState::Failed,
            failure: Some(err),
        },
    }
}

pub async fn sign_up_for_activity<S: RemoteSource>(
    source: &S,
    email: &str,
    activity: &str,
) -> WriteOutcome {
    let request = match SignupRequest::from_form(email, activity) {
        Ok(r) => r,
        Err(err) => return WriteOutcome::failed(Action::SignUp, err),
    };

    match source.sign_up(&request).await {
        Ok(confirmation) => WriteOutcome {
            message: Message::success(confirmation),
            reset_form: true,
            reload: true,
            failure: None,
        },
        Err(err) => WriteOutcome::failed(Action::SignUp, err),
    }
}

pub async fn unregister_participant<S: RemoteSource>(
    source: &S,
    activity: &str,
    email: &str,
) -> WriteOutcome {
    // the email comes from the server's own list; trimming it would address someone else
    let request = SignupRequest::for_participant(activity, email);

    match source.unregister(&request).await {
        Ok(confirmation) => WriteOutcome {
            message: Message::success(confirmation),
            reset_form: false,
            reload: true,
            failure: None,
        },
        Err(err) => WriteOutcome::failed(Action::Unregister, err),
    }
}
