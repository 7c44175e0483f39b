use yew::prelude::*;

use crate::error::LOAD_FAILED;
use crate::model::{Activities, Activity};

pub const LOADING_TEXT: &str = "Loading activities...";
pub const EMPTY_TEXT: &str = "No activities available.";
pub const NO_PARTICIPANTS: &str = "No participants yet";
pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";

/// What the activity list region currently holds. Replaced wholesale on each load.
#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    Loading,
    Failed,
    Loaded(Activities),
}

impl ListState {
    /// The single line shown instead of cards, if any.
    pub fn status_text(&self) -> Option<&'static str> {
        match self {
            ListState::Loading => Some(LOADING_TEXT),
            ListState::Failed => Some(LOAD_FAILED),
            ListState::Loaded(list) if list.is_empty() => Some(EMPTY_TEXT),
            ListState::Loaded(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub capacity: String,
    pub spots_left: u32,
    pub participants: Vec<String>,
}

impl From<&Activity> for ActivityCard {
    fn from(a: &Activity) -> Self {
        Self {
            name: a.name.clone(),
            description: a.description.clone(),
            schedule: a.schedule.clone(),
            capacity: a.capacity(),
            spots_left: a.spots_left(),
            participants: a.participants.clone(),
        }
    }
}

pub fn activity_cards(list: &Activities) -> Vec<ActivityCard> {
    list.iter().map(ActivityCard::from).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Placeholder (empty value) first, then one option per activity name.
pub fn select_options(list: &Activities) -> Vec<SelectOption> {
    let mut out = Vec::with_capacity(list.len() + 1);
    out.push(SelectOption {
        value: String::new(),
        label: SELECT_PLACEHOLDER.to_string(),
    });
    out.extend(list.names().map(|name| SelectOption {
        value: name.to_string(),
        label: name.to_string(),
    }));
    out
}

// ---------- rendering ----------
//
// Every server-supplied string goes in as a text node, so Yew escapes it.

/// Click handler for one participant row: emits `(activity, email)` as listed.
pub fn remove_handler<E: 'static>(
    on_unregister: &Callback<(String, String)>,
    activity: &str,
    email: &str,
) -> Callback<E> {
    let on_unregister = on_unregister.clone();
    let row = (activity.to_string(), email.to_string());
    Callback::from(move |_: E| on_unregister.emit(row.clone()))
}

fn card_view(card: &ActivityCard, on_unregister: &Callback<(String, String)>, busy: bool) -> Html {
    let participants = if card.participants.is_empty() {
        html! { <p class="no-participants">{ NO_PARTICIPANTS }</p> }
    } else {
        html! {
          <ul class="participants-list">
            { for card.participants.iter().map(|email| {
                let on_click = remove_handler::<MouseEvent>(on_unregister, &card.name, email);
                html! {
                  <li>
                    <span class="participant-email">{ email.clone() }</span>
                    <button class="delete-btn" title="Unregister" disabled={busy} onclick={on_click}>{ "✕" }</button>
                  </li>
                }
            }) }
          </ul>
        }
    };

    html! {
      <div class="activity-card">
        <h4>{ card.name.clone() }</h4>
        <p>{ card.description.clone() }</p>
        <p><strong>{ "Schedule: " }</strong>{ card.schedule.clone() }</p>
        <p>
          <strong>{ "Participants: " }</strong>
          <span class="capacity">{ card.capacity.clone() }</span>
          <span class="tag">{ format!("{} spots left", card.spots_left) }</span>
        </p>
        <div class="participants-section">
          <h5>{ "Signed up" }</h5>
          { participants }
        </div>
      </div>
    }
}

/// `busy` disables every remove button while an unregister is pending.
pub fn activity_list_view(
    state: &ListState,
    on_unregister: &Callback<(String, String)>,
    busy: bool,
) -> Html {
    if let Some(text) = state.status_text() {
        let cls = if *state == ListState::Failed { "status error" } else { "status" };
        return html! { <div id="activities-list"><p class={cls}>{ text }</p></div> };
    }

    let cards = match state {
        ListState::Loaded(list) => activity_cards(list),
        _ => Vec::new(),
    };

    html! {
      <div id="activities-list">
        { for cards.iter().map(|c| card_view(c, on_unregister, busy)) }
      </div>
    }
}

pub fn select_options_view(options: &[SelectOption], selected: &str) -> Html {
    html! {
      <>
        { for options.iter().map(|o| html! {
            <option value={o.value.clone()} selected={o.value == selected}>{ o.label.clone() }</option>
        }) }
      </>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn activity(name: &str, participants: &[&str], max: u32) -> Activity {
        Activity {
            name: name.into(),
            description: format!("{name} description"),
            schedule: "Fri 3pm".into(),
            participants: participants.iter().map(|s| s.to_string()).collect(),
            max_participants: max,
        }
    }

    fn sample() -> Activities {
        Activities::from(vec![
            activity("Chess Club", &["a@x.com"], 12),
            activity("Gym Class", &[], 30),
            activity("Drama Club", &["b@x.com", "c@x.com"], 20),
        ])
    }

    #[test]
    fn one_card_per_activity_with_capacity_ratio() {
        let list = sample();
        let cards = activity_cards(&list);
        assert_eq!(cards.len(), list.len());
        for (card, a) in cards.iter().zip(list.iter()) {
            assert_eq!(card.name, a.name);
            assert_eq!(
                card.capacity,
                format!("{}/{}", a.participants.len(), a.max_participants)
            );
        }
    }

    #[test]
    fn chess_club_card() {
        let list = Activities::from(vec![Activity {
            name: "Chess Club".into(),
            description: "...".into(),
            schedule: "Fri 3pm".into(),
            participants: vec!["a@x.com".into()],
            max_participants: 12,
        }]);
        let card = &activity_cards(&list)[0];
        assert_eq!(card.capacity, "1/12");
        assert_eq!(card.spots_left, 11);
        assert_eq!(card.participants, vec!["a@x.com"]);
    }

    #[test]
    fn status_lines() {
        assert_eq!(ListState::Loading.status_text(), Some(LOADING_TEXT));
        assert_eq!(ListState::Failed.status_text(), Some(LOAD_FAILED));
        assert_eq!(
            ListState::Loaded(Activities::default()).status_text(),
            Some(EMPTY_TEXT)
        );
        assert_eq!(ListState::Loaded(sample()).status_text(), None);
    }

    #[test]
    fn empty_collection_has_no_cards() {
        assert!(activity_cards(&Activities::default()).is_empty());
    }

    #[test]
    fn selector_has_placeholder_plus_each_name() {
        let list = sample();
        let opts = select_options(&list);
        assert_eq!(opts.len(), list.len() + 1);
        assert_eq!(opts[0].value, "");
        assert_eq!(opts[0].label, SELECT_PLACEHOLDER);
        let values: Vec<&str> = opts[1..].iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, ["Chess Club", "Gym Class", "Drama Club"]);
    }

    #[test]
    fn selector_for_empty_collection() {
        let opts = select_options(&Activities::default());
        assert_eq!(opts.len(), 1);
        assert!(opts[0].value.is_empty());
    }

    #[test]
    fn remove_handler_emits_row_as_listed() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let on_unregister = {
            let seen = seen.clone();
            Callback::from(move |row: (String, String)| seen.borrow_mut().push(row))
        };

        remove_handler::<()>(&on_unregister, "Chess Club", " a@x.com ").emit(());
        remove_handler::<()>(&on_unregister, "Drama Club", "c@x.com").emit(());

        assert_eq!(
            *seen.borrow(),
            vec![
                ("Chess Club".to_string(), " a@x.com ".to_string()),
                ("Drama Club".to_string(), "c@x.com".to_string()),
            ]
        );
    }
}
