// src/main.rs — Activity Board (Rust + Yew + WASM)
// Lists club activities from the API, signs students up, and lets them
// drop out again. Mounts into <div id="app"></div>; see config.rs for the
// data attributes it reads.

mod api;
mod board;
mod config;
mod error;
mod message;
mod model;
mod view;

use gloo::console;
use gloo::timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use api::HttpSource;
use board::{
    load_activities, sign_up_for_activity, unregister_participant, InFlight, WriteOutcome,
};
use config::{BoardConfig, MOUNT_ID};
use message::{message_view, MessageAction, MessageState};
use model::Activities;
use view::{activity_list_view, select_options, select_options_view, ListState};

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| BoardConfig::from_document());
    let source = use_memo(config.api_base.clone(), |base| HttpSource::new(base.clone()));

    // list region + the names last loaded successfully (selector keeps them on failure)
    let list = use_state(|| ListState::Loading);
    let known = use_state(Activities::default);

    // form
    let email = use_state(String::new);
    let chosen = use_state(String::new);
    let select_ref = use_node_ref();
    let submitting = use_state(|| false);
    let signup_slot = use_memo((), |_| InFlight::default());

    // one unregister at a time; row buttons are disabled meanwhile
    let removing = use_state(|| false);
    let removal_slot = use_memo((), |_| InFlight::default());

    let message = use_reducer(MessageState::default);

    // --- effects ---

    let reload = {
        let source = source.clone();
        let list = list.clone();
        let known = known.clone();
        Callback::from(move |_: ()| {
            let source = source.clone();
            let list = list.clone();
            let known = known.clone();
            spawn_local(async move {
                let outcome = load_activities(&*source).await;
                if let Some(err) = &outcome.failure {
                    console::error!(format!("Error fetching activities: {err}"));
                }
                if let ListState::Loaded(activities) = &outcome.list {
                    console::log!(format!("Loaded {} activities", activities.len()));
                    known.set(activities.clone());
                }
                list.set(outcome.list);
            });
        })
    };

    // Load once on mount
    {
        let reload = reload.clone();
        use_effect_with((), move |_| {
            reload.emit(());
            || ()
        });
    }

    // Hide the message after the TTL. A new message re-runs this effect and
    // the teardown drops (cancels) the previous timer.
    {
        let message = message.clone();
        let ttl = config.message_ttl_ms;
        use_effect_with(message.generation(), move |generation| {
            let generation = *generation;
            let timeout = message.visible().is_some().then(|| {
                let message = message.clone();
                Timeout::new(ttl, move || message.dispatch(MessageAction::Expire(generation)))
            });
            move || drop(timeout)
        });
    }

    // --- helpers ---

    let apply_outcome = {
        let message = message.clone();
        let email = email.clone();
        let chosen = chosen.clone();
        let select_ref = select_ref.clone();
        let reload = reload.clone();
        Callback::from(move |outcome: WriteOutcome| {
            if let Some(err) = &outcome.failure {
                console::error!(format!("Request failed: {err}"));
            }
            if outcome.reset_form {
                email.set(String::new());
                chosen.set(String::new());
                // the user has touched the select, so `selected` attributes no longer win
                if let Some(select) = select_ref.cast::<HtmlSelectElement>() {
                    select.set_value("");
                }
            }
            if outcome.reload {
                reload.emit(());
            }
            message.dispatch(MessageAction::Show(outcome.message));
        })
    };

    let on_submit = {
        let source = source.clone();
        let email = email.clone();
        let chosen = chosen.clone();
        let submitting = submitting.clone();
        let signup_slot = signup_slot.clone();
        let apply_outcome = apply_outcome.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(guard) = signup_slot.try_begin() else {
                return;
            };
            submitting.set(true);

            let source = source.clone();
            let email = (*email).clone();
            let activity = (*chosen).clone();
            let submitting = submitting.clone();
            let apply_outcome = apply_outcome.clone();
            spawn_local(async move {
                let outcome = sign_up_for_activity(&*source, &email, &activity).await;
                drop(guard);
                submitting.set(false);
                apply_outcome.emit(outcome);
            });
        })
    };

    let on_unregister = {
        let source = source.clone();
        let apply_outcome = apply_outcome.clone();
        let removing = removing.clone();
        let removal_slot = removal_slot.clone();
        Callback::from(move |(activity, email): (String, String)| {
            let Some(guard) = removal_slot.try_begin() else {
                return;
            };
            removing.set(true);

            let source = source.clone();
            let apply_outcome = apply_outcome.clone();
            let removing = removing.clone();
            spawn_local(async move {
                let outcome = unregister_participant(&*source, &activity, &email).await;
                drop(guard);
                removing.set(false);
                apply_outcome.emit(outcome);
            });
        })
    };

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let v = e.target_unchecked_into::<HtmlInputElement>().value();
            email.set(v);
        })
    };

    let on_activity_change = {
        let chosen = chosen.clone();
        Callback::from(move |e: Event| {
            let v = e.target_unchecked_into::<HtmlSelectElement>().value();
            chosen.set(v);
        })
    };

    let options = select_options(&known);

    html! {
      <main class="board">
        <header>
          <h1>{ "Extracurricular Activities" }</h1>
        </header>

        <section id="activities-container" class="panel">
          <h3>{ "Available Activities" }</h3>
          { activity_list_view(&list, &on_unregister, *removing) }
        </section>

        <section id="signup-container" class="panel">
          <h3>{ "Sign Up for an Activity" }</h3>
          <form id="signup-form" onsubmit={on_submit}>
            <div class="form-group">
              <label for="email">{ "Student Email:" }</label>
              <input
                type="email"
                id="email"
                placeholder="your-email@school.edu"
                value={(*email).clone()}
                oninput={on_email_input}
              />
            </div>
            <div class="form-group">
              <label for="activity">{ "Select Activity:" }</label>
              <select id="activity" ref={select_ref} onchange={on_activity_change}>
                { select_options_view(&options, &chosen) }
              </select>
            </div>
            <button type="submit" disabled={*submitting}>
              { if *submitting { "Signing up…" } else { "Sign Up" } }
            </button>
          </form>
          { message_view(&message) }
        </section>
      </main>
    }
}

fn main() {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(MOUNT_ID));

    match root {
        Some(root) => yew::Renderer::<App>::with_root(root).render(),
        None => yew::Renderer::<App>::new().render(),
    };
}
