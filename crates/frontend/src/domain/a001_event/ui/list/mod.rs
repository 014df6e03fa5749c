use crate::shared::date_utils::format_event_date;
use contracts::domain::a001_event::{Event, EventCatalog};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn EventCard(event: Event) -> impl IntoView {
    let href = event.register_path();

    view! {
        <div class="event-card">
            <h3 class="event-card__title">{event.title}</h3>
            <p class="event-card__description">{event.description}</p>
            <p class="event-card__meta">
                <strong>{"Date:"}</strong>" "{format_event_date(event.date)}
            </p>
            <p class="event-card__meta">
                <strong>{"Location:"}</strong>" "{event.location}
            </p>
            <A href=href>
                <button class="button button--primary">{"Register"}</button>
            </A>
        </div>
    }
}

/// Public listing of upcoming events
#[component]
pub fn EventList() -> impl IntoView {
    let events = EventCatalog::builtin().all().to_vec();

    view! {
        <div class="page" id="a001_event--list">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Upcoming Events"}</h1>
                </div>
            </div>
            <div class="event-list">
                {events
                    .into_iter()
                    .map(|event| view! { <EventCard event=event /> })
                    .collect_view()}
            </div>
        </div>
    }
}
