use super::view_model::RegisterViewModel;
use crate::shared::date_utils::format_event_date;
use contracts::domain::a001_event::EventCatalog;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let params = use_params_map();
    let event_id = move || params.with(|p| p.get("id").unwrap_or_default());
    let vm = RegisterViewModel::new();

    view! {
        <div class="page page--detail" id="a002_registration--register">
            {move || match EventCatalog::builtin().find_by_id(&event_id()) {
                None => view! {
                    <div class="warning-box warning-box--error">
                        <span class="warning-box__text">
                            {format!("Event '{}' was not found.", event_id())}
                        </span>
                        <A href="/">{"Back to events"}</A>
                    </div>
                }.into_any(),
                Some(event) => {
                    let id = event.id.clone();
                    view! {
                        <div class="details-container">
                            <div class="details-header">
                                <h3>{format!("Register: {}", event.title)}</h3>
                                <p class="details-subtitle">
                                    {format_event_date(event.date)}" · "{event.location.clone()}
                                </p>
                            </div>

                            {move || vm.submitted.get().map(|r| view! {
                                <div class="success-box">
                                    {format!("Thank you, {}! Your registration id is {}.", r.name, r.id)}
                                </div>
                            })}

                            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

                            <div class="details-form">
                                <div class="form-group">
                                    <label for="name">{"Name"}</label>
                                    <input
                                        type="text"
                                        id="name"
                                        prop:value=move || vm.form.get().name
                                        on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                                        placeholder="Your full name"
                                    />
                                </div>
                                <div class="form-group">
                                    <label for="email">{"Email"}</label>
                                    <input
                                        type="email"
                                        id="email"
                                        prop:value=move || vm.form.get().email
                                        on:input=move |ev| vm.form.update(|f| f.email = event_target_value(&ev))
                                        placeholder="name@example.com"
                                    />
                                </div>
                                <div class="form-group">
                                    <label for="phone">{"Phone"}</label>
                                    <input
                                        type="tel"
                                        id="phone"
                                        prop:value=move || vm.form.get().phone
                                        on:input=move |ev| vm.form.update(|f| f.phone = event_target_value(&ev))
                                        placeholder="Optional"
                                    />
                                </div>
                            </div>

                            <div class="details-actions">
                                <button
                                    class="button button--primary"
                                    disabled=move || !vm.is_form_valid()
                                    on:click=move |_| vm.submit_command(&id)
                                >
                                    {"Register"}
                                </button>
                                <A href="/">{"Cancel"}</A>
                            </div>
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
