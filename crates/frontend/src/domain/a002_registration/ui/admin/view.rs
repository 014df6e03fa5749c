use super::view_model::AdminRegistrationsViewModel;
use crate::domain::a002_registration::manager::RegistrationRow;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn AdminRegistrationsPage() -> impl IntoView {
    let vm = AdminRegistrationsViewModel::new();

    view! {
        <div class="page" id="a002_registration--admin">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Admin — Registrations"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| vm.export_command()>
                        {icon("download")}
                        {"Export CSV"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| vm.clear_command()>
                        {icon("delete")}
                        {"Clear All"}
                    </button>
                </div>
            </div>

            {move || vm.error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                    <button class="button button--ghost button--small" on:click=move |_| vm.reload_command()>
                        {"Reload"}
                    </button>
                </div>
            })}

            <Show
                when=move || !vm.rows.get().is_empty()
                fallback=|| view! {
                    <div class="empty-state">
                        {"No registrations yet. Try submitting a registration from the Home page."}
                    </div>
                }
            >
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">{"Reg ID"}</th>
                                <th class="table__header-cell">{"Event"}</th>
                                <th class="table__header-cell">{"Name"}</th>
                                <th class="table__header-cell">{"Email"}</th>
                                <th class="table__header-cell">{"Phone"}</th>
                                <th class="table__header-cell">{"Created At"}</th>
                                <th class="table__header-cell">{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || vm.rows.get()
                                key=|row: &RegistrationRow| row.id.clone()
                                children=move |row: RegistrationRow| {
                                    let id = row.id.clone();
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{row.id}</td>
                                            <td class="table__cell" title=row.event_id>{row.event_title}</td>
                                            <td class="table__cell">{row.name}</td>
                                            <td class="table__cell">{row.email}</td>
                                            <td class="table__cell">{row.phone}</td>
                                            <td class="table__cell">{row.created_at}</td>
                                            <td class="table__cell">
                                                <button
                                                    class="button button--ghost button--small"
                                                    on:click=move |_| vm.delete_command(id.clone())
                                                >
                                                    {icon("delete")}
                                                    {"Delete"}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}
