use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Navbar() -> impl IntoView {
    let links = [("/", "home", "Home"), ("/admin", "admin", "Admin")];

    view! {
        <nav class="main-nav-bar">
            {links
                .into_iter()
                .map(|(href, kind, title)| view! {
                    <A href=href>
                        {icon(kind)}
                        <span>{title}</span>
                    </A>
                })
                .collect_view()}
        </nav>
    }
}
