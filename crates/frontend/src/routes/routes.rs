use crate::domain::a001_event::ui::list::EventList;
use crate::domain::a002_registration::ui::admin::AdminRegistrationsPage;
use crate::domain::a002_registration::ui::register::RegisterPage;
use crate::layout::Navbar;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Navbar />
            <main>
                <Routes fallback=|| view! { <div class="page">{"Page not found."}</div> }>
                    <Route path=path!("/") view=EventList />
                    <Route path=path!("/register/:id") view=RegisterPage />
                    <Route path=path!("/admin") view=AdminRegistrationsPage />
                </Routes>
            </main>
        </Router>
    }
}
