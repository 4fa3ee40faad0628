//! BLANQ CRM Frontend App
//!
//! Router, shared context and the sidebar layout around every page.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use blanq_core::{AppConfig, SeedData};

use crate::components::Sidebar;
use crate::context::AppContext;
use crate::pages::{
    ClientsPage, DashboardPage, DocumentsPage, FinancePage, LoginPage, NotFoundPage, ProjectsPage, SearchPage,
    TasksPage, TemplatesPage, TestimonialsPage,
};
use crate::store::{AppState, AppStore};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let (session, set_session) = signal(None);
    let capacity = config.activity_capacity;

    // Provide context to all children
    provide_context(AppContext::new((session, set_session), config));
    provide_context(AppStore::new(AppState::new(SeedData::load(), capacity)));
    // document listeners for task drag-and-drop, bound once
    leptos_dragdrop::provide_dnd();

    view! {
        <Router>
            <div class="app-layout">
                <Sidebar />
                <main class="main-content">
                    <Routes fallback=|| view! { <NotFoundPage /> }>
                        <Route path=path!("/") view=ClientsPage />
                        <Route path=path!("/dashboard") view=DashboardPage />
                        <Route path=path!("/client-management") view=ClientsPage />
                        <Route path=path!("/project-management") view=ProjectsPage />
                        <Route path=path!("/finance") view=FinancePage />
                        <Route path=path!("/legal-quebec-docs") view=DocumentsPage />
                        <Route path=path!("/testimonials-section") view=TestimonialsPage />
                        <Route path=path!("/templates-library") view=TemplatesPage />
                        <Route path=path!("/collaborative-to-do-management") view=TasksPage />
                        <Route path=path!("/search") view=SearchPage />
                        <Route path=path!("/login") view=LoginPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
