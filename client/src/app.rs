//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::menu::Menu;
use crate::pages::admin::AdminPage;
use crate::pages::list::announcements::AnnouncementListPage;
use crate::pages::list::assignments::AssignmentListPage;
use crate::pages::list::attendance::AttendanceListPage;
use crate::pages::list::classes::ClassListPage;
use crate::pages::list::events::EventListPage;
use crate::pages::list::exams::ExamListPage;
use crate::pages::list::grades::GradeListPage;
use crate::pages::list::lessons::LessonListPage;
use crate::pages::list::parents::ParentListPage;
use crate::pages::list::results::ResultListPage;
use crate::pages::list::students::StudentListPage;
use crate::pages::list::subjects::SubjectListPage;
use crate::pages::list::teachers::TeacherListPage;
use crate::pages::teacher_home::TeacherHomePage;
use crate::state::session::provide_session;
use crate::util::dark_mode;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context, bootstraps it from `/api/session`, and
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = provide_session();

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let fetched = crate::net::api::fetch_session().await;
            session.update(|state| {
                if let Some(s) = fetched {
                    state.session = s;
                }
                state.loading = false;
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }

    let dark = RwSignal::new(dark_mode::read_preference());
    Effect::new(move || dark_mode::apply(dark.get_untracked()));

    view! {
        <Stylesheet id="leptos" href="/pkg/classboard.css"/>
        <Title text="classboard"/>

        <Router>
            <div class="app-shell">
                <Menu/>
                <div class="app-shell__main">
                    <header class="topbar">
                        <span class="topbar__spacer"></span>
                        <button
                            class="btn topbar__dark-toggle"
                            title="Toggle dark mode"
                            on:click=move |_| {
                                let next = dark_mode::toggle(dark.get_untracked());
                                dark.set(next);
                            }
                        >
                            {move || if dark.get() { "☀" } else { "☾" }}
                        </button>
                    </header>
                    <main class="app-shell__content">
                        <Routes fallback=|| "Page not found.".into_view()>
                            <Route path=StaticSegment("") view=AdminPage/>
                            <Route path=StaticSegment("teacher") view=TeacherHomePage/>
                            <Route
                                path=(StaticSegment("list"), StaticSegment("teachers"))
                                view=TeacherListPage
                            />
                            <Route
                                path=(StaticSegment("list"), StaticSegment("students"))
                                view=StudentListPage
                            />
                            <Route
                                path=(StaticSegment("list"), StaticSegment("parents"))
                                view=ParentListPage
                            />
                            <Route
                                path=(StaticSegment("list"), StaticSegment("subjects"))
                                view=SubjectListPage
                            />
                            <Route
                                path=(StaticSegment("list"), StaticSegment("classes"))
                                view=ClassListPage
                            />
                            <Route
                                path=(StaticSegment("list"), StaticSegment("lessons"))
                                view=LessonListPage
                            />
                            <Route
                                path=(StaticSegment("list"), StaticSegment("exams"))
                                view=ExamListPage
                            />
                            <Route
                                path=(StaticSegment("list"), StaticSegment("assignments"))
                                view=AssignmentListPage
                            />
                            <Route
                                path=(StaticSegment("list"), StaticSegment("results"))
                                view=ResultListPage
                            />
                            <Route
                                path=(StaticSegment("list"), StaticSegment("attendance"))
                                view=AttendanceListPage
                            />
                            <Route
                                path=(StaticSegment("list"), StaticSegment("events"))
                                view=EventListPage
                            />
                            <Route
                                path=(StaticSegment("list"), StaticSegment("announcements"))
                                view=AnnouncementListPage
                            />
                            <Route
                                path=(StaticSegment("list"), StaticSegment("grades"))
                                view=GradeListPage
                            />
                        </Routes>
                    </main>
                </div>
            </div>
        </Router>
    }
}
