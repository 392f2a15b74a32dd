//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::api::{API_URL_META, ApiConfig};
use crate::pages::articles::{ArticleEditorPage, ArticlesPage};
use crate::pages::carousel::{CarouselEditorPage, CarouselPage};
use crate::pages::comitards::{ComitardEditorPage, ComitardsPage};
use crate::pages::dashboard::DashboardPage;
use crate::pages::login::LoginPage;
use crate::pages::media_library::MediaLibraryPage;
use crate::pages::partners::{PartnerEditorPage, PartnersPage};
use crate::pages::titles::{TitleEditorPage, TitlesPage};
use crate::pages::volunteers::{VolunteerEditorPage, VolunteersPage};
use crate::state::auth::AuthState;
use crate::state::notice::NoticeState;
use crate::util::auth::init_session;

/// HTML shell rendered on the server for SSR + hydration.
///
/// `api_url` is handed to the browser through a meta tag and read back by
/// [`ApiConfig::from_document`].
pub fn shell(options: LeptosOptions, api_url: String) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_URL_META content=api_url/>
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
/// Provides the shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let notices = RwSignal::new(NoticeState::default());
    let cfg = ApiConfig::from_document();

    provide_context(auth);
    provide_context(notices);
    provide_context(cfg.clone());

    // Effects only run in the browser, so the server renders the loading
    // state the client hydrates against.
    Effect::new(move || init_session(auth, cfg.clone()));

    view! {
        <Stylesheet id="leptos" href="/pkg/cci-admin.css"/>
        <Title text="CCI Admin"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=DashboardPage/>

                <Route path=StaticSegment("articles") view=ArticlesPage/>
                <Route path=(StaticSegment("articles"), StaticSegment("new")) view=ArticleEditorPage/>
                <Route
                    path=(StaticSegment("articles"), ParamSegment("id"), StaticSegment("edit"))
                    view=ArticleEditorPage
                />

                <Route path=StaticSegment("volunteers") view=VolunteersPage/>
                <Route path=(StaticSegment("volunteers"), StaticSegment("new")) view=VolunteerEditorPage/>
                <Route
                    path=(StaticSegment("volunteers"), ParamSegment("id"), StaticSegment("edit"))
                    view=VolunteerEditorPage
                />

                <Route path=StaticSegment("partners") view=PartnersPage/>
                <Route path=(StaticSegment("partners"), StaticSegment("new")) view=PartnerEditorPage/>
                <Route
                    path=(StaticSegment("partners"), ParamSegment("id"), StaticSegment("edit"))
                    view=PartnerEditorPage
                />

                <Route path=StaticSegment("carousel") view=CarouselPage/>
                <Route path=(StaticSegment("carousel"), StaticSegment("new")) view=CarouselEditorPage/>
                <Route
                    path=(StaticSegment("carousel"), ParamSegment("id"), StaticSegment("edit"))
                    view=CarouselEditorPage
                />

                <Route path=StaticSegment("titles") view=TitlesPage/>
                <Route path=(StaticSegment("titles"), StaticSegment("new")) view=TitleEditorPage/>
                <Route
                    path=(StaticSegment("titles"), ParamSegment("id"), StaticSegment("edit"))
                    view=TitleEditorPage
                />

                <Route path=StaticSegment("comitards") view=ComitardsPage/>
                <Route path=(StaticSegment("comitards"), StaticSegment("new")) view=ComitardEditorPage/>
                <Route
                    path=(StaticSegment("comitards"), ParamSegment("id"), StaticSegment("edit"))
                    view=ComitardEditorPage
                />

                <Route path=StaticSegment("media") view=MediaLibraryPage/>
            </Routes>
        </Router>
    }
}
