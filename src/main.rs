use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod lead {
    pub mod browser;
    pub mod location;
    pub mod redirect;
    pub mod zip;
}
mod pages {
    pub mod hero;
}

use pages::hero::LeadCaptureHero;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <main><LeadCaptureHero /></main> }
        },
        // The hero is the only entry point, so unknown paths land on it too
        Route::NotFound => {
            info!("Rendering Home page for unknown route");
            html! { <main><LeadCaptureHero /></main> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
