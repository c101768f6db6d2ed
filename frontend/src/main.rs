use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod nav;
mod viewport;
mod components {
    pub mod facilities;
    pub mod header;
}
mod pages {
    pub mod home;
    pub mod interior;
}

use pages::{
    home::Home,
    interior::InteriorPage,
};

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/rooms")]
    Rooms,
    #[at("/facilities")]
    Facilities,
    #[at("/contact")]
    Contact,
    #[at("/about")]
    About,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Rooms => {
            info!("Rendering Rooms page");
            html! {
                <InteriorPage
                    title="Rooms"
                    blurb="Choose from garden-view singles to our family suite, each with air conditioning, fast Wi-Fi and daily housekeeping."
                />
            }
        },
        Route::Facilities => {
            info!("Rendering Facilities page");
            html! {
                <InteriorPage
                    title="Facilities"
                    blurb="Everything under one roof, from a quiet workspace to a restaurant serving local and continental dishes."
                    show_facilities={true}
                />
            }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! {
                <InteriorPage
                    title="Contact"
                    blurb="Reach the front desk any time of day to ask about availability or arrange an airport pickup."
                />
            }
        },
        Route::About => {
            info!("Rendering About page");
            html! {
                <InteriorPage
                    title="About"
                    blurb="A family-run guesthouse in Tamale, welcoming travellers from across Ghana and beyond."
                />
            }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <InteriorPage
                    title="Page not found"
                    blurb="The page you were looking for does not exist. Use the menu to find your way back."
                />
            }
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
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
