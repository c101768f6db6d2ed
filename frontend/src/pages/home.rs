use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::facilities::FacilitiesGallery;
use crate::components::header::{Header, HeaderVariant};
use crate::Route;

const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1566073771259-6a8506099945?q=80&w=2070&auto=format&fit=crop";

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <>
            <Header variant={HeaderVariant::Light} />
            <section class="relative w-full h-screen overflow-hidden">
                <img
                    src={HERO_IMAGE}
                    alt="African Palace courtyard"
                    class="absolute inset-0 w-full h-full object-cover"
                />
                <div class="absolute inset-0 bg-gradient-to-b from-black/40 via-black/10 to-black/60" />
                <div class="relative h-full flex flex-col items-center justify-end pb-24 px-6 text-center">
                    <h2 class="text-white text-4xl md:text-7xl font-serif tracking-tight">
                        {"Stay in the heart of Tamale"}
                    </h2>
                    <p class="text-white/80 text-sm md:text-lg mt-4 max-w-xl">
                        {"Quiet rooms, warm hospitality and everything you need for a short visit or a long stay."}
                    </p>
                    <Link<Route> to={Route::Rooms} classes="mt-8 px-8 py-3 rounded-full bg-white text-black text-sm font-medium hover:bg-white/90 transition-colors">
                        {"Explore Rooms"}
                    </Link<Route>>
                </div>
            </section>
            <FacilitiesGallery />
        </>
    }
}
