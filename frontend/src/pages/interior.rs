use yew::prelude::*;

use crate::components::facilities::FacilitiesGallery;
use crate::components::header::{Header, HeaderVariant};

#[derive(Properties, PartialEq)]
pub struct InteriorProps {
    pub title: AttrValue,
    pub blurb: AttrValue,
    #[prop_or_default]
    pub show_facilities: bool,
}

/// Page without a hero image; the header starts in its dark treatment.
#[function_component(InteriorPage)]
pub fn interior_page(props: &InteriorProps) -> Html {
    html! {
        <>
            <Header variant={HeaderVariant::Dark} />
            <main class="pt-32 md:pt-40 bg-white min-h-screen">
                <section class="max-w-[1400px] mx-auto px-6 md:px-12">
                    <h2 class="text-black text-3xl md:text-5xl font-medium tracking-tight">
                        {props.title.clone()}
                    </h2>
                    <p class="text-gray-500 text-sm md:text-base leading-relaxed mt-4 max-w-2xl">
                        {props.blurb.clone()}
                    </p>
                </section>
                {
                    if props.show_facilities {
                        html! { <FacilitiesGallery /> }
                    } else {
                        html! {}
                    }
                }
            </main>
        </>
    }
}
