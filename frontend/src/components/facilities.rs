use log::warn;
use stylist::Style;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeTier {
    Small,
    Medium,
    Large,
}

/// Footprint of a card. `*_wide` apply from the `md` breakpoint up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardProfile {
    pub width: u32,
    pub height: u32,
    pub width_wide: u32,
    pub height_wide: u32,
    pub z_index: i32,
    pub opacity: f32,
    pub box_shadow: Option<&'static str>,
}

impl SizeTier {
    pub fn profile(self) -> CardProfile {
        match self {
            SizeTier::Large => CardProfile {
                width: 288,
                height: 400,
                width_wide: 320,
                height_wide: 480,
                z_index: 20,
                opacity: 1.0,
                box_shadow: Some("0 25px 50px -12px rgba(0, 0, 0, 0.25)"),
            },
            SizeTier::Medium => CardProfile {
                width: 240,
                height: 360,
                width_wide: 272,
                height_wide: 420,
                z_index: 10,
                opacity: 0.9,
                box_shadow: None,
            },
            SizeTier::Small => CardProfile {
                width: 192,
                height: 320,
                width_wide: 224,
                height_wide: 360,
                z_index: 0,
                opacity: 0.8,
                box_shadow: None,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FacilityCard {
    pub name: &'static str,
    pub image: &'static str,
    pub size: SizeTier,
}

pub const FACILITIES: [FacilityCard; 5] = [
    FacilityCard {
        name: "Mini Bar",
        image: "https://images.unsplash.com/photo-1514362545857-3bc16c4c7d1b?q=80&w=1470&auto=format&fit=crop",
        size: SizeTier::Small,
    },
    FacilityCard {
        name: "Workspace",
        image: "https://images.unsplash.com/photo-1497215728101-856f4ea42174?q=80&w=1470&auto=format&fit=crop",
        size: SizeTier::Medium,
    },
    FacilityCard {
        name: "Jacuzzi Bathroom",
        image: "https://images.unsplash.com/photo-1560185007-cde43669a43e?q=80&w=1470&auto=format&fit=crop",
        size: SizeTier::Large,
    },
    FacilityCard {
        name: "Library Room",
        image: "https://images.unsplash.com/photo-1505664194779-8beaceb93744?q=80&w=1470&auto=format&fit=crop",
        size: SizeTier::Medium,
    },
    FacilityCard {
        name: "Restaurant",
        image: "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?q=80&w=1470&auto=format&fit=crop",
        size: SizeTier::Small,
    },
];

/// Edge a fanned card rotates around; always the one facing the center.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pivot {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tilt {
    Fanned {
        rotate_y: i32,
        rotate_z: i32,
        pivot: Pivot,
    },
    /// Center card: flat, pushed forward, slightly enlarged.
    Featured,
}

pub const FEATURED_Z_INDEX: i32 = 30;

/// Poster-fan transform by position. Laid out for exactly five cards.
pub fn tilt_for(index: usize) -> Option<Tilt> {
    let tilt = match index {
        0 => Tilt::Fanned {
            rotate_y: 18,
            rotate_z: -2,
            pivot: Pivot::Right,
        },
        1 => Tilt::Fanned {
            rotate_y: 10,
            rotate_z: -1,
            pivot: Pivot::Right,
        },
        2 => Tilt::Featured,
        3 => Tilt::Fanned {
            rotate_y: -10,
            rotate_z: 1,
            pivot: Pivot::Left,
        },
        4 => Tilt::Fanned {
            rotate_y: -18,
            rotate_z: 2,
            pivot: Pivot::Left,
        },
        _ => return None,
    };
    Some(tilt)
}

/// Scoped CSS for the card at `index`: size tier picks the footprint,
/// position picks the wide-viewport transform.
pub fn card_css(size: SizeTier, index: usize) -> String {
    let profile = size.profile();
    let tilt = tilt_for(index);

    let z_index = match tilt {
        Some(Tilt::Featured) => FEATURED_Z_INDEX,
        _ => profile.z_index,
    };

    let mut css = format!(
        "width: {}px; height: {}px; z-index: {}; opacity: {};",
        profile.width, profile.height, z_index, profile.opacity
    );
    if let Some(shadow) = profile.box_shadow {
        css.push_str(&format!(" box-shadow: {};", shadow));
    }
    if tilt == Some(Tilt::Featured) {
        css.push_str(" transform: scale(1.05);");
    }
    css.push_str(
        " &:hover { opacity: 1; }\
         &:hover img { transform: scale(1.1); }",
    );

    let wide_transform = match tilt {
        Some(Tilt::Fanned { rotate_y, rotate_z, pivot }) => format!(
            "transform: perspective(1000px) rotateY({}deg) rotateZ({}deg); transform-origin: {};",
            rotate_y,
            rotate_z,
            match pivot {
                Pivot::Left => "left",
                Pivot::Right => "right",
            }
        ),
        Some(Tilt::Featured) => {
            "transform: perspective(1000px) rotateY(0deg) translateZ(20px) scale(1.05);".to_string()
        }
        None => String::new(),
    };
    css.push_str(&format!(
        " @media (min-width: 768px) {{ width: {}px; height: {}px; {} }}",
        profile.width_wide, profile.height_wide, wide_transform
    ));

    css
}

fn card_class(size: SizeTier, index: usize) -> Classes {
    match Style::new(card_css(size, index)) {
        Ok(style) => classes!(style.get_class_name().to_string()),
        Err(err) => {
            warn!("Failed to build card style for position {}: {}", index, err);
            Classes::new()
        }
    }
}

#[function_component(FacilitiesGallery)]
pub fn facilities_gallery() -> Html {
    html! {
        <section class="w-full bg-white py-16 md:py-32 overflow-hidden font-sans">
            <div class="max-w-[1400px] mx-auto px-6 md:px-12 relative flex flex-col space-y-12 md:space-y-24">
                <div class="flex flex-col md:flex-row justify-between items-center md:items-start gap-6 md:gap-4">
                    <div class="max-w-sm pt-2 text-center md:text-left">
                        <p class="text-gray-500 text-sm md:text-base leading-relaxed">
                            {"Experience the ultimate in comfort and style by choosing the "}
                            <br class="hidden lg:block" />
                            {"perfect room tailored to your needs."}
                        </p>
                    </div>
                    <div class="text-center md:text-right max-w-lg">
                        <h2 class="text-black text-3xl md:text-5xl font-medium tracking-tight leading-[1.2] md:leading-[1.1]">
                            {"Premier Facilities and "}
                            <br />
                            {"Guest Services"}
                        </h2>
                    </div>
                </div>

                <div class="flex flex-row items-center gap-4 md:gap-8 overflow-x-auto pb-8 md:pb-12 px-2 md:px-0 md:justify-center snap-x snap-mandatory -mx-6 md:mx-0 [scrollbar-width:none] md:[perspective:2000px] md:[transform-style:preserve-3d]">
                    { for FACILITIES.iter().enumerate().map(|(idx, facility)| html! {
                        <div
                            key={idx}
                            class={classes!("relative", "flex-shrink-0", "transition-all", "duration-500", "ease-out", "rounded-[24px]", "md:rounded-[32px]", "overflow-hidden", "snap-center", "border", "border-gray-100", "bg-white", card_class(facility.size, idx))}
                        >
                            <img
                                src={facility.image}
                                alt={facility.name}
                                loading="lazy"
                                class="absolute inset-0 w-full h-full object-cover transition-transform duration-700"
                            />
                            <div class="absolute inset-x-0 bottom-0 h-1/2 bg-gradient-to-t from-black/60 to-transparent" />
                            <div class="absolute bottom-6 w-full text-center z-10">
                                <span class="text-white text-base md:text-lg font-medium tracking-wide drop-shadow-md">
                                    {facility.name}
                                </span>
                            </div>
                        </div>
                    }) }
                </div>

                <div class="flex justify-center">
                    <Link<Route>
                        to={Route::Facilities}
                        classes="px-8 py-3 rounded-full border border-gray-300 text-black font-medium text-sm hover:bg-gray-50 transition-colors"
                    >
                        {"See All"}
                    </Link<Route>>
                </div>
            </div>
        </section>
    }
}
