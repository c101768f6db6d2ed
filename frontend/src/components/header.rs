use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::{BRAND_NAME, BRAND_SUBTITLE, CONDENSE_THRESHOLD, MENU_TAGLINE};
use crate::nav::nav_items;
use crate::viewport::{watch_scroll, BrowserViewport, Viewport};
use crate::Route;

/// Page context the header is rendered on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeaderVariant {
    /// Transparent, white text over a full-bleed hero image.
    #[default]
    Light,
    /// Interior pages without a hero; starts in the condensed colours.
    Dark,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeaderState {
    pub condensed: bool,
    pub menu_open: bool,
}

pub enum HeaderAction {
    Scrolled(f64),
    ToggleMenu,
    CloseMenu,
}

impl HeaderState {
    pub fn at_offset(offset: f64) -> Self {
        Self {
            condensed: is_condensed(offset),
            menu_open: false,
        }
    }

    pub fn apply(self, action: HeaderAction) -> Self {
        match action {
            HeaderAction::Scrolled(offset) => Self {
                condensed: is_condensed(offset),
                ..self
            },
            HeaderAction::ToggleMenu => Self {
                menu_open: !self.menu_open,
                ..self
            },
            HeaderAction::CloseMenu => Self {
                menu_open: false,
                ..self
            },
        }
    }

    pub fn scrolled_look(&self, variant: HeaderVariant) -> bool {
        self.condensed || variant == HeaderVariant::Dark
    }
}

impl Reducible for HeaderState {
    type Action = HeaderAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

pub fn is_condensed(offset: f64) -> bool {
    offset > CONDENSE_THRESHOLD
}

/// Class sets for every part of the header, derived from variant and state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderLook {
    pub text: &'static str,
    pub subtext: &'static str,
    pub pill_bg: &'static str,
    pub pill_border: &'static str,
    pub nav_active: &'static str,
    pub nav_inactive: &'static str,
    pub brand: &'static str,
    pub booking: &'static str,
    pub badge_bg: &'static str,
    pub badge_fg: &'static str,
    pub bar: &'static str,
}

impl HeaderLook {
    pub fn derive(variant: HeaderVariant, state: &HeaderState) -> Self {
        let scrolled = state.scrolled_look(variant);

        let (pill_bg, pill_border) = match (state.condensed, variant) {
            (true, _) => ("bg-black/5 md:bg-white/80", "border-black/10"),
            (false, HeaderVariant::Dark) => ("bg-black/5", "border-black/5"),
            (false, HeaderVariant::Light) => ("bg-white/10", "border-white/20"),
        };

        // Brand and booking hide on scroll offset alone, never on variant.
        let (brand, booking) = if state.condensed {
            (
                "opacity-0 -translate-x-4 pointer-events-none",
                "opacity-0 translate-x-4 pointer-events-none",
            )
        } else {
            (
                "opacity-100 translate-x-0 pointer-events-auto",
                "opacity-100 translate-x-0 hover:bg-white/20",
            )
        };

        if scrolled {
            Self {
                text: "text-black",
                subtext: "text-black/60",
                pill_bg,
                pill_border,
                nav_active: "bg-black text-white",
                nav_inactive: "text-black/70 hover:text-black hover:bg-black/5",
                brand,
                booking,
                badge_bg: "bg-black",
                badge_fg: "text-white",
                bar: "bg-black",
            }
        } else {
            Self {
                text: "text-white",
                subtext: "text-white/70",
                pill_bg,
                pill_border,
                nav_active: "bg-white text-black",
                nav_inactive: "text-white/80 hover:text-white hover:bg-white/10",
                brand,
                booking,
                badge_bg: "bg-white",
                badge_fg: "text-black",
                bar: "bg-white",
            }
        }
    }
}

/// Position classes for the three toggle bars.
pub fn menu_bars(open: bool) -> [&'static str; 3] {
    if open {
        ["top-2 rotate-45", "top-1.5 opacity-0", "top-2 -rotate-45"]
    } else {
        ["top-0", "top-1.5 opacity-100", "top-3"]
    }
}

pub fn overlay_classes(open: bool) -> &'static str {
    if open {
        "opacity-100 translate-y-0"
    } else {
        "opacity-0 -translate-y-full pointer-events-none"
    }
}

/// Staggered reveal for overlay links, 50ms per position.
pub fn reveal_delay_ms(index: usize) -> usize {
    index * 50
}

/// Mount effect: reports scroll changes as actions. The returned closure is
/// the effect's teardown and detaches the listener.
pub fn track_scroll(
    viewport: &impl Viewport,
    dispatch: impl Fn(HeaderAction) + 'static,
) -> impl FnOnce() {
    let subscription = watch_scroll(
        viewport,
        Rc::new(move |offset| dispatch(HeaderAction::Scrolled(offset))),
    );
    move || drop(subscription)
}

/// Handler for overlay links: any activation closes the menu.
pub fn close_menu_callback<E: 'static>(dispatch: impl Fn(HeaderAction) + 'static) -> Callback<E> {
    Callback::from(move |_: E| dispatch(HeaderAction::CloseMenu))
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub variant: HeaderVariant,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let state = use_reducer_eq(|| HeaderState::at_offset(BrowserViewport.scroll_offset()));
    let location = use_location();
    let navigator = use_navigator();

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| track_scroll(&BrowserViewport, move |action| dispatcher.dispatch(action)),
            (),
        );
    }

    let look = HeaderLook::derive(props.variant, &state);
    let path = location
        .as_ref()
        .map(|loc| loc.path().to_string())
        .unwrap_or_default();
    let items = nav_items(&path);
    let bars = menu_bars(state.menu_open);
    let item_reveal = if state.menu_open {
        "opacity-100 translate-y-0"
    } else {
        "opacity-0 translate-y-4"
    };

    let toggle_menu = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            state.dispatch(HeaderAction::ToggleMenu);
        })
    };

    let close_menu: Callback<MouseEvent> = {
        let dispatcher = state.dispatcher();
        close_menu_callback(move |action| dispatcher.dispatch(action))
    };

    let open_booking = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Contact);
        }
    });

    html! {
        <>
            <header class="fixed top-0 left-0 w-full z-[100] px-4 py-3 md:px-10 md:py-6 flex items-center justify-between pointer-events-none transition-all duration-500 bg-transparent">
                <div class={classes!("flex", "flex-col", "items-start", "transition-all", "duration-500", look.brand)}>
                    <h1 class={classes!(look.text, "text-lg", "md:text-2xl", "font-serif", "tracking-[0.2em]", "uppercase", "leading-none", "transition-colors", "duration-500")}>
                        {BRAND_NAME}
                    </h1>
                    <span class={classes!(look.subtext, "text-[8px]", "md:text-xs", "tracking-widest", "uppercase", "mt-1", "transition-colors", "duration-500")}>
                        {BRAND_SUBTITLE}
                    </span>
                </div>

                <nav class="pointer-events-auto hidden md:block">
                    <div class={classes!(look.pill_bg, look.pill_border, "backdrop-blur-md", "border", "rounded-full", "py-1.5", "px-2", "flex", "items-center", "gap-1", "shadow-lg", "shadow-black/5", "transition-all", "duration-500")}>
                        { for items.iter().map(|item| {
                            let label_classes = if item.is_active {
                                classes!(look.nav_active, "shadow-sm")
                            } else {
                                classes!(look.nav_inactive)
                            };
                            html! {
                                <Link<Route>
                                    to={item.route.clone()}
                                    classes={classes!("px-5", "py-2", "rounded-full", "text-sm", "font-medium", "transition-all", "duration-500", label_classes)}
                                >
                                    {item.label}
                                </Link<Route>>
                            }
                        }) }
                    </div>
                </nav>

                <div class="flex items-center gap-3 md:gap-4 pointer-events-auto">
                    <button
                        onclick={open_booking}
                        class={classes!("group", "flex", "items-center", "gap-2", "md:gap-3", look.pill_bg, "backdrop-blur-md", "border", look.pill_border, "rounded-full", "pl-4", "md:pl-6", "pr-1.5", "md:pr-2", "py-1.5", "md:py-2", "transition-all", "duration-500", look.booking)}
                        aria-label="Book a room"
                    >
                        <span class={classes!(look.text, "text-[12px]", "md:text-sm", "font-medium", "tracking-wide", "transition-colors", "duration-500")}>
                            {"Booking"}
                        </span>
                        <div class={classes!("w-7", "h-7", "md:w-8", "md:h-8", "rounded-full", look.badge_bg, "flex", "items-center", "justify-center", "transition-colors", "duration-500")}>
                            <svg width="12" height="12" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="3" class={look.badge_fg}>
                                <line x1="7" y1="17" x2="17" y2="7" />
                                <polyline points="7 7 17 7 17 17" />
                            </svg>
                        </div>
                    </button>

                    <button
                        onclick={toggle_menu}
                        class={classes!("md:hidden", "w-10", "h-10", "flex", "items-center", "justify-center", look.pill_bg, "backdrop-blur-md", "border", look.pill_border, "rounded-full", look.text, "transition-all", "duration-500")}
                        aria-label="Toggle menu"
                        aria-expanded={state.menu_open.to_string()}
                    >
                        <div class="relative w-5 h-4">
                            { for bars.iter().map(|position| html! {
                                <span class={classes!("absolute", "left-0", "block", "w-full", "h-0.5", look.bar, "transition-all", "duration-300", *position)} />
                            }) }
                        </div>
                    </button>
                </div>
            </header>

            <div class={classes!("fixed", "inset-0", "z-[90]", "bg-black/95", "backdrop-blur-xl", "transition-all", "duration-500", "md:hidden", overlay_classes(state.menu_open))}>
                <div class="flex flex-col items-center justify-center h-full space-y-8">
                    { for items.iter().enumerate().map(|(i, item)| html! {
                        <div
                            onclick={close_menu.clone()}
                            class={classes!("transition-all", "duration-500", item_reveal)}
                            style={format!("transition-delay: {}ms", reveal_delay_ms(i))}
                        >
                            <Link<Route>
                                to={item.route.clone()}
                                classes="text-white text-3xl font-medium tracking-wide hover:text-white/70 transition-colors"
                            >
                                {item.label}
                            </Link<Route>>
                        </div>
                    }) }
                    <div class="pt-8">
                        <span class="text-white/40 text-xs tracking-widest uppercase">{MENU_TAGLINE}</span>
                    </div>
                </div>
            </div>
        </>
    }
}
