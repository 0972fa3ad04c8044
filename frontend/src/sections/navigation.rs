use log::{debug, warn};
use web_sys::{Event, MouseEvent};
use yew::prelude::*;

use crate::anchor::{Anchor, NAV_ITEMS};
use crate::config::{MENU_STAGGER_STEP_MS, NAV_SCROLL_THRESHOLD};
use crate::dom::{self, WindowListener};
use crate::icons::Icon;
use crate::reveal::{delay_style, Stagger};

/// The bar gets its backdrop strictly past the threshold.
pub fn backdrop_active(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLL_THRESHOLD
}

const MENU_STAGGER: Stagger = Stagger::new(0, MENU_STAGGER_STEP_MS);

#[function_component(Navigation)]
pub fn navigation() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let on_scroll = move |_: Event| match dom::scroll_y() {
                    Ok(y) => is_scrolled.set(backdrop_active(y)),
                    Err(e) => warn!("{}", e),
                };
                let listener = WindowListener::passive("scroll", on_scroll)
                    .map_err(|e| warn!("navigation scroll tracking disabled: {}", e))
                    .ok();
                move || drop(listener)
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            debug!("mobile menu {}", if *menu_open { "closed" } else { "opened" });
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let scroll_to = |anchor: Anchor| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            dom::go_to(anchor);
        })
    };

    let on_logo = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        if let Err(e) = dom::scroll_to_top() {
            warn!("could not scroll to top: {}", e);
        }
    });

    html! {
        <>
            <style>{ NAV_CSS }</style>
            <nav class={classes!("top-nav", (*is_scrolled).then_some("scrolled"))}>
                <div class="nav-content">
                    <a href="#" class="nav-logo font-display" onclick={on_logo}>
                        <span class="text-cyan">{ "EGO'S" }</span>
                        <span class="text-alert">{ " ABYSS" }</span>
                    </a>

                    <div class="nav-links">
                        { for NAV_ITEMS.iter().map(|&anchor| html! {
                            <a href={anchor.href()} class="nav-link" onclick={scroll_to(anchor)}>
                                { anchor.label().to_uppercase() }
                            </a>
                        }) }
                        <a href={Anchor::Investir.href()} class="btn btn-cyan nav-cta" onclick={scroll_to(Anchor::Investir)}>
                            { "INVISTA" }
                        </a>
                    </div>

                    <button class="burger-menu" aria-label="Menu" onclick={toggle_menu}>
                        { if *menu_open { Icon::Close.view() } else { Icon::Menu.view() } }
                    </button>
                </div>
            </nav>

            <div class={classes!("mobile-menu", (*menu_open).then_some("open"))}>
                <div class="mobile-menu-backdrop" onclick={close_menu}></div>
                <div class="mobile-menu-items">
                    { for NAV_ITEMS.iter().enumerate().map(|(i, &anchor)| html! {
                        <a
                            href={anchor.href()}
                            class="mobile-link font-display"
                            style={MENU_STAGGER.style(i)}
                            onclick={scroll_to(anchor)}
                        >
                            { anchor.label().to_uppercase() }
                        </a>
                    }) }
                    <a
                        href={Anchor::Investir.href()}
                        class="btn btn-cyan mobile-link"
                        style={delay_style(MENU_STAGGER.delay_ms(NAV_ITEMS.len()))}
                        onclick={scroll_to(Anchor::Investir)}
                    >
                        { "INVISTA" }
                    </a>
                </div>
            </div>
        </>
    }
}

const NAV_CSS: &str = r#"
    .top-nav {
        position: fixed;
        top: 0; left: 0; right: 0;
        z-index: 50;
        padding: 1.5rem 0;
        transition: all 500ms;
    }
    .top-nav.scrolled {
        padding: 1rem 0;
        background: rgba(5, 7, 13, 0.9);
        backdrop-filter: blur(12px);
        border-bottom: 1px solid rgba(0, 212, 255, 0.2);
    }
    .nav-content {
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 1.5rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .nav-logo { font-size: 1.25rem; font-weight: 700; text-decoration: none; }
    .nav-links { display: flex; align-items: center; gap: 1.5rem; }
    .nav-link {
        font-size: 0.8rem;
        letter-spacing: 0.1em;
        color: #9ca3af;
        text-decoration: none;
        transition: color 300ms;
    }
    .nav-link:hover { color: var(--cyan); }
    .nav-cta { padding: 0.5rem 1.25rem; }
    .burger-menu {
        display: none;
        background: none;
        border: none;
        color: var(--cyan);
        font-size: 1.5rem;
        cursor: pointer;
    }
    .mobile-menu {
        position: fixed;
        inset: 0;
        z-index: 40;
        pointer-events: none;
        opacity: 0;
        transition: opacity 300ms;
    }
    .mobile-menu.open { pointer-events: auto; opacity: 1; }
    .mobile-menu-backdrop { position: absolute; inset: 0; background: rgba(5, 7, 13, 0.95); backdrop-filter: blur(12px); }
    .mobile-menu-items {
        position: relative;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        gap: 1.5rem;
        height: 100%;
    }
    .mobile-link {
        font-size: 1.25rem;
        color: #fff;
        text-decoration: none;
        opacity: 0;
        transform: translateY(1rem);
        transition: opacity 300ms, transform 300ms;
    }
    .mobile-menu.open .mobile-link { opacity: 1; transform: none; }
    @media (max-width: 1024px) {
        .nav-links { display: none; }
        .burger-menu { display: block; }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_switches_strictly_past_the_threshold() {
        assert!(!backdrop_active(0.0));
        assert!(!backdrop_active(100.0));
        assert!(backdrop_active(100.5));
        assert!(backdrop_active(2400.0));
        // Scrolling back up drops it again.
        assert!(!backdrop_active(99.0));
    }

    #[test]
    fn menu_cta_follows_the_last_item() {
        assert_eq!(MENU_STAGGER.delay_ms(0), 0);
        assert_eq!(MENU_STAGGER.delay_ms(7), 350);
        assert_eq!(MENU_STAGGER.delay_ms(NAV_ITEMS.len()), 400);
    }
}
