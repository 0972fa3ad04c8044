use log::info;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::anchor::Anchor;
use crate::config::{PARALLAX_SHIFT_PX, PARALLAX_SPLIT_BASE, PARALLAX_SPLIT_RANGE, PRONAC};
use crate::content::project::{GENRE_TAGS, TAGLINE, TITLE_BOTTOM, TITLE_TOP};
use crate::dom;
use crate::icons::Icon;
use crate::reveal::{delay_style, Entrance};

/// Pointer position relative to the hero, each axis in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

impl Pointer {
    pub const CENTER: Pointer = Pointer { x: 0.5, y: 0.5 };

    /// Normalizes a client position against the hero's bounding box.
    /// Returns `None` for a collapsed box.
    pub fn within(client_x: f64, client_y: f64, left: f64, top: f64, width: f64, height: f64) -> Option<Self> {
        if width <= 0.0 || height <= 0.0 {
            return None;
        }
        Some(Self {
            x: ((client_x - left) / width).clamp(0.0, 1.0),
            y: ((client_y - top) / height).clamp(0.0, 1.0),
        })
    }
}

/// Background layout derived from the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parallax {
    /// Left panel width and divider position, percent.
    pub split: f64,
    /// Right background shift in px; the left one moves the opposite way.
    pub shift_x: f64,
    pub shift_y: f64,
}

impl Parallax {
    pub fn at(pointer: Pointer) -> Self {
        Self {
            split: PARALLAX_SPLIT_BASE + pointer.x * PARALLAX_SPLIT_RANGE,
            shift_x: (pointer.x - 0.5) * PARALLAX_SHIFT_PX,
            shift_y: (pointer.y - 0.5) * PARALLAX_SHIFT_PX,
        }
    }

    pub fn left_width(&self) -> f64 {
        self.split
    }

    pub fn right_width(&self) -> f64 {
        100.0 - self.split
    }

    fn background(&self, image: &str, direction: f64) -> String {
        format!(
            "background-image: url({}); transform: scale(1.1) translate({}px, {}px);",
            image,
            direction * self.shift_x,
            direction * self.shift_y,
        )
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let node = use_node_ref();
    let loaded = use_state(|| false);
    let pointer = use_state_eq(|| Pointer::CENTER);

    {
        let loaded = loaded.clone();
        use_mount(move || {
            info!("Hero mounted");
            loaded.set(true);
        });
    }

    {
        let node = node.clone();
        let pointer = pointer.clone();
        use_event_with_window("mousemove", move |e: MouseEvent| {
            let Some(hero) = node.cast::<Element>() else {
                return;
            };
            let rect = hero.get_bounding_client_rect();
            if let Some(p) = Pointer::within(
                e.client_x() as f64,
                e.client_y() as f64,
                rect.left(),
                rect.top(),
                rect.width(),
                rect.height(),
            ) {
                pointer.set(p);
            }
        });
    }

    let parallax = Parallax::at(*pointer);
    let visible = *loaded;
    let at = |entrance: Entrance, delay_ms: u32| (entrance.classes(visible), delay_style(delay_ms));

    let scroll_to = |anchor: Anchor| Callback::from(move |_: MouseEvent| dom::go_to(anchor));

    let (badge_class, badge_delay) = at(Entrance::Rise, 200);
    let (title_class, title_delay) = at(Entrance::Rise, 300);
    let (tagline_class, tagline_delay) = at(Entrance::Rise, 500);
    let (synopsis_class, synopsis_delay) = at(Entrance::Rise, 600);
    let (tags_class, tags_delay) = at(Entrance::Rise, 700);
    let (line_class, line_delay) = at(Entrance::Grow, 800);
    let (cta_class, cta_delay) = at(Entrance::Rise, 900);
    let (side_class, side_delay) = at(Entrance::Fade, 1100);
    let (scroll_class, scroll_delay) = at(Entrance::Fade, 1300);

    html! {
        <section ref={node} class="hero">
            <style>{ HERO_CSS }</style>
            <div class="hero-split">
                <div class="hero-panel" style={format!("width: {}%;", parallax.left_width())}>
                    <div class="hero-bg" style={parallax.background("/assets/hero_abyss.jpg", -1.0)}></div>
                    <div class="hero-vignette left"></div>
                </div>
                <div class="hero-panel" style={format!("width: {}%;", parallax.right_width())}>
                    <div class="hero-bg" style={parallax.background("/assets/hero_interface.jpg", 1.0)}></div>
                    <div class="hero-scanlines"></div>
                    <div class="hero-vignette right"></div>
                </div>
            </div>
            <div class="hero-divider" style={format!("left: {}%;", parallax.split)}></div>

            <div class="hero-content">
                <div class={badge_class} style={badge_delay}>
                    <div class="hero-pronac">
                        <span class="font-display faint">{ "PRONAC" }</span>
                        <span class="font-display text-cyan">{ PRONAC }</span>
                    </div>
                </div>

                <div class={title_class} style={title_delay}>
                    <h1 class="hero-title font-display">
                        <span class="hero-title-top">{ TITLE_TOP }</span>
                        <br />
                        <span class="text-gradient-cyan">{ TITLE_BOTTOM }</span>
                    </h1>
                </div>

                <div class={tagline_class} style={tagline_delay}>
                    <p class="hero-tagline">{ TAGLINE }</p>
                </div>

                <div class={synopsis_class} style={synopsis_delay}>
                    <p class="hero-synopsis muted">
                        { "Um jogo de " }<span class="text-alert">{ "terror psicológico cooperativo assimétrico" }</span>
                        { " para dois jogadores. A \u{201c}Cobaia\u{201d} (Isaac) imerge em seu próprio subconsciente, um labirinto distorcido de segurança e pesquisa em ruínas, inspirado nos círculos do " }
                        <span class="hero-white">{ "Inferno de Dante" }</span>
                        { ". O \u{201c}Operador Ego\u{201d} (Liam) monitora a Cobaia de uma sala de controle externa, utilizando o sistema" }
                        <span class="text-cyan">{ " E.G.O." }</span>
                        { " para analisar dados psíquicos em tempo real. Juntos, devem resolver quebra-cabeças complexos e libertar \u{201c}Fragmentos da Mente\u{201d} necessários para a cura, enquanto evitam as \u{201c}Manifestações Psíquicas\u{201d}: encarnações físicas dos medos e traumas mais profundos." }
                    </p>
                </div>

                <div class={classes!("hero-tags", tags_class)} style={tags_delay}>
                    { for GENRE_TAGS.iter().map(|tag| html! {
                        <span class="pill chip-cyan border-cyan-soft">{ tag.to_uppercase() }</span>
                    }) }
                </div>

                <div class={classes!("divider", line_class)} style={line_delay}></div>

                <div class={classes!("hero-ctas", cta_class)} style={cta_delay}>
                    <button class="btn btn-cyan" onclick={scroll_to(Anchor::Conceito)}>
                        { Icon::ChevronDown.view() }{ "CONHEÇA O PROJETO" }
                    </button>
                    <button class="btn btn-alert" onclick={scroll_to(Anchor::Investir)}>
                        { Icon::ExternalLink.view() }{ "INVISTA VIA LEI ROUANET" }
                    </button>
                </div>
            </div>

            <div class={classes!("hero-side", "left", side_class.clone())} style={side_delay.clone()}>
                <span class="hero-side-line alert"></span>
                <span class="hero-side-label font-display text-alert">{ "A COBAIA" }</span>
            </div>
            <div class={classes!("hero-side", "right", side_class)} style={side_delay}>
                <span class="hero-side-label font-display text-cyan">{ "O OPERADOR" }</span>
                <span class="hero-side-line cyan"></span>
            </div>

            <div class={classes!("hero-scroll", scroll_class)} style={scroll_delay}>
                <span class="faint">{ "SCROLL" }</span>
                <span class="hero-scroll-line pulse"></span>
            </div>
        </section>
    }
}

const HERO_CSS: &str = r#"
    .hero { position: relative; min-height: 100vh; width: 100%; overflow: hidden; background: var(--abyss); }
    .hero .reveal { transition-duration: 1000ms; }
    .hero-split { position: absolute; inset: 0; display: flex; }
    .hero-panel { position: relative; height: 100%; overflow: hidden; transition: width 300ms ease-out; }
    .hero-bg {
        position: absolute;
        inset: 0;
        background-size: cover;
        background-position: center;
        transition: transform 700ms;
    }
    .hero-vignette { position: absolute; inset: 0; }
    .hero-vignette.left { background: linear-gradient(to right, transparent 60%, rgba(5, 7, 13, 0.9)); }
    .hero-vignette.right { background: linear-gradient(to left, transparent 60%, rgba(5, 7, 13, 0.9)); }
    .hero-scanlines {
        position: absolute;
        inset: 0;
        background: linear-gradient(transparent 50%, rgba(0, 212, 255, 0.03) 50%);
        background-size: 100% 4px;
    }
    .hero-divider {
        position: absolute;
        top: 0; bottom: 0;
        width: 4px;
        background: linear-gradient(to bottom, transparent, rgba(0, 212, 255, 0.5), transparent);
        box-shadow: 0 0 20px rgba(0, 212, 255, 0.5), 0 0 40px rgba(0, 212, 255, 0.3);
        transition: left 300ms;
    }
    .hero-content {
        position: relative;
        z-index: 10;
        min-height: 100vh;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        padding: 0 1rem;
        text-align: center;
    }
    .hero-pronac {
        display: inline-flex;
        align-items: center;
        gap: 0.75rem;
        padding: 0.5rem 1rem;
        margin-bottom: 1.5rem;
        border-radius: 999px;
        background: rgba(0, 212, 255, 0.1);
        border: 1px solid rgba(0, 212, 255, 0.3);
    }
    .hero-title { font-size: clamp(3rem, 10vw, 6rem); font-weight: 900; margin: 0 0 1rem; }
    .hero-title-top { text-shadow: 0 0 30px rgba(0, 212, 255, 0.5); }
    .hero-tagline { max-width: 48rem; font-size: clamp(1.1rem, 2.5vw, 1.5rem); color: #d1d5db; }
    .hero-synopsis { max-width: 56rem; margin-top: 1.5rem; line-height: 1.7; }
    .hero-white { color: #fff; }
    .hero-tags { display: flex; flex-wrap: wrap; justify-content: center; gap: 0.75rem; margin: 1.5rem 0 2rem; }
    .hero-ctas { display: flex; flex-wrap: wrap; justify-content: center; gap: 1rem; margin-top: 2rem; }
    .hero-side {
        position: absolute;
        top: 50%;
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 0.5rem;
        transform: translateY(-50%);
    }
    .hero-side.left { left: 2rem; }
    .hero-side.right { right: 2rem; }
    .hero-side-label { font-size: 0.75rem; letter-spacing: 0.3em; writing-mode: vertical-lr; transform: rotate(180deg); }
    .hero-side-line { width: 1px; height: 4rem; }
    .hero-side-line.alert { background: linear-gradient(transparent, rgba(255, 59, 59, 0.5), transparent); }
    .hero-side-line.cyan { background: linear-gradient(transparent, rgba(0, 212, 255, 0.5), transparent); }
    .hero-scroll {
        position: absolute;
        bottom: 2rem;
        left: 50%;
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 0.5rem;
        font-size: 0.75rem;
        letter-spacing: 0.3em;
        transform: translateX(-50%);
    }
    .hero-scroll-line { width: 1px; height: 2rem; background: linear-gradient(rgba(0, 212, 255, 0.5), transparent); }
    @media (max-width: 1024px) {
        .hero-side { display: none; }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn centered_pointer_splits_evenly_without_shift() {
        let p = Parallax::at(Pointer::CENTER);
        assert_relative_eq!(p.left_width(), 50.0);
        assert_relative_eq!(p.right_width(), 50.0);
        assert_relative_eq!(p.shift_x, 0.0);
        assert_relative_eq!(p.shift_y, 0.0);
    }

    #[test]
    fn split_tracks_pointer_and_always_fills_the_width() {
        for x in [0.0, 0.1, 0.33, 0.5, 0.75, 1.0] {
            let p = Parallax::at(Pointer { x, y: 0.2 });
            assert_relative_eq!(p.left_width(), 30.0 + 40.0 * x);
            assert_relative_eq!(p.right_width(), 70.0 - 40.0 * x);
            assert_relative_eq!(p.left_width() + p.right_width(), 100.0);
        }
    }

    #[test]
    fn shift_reaches_ten_pixels_at_the_edges() {
        let p = Parallax::at(Pointer { x: 1.0, y: 0.0 });
        assert_relative_eq!(p.shift_x, 10.0);
        assert_relative_eq!(p.shift_y, -10.0);
    }

    #[test]
    fn pointer_is_normalized_to_the_hero_box() {
        let p = Pointer::within(150.0, 300.0, 100.0, 100.0, 200.0, 800.0);
        assert_eq!(p, Some(Pointer { x: 0.25, y: 0.25 }));

        let outside = Pointer::within(-50.0, 2000.0, 0.0, 0.0, 100.0, 100.0);
        assert_eq!(outside, Some(Pointer { x: 0.0, y: 1.0 }));

        assert_eq!(Pointer::within(10.0, 10.0, 0.0, 0.0, 0.0, 100.0), None);
    }
}
