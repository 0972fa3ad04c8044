use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::anchor::Anchor;
use crate::config::{CARD_REST_DEG, CARD_TILT_DEG, REVEAL_THRESHOLD};
use crate::content::gameplay::{CharacterCard, CHARACTERS, EGO_MODULES};
use crate::icons::Icon;
use crate::reveal::{delay_style, use_reveal, Entrance, Stagger};
use crate::sections::common::{Bullets, Corners, SectionHeader};
use crate::sections::hero::Pointer;

const CARD_STAGGER: Stagger = Stagger::new(0, 200);
const BULLET_STAGGER: Stagger = Stagger::new(0, 50);

/// Pointer offset from the card centre, each axis in `[-0.5, 0.5]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub x: f64,
    pub y: f64,
}

impl From<Pointer> for Tilt {
    fn from(p: Pointer) -> Self {
        Self { x: p.x - 0.5, y: p.y - 0.5 }
    }
}

impl Tilt {
    /// `(rotateY, rotateX)` in degrees.
    pub fn angles(&self) -> (f64, f64) {
        (self.x * CARD_TILT_DEG, -self.y * CARD_TILT_DEG)
    }
}

/// Cards lean toward the centre line when idle: the left one turns one way,
/// the rest the other.
pub fn resting_angle(index: usize) -> f64 {
    if index == 0 {
        -CARD_REST_DEG
    } else {
        CARD_REST_DEG
    }
}

pub fn card_transform(hover: Option<Tilt>, index: usize) -> String {
    match hover {
        Some(tilt) => {
            let (y, x) = tilt.angles();
            format!("transform: rotateY({}deg) rotateX({}deg) scale(1.02);", y, x)
        }
        None => format!("transform: rotateY({}deg);", resting_angle(index)),
    }
}

#[derive(Properties, PartialEq)]
struct GameplayCardProps {
    card: CharacterCard,
    index: usize,
    visible: bool,
}

#[function_component(GameplayCard)]
fn gameplay_card(props: &GameplayCardProps) -> Html {
    let GameplayCardProps { card, index, visible } = *props;
    let node = use_node_ref();
    let hover = use_state_eq(|| None::<Tilt>);
    let style = card.accent.style();

    let on_enter = {
        let hover = hover.clone();
        Callback::from(move |_: MouseEvent| hover.set(Some(Tilt::default())))
    };
    let on_leave = {
        let hover = hover.clone();
        Callback::from(move |_: MouseEvent| hover.set(None))
    };
    let on_move = {
        let hover = hover.clone();
        let node = node.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(element) = node.cast::<Element>() else {
                return;
            };
            let rect = element.get_bounding_client_rect();
            let pointer = Pointer::within(
                e.client_x() as f64,
                e.client_y() as f64,
                rect.left(),
                rect.top(),
                rect.width(),
                rect.height(),
            );
            if let Some(pointer) = pointer {
                hover.set(Some(pointer.into()));
            }
        })
    };

    let hovered = hover.is_some();
    let list = |title: &'static str, items: &'static [&'static str]| html! {
        <div class="card-list">
            <h4 class="font-display">{ title }</h4>
            <Bullets items={items} dot={style.dot} stagger={Some(BULLET_STAGGER)} visible={visible} />
        </div>
    };

    html! {
        <div
            ref={node}
            class={classes!("gameplay-card-wrap", Entrance::RiseFar.classes(visible))}
            style={CARD_STAGGER.style(index)}
            onmouseenter={on_enter}
            onmouseleave={on_leave}
            onmousemove={on_move}
        >
            <div
                class={classes!("card", "gameplay-card", style.border, hovered.then_some(style.border_hover), hovered.then_some(style.glow))}
                style={card_transform(*hover, index)}
            >
                <div class={classes!("gameplay-image", hovered.then_some("hovered"))}>
                    <img src={card.image} alt={card.title} />
                    <div class="gameplay-image-fade"></div>
                    <div class={classes!("gameplay-sweep", style.sweep)}></div>
                    <div class="gameplay-title">
                        <div class="gameplay-kicker">
                            <span class={classes!("icon-box", style.chip)}>{ card.icon.view() }</span>
                            <span class={classes!("font-display", style.text)}>{ card.subtitle.to_uppercase() }</span>
                        </div>
                        <h3 class="font-display">{ card.title }</h3>
                    </div>
                </div>
                <div class="gameplay-body">
                    <p>{ card.description }</p>
                    { list("EXPERIÊNCIA", card.features) }
                    { list("HABILIDADES", card.abilities) }
                </div>
                <Corners />
            </div>
        </div>
    }
}

#[function_component(Gameplay)]
pub fn gameplay() -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), REVEAL_THRESHOLD);

    html! {
        <section id={Anchor::Gameplay.id()} ref={node} class="section gameplay">
            <style>{ GAMEPLAY_CSS }</style>
            <div class="section-backdrop"></div>
            <div class="gameplay-grid-pattern"></div>
            <div class="section-content">
                <SectionHeader
                    eyebrow="GAMEPLAY"
                    title="COOPERAÇÃO"
                    highlight="ASSIMÉTRICA"
                    lead="O coração de Ego's Abyss. Dois jogadores, visões complementares, habilidades distintas. A comunicação constante e o trabalho em equipe são absolutamente essenciais para a sobrevivência."
                    visible={visible}
                />

                <div class="grid grid-2 gameplay-cards">
                    { for CHARACTERS.iter().enumerate().map(|(index, card)| html! {
                        <GameplayCard card={*card} index={index} visible={visible} />
                    }) }
                </div>

                <div class={classes!("gameplay-modules", Entrance::Rise.classes(visible))} style={delay_style(500)}>
                    <h3 class="subheading font-display">{ "MÓDULOS DO " }<span class="text-cyan">{ "SISTEMA E.G.O." }</span></h3>
                    <div class="grid grid-4">
                        { for EGO_MODULES.iter().map(|module| html! {
                            <div class="card border-cyan-soft ego-module">
                                <div class="ego-module-name">
                                    <span class="text-cyan">{ module.icon.view() }</span>
                                    <span class="font-display">{ module.name }</span>
                                </div>
                                <p class="muted">{ module.description }</p>
                            </div>
                        }) }
                    </div>
                </div>

                <div class={classes!("gameplay-link", Entrance::Fade.classes(visible))} style={delay_style(500)}>
                    <span class="text-alert">{ Icon::Activity.view() }</span>
                    <span class="gameplay-link-line"></span>
                    <span class="text-cyan">{ Icon::Shield.view() }</span>
                </div>
            </div>
        </section>
    }
}

const GAMEPLAY_CSS: &str = r#"
    .gameplay-grid-pattern {
        position: absolute;
        inset: 0;
        opacity: 0.02;
        background-image:
            linear-gradient(rgba(0, 212, 255, 0.5) 1px, transparent 1px),
            linear-gradient(90deg, rgba(0, 212, 255, 0.5) 1px, transparent 1px);
        background-size: 50px 50px;
        pointer-events: none;
    }
    .gameplay-cards { gap: 2rem; }
    .gameplay-card-wrap { perspective: 1000px; }
    .gameplay-card { padding: 0; cursor: pointer; background: rgba(13, 19, 34, 0.8); transform-style: preserve-3d; }
    .gameplay-image { position: relative; height: 18rem; overflow: hidden; }
    .gameplay-image img { width: 100%; height: 100%; object-fit: cover; transition: transform 500ms; }
    .gameplay-image.hovered img { transform: scale(1.1); }
    .gameplay-image-fade { position: absolute; inset: 0; background: linear-gradient(to top, var(--abyss), rgba(5, 7, 13, 0.5), transparent); }
    .gameplay-sweep { position: absolute; inset: 0; transform: translateY(100%); transition: transform 1000ms; }
    .gameplay-image.hovered .gameplay-sweep { transform: translateY(-100%); }
    .gameplay-title { position: absolute; left: 0; right: 0; bottom: 0; padding: 1.5rem; }
    .gameplay-title h3 { margin: 0; font-size: clamp(1.8rem, 4vw, 2.25rem); }
    .gameplay-kicker { display: flex; align-items: center; gap: 0.75rem; margin-bottom: 0.5rem; font-size: 0.75rem; letter-spacing: 0.1em; }
    .gameplay-body { padding: 1.5rem; }
    .gameplay-body > p { color: #d1d5db; font-size: 1.1rem; line-height: 1.6; margin-bottom: 1.5rem; }
    .card-list { margin-bottom: 1.5rem; }
    .card-list h4 { font-size: 0.85rem; color: rgba(255, 255, 255, 0.6); letter-spacing: 0.1em; margin: 0 0 0.75rem; }
    .gameplay-modules { margin-top: 4rem; }
    .ego-module-name { display: flex; align-items: center; gap: 0.75rem; margin-bottom: 0.5rem; font-weight: 700; font-size: 0.9rem; }
    .ego-module p { margin: 0; font-size: 0.8rem; }
    .ego-module:hover { border-color: var(--cyan); box-shadow: 0 0 20px rgba(0, 212, 255, 0.35); }
    .gameplay-link { display: flex; justify-content: center; align-items: center; gap: 1rem; margin-top: 3rem; }
    .gameplay-link-line { width: 8rem; height: 1px; background: linear-gradient(90deg, rgba(255, 59, 59, 0.5), rgba(0, 212, 255, 0.5)); }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn tilt_follows_the_pointer() {
        let tilt = Tilt::from(Pointer { x: 1.0, y: 0.0 });
        let (rotate_y, rotate_x) = tilt.angles();
        assert_relative_eq!(rotate_y, 5.0);
        assert_relative_eq!(rotate_x, 5.0);

        let (rotate_y, rotate_x) = Tilt::from(Pointer::CENTER).angles();
        assert_relative_eq!(rotate_y, 0.0);
        assert_relative_eq!(rotate_x, 0.0);
    }

    #[test]
    fn idle_cards_lean_toward_each_other() {
        assert_relative_eq!(resting_angle(0), -5.0);
        assert_relative_eq!(resting_angle(1), 5.0);
        assert_eq!(card_transform(None, 0), "transform: rotateY(-5deg);");
        assert!(card_transform(Some(Tilt::default()), 1).ends_with("scale(1.02);"));
    }
}
