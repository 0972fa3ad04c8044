use yew::prelude::*;

use crate::anchor::Anchor;
use crate::config::REVEAL_THRESHOLD;
use crate::content::rooms::{is_prototype_room, FRAGMENTS_FOR_FINAL_ROOM, ROOMS};
use crate::icons::Icon;
use crate::reveal::{delay_style, use_reveal, Entrance, Stagger};
use crate::sections::common::SectionHeader;

const ROOM_STAGGER: Stagger = Stagger::new(300, 100);

#[function_component(Labirinto)]
pub fn labirinto() -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), REVEAL_THRESHOLD);

    html! {
        <section id={Anchor::Labirinto.id()} ref={node} class="section labirinto">
            <style>{ LABIRINTO_CSS }</style>
            <div class="section-backdrop"></div>
            <div class="maze-pattern"></div>
            <div class="section-content">
                <SectionHeader
                    eyebrow="THE MENTAL LABYRINTH"
                    title="THE"
                    highlight="NINE ROOMS"
                    lead="Each room is a visual representation of an aspect of the protagonist's psyche, distorted through the lens of a security complex. Each finds a dark echo in one of Dante's circles of Hell and a connection with Freud's theory."
                    visible={visible}
                />

                <div class={classes!("room-progress", Entrance::Fade.classes(visible))} style={delay_style(200)}>
                    <span class="text-cyan">{ Icon::DoorOpen.view() }</span>
                    <div class="room-dots">
                        { for (0..ROOMS.len()).map(|i| html! {
                            <span class={classes!("room-dot", is_prototype_room(i).then_some("lit"))}></span>
                        }) }
                    </div>
                    <span class="text-alert">{ Icon::Skull.view() }</span>
                </div>

                <div class="rooms">
                    { for ROOMS.iter().enumerate().map(|(i, room)| html! {
                        <article class={classes!("card", "room", Entrance::RiseFar.classes(visible))} style={ROOM_STAGGER.style(i)}>
                            <div class="room-grid">
                                <div class="room-marker">
                                    <span class="room-number font-display">{ room.number }</span>
                                    <span class="icon-box text-cyan">{ room.icon.view() }</span>
                                </div>
                                <div>
                                    <div class="room-heading">
                                        <h3 class="font-display">{ room.title }</h3>
                                        <span class="room-subtitle">{ room.subtitle }</span>
                                    </div>
                                    <p class="room-description">{ room.description }</p>
                                    <div class="grid grid-2 room-lenses">
                                        <div class="room-lens border-cyan-soft">
                                            <span class="font-display text-cyan">{ "FREUD" }</span>
                                            <p>{ room.freud }</p>
                                        </div>
                                        <div class="room-lens border-alert-soft">
                                            <span class="font-display text-alert">{ "DANTE" }</span>
                                            <p>{ room.dante }</p>
                                        </div>
                                    </div>
                                    <div class="room-lens room-challenge">
                                        <span class="font-display text-cyan">{ "DESAFIO" }</span>
                                        <p>{ room.challenge }</p>
                                    </div>
                                </div>
                            </div>
                        </article>
                    }) }
                </div>

                <div class={classes!("card", "portal-note", Entrance::Rise.classes(visible))} style={delay_style(1000)}>
                    <h3 class="font-display">
                        <span class="text-cyan">{ Icon::Refresh.view() }</span>
                        { "Navegação: Portais Aleatórios" }
                    </h3>
                    <p>
                        { "O principal método de movimentação entre as salas. Ao ativar um portal, a próxima sala é escolhida " }
                        <strong class="text-cyan">{ "aleatoriamente" }</strong>
                        { " dentro de um conjunto pré-definido. Isso garante que cada \u{201c}corrida\u{201d} pelo labirinto mental seja imprevisível, forçando a adaptação. Para acessar a Sala 9, a cobaia deve ter coletado no mínimo " }
                        <strong class="text-cyan">{ format!("{} Fragmentos da Mente", FRAGMENTS_FOR_FINAL_ROOM) }</strong>
                        { " de salas distintas." }
                    </p>
                </div>
            </div>
        </section>
    }
}

const LABIRINTO_CSS: &str = r#"
    .maze-pattern {
        position: absolute;
        inset: 0;
        opacity: 0.02;
        background-image:
            linear-gradient(90deg, rgba(0, 212, 255, 0.5) 1px, transparent 1px),
            linear-gradient(rgba(0, 212, 255, 0.5) 1px, transparent 1px);
        background-size: 100px 100px;
        pointer-events: none;
    }
    .room-progress { display: flex; justify-content: center; align-items: center; gap: 1rem; margin-bottom: 3rem; }
    .room-dots { display: flex; gap: 0.25rem; }
    .room-dot { width: 0.5rem; height: 0.5rem; border-radius: 50%; background: rgba(255, 255, 255, 0.2); }
    .room-dot.lit { background: var(--cyan); box-shadow: 0 0 10px rgba(0, 212, 255, 0.6); }
    .rooms { display: flex; flex-direction: column; gap: 2rem; }
    .room:hover { border-color: rgba(0, 212, 255, 0.5); }
    .room-grid { display: grid; grid-template-columns: 8rem 1fr; gap: 1.5rem; }
    .room-marker { display: flex; flex-direction: column; gap: 1rem; align-items: flex-start; }
    .room-number { font-size: 3rem; font-weight: 900; color: rgba(0, 212, 255, 0.3); }
    .room-heading { display: flex; flex-wrap: wrap; align-items: center; gap: 0.75rem; margin-bottom: 0.75rem; }
    .room-heading h3 { margin: 0; font-size: 1.5rem; }
    .room-subtitle { font-size: 0.875rem; font-style: italic; color: rgba(0, 212, 255, 0.6); }
    .room-description { color: #d1d5db; line-height: 1.6; }
    .room-lenses { margin-bottom: 1rem; }
    .room-lens { padding: 0.75rem; border-radius: 0.5rem; background: rgba(5, 7, 13, 0.5); }
    .room-lens span { display: block; font-size: 0.75rem; letter-spacing: 0.1em; margin-bottom: 0.25rem; }
    .room-lens p { margin: 0; font-size: 0.875rem; color: #9ca3af; }
    .room-challenge { background: rgba(0, 212, 255, 0.05); border: 1px solid rgba(0, 212, 255, 0.1); }
    .portal-note {
        margin-top: 3rem;
        background: linear-gradient(135deg, rgba(0, 212, 255, 0.1), rgba(255, 59, 59, 0.1));
        border-color: rgba(0, 212, 255, 0.3);
    }
    .portal-note h3 { display: flex; align-items: center; gap: 0.75rem; margin-top: 0; }
    .portal-note p { color: #d1d5db; line-height: 1.6; }
    @media (max-width: 768px) {
        .room-grid { grid-template-columns: 1fr; }
        .room-marker { flex-direction: row; align-items: center; }
    }
"#;
