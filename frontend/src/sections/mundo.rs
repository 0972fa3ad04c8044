use log::debug;
use yew::prelude::*;

use crate::anchor::Anchor;
use crate::config::REVEAL_THRESHOLD;
use crate::content::world::{MISSION_QUOTE, MISSION_QUOTE_AUTHOR, TIMELINE};
use crate::reveal::{delay_style, use_reveal, Entrance, Stagger};
use crate::sections::common::SectionHeader;

const TIMELINE_STAGGER: Stagger = Stagger::new(0, 200);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Entries alternate sides, starting on the left.
    pub fn of(index: usize) -> Self {
        if index % 2 == 0 {
            Side::Left
        } else {
            Side::Right
        }
    }

    fn class(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

#[function_component(Mundo)]
pub fn mundo() -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), REVEAL_THRESHOLD);
    let active = use_state_eq(|| 0usize);

    html! {
        <section id={Anchor::Mundo.id()} ref={node} class="section mundo">
            <style>{ MUNDO_CSS }</style>
            <div class="section-backdrop"></div>
            <div class="mundo-glow"></div>
            <div class="section-content">
                <SectionHeader
                    eyebrow="NARRATIVA"
                    title="O"
                    highlight="MUNDO"
                    lead="O jogo se desenrola inteiramente dentro da mente do protagonista, manifestada visualmente como um complexo de instalações de segurança e pesquisa em ruínas: externamente organizado, mas internamente caótico, cheio de bloqueios, memórias e medos."
                    visible={visible}
                />

                <div class="timeline">
                    <div class="timeline-line"></div>
                    { for TIMELINE.iter().enumerate().map(|(index, entry)| {
                        let is_active = *active == index;
                        let on_enter = {
                            let active = active.clone();
                            Callback::from(move |_: MouseEvent| {
                                debug!("timeline entry {} active", index);
                                active.set(index);
                            })
                        };
                        html! {
                            <div
                                class={classes!("timeline-row", Side::of(index).class(), Entrance::Rise.classes(visible))}
                                style={TIMELINE_STAGGER.style(index)}
                                onmouseenter={on_enter}
                            >
                                <div class={classes!("card", "timeline-card", is_active.then_some("active"))}>
                                    <div class="timeline-heading">
                                        <span class="icon-box timeline-icon">{ entry.icon.view() }</span>
                                        <div>
                                            <h3 class="font-display">{ entry.title }</h3>
                                            <span class="timeline-subtitle">{ entry.subtitle }</span>
                                        </div>
                                    </div>
                                    <p class="timeline-description">{ entry.description }</p>
                                    <ul class="bullets">
                                        { for entry.details.iter().map(|detail| html! {
                                            <li><span class="dot-cyan"></span>{ *detail }</li>
                                        }) }
                                    </ul>
                                    if let Some(quote) = entry.quote {
                                        <blockquote class="timeline-quote">
                                            { format!("\u{201c}{}\u{201d}", quote) }
                                        </blockquote>
                                    }
                                </div>
                                <span class={classes!("timeline-node", is_active.then_some("active"))}></span>
                            </div>
                        }
                    }) }
                </div>

                <div class={classes!("card", "mission-card", Entrance::Rise.classes(visible))} style={delay_style(800)}>
                    <blockquote class="mission-quote">{ MISSION_QUOTE }</blockquote>
                    <p class="mission-author font-display">{ MISSION_QUOTE_AUTHOR }</p>
                </div>
            </div>
        </section>
    }
}

const MUNDO_CSS: &str = r#"
    .mundo-glow {
        position: absolute;
        inset: 0;
        opacity: 0.3;
        background: radial-gradient(ellipse at center, rgba(0, 212, 255, 0.05) 0%, transparent 70%);
        pointer-events: none;
    }
    .timeline { position: relative; }
    .timeline-line {
        position: absolute;
        left: 50%;
        top: 0; bottom: 0;
        width: 1px;
        background: linear-gradient(transparent, rgba(0, 212, 255, 0.3), transparent);
    }
    .timeline-row { position: relative; display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; }
    .timeline-row.left .timeline-card { grid-column: 1; margin-right: 3rem; text-align: right; }
    .timeline-row.right .timeline-card { grid-column: 2; margin-left: 3rem; }
    .timeline-row.left .timeline-heading { flex-direction: row-reverse; }
    .timeline-row.left .bullets li { flex-direction: row-reverse; }
    .timeline-card { cursor: pointer; background: rgba(13, 19, 34, 0.3); }
    .timeline-card.active { background: rgba(13, 19, 34, 0.6); border-color: rgba(0, 212, 255, 0.5); box-shadow: 0 0 20px rgba(0, 212, 255, 0.35); }
    .timeline-heading { display: flex; align-items: center; gap: 0.75rem; margin-bottom: 1rem; }
    .timeline-heading h3 { margin: 0; font-size: 1.4rem; }
    .timeline-icon { background: rgba(255, 255, 255, 0.05); color: #9ca3af; }
    .timeline-card.active .timeline-icon { background: rgba(0, 212, 255, 0.2); color: var(--cyan); }
    .timeline-subtitle { font-size: 0.875rem; color: rgba(0, 212, 255, 0.6); }
    .timeline-description { color: #d1d5db; line-height: 1.6; }
    .timeline-quote {
        margin: 1rem 0 0;
        padding-top: 1rem;
        border-top: 1px solid rgba(255, 255, 255, 0.1);
        color: rgba(0, 212, 255, 0.7);
        font-style: italic;
        font-size: 0.875rem;
    }
    .timeline-node {
        position: absolute;
        left: 50%;
        top: 2rem;
        width: 1rem;
        height: 1rem;
        border-radius: 50%;
        border: 2px solid rgba(0, 212, 255, 0.5);
        background: var(--abyss);
        transform: translateX(-50%);
        transition: all 300ms;
    }
    .timeline-node.active { background: var(--cyan); border-color: var(--cyan); transform: translateX(-50%) scale(1.5); }
    .mission-card {
        margin-top: 4rem;
        padding: 2rem;
        text-align: center;
        background: linear-gradient(135deg, rgba(0, 212, 255, 0.1), rgba(13, 19, 34, 0.5));
        border-color: rgba(0, 212, 255, 0.3);
    }
    .mission-quote { margin: 0 auto; max-width: 48rem; font-size: 1.2rem; font-style: italic; color: #d1d5db; line-height: 1.7; }
    .mission-author { margin-top: 1.5rem; font-size: 0.875rem; color: rgba(0, 212, 255, 0.6); }
    @media (max-width: 768px) {
        .timeline-line, .timeline-node { display: none; }
        .timeline-row { display: block; margin-bottom: 3rem; }
        .timeline-row.left .timeline-card, .timeline-row.right .timeline-card { margin: 0; text-align: left; }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_alternate_starting_left() {
        let sides: Vec<_> = (0..TIMELINE.len()).map(Side::of).collect();
        assert_eq!(sides, vec![Side::Left, Side::Right, Side::Left, Side::Right]);
    }

    #[test]
    fn only_the_creator_is_quoted() {
        let quoted: Vec<_> = TIMELINE.iter().filter(|e| e.quote.is_some()).map(|e| e.title).collect();
        assert_eq!(quoted, vec!["Dr. Dorian Krauss"]);
    }
}
