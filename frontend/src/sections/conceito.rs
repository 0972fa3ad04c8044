use yew::prelude::*;

use crate::anchor::Anchor;
use crate::config::CONCEPT_REVEAL_THRESHOLD;
use crate::content::project::{BADGES, OBJECTIVES, ROLE_PITCHES, STATS};
use crate::reveal::{delay_style, use_reveal, Entrance, Stagger};
use crate::sections::common::SectionHeader;

const BADGE_STAGGER: Stagger = Stagger::new(400, 100);
const OBJECTIVE_STAGGER: Stagger = Stagger::new(0, 100);
const STAT_STAGGER: Stagger = Stagger::new(700, 100);

#[function_component(Conceito)]
pub fn conceito() -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), CONCEPT_REVEAL_THRESHOLD);

    html! {
        <section id={Anchor::Conceito.id()} ref={node} class="section conceito">
            <style>{ CONCEITO_CSS }</style>
            <div class="section-backdrop"></div>
            <div class="section-content">
                <SectionHeader eyebrow="HIGH CONCEPT" title="O" highlight="CONCEITO" visible={visible} />

                <p class={classes!("concept-pitch", Entrance::Rise.classes(visible))} style={delay_style(200)}>
                    <strong>{ "Ego's Abyss" }</strong>{ " é um jogo de " }
                    <span class="text-alert">{ "terror psicológico cooperativo assimétrico" }</span>
                    { " onde um jogador se aventura nas profundezas de seu próprio " }
                    <span class="text-cyan">{ "subconsciente" }</span>
                    { ", uma representação distorcida de um complexo de segurança inspirada nos " }
                    <strong>{ "círculos do Inferno de Dante" }</strong>
                    { ", para confrontar traumas e medos, enquanto seu amigo, operando o " }
                    <strong class="text-cyan">{ "Sistema E.G.O." }</strong>
                    { ", o monitora em tempo real através de dados psicológicos e físicos, guiando-o e protegendo-o das manifestações que tentam prender a mente em seu próprio inferno." }
                </p>

                <div class="concept-badges">
                    { for BADGES.iter().enumerate().map(|(i, badge)| {
                        let style = badge.accent.style();
                        html! {
                            <span
                                class={classes!("pill", "concept-badge", "font-display", style.text, style.border, Entrance::Rise.classes(visible))}
                                style={BADGE_STAGGER.style(i)}
                            >
                                { badge.icon.view() }{ badge.text }
                            </span>
                        }
                    }) }
                </div>

                <div class={Entrance::Rise.classes(visible)} style={delay_style(500)}>
                    <h3 class="subheading font-display">{ "OBJETIVOS " }<span class="text-cyan">{ "ESPECÍFICOS" }</span></h3>
                    <div class="grid grid-3">
                        { for OBJECTIVES.iter().enumerate().map(|(i, objective)| html! {
                            <div class={classes!("card", "lift", Entrance::Rise.classes(visible))} style={OBJECTIVE_STAGGER.style(i)}>
                                <div class="objective">
                                    <span class="icon-box text-cyan">{ objective.icon.view() }</span>
                                    <div>
                                        <h4 class="font-display">{ objective.title }</h4>
                                        <p class="muted">{ objective.description }</p>
                                    </div>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>

                <div class={classes!("grid", "grid-2", "concept-roles", Entrance::Rise.classes(visible))} style={delay_style(600)}>
                    { for ROLE_PITCHES.iter().map(|role| {
                        let style = role.accent.style();
                        html! {
                            <div class={classes!("card", "lift", "role-card", style.border)}>
                                <div class="role-heading">
                                    <span class={classes!("icon-box", style.chip)}>{ role.icon.view() }</span>
                                    <h3 class="font-display">{ role.title }</h3>
                                </div>
                                <p>{ role.text }</p>
                            </div>
                        }
                    }) }
                </div>

                <div class="concept-stats">
                    { for STATS.iter().enumerate().map(|(i, stat)| html! {
                        <div class={classes!("stat", Entrance::Rise.classes(visible))} style={STAT_STAGGER.style(i)}>
                            <div class="stat-value font-display text-cyan">{ stat.value }</div>
                            <div class="stat-label">{ stat.label }</div>
                            <div class="faint">{ stat.sublabel }</div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

const CONCEITO_CSS: &str = r#"
    .conceito { display: flex; align-items: center; }
    .concept-pitch {
        text-align: center;
        font-size: clamp(1.2rem, 2.6vw, 1.8rem);
        line-height: 1.6;
        color: #d1d5db;
        margin-bottom: 3rem;
    }
    .concept-pitch strong { color: #fff; }
    .concept-badges { display: flex; flex-wrap: wrap; justify-content: center; gap: 1rem; margin-bottom: 4rem; }
    .concept-badge { padding: 0.75rem 1.5rem; }
    .objective { display: flex; align-items: flex-start; gap: 0.75rem; }
    .objective h4 { margin: 0 0 0.25rem; font-size: 0.9rem; }
    .objective p { margin: 0; font-size: 0.8rem; }
    .concept-roles { gap: 2rem; margin: 4rem 0; }
    .role-heading { display: flex; align-items: center; gap: 0.75rem; margin-bottom: 1rem; }
    .role-heading h3 { margin: 0; font-size: 1.25rem; }
    .role-card p { color: #d1d5db; line-height: 1.6; }
    .concept-stats { display: grid; grid-template-columns: repeat(auto-fit, minmax(9rem, 1fr)); gap: 2rem; text-align: center; }
    .stat-value { font-size: clamp(2.25rem, 5vw, 3rem); font-weight: 700; margin-bottom: 0.5rem; }
    .stat-label { font-size: 0.875rem; letter-spacing: 0.1em; }
"#;
