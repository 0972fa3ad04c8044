use yew::prelude::*;

use crate::anchor::Anchor;
use crate::config::{PRONAC, REVEAL_THRESHOLD};
use crate::content::budget::TAX_LIMITS;
use crate::content::impact::{ACCESSIBILITY_MEASURES, AUDIENCES, IMPACT_CARDS, INVESTOR_BENEFITS};
use crate::icons::Icon;
use crate::reveal::{delay_style, use_reveal, Entrance, Stagger};
use crate::sections::common::SectionHeader;

const CARD_STAGGER: Stagger = Stagger::new(300, 150);

#[function_component(Impacto)]
pub fn impacto() -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), REVEAL_THRESHOLD);
    let rise = |delay_ms: u32| (Entrance::Rise.classes(visible), delay_style(delay_ms));

    let (badge_class, badge_delay) = rise(200);
    let (measures_class, measures_delay) = rise(500);
    let (rouanet_class, rouanet_delay) = rise(600);
    let (audience_class, audience_delay) = rise(700);

    html! {
        <section id={Anchor::Impacto.id()} ref={node} class="section impacto">
            <style>{ IMPACTO_CSS }</style>
            <div class="section-backdrop"></div>
            <div class="impact-pattern"></div>
            <div class="section-content">
                <SectionHeader
                    eyebrow="LEI ROUANET"
                    title="CULTURAL"
                    highlight="IMPACT"
                    lead={format!("Project approved by the Federal Law for Cultural Incentive (PRONAC {}) with a commitment to democratize access to digital culture and train new professionals for the Brazilian game industry.", PRONAC)}
                    visible={visible}
                />

                <div class={classes!("impact-badge-row", badge_class)} style={badge_delay}>
                    <div class="impact-badge">
                        <span class="text-cyan">{ Icon::Book.view() }</span>
                        <div>
                            <span class="font-display impact-badge-label">{ "PRONAC" }</span>
                            <span class="font-display impact-badge-value">{ PRONAC }</span>
                        </div>
                        <span class="text-alert">{ Icon::Heart.view() }</span>
                    </div>
                </div>

                <div class="grid grid-3 impact-cards">
                    { for IMPACT_CARDS.iter().enumerate().map(|(i, card)| html! {
                        <div class={classes!("card", "impact-card", Entrance::RiseFar.classes(visible))} style={CARD_STAGGER.style(i)}>
                            <div class="impact-card-heading">
                                <span class="icon-box text-cyan">{ card.icon.view() }</span>
                                <div>
                                    <h3 class="font-display">{ card.title }</h3>
                                    if let Some(stat) = card.stat {
                                        <span class="font-display text-cyan impact-stat">{ stat }</span>
                                    }
                                </div>
                            </div>
                            <p class="impact-description">{ card.description }</p>
                            <ul class="bullets">
                                { for card.details.iter().map(|detail| html! {
                                    <li><span class="dot-cyan"></span>{ *detail }</li>
                                }) }
                            </ul>
                        </div>
                    }) }
                </div>

                <div class={classes!("impact-block", measures_class)} style={measures_delay}>
                    <h3 class="subheading font-display">{ "MEDIDAS DE " }<span class="text-cyan">{ "ACESSIBILIDADE" }</span></h3>
                    <div class="grid grid-4">
                        { for ACCESSIBILITY_MEASURES.iter().map(|measure| html! {
                            <div class="card measure">
                                <span class="icon-box text-cyan">{ measure.icon.view() }</span>
                                <h4 class="font-display">{ measure.title }</h4>
                                <p class="muted">{ measure.description }</p>
                            </div>
                        }) }
                    </div>
                </div>

                <div class={classes!("card", "rouanet-card", rouanet_class)} style={rouanet_delay}>
                    <div class="grid grid-2">
                        <div>
                            <h3 class="font-display rouanet-title">
                                <span class="text-cyan">{ Icon::Users.view() }</span>
                                { "Como Funciona a Lei Rouanet" }
                            </h3>
                            <p class="rouanet-text">
                                { "A Lei Federal de Incentivo à Cultura permite que empresas e pessoas físicas destinem parte de seus impostos de renda para projetos culturais aprovados pelo Ministério da Cultura. Seu investimento se transforma em cultura, educação e desenvolvimento artístico." }
                            </p>
                            <ul class="tax-limits">
                                { for TAX_LIMITS.iter().map(|limit| html! {
                                    <li>
                                        <span class="tax-percent font-display text-cyan">{ format!("{}%", limit.percent) }</span>
                                        <span><strong>{ format!("{}:", limit.who) }</strong>{ " " }{ limit.condition }</span>
                                    </li>
                                }) }
                            </ul>
                        </div>
                        <div class="benefits-box">
                            <p class="muted">{ "Ao investir neste projeto cultural, você:" }</p>
                            <ul class="bullets">
                                { for INVESTOR_BENEFITS.iter().map(|benefit| html! {
                                    <li><span class="dot-alert"></span>{ *benefit }</li>
                                }) }
                            </ul>
                        </div>
                    </div>
                </div>

                <div class={classes!("card", "audience-card", audience_class)} style={audience_delay}>
                    <h3 class="font-display">{ "PÚBLICO-ALVO DO PROJETO" }</h3>
                    <div class="grid grid-4">
                        { for AUDIENCES.iter().map(|audience| html! {
                            <div class="audience">
                                <span class="text-cyan">{ audience.icon.view() }</span>
                                <span>{ audience.label }</span>
                                <span class="faint">{ audience.description }</span>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

const IMPACTO_CSS: &str = r#"
    .impact-pattern {
        position: absolute;
        inset: 0;
        opacity: 0.02;
        background-image:
            radial-gradient(circle at 25% 25%, rgba(0, 212, 255, 0.3) 1px, transparent 1px),
            radial-gradient(circle at 75% 75%, rgba(255, 59, 59, 0.3) 1px, transparent 1px);
        background-size: 50px 50px;
        pointer-events: none;
    }
    .impact-badge-row { display: flex; justify-content: center; margin-bottom: 3rem; }
    .impact-badge {
        display: inline-flex;
        align-items: center;
        gap: 1rem;
        padding: 1rem 2rem;
        border-radius: 0.5rem;
        text-align: center;
        background: linear-gradient(90deg, rgba(0, 212, 255, 0.2), rgba(255, 59, 59, 0.2));
        border: 1px solid rgba(0, 212, 255, 0.3);
    }
    .impact-badge-label { display: block; font-size: 0.75rem; color: rgba(0, 212, 255, 0.6); }
    .impact-badge-value { font-size: 1.5rem; font-weight: 700; }
    .impact-cards { gap: 1.5rem; margin-bottom: 4rem; }
    .impact-card:hover { border-color: rgba(0, 212, 255, 0.5); box-shadow: 0 0 20px rgba(0, 212, 255, 0.35); }
    .impact-card-heading { display: flex; align-items: flex-start; gap: 1rem; margin-bottom: 1rem; }
    .impact-card-heading h3 { margin: 0 0 0.25rem; font-size: 1.1rem; }
    .impact-stat { font-size: 1.5rem; font-weight: 700; }
    .impact-description { color: #d1d5db; font-size: 0.875rem; line-height: 1.6; }
    .impact-block { margin-bottom: 4rem; }
    .measure h4 { margin: 0.75rem 0 0.5rem; font-size: 0.875rem; }
    .measure p { margin: 0; font-size: 0.8rem; }
    .rouanet-card { padding: 2rem; border-color: rgba(0, 212, 255, 0.3); }
    .rouanet-title { display: flex; align-items: center; gap: 0.75rem; margin-top: 0; }
    .rouanet-text { color: #d1d5db; line-height: 1.6; }
    .tax-limits { list-style: none; padding: 0; }
    .tax-limits li { display: flex; align-items: center; gap: 0.75rem; margin-bottom: 0.75rem; font-size: 0.875rem; color: #d1d5db; }
    .tax-percent {
        display: inline-flex;
        align-items: center;
        justify-content: center;
        width: 2.5rem;
        height: 2.5rem;
        border-radius: 50%;
        background: rgba(0, 212, 255, 0.2);
        flex-shrink: 0;
    }
    .benefits-box { padding: 1.5rem; border-radius: 0.5rem; background: rgba(5, 7, 13, 0.5); border: 1px solid rgba(255, 255, 255, 0.1); }
    .audience-card { margin-top: 3rem; text-align: center; }
    .audience-card h3 { margin-top: 0; font-size: 1.1rem; }
    .audience {
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 0.5rem;
        padding: 1rem;
        border-radius: 0.5rem;
        background: rgba(5, 7, 13, 0.5);
        font-size: 0.875rem;
    }
"#;
