use yew::prelude::*;

use crate::anchor::Anchor;
use crate::config::{PRONAC, REVEAL_THRESHOLD};
use crate::content::budget::{total_label, DEDUCTION_PERCENT, STAGES, TAX_LIMITS};
use crate::dom;
use crate::icons::Icon;
use crate::reveal::{delay_style, use_reveal, Entrance, Stagger};
use crate::sections::common::SectionHeader;

const STAGE_STAGGER: Stagger = Stagger::new(400, 100);

#[function_component(Orcamento)]
pub fn orcamento() -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), REVEAL_THRESHOLD);
    let invest = Callback::from(|_: MouseEvent| dom::go_to(Anchor::Investir));

    html! {
        <section id={Anchor::Orcamento.id()} ref={node} class="section orcamento">
            <style>{ ORCAMENTO_CSS }</style>
            <div class="section-backdrop"></div>
            <div class="section-content budget-content">
                <SectionHeader
                    eyebrow="INVESTMENT"
                    title="PROJECT"
                    highlight="BUDGET"
                    lead="Approved values for the development of the playable prototype of the video game Ego's Abyss."
                    visible={visible}
                />

                <div class={classes!("card", "total-card", Entrance::Rise.classes(visible))} style={delay_style(200)}>
                    <div class="total-label">
                        <span class="text-cyan pulse">{ Icon::Landmark.view() }</span>
                        <span class="font-display">{ "VALOR TOTAL APROVADO" }</span>
                    </div>
                    <span class="total-value font-display">{ total_label() }</span>
                    <span class="muted">{ format!("PRONAC {} \u{2022} Lei Federal de Incentivo à Cultura", PRONAC) }</span>
                </div>

                <div class={classes!("budget-stages", Entrance::Rise.classes(visible))} style={delay_style(300)}>
                    <h3 class="subheading font-display">{ "DISTRIBUIÇÃO POR " }<span class="text-cyan">{ "ETAPA" }</span></h3>
                    <div class="grid grid-3">
                        { for STAGES.iter().enumerate().map(|(i, stage)| html! {
                            <div class={classes!("card", "lift", "stage", Entrance::RiseFar.classes(visible))} style={STAGE_STAGGER.style(i)}>
                                <div class="stage-heading">
                                    <span class="font-display stage-name">{ stage.name }</span>
                                    <span class="font-display text-cyan stage-amount">{ stage.amount.to_string() }</span>
                                </div>
                                <ul class="bullets">
                                    { for stage.items.iter().map(|item| html! {
                                        <li><span class="dot-cyan"></span>{ *item }</li>
                                    }) }
                                </ul>
                            </div>
                        }) }
                    </div>
                </div>

                <div class={classes!("card", "fiscal-card", Entrance::Rise.classes(visible))} style={delay_style(700)}>
                    <h3 class="font-display fiscal-title">
                        <span class="text-cyan">{ Icon::TrendingUp.view() }</span>
                        { "BENEFÍCIOS FISCAIS PARA INCENTIVADORES" }
                    </h3>
                    <div class="grid grid-2">
                        <div class="fiscal-box">
                            <div class="fiscal-heading">
                                <span class="fiscal-badge chip-cyan font-display">{ format!("{}%", DEDUCTION_PERCENT) }</span>
                                <div>
                                    <span class="font-display text-cyan fiscal-kicker">{ "DEDUÇÃO FISCAL" }</span>
                                    <span>{ "Do valor investido" }</span>
                                </div>
                            </div>
                            <p class="muted">
                                { format!("O projeto possui enquadramento garantido no Artigo 18 da Lei nº 8.313/91, conferindo dedução fiscal de {}% do valor investido.", DEDUCTION_PERCENT) }
                            </p>
                        </div>
                        <div class="fiscal-box">
                            <div class="fiscal-heading">
                                <span class="fiscal-badge chip-alert">{ Icon::CreditCard.view() }</span>
                                <div>
                                    <span class="font-display text-alert fiscal-kicker">{ "LIMITE" }</span>
                                    <span>{ "Do IR devido" }</span>
                                </div>
                            </div>
                            <ul class="bullets">
                                { for TAX_LIMITS.iter().map(|limit| html! {
                                    <li>
                                        <span class="dot-cyan"></span>
                                        <span>
                                            <strong>{ format!("{}%", limit.percent) }</strong>
                                            { format!(" para {} ({})", limit.who, limit.short) }
                                        </span>
                                    </li>
                                }) }
                            </ul>
                        </div>
                    </div>
                </div>

                <div class={classes!("budget-cta", Entrance::Rise.classes(visible))} style={delay_style(800)}>
                    <p class="muted">
                        { "Transforme seu imposto de renda em cultura. Apoie o desenvolvimento de jogos brasileiros independentes." }
                    </p>
                    <button class="btn btn-cyan" onclick={invest}>
                        { Icon::Wallet.view() }{ "QUERO INVESTIR" }
                    </button>
                </div>
            </div>
        </section>
    }
}

const ORCAMENTO_CSS: &str = r#"
    .budget-content { max-width: 64rem; }
    .total-card {
        display: flex;
        flex-direction: column;
        align-items: center;
        padding: 2rem;
        margin-bottom: 3rem;
        background: linear-gradient(135deg, rgba(0, 212, 255, 0.2), rgba(255, 59, 59, 0.1));
        border-color: rgba(0, 212, 255, 0.3);
        transition: all 500ms;
    }
    .total-card:hover { border-color: var(--cyan); transform: scale(1.05); box-shadow: 0 25px 50px rgba(0, 212, 255, 0.3); }
    .total-label { display: flex; align-items: center; gap: 0.75rem; margin-bottom: 1rem; font-size: 0.875rem; color: rgba(0, 212, 255, 0.6); }
    .total-value { font-size: clamp(2.5rem, 7vw, 3.75rem); font-weight: 900; margin-bottom: 0.5rem; }
    .budget-stages { margin-bottom: 3rem; }
    .stage-heading { display: flex; justify-content: space-between; align-items: center; gap: 0.5rem; margin-bottom: 0.75rem; }
    .stage-name { font-size: 0.875rem; font-weight: 700; }
    .stage:hover .stage-name { color: var(--cyan); }
    .stage-amount { font-size: 1.1rem; font-weight: 700; white-space: nowrap; }
    .fiscal-card { border-color: rgba(0, 212, 255, 0.3); }
    .fiscal-title { display: flex; align-items: center; gap: 0.75rem; margin-top: 0; font-size: 1.1rem; }
    .fiscal-box { padding: 1rem; border-radius: 0.5rem; background: rgba(5, 7, 13, 0.5); border: 1px solid rgba(255, 255, 255, 0.1); }
    .fiscal-heading { display: flex; align-items: center; gap: 0.75rem; margin-bottom: 0.75rem; font-size: 0.875rem; }
    .fiscal-kicker { display: block; font-size: 0.75rem; letter-spacing: 0.1em; }
    .fiscal-badge {
        display: inline-flex;
        align-items: center;
        justify-content: center;
        width: 3rem;
        height: 3rem;
        border-radius: 50%;
        font-weight: 700;
        flex-shrink: 0;
    }
    .fiscal-box p { font-size: 0.8rem; margin: 0; }
    .budget-cta { margin-top: 3rem; text-align: center; }
"#;
