use log::warn;
use yew::prelude::*;

use crate::anchor::Anchor;
use crate::config::{
    self, CONTACT_EMAIL, CONTACT_PHONE_DISPLAY, MINISTRY_URL, PRONAC, REVEAL_THRESHOLD,
    ROUANET_URL, TYPEWRITER_INTERVAL_MS, TYPEWRITER_TARGET,
};
use crate::content::budget::{total_label, TaxLimit, DEDUCTION_PERCENT, TAX_LIMITS};
use crate::content::project::FULL_NAME;
use crate::content::schedule::EXECUTION_PERIOD;
use crate::dom;
use crate::icons::Icon;
use crate::reveal::{use_reveal, Entrance, Stagger};
use crate::typewriter::use_typewriter;

/// Footer blocks step in 100 ms apart; the heading goes first.
const BLOCK_STAGGER: Stagger = Stagger::new(0, 100);

fn open(url: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |_: MouseEvent| {
        if let Err(e) = dom::open_external(url) {
            warn!("could not open {}: {}", url, e);
        }
    })
}

fn support_copy(audience: &'static str, limit: &TaxLimit) -> Html {
    html! {
        <div class="support">
            <h4 class="font-display text-cyan">{ audience }</h4>
            <p>
                { format!("{} podem destinar até ", limit.condition) }
                <strong class="text-cyan">{ format!("{}%", limit.percent) }</strong>
                { " do imposto de renda devido para projetos culturais via Lei Rouanet, com " }
                <strong class="text-cyan">{ format!("{}% de dedução fiscal", DEDUCTION_PERCENT) }</strong>
                { " do valor investido." }
            </p>
        </div>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), REVEAL_THRESHOLD);
    let typed = use_typewriter(TYPEWRITER_TARGET, TYPEWRITER_INTERVAL_MS, visible);

    let block = |n: usize, entrance: Entrance| (entrance.classes(visible), BLOCK_STAGGER.style(n));
    let (heading_class, heading_delay) = block(0, Entrance::Rise);
    let (info_class, info_delay) = block(2, Entrance::Rise);
    let (support_class, support_delay) = block(3, Entrance::Rise);
    let (contact_class, contact_delay) = block(4, Entrance::Rise);
    let (links_class, links_delay) = block(5, Entrance::Rise);
    let (logos_class, logos_delay) = block(6, Entrance::Fade);

    let [companies, individuals] = &TAX_LIMITS;

    html! {
        <footer id={Anchor::Investir.id()} ref={node} class="section footer">
            <style>{ FOOTER_CSS }</style>
            <div class="section-backdrop"></div>
            <div class="footer-grid-pattern"></div>
            <div class="section-content footer-content">
                <div class={heading_class} style={heading_delay}>
                    <div class="terminal-dots">
                        <span class="dot-alert"></span>
                        <span class="terminal-yellow"></span>
                        <span class="terminal-green"></span>
                    </div>
                    <h2 class="section-title font-display typed-heading">
                        <span class="text-cyan">{ "$" }</span>{ " " }{ typed }
                        <span class="cursor"></span>
                    </h2>
                    <p class="section-lead footer-lead">
                        { "Transforme seu imposto de renda em cultura. Apoie o desenvolvimento de jogos brasileiros independentes e a formação de novos talentos na indústria criativa." }
                    </p>
                </div>

                <div class={classes!("card", "lift", "border-cyan-soft", "footer-block", info_class)} style={info_delay}>
                    <h3 class="font-display block-title">
                        <span class="text-cyan pulse">{ Icon::Gamepad.view() }</span>{ "Informações do Projeto" }
                    </h3>
                    <div class="grid grid-2">
                        <div class="info">
                            <span class="font-display info-label">{ "PRONAC" }</span>
                            <span class="info-big">{ PRONAC }</span>
                        </div>
                        <div class="info">
                            <span class="font-display info-label">{ "PROJETO" }</span>
                            <span>{ FULL_NAME }</span>
                        </div>
                        <div class="info">
                            <span class="font-display info-label">{ "VALOR APROVADO" }</span>
                            <span class="info-big text-cyan">{ total_label() }</span>
                        </div>
                        if let Some(range) = EXECUTION_PERIOD.date_range() {
                            <div class="info">
                                <span class="font-display info-label">{ "PERÍODO" }</span>
                                <span>{ range }</span>
                            </div>
                        }
                    </div>
                </div>

                <div class={classes!("card", "lift", "footer-block", support_class)} style={support_delay}>
                    <h3 class="font-display block-title">
                        <span class="text-cyan">{ Icon::FileText.view() }</span>{ "Como Apoiar" }
                    </h3>
                    { support_copy("Para Empresas", companies) }
                    <div class="support-separator"></div>
                    { support_copy("Para Pessoas Físicas", individuals) }
                </div>

                <div class={classes!("card", "lift", "footer-block", "contact-card", contact_class)} style={contact_delay}>
                    <h3 class="font-display">{ "Entre em Contato" }</h3>
                    <div class="contacts">
                        <a href={config::mailto()} class="contact">{ Icon::Mail.view() }<span>{ CONTACT_EMAIL }</span></a>
                        <a href={config::tel()} class="contact">{ Icon::Phone.view() }<span>{ CONTACT_PHONE_DISPLAY }</span></a>
                    </div>
                </div>

                <div class={classes!("footer-links", links_class)} style={links_delay}>
                    <button class="btn btn-cyan" onclick={open(MINISTRY_URL)}>
                        { Icon::ExternalLink.view() }{ "MINISTÉRIO DA CULTURA" }
                    </button>
                    <button class="btn btn-alert" onclick={open(ROUANET_URL)}>
                        <span class="pulse">{ Icon::Heart.view() }</span>{ "LEI ROUANET" }
                    </button>
                </div>

                <div class={classes!("footer-logos", logos_class)} style={logos_delay}>
                    <div class="rule"></div>
                    <div class="logos">
                        <div class="logo">
                            <span class="logo-mark ministry">{ Icon::Landmark.view() }</span>
                            <div>
                                <span class="font-display faint logo-label">{ "APOIO" }</span>
                                <span>{ "Ministério da Cultura" }</span>
                            </div>
                        </div>
                        <div class="logo">
                            <span class="logo-mark federal font-display">{ "BR" }</span>
                            <div>
                                <span class="font-display faint logo-label">{ "PATROCÍNIO" }</span>
                                <span>{ "Governo Federal" }</span>
                            </div>
                        </div>
                    </div>
                    <div class="rule"></div>
                </div>

                <div class="copyright">
                    <p class="faint">{ format!("\u{a9} {} Ego's Abyss. Todos os direitos reservados.", EXECUTION_PERIOD.first_year()) }</p>
                    <p class="faint">{ format!("Projeto aprovado pela Lei Federal de Incentivo à Cultura, PRONAC {}", PRONAC) }</p>
                </div>
            </div>
        </footer>
    }
}

const FOOTER_CSS: &str = r#"
    .footer-grid-pattern {
        position: absolute;
        inset: 0;
        opacity: 0.03;
        background-image:
            linear-gradient(rgba(0, 212, 255, 0.5) 1px, transparent 1px),
            linear-gradient(90deg, rgba(0, 212, 255, 0.5) 1px, transparent 1px);
        background-size: 20px 20px;
        pointer-events: none;
    }
    .footer-content { max-width: 56rem; }
    .terminal-dots { display: flex; gap: 0.5rem; margin-bottom: 1rem; }
    .terminal-dots span { width: 0.75rem; height: 0.75rem; border-radius: 50%; }
    .terminal-yellow { background: #eab308; }
    .terminal-green { background: #22c55e; }
    .typed-heading { min-height: 1.2em; }
    @keyframes blink { 50% { opacity: 0; } }
    .cursor {
        display: inline-block;
        width: 0.75rem;
        height: 2rem;
        margin-left: 0.5rem;
        background: var(--cyan);
        animation: blink 1s step-end infinite;
    }
    .footer-lead { margin: 0 0 3rem; }
    .footer-block { margin-bottom: 2rem; }
    .block-title { display: flex; align-items: center; gap: 0.75rem; margin-top: 0; font-size: 1.1rem; }
    .info { display: flex; flex-direction: column; gap: 0.25rem; }
    .info-label { font-size: 0.75rem; letter-spacing: 0.1em; color: rgba(0, 212, 255, 0.6); }
    .info-big { font-size: 1.25rem; }
    .support h4 { margin: 0 0 0.5rem; font-size: 0.875rem; }
    .support p { margin: 0; color: #d1d5db; font-size: 0.875rem; line-height: 1.6; }
    .support-separator { height: 1px; margin: 1rem 0; background: rgba(255, 255, 255, 0.1); }
    .contact-card { text-align: center; background: linear-gradient(135deg, rgba(0, 212, 255, 0.1), rgba(255, 59, 59, 0.1)); border-color: rgba(0, 212, 255, 0.3); }
    .contact-card h3 { margin-top: 0; }
    .contacts { display: flex; flex-wrap: wrap; justify-content: center; gap: 1.5rem; }
    .contact { display: flex; align-items: center; gap: 0.75rem; color: #d1d5db; text-decoration: none; transition: all 300ms; }
    .contact:hover { color: var(--cyan); transform: scale(1.1); }
    .footer-links { display: flex; flex-wrap: wrap; justify-content: center; gap: 1rem; margin: 3rem 0 4rem; }
    .footer-logos { display: flex; flex-direction: column; align-items: center; gap: 1.5rem; margin-bottom: 3rem; }
    .rule { width: 100%; height: 1px; background: linear-gradient(90deg, transparent, rgba(255, 255, 255, 0.2), transparent); }
    .logos { display: flex; flex-wrap: wrap; justify-content: center; gap: 2rem; }
    .logo { display: flex; align-items: center; gap: 0.75rem; font-size: 0.875rem; }
    .logo-label { display: block; font-size: 0.75rem; }
    .logo-mark {
        display: inline-flex;
        align-items: center;
        justify-content: center;
        width: 3rem;
        height: 3rem;
        border-radius: 50%;
        font-weight: 700;
    }
    .logo-mark.ministry { background: linear-gradient(135deg, #16a34a, #eab308); }
    .logo-mark.federal { background: linear-gradient(135deg, #15803d, #22c55e); }
    .copyright { text-align: center; font-size: 0.75rem; }
    .copyright p { margin: 0.25rem 0; }
"#;
