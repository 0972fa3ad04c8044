use yew::prelude::*;

use crate::anchor::Anchor;
use crate::config::REVEAL_THRESHOLD;
use crate::content::schedule::{PhaseStatus, EXECUTION_PERIOD, PHASES, PLATFORM_FACTS};
use crate::icons::Icon;
use crate::reveal::{delay_style, use_reveal, Entrance, Stagger};
use crate::sections::common::SectionHeader;

const PHASE_STAGGER: Stagger = Stagger::new(300, 150);

fn status_class(status: PhaseStatus) -> &'static str {
    match status {
        PhaseStatus::Active => "chip-alert",
        PhaseStatus::Completed => "chip-cyan",
        PhaseStatus::Pending => "status-pending",
    }
}

#[function_component(Roadmap)]
pub fn roadmap() -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), REVEAL_THRESHOLD);
    let months = EXECUTION_PERIOD.months();

    html! {
        <section id={Anchor::Roadmap.id()} ref={node} class="section roadmap">
            <style>{ ROADMAP_CSS }</style>
            <div class="section-backdrop"></div>
            <div class="roadmap-dots"></div>
            <div class="section-content roadmap-content">
                <SectionHeader
                    eyebrow="CRONOGRAMA"
                    title="ROADMAP"
                    highlight="& STATUS"
                    lead={format!("Follow the project development over {} months of the journey to bring Ego's Abyss to reality.", months)}
                    visible={visible}
                />

                <div class={classes!("card", "period-card", Entrance::Rise.classes(visible))} style={delay_style(200)}>
                    <span class="period-icon text-cyan pulse">{ Icon::Calendar.view() }</span>
                    <div>
                        <span class="font-display period-label">{ "PERÍODO DE EXECUÇÃO" }</span>
                        <h3 class="font-display">{ format!("{} Meses de Desenvolvimento", months) }</h3>
                        if let Some(range) = EXECUTION_PERIOD.date_range() {
                            <p>{ range }</p>
                        }
                    </div>
                </div>

                <div class="phases">
                    <div class="phases-line"></div>
                    { for PHASES.iter().enumerate().map(|(i, phase)| {
                        let active = phase.status == PhaseStatus::Active;
                        html! {
                            <div class={classes!("phase", Entrance::SlideLeft.classes(visible))} style={PHASE_STAGGER.style(i)}>
                                <div class={classes!("phase-node", active.then_some("active"))}>{ phase.icon.view() }</div>
                                <div class={classes!("card", "phase-card", active.then_some("active"))}>
                                    <div class="phase-heading">
                                        <h3 class="font-display">{ phase.title }</h3>
                                        <span class="phase-subtitle">{ phase.subtitle }</span>
                                    </div>
                                    <span class="phase-tag chip-cyan font-display">{ phase.span.label() }</span>
                                    <span class={classes!("phase-tag", "font-display", status_class(phase.status))}>
                                        { phase.status.label() }
                                    </span>
                                    <p class="phase-description">{ phase.description }</p>
                                    <div class="deliverables">
                                        { for phase.deliverables.iter().map(|d| html! {
                                            <span class="deliverable">{ *d }</span>
                                        }) }
                                    </div>
                                </div>
                            </div>
                        }
                    }) }
                </div>

                <div class={classes!("platform-facts", Entrance::Rise.classes(visible))} style={delay_style(700)}>
                    { for PLATFORM_FACTS.iter().enumerate().map(|(i, (label, value))| html! {
                        <>
                            if i > 0 {
                                <span class="fact-separator"></span>
                            }
                            <div class="fact">
                                <span class="font-display faint">{ *label }</span>
                                <span class={if i + 1 == PLATFORM_FACTS.len() { "text-cyan" } else { "" }}>{ *value }</span>
                            </div>
                        </>
                    }) }
                </div>
            </div>
        </section>
    }
}

const ROADMAP_CSS: &str = r#"
    .roadmap-dots {
        position: absolute;
        inset: 0;
        opacity: 0.03;
        background-image: radial-gradient(circle, rgba(0, 212, 255, 0.8) 1px, transparent 1px);
        background-size: 30px 30px;
        pointer-events: none;
    }
    .roadmap-content { max-width: 56rem; }
    .period-card {
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 1.5rem;
        margin-bottom: 3rem;
        background: linear-gradient(135deg, rgba(0, 212, 255, 0.1), rgba(13, 19, 34, 0.5));
        border-color: rgba(0, 212, 255, 0.3);
    }
    .period-icon { font-size: 2rem; padding: 1rem; border-radius: 50%; background: rgba(0, 212, 255, 0.2); }
    .period-label { display: block; font-size: 0.75rem; color: rgba(0, 212, 255, 0.6); margin-bottom: 0.25rem; }
    .period-card h3 { margin: 0 0 0.5rem; font-size: 1.5rem; }
    .period-card p { margin: 0; color: #d1d5db; }
    .phases { position: relative; display: flex; flex-direction: column; gap: 1.5rem; }
    .phases-line {
        position: absolute;
        left: 2rem;
        top: 0; bottom: 0;
        width: 1px;
        background: linear-gradient(rgba(0, 212, 255, 0.5), rgba(0, 212, 255, 0.3), transparent);
    }
    .phase { display: flex; align-items: flex-start; gap: 1.5rem; }
    .phase-node {
        position: relative;
        display: flex;
        align-items: center;
        justify-content: center;
        width: 4rem;
        height: 4rem;
        flex-shrink: 0;
        border-radius: 50%;
        border: 2px solid rgba(255, 255, 255, 0.2);
        background: var(--abyss-light);
        color: #6b7280;
        font-size: 1.25rem;
    }
    .phase-node.active { border-color: var(--cyan); background: rgba(0, 212, 255, 0.3); color: var(--cyan); }
    .phase-card { flex: 1; padding: 1.25rem; background: rgba(13, 19, 34, 0.4); }
    .phase-card.active { background: rgba(13, 19, 34, 0.8); border-color: rgba(0, 212, 255, 0.5); box-shadow: 0 0 20px rgba(0, 212, 255, 0.35); }
    .phase-heading { display: flex; flex-wrap: wrap; align-items: center; gap: 0.75rem; margin-bottom: 0.5rem; }
    .phase-heading h3 { margin: 0; font-size: 1.1rem; }
    .phase-subtitle { font-size: 0.75rem; color: rgba(0, 212, 255, 0.6); }
    .phase-tag { display: inline-block; margin-right: 0.5rem; padding: 0.1rem 0.5rem; border-radius: 0.25rem; font-size: 0.75rem; letter-spacing: 0.08em; }
    .status-pending { background: rgba(255, 255, 255, 0.1); color: #6b7280; }
    .phase-description { color: #d1d5db; font-size: 0.875rem; line-height: 1.6; }
    .deliverables { display: flex; flex-wrap: wrap; gap: 0.5rem; }
    .deliverable { padding: 0.25rem 0.5rem; border-radius: 0.25rem; background: rgba(0, 212, 255, 0.05); color: rgba(0, 212, 255, 0.7); font-size: 0.75rem; }
    .platform-facts {
        display: flex;
        flex-wrap: wrap;
        justify-content: center;
        align-items: center;
        gap: 1.5rem;
        margin-top: 3rem;
        padding: 1rem 2rem;
        border-radius: 0.5rem;
        background: rgba(13, 19, 34, 0.3);
        border: 1px solid rgba(255, 255, 255, 0.1);
    }
    .fact { display: flex; flex-direction: column; align-items: center; gap: 0.25rem; }
    .fact .font-display { font-size: 0.75rem; }
    .fact-separator { width: 1px; height: 2rem; background: rgba(255, 255, 255, 0.1); }
    @media (max-width: 640px) {
        .phases-line, .phase-node { display: none; }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_active_phase_is_highlighted_as_alert() {
        assert_eq!(status_class(PhaseStatus::Active), "chip-alert");
        assert_ne!(status_class(PhaseStatus::Pending), status_class(PhaseStatus::Active));
        assert_eq!(status_class(PhaseStatus::Completed), "chip-cyan");
        assert_eq!(PhaseStatus::Completed.label(), "CONCLUÍDO");
    }
}
