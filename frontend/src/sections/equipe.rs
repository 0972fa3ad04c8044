use yew::prelude::*;

use crate::anchor::Anchor;
use crate::config::REVEAL_THRESHOLD;
use crate::content::team::{TeamMember, MEMBERS, PRODUCTION_ROLES, TECHNOLOGIES};
use crate::icons::Icon;
use crate::reveal::{delay_style, use_reveal, Entrance, Stagger};
use crate::sections::common::{Corners, SectionHeader};

const MEMBER_STAGGER: Stagger = Stagger::new(0, 200);

#[derive(Properties, PartialEq)]
struct TeamCardProps {
    member: TeamMember,
    index: usize,
    visible: bool,
}

#[function_component(TeamCard)]
fn team_card(props: &TeamCardProps) -> Html {
    let TeamCardProps { member, index, visible } = *props;
    let hovered = use_state_eq(|| false);

    let on_enter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let on_leave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    let leader = member.is_leader;
    let avatar = match member.image {
        Some(src) => html! {
            <>
                <img src={src} alt={member.name} />
                <div class="avatar-scanlines"></div>
            </>
        },
        None => html! { <div class="avatar-placeholder">{ member.icon.view() }</div> },
    };

    html! {
        <div
            class={Entrance::RiseFar.classes(visible)}
            style={MEMBER_STAGGER.style(index)}
            onmouseenter={on_enter}
            onmouseleave={on_leave}
        >
            <div class={classes!("card", "team-card", leader.then_some("leader"), (*hovered).then_some("glow-cyan"))}>
                if leader {
                    <div class={classes!("hologram", (*hovered).then_some("sweeping"))}></div>
                }
                <div class="team-row">
                    <div class={classes!("avatar", leader.then_some("ring"))}>{ avatar }</div>
                    <div class="team-info">
                        <div class="team-role">
                            <span class={classes!("icon-box", leader.then_some("text-cyan"))}>{ member.icon.view() }</span>
                            <span class={classes!("font-display", if leader { "text-cyan" } else { "faint" })}>
                                { member.role.to_uppercase() }
                            </span>
                        </div>
                        <h3 class="font-display">{ member.name }</h3>
                        <p class="team-description">{ member.description }</p>
                        <ul class="credentials">
                            { for member.credentials.iter().map(|credential| html! {
                                <li><span class="text-cyan">{ Icon::Award.view() }</span>{ *credential }</li>
                            }) }
                        </ul>
                    </div>
                </div>
                if leader {
                    <Corners />
                }
            </div>
        </div>
    }
}

#[function_component(Equipe)]
pub fn equipe() -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), REVEAL_THRESHOLD);

    html! {
        <section id={Anchor::Equipe.id()} ref={node} class="section equipe">
            <style>{ EQUIPE_CSS }</style>
            <div class="section-backdrop"></div>
            <div class="section-content team-content">
                <SectionHeader
                    eyebrow="QUEM SOMOS"
                    title="EQUIPE"
                    highlight="TÉCNICA"
                    lead="Profissionais dedicados a transformar esta visão em realidade. Uma equipe multidisciplinar unida pela paixão em criar experiências de jogos significativas e inovadoras."
                    visible={visible}
                />

                <div class="team-list">
                    { for MEMBERS.iter().enumerate().map(|(index, member)| html! {
                        <TeamCard member={*member} index={index} visible={visible} />
                    }) }
                </div>

                <div class={classes!("card", "team-extra", Entrance::Rise.classes(visible))} style={delay_style(400)}>
                    <h3 class="font-display">{ "Equipe de Produção" }</h3>
                    <p class="muted">{ "Profissionais que integrarão a produção do projeto" }</p>
                    <div class="production-roles">
                        { for PRODUCTION_ROLES.iter().map(|(role, icon)| html! {
                            <div class="production-role">
                                <span class="icon-box text-cyan">{ icon.view() }</span>
                                <span>{ *role }</span>
                            </div>
                        }) }
                    </div>
                </div>

                <div class={classes!("card", "team-extra", Entrance::Rise.classes(visible))} style={delay_style(500)}>
                    <h3 class="font-display tech-title">
                        <span class="text-cyan">{ Icon::GraduationCap.view() }</span>{ "TECNOLOGIAS" }
                    </h3>
                    <div class="tech-list">
                        { for TECHNOLOGIES.iter().map(|tech| html! {
                            <span class="pill chip-cyan">{ *tech }</span>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

const EQUIPE_CSS: &str = r#"
    .team-content { max-width: 56rem; }
    .team-list { display: flex; flex-direction: column; gap: 1.5rem; margin-bottom: 3rem; }
    .team-card:hover { border-color: rgba(0, 212, 255, 0.3); }
    .team-card.leader { background: linear-gradient(135deg, rgba(0, 212, 255, 0.1), rgba(13, 19, 34, 0.8)); border-color: rgba(0, 212, 255, 0.5); }
    .hologram {
        position: absolute;
        inset: 0;
        pointer-events: none;
        background: linear-gradient(transparent, rgba(0, 212, 255, 0.05), transparent);
        transform: translateY(-100%);
        transition: transform 2000ms;
    }
    .hologram.sweeping { transform: translateY(100%); }
    .team-row { display: flex; gap: 1.5rem; align-items: flex-start; }
    .avatar { position: relative; width: 6rem; height: 6rem; border-radius: 0.5rem; overflow: hidden; flex-shrink: 0; }
    .avatar.ring { box-shadow: 0 0 0 2px rgba(0, 212, 255, 0.5); }
    .avatar img { width: 100%; height: 100%; object-fit: cover; }
    .avatar-scanlines {
        position: absolute;
        inset: 0;
        background: repeating-linear-gradient(0deg, transparent, transparent 2px, rgba(0, 212, 255, 0.1) 2px, rgba(0, 212, 255, 0.1) 4px);
    }
    .avatar-placeholder {
        display: flex;
        align-items: center;
        justify-content: center;
        width: 100%;
        height: 100%;
        font-size: 2.5rem;
        background: var(--abyss-light);
        color: rgba(0, 212, 255, 0.5);
    }
    .team-info { flex: 1; }
    .team-role { display: flex; align-items: center; gap: 0.75rem; margin-bottom: 0.5rem; font-size: 0.75rem; letter-spacing: 0.1em; }
    .team-info h3 { margin: 0 0 0.5rem; font-size: 1.25rem; }
    .team-description { color: #d1d5db; font-size: 0.875rem; line-height: 1.6; }
    .credentials { list-style: none; padding: 0; margin: 0; }
    .credentials li { display: flex; align-items: flex-start; gap: 0.5rem; margin-bottom: 0.5rem; font-size: 0.8rem; color: #9ca3af; }
    .team-extra { margin-top: 2rem; text-align: center; background: rgba(13, 19, 34, 0.3); }
    .team-extra h3 { margin-top: 0; font-size: 1.1rem; }
    .production-roles { display: grid; grid-template-columns: repeat(auto-fit, minmax(8rem, 1fr)); gap: 1rem; }
    .production-role {
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 0.75rem;
        padding: 1rem;
        border-radius: 0.5rem;
        background: rgba(5, 7, 13, 0.5);
        border: 1px solid rgba(255, 255, 255, 0.05);
        font-size: 0.8rem;
    }
    .production-role:hover { border-color: rgba(0, 212, 255, 0.3); }
    .tech-title { display: flex; justify-content: center; align-items: center; gap: 0.5rem; font-size: 0.9rem !important; }
    .tech-list { display: flex; flex-wrap: wrap; justify-content: center; gap: 0.75rem; }
    @media (max-width: 640px) {
        .team-row { flex-direction: column; }
    }
"#;
