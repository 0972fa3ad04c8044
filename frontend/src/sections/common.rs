use yew::prelude::*;

use crate::reveal::{Entrance, Stagger};

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub eyebrow: AttrValue,
    pub title: AttrValue,
    /// Trailing part of the title drawn with the cyan gradient.
    #[prop_or_default]
    pub highlight: Option<AttrValue>,
    #[prop_or_default]
    pub lead: Option<AttrValue>,
    pub visible: bool,
}

#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <div class={classes!("section-header", Entrance::Rise.classes(props.visible))}>
            <span class="section-eyebrow font-display">{ &props.eyebrow }</span>
            <h2 class="section-title font-display">
                { &props.title }
                if let Some(highlight) = &props.highlight {
                    { " " }
                    <span class="text-gradient-cyan">{ highlight }</span>
                }
            </h2>
            if let Some(lead) = &props.lead {
                <p class="section-lead">{ lead }</p>
            }
            <div class="divider"></div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BulletsProps {
    pub items: &'static [&'static str],
    /// Marker class, one of the accent `dot` classes.
    pub dot: &'static str,
    /// When set, items slide in one after another.
    #[prop_or_default]
    pub stagger: Option<Stagger>,
    #[prop_or(true)]
    pub visible: bool,
}

#[function_component(Bullets)]
pub fn bullets(props: &BulletsProps) -> Html {
    html! {
        <ul class="bullets">
            { for props.items.iter().enumerate().map(|(i, item)| match props.stagger {
                Some(stagger) => html! {
                    <li class={Entrance::SlideLeft.classes(props.visible)} style={stagger.style(i)}>
                        <span class={props.dot}></span>{ *item }
                    </li>
                },
                None => html! {
                    <li><span class={props.dot}></span>{ *item }</li>
                },
            }) }
        </ul>
    }
}

/// The four bracket corners drawn over framed cards.
#[function_component(Corners)]
pub fn corners() -> Html {
    html! {
        <div class="corners" aria-hidden="true">
            <span class="tl"></span>
            <span class="tr"></span>
            <span class="bl"></span>
            <span class="br"></span>
        </div>
    }
}
