use log::info;
use yew::prelude::*;

mod anchor;
mod config;
mod content;
mod dom;
mod error;
mod icons;
mod reveal;
mod theme;
mod typewriter;
mod sections {
    pub mod common;
    pub mod conceito;
    pub mod equipe;
    pub mod footer;
    pub mod gameplay;
    pub mod hero;
    pub mod impacto;
    pub mod labirinto;
    pub mod mundo;
    pub mod navigation;
    pub mod orcamento;
    pub mod roadmap;
}

use sections::{
    conceito::Conceito,
    equipe::Equipe,
    footer::Footer,
    gameplay::Gameplay,
    hero::Hero,
    impacto::Impacto,
    labirinto::Labirinto,
    mundo::Mundo,
    navigation::Navigation,
    orcamento::Orcamento,
    roadmap::Roadmap,
};
use theme::GLOBAL_CSS;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <>
            <style>{ GLOBAL_CSS }</style>
            <Navigation />
            <main class="page">
                <Hero />
                <Conceito />
                <Gameplay />
                <Mundo />
                <Labirinto />
                <Impacto />
                <Equipe />
                <Roadmap />
                <Orcamento />
                <Footer />
            </main>
        </>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting Ego's Abyss site");
    yew::Renderer::<App>::new().render();
}
