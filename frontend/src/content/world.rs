use crate::icons::Icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimelineEntry {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub details: &'static [&'static str],
    pub quote: Option<&'static str>,
}

pub const TIMELINE: [TimelineEntry; 4] = [
    TimelineEntry {
        title: "Projeto Onirium",
        subtitle: "A Tecnologia Experimental",
        description: "Uma tecnologia revolucionária desenvolvida pelo Dr. Dorian Krauss que permite transferir a consciência de um indivíduo para uma representação digitalizada de sua própria psique. O objetivo: uma terapia revolucionária onde pacientes enfrentam e \"consertam\" seus traumas diretamente na fonte.",
        icon: Icon::Microscope,
        details: &[
            "Tecnologia de estimulação neural avançada",
            "Interface de controle: Sistema E.G.O.",
            "Representação visual da psique em tempo real",
            "Protocolos de segurança experimental",
        ],
        quote: None,
    },
    TimelineEntry {
        title: "Dr. Dorian Krauss",
        subtitle: "O Criador",
        description: "Psiquiatra e neurocientista brilhante, mas de ética questionável. Dedicou sua vida a desvendar os mistérios da mente humana. Sua presença é mais conceitual — a \"autoridade\" por trás do inferno autoimposto. Suas gravações revelam teorias e, talvez, sua própria megalomania.",
        icon: Icon::User,
        details: &[
            "Pioneiro em mapeamento neural",
            "Criador do Projeto Onirium",
            "Métodos controversos de pesquisa",
            "Voz quase robótica, perturbadoramente calma",
        ],
        quote: Some("Esta é, de fato, a representação visual e tangível do seu próprio subconsciente."),
    },
    TimelineEntry {
        title: "Isaac",
        subtitle: "A Cobaia / O Protagonista",
        description: "Indivíduo que sofre há muito tempo com problemas psicológicos profundos e persistentes, que nenhuma terapia convencional conseguiu aliviar. Desesperado por uma solução, aceitou o convite para ser a cobaia do Projeto Onirium, confiando plenamente em Liam.",
        icon: Icon::Brain,
        details: &[
            "Sofre com problemas psicológicos persistentes",
            "Determinado a encontrar uma cura",
            "Facilmente sobrecarregado pelo terror psicológico",
            "Representa o aspecto \"ID\" e \"Ego\" imerso",
        ],
        quote: None,
    },
    TimelineEntry {
        title: "Liam",
        subtitle: "O Operador Ego / O Monitor",
        description: "Amigo próximo de Isaac e assistente do Dr. Krauss. Acompanhou o sofrimento de Isaac de perto e, em um ato de esperança e desespero, recomendou-o como voluntário. Opera o sistema E.G.O. em uma sala de controle, monitorando sinais vitais e fluxo de dados psíquicos.",
        icon: Icon::Activity,
        details: &[
            "Calmo, lógico e focado sob pressão",
            "Crescente preocupação à medida que a situação piora",
            "Conexão pessoal profunda com Isaac",
            "Representa o \"Ego\" e \"Superego\" que traz ordem",
        ],
        quote: None,
    },
];

pub const MISSION_QUOTE: &str = "As salas são manifestações do seu próprio labirinto mental. Sua missão é navegar por esse inferno pessoal. Cada sala que você \u{201c}limpa\u{201d} ou \u{201c}compreende\u{201d}, resolvendo seus quebra-cabeças e confrontando suas Manifestações Psíquicas, libera um \u{201c}Fragmento da Mente\u{201d} — um insight, uma memória-chave ou uma ferramenta psicológica crucial.";

pub const MISSION_QUOTE_AUTHOR: &str = "— LIAM, OPERADOR EGO";
