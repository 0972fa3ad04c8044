use crate::icons::Icon;
use crate::theme::Accent;

pub const TITLE_TOP: &str = "EGO'S";
pub const TITLE_BOTTOM: &str = "ABYSS";
pub const FULL_NAME: &str = "Desenvolvimento do Protótipo do Jogo Eletrônico Ego's Abyss";
pub const TAGLINE: &str =
    "Uma jornada perturbadora e introspectiva nas profundezas da mente humana.";

pub const GENRE_TAGS: [&str; 4] = [
    "Terror Psicológico",
    "Cooperativo Assimétrico",
    "Puzzle",
    "Exploração",
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Badge {
    pub text: &'static str,
    pub icon: Icon,
    pub accent: Accent,
}

pub const BADGES: [Badge; 4] = [
    Badge { text: "TERROR PSICOLÓGICO", icon: Icon::Brain, accent: Accent::Alert },
    Badge { text: "COOPERATIVO", icon: Icon::Users, accent: Accent::Cyan },
    Badge { text: "PUZZLE", icon: Icon::Puzzle, accent: Accent::Cyan },
    Badge { text: "EXPLORAÇÃO", icon: Icon::Gamepad, accent: Accent::Cyan },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Objective {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const OBJECTIVES: [Objective; 6] = [
    Objective {
        icon: Icon::Gamepad,
        title: "Protótipo Jogável",
        description: "Desenvolver protótipo (fatia vertical) com 2 salas completas: \"O Véu da Sombra\" e \"O Espelho de Narciso\"",
    },
    Objective {
        icon: Icon::Users,
        title: "Gameplay Assimétrico",
        description: "Implementar sistemas de jogabilidade para os dois perfis: a \"Cobaia\" e o \"Operador Ego\"",
    },
    Objective {
        icon: Icon::Music,
        title: "Trilha Sonora",
        description: "Compor e produzir 2 faixas da trilha sonora atmosférica original do jogo",
    },
    Objective {
        icon: Icon::GraduationCap,
        title: "Oficinas Gratuitas",
        description: "Realizar 4 oficinas online gratuitas sobre Game Design Narrativo e Design Interativo",
    },
    Objective {
        icon: Icon::Target,
        title: "Distribuição Gratuita",
        description: "Disponibilizar versão de demonstração do jogo em plataformas digitais de ampla circulação",
    },
    Objective {
        icon: Icon::Accessibility,
        title: "Acessibilidade",
        description: "Implementar 4 medidas: legendas customizáveis, modo daltônico, controles remapeáveis e audiodescrição",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub sublabel: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat { value: "2", label: "Jogadores", sublabel: "Cooperativo Assimétrico" },
    Stat { value: "9", label: "Salas", sublabel: "Do Labirinto Mental" },
    Stat { value: "20-30", label: "Minutos", sublabel: "Duração da Demo" },
    Stat { value: "16+", label: "Classificação", sublabel: "Indicativa" },
];

/// The two player roles as introduced in the concept section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RolePitch {
    pub title: &'static str,
    pub icon: Icon,
    pub accent: Accent,
    pub text: &'static str,
}

pub const ROLE_PITCHES: [RolePitch; 2] = [
    RolePitch {
        title: "A Cobaia",
        icon: Icon::Eye,
        accent: Accent::Alert,
        text: "Mergulhe em primeira pessoa em um ambiente 3D imersivo e atmosférico. Navegue por um complexo de instalações de segurança em ruínas que representa sua própria mente — paredes rachadas, luzes tremeluzentes, servidores falhos e um ar palpável de abandono e paranoia.",
    },
    RolePitch {
        title: "O Operador Ego",
        icon: Icon::Radio,
        accent: Accent::Cyan,
        text: "Opere o Sistema E.G.O. — Environmental Guidance Overview — uma interface complexa de monitoramento com múltiplas câmeras, mapas holográficos, dados psíquicos em tempo real e controle ambiental limitado para guiar e proteger sua parceira.",
    },
];
