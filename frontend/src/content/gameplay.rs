use crate::icons::Icon;
use crate::theme::Accent;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CharacterCard {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub icon: Icon,
    pub accent: Accent,
    pub features: &'static [&'static str],
    pub abilities: &'static [&'static str],
}

pub const CHARACTERS: [CharacterCard; 2] = [
    CharacterCard {
        title: "ISAAC",
        subtitle: "A Cobaia",
        description: "Você é Isaac, um indivíduo que sofre há muito tempo com problemas psicológicos profundos. Desesperado por uma solução, aceitou ser a cobaia do Projeto Onirium. Agora sua consciência foi transferida para uma representação digitalizada de sua própria psique.",
        image: "/assets/isaac_card.jpg",
        icon: Icon::Eye,
        accent: Accent::Alert,
        features: &[
            "Visão em primeira pessoa (FPS) imersiva",
            "Exploração de ambientes 3D detalhados",
            "Resolução de puzzles físicos",
            "Fuga de Manifestações Psíquicas",
        ],
        abilities: &[
            "Posicionar Câmeras Auxiliares (até 4 por sessão)",
            "Interagir com painéis e objetos",
            "Comunicação constante com o Operador",
            "Sobrevivência através de furtividade",
        ],
    },
    CharacterCard {
        title: "LIAM",
        subtitle: "O Operador Ego",
        description: "Você é Liam, amigo próximo de Isaac e assistente do Dr. Krauss. Opera o Sistema E.G.O. — Environmental Guidance Overview — em uma sala de controle, monitorando os sinais vitais e o fluxo de dados psíquicos de Isaac em tempo real.",
        image: "/assets/liam_card.jpg",
        icon: Icon::Radio,
        accent: Accent::Cyan,
        features: &[
            "Interface complexa rica em dados",
            "Múltiplas visões de câmeras",
            "Mapa holográfico interativo 2D",
            "Análise de dados psíquicos e físicos",
        ],
        abilities: &[
            "PPU: Feed de vídeo em tempo real da cobaia",
            "VMS: Central de controle de câmeras",
            "DSM/PSM: Dados físicos e psíquicos",
            "ENV-CTRL: Controle ambiental limitado",
        ],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EgoModule {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

pub const EGO_MODULES: [EgoModule; 4] = [
    EgoModule { name: "PPU", description: "Projeção Perceptiva", icon: Icon::Camera },
    EgoModule { name: "VMS", description: "Monitoramento Visual", icon: Icon::Activity },
    EgoModule { name: "NAV-OS", description: "Navegação Holográfica", icon: Icon::Map },
    EgoModule { name: "CMD", description: "Manipulação Cognitiva", icon: Icon::Terminal },
];
