use crate::icons::Icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImpactCard {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub stat: Option<&'static str>,
    pub details: &'static [&'static str],
}

pub const IMPACT_CARDS: [ImpactCard; 3] = [
    ImpactCard {
        title: "Oficinas Gratuitas",
        description: "Formação profissional em Game Design Narrativo e Design Interativo para estudantes e interessados em desenvolvimento de jogos.",
        icon: Icon::GraduationCap,
        stat: Some("20h"),
        details: &[
            "4 oficinas síncronas online",
            "Prioridade para escolas públicas",
            "Certificação para participantes",
            "Material didático exclusivo",
        ],
    },
    ImpactCard {
        title: "Acessibilidade",
        description: "Compromisso com a inclusão e democratização do acesso à cultura digital para todos os públicos.",
        icon: Icon::Accessibility,
        stat: None,
        details: &[
            "Tradução em LIBRAS nas oficinas",
            "Legendas customizáveis no jogo",
            "Modo para daltônicos",
            "Controles remapeáveis",
            "Audiodescrição completa",
        ],
    },
    ImpactCard {
        title: "Democratização",
        description: "Distribuição gratuita do protótipo e conteúdos educacionais para fomentar a cultura digital brasileira.",
        icon: Icon::Globe,
        stat: None,
        details: &[
            "Protótipo gratuito em Steam e itch.io",
            "Meta: 2.000 downloads em 6 meses",
            "Gravações das oficinas liberadas",
            "Código-fonte documentado",
        ],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Measure {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const ACCESSIBILITY_MEASURES: [Measure; 4] = [
    Measure {
        icon: Icon::Volume,
        title: "Legendas Customizáveis",
        description: "Legendas em PT-BR para todas as falas e sons ambientes, com opções de tamanho e contraste ajustáveis.",
    },
    Measure {
        icon: Icon::Eye,
        title: "Modo para Daltônicos",
        description: "Filtros e ajustes de interface que alteram a paleta de cores para diferentes tipos de daltonismo.",
    },
    Measure {
        icon: Icon::Hand,
        title: "Controles Remapeáveis",
        description: "Reconfiguração livre do mapeamento de teclas e botões para periféricos adaptados.",
    },
    Measure {
        icon: Icon::FileText,
        title: "Audiodescrição",
        description: "Narração descritiva em PT-BR para cenas não interativas, introdução e tutoriais.",
    },
];

pub const INVESTOR_BENEFITS: [&str; 5] = [
    "Transforma imposto em cultura e educação",
    "Apoia a formação de novos talentos",
    "Democratiza o acesso aos games independentes",
    "Fortalece a indústria criativa brasileira",
    "Contribui para a diversidade cultural",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Audience {
    pub icon: Icon,
    pub label: &'static str,
    pub description: &'static str,
}

pub const AUDIENCES: [Audience; 4] = [
    Audience { icon: Icon::Gamepad, label: "Gamers", description: "Narrativas profundas" },
    Audience { icon: Icon::Users, label: "Estudantes", description: "Formação técnica" },
    Audience { icon: Icon::Code, label: "Desenvolvedores", description: "Troca de conhecimento" },
    Audience { icon: Icon::Heart, label: "Comunidade", description: "Acesso à cultura" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::project::OBJECTIVES;

    #[test]
    fn four_accessibility_measures_as_promised() {
        let promised = OBJECTIVES
            .iter()
            .find(|o| o.title == "Acessibilidade")
            .map(|o| o.description);
        assert!(promised.is_some_and(|d| d.starts_with("Implementar 4 medidas")));
        assert_eq!(ACCESSIBILITY_MEASURES.len(), 4);
    }
}
