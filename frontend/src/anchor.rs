/// In-page anchors. Every section root carries one of these ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Anchor {
    Conceito,
    Gameplay,
    Mundo,
    Labirinto,
    Impacto,
    Equipe,
    Roadmap,
    Orcamento,
    Investir,
}

/// Links shown in the navigation bar, in page order. `Investir` has its own CTA.
pub const NAV_ITEMS: [Anchor; 8] = [
    Anchor::Conceito,
    Anchor::Gameplay,
    Anchor::Mundo,
    Anchor::Labirinto,
    Anchor::Impacto,
    Anchor::Equipe,
    Anchor::Roadmap,
    Anchor::Orcamento,
];

impl Anchor {
    #[cfg(test)]
    pub const ALL: [Anchor; 9] = [
        Anchor::Conceito,
        Anchor::Gameplay,
        Anchor::Mundo,
        Anchor::Labirinto,
        Anchor::Impacto,
        Anchor::Equipe,
        Anchor::Roadmap,
        Anchor::Orcamento,
        Anchor::Investir,
    ];

    pub const fn id(self) -> &'static str {
        match self {
            Anchor::Conceito => "conceito",
            Anchor::Gameplay => "gameplay",
            Anchor::Mundo => "mundo",
            Anchor::Labirinto => "labirinto",
            Anchor::Impacto => "impacto",
            Anchor::Equipe => "equipe",
            Anchor::Roadmap => "roadmap",
            Anchor::Orcamento => "orcamento",
            Anchor::Investir => "investir",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Anchor::Conceito => "Conceito",
            Anchor::Gameplay => "Gameplay",
            Anchor::Mundo => "Mundo",
            Anchor::Labirinto => "Labirinto",
            Anchor::Impacto => "Impacto",
            Anchor::Equipe => "Equipe",
            Anchor::Roadmap => "Roadmap",
            Anchor::Orcamento => "Orçamento",
            Anchor::Investir => "Investir",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<_> = Anchor::ALL.iter().map(|a| a.id()).collect();
        assert_eq!(ids.len(), Anchor::ALL.len());
    }

    #[test]
    fn nav_lists_every_section_but_the_footer_in_order() {
        assert!(!NAV_ITEMS.contains(&Anchor::Investir));
        assert_eq!(&Anchor::ALL[..NAV_ITEMS.len()], &NAV_ITEMS[..]);
    }

    #[test]
    fn labels_uppercase_with_accents() {
        assert_eq!(Anchor::Orcamento.label().to_uppercase(), "ORÇAMENTO");
        assert_eq!(Anchor::Labirinto.href(), "#labirinto");
    }
}
