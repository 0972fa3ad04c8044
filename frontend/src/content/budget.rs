use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// An amount in Brazilian reais, stored in centavos.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Brl(pub u64);

impl Brl {
    pub const fn reais(reais: u64) -> Self {
        Brl(reais * 100)
    }

    /// Parses the display form, e.g. `R$ 16.000,00`.
    #[cfg(test)]
    pub fn parse(text: &str) -> Option<Self> {
        let digits = text.trim().strip_prefix("R$")?.trim();
        let (whole, cents) = digits.split_once(',')?;
        if cents.len() != 2 || !cents.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let mut groups = whole.split('.');
        let first = groups.next().filter(|g| (1..=3).contains(&g.len()))?;
        let mut reais: u64 = first.parse().ok()?;
        for group in groups {
            if group.len() != 3 {
                return None;
            }
            reais = reais.checked_mul(1000)?.checked_add(group.parse().ok()?)?;
        }
        Some(Brl(reais.checked_mul(100)?.checked_add(cents.parse().ok()?)?))
    }
}

impl Add for Brl {
    type Output = Brl;

    fn add(self, rhs: Brl) -> Brl {
        Brl(self.0 + rhs.0)
    }
}

impl Sum for Brl {
    fn sum<I: Iterator<Item = Brl>>(iter: I) -> Brl {
        iter.fold(Brl::default(), Add::add)
    }
}

impl fmt::Display for Brl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reais = (self.0 / 100).to_string();
        let mut grouped = String::with_capacity(reais.len() + reais.len() / 3);
        for (i, digit) in reais.chars().enumerate() {
            if i > 0 && (reais.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(digit);
        }
        write!(f, "R$ {},{:02}", grouped, self.0 % 100)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BudgetStage {
    pub name: &'static str,
    pub amount: Brl,
    pub items: &'static [&'static str],
}

/// Amount approved under PRONAC 2514086. The stages must add up to it.
#[cfg(test)]
pub const APPROVED_TOTAL: Brl = Brl::reais(199_650);

pub const STAGES: [BudgetStage; 6] = [
    BudgetStage {
        name: "Pré-Produção",
        amount: Brl::reais(16_000),
        items: &[
            "Artista Conceitual (ambientes, manifestações)",
            "Remuneração do Proponente (coordenação, roteiro, GDD)",
        ],
    },
    BudgetStage {
        name: "Produção / Execução",
        amount: Brl::reais(106_800),
        items: &[
            "Artista 3D (modelagem, texturização, iluminação)",
            "Sound Designer (2 trilhas sonoras + SFX)",
            "Equipamentos de Informática (aluguel)",
            "Licenças de Software e Assets",
            "Game Designer (coordenação e direção)",
            "Programador (Unity/Unreal, sistemas, IA)",
        ],
    },
    BudgetStage {
        name: "Pós-Produção",
        amount: Brl::reais(6_000),
        items: &[
            "Coordenação da finalização (QA)",
            "Ministração das 20h de oficinas",
        ],
    },
    BudgetStage {
        name: "Assessoria",
        amount: Brl::reais(9_200),
        items: &[
            "Advogado (contratos)",
            "Contador (gestão da conta, prestação de contas - 18 meses)",
        ],
    },
    BudgetStage {
        name: "Contrapartidas Sociais",
        amount: Brl::reais(7_200),
        items: &[
            "Legenda descritiva",
            "Intérprete de LIBRAS (40h de oficina)",
        ],
    },
    BudgetStage {
        name: "Administração do Projeto",
        amount: Brl::reais(54_450),
        items: &[
            "Captação de recursos",
            "Custos de acessibilidade, comunicação e divulgação",
            "Custos de administração",
        ],
    },
];

pub fn stages_total() -> Brl {
    STAGES.iter().map(|stage| stage.amount).sum()
}

/// The total shown on the page, summed from the stages.
pub fn total_label() -> String {
    stages_total().to_string()
}

/// Share of income tax an incentivizer may redirect, by taxpayer kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TaxLimit {
    pub percent: u8,
    pub who: &'static str,
    pub condition: &'static str,
    /// Condition as written in the fiscal summary.
    pub short: &'static str,
}

pub const TAX_LIMITS: [TaxLimit; 2] = [
    TaxLimit {
        percent: 4,
        who: "Pessoas Jurídicas",
        condition: "Empresas tributadas com base no lucro real",
        short: "lucro real",
    },
    TaxLimit {
        percent: 6,
        who: "Pessoas Físicas",
        condition: "Declarantes do Imposto de Renda modelo completo",
        short: "modelo completo",
    },
];

pub const DEDUCTION_PERCENT: u8 = 100;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_in_brazilian_notation() {
        assert_eq!(Brl(0).to_string(), "R$ 0,00");
        assert_eq!(Brl(5).to_string(), "R$ 0,05");
        assert_eq!(Brl::reais(999).to_string(), "R$ 999,00");
        assert_eq!(Brl::reais(16_000).to_string(), "R$ 16.000,00");
        assert_eq!(APPROVED_TOTAL.to_string(), "R$ 199.650,00");
        assert_eq!(Brl(123_456_789).to_string(), "R$ 1.234.567,89");
    }

    #[test]
    fn parses_what_it_displays() {
        assert_eq!(Brl::parse("R$ 106.800,00"), Some(Brl::reais(106_800)));
        assert_eq!(Brl::parse("R$ 1.234.567,89"), Some(Brl(123_456_789)));
        assert_eq!(Brl::parse("R$ 16000,00"), None);
        assert_eq!(Brl::parse("16.000,00"), None);
        assert_eq!(Brl::parse("R$ 16.000,0"), None);
    }

    #[test]
    fn six_stages_add_up_to_the_approved_total() {
        assert_eq!(STAGES.len(), 6);
        assert_eq!(stages_total(), APPROVED_TOTAL);
    }

    #[test]
    fn page_total_is_summed_from_the_stages() {
        assert_eq!(total_label(), "R$ 199.650,00");
        assert_eq!(total_label(), APPROVED_TOTAL.to_string());
    }

    #[test]
    fn displayed_subtotals_add_up_to_the_displayed_total() {
        let displayed: Option<Brl> = STAGES
            .iter()
            .map(|stage| Brl::parse(&stage.amount.to_string()))
            .sum();
        assert_eq!(displayed, Brl::parse(&APPROVED_TOTAL.to_string()));
    }

    #[test]
    fn every_stage_lists_its_items() {
        assert!(STAGES.iter().all(|stage| !stage.items.is_empty()));
    }
}
