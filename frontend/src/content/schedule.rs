use std::fmt;

use chrono::NaiveDate;

use crate::icons::Icon;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub const fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    fn ordinal(self) -> i32 {
        self.year * 12 + self.month as i32 - 1
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self::new(self.year + 1, 1)
        } else {
            Self::new(self.year, self.month + 1)
        }
    }

    pub fn first_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn last_day(self) -> Option<NaiveDate> {
        self.next().first_day()?.pred_opt()
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = MONTH_ABBREVIATIONS
            .get(self.month.saturating_sub(1) as usize)
            .copied()
            .unwrap_or("?");
        write!(f, "{}/{}", name, self.year)
    }
}

/// An inclusive range of calendar months.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonthSpan {
    pub start: YearMonth,
    pub end: YearMonth,
}

impl MonthSpan {
    pub const fn new(start: YearMonth, end: YearMonth) -> Self {
        Self { start, end }
    }

    pub fn months(&self) -> u32 {
        (self.end.ordinal() - self.start.ordinal() + 1).max(0) as u32
    }

    /// `Jan/2026 - Mar/2026 (3 meses)`
    pub fn label(&self) -> String {
        let unit = if self.months() == 1 { "mês" } else { "meses" };
        format!("{} - {} ({} {})", self.start, self.end, self.months(), unit)
    }

    /// `01/01/2026 a 30/06/2027`
    pub fn date_range(&self) -> Option<String> {
        let first = self.start.first_day()?;
        let last = self.end.last_day()?;
        Some(format!(
            "{} a {}",
            first.format("%d/%m/%Y"),
            last.format("%d/%m/%Y")
        ))
    }

    pub fn first_year(&self) -> i32 {
        self.start.year
    }
}

pub const EXECUTION_PERIOD: MonthSpan =
    MonthSpan::new(YearMonth::new(2026, 1), YearMonth::new(2027, 6));

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhaseStatus {
    #[allow(dead_code)] // no phase has finished yet
    Completed,
    Active,
    Pending,
}

impl PhaseStatus {
    pub const fn label(self) -> &'static str {
        match self {
            PhaseStatus::Completed => "CONCLUÍDO",
            PhaseStatus::Active => "EM ANDAMENTO",
            PhaseStatus::Pending => "PENDENTE",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoadmapPhase {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub status: PhaseStatus,
    pub icon: Icon,
    pub deliverables: &'static [&'static str],
    pub span: MonthSpan,
}

pub const PHASES: [RoadmapPhase; 3] = [
    RoadmapPhase {
        title: "Pré-Produção",
        subtitle: "Planejamento e Design",
        description: "Revisão e fechamento do GDD, finalização do roteiro detalhado, criação da arte conceitual final e prototipagem inicial (greyboxing) das mecânicas.",
        status: PhaseStatus::Active,
        icon: Icon::Target,
        deliverables: &["GDD Revisado", "Arte Conceitual Final", "Greyboxing", "Roteiro Detalhado"],
        span: MonthSpan::new(YearMonth::new(2026, 1), YearMonth::new(2026, 3)),
    },
    RoadmapPhase {
        title: "Produção / Execução",
        subtitle: "Desenvolvimento Principal",
        description: "Etapa principal de desenvolvimento. Contratação da equipe, modelagem 3D, programação dos sistemas, implementação da IA das Manifestações, trilha sonora e testes internos.",
        status: PhaseStatus::Pending,
        icon: Icon::Rocket,
        deliverables: &["2 Salas Completas", "Sistema E.G.O.", "IA das Manifestações", "2 Faixas de Trilha Sonora"],
        span: MonthSpan::new(YearMonth::new(2026, 4), YearMonth::new(2027, 3)),
    },
    RoadmapPhase {
        title: "Pós-Produção",
        subtitle: "Polimento e Entrega",
        description: "Fase intensiva de correção de bugs (QA), implementação das medidas de acessibilidade, realização das 4 oficinas, publicação do protótipo e preparação da prestação de contas.",
        status: PhaseStatus::Pending,
        icon: Icon::Cpu,
        deliverables: &["QA Completo", "Acessibilidade Implementada", "4 Oficinas Realizadas", "Protótipo Publicado"],
        span: MonthSpan::new(YearMonth::new(2027, 4), YearMonth::new(2027, 6)),
    },
];

/// Facts shown under the roadmap.
pub const PLATFORM_FACTS: [(&str, &str); 4] = [
    ("PLATAFORMA", "PC (Windows)"),
    ("MOTOR", "Unity"),
    ("DISTRIBUIÇÃO", "Steam / itch.io"),
    ("DURAÇÃO", "20-30 min"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn execution_period_is_eighteen_months() {
        assert_eq!(EXECUTION_PERIOD.months(), 18);
        assert_eq!(
            EXECUTION_PERIOD.date_range().as_deref(),
            Some("01/01/2026 a 30/06/2027")
        );
    }

    #[test]
    fn phases_are_contiguous_and_fill_the_period() {
        assert_eq!(PHASES[0].span.start, EXECUTION_PERIOD.start);
        assert_eq!(PHASES[PHASES.len() - 1].span.end, EXECUTION_PERIOD.end);
        for pair in PHASES.windows(2) {
            assert_eq!(pair[0].span.end.next(), pair[1].span.start);
        }
        let total: u32 = PHASES.iter().map(|p| p.span.months()).sum();
        assert_eq!(total, EXECUTION_PERIOD.months());
    }

    #[test]
    fn phase_labels_use_portuguese_months() {
        assert_eq!(PHASES[0].span.label(), "Jan/2026 - Mar/2026 (3 meses)");
        assert_eq!(PHASES[1].span.label(), "Abr/2026 - Mar/2027 (12 meses)");
        assert_eq!(PHASES[2].span.label(), "Abr/2027 - Jun/2027 (3 meses)");
    }

    #[test]
    fn last_day_handles_short_months_and_year_end() {
        assert_eq!(
            YearMonth::new(2028, 2).last_day(),
            NaiveDate::from_ymd_opt(2028, 2, 29)
        );
        assert_eq!(
            YearMonth::new(2026, 12).last_day(),
            NaiveDate::from_ymd_opt(2026, 12, 31)
        );
    }

    #[test]
    fn exactly_one_phase_is_in_progress() {
        let active = PHASES
            .iter()
            .filter(|p| p.status == PhaseStatus::Active)
            .count();
        assert_eq!(active, 1);
    }
}
