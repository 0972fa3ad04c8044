use crate::icons::Icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub description: &'static str,
    pub credentials: &'static [&'static str],
    pub image: Option<&'static str>,
    pub icon: Icon,
    pub is_leader: bool,
}

pub const MEMBERS: [TeamMember; 3] = [
    TeamMember {
        name: "Marcos Maciel Candido",
        role: "Líder do Projeto",
        description: "Mestre em Ciência da Computação com vasta experiência em desenvolvimento de jogos digitais, docência e gestão tecnológica. Especialista em Unity e Unreal Engine, lidera a visão criativa e técnica do Projeto Onirium.",
        credentials: &[
            "Mestrado em Ciência da Computação – UEM (2021)",
            "Licenciatura e Bacharelado em Química – UEM (2017/2021)",
            "Graduação em Análise e Desenvolvimento de Sistemas – UniCV (2025)",
            "Pós-graduação em Tecnologias Aplicadas ao EAD (2024)",
            "Game Designer e Desenvolvedor na Indie Game Startup LLC",
        ],
        image: Some("/assets/team_marcos.jpg"),
        icon: Icon::User,
        is_leader: true,
    },
    TeamMember {
        name: "Alison Henrique Custódio",
        role: "Desenvolvimento, Direção e Prestação de Contas",
        description: "Profissional multifuncional e estrategista com mais de 15 anos de experiência. Analista de Sistemas e Gestor de TI de Infraestrutura, liderando projetos de modernização tecnológica e integração de sistemas.",
        credentials: &[
            "MBA em Auditoria e Perícia Contábil – Centro Universitário de Maringá (2018)",
            "Bacharelado em Ciências Contábeis – Centro Universitário de Maringá (2014)",
            "Análise de Sistemas – Centro Universitário de Maringá",
            "Especialista em Java, React, HTML, CSS e SQL",
        ],
        image: None,
        icon: Icon::Cpu,
        is_leader: false,
    },
    TeamMember {
        name: "Larissa Priscila Custódio",
        role: "Contabilidade e Prestação de Contas",
        description: "Contadora e Especialista em Cálculos Periciais Trabalhistas com mais de 15 anos de experiência. Reconhecida pela capacidade de otimizar processos contábeis e implementar melhorias operacionais.",
        credentials: &[
            "Pós-graduação em Auditoria e Perícia Contábil – Faculdade Cidade Verde (2019)",
            "Bacharelado em Ciências Contábeis – UNICESUMAR (2009-2012)",
            "Inscrita no Conselho Federal de Contabilidade desde 2013",
            "Analista de Cálculos Sênior no setor sucroalcooleiro",
        ],
        image: None,
        icon: Icon::Briefcase,
        is_leader: false,
    },
];

pub const PRODUCTION_ROLES: [(&str, Icon); 5] = [
    ("Artista Conceitual", Icon::Palette),
    ("Artista 3D", Icon::Cube),
    ("Sound Designer", Icon::Music),
    ("Programador", Icon::Code),
    ("Advogado", Icon::Scale),
];

pub const TECHNOLOGIES: [&str; 8] = [
    "Unity",
    "Unreal Engine",
    "C#",
    "Python",
    "Blender",
    "FMOD",
    "Git",
    "Docker",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_leader_and_listed_first() {
        assert_eq!(MEMBERS.iter().filter(|m| m.is_leader).count(), 1);
        assert!(MEMBERS[0].is_leader);
    }

    #[test]
    fn every_member_has_credentials() {
        assert!(MEMBERS.iter().all(|m| !m.credentials.is_empty()));
    }
}
