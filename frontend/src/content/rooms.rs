use crate::icons::Icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Room {
    pub number: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub freud: &'static str,
    pub dante: &'static str,
    pub challenge: &'static str,
    pub icon: Icon,
}

/// Rooms built for the playable prototype; they lead the list.
pub const PROTOTYPE_ROOMS: usize = 2;

/// Distinct-room fragments needed before the portal can roll room 9.
pub const FRAGMENTS_FOR_FINAL_ROOM: usize = 5;

pub const ROOMS: [Room; 9] = [
    Room {
        number: "01",
        title: "O Véu da Sombra",
        subtitle: "The Shadow's Veil",
        description: "Uma sala de servidores labiríntica e massiva, com estantes empoeiradas repletas de dados ilegíveis e fiação exposta que forma uma teia confusa. Luzes de LEDs piscam erraticamente, e o ar é pesado, preenchido por um zumbido constante de máquinas.",
        freud: "O Inconsciente — o reino de desejos, memórias e medos reprimidos, indizíveis e irracionais.",
        dante: "O Limbo — uma área de incerteza e ausência de uma condenação clara, um lugar de \"não-escolha\" onde a mente ainda não se define.",
        challenge: "Navegar por um labirinto de corredores de servidores com visibilidade limitada. Decifrar padrões nos ruídos dos servidores e nas distorções das câmeras para encontrar um painel de acesso que \"ligue\" a câmera principal da sala.",
        icon: Icon::Server,
    },
    Room {
        number: "02",
        title: "Espelho de Narciso",
        subtitle: "Narcissus's Mirror",
        description: "Uma galeria de arte ou salão de espelhos, outrora opulento, mas agora em decadência. Espelhos grandes e ornamentados, a maioria rachada, embaçada ou coberta por tecidos, adornam as paredes. Estátuas de mármore perfeitas, mas com rostos desfigurados ou ausentes.",
        freud: "O Ideal do Ego — a imagem de perfeição que o indivíduo aspira ser, muitas vezes levando a uma auto obsessão.",
        dante: "A Gula / Segundo Círculo — a busca incessante por uma imagem idealizada e a auto obsessão narcisista, um apetite desmedido pelo eu.",
        challenge: "Puzzles de luz e reflexão, onde a cobaia deve manipular espelhos para direcionar um feixe de luz ou uma projeção para um ponto específico, revelando uma imagem verdadeira ou um código.",
        icon: Icon::Eye,
    },
    Room {
        number: "03",
        title: "Complexo de Édipo",
        subtitle: "Oedipus's Complex",
        description: "Um andar residencial fragmentado dentro do complexo, com vários apartamentos interligados por corredores sinuosos. Cada unidade é uma representação de um \"espaço familiar\", preenchido com móveis quebrados, brinquedos infantis espalhados e fotografias de família rasgadas ou viradas para a parede.",
        freud: "O Complexo de Édipo — a base para a formação da identidade sexual e moral através da relação com as figuras parentais e os primeiros conflitos.",
        dante: "A Traição aos Parentes (Antenora) — os laços familiares e as culpas, segredos e traições internas da família.",
        challenge: "Resolver pequenos quebra-cabeças narrativos que envolvem a manipulação de objetos simbólicos ou a reconstituição de eventos familiares. A cobaia precisa \"reconstituir\" certas memórias ou \"resolver\" um conflito simbólico.",
        icon: Icon::Users,
    },
    Room {
        number: "04",
        title: "O Peso da Repressão",
        subtitle: "Repression's Weight",
        description: "Um porão labiríntico e claustrofóbico, sobrecarregado com pilhas de caixas, documentos velhos e lixo eletrônico. O teto é baixo, as passagens são estreitas e o ar é denso, empoeirado e pesado.",
        freud: "A Repressão — o mecanismo de defesa psicológico de afastar impulsos, pensamentos e memórias dolorosas ou inaceitáveis da consciência.",
        dante: "A Avareza e Prodigalidade / Peso dos Hipócritas — o fardo esmagador do que é guardado e escondido, a acumulação de \"lixo\" mental que impede o movimento.",
        challenge: "A cobaia sente o ambiente \"pesado\", movendo-se mais lentamente. Puzzles envolvem \"desenterrar\" itens ou informações de pilhas de entulho, com a ajuda de Liam que pode identificar \"anomalias\" nas leituras dos dados psíquicos.",
        icon: Icon::Package,
    },
    Room {
        number: "05",
        title: "A Ascensão da Sublimação",
        subtitle: "Sublimation's Ascent",
        description: "Uma oficina ou laboratório abandonado, mas com potencial de reativação. Há ferramentas espalhadas, máquinas quebradas, bancadas com projetos incompletos e diagramas rabiscados nas paredes.",
        freud: "A Sublimação — um mecanismo de defesa maduro onde impulsos e desejos inaceitáveis são transformados em comportamentos socialmente aceitáveis e produtivos.",
        dante: "Purgatório (Ascensão) — o potencial de transcender ou transformar impulsos negativos em algo útil e construtivo, um local de esperança e trabalho árduo em direção à redenção.",
        challenge: "A cobaia deve \"canalizar\" a energia de manifestações para um propósito construtivo. Por exemplo, uma manifestação de raiva pode ser \"presa\" em uma máquina para gerar energia que ativa um dispositivo.",
        icon: Icon::Refresh,
    },
    Room {
        number: "06",
        title: "Estase da Fixação",
        subtitle: "Fixation's Stasis",
        description: "Uma série de escritórios ou cubículos idênticos, dispostos em um padrão repetitivo. Cada um contém os mesmos objetos fora do lugar: um computador desligado, uma planta murcha, um calendário com a mesma data marcada. O ar é denso e uma sensação de déjà vu constante permeia a sala.",
        freud: "A Fixação — a permanência de uma energia libidinal em um estágio de desenvolvimento psicossexual anterior, resultando em padrões de comportamento repetitivos e imaturos.",
        dante: "Inveja / Cólera / Apatia — a monotonia, a estagnação e o aprisionamento em ciclos viciosos, onde o movimento é restrito, sem propósito.",
        challenge: "O jogador deve encontrar a anomalia sutil que quebra o ciclo. Liam, com sua visão de múltiplas câmeras e análise de dados, pode identificar a única diferença em um dos cubículos ou a inconsistência na gravação da câmera.",
        icon: Icon::Target,
    },
    Room {
        number: "07",
        title: "Recuo da Regressão",
        subtitle: "Regression's Retreat",
        description: "Uma creche ou área de recreação infantil em um andar subterrâneo do complexo, mas tudo está em escala ligeiramente distorcida (brinquedos gigantes, portas minúsculas). O ambiente é caótico, com blocos de montar espalhados, rabiscos nas paredes e ruídos de choro ou riso distorcidos ecoando.",
        freud: "A Regressão — um mecanismo de defesa em que um indivíduo, quando confrontado com estresse ou trauma, retorna a padrões de pensamento, sentimentos ou comportamentos de um estágio de desenvolvimento anterior.",
        dante: "Luxúria (Tempestade Eterna) / Bestialidade — o retorno a estados mais primitivos e impulsivos da mente, a perda da racionalidade adulta em favor de comportamentos imaturos.",
        challenge: "A cobaia é forçada a agir de forma mais \"primitiva\" ou intuitiva: rastejar, se esconder, ou usar objetos de forma não convencional para resolver puzzles (ex: encaixar blocos coloridos para formar uma chave).",
        icon: Icon::Baby,
    },
    Room {
        number: "08",
        title: "O Abraço de Thanatos",
        subtitle: "Thanatos's Embrace",
        description: "Uma câmara de quarentena ou necrotério, com paredes de metal frias, luzes fluorescentes bruxuleantes e macas vazias ou cobertas por lençóis. O ar é pesado e cheira a desinfetante e ferrugem. Uma sensação avassaladora de desesperança e aniquilação paira no ar.",
        freud: "O Thanatos (Impulso de Morte) — a pulsão de morte, a tendência inconsciente para a autodestruição, o retorno a um estado inorgânico e de ausência de tensão.",
        dante: "Traição (Cocytus) / Desespero — o ambiente gélido, a ausência de vida e a profunda inação e desesperança se conectam diretamente ao Cocytus, o lago congelado do Nono Círculo.",
        challenge: "A cobaia deve resistir ao impulso de desistir. Puzzles podem envolver \"reiniciar\" sistemas de suporte de vida (ventiladores, aquecedores, fontes de luz) para trazer uma faísca de \"vida\" ao ambiente.",
        icon: Icon::HeartCrack,
    },
    Room {
        number: "09",
        title: "A Última Resistência do Ego",
        subtitle: "The Ego's Last Stand",
        description: "O escritório principal do Dr. Krauss ou a sala de controle central do complexo, mas em um estado de colapso e reconstrução simultânea. Partes das paredes de outras salas (servidores, galeria, creche) estão visíveis através de rachaduras ou seções colapsadas, mostrando a interconexão de todos os conceitos da mente.",
        freud: "O Ego — o mediador entre o ID, o Superego e a realidade, responsável pela percepção, julgamento, memória e regulação dos impulsos. A fase de integração e confronto final com a realidade.",
        dante: "O Centro / O Despertar — o ponto de convergência, onde todas as \"punições\" psicológicas se encontram para a integração final, o ponto de virada para a aceitação da realidade.",
        challenge: "A prova final. A cobaia deve usar todos os Fragmentos da Mente coletados para estabilizar a sala. Liam deve \"desfragmentar\" os feeds das câmeras e dos dados psíquicos, ajudando a cobaia a identificar padrões e fraquezas na própria mente.",
        icon: Icon::Brain,
    },
];

/// Whether the progress indicator lights the dot for room `index`.
pub fn is_prototype_room(index: usize) -> bool {
    index < PROTOTYPE_ROOMS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::project::STATS;

    #[test]
    fn nine_rooms_numbered_in_order() {
        for (i, room) in ROOMS.iter().enumerate() {
            assert_eq!(room.number, format!("{:02}", i + 1));
        }
        assert_eq!(STATS[1].value, ROOMS.len().to_string());
    }

    #[test]
    fn prototype_rooms_are_the_first_two() {
        let lit: Vec<_> = (0..ROOMS.len()).filter(|&i| is_prototype_room(i)).collect();
        assert_eq!(lit, vec![0, 1]);
        assert_eq!(ROOMS[0].title, "O Véu da Sombra");
        assert_eq!(ROOMS[1].title, "Espelho de Narciso");
    }
}
