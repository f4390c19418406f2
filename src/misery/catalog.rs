//! Misery card catalog
//!
//! The 32 Misery cards of the Horde Mode deck. Which cards are active in a
//! battle is owned by the caller as a list of ids.

use serde::Serialize;

use crate::core::error::{HordeError, Result};
use crate::core::types::{Bilingual, Language, MiseryCardId};

/// Effect categories printed on Misery cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MiseryTag {
    HordeBuff,
    PlayerDebuff,
    Spawn,
    Objective,
    Sp,
    Restriction,
    Cascade,
}

/// One card of the Misery deck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MiseryCard {
    pub id: MiseryCardId,
    pub name: Bilingual,
    pub effect: Bilingual,
    pub tags: &'static [MiseryTag],
    /// Extra cards revealed when this card is drawn (cascade cards only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cascade_count: Option<u32>,
}

impl MiseryCard {
    pub fn name(&self, language: Language) -> &'static str {
        self.name.get(language)
    }

    pub fn effect(&self, language: Language) -> &'static str {
        self.effect.get(language)
    }

    pub fn has_tag(&self, tag: MiseryTag) -> bool {
        self.tags.contains(&tag)
    }
}

/// Look up a card by id
pub fn misery_card_by_id(id: MiseryCardId) -> Option<&'static MiseryCard> {
    MISERY_CARDS.iter().find(|card| card.id == id)
}

/// Resolve persisted active-card ids back into cards
pub fn misery_cards_by_ids(ids: &[MiseryCardId]) -> Result<Vec<&'static MiseryCard>> {
    ids.iter()
        .map(|&id| misery_card_by_id(id).ok_or(HordeError::UnknownMiseryCard(id)))
        .collect()
}

/// All cards carrying a tag, in catalog order
pub fn misery_cards_by_tag(tag: MiseryTag) -> Vec<&'static MiseryCard> {
    MISERY_CARDS.iter().filter(|card| card.has_tag(tag)).collect()
}

pub static MISERY_CARDS: [MiseryCard; 32] = [
    MiseryCard {
        id: 1,
        name: Bilingual::new("Unnatural Stamina", "Resistência Antinatural"),
        effect: Bilingual::new(
            "Horde units are eligible to shoot and declare a charge in a turn in which they advanced.",
            "Unidades da Horda podem atirar e declarar uma carga no turno em que avançaram.",
        ),
        tags: &[MiseryTag::HordeBuff],
        cascade_count: None,
    },
    MiseryCard {
        id: 2,
        name: Bilingual::new("Grudge Match", "Combate Rancoroso"),
        effect: Bilingual::new(
            "Each time a Horde model makes an attack, add 1 to the hit roll and add 1 to the wound roll.",
            "Cada vez que um modelo da Horda faz um ataque, adicione 1 à rolagem de acerto e 1 à rolagem de ferimento.",
        ),
        tags: &[MiseryTag::HordeBuff],
        cascade_count: None,
    },
    MiseryCard {
        id: 3,
        name: Bilingual::new("Rip and Tear", "Rasgar e Dilacerar"),
        effect: Bilingual::new(
            "Each time a Horde model makes an attack, improve the Armour Penetration characteristic of that attack by 1.",
            "Cada vez que um modelo da Horda faz um ataque, melhore a característica de Penetração de Armadura desse ataque em 1.",
        ),
        tags: &[MiseryTag::HordeBuff],
        cascade_count: None,
    },
    MiseryCard {
        id: 4,
        name: Bilingual::new("Blistering Speed", "Velocidade Ardente"),
        effect: Bilingual::new(
            "Do not roll advance or charge rolls for the Horde. The Horde's advance rolls are automatically 6 and charge rolls are automatically 12.",
            "Não role avanço ou carga para a Horda. As rolagens de avanço da Horda são automaticamente 6 e as rolagens de carga são automaticamente 12.",
        ),
        tags: &[MiseryTag::HordeBuff],
        cascade_count: None,
    },
    MiseryCard {
        id: 5,
        name: Bilingual::new("Untouchable", "Intocável"),
        effect: Bilingual::new(
            "Horde models have a 3+ Invulnerable save.",
            "Modelos da Horda têm uma salvaguarda Invulnerável de 3+.",
        ),
        tags: &[MiseryTag::HordeBuff],
        cascade_count: None,
    },
    MiseryCard {
        id: 6,
        name: Bilingual::new("Stray Orbital Bombardment", "Bombardeio Orbital Perdido"),
        effect: Bilingual::new(
            "Split the battlefield evenly into a 2x3 grid. Assign each area a different number from 1 to 6. Roll one D6. Each unit within the rolled area suffers 2D3 mortal wounds. Destroy that terrain piece.",
            "Divida o campo de batalha uniformemente em uma grade 2x3. Atribua a cada área um número diferente de 1 a 6. Role um D6. Cada unidade dentro da área rolada sofre 2D3 feridas mortais. Destrua aquele terreno.",
        ),
        tags: &[MiseryTag::PlayerDebuff],
        cascade_count: None,
    },
    MiseryCard {
        id: 7,
        name: Bilingual::new("Unlucky Night", "Noite Azarada"),
        effect: Bilingual::new(
            "When making Spawn Rolls for the Horde, roll 3D6 and drop the lowest.",
            "Ao fazer Rolagens de Geração para a Horda, role 3D6 e descarte o menor.",
        ),
        tags: &[MiseryTag::Spawn],
        cascade_count: None,
    },
    MiseryCard {
        id: 8,
        name: Bilingual::new("Death Denied", "Morte Negada"),
        effect: Bilingual::new(
            "Every Horde unit on the battlefield returns to their Starting Strength. Horde models regain all lost wounds.",
            "Cada unidade da Horda no campo de batalha retorna à sua Força Inicial. Modelos da Horda recuperam todos os ferimentos perdidos.",
        ),
        tags: &[MiseryTag::HordeBuff],
        cascade_count: None,
    },
    MiseryCard {
        id: 9,
        name: Bilingual::new("Terrifying Shockwave", "Onda de Choque Aterrorizante"),
        effect: Bilingual::new(
            "Player units automatically fail Battle-shock rolls.",
            "Unidades dos jogadores falham automaticamente nas rolagens de Choque de Batalha.",
        ),
        tags: &[MiseryTag::PlayerDebuff],
        cascade_count: None,
    },
    MiseryCard {
        id: 10,
        name: Bilingual::new("Planetquake", "Terremoto Planetário"),
        effect: Bilingual::new(
            "Select one terrain piece at random. Units within it suffer 2D3 mortal wounds. Destroy that terrain piece.",
            "Selecione um terreno aleatoriamente. Unidades dentro dele sofrem 2D3 feridas mortais. Destrua aquele terreno.",
        ),
        tags: &[MiseryTag::PlayerDebuff],
        cascade_count: None,
    },
    MiseryCard {
        id: 11,
        name: Bilingual::new("Errant Explosion", "Explosão Errante"),
        effect: Bilingual::new(
            "Destroy one objective marker in No Man's Land at random.",
            "Destrua um marcador de objetivo na Terra de Ninguém aleatoriamente.",
        ),
        tags: &[MiseryTag::Objective],
        cascade_count: None,
    },
    MiseryCard {
        id: 12,
        name: Bilingual::new("Nowhere is Safe", "Nenhum Lugar é Seguro"),
        effect: Bilingual::new(
            "Destroy all objective markers in the Defender's deployment zone.",
            "Destrua todos os marcadores de objetivo na zona de implantação do Defensor.",
        ),
        tags: &[MiseryTag::Objective],
        cascade_count: None,
    },
    MiseryCard {
        id: 13,
        name: Bilingual::new("Pincer Maneuver", "Manobra de Pinça"),
        effect: Bilingual::new(
            "Roll to spawn an extra Horde unit into the Horde's Reserves, applying all Spawn Roll modifiers active this round. The unit deploys during the Horde's Reinforcement step as if using Deep Strike, except it may be set up anywhere that is more than 3\" from all player units and deploys within the players' deployment zone if able. If unable, it attempts to deploy within No Man's Land if possible, then the Horde's deployment zone if not.",
            "Role para gerar uma unidade extra da Horda nas Reservas da Horda, aplicando todos os modificadores de Rolagem de Geração ativos nesta rodada. A unidade é implantada durante a etapa de Reforços da Horda como se usasse Ataque Profundo, exceto que pode ser configurada em qualquer lugar a mais de 3\" de todas as unidades dos jogadores e é implantada dentro da zona de implantação dos jogadores se possível. Se não for possível, tenta implantar na Terra de Ninguém, depois na zona de implantação da Horda.",
        ),
        tags: &[MiseryTag::Spawn],
        cascade_count: None,
    },
    MiseryCard {
        id: 14,
        name: Bilingual::new("No Hard Feelings", "Sem Ressentimentos"),
        effect: Bilingual::new(
            "One random player's SP is set to 0. If playing Single Player, instead reveal 2 more Misery Cards.",
            "O SP de um jogador aleatório é definido como 0. Se jogando Solo, em vez disso revele mais 2 Cartas de Miséria.",
        ),
        tags: &[MiseryTag::Sp, MiseryTag::Cascade],
        cascade_count: Some(2),
    },
    MiseryCard {
        id: 15,
        name: Bilingual::new("Bad Investment", "Investimento Ruim"),
        effect: Bilingual::new(
            "Remove 5SP from all players. (The minimum SP is 0.)",
            "Remova 5SP de todos os jogadores. (O SP mínimo é 0.)",
        ),
        tags: &[MiseryTag::Sp],
        cascade_count: None,
    },
    MiseryCard {
        id: 16,
        name: Bilingual::new("Fair and Balanced", "Justo e Equilibrado"),
        effect: Bilingual::new(
            "Weapons equipped by Horde models have the [Devastating Wounds] ability.",
            "Armas equipadas por modelos da Horda têm a habilidade [Feridas Devastadoras].",
        ),
        tags: &[MiseryTag::HordeBuff],
        cascade_count: None,
    },
    MiseryCard {
        id: 17,
        name: Bilingual::new("Unfettered Fury", "Fúria Desenfreada"),
        effect: Bilingual::new(
            "Weapons equipped by Horde models have the [Sustained Hits 1] and [Lethal Hits] abilities.",
            "Armas equipadas por modelos da Horda têm as habilidades [Acertos Sustentados 1] e [Acertos Letais].",
        ),
        tags: &[MiseryTag::HordeBuff],
        cascade_count: None,
    },
    MiseryCard {
        id: 18,
        name: Bilingual::new("A Worthless Sacrifice", "Um Sacrifício Inútil"),
        effect: Bilingual::new(
            "Players discuss and then secretly vote for a player unit to be destroyed by the horde. If the result of the vote is not unanimous, randomly choose a unit to be destroyed from among all of the units that received at least one vote.",
            "Os jogadores discutem e então votam secretamente para uma unidade de jogador ser destruída pela horda. Se o resultado da votação não for unânime, escolha aleatoriamente uma unidade para ser destruída entre todas as unidades que receberam pelo menos um voto.",
        ),
        tags: &[MiseryTag::PlayerDebuff],
        cascade_count: None,
    },
    MiseryCard {
        id: 19,
        name: Bilingual::new("Fog of War", "Névoa de Guerra"),
        effect: Bilingual::new(
            "Horde models gain Stealth and have the Benefit of Cover.",
            "Modelos da Horda ganham Furtividade e têm o Benefício de Cobertura.",
        ),
        tags: &[MiseryTag::HordeBuff],
        cascade_count: None,
    },
    MiseryCard {
        id: 20,
        name: Bilingual::new("Lamentable Luck", "Sorte Lamentável"),
        effect: Bilingual::new(
            "Reveal 2 more Misery cards.",
            "Revele mais 2 Cartas de Miséria.",
        ),
        tags: &[MiseryTag::Cascade],
        cascade_count: Some(2),
    },
    MiseryCard {
        id: 21,
        name: Bilingual::new("Bunkers Busted", "Bunkers Destruídos"),
        effect: Bilingual::new(
            "Remove all Fortified markers from all objective markers. Players cannot make Fortify purchases.",
            "Remova todos os marcadores Fortificados de todos os marcadores de objetivo. Jogadores não podem fazer compras de Fortificação.",
        ),
        tags: &[MiseryTag::Restriction, MiseryTag::Objective],
        cascade_count: None,
    },
    MiseryCard {
        id: 22,
        name: Bilingual::new("Comms Jammed", "Comunicações Bloqueadas"),
        effect: Bilingual::new(
            "Players cannot use Stratagems or spend Command Points. Players cannot make Supply, Spawn, or Strike purchases.",
            "Jogadores não podem usar Estratagemas ou gastar Pontos de Comando. Jogadores não podem fazer compras de Suprimento, Geração ou Ataque.",
        ),
        tags: &[MiseryTag::Restriction],
        cascade_count: None,
    },
    MiseryCard {
        id: 23,
        name: Bilingual::new("The Mind Killer", "O Assassino da Mente"),
        effect: Bilingual::new(
            "Remove all Enhancements from all Characters. Player units must make a Battle-shock test every Battle-shock Step. Players cannot make Tactics purchases.",
            "Remova todos os Aprimoramentos de todos os Personagens. Unidades dos jogadores devem fazer um teste de Choque de Batalha em cada Etapa de Choque de Batalha. Jogadores não podem fazer compras de Táticas.",
        ),
        tags: &[MiseryTag::Restriction, MiseryTag::PlayerDebuff],
        cascade_count: None,
    },
    MiseryCard {
        id: 24,
        name: Bilingual::new("Seller's Market", "Mercado do Vendedor"),
        effect: Bilingual::new(
            "SP costs are doubled for all purchases.",
            "Os custos de SP são dobrados para todas as compras.",
        ),
        tags: &[MiseryTag::Sp, MiseryTag::Restriction],
        cascade_count: None,
    },
    MiseryCard {
        id: 25,
        name: Bilingual::new("Hotter Shots", "Tiros Mais Quentes"),
        effect: Bilingual::new(
            "Ranged weapons equipped by Horde models that are not Melta weapons have the [Melta 1] ability.",
            "Armas de longo alcance equipadas por modelos da Horda que não são armas Melta têm a habilidade [Melta 1].",
        ),
        tags: &[MiseryTag::HordeBuff],
        cascade_count: None,
    },
    MiseryCard {
        id: 26,
        name: Bilingual::new("Sinking Showboats", "Exibicionistas Afundando"),
        effect: Bilingual::new(
            "Ranged weapons equipped by Horde models have the Precision ability.",
            "Armas de longo alcance equipadas por modelos da Horda têm a habilidade Precisão.",
        ),
        tags: &[MiseryTag::HordeBuff],
        cascade_count: None,
    },
    MiseryCard {
        id: 27,
        name: Bilingual::new("Chitinous Growths", "Crescimentos Quitinosos"),
        effect: Bilingual::new(
            "Each time an attack targets a Horde unit, worsen the Armour Penetration characteristic of that attack by 1.",
            "Cada vez que um ataque mira uma unidade da Horda, piore a característica de Penetração de Armadura desse ataque em 1.",
        ),
        tags: &[MiseryTag::HordeBuff],
        cascade_count: None,
    },
    MiseryCard {
        id: 28,
        name: Bilingual::new("They Fly Now", "Agora Eles Voam"),
        effect: Bilingual::new(
            "Horde units have Fly and ignore vertical distances when moving. Ignore all terrain when determining visibility for ranged attacks made by Horde models.",
            "Unidades da Horda têm Voo e ignoram distâncias verticais ao se mover. Ignore todo terreno ao determinar visibilidade para ataques de longo alcance feitos por modelos da Horda.",
        ),
        tags: &[MiseryTag::HordeBuff],
        cascade_count: None,
    },
    MiseryCard {
        id: 29,
        name: Bilingual::new("Fate's Fetters", "Grilhões do Destino"),
        effect: Bilingual::new(
            "Remove 4SP from the player with the most SP. Reveal 3 extra Secondary Objectives this battle round. Ignore the limit on Secondary Objectives this battle round. Players cannot make Secondary purchases.",
            "Remova 4SP do jogador com mais SP. Revele 3 Objetivos Secundários extras nesta rodada de batalha. Ignore o limite de Objetivos Secundários nesta rodada de batalha. Jogadores não podem fazer compras Secundárias.",
        ),
        tags: &[MiseryTag::Sp, MiseryTag::Restriction],
        cascade_count: None,
    },
    MiseryCard {
        id: 30,
        name: Bilingual::new("Aim for the Heads", "Mire nas Cabeças"),
        effect: Bilingual::new(
            "Each time a Horde model is destroyed, roll one D6: on a 4+, do not remove it from play. After the attacking model's unit has finished making its attacks, the destroyed model may fight if it is the Fight phase, or shoot if it is not. The destroyed model is then removed from play.",
            "Cada vez que um modelo da Horda é destruído, role um D6: em um 4+, não o remova do jogo. Após a unidade do modelo atacante terminar seus ataques, o modelo destruído pode lutar se for a Fase de Combate, ou atirar se não for. O modelo destruído é então removido do jogo.",
        ),
        tags: &[MiseryTag::HordeBuff],
        cascade_count: None,
    },
    MiseryCard {
        id: 31,
        name: Bilingual::new("Debris Storm", "Tempestade de Destroços"),
        effect: Bilingual::new(
            "Ranged attacks against Horde units require an unmodified Hit roll of 6 to score a hit unless the attacking unit is within 12\".",
            "Ataques de longo alcance contra unidades da Horda requerem uma rolagem de Acerto não modificada de 6 para marcar um acerto, a menos que a unidade atacante esteja dentro de 12\".",
        ),
        tags: &[MiseryTag::HordeBuff],
        cascade_count: None,
    },
    MiseryCard {
        id: 32,
        name: Bilingual::new("Glowing Eyes", "Olhos Brilhantes"),
        effect: Bilingual::new(
            "Each time a Horde model makes an attack, they may re-roll the hit roll.",
            "Cada vez que um modelo da Horda faz um ataque, ele pode rolar novamente a rolagem de acerto.",
        ),
        tags: &[MiseryTag::HordeBuff],
        cascade_count: None,
    },
];
