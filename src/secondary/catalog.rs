//! Secondary Mission catalog
//!
//! Timing and first-round validity are stored on each mission instead of in
//! separate id lists, so adding a mission cannot leave it unclassified.

use serde::{Deserialize, Serialize};

use crate::core::error::{HordeError, Result};
use crate::core::types::{Bilingual, Language, MissionId};

/// When a mission is presented for resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionTiming {
    /// Action missions that complete at the end of the players' turn
    EndOfTurn,
    EndOfRound,
}

/// Mission categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MissionTag {
    SpReward,
    SpawnModifier,
    MiseryPunishment,
    Action,
    Combat,
    Objective,
    Purchase,
}

/// One Secondary Mission card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecondaryMission {
    pub id: MissionId,
    pub name: Bilingual,
    pub condition: Bilingual,
    pub reward: Bilingual,
    pub punishment: Bilingual,
    pub tags: &'static [MissionTag],
    pub timing: ResolutionTiming,
    /// False for missions that reference things that cannot have happened yet
    /// in the first battle round; those are redrawn in round 1.
    pub first_round_valid: bool,
}

impl SecondaryMission {
    pub fn name(&self, language: Language) -> &'static str {
        self.name.get(language)
    }

    pub fn condition(&self, language: Language) -> &'static str {
        self.condition.get(language)
    }

    pub fn reward(&self, language: Language) -> &'static str {
        self.reward.get(language)
    }

    pub fn punishment(&self, language: Language) -> &'static str {
        self.punishment.get(language)
    }

    pub fn has_tag(&self, tag: MissionTag) -> bool {
        self.tags.contains(&tag)
    }
}

/// Look up a mission by id
pub fn secondary_mission_by_id(id: MissionId) -> Option<&'static SecondaryMission> {
    SECONDARY_MISSIONS.iter().find(|mission| mission.id == id)
}

/// Look up a mission by id, failing for ids outside the catalog
pub fn require_secondary_mission(id: MissionId) -> Result<&'static SecondaryMission> {
    secondary_mission_by_id(id).ok_or(HordeError::UnknownMission(id))
}

/// All missions carrying a tag, in catalog order
pub fn secondary_missions_by_tag(tag: MissionTag) -> Vec<&'static SecondaryMission> {
    SECONDARY_MISSIONS
        .iter()
        .filter(|mission| mission.has_tag(tag))
        .collect()
}

/// When a mission is resolved
///
/// Ids outside the catalog resolve at the end of the round.
pub fn mission_resolution_timing(id: MissionId) -> ResolutionTiming {
    secondary_mission_by_id(id)
        .map(|mission| mission.timing)
        .unwrap_or(ResolutionTiming::EndOfRound)
}

pub static SECONDARY_MISSIONS: [SecondaryMission; 20] = [
    SecondaryMission {
        id: 1,
        name: Bilingual::new("Secure Drop Zones", "Proteger Zonas de Queda"),
        condition: Bilingual::new(
            "Randomly select two objectives in No Man's Land (if fewer exist, select that number instead). If you control those selected objective markers at the end of the battle round this mission is successful.",
            "Selecione aleatoriamente dois objetivos na Terra de Ninguém (se existirem menos, selecione esse número). Se você controlar esses marcadores de objetivo selecionados no final da rodada de batalha, esta missão é bem-sucedida.",
        ),
        reward: Bilingual::new(
            "3 SP, One random player saves this card. You may discard this card during the Resupply Step to make a Tactics purchase without paying SP.",
            "3 SP, Um jogador aleatório guarda esta carta. Você pode descartar esta carta durante a Etapa de Reabastecimento para fazer uma compra de Táticas sem pagar SP.",
        ),
        punishment: Bilingual::new(
            "+1 Misery cards",
            "+1 Cartas de Miséria",
        ),
        tags: &[MissionTag::SpReward, MissionTag::Objective, MissionTag::MiseryPunishment],
        timing: ResolutionTiming::EndOfRound,
        first_round_valid: true,
    },
    SecondaryMission {
        id: 2,
        name: Bilingual::new("Back To Basics", "De Volta ao Básico"),
        condition: Bilingual::new(
            "Keep a tally, X, of how many Horde units are destroyed this battle round after the horde is spawned and you have revealed this mission. If X is zero, this mission fails.",
            "Mantenha uma contagem, X, de quantas unidades da Horda são destruídas nesta rodada de batalha após a horda ser gerada e você ter revelado esta missão. Se X for zero, esta missão falha.",
        ),
        reward: Bilingual::new(
            "(X+1) SP",
            "(X+1) SP",
        ),
        punishment: Bilingual::new(
            "+2 Misery cards",
            "+2 Cartas de Miséria",
        ),
        tags: &[MissionTag::SpReward, MissionTag::Combat, MissionTag::MiseryPunishment],
        timing: ResolutionTiming::EndOfRound,
        first_round_valid: true,
    },
    SecondaryMission {
        id: 3,
        name: Bilingual::new("Show No Fear", "Não Mostre Medo"),
        condition: Bilingual::new(
            "If any player units are Battle-shocked at the end of the battle round, this mission fails.",
            "Se alguma unidade dos jogadores estiver em Choque de Batalha no final da rodada de batalha, esta missão falha.",
        ),
        reward: Bilingual::new(
            "3 SP, -1 to Spawn Rolls",
            "3 SP, -1 nas Rolagens de Geração",
        ),
        punishment: Bilingual::new(
            "+2 Misery cards, +1 to Spawn Rolls",
            "+2 Cartas de Miséria, +1 nas Rolagens de Geração",
        ),
        tags: &[MissionTag::SpReward, MissionTag::SpawnModifier, MissionTag::MiseryPunishment],
        timing: ResolutionTiming::EndOfRound,
        first_round_valid: true,
    },
    SecondaryMission {
        id: 4,
        name: Bilingual::new("Establish Orbital Comms", "Estabelecer Comunicações Orbitais"),
        condition: Bilingual::new(
            "In your shooting phase, select a Player unit within 6\" of the center of the battlefield to do an action, Establish Orbital Comms. This action completes at the end of your turn. If the action is completed, this mission is successful.",
            "Na sua fase de tiro, selecione uma unidade de Jogador dentro de 6\" do centro do campo de batalha para fazer uma ação, Estabelecer Comunicações Orbitais. Esta ação é completada no final do seu turno. Se a ação for completada, esta missão é bem-sucedida.",
        ),
        reward: Bilingual::new(
            "One at a time, each player without a revealed Secret Objective immediately uses A Change of Plans, but they do not choose a card; instead they select one at random.",
            "Um de cada vez, cada jogador sem um Objetivo Secreto revelado usa imediatamente Mudança de Planos, mas não escolhe uma carta; em vez disso, selecionam uma aleatoriamente.",
        ),
        punishment: Bilingual::new(
            "One at a time, each player without a revealed Secret Objective immediately uses A Change of Plans, but they do not choose a card; instead they select one at random.",
            "Um de cada vez, cada jogador sem um Objetivo Secreto revelado usa imediatamente Mudança de Planos, mas não escolhe uma carta; em vez disso, selecionam uma aleatoriamente.",
        ),
        tags: &[MissionTag::Action],
        timing: ResolutionTiming::EndOfTurn,
        first_round_valid: true,
    },
    SecondaryMission {
        id: 5,
        name: Bilingual::new("Search for Supplies", "Buscar Suprimentos"),
        condition: Bilingual::new(
            "In your shooting phase, select any number of Player units on different objective markers in No Man's Land or the enemy deployment zone to do an action, Search for Supplies. The action completes at the end of your turn. Keep a tally, X, of how many units complete this action. If X = 0 at the end of the battle round, this mission fails.",
            "Na sua fase de tiro, selecione qualquer número de unidades de Jogador em diferentes marcadores de objetivo na Terra de Ninguém ou na zona de implantação inimiga para fazer uma ação, Buscar Suprimentos. A ação é completada no final do seu turno. Mantenha uma contagem, X, de quantas unidades completam esta ação. Se X = 0 no final da rodada de batalha, esta missão falha.",
        ),
        reward: Bilingual::new(
            "(X+1) SP, One random player saves this card. You may discard this card during the Resupply step to make a Supply purchase without paying SP.",
            "(X+1) SP, Um jogador aleatório guarda esta carta. Você pode descartar esta carta durante a etapa de Reabastecimento para fazer uma compra de Suprimento sem pagar SP.",
        ),
        punishment: Bilingual::new(
            "+2 Misery cards",
            "+2 Cartas de Miséria",
        ),
        tags: &[MissionTag::SpReward, MissionTag::Action, MissionTag::MiseryPunishment],
        timing: ResolutionTiming::EndOfTurn,
        first_round_valid: true,
    },
    SecondaryMission {
        id: 6,
        name: Bilingual::new("Clear the Evac Zone", "Limpar a Zona de Evacuação"),
        condition: Bilingual::new(
            "If no Horde units are within the Defender's deployment zone at the end of the battle round this mission is successful.",
            "Se nenhuma unidade da Horda estiver dentro da zona de implantação do Defensor no final da rodada de batalha, esta missão é bem-sucedida.",
        ),
        reward: Bilingual::new(
            "3 SP",
            "3 SP",
        ),
        punishment: Bilingual::new(
            "Reinforcements Arrive is removed from the SP Purchase Table",
            "Reforços Chegam é removido da Tabela de Compras de SP",
        ),
        tags: &[MissionTag::SpReward, MissionTag::Objective],
        timing: ResolutionTiming::EndOfRound,
        first_round_valid: true,
    },
    SecondaryMission {
        id: 7,
        name: Bilingual::new("Decapitation Strike", "Ataque de Decapitação"),
        condition: Bilingual::new(
            "If a player destroys a Horde Character model or no Horde Character models exist at the end of the battle round this mission is successful.",
            "Se um jogador destruir um modelo de Personagem da Horda ou se nenhum modelo de Personagem da Horda existir no final da rodada de batalha, esta missão é bem-sucedida.",
        ),
        reward: Bilingual::new(
            "2 SP, 2 CP",
            "2 SP, 2 CP",
        ),
        punishment: Bilingual::new(
            "+2 Misery cards",
            "+2 Cartas de Miséria",
        ),
        tags: &[MissionTag::SpReward, MissionTag::Combat, MissionTag::MiseryPunishment],
        timing: ResolutionTiming::EndOfRound,
        first_round_valid: true,
    },
    SecondaryMission {
        id: 8,
        name: Bilingual::new("Dragon Slayer", "Matador de Dragões"),
        condition: Bilingual::new(
            "Keep track of the first time a player destroys a Horde Monster or Vehicle model this battle round. If a Monster or Vehicle was destroyed or if none exist at the end of the battle round this mission is successful. If no player triggers it, 2SP.",
            "Acompanhe a primeira vez que um jogador destrói um modelo de Monstro ou Veículo da Horda nesta rodada de batalha. Se um Monstro ou Veículo foi destruído ou se nenhum existir no final da rodada de batalha, esta missão é bem-sucedida. Se nenhum jogador ativar, 2SP.",
        ),
        reward: Bilingual::new(
            "1 free Field Promotion use (including additional costs) to the player who triggers it. If no player triggers, 2SP.",
            "1 uso gratuito de Promoção de Campo (incluindo custos adicionais) para o jogador que ativar. Se nenhum jogador ativar, 2SP.",
        ),
        punishment: Bilingual::new(
            "+6 to the first Spawn Roll.",
            "+6 na primeira Rolagem de Geração.",
        ),
        tags: &[MissionTag::Combat, MissionTag::SpawnModifier],
        timing: ResolutionTiming::EndOfRound,
        first_round_valid: true,
    },
    SecondaryMission {
        id: 9,
        name: Bilingual::new("Paint Targets", "Marcar Alvos"),
        condition: Bilingual::new(
            "To succeed in this mission; until the end of the battle round: No player unit may fall back. No player unit may normal move, advance, or charge out of range of any objective they began the turn in range of.",
            "Para ter sucesso nesta missão; até o final da rodada de batalha: Nenhuma unidade de jogador pode recuar. Nenhuma unidade de jogador pode se mover normalmente, avançar ou carregar para fora do alcance de qualquer objetivo em que começou o turno.",
        ),
        reward: Bilingual::new(
            "1 Free use of Air Strike to a random player, 1 Free use of Defensive Positions to a random player.",
            "1 Uso gratuito de Ataque Aéreo para um jogador aleatório, 1 Uso gratuito de Posições Defensivas para um jogador aleatório.",
        ),
        punishment: Bilingual::new(
            "Search for Stray Orbital Bombardment in the Misery Deck and discard pile and immediately resolve it.",
            "Procure por Bombardeio Orbital Perdido no Baralho de Miséria e pilha de descarte e resolva-o imediatamente.",
        ),
        tags: &[MissionTag::Action],
        timing: ResolutionTiming::EndOfRound,
        first_round_valid: true,
    },
    SecondaryMission {
        id: 10,
        name: Bilingual::new("Study Behaviors", "Estudar Comportamentos"),
        condition: Bilingual::new(
            "At the start of the player movement phase, choose a Horde unit on the battlefield at random; that unit must have no wounds lost from that point until the end of the battle round or this mission fails.",
            "No início da fase de movimento do jogador, escolha uma unidade da Horda no campo de batalha aleatoriamente; essa unidade não deve ter ferimentos perdidos daquele ponto até o final da rodada de batalha ou esta missão falha.",
        ),
        reward: Bilingual::new(
            "2 SP, One random player saves this card. You may discard this card to discard and nullify the effect of a revealed Misery card.",
            "2 SP, Um jogador aleatório guarda esta carta. Você pode descartar esta carta para descartar e anular o efeito de uma Carta de Miséria revelada.",
        ),
        punishment: Bilingual::new(
            "+3 to Spawn Roll",
            "+3 na Rolagem de Geração",
        ),
        tags: &[MissionTag::SpReward, MissionTag::SpawnModifier],
        timing: ResolutionTiming::EndOfRound,
        first_round_valid: true,
    },
    SecondaryMission {
        id: 11,
        name: Bilingual::new("Use It Or Lose It", "Use ou Perca"),
        condition: Bilingual::new(
            "Keep a tally of how much SP is spent during the battle round after revealing this card. If the tally is greater than 6 this mission is successful. If this Secondary Mission is drawn during the first battle round, reveal another Secondary Mission card, then shuffle this back into the Secondary Mission deck.",
            "Mantenha uma contagem de quanto SP é gasto durante a rodada de batalha após revelar esta carta. Se a contagem for maior que 6, esta missão é bem-sucedida. Se esta Missão Secundária for comprada durante a primeira rodada de batalha, revele outra carta de Missão Secundária, então embaralhe esta de volta no baralho de Missão Secundária.",
        ),
        reward: Bilingual::new(
            "10 SP to a random player.",
            "10 SP para um jogador aleatório.",
        ),
        punishment: Bilingual::new(
            "-3SP, +1 Misery card",
            "-3SP, +1 Carta de Miséria",
        ),
        tags: &[MissionTag::SpReward, MissionTag::Purchase, MissionTag::MiseryPunishment],
        timing: ResolutionTiming::EndOfRound,
        first_round_valid: false,
    },
    SecondaryMission {
        id: 12,
        name: Bilingual::new("Control the Battlefield", "Controlar o Campo de Batalha"),
        condition: Bilingual::new(
            "At the end of the battle round if you have at least one player unit wholly within each table quarter, outside of 6\" of the center of the battlefield this mission is successful.",
            "No final da rodada de batalha, se você tiver pelo menos uma unidade de jogador totalmente dentro de cada quarto da mesa, fora de 6\" do centro do campo de batalha, esta missão é bem-sucedida.",
        ),
        reward: Bilingual::new(
            "-1 to Spawn Rolls, One random player saves this card. You may discard this card during the Resupply step to make a Secondary purchase without paying SP.",
            "-1 nas Rolagens de Geração, Um jogador aleatório guarda esta carta. Você pode descartar esta carta durante a etapa de Reabastecimento para fazer uma compra Secundária sem pagar SP.",
        ),
        punishment: Bilingual::new(
            "+1 Misery card, +1 to Spawn Rolls",
            "+1 Carta de Miséria, +1 nas Rolagens de Geração",
        ),
        tags: &[MissionTag::SpawnModifier, MissionTag::Objective, MissionTag::MiseryPunishment],
        timing: ResolutionTiming::EndOfRound,
        first_round_valid: true,
    },
    SecondaryMission {
        id: 13,
        name: Bilingual::new("The Smell of Napalm", "O Cheiro de Napalm"),
        condition: Bilingual::new(
            "If 2 Strike purchases were made this battle round this mission is successful. If this Secondary Mission is drawn during the first battle round, reveal another Secondary Mission card, then shuffle this back into the Secondary Mission deck.",
            "Se 2 compras de Ataque foram feitas nesta rodada de batalha, esta missão é bem-sucedida. Se esta Missão Secundária for comprada durante a primeira rodada de batalha, revele outra carta de Missão Secundária, então embaralhe esta de volta no baralho de Missão Secundária.",
        ),
        reward: Bilingual::new(
            "2SP, -1 to Spawn Rolls",
            "2SP, -1 nas Rolagens de Geração",
        ),
        punishment: Bilingual::new(
            "+1 Misery card, +1 to Spawn Rolls",
            "+1 Carta de Miséria, +1 nas Rolagens de Geração",
        ),
        tags: &[MissionTag::SpReward, MissionTag::Purchase, MissionTag::SpawnModifier, MissionTag::MiseryPunishment],
        timing: ResolutionTiming::EndOfRound,
        first_round_valid: false,
    },
    SecondaryMission {
        id: 14,
        name: Bilingual::new("Marching on Stomachs", "Marchando de Estômago Cheio"),
        condition: Bilingual::new(
            "If 2 Supply purchases were made this battle round this mission is successful. If this Secondary Mission is drawn during the first battle round, reveal another Secondary Mission card, then shuffle this back into the Secondary Mission deck.",
            "Se 2 compras de Suprimento foram feitas nesta rodada de batalha, esta missão é bem-sucedida. Se esta Missão Secundária for comprada durante a primeira rodada de batalha, revele outra carta de Missão Secundária, então embaralhe esta de volta no baralho de Missão Secundária.",
        ),
        reward: Bilingual::new(
            "1SP, One random player saves this card. You may discard this card during the Resupply step to reduce the cost of Reinforcements Arrive by 5.",
            "1SP, Um jogador aleatório guarda esta carta. Você pode descartar esta carta durante a etapa de Reabastecimento para reduzir o custo de Reforços Chegam em 5.",
        ),
        punishment: Bilingual::new(
            "+1 Misery card, each Horde unit on the battlefield heals 3 wounds in the method described by a Field Hospital.",
            "+1 Carta de Miséria, cada unidade da Horda no campo de batalha cura 3 ferimentos no método descrito por um Hospital de Campo.",
        ),
        tags: &[MissionTag::SpReward, MissionTag::Purchase, MissionTag::MiseryPunishment],
        timing: ResolutionTiming::EndOfRound,
        first_round_valid: false,
    },
    SecondaryMission {
        id: 15,
        name: Bilingual::new("Baiting the Trap", "Preparando a Armadilha"),
        condition: Bilingual::new(
            "In your shooting phase pick a Player unit within 6\" of the center of the battlefield to perform an action, Baiting the Trap. This action is completed at the end of your turn. If this action is successful this mission is successful.",
            "Na sua fase de tiro, escolha uma unidade de Jogador dentro de 6\" do centro do campo de batalha para realizar uma ação, Preparando a Armadilha. Esta ação é completada no final do seu turno. Se esta ação for bem-sucedida, esta missão é bem-sucedida.",
        ),
        reward: Bilingual::new(
            "4SP, +12 to the first Spawn Roll.",
            "4SP, +12 na primeira Rolagem de Geração.",
        ),
        punishment: Bilingual::new(
            "+2 Misery cards, +2 to Spawn Rolls",
            "+2 Cartas de Miséria, +2 nas Rolagens de Geração",
        ),
        tags: &[MissionTag::SpReward, MissionTag::Action, MissionTag::SpawnModifier, MissionTag::MiseryPunishment],
        timing: ResolutionTiming::EndOfTurn,
        first_round_valid: true,
    },
    SecondaryMission {
        id: 16,
        name: Bilingual::new("Lead From the Front", "Liderar da Linha de Frente"),
        condition: Bilingual::new(
            "Keep a tally of damage dealt to Horde models by Player Character models this battle round, X, up to a maximum of 4. At the end of the battle round this mission is successful if X is greater than 0 and there are at least as many Player Characters on the battlefield as there were at the start of the Battle Round.",
            "Mantenha uma contagem de dano causado a modelos da Horda por modelos de Personagem de Jogador nesta rodada de batalha, X, até um máximo de 4. No final da rodada de batalha, esta missão é bem-sucedida se X for maior que 0 e houver pelo menos tantos Personagens de Jogador no campo de batalha quanto havia no início da Rodada de Batalha.",
        ),
        reward: Bilingual::new(
            "X SP",
            "X SP",
        ),
        punishment: Bilingual::new(
            "+1 Misery card, -1 to Battle-shock tests made by Player units.",
            "+1 Carta de Miséria, -1 nos testes de Choque de Batalha feitos por unidades de Jogador.",
        ),
        tags: &[MissionTag::SpReward, MissionTag::Combat, MissionTag::MiseryPunishment],
        timing: ResolutionTiming::EndOfRound,
        first_round_valid: true,
    },
    SecondaryMission {
        id: 17,
        name: Bilingual::new("Spruce This Place Up", "Arrumar Este Lugar"),
        condition: Bilingual::new(
            "If at least 2 objective markers are Fortified at the end of the battle round this mission is successful. If this Secondary Mission is drawn during the first battle round, reveal another Secondary Mission card, then shuffle this back into the Secondary Mission deck.",
            "Se pelo menos 2 marcadores de objetivo estiverem Fortificados no final da rodada de batalha, esta missão é bem-sucedida. Se esta Missão Secundária for comprada durante a primeira rodada de batalha, revele outra carta de Missão Secundária, então embaralhe esta de volta no baralho de Missão Secundária.",
        ),
        reward: Bilingual::new(
            "1SP, One random player saves this card. You may discard this card to discard and nullify the effect of a revealed Misery card.",
            "1SP, Um jogador aleatório guarda esta carta. Você pode descartar esta carta para descartar e anular o efeito de uma Carta de Miséria revelada.",
        ),
        punishment: Bilingual::new(
            "+1 Misery card, Remove all Fortified Markers from Objectives.",
            "+1 Carta de Miséria, Remova todos os Marcadores Fortificados dos Objetivos.",
        ),
        tags: &[MissionTag::SpReward, MissionTag::Objective, MissionTag::MiseryPunishment],
        timing: ResolutionTiming::EndOfRound,
        first_round_valid: false,
    },
    SecondaryMission {
        id: 18,
        name: Bilingual::new("Calling Shots", "Chamando os Tiros"),
        condition: Bilingual::new(
            "At the end of the Horde's Movement phase, pick one or more Horde units. Mark them with a reminder token and keep track of the chosen number of units, X. Keep a tally of the amount of marked units destroyed during the battle round. If the tally at the end of the battle round equals X, this mission is successful. If Calling Shots is revealed after the Horde's Movement Phase, reveal another Secondary Objective and shuffle Calling Shots back into the Secondary Objective Deck.",
            "No final da Fase de Movimento da Horda, escolha uma ou mais unidades da Horda. Marque-as com um token de lembrete e acompanhe o número escolhido de unidades, X. Mantenha uma contagem da quantidade de unidades marcadas destruídas durante a rodada de batalha. Se a contagem no final da rodada de batalha for igual a X, esta missão é bem-sucedida. Se Chamando os Tiros for revelado após a Fase de Movimento da Horda, revele outro Objetivo Secundário e embaralhe Chamando os Tiros de volta no Baralho de Objetivo Secundário.",
        ),
        reward: Bilingual::new(
            "(X * 2) SP",
            "(X * 2) SP",
        ),
        punishment: Bilingual::new(
            "+X Misery cards, +X to Spawn Rolls",
            "+X Cartas de Miséria, +X nas Rolagens de Geração",
        ),
        tags: &[MissionTag::SpReward, MissionTag::Combat, MissionTag::SpawnModifier, MissionTag::MiseryPunishment],
        timing: ResolutionTiming::EndOfRound,
        first_round_valid: false,
    },
    SecondaryMission {
        id: 19,
        name: Bilingual::new("Dive Into Hell", "Mergulhar no Inferno"),
        condition: Bilingual::new(
            "If a Player unit entered the battlefield from Reserves for any reason this battle round and is still on the battlefield at the end of the battle round this mission is successful. If this Secondary Mission is drawn during the first battle round, reveal another Secondary Mission card, then shuffle this back into the Secondary Mission deck.",
            "Se uma unidade de Jogador entrou no campo de batalha das Reservas por qualquer motivo nesta rodada de batalha e ainda está no campo de batalha no final da rodada de batalha, esta missão é bem-sucedida. Se esta Missão Secundária for comprada durante a primeira rodada de batalha, revele outra carta de Missão Secundária, então embaralhe esta de volta no baralho de Missão Secundária.",
        ),
        reward: Bilingual::new(
            "1SP, One random player saves this card. You may discard this card during the Resupply step to make a Strike purchase without paying SP.",
            "1SP, Um jogador aleatório guarda esta carta. Você pode descartar esta carta durante a etapa de Reabastecimento para fazer uma compra de Ataque sem pagar SP.",
        ),
        punishment: Bilingual::new(
            "+1 Misery card",
            "+1 Carta de Miséria",
        ),
        tags: &[MissionTag::SpReward, MissionTag::MiseryPunishment],
        timing: ResolutionTiming::EndOfRound,
        first_round_valid: false,
    },
    SecondaryMission {
        id: 20,
        name: Bilingual::new("Insane Gambit", "Aposta Insana"),
        condition: Bilingual::new(
            "In your shooting phase pick a friendly unit within range of an objective marker to perform an action, Scuttle the Objective. This action is completed at the end of your turn. If this action is successful, destroy the objective marker and this mission is successful.",
            "Na sua fase de tiro, escolha uma unidade aliada dentro do alcance de um marcador de objetivo para realizar uma ação, Sabotar o Objetivo. Esta ação é completada no final do seu turno. Se esta ação for bem-sucedida, destrua o marcador de objetivo e esta missão é bem-sucedida.",
        ),
        reward: Bilingual::new(
            "4SP, One random player saves this card. You may discard this card during the Resupply step to make a Fortify purchase without paying SP.",
            "4SP, Um jogador aleatório guarda esta carta. Você pode descartar esta carta durante a etapa de Reabastecimento para fazer uma compra de Fortificação sem pagar SP.",
        ),
        punishment: Bilingual::new(
            "+2 Misery cards",
            "+2 Cartas de Miséria",
        ),
        tags: &[MissionTag::SpReward, MissionTag::Action, MissionTag::Objective, MissionTag::MiseryPunishment],
        timing: ResolutionTiming::EndOfRound,
        first_round_valid: true,
    },
];
