//! HUD contents.
//!
//! The HUD is computed as plain data; drawing text is left to whatever
//! presents the frame.

use pgg_ecs::GameWorld;
use pgg_ecs::components::{Color, PlayerInfo, ProvinceInfo, Selected, palette};

use crate::turn::TurnSystem;

/// Title and key prompts shown on the main menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuPanel {
    pub title: &'static str,
    pub prompts: [&'static str; 2],
    pub title_color: Color,
}

impl Default for MenuPanel {
    fn default() -> Self {
        Self {
            title: "Procedural Strategy",
            prompts: ["Press ENTER to start", "Press ESCAPE to quit"],
            title_color: palette::HIGHLIGHT,
        }
    }
}

/// Current turn and player, drawn in the player's colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnPanel {
    pub turn_number: u32,
    pub player_name: String,
    pub gold: i32,
    pub color: Color,
}

/// Details of the selected province.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvincePanel {
    pub name: String,
    /// Owner's name, `None` for a neutral province.
    pub owner: Option<String>,
    /// Owner's colour, or the text colour when neutral.
    pub owner_color: Color,
}

impl ProvincePanel {
    /// Text for the owner line.
    #[must_use]
    pub fn owner_label(&self) -> &str {
        self.owner.as_deref().unwrap_or("Neutral")
    }
}

/// The turn panel, or `None` while there is no current player.
#[must_use]
pub fn turn_panel(world: &GameWorld, turns: &TurnSystem) -> Option<TurnPanel> {
    let player = world.get_component::<PlayerInfo>(turns.current_player()?)?;
    Some(TurnPanel {
        turn_number: turns.turn_number()?,
        player_name: player.name.clone(),
        gold: player.gold,
        color: player.color,
    })
}

/// The panel for the selected province, if one is selected.
///
/// If several provinces carry the marker the lowest entity id wins.
#[must_use]
pub fn selected_province(world: &GameWorld) -> Option<ProvincePanel> {
    let selected = world.query::<(Selected, ProvinceInfo)>().pop_first()?;
    let province = world.get_component::<ProvinceInfo>(selected)?;

    let owner = province
        .owner
        .and_then(|owner| world.get_component::<PlayerInfo>(owner));
    Some(ProvincePanel {
        name: province.name.clone(),
        owner: owner.map(|p| p.name.clone()),
        owner_color: owner.map_or(palette::TEXT, |p| p.color),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pgg_ecs::Entity;

    fn player(world: &mut GameWorld, name: &str, color: Color, rank: i32) -> Entity {
        let e = world.create_entity();
        world.add_component(e, PlayerInfo::new(name, color, rank));
        e
    }

    #[test]
    fn test_turn_panel_follows_current_player() {
        let mut world = GameWorld::new();
        player(&mut world, "Red", palette::PLAYER_ONE, 0);
        player(&mut world, "Cyan", palette::PLAYER_TWO, 1);
        let mut turns = TurnSystem::new();
        assert_eq!(turn_panel(&world, &turns), None);

        turns.update(&world);
        turns.end_turn(&world);
        assert_eq!(
            turn_panel(&world, &turns),
            Some(TurnPanel {
                turn_number: 1,
                player_name: "Cyan".to_string(),
                gold: 100,
                color: palette::PLAYER_TWO,
            })
        );
    }

    #[test]
    fn test_no_selection_no_panel() {
        let mut world = GameWorld::new();
        let p = world.create_entity();
        world.add_component(p, ProvinceInfo::new("P-0-0"));
        assert_eq!(selected_province(&world), None);

        // A marker on something that is not a province does not count.
        let other = world.create_entity();
        world.add_component(other, Selected);
        assert_eq!(selected_province(&world), None);
    }

    #[test]
    fn test_neutral_province_panel() {
        let mut world = GameWorld::new();
        let p = world.create_entity();
        world.add_component(p, ProvinceInfo::new("P-2-3"));
        world.add_component(p, Selected);

        let panel = selected_province(&world).unwrap();
        assert_eq!(panel.name, "P-2-3");
        assert_eq!(panel.owner_label(), "Neutral");
        assert_eq!(panel.owner_color, palette::TEXT);
    }

    #[test]
    fn test_owned_province_uses_owner_colour() {
        let mut world = GameWorld::new();
        let owner = player(&mut world, "Blue", palette::PLAYER_THREE, 0);
        let p = world.create_entity();
        let mut info = ProvinceInfo::new("P-0-1");
        info.owner = Some(owner);
        world.add_component(p, info);
        world.add_component(p, Selected);

        let panel = selected_province(&world).unwrap();
        assert_eq!(panel.owner_label(), "Blue");
        assert_eq!(panel.owner_color, palette::PLAYER_THREE);
    }

    #[test]
    fn test_owner_without_player_info_reads_as_neutral() {
        let mut world = GameWorld::new();
        let ghost = world.create_entity();
        world.delete_entity(ghost);
        let p = world.create_entity();
        let mut info = ProvinceInfo::new("P-4-4");
        info.owner = Some(ghost);
        world.add_component(p, info);
        world.add_component(p, Selected);

        assert_eq!(selected_province(&world).unwrap().owner, None);
    }

    #[test]
    fn test_menu_panel_text() {
        let menu = MenuPanel::default();
        assert_eq!(menu.title, "Procedural Strategy");
        assert_eq!(menu.title_color, palette::HIGHLIGHT);
    }
}
