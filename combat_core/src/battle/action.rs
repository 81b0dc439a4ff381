//! Menus and the player's menu choices

use crate::abilities::AbilitySlot;

pub const CLASS_MENU: &str = "Choose your character:
1. Warrior
2. Mage
3. Archer
4. Paladin
Enter the number of your choice: ";

pub const ACTION_MENU: &str = "
Your turn! What will you do?
1. Attack
2. Heal
3. Use Ability 1
4. Use Ability 2
5. View Stats
Choose an action: ";

/// An action that consumes the player's turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    Attack,
    Heal,
    Ability(AbilitySlot),
}

/// A recognised entry from the action menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Act(PlayerAction),
    /// Show both stat lines and ask again
    ViewStats,
}

impl MenuChoice {
    /// Parse an action menu answer, ignoring surrounding whitespace
    pub fn parse(input: &str) -> Option<MenuChoice> {
        let choice = match input.trim() {
            "1" => MenuChoice::Act(PlayerAction::Attack),
            "2" => MenuChoice::Act(PlayerAction::Heal),
            "3" => MenuChoice::Act(PlayerAction::Ability(AbilitySlot::First)),
            "4" => MenuChoice::Act(PlayerAction::Ability(AbilitySlot::Second)),
            "5" => MenuChoice::ViewStats,
            _ => return None,
        };
        Some(choice)
    }
}
