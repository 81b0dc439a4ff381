//! Collaborators the game loop talks to

use crate::events::BattleEvent;

/// Where player menu answers come from
pub trait ChoiceSource {
    /// Show `menu` and wait for one answer; `None` once input has closed
    fn prompt_choice(&mut self, menu: &str) -> Option<String>;
}

/// Where battle events go
pub trait Reporter {
    fn report(&mut self, event: &BattleEvent);
}

/// Collects events in order
impl Reporter for Vec<BattleEvent> {
    fn report(&mut self, event: &BattleEvent) {
        self.push(event.clone());
    }
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, event: &BattleEvent) {
        (**self).report(event);
    }
}

impl<C: ChoiceSource + ?Sized> ChoiceSource for &mut C {
    fn prompt_choice(&mut self, menu: &str) -> Option<String> {
        (**self).prompt_choice(menu)
    }
}
