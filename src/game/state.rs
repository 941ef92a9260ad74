// Score, automation, and debounce bookkeeping
//
// Kept separate from the entity list so the rules can be tested on their own.

/// Everything about a run except the jellyfish themselves
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// One point per spawned jellyfish. Never decreases.
    pub score: f64,
    /// Once true, stays true
    pub automation: bool,
    /// Jellyfish spawned per automatic tick
    pub automation_rate: u32,
    /// Whether the pointer was held on the previous update
    pub clicked: bool,
    /// Wall-clock second of the last automatic tick
    pub last_tick_second: u32,
}

impl GameState {
    pub fn new(start_second: u32) -> Self {
        GameState {
            score: 0.0,
            automation: false,
            automation_rate: 0,
            clicked: false,
            last_tick_second: start_second,
        }
    }

    pub fn record_spawn(&mut self) {
        self.score += 1.0;
    }

    /// Turns automation on the first time the score passes `threshold`
    ///
    /// Returns true only on the call that performs the transition.
    pub fn try_enable_automation(&mut self, threshold: f64, increment: u32) -> bool {
        if !self.automation && self.score > threshold {
            self.automation = true;
            self.automation_rate += increment;
            true
        } else {
            false
        }
    }

    /// Feeds the current button state, returns true on a fresh press
    pub fn register_press(&mut self, pressed: bool) -> bool {
        let fresh = pressed && !self.clicked;
        self.clicked = pressed;
        fresh
    }

    /// Returns true when automation is on and the second has moved on
    pub fn take_tick(&mut self, second: u32) -> bool {
        if !self.automation || second == self.last_tick_second {
            return false;
        }
        self.last_tick_second = second;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_is_edge_triggered() {
        let mut state = GameState::new(0);
        assert!(state.register_press(true));
        assert!(!state.register_press(true));
        assert!(!state.register_press(true));
        assert!(!state.register_press(false));
        assert!(state.register_press(true));
    }

    #[test]
    fn test_automation_turns_on_once() {
        let mut state = GameState::new(0);
        state.score = 100.0;
        assert!(!state.try_enable_automation(100.0, 1));
        assert_eq!(state.automation_rate, 0);

        state.record_spawn();
        assert!(state.try_enable_automation(100.0, 1));
        assert!(state.automation);
        assert_eq!(state.automation_rate, 1);

        state.record_spawn();
        assert!(!state.try_enable_automation(100.0, 1));
        assert_eq!(state.automation_rate, 1);
    }

    #[test]
    fn test_tick_needs_automation() {
        let mut state = GameState::new(5);
        assert!(!state.take_tick(6));
        assert_eq!(state.last_tick_second, 5);

        state.automation = true;
        assert!(!state.take_tick(5));
        assert!(state.take_tick(6));
        assert!(!state.take_tick(6));
        assert_eq!(state.last_tick_second, 6);
    }

    #[test]
    fn test_tick_on_minute_wrap() {
        let mut state = GameState::new(59);
        state.automation = true;
        assert!(state.take_tick(0));
    }
}
