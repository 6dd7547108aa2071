use super::GameState;
use crate::game::clamp_imposter_count;

impl GameState {
    /// Stored as given; clamped when a round is created
    pub fn set_imposter_count(&mut self, count: usize) {
        self.config.imposter_count = count;
    }

    pub fn set_show_category(&mut self, enabled: bool) {
        self.config.show_category = enabled;
    }

    /// An empty list selects every category
    pub fn set_selected_categories(&mut self, categories: Vec<String>) {
        self.config.selected_categories = categories;
    }

    /// The imposter count the next round will actually use
    pub fn effective_imposter_count(&self) -> usize {
        clamp_imposter_count(self.config.imposter_count, self.players.len())
    }
}

#[cfg(test)]
mod tests {
    use crate::state::test_state;

    #[test]
    fn test_setters_store_values_verbatim() {
        let mut state = test_state(5, 1);
        state.set_imposter_count(7);
        state.set_show_category(false);
        state.set_selected_categories(vec!["Food".to_string()]);

        assert_eq!(state.config().imposter_count, 7);
        assert!(!state.config().show_category);
        assert_eq!(state.config().selected_categories, vec!["Food"]);
    }

    #[test]
    fn test_effective_imposter_count() {
        let mut state = test_state(5, 1);
        state.set_imposter_count(3);
        assert_eq!(state.effective_imposter_count(), 1);

        let mut state = test_state(12, 1);
        state.set_imposter_count(3);
        assert_eq!(state.effective_imposter_count(), 3);

        state.set_imposter_count(0);
        assert_eq!(state.effective_imposter_count(), 1);
    }
}
