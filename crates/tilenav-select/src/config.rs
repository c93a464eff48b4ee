/// Settings for a [`Selection`](crate::Selection).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SelectConfig {
    /// How many orthogonal steps the entity may move per turn.
    pub move_range: u32,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self { move_range: 3 }
    }
}

impl SelectConfig {
    /// Builder: set the move range.
    pub const fn with_move_range(mut self, steps: u32) -> Self {
        self.move_range = steps;
        self
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let cfg: SelectConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, SelectConfig::default());
        let cfg: SelectConfig = serde_json::from_str(r#"{"move_range":6}"#).unwrap();
        assert_eq!(cfg.move_range, 6);
    }
}
