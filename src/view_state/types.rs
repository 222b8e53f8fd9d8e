//! Presentation newtypes.

use crate::config::TableConfig;

/// Horizontal indentation of an expanded entry, in pixels.
///
/// Top-level entries sit at the base indent; each structured-value nesting
/// level adds twice the base indent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Indent(u32);

impl Indent {
    /// Indent of a top-level expanded entry.
    pub fn base(config: &TableConfig) -> Self {
        Self(config.base_indent)
    }

    /// Indent of a child entry nested under this one.
    pub fn child(&self, config: &TableConfig) -> Self {
        Self(self.0 + 2 * config.base_indent)
    }

    /// Inset of the separator rule belonging to an entry at this indent.
    pub fn rule_inset(&self, config: &TableConfig) -> u32 {
        self.0.saturating_sub(config.indent_offset)
    }

    pub fn px(&self) -> u32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_indent_comes_from_config() {
        let config = TableConfig::default();
        assert_eq!(Indent::base(&config).px(), 50);
    }

    #[test]
    fn each_nesting_level_adds_twice_the_base() {
        let config = TableConfig::default();
        let base = Indent::base(&config);
        assert_eq!(base.child(&config).px(), 150);
        assert_eq!(base.child(&config).child(&config).px(), 250);
    }

    #[test]
    fn rule_inset_saturates_at_zero() {
        let config = TableConfig {
            base_indent: 10,
            indent_offset: 25,
            ..Default::default()
        };
        assert_eq!(Indent::base(&config).rule_inset(&config), 0);
    }
}
