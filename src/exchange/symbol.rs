//! Canonical-to-native symbol translation.

/// One row of the translation table: how a given exchange spells the
/// canonical quote currency and the pair separator.
#[derive(Debug, Clone)]
pub struct MappingRule {
    pub exchange: String,
    pub canonical_quote: String,
    pub native_quote: String,
    pub separator: String,
}

/// Deterministic, total translation of canonical symbols (`BASE/QUOTE`)
/// into exchange-native syntax. New exchanges are additive table rows,
/// not new logic.
#[derive(Debug, Clone, Default)]
pub struct SymbolMapper {
    rules: Vec<MappingRule>,
}

pub const CANONICAL_SEPARATOR: &str = "/";

impl SymbolMapper {
    pub fn new(rules: Vec<MappingRule>) -> Self {
        Self { rules }
    }

    /// Table for the reference exchange pair: Binance concatenates the pair
    /// and keeps USDT; Coinbase Exchange quotes in USD with a dash.
    pub fn default_rules() -> Self {
        Self::new(vec![
            MappingRule {
                exchange: super::binance::NAME.into(),
                canonical_quote: "USDT".into(),
                native_quote: "USDT".into(),
                separator: "".into(),
            },
            MappingRule {
                exchange: super::coinbase::NAME.into(),
                canonical_quote: "USDT".into(),
                native_quote: "USD".into(),
                separator: "-".into(),
            },
        ])
    }

    /// Translate `canonical` for `exchange`. Unknown exchanges pass the
    /// symbol through unchanged.
    pub fn to_native(&self, canonical: &str, exchange: &str) -> String {
        match self.rules.iter().find(|r| r.exchange == exchange) {
            Some(rule) => canonical
                .replace(&rule.canonical_quote, &rule.native_quote)
                .replace(CANONICAL_SEPARATOR, &rule.separator),
            None => canonical.to_string(),
        }
    }
}
