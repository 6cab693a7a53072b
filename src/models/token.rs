use serde::{Deserialize, Serialize};

use crate::models::Order;

fn default_decimals() -> u8 {
    18
}

/// One side of the active trading pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenDescriptor {
    /// Token contract address, compared verbatim against order legs.
    pub address: String,
    /// Smallest-unit scale. ERC-20 style tokens default to 18.
    #[serde(default = "default_decimals")]
    pub decimals: u8,
    /// Display symbol, when the ingestion layer knows one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

impl TokenDescriptor {
    pub fn new(address: &str) -> Self {
        Self {
            address: address.to_string(),
            decimals: 18,
            symbol: None,
        }
    }

    pub fn name(&self) -> &str {
        match &self.symbol {
            Some(symbol) => symbol,
            None => &self.address,
        }
    }
}

/// The user's current token selection: 0, 1, or 2 tokens chosen.
///
/// Every derived view is defined only once both tokens are set; a partial
/// selection is a legitimate steady state, not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenSelection {
    pub token0: Option<TokenDescriptor>,
    pub token1: Option<TokenDescriptor>,
}

impl TokenSelection {
    pub fn select(token0: TokenDescriptor, token1: TokenDescriptor) -> Self {
        Self {
            token0: Some(token0),
            token1: Some(token1),
        }
    }

    /// The active pair, when both tokens are chosen.
    pub fn pair(&self) -> Option<TokenPair> {
        match (&self.token0, &self.token1) {
            (Some(token0), Some(token1)) => Some(TokenPair {
                token0: token0.clone(),
                token1: token1.clone(),
            }),
            _ => None,
        }
    }
}

/// A fully selected base/quote pair: token0 is the asset being priced,
/// token1 the pricing currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenPair {
    pub token0: TokenDescriptor,
    pub token1: TokenDescriptor,
}

impl TokenPair {
    pub fn new(token0: TokenDescriptor, token1: TokenDescriptor) -> Self {
        Self { token0, token1 }
    }

    pub fn involves(&self, address: &str) -> bool {
        address == self.token0.address || address == self.token1.address
    }

    /// Both legs of the swap stay inside the pair.
    pub fn contains_order(&self, order: &Order) -> bool {
        self.involves(&order.token_get) && self.involves(&order.token_give)
    }

    /// "DAPP/mETH"-style label for logs and exports.
    pub fn label(&self) -> String {
        format!("{}/{}", self.token0.name(), self.token1.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Order, TokenAmount};

    #[test]
    fn test_pair_requires_both_tokens() {
        let mut selection = TokenSelection::default();
        assert!(selection.pair().is_none());

        selection.token0 = Some(TokenDescriptor::new("0xaaa"));
        assert!(selection.pair().is_none());

        selection.token1 = Some(TokenDescriptor::new("0xbbb"));
        let pair = selection.pair().expect("both tokens chosen");
        assert_eq!(pair.token0.address, "0xaaa");
        assert_eq!(pair.token1.address, "0xbbb");
    }

    #[test]
    fn test_contains_order_rejects_foreign_legs() {
        let pair = TokenPair::new(TokenDescriptor::new("0xaaa"), TokenDescriptor::new("0xbbb"));
        let inside = Order::new(
            1u64,
            "0xuser",
            "0xaaa",
            TokenAmount::new(1),
            "0xbbb",
            TokenAmount::new(1),
            0,
        );
        let outside = Order::new(
            2u64,
            "0xuser",
            "0xaaa",
            TokenAmount::new(1),
            "0xccc",
            TokenAmount::new(1),
            0,
        );
        assert!(pair.contains_order(&inside));
        assert!(!pair.contains_order(&outside));
    }

    #[test]
    fn test_label_prefers_symbol() {
        let mut token0 = TokenDescriptor::new("0xaaa");
        token0.symbol = Some("DAPP".to_string());
        let pair = TokenPair::new(token0, TokenDescriptor::new("0xbbb"));
        assert_eq!(pair.label(), "DAPP/0xbbb");
    }

    #[test]
    fn test_descriptor_decimals_default_from_json() {
        let token: TokenDescriptor = serde_json::from_str(r#"{"address":"0xaaa"}"#).unwrap();
        assert_eq!(token.decimals, 18);
    }
}
