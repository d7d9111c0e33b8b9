use std::collections::HashMap;

use ethers::types::Address;

use crate::chain::client::parse_address;
use crate::chain::ChainError;

/// Address -> CoinGecko id mapping. Invariant: only addresses present here
/// can have a price resolved.
pub struct TokenTable(HashMap<Address, String>);

impl TokenTable {
    pub fn from_config(entries: &HashMap<String, String>) -> Result<Self, ChainError> {
        let mut table = HashMap::with_capacity(entries.len());
        for (address, id) in entries {
            table.insert(parse_address(address)?, id.clone());
        }
        Ok(Self(table))
    }

    pub fn price_id(&self, token: Address) -> Option<&str> {
        self.0.get(&token).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> TokenTable {
        TokenTable::from_config(&HashMap::from([
            (
                "0x6B175474E89094C44Da98b954EedeAC495271d0F".to_owned(),
                "dai".to_owned(),
            ),
            (
                // Same token, lowercase in the config file.
                "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2".to_owned(),
                "ethereum".to_owned(),
            ),
        ]))
        .unwrap()
    }

    #[test]
    fn resolves_known_tokens_regardless_of_case() {
        let table = table();
        let dai = parse_address("0x6b175474e89094c44da98b954eedeac495271d0f").unwrap();
        let weth = parse_address("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2").unwrap();
        assert_eq!(table.price_id(dai), Some("dai"));
        assert_eq!(table.price_id(weth), Some("ethereum"));
    }

    #[test]
    fn unknown_tokens_have_no_price_id() {
        let table = table();
        let frax = parse_address("0x853d955aCEf822Db058eb8505911ED77F175b99e").unwrap();
        assert_eq!(table.price_id(frax), None);
    }

    #[test]
    fn bad_config_addresses_are_rejected() {
        let result = TokenTable::from_config(&HashMap::from([(
            "dai".to_owned(),
            "not-an-address".to_owned(),
        )]));
        assert!(result.is_err());
    }
}
