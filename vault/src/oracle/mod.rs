use common_errors::ERROR_INVALID_PRICE;
use common_proxies::proxy_price_feed;

use crate::cache::Cache;

multiversx_sc::imports!();

/// Reads the three price feeds the vault depends on and normalizes their
/// answers to WAD.
#[multiversx_sc::module]
pub trait OracleModule: crate::storage::Storage + common_math::SharedMathModule {
    fn read_feed(&self, feed: ManagedAddress) -> ManagedDecimal<Self::Api, NumDecimals> {
        let answer = self
            .tx()
            .to(&feed)
            .typed(proxy_price_feed::PriceFeedProxy)
            .latest_answer()
            .returns(ReturnsResult)
            .sync_call_readonly();
        require!(answer > BigUint::zero(), ERROR_INVALID_PRICE);

        let decimals = self
            .tx()
            .to(&feed)
            .typed(proxy_price_feed::PriceFeedProxy)
            .decimals()
            .returns(ReturnsResult)
            .sync_call_readonly();

        self.normalize_answer(answer, decimals)
    }

    /// Collection floor in reference asset units, or the administrator override while it is enabled.
    fn get_floor_value(&self, cache: &mut Cache<Self>) -> ManagedDecimal<Self::Api, NumDecimals> {
        if let Some(value) = &cache.floor_value {
            return value.clone();
        }

        let value = if self.use_floor_override().get() {
            self.to_decimal_wad(self.floor_override().get())
        } else {
            self.read_feed(self.floor_feed().get())
        };
        cache.floor_value = Some(value.clone());

        value
    }

    fn get_reference_price(
        &self,
        cache: &mut Cache<Self>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if let Some(price) = &cache.reference_price {
            return price.clone();
        }

        let price = self.read_feed(self.reference_feed().get());
        cache.reference_price = Some(price.clone());

        price
    }

    fn get_boost_price(&self, cache: &mut Cache<Self>) -> ManagedDecimal<Self::Api, NumDecimals> {
        if let Some(price) = &cache.boost_price {
            return price.clone();
        }

        let price = self.read_feed(self.boost_feed().get());
        cache.boost_price = Some(price.clone());

        price
    }
}
