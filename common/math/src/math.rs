#![no_std]

use common_constants::{BPS_PRECISION, RAY, RAY_PRECISION, WAD, WAD_PRECISION};
use common_structs::Rate;

multiversx_sc::imports!();

/// Fixed-point helpers shared by every contract of the workspace.
///
/// All helpers truncate toward zero: a credit line computed here can only be
/// smaller than its exact rational value, never larger.
#[multiversx_sc::module]
pub trait SharedMathModule {
    fn mul_floor(
        &self,
        a: &ManagedDecimal<Self::Api, NumDecimals>,
        b: &ManagedDecimal<Self::Api, NumDecimals>,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let scaled_a = a.rescale(precision);
        let scaled_b = b.rescale(precision);

        let product = scaled_a.into_raw_units() * scaled_b.into_raw_units();
        let scaled = BigUint::from(10u64).pow(precision as u32);

        self.to_decimal(product / scaled, precision)
    }

    fn div_floor(
        &self,
        a: &ManagedDecimal<Self::Api, NumDecimals>,
        b: &ManagedDecimal<Self::Api, NumDecimals>,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let scaled_a = a.rescale(precision);
        let scaled_b = b.rescale(precision);

        let scaled = BigUint::from(10u64).pow(precision as u32);
        let numerator = scaled_a.into_raw_units() * &scaled;

        self.to_decimal(numerator / scaled_b.into_raw_units(), precision)
    }

    fn to_decimal(
        &self,
        value: BigUint,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        ManagedDecimal::from_raw_units(value, precision)
    }

    fn to_decimal_wad(&self, value: BigUint) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal(value, WAD_PRECISION)
    }

    fn to_decimal_ray(&self, value: BigUint) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal(value, RAY_PRECISION)
    }

    fn wad(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal(BigUint::from(WAD), WAD_PRECISION)
    }

    fn ray(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal(BigUint::from(RAY), RAY_PRECISION)
    }

    fn ray_zero(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal(BigUint::zero(), RAY_PRECISION)
    }

    /// Converts a rational rate into a RAY decimal, truncated.
    fn rate_to_ray(&self, rate: &Rate) -> ManagedDecimal<Self::Api, NumDecimals> {
        if rate.denominator == 0 {
            return self.ray_zero();
        }
        let raw = BigUint::from(RAY) * BigUint::from(rate.numerator)
            / BigUint::from(rate.denominator);
        self.to_decimal_ray(raw)
    }

    fn bps_to_ray(&self, bps: u64) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal(BigUint::from(bps), BPS_PRECISION)
            .rescale(RAY_PRECISION)
    }

    fn add_ray(
        &self,
        a: &ManagedDecimal<Self::Api, NumDecimals>,
        b: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let sum = a.rescale(RAY_PRECISION).into_raw_units() + b.rescale(RAY_PRECISION).into_raw_units();
        self.to_decimal_ray(sum)
    }

    /// `amount * rate`, where `rate` is a RAY decimal. Truncated.
    fn apply_ray_rate(
        &self,
        amount: &BigUint,
        rate: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> BigUint {
        let ray_rate = rate.rescale(RAY_PRECISION);
        amount * ray_rate.into_raw_units() / BigUint::from(RAY)
    }

    /// `amount * price`, where `price` is a WAD decimal. Truncated.
    fn apply_wad_price(
        &self,
        amount: &BigUint,
        price: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> BigUint {
        let wad_price = price.rescale(WAD_PRECISION);
        amount * wad_price.into_raw_units() / BigUint::from(WAD)
    }

    /// `amount / price`, where `price` is a WAD decimal. Truncated.
    fn divide_by_wad_price(
        &self,
        amount: &BigUint,
        price: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> BigUint {
        let wad_price = price.rescale(WAD_PRECISION);
        amount * &BigUint::from(WAD) / wad_price.into_raw_units()
    }

    /// Brings a raw feed answer with `decimals` decimals to WAD.
    fn normalize_answer(&self, answer: BigUint, decimals: u8) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal(answer, decimals as usize)
            .rescale(WAD_PRECISION)
    }

    fn get_min(
        &self,
        a: ManagedDecimal<Self::Api, NumDecimals>,
        b: ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if a < b {
            a
        } else {
            b
        }
    }
}
