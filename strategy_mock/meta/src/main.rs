fn main() {
    multiversx_sc_meta_lib::cli_main::<strategy_mock::AbiProvider>();
}
