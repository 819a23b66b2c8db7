/// Common shape of every per-contract config table: the three static
/// fields forwarded into its genesis section.
pub trait ContractConfig {
    fn name(&self) -> &str;
    fn address(&self) -> &str;
    fn description(&self) -> &str;
}
