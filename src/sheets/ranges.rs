// Ranges are hardcoded A1 literals to match the sheet layout exactly; the
// sheet is the single source of truth for where each field lives.

pub mod add_liquidity {
    /// Two rows: the TRUE/FALSE flag, then the pool address.
    pub const RO_FLAG_AND_ADDRESS: &str = "addLiquidity!D18:D19";
    pub const RW_FLAG: &str = "addLiquidity!D18";
    pub const RW_STATUS: &str = "addLiquidity!F18";
    /// symbol / decimals / address / price, one column per pool side.
    pub const RW_TOKEN0_BLOCK: &str = "addLiquidity!D20:D23";
    pub const RW_TOKEN1_BLOCK: &str = "addLiquidity!D25:D28";
}

pub mod remove_liquidity {
    pub const RO_FLAG_AND_ADDRESS: &str = "removeLiquidity!D12:D13";
    pub const RW_FLAG: &str = "removeLiquidity!D12";
    pub const RW_STATUS: &str = "removeLiquidity!F12";
    /// symbol / decimals / address / reserve / price per side, then supply.
    pub const RW_RESULT_BLOCK: &str = "removeLiquidity!D14:D24";
}
