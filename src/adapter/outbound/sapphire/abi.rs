//! Contract bindings used by the Sapphire adapters.

use alloy_sol_types::sol;

// ERC-20 interface (minimal for approval)
sol! {
    #[sol(rpc)]
    contract IERC20 {
        function approve(address spender, uint256 amount) external returns (bool);
    }
}

sol! {
    #[sol(rpc)]
    contract ROFLSwap {
        function placeOrder(bytes encryptedOrder) external returns (uint256);
    }
}
