//! Swap form state: amount input boundary, session, confirmation.

mod amount_input;
mod confirmation;
mod session;

pub use amount_input::AmountInput;
pub use confirmation::{
    SimulatedSwapBackend, SwapBackend, SwapConfirmer, SwapOrder, SwapReceipt,
};
pub use session::SwapSession;
