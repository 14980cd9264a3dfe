pub mod session_reconciler;
pub mod session_store;
