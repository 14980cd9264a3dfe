pub mod session_refresh;
