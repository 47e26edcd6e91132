//! API middleware.

mod session;

pub use session::{
    require_employee, require_manager, resolve_goal, resolve_target, session_middleware,
    CurrentUser,
};
