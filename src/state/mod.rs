// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod session_state;
pub mod supply_state;
pub mod app_state;

pub use session_state::*;
pub use supply_state::*;
pub use app_state::*;
