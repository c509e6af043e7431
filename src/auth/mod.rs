pub mod claims;
pub mod jwt;
pub mod middleware;
pub mod utils;

pub use claims::Claims;
pub use jwt::JwtService;
pub use middleware::{AdminMiddleware, AuthMiddleware, AuthenticatedUser};
pub use utils::{has_admin_access, require_admin};
