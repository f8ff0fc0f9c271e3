pub mod app_state;
pub mod dashboard;
pub mod error;
pub mod health;
pub mod http_platform;
pub mod logger;
pub mod middleware;
pub mod routes;


pub use app_state::AppState;
pub use error::{PageError, Result, ServerError};
pub use http_platform::{HttpPlatform, RegisteredWidget};
pub use routes::build_router;
